use glam::Vec3;
use springsheet::{input::InputState, simulation::Simulation, softbody::SoftBody};

fn main() {
    // Build the default 10x10 sheet
    let softbody = SoftBody::builder()
        .size(1.0, 1.0)
        .subdivisions(10, 10)
        .build()
        .unwrap();

    let mut simulation = Simulation::new(softbody, 0.012, 0.0).unwrap();

    // Push the bottom edge along +X for one second, then let it settle.
    let push = InputState {
        primary: true,
        ..Default::default()
    };

    let mut now = 0.0;
    while now < 5.0 {
        // an irregular frame rate
        now += 0.005 + 0.011 * ((now * 37.0) % 1.0);
        if now < 1.0 {
            simulation.advance(now, &push);
        } else {
            simulation.advance(now, &Vec3::ZERO);
        }
    }

    println!(
        "{} steps, kinetic energy {:.6}",
        simulation.steps(),
        simulation.softbody().kinetic_energy()
    );
}
