use glam::Vec3;

use crate::simulator::ForceSource;

/// Strength of the push applied while a button is held.
pub const DEFAULT_FORCE: f32 = 2.0;

/// Held state of the controls that push the driven edge of the sheet.
///
/// `primary` pushes along the positive axis, `secondary` along the negative
/// one. The axis is X, or Y while `alternate_axis` is held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub primary: bool,
    pub secondary: bool,
    pub alternate_axis: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn external_force(&self, magnitude: f32) -> Vec3 {
        let mut amount = 0.0;
        if self.primary {
            amount = magnitude;
        }
        // secondary wins when both are held
        if self.secondary {
            amount = -magnitude;
        }

        if self.alternate_axis {
            Vec3::new(0.0, amount, 0.0)
        } else {
            Vec3::new(amount, 0.0, 0.0)
        }
    }
}

impl ForceSource for InputState {
    fn external_force(&self) -> Vec3 {
        InputState::external_force(self, DEFAULT_FORCE)
    }
}

/// `InputState` with a custom push strength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledInput {
    pub state: InputState,
    pub magnitude: f32,
}

impl ForceSource for ScaledInput {
    fn external_force(&self) -> Vec3 {
        self.state.external_force(self.magnitude)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_idle_is_zero() {
        assert_eq!(ForceSource::external_force(&InputState::new()), Vec3::ZERO);
    }

    #[test]
    fn test_axis_selection() {
        let mut input = InputState {
            primary: true,
            ..Default::default()
        };
        assert_eq!(input.external_force(2.0), Vec3::new(2.0, 0.0, 0.0));

        input.alternate_axis = true;
        assert_eq!(input.external_force(2.0), Vec3::new(0.0, 2.0, 0.0));

        input.primary = false;
        input.secondary = true;
        assert_eq!(input.external_force(2.0), Vec3::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn test_secondary_wins() {
        let input = InputState {
            primary: true,
            secondary: true,
            alternate_axis: false,
        };
        assert_eq!(input.external_force(3.0), Vec3::new(-3.0, 0.0, 0.0));
    }

    #[test]
    fn test_scaled_input() {
        let scaled = ScaledInput {
            state: InputState {
                secondary: true,
                ..Default::default()
            },
            magnitude: 5.0,
        };
        assert_eq!(scaled.external_force(), Vec3::new(-5.0, 0.0, 0.0));
    }
}
