/// Unit in which a [`Rotator`](super::Rotator) interprets its angle argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// Configuration for a [`Rotator`](super::Rotator).
///
/// The default configuration makes a `Rotator` behave exactly like the free
/// rotation functions: angles in radians and non-finite input passed through
/// to the floating point arithmetic unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatorConfig {
    /// Unit of the angle argument.
    pub angle_unit: AngleUnit,

    /// Reject NaN or infinite coordinates and angles with
    /// `RotationError::NonFiniteInput` instead of propagating them.
    pub reject_non_finite: bool,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            angle_unit: AngleUnit::Radians,
            reject_non_finite: false,
        }
    }
}

impl RotatorConfig {
    pub fn new(angle_unit: AngleUnit, reject_non_finite: bool) -> Self {
        Self {
            angle_unit,
            reject_non_finite,
        }
    }

    /// Radians, with non-finite input rejected.
    pub fn strict() -> Self {
        Self {
            angle_unit: AngleUnit::Radians,
            reject_non_finite: true,
        }
    }

    /// Degrees, with non-finite input propagated.
    pub fn degrees() -> Self {
        Self {
            angle_unit: AngleUnit::Degrees,
            reject_non_finite: false,
        }
    }
}
