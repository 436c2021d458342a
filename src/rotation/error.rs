/// Errors produced by the rotation API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RotationError {
    /// The axis label was not `x`, `y` or `z` (in any case).
    /// Carries the label exactly as it was supplied.
    #[error("invalid axis '{0}': expected one of 'x', 'y' or 'z'")]
    InvalidAxis(String),

    /// A coordinate or the angle was NaN or infinite. Only a strict
    /// [`Rotator`](super::Rotator) reports this.
    #[error("non-finite {what}: {value}")]
    NonFiniteInput { what: &'static str, value: f64 },
}
