// src/numerics/types/traits.rs
// FloatingPoint abstraction shared by the numerics types and the rotation code.

/// FloatingPoint is the minimal set of floating point operations the
/// numerics types and the rotation functions need.
///
/// Implemented for `f32` and `f64`. The trigonometric and root functions
/// forward to the inherent methods of the primitive, so NaN and infinity
/// behave exactly as they do for the primitive type.
pub trait FloatingPoint:
Copy + PartialOrd + core::fmt::Debug
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;

    /// Simultaneous sine and cosine, `(sin, cos)`.
    fn sin_cos(self) -> (Self, Self);
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;
    fn to_radians(self) -> Self;

    /// Lossless widening used for diagnostics.
    fn to_f64(self) -> f64;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn sin_cos(self) -> (Self, Self) { f32::sin_cos(self) }
    fn sqrt(self) -> Self { f32::sqrt(self) }
    fn abs(self) -> Self { f32::abs(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn to_radians(self) -> Self { f32::to_radians(self) }
    fn to_f64(self) -> f64 { f64::from(self) }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn sin_cos(self) -> (Self, Self) { f64::sin_cos(self) }
    fn sqrt(self) -> Self { f64::sqrt(self) }
    fn abs(self) -> Self { f64::abs(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn to_radians(self) -> Self { f64::to_radians(self) }
    fn to_f64(self) -> f64 { self }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generic_sin_cos<T: FloatingPoint>(angle: T) -> (T, T) {
        angle.sin_cos()
    }

    #[test]
    fn test_sin_cos_matches_primitives() {
        let (s, c) = generic_sin_cos(0.5_f64);
        assert_eq!(s, 0.5_f64.sin());
        assert_eq!(c, 0.5_f64.cos());

        let (s, c) = generic_sin_cos(0.5_f32);
        assert_eq!(s, 0.5_f32.sin());
        assert_eq!(c, 0.5_f32.cos());
    }

    #[test]
    fn test_degrees_to_radians() {
        let r = FloatingPoint::to_radians(180.0_f64);
        assert!((r - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn test_non_finite_detection() {
        assert!(!FloatingPoint::is_finite(f64::NAN));
        assert!(!FloatingPoint::is_finite(f32::INFINITY));
        assert!(FloatingPoint::is_finite(1.0_f64));
        assert_eq!(FloatingPoint::to_f64(1.5_f32), 1.5_f64);
    }
}
