//! Rotation of points about the principal coordinate axes.
//!
//! The per-axis functions apply the standard right-handed rotation matrices
//! as closed-form scalar expressions. [`rotate`] is the string-keyed
//! dispatcher: the axis label is parsed once into an [`Axis`] and the
//! matching function is called.
//!
//! ```
//! use gyre::rotation::rotate;
//! use std::f64::consts::FRAC_PI_2;
//!
//! # fn main() -> Result<(), gyre::rotation::RotationError> {
//! let p = rotate((1.0, 0.6, 0.4), FRAC_PI_2, "z")?;
//! assert!((p.x + 0.6).abs() < 1e-9);
//! assert!((p.y - 1.0).abs() < 1e-9);
//! assert!((p.z - 0.4).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```
//!
//! All functions are pure. NaN or infinite input is not checked here and
//! propagates through the arithmetic; use a [`Rotator`] configured with
//! [`RotatorConfig::strict`] to reject it instead.

pub mod axis;
pub mod config;
pub mod error;

pub use axis::Axis;
pub use config::{AngleUnit, RotatorConfig};
pub use error::RotationError;

use crate::numerics::types::point::Point3;
use crate::numerics::types::traits::FloatingPoint;

/// Rotate `point` by `theta` radians about the X axis.
///
/// The x coordinate is returned unchanged.
pub fn rotate_about_x<T: FloatingPoint>(point: impl Into<Point3<T>>, theta: T) -> Point3<T> {
    let p = point.into();
    let (s, c) = theta.sin_cos();
    Point3::new(p.x, p.y * c - p.z * s, p.y * s + p.z * c)
}

/// Rotate `point` by `theta` radians about the Y axis.
///
/// The y coordinate is returned unchanged.
pub fn rotate_about_y<T: FloatingPoint>(point: impl Into<Point3<T>>, theta: T) -> Point3<T> {
    let p = point.into();
    let (s, c) = theta.sin_cos();
    Point3::new(p.x * c + p.z * s, p.y, p.z * c - p.x * s)
}

/// Rotate `point` by `theta` radians about the Z axis.
///
/// The z coordinate is returned unchanged.
pub fn rotate_about_z<T: FloatingPoint>(point: impl Into<Point3<T>>, theta: T) -> Point3<T> {
    let p = point.into();
    let (s, c) = theta.sin_cos();
    Point3::new(p.x * c - p.y * s, p.x * s + p.y * c, p.z)
}

/// Rotate `point` by `theta` radians about `axis`.
pub fn rotate_about<T: FloatingPoint>(point: impl Into<Point3<T>>, theta: T, axis: Axis) -> Point3<T> {
    tracing::trace!(%axis, theta = ?theta, "rotating point");
    match axis {
        Axis::X => rotate_about_x(point, theta),
        Axis::Y => rotate_about_y(point, theta),
        Axis::Z => rotate_about_z(point, theta),
    }
}

/// Rotate `point` by `theta` radians about the axis named by `axis`.
///
/// `axis` is matched case-insensitively against `x`, `y` and `z`. Any other
/// label fails with [`RotationError::InvalidAxis`] before anything is
/// computed.
pub fn rotate<T: FloatingPoint>(
    point: impl Into<Point3<T>>,
    theta: T,
    axis: &str,
) -> Result<Point3<T>, RotationError> {
    let axis: Axis = axis.parse()?;
    Ok(rotate_about(point, theta, axis))
}

/// Configured entry point to the rotation functions.
///
/// A default `Rotator` is equivalent to calling [`rotate`] and
/// [`rotate_about`] directly.
///
/// ```
/// use gyre::rotation::{Rotator, RotatorConfig, RotationError};
///
/// let degrees = Rotator::with_config(RotatorConfig::degrees());
/// let p = degrees.rotate((1.0, 0.0, 0.0), 90.0_f64, "z").unwrap();
/// assert!(p.x.abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
///
/// let strict = Rotator::with_config(RotatorConfig::strict());
/// assert!(matches!(
///     strict.rotate((f64::NAN, 0.0, 0.0), 1.0, "x"),
///     Err(RotationError::NonFiniteInput { what: "x", .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rotator {
    config: RotatorConfig,
}

impl Rotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RotatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RotatorConfig {
        &self.config
    }

    /// Rotate `point` by `angle` (in the configured unit) about the axis
    /// named by `axis`. The axis is validated before the numeric input.
    pub fn rotate<T: FloatingPoint>(
        &self,
        point: impl Into<Point3<T>>,
        angle: T,
        axis: &str,
    ) -> Result<Point3<T>, RotationError> {
        let axis: Axis = axis.parse()?;
        self.rotate_about(point, angle, axis)
    }

    /// Rotate `point` by `angle` (in the configured unit) about `axis`.
    ///
    /// Only fails when the configuration rejects non-finite input.
    pub fn rotate_about<T: FloatingPoint>(
        &self,
        point: impl Into<Point3<T>>,
        angle: T,
        axis: Axis,
    ) -> Result<Point3<T>, RotationError> {
        let point = point.into();
        if self.config.reject_non_finite {
            check_finite(&point, angle)?;
        }
        let theta = match self.config.angle_unit {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle.to_radians(),
        };
        Ok(rotate_about(point, theta, axis))
    }
}

fn check_finite<T: FloatingPoint>(point: &Point3<T>, angle: T) -> Result<(), RotationError> {
    let inputs = [("x", point.x), ("y", point.y), ("z", point.z), ("angle", angle)];
    match inputs.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((what, value)) => {
            let value = value.to_f64();
            tracing::debug!(what, value, "rejected non-finite rotation input");
            Err(RotationError::NonFiniteInput { what, value })
        }
        None => Ok(()),
    }
}
