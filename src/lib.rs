//! # gyre
//!
//! Rotation of points in 3D space about the X, Y and Z axes.
//!
//! The crate is two layers:
//!
//! - [`numerics`]: generic `Vector3` / `Point3` / `Matrix3x3` value types over
//!   `f32` or `f64`, including the principal-axis rotation matrices.
//! - [`rotation`]: the rotation functions, the [`Axis`] selector and the
//!   configurable [`Rotator`].
//!
//! ```rust
//! use gyre::prelude::*;
//! use std::f64::consts::FRAC_PI_2;
//!
//! # fn main() -> Result<(), RotationError> {
//! let rotated = rotate((1.0, 0.6, 0.4), FRAC_PI_2, "X")?;
//! assert!(rotated.approx_eq(&Point3::new(1.0, -0.4, 0.6), 1e-9));
//!
//! assert!(rotate((1.0, 0.0, 0.0), FRAC_PI_2, "w").is_err());
//! # Ok(())
//! # }
//! ```

pub mod numerics;
pub mod prelude;
pub mod rotation;

pub use numerics::types::matrix::Matrix3x3;
pub use numerics::types::point::Point3;
pub use numerics::types::vector::Vector3;
pub use rotation::{rotate, rotate_about, Axis, RotationError, Rotator, RotatorConfig};

/// Version information for the gyre crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
