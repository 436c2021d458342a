//! Prelude for gyre
//!
//! Re-exports the value types, the rotation functions and their configuration.

pub use crate::numerics::types::matrix::Matrix3x3;
pub use crate::numerics::types::point::Point3;
pub use crate::numerics::types::traits::FloatingPoint;
pub use crate::numerics::types::vector::Vector3;

pub use crate::rotation::{
    rotate, rotate_about, rotate_about_x, rotate_about_y, rotate_about_z,
    AngleUnit, Axis, RotationError, Rotator, RotatorConfig,
};

// Common type aliases for frequently used instantiations
pub type Point3F32 = Point3<f32>;
pub type Point3F64 = Point3<f64>;
pub type Matrix3x3F32 = Matrix3x3<f32>;
pub type Matrix3x3F64 = Matrix3x3<f64>;
