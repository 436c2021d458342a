use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RotationError;
use crate::numerics::types::matrix::Matrix3x3;
use crate::numerics::types::traits::FloatingPoint;

/// One of the three principal coordinate axes.
///
/// Parsed from a case-insensitive label with [`FromStr`]; that parse is the
/// only place an axis string is validated. Serializes as the lowercase label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn all() -> [Self; 3] {
        [Axis::X, Axis::Y, Axis::Z]
    }

    /// Lowercase label, `"x"`, `"y"` or `"z"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// The rotation matrix for `theta` radians about this axis.
    pub fn rotation_matrix<T: FloatingPoint>(self, theta: T) -> Matrix3x3<T> {
        match self {
            Axis::X => Matrix3x3::rotation_x(theta),
            Axis::Y => Matrix3x3::rotation_y(theta),
            Axis::Z => Matrix3x3::rotation_z(theta),
        }
    }
}

impl FromStr for Axis {
    type Err = RotationError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => {
                tracing::debug!(label, "rejected rotation axis");
                Err(RotationError::InvalidAxis(label.to_string()))
            }
        }
    }
}

impl TryFrom<String> for Axis {
    type Error = RotationError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl From<Axis> for &'static str {
    fn from(axis: Axis) -> Self {
        axis.as_str()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("x".parse::<Axis>(), Ok(Axis::X));
        assert_eq!("X".parse::<Axis>(), Ok(Axis::X));
        assert_eq!("y".parse::<Axis>(), Ok(Axis::Y));
        assert_eq!("Y".parse::<Axis>(), Ok(Axis::Y));
        assert_eq!("z".parse::<Axis>(), Ok(Axis::Z));
        assert_eq!("Z".parse::<Axis>(), Ok(Axis::Z));
    }

    #[test]
    fn test_parse_rejects_other_labels() {
        for label in ["w", "", "xy", " x", "x ", "1", "ｘ"] {
            assert_eq!(
                label.parse::<Axis>(),
                Err(RotationError::InvalidAxis(label.to_string())),
                "label {:?}",
                label
            );
        }
    }

    #[test]
    fn test_invalid_axis_keeps_original_case() {
        let err = "W".parse::<Axis>().unwrap_err();
        assert_eq!(err, RotationError::InvalidAxis("W".to_string()));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for axis in Axis::all() {
            assert_eq!(axis.to_string().parse::<Axis>(), Ok(axis));
        }
    }

    #[test]
    fn test_rotation_matrix_dispatch() {
        assert_eq!(Axis::X.rotation_matrix(0.25_f64), Matrix3x3::rotation_x(0.25));
        assert_eq!(Axis::Y.rotation_matrix(0.25_f64), Matrix3x3::rotation_y(0.25));
        assert_eq!(Axis::Z.rotation_matrix(0.25_f64), Matrix3x3::rotation_z(0.25));
    }

    #[test]
    fn test_bincode_serializes_label() {
        let config = bincode::config::standard();
        let encoded = bincode::serde::encode_to_vec(Axis::Y, config).unwrap();
        let (label, _): (String, usize) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(label, "y");

        let upper = bincode::serde::encode_to_vec("Z", config).unwrap();
        let (axis, _): (Axis, usize) = bincode::serde::decode_from_slice(&upper, config).unwrap();
        assert_eq!(axis, Axis::Z);

        let bad = bincode::serde::encode_to_vec("w", config).unwrap();
        assert!(bincode::serde::decode_from_slice::<Axis, _>(&bad, config).is_err());
    }
}
