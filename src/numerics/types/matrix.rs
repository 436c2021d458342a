// src/numerics/types/matrix.rs
// Row-major 3x3 matrix with the principal-axis rotation constructors.

use core::ops::Mul;
use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use super::vector::Vector3;

/// Row-major 3x3 matrix. `data[i][j]` is row `i`, column `j`.
///
/// Multiplying by a [`Vector3`] on the right is the usual matrix-vector
/// product, which is how a rotation matrix is applied to a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3x3<T: FloatingPoint = f64> {
    pub data: [[T; 3]; 3],
}

impl<T: FloatingPoint> Matrix3x3<T> {
    pub fn new(data: [[T; 3]; 3]) -> Self {
        Self { data }
    }

    /// Construct a new matrix from 3 rows
    pub fn from_rows(r0: [T; 3], r1: [T; 3], r2: [T; 3]) -> Self {
        Self { data: [r0, r1, r2] }
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [T; 3] {
        self.data[idx]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [T; 3] {
        [self.data[0][idx], self.data[1][idx], self.data[2][idx]]
    }

    /// Zero matrix
    pub fn zero() -> Self {
        Self { data: [[T::zero(); 3]; 3] }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        let mut data = [[T::zero(); 3]; 3];
        for (i, row) in data.iter_mut().enumerate() {
            row[i] = T::one();
        }
        Self { data }
    }

    /// Rotation by `theta` radians about the X axis.
    ///
    /// ```text
    /// | 1    0       0    |
    /// | 0  cos θ  -sin θ  |
    /// | 0  sin θ   cos θ  |
    /// ```
    pub fn rotation_x(theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([l, o, o], [o, c, -s], [o, s, c])
    }

    /// Rotation by `theta` radians about the Y axis.
    ///
    /// ```text
    /// |  cos θ  0  sin θ |
    /// |    0    1    0   |
    /// | -sin θ  0  cos θ |
    /// ```
    pub fn rotation_y(theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([c, o, s], [o, l, o], [-s, o, c])
    }

    /// Rotation by `theta` radians about the Z axis.
    ///
    /// ```text
    /// | cos θ  -sin θ  0 |
    /// | sin θ   cos θ  0 |
    /// |   0       0    1 |
    /// ```
    pub fn rotation_z(theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([c, -s, o], [s, c, o], [o, o, l])
    }

    pub fn transpose(&self) -> Self {
        Self::from_rows(self.column(0), self.column(1), self.column(2))
    }

    pub fn determinant(&self) -> T {
        let m = &self.data;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Element-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| (*a - *b).abs() <= tolerance)
    }
}

// Serialized as the nested row arrays.
impl<T> Serialize for Matrix3x3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix3x3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[[T; 3]; 3]>::deserialize(deserializer)?;
        Ok(Matrix3x3 { data })
    }
}

impl<T: FloatingPoint> Mul<Vector3<T>> for Matrix3x3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        Vector3 {
            x: self.data[0][0] * rhs.x + self.data[0][1] * rhs.y + self.data[0][2] * rhs.z,
            y: self.data[1][0] * rhs.x + self.data[1][1] * rhs.y + self.data[1][2] * rhs.z,
            z: self.data[2][0] * rhs.x + self.data[2][1] * rhs.y + self.data[2][2] * rhs.z,
        }
    }
}

impl<T: FloatingPoint> Mul<Matrix3x3<T>> for Matrix3x3<T> {
    type Output = Matrix3x3<T>;

    fn mul(self, rhs: Matrix3x3<T>) -> Matrix3x3<T> {
        let mut result = [[T::zero(); 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.data[i][0] * rhs.data[0][j]
                    + self.data[i][1] * rhs.data[1][j]
                    + self.data[i][2] * rhs.data[2][j];
            }
        }
        Matrix3x3 { data: result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_matrix_roundtrip() {
        let config = bincode::config::standard();
        let m = Matrix3x3::new([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);

        let encoded = bincode::serde::encode_to_vec(m, config).unwrap();
        let (decoded, _): (Matrix3x3<f64>, usize) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();

        assert_eq!(m, decoded);
    }

    #[test]
    fn test_matrix_constructors_and_accessors() {
        let m = Matrix3x3::from_rows(
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        );

        assert_eq!(m.row(0), [1.0, 2.0, 3.0]);
        assert_eq!(m.column(1), [2.0, 5.0, 8.0]);
        assert_eq!(m.transpose().row(1), [2.0, 5.0, 8.0]);

        assert_eq!(Matrix3x3::<f64>::zero(), Matrix3x3::new([[0.0; 3]; 3]));
        assert_eq!(
            Matrix3x3::<f64>::identity(),
            Matrix3x3::new([[1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0]])
        );
    }

    #[test]
    fn test_matrix_vector_mul() {
        let m = Matrix3x3::from_rows(
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        );

        // Row sums: [6, 15, 24]
        assert_eq!(m * Vector3::new(1.0, 1.0, 1.0), Vector3::new(6.0, 15.0, 24.0));
    }

    #[test]
    fn test_matrix_matrix_mul() {
        let a = Matrix3x3::from_rows(
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        );
        let b = Matrix3x3::from_rows(
            [9.0, 8.0, 7.0],
            [6.0, 5.0, 4.0],
            [3.0, 2.0, 1.0],
        );

        let c = a * b;

        assert_eq!(c.row(0), [30.0, 24.0, 18.0]);
        assert_eq!(c.row(1), [84.0, 69.0, 54.0]);
        assert_eq!(c.row(2), [138.0, 114.0, 90.0]);
    }

    #[test]
    fn test_rotation_matrices_are_orthonormal() {
        let id = Matrix3x3::<f64>::identity();
        for theta in [0.0_f64, 0.3, FRAC_PI_2, -2.0, 7.5] {
            for r in [
                Matrix3x3::rotation_x(theta),
                Matrix3x3::rotation_y(theta),
                Matrix3x3::rotation_z(theta),
            ] {
                assert!((r.transpose() * r).approx_eq(&id, 1e-12));
                assert!((r.determinant() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_quarter_turn_matrices() {
        let ex = Vector3::new(1.0, 0.0, 0.0);
        let ey = Vector3::new(0.0, 1.0, 0.0);
        let ez = Vector3::new(0.0, 0.0, 1.0);

        assert!((Matrix3x3::rotation_x(FRAC_PI_2) * ey).approx_eq(&ez, 1e-12));
        assert!((Matrix3x3::rotation_y(FRAC_PI_2) * ez).approx_eq(&ex, 1e-12));
        assert!((Matrix3x3::rotation_z(FRAC_PI_2) * ex).approx_eq(&ey, 1e-12));
    }

    #[test]
    fn test_determinant_of_general_matrix() {
        let m = Matrix3x3::from_rows([2.0_f64, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]);
        assert!((m.determinant() - 6.0).abs() < 1e-12);
    }
}
