//! 3x3 matrices: rotation blocks and 2D homogeneous transforms.

use crate::errors::MathError;
use crate::float_types::Real;
use crate::quaternion::Quaternion;
use crate::utility::{almost_equal_eps, impl_approx_eq};
use crate::vec3::Vec3;
use core::ops::Mul;

/// Column-major 3x3 matrix: element (row, col) lives at `m[col * 3 + row]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    pub m: [Real; 9],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat3 {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        }
    }

    #[inline]
    pub const fn from_array(m: [Real; 9]) -> Self {
        Self { m }
    }

    #[inline]
    fn column(&self, c: usize) -> Vec3 {
        Vec3::new(self.m[c * 3], self.m[c * 3 + 1], self.m[c * 3 + 2])
    }

    pub fn determinant(&self) -> Real {
        self.column(0).dot(self.column(1).cross(self.column(2)))
    }

    /// Transposed cofactor matrix, so `self * adjugate == determinant * I`.
    pub fn adjugate(&self) -> Self {
        let (c0, c1, c2) = (self.column(0), self.column(1), self.column(2));
        // rows of the adjugate
        let r0 = c1.cross(c2);
        let r1 = c2.cross(c0);
        let r2 = c0.cross(c1);
        Self::from_array([r0.x, r1.x, r2.x, r0.y, r1.y, r2.y, r0.z, r1.z, r2.z])
    }

    /// Fails only when the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if det == 0.0 {
            log::debug!("mat3 inverse: determinant is exactly zero");
            return Err(MathError::SingularMatrix);
        }
        Ok(self.adjugate().scalar_multiply(1.0 / det))
    }

    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = self.m[row * 3 + col];
            }
        }
        Self::from_array(out)
    }

    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = (0..3)
                    .map(|k| self.m[k * 3 + row] * rhs.m[col * 3 + k])
                    .sum();
            }
        }
        Self::from_array(out)
    }

    pub fn scalar_multiply(&self, factor: Real) -> Self {
        Self::from_array(self.m.map(|v| v * factor))
    }

    /// Exact comparison with the identity.
    pub fn is_identity(&self) -> bool {
        self.m == Self::identity().m
    }

    /// Element-wise relative comparison, see [`almost_equal_eps`].
    pub fn approx_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(&a, &b)| almost_equal_eps(a, b, epsilon))
    }

    pub fn from_rotation_x(radians: Real) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_array([1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c])
    }

    pub fn from_rotation_y(radians: Real) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_array([c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c])
    }

    pub fn from_rotation_z(radians: Real) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_array([c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0])
    }

    pub fn from_axis_angle(axis: Vec3, radians: Real) -> Self {
        Self::from_quaternion(&Quaternion::from_axis_angle(axis, radians))
    }

    pub fn from_quaternion(q: &Quaternion) -> Self {
        let (xx, xy, xz, xw) = (q.x * q.x, q.x * q.y, q.x * q.z, q.x * q.w);
        let (yy, yz, yw) = (q.y * q.y, q.y * q.z, q.y * q.w);
        let (zz, zw) = (q.z * q.z, q.z * q.w);

        Self::from_array([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + zw),
            2.0 * (xz - yw),
            2.0 * (xy - zw),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + xw),
            2.0 * (xz + yw),
            2.0 * (yz - xw),
            1.0 - 2.0 * (xx + yy),
        ])
    }

    /// 2D scaling in homogeneous form.
    pub fn from_scaling(x: Real, y: Real) -> Self {
        Self::from_array([x, 0.0, 0.0, 0.0, y, 0.0, 0.0, 0.0, 1.0])
    }

    /// 2D translation in homogeneous form.
    pub fn from_translation(x: Real, y: Real) -> Self {
        Self::from_array([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, 1.0])
    }

    /// 2D anticlockwise rotation in homogeneous form.
    pub fn from_rotation(radians: Real) -> Self {
        Self::from_rotation_z(radians)
    }

    pub fn rotation_to_axis_angle(&self) -> (Vec3, Real) {
        Quaternion::from_rotation_matrix(self).to_axis_angle()
    }

    pub fn up(&self) -> Vec3 {
        Vec3::POS_Y.multiply_mat3(self).normalize()
    }

    pub fn right(&self) -> Vec3 {
        Vec3::POS_X.multiply_mat3(self).normalize()
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::POS_Z.multiply_mat3(self).normalize()
    }
}

impl Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl_approx_eq!(Mat3, array: m);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec2::Vec2;

    #[test]
    fn inverse_times_matrix_is_identity() {
        let m = Mat3::from_array([2.0, 0.0, 1.0, 1.0, 3.0, 0.0, 0.0, 1.0, 4.0]);
        let inv = m.inverse().expect("matrix is invertible");
        assert!((m * inv).approx_eq(&Mat3::identity(), 1e-5));
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = Mat3::from_array([1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 1.0]);
        assert_eq!(m.inverse(), Err(MathError::SingularMatrix));
    }

    #[test]
    fn homogeneous_translation_moves_points() {
        let p = Vec2::new(1.0, 1.0).transform(&Mat3::from_translation(2.0, -3.0));
        assert_eq!(p, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn axis_angle_round_trip() {
        let axis = Vec3::new(1.0, 2.0, 2.0).normalize();
        let (out_axis, angle) = Mat3::from_axis_angle(axis, 0.8).rotation_to_axis_angle();
        assert!((angle - 0.8).abs() < 1e-4);
        assert!((out_axis - axis).length() < 1e-4);
    }
}
