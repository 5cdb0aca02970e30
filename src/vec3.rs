use crate::float_types::{EPSILON, Real};
use crate::mat3::Mat3;
use crate::mat4::Mat4;
use crate::plane::Plane;
use crate::utility::{impl_approx_eq, radians_to_degrees};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3D vector (or point).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const POS_X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const NEG_X: Vec3 = Vec3::new(-1.0, 0.0, 0.0);
    pub const POS_Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const NEG_Y: Vec3 = Vec3::new(0.0, -1.0, 0.0);
    pub const POS_Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    pub const NEG_Z: Vec3 = Vec3::new(0.0, 0.0, -1.0);

    #[inline]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn length(self) -> Real {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn length_sq(self) -> Real {
        self.dot(self)
    }

    /// Unit-length copy. The zero vector stays zero.
    pub fn normalize(self) -> Self {
        if self.x == 0.0 && self.y == 0.0 && self.z == 0.0 {
            return self;
        }
        self * (1.0 / self.length())
    }

    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> Real {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn lerp(self, other: Self, t: Real) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn mul_components(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    #[inline]
    pub fn div_components(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    #[inline]
    pub fn scale(self, s: Real) -> Self {
        self * s
    }

    pub fn multiply_mat3(self, m: &Mat3) -> Self {
        Self::new(
            self.x * m.m[0] + self.y * m.m[3] + self.z * m.m[6],
            self.x * m.m[1] + self.y * m.m[4] + self.z * m.m[7],
            self.x * m.m[2] + self.y * m.m[5] + self.z * m.m[8],
        )
    }

    /// Transforms the point (x, y, z, 1); the resulting w is discarded.
    pub fn transform(self, m: &Mat4) -> Self {
        Self::new(
            self.x * m.m[0] + self.y * m.m[4] + self.z * m.m[8] + m.m[12],
            self.x * m.m[1] + self.y * m.m[5] + self.z * m.m[9] + m.m[13],
            self.x * m.m[2] + self.y * m.m[6] + self.z * m.m[10] + m.m[14],
        )
    }

    /// Transforms the direction (x, y, z, 0), ignoring translation.
    pub fn transform_normal(self, m: &Mat4) -> Self {
        Self::new(
            self.x * m.m[0] + self.y * m.m[4] + self.z * m.m[8],
            self.x * m.m[1] + self.y * m.m[5] + self.z * m.m[9],
            self.x * m.m[2] + self.y * m.m[6] + self.z * m.m[10],
        )
    }

    /// Transforms the point (x, y, z, 1) and projects the result back into w = 1.
    pub fn transform_coord(self, m: &Mat4) -> Self {
        let w = self.x * m.m[3] + self.y * m.m[7] + self.z * m.m[11] + m.m[15];
        self.transform(m) / w
    }

    /// Undoes [`transform`](Self::transform) for a rigid (rotation + translation) matrix.
    pub fn inverse_transform(self, m: &Mat4) -> Self {
        let v = Self::new(self.x - m.m[12], self.y - m.m[13], self.z - m.m[14]);
        v.inverse_transform_normal(m)
    }

    /// Undoes [`transform_normal`](Self::transform_normal) for a pure rotation.
    pub fn inverse_transform_normal(self, m: &Mat4) -> Self {
        Self::new(
            self.x * m.m[0] + self.y * m.m[1] + self.z * m.m[2],
            self.x * m.m[4] + self.y * m.m[5] + self.z * m.m[6],
            self.x * m.m[8] + self.y * m.m[9] + self.z * m.m[10],
        )
    }

    /// True when every component lies within the precision epsilon.
    pub fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() < EPSILON
            && (self.y - other.y).abs() < EPSILON
            && (self.z - other.z).abs() < EPSILON
    }

    /// Reflects about a unit-length surface normal.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Closest point on `plane` to `self`.
    pub fn project_onto_plane(self, plane: &Plane) -> Self {
        let n = plane.normal();
        let t = -(n.dot(self) + plane.d) / n.length_sq();
        self + n * t
    }

    /// Component of `self` along `onto`.
    pub fn project_onto_vec3(self, onto: Self) -> Self {
        onto * (self.dot(onto) / onto.length_sq())
    }

    pub fn distance_between(self, other: Self) -> Real {
        (other - self).length()
    }

    pub fn mid_point(self, other: Self) -> Self {
        (self + other) * 0.5
    }

    /// Pitch (x) and yaw (y) in degrees, each in [0, 360), that turn +Z towards `self`.
    pub fn horizontal_angle(self) -> Self {
        let mut yaw = radians_to_degrees(self.x.atan2(self.z));
        if yaw < 0.0 {
            yaw += 360.0;
        }
        if yaw >= 360.0 {
            yaw -= 360.0;
        }

        let z1 = (self.x * self.x + self.z * self.z).sqrt();
        let mut pitch = radians_to_degrees(z1.atan2(self.y)) - 90.0;
        if pitch < 0.0 {
            pitch += 360.0;
        }
        if pitch >= 360.0 {
            pitch -= 360.0;
        }

        Self::new(pitch, yaw, 0.0)
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, r: Self) -> Self {
        Self::new(self.x + r.x, self.y + r.y, self.z + r.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, r: Self) -> Self {
        Self::new(self.x - r.x, self.y - r.y, self.z - r.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Real> for Vec3 {
    type Output = Self;
    fn mul(self, s: Real) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Div<Real> for Vec3 {
    type Output = Self;
    fn div(self, s: Real) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, r: Self) {
        self.x += r.x;
        self.y += r.y;
        self.z += r.z;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, r: Self) {
        self.x -= r.x;
        self.y -= r.y;
        self.z -= r.z;
    }
}

impl MulAssign<Real> for Vec3 {
    fn mul_assign(&mut self, s: Real) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }
}

impl_approx_eq!(Vec3, fields: x, y, z);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(Vec3::POS_X.cross(Vec3::POS_Y), Vec3::POS_Z);
        assert_eq!(Vec3::POS_Y.cross(Vec3::POS_X), Vec3::NEG_Z);
    }

    #[test]
    fn transform_applies_translation_but_normal_does_not() {
        let m = Mat4::from_translation(1.0, 2.0, 3.0);
        assert_eq!(Vec3::ZERO.transform(&m), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::POS_X.transform_normal(&m), Vec3::POS_X);
    }

    #[test]
    fn inverse_transform_undoes_rigid_transform() {
        let m = Mat4::from_rotation_translation(
            &Mat3::from_rotation_z(0.7),
            Vec3::new(4.0, -2.0, 1.0),
        );
        let p = Vec3::new(0.5, 1.5, -3.0);
        let back = p.transform(&m).inverse_transform(&m);
        assert!((back - p).length() < 1e-5);
    }

    #[test]
    fn project_onto_plane_lands_on_plane() {
        let plane = Plane::new(0.0, 1.0, 0.0, -2.0);
        let p = Vec3::new(3.0, 7.0, -1.0).project_onto_plane(&plane);
        assert_eq!(p, Vec3::new(3.0, 2.0, -1.0));
    }

    #[test]
    fn horizontal_angle_of_axes() {
        let up_forward = Vec3::new(0.0, 1.0, 1.0).horizontal_angle();
        assert_eq!(up_forward.y, 0.0);
        assert!((up_forward.x - 315.0).abs() < 1e-3);
        let a = Vec3::POS_X.horizontal_angle();
        assert!((a.y - 90.0).abs() < 1e-4);
    }
}
