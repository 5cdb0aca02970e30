//! Rotation quaternions.
//!
//! Stored as (x, y, z, w) with w the scalar part. Nothing here renormalizes
//! implicitly; call [`Quaternion::normalize`] after accumulating products.

use crate::errors::MathError;
use crate::float_types::{EPSILON, Real};
use crate::mat3::Mat3;
use crate::utility::impl_approx_eq;
use crate::vec3::Vec3;
use core::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    pub w: Real,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    #[inline]
    pub fn dot(self, other: Self) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length_sq(self) -> Real {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> Real {
        self.length_sq().sqrt()
    }

    /// Unit-length copy. A zero quaternion is returned unchanged.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return self;
        }
        self.scale(1.0 / length)
    }

    /// Multiplicative inverse; fails for the zero quaternion.
    pub fn inverse(self) -> Result<Self, MathError> {
        let length_sq = self.length_sq();
        if length_sq == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(self.conjugate().scale(1.0 / length_sq))
    }

    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    #[inline]
    pub fn scale(self, s: Real) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }

    /// Hamilton product `self * rhs`: applies `rhs` first, then `self`.
    pub fn multiply(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }

    /// Rotation of `radians` about `axis`. The axis is normalized first.
    pub fn from_axis_angle(axis: Vec3, radians: Real) -> Self {
        let axis = axis.normalize();
        let (sin, cos) = (radians * 0.5).sin_cos();
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Extracts the rotation held by a column-major 3x3 rotation matrix.
    pub fn from_rotation_matrix(m: &Mat3) -> Self {
        // m[col * 3 + row]
        let (m00, m10, m20) = (m.m[0], m.m[1], m.m[2]);
        let (m01, m11, m21) = (m.m[3], m.m[4], m.m[5]);
        let (m02, m12, m22) = (m.m[6], m.m[7], m.m[8]);

        let trace = m00 + m11 + m22;
        if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            Self::new((m21 - m12) * s, (m02 - m20) * s, (m10 - m01) * s, 0.25 / s)
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        }
    }

    /// Same composition as [`Mat4::from_yaw_pitch_roll`](crate::mat4::Mat4::from_yaw_pitch_roll):
    /// roll about Z first, then pitch about X, then yaw about Y.
    pub fn from_pitch_yaw_roll(pitch: Real, yaw: Real, roll: Real) -> Self {
        let q_yaw = Self::from_axis_angle(Vec3::POS_Y, yaw);
        let q_pitch = Self::from_axis_angle(Vec3::POS_X, pitch);
        let q_roll = Self::from_axis_angle(Vec3::POS_Z, roll);
        q_yaw * (q_pitch * q_roll)
    }

    /// Spherical interpolation along the shortest arc.
    pub fn slerp(self, other: Self, t: Real) -> Self {
        let mut cos_theta = self.dot(other);
        let mut end = other;
        if cos_theta < 0.0 {
            cos_theta = -cos_theta;
            end = other.scale(-1.0);
        }

        // nearly parallel: fall back to a normalized lerp
        if cos_theta > 1.0 - EPSILON * 16.0 {
            return (self.scale(1.0 - t) + end.scale(t)).normalize();
        }

        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        let a = ((1.0 - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        self.scale(a) + end.scale(b)
    }

    /// Axis and angle (radians) of the rotation. A zero rotation yields +Z and 0.
    pub fn to_axis_angle(self) -> (Vec3, Real) {
        let q = if self.w.abs() > 1.0 { self.normalize() } else { self };
        let scale = (q.x * q.x + q.y * q.y + q.z * q.z).sqrt();
        if scale < EPSILON {
            return (Vec3::POS_Z, 0.0);
        }
        let angle = 2.0 * q.w.clamp(-1.0, 1.0).acos();
        let axis = Vec3::new(q.x / scale, q.y / scale, q.z / scale).normalize();
        (axis, angle)
    }

    /// Shortest rotation taking direction `from` onto direction `to`.
    ///
    /// When the two are opposite, `fallback_axis` is used if given, otherwise an
    /// axis perpendicular to `from` is picked.
    pub fn rotation_between_vec3(from: Vec3, to: Vec3, fallback_axis: Option<Vec3>) -> Self {
        let v1 = from.normalize();
        let v2 = to.normalize();
        let d = v1.dot(v2);

        if d >= 1.0 {
            return Self::IDENTITY;
        }

        if d < EPSILON - 1.0 {
            let axis = match fallback_axis {
                Some(axis) => axis,
                None => {
                    let mut axis = Vec3::POS_X.cross(v1);
                    if axis.length_sq() < EPSILON {
                        axis = Vec3::POS_Y.cross(v1);
                    }
                    axis
                },
            };
            return Self::from_axis_angle(axis, crate::float_types::PI);
        }

        let s = ((1.0 + d) * 2.0).sqrt();
        let c = v1.cross(v2);
        Self::new(c.x / s, c.y / s, c.z / s, s * 0.5).normalize()
    }

    /// Rotates `v` by this (unit) quaternion.
    pub fn multiply_vec3(self, v: Vec3) -> Vec3 {
        let qv = Vec3::new(self.x, self.y, self.z);
        let uv = qv.cross(v);
        let uuv = qv.cross(uv);
        v + (uv * self.w + uuv) * 2.0
    }

    /// True when every component lies within the precision epsilon.
    pub fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() < EPSILON
            && (self.y - other.y).abs() < EPSILON
            && (self.z - other.z).abs() < EPSILON
            && (self.w - other.w).abs() < EPSILON
    }
}

impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Add for Quaternion {
    type Output = Self;
    fn add(self, r: Self) -> Self {
        Self::new(self.x + r.x, self.y + r.y, self.z + r.z, self.w + r.w)
    }
}

impl Sub for Quaternion {
    type Output = Self;
    fn sub(self, r: Self) -> Self {
        Self::new(self.x - r.x, self.y - r.y, self.z - r.z, self.w - r.w)
    }
}

impl_approx_eq!(Quaternion, fields: x, y, z, w);
