use crate::errors::MathError;
use crate::float_types::{EPSILON, Real};
use crate::mat4::Mat4;
use crate::utility::impl_approx_eq;
use core::ops::{Add, Mul, Neg, Sub};

/// A 4D vector, usually a homogeneous point or direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    pub w: Real,
}

impl Vec4 {
    pub const ZERO: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> Real {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    #[inline]
    pub fn length(self) -> Real {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn length_sq(self) -> Real {
        self.dot(self)
    }

    #[inline]
    pub fn lerp(self, other: Self, t: Real) -> Self {
        Self::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
            self.z + t * (other.z - self.z),
            self.w + t * (other.w - self.w),
        )
    }

    /// Unit-length copy. The zero vector stays zero.
    pub fn normalize(self) -> Self {
        if self == Self::ZERO {
            return self;
        }
        self * (1.0 / self.length())
    }

    /// Normalizes, then multiplies by `s`, so the result has length `|s|`.
    ///
    /// Use `v * s` for a plain scalar product.
    pub fn scaled_to_length(self, s: Real) -> Self {
        self.normalize() * s
    }

    #[inline]
    pub fn mul_components(self, other: Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }

    /// Component-wise quotient; fails if any divisor component is zero.
    pub fn div_components(self, other: Self) -> Result<Self, MathError> {
        if other.x == 0.0 || other.y == 0.0 || other.z == 0.0 || other.w == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::new(
            self.x / other.x,
            self.y / other.y,
            self.z / other.z,
            self.w / other.w,
        ))
    }

    /// `m * self` with `self` as a column vector.
    pub fn multiply_mat4(self, m: &Mat4) -> Self {
        let m = &m.m;
        Self::new(
            self.x * m[0] + self.y * m[4] + self.z * m[8] + self.w * m[12],
            self.x * m[1] + self.y * m[5] + self.z * m[9] + self.w * m[13],
            self.x * m[2] + self.y * m[6] + self.z * m[10] + self.w * m[14],
            self.x * m[3] + self.y * m[7] + self.z * m[11] + self.w * m[15],
        )
    }

    #[inline]
    pub fn transform(self, m: &Mat4) -> Self {
        self.multiply_mat4(m)
    }

    /// Transforms every vector of `vectors` in place.
    pub fn transform_slice(vectors: &mut [Vec4], m: &Mat4) {
        for v in vectors.iter_mut() {
            *v = v.transform(m);
        }
    }

    /// Strict band test: every component differs by less than the precision epsilon.
    pub fn approx_eq(self, other: Self) -> bool {
        (self.x < other.x + EPSILON && self.x > other.x - EPSILON)
            && (self.y < other.y + EPSILON && self.y > other.y - EPSILON)
            && (self.z < other.z + EPSILON && self.z > other.z - EPSILON)
            && (self.w < other.w + EPSILON && self.w > other.w - EPSILON)
    }
}

impl Add for Vec4 {
    type Output = Self;
    fn add(self, r: Self) -> Self {
        Self::new(self.x + r.x, self.y + r.y, self.z + r.z, self.w + r.w)
    }
}

impl Sub for Vec4 {
    type Output = Self;
    fn sub(self, r: Self) -> Self {
        Self::new(self.x - r.x, self.y - r.y, self.z - r.z, self.w - r.w)
    }
}

impl Neg for Vec4 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<Real> for Vec4 {
    type Output = Self;
    fn mul(self, s: Real) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl_approx_eq!(Vec4, fields: x, y, z, w);
