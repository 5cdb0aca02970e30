use crate::float_types::{EPSILON, Real};
use crate::mat3::Mat3;
use crate::utility::{degrees_to_radians, impl_approx_eq, radians_to_degrees};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector (or point).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: Real,
    pub y: Real,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);
    pub const POS_X: Vec2 = Vec2::new(1.0, 0.0);
    pub const NEG_X: Vec2 = Vec2::new(-1.0, 0.0);
    pub const POS_Y: Vec2 = Vec2::new(0.0, 1.0);
    pub const NEG_Y: Vec2 = Vec2::new(0.0, -1.0);

    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> Real {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn length_sq(self) -> Real {
        self.x * self.x + self.y * self.y
    }

    /// Unit-length copy. The zero vector stays zero.
    pub fn normalize(self) -> Self {
        if self.x == 0.0 && self.y == 0.0 {
            return self;
        }
        self * (1.0 / self.length())
    }

    #[inline]
    pub fn lerp(self, other: Self, t: Real) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn dot(self, other: Self) -> Real {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product of the two vectors.
    #[inline]
    pub fn cross(self, other: Self) -> Real {
        self.x * other.y - self.y * other.x
    }

    /// Component-wise product.
    #[inline]
    pub fn mul_components(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise quotient.
    #[inline]
    pub fn div_components(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    #[inline]
    pub fn scale(self, s: Real) -> Self {
        self * s
    }

    /// Treats `self` as the point (x, y, 1) and applies the 3x3 matrix.
    pub fn transform(self, m: &Mat3) -> Self {
        Self::new(
            self.x * m.m[0] + self.y * m.m[3] + m.m[6],
            self.x * m.m[1] + self.y * m.m[4] + m.m[7],
        )
    }

    /// Like [`transform`](Self::transform), then divides by the resulting w.
    pub fn transform_coord(self, m: &Mat3) -> Self {
        let w = self.x * m.m[2] + self.y * m.m[5] + m.m[8];
        let v = self.transform(m);
        Self::new(v.x / w, v.y / w)
    }

    /// True when both components lie within the precision epsilon of each other.
    pub fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }

    /// Rotates the point anticlockwise around `center` by `degrees`.
    pub fn rotate_by(self, degrees: Real, center: Self) -> Self {
        let radians = degrees_to_radians(degrees);
        let (sin, cos) = radians.sin_cos();
        let d = self - center;
        Self::new(
            d.x * cos - d.y * sin + center.x,
            d.x * sin + d.y * cos + center.y,
        )
    }

    /// Signed angle in degrees from `self` to `other`.
    pub fn degrees_between(self, other: Self) -> Real {
        if self.approx_eq(other) {
            return 0.0;
        }
        let a = self.normalize();
        let b = other.normalize();
        let cross = a.cross(b);
        let dot = a.dot(b).clamp(-1.0, 1.0);
        let angle = radians_to_degrees(dot.acos());
        if cross < 0.0 { -angle } else { angle }
    }

    pub fn distance_between(self, other: Self) -> Real {
        (other - self).length()
    }

    pub fn mid_point(self, other: Self) -> Self {
        (self + other) * 0.5
    }

    /// Reflects about a unit-length surface normal.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, r: Self) -> Self {
        Self::new(self.x + r.x, self.y + r.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, r: Self) -> Self {
        Self::new(self.x - r.x, self.y - r.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<Real> for Vec2 {
    type Output = Self;
    fn mul(self, s: Real) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

impl Div<Real> for Vec2 {
    type Output = Self;
    fn div(self, s: Real) -> Self {
        Self::new(self.x / s, self.y / s)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, r: Self) {
        self.x += r.x;
        self.y += r.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, r: Self) {
        self.x -= r.x;
        self.y -= r.y;
    }
}

impl MulAssign<Real> for Vec2 {
    fn mul_assign(&mut self, s: Real) {
        self.x *= s;
        self.y *= s;
    }
}

impl_approx_eq!(Vec2, fields: x, y);
