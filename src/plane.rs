//! Planes in implicit form `ax + by + cz + d = 0`.

use crate::errors::MathError;
use crate::float_types::{Real, tolerance};
use crate::mat4::Mat4;
use crate::utility::impl_approx_eq;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

/// The six clip planes of a view volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    Left,
    Right,
    Bottom,
    Top,
    Near,
    Far,
}

impl FrustumPlane {
    pub const ALL: [FrustumPlane; 6] = [
        FrustumPlane::Left,
        FrustumPlane::Right,
        FrustumPlane::Bottom,
        FrustumPlane::Top,
        FrustumPlane::Near,
        FrustumPlane::Far,
    ];
}

/// Which side of a plane a point falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointClassification {
    BehindPlane,
    OnPlane,
    InFrontOfPlane,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Plane {
    pub a: Real,
    pub b: Real,
    pub c: Real,
    pub d: Real,
}

impl Plane {
    #[inline]
    pub const fn new(a: Real, b: Real, c: Real, d: Real) -> Self {
        Self { a, b, c, d }
    }

    /// The (not necessarily unit) normal (a, b, c).
    #[inline]
    pub const fn normal(&self) -> Vec3 {
        Vec3::new(self.a, self.b, self.c)
    }

    /// Full 4D dot product with a homogeneous vector.
    pub fn dot(&self, v: Vec4) -> Real {
        self.a * v.x + self.b * v.y + self.c * v.z + self.d * v.w
    }

    /// Signed distance-like value of a point: `a*x + b*y + c*z + d`.
    pub fn dot_coord(&self, v: Vec3) -> Real {
        self.a * v.x + self.b * v.y + self.c * v.z + self.d
    }

    /// Dot product of the normal with a direction.
    pub fn dot_normal(&self, v: Vec3) -> Real {
        self.a * v.x + self.b * v.y + self.c * v.z
    }

    /// Plane with normal `normal` whose `d` term is `distance`.
    pub fn from_normal_and_distance(normal: Vec3, distance: Real) -> Self {
        Self::new(normal.x, normal.y, normal.z, distance)
    }

    pub fn from_point_and_normal(point: Vec3, normal: Vec3) -> Self {
        Self::new(normal.x, normal.y, normal.z, -normal.dot(point))
    }

    /// Plane through three points, normal following `(p2 - p1) × (p3 - p1)`.
    pub fn from_points(p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        let normal = (p2 - p1).cross(p3 - p1).normalize();
        Self::from_point_and_normal(p1, normal)
    }

    /// Intersection of the infinite line through `v1` and `v2` with the plane.
    /// `None` when the line is parallel to the plane.
    pub fn intersect_line(&self, v1: Vec3, v2: Vec3) -> Option<Vec3> {
        let n = self.normal();
        let direction = v2 - v1;
        let denominator = n.dot(direction);
        if denominator == 0.0 {
            return None;
        }
        let t = -(n.dot(v1) + self.d) / denominator;
        Some(v1 + direction * t)
    }

    /// Divides all four terms by the length of (a, b, c).
    pub fn normalize(&self) -> Result<Self, MathError> {
        let length = self.normal().length();
        if length == 0.0 {
            log::debug!("plane normalize: zero-length normal");
            return Err(MathError::DegeneratePlane);
        }
        Ok(self.scale(1.0 / length))
    }

    pub fn scale(&self, s: Real) -> Self {
        Self::new(self.a * s, self.b * s, self.c * s, self.d * s)
    }

    /// Classifies with the crate [`tolerance`] as the thickness of the plane.
    pub fn classify_point(&self, point: Vec3) -> PointClassification {
        let distance = self.dot_coord(point);
        let eps = tolerance();
        if distance > eps {
            PointClassification::InFrontOfPlane
        } else if distance < -eps {
            PointClassification::BehindPlane
        } else {
            PointClassification::OnPlane
        }
    }

    /// Clip plane of a projection matrix; see [`Mat4::extract_plane`].
    pub fn from_frustum(m: &Mat4, which: FrustumPlane) -> Result<Self, MathError> {
        m.extract_plane(which)
    }

    /// The single point shared by three planes, or `None` if two are parallel.
    pub fn intersection(p1: &Plane, p2: &Plane, p3: &Plane) -> Option<Vec3> {
        let (n1, n2, n3) = (p1.normal(), p2.normal(), p3.normal());
        let denominator = n1.dot(n2.cross(n3));
        if denominator == 0.0 {
            return None;
        }
        let numerator =
            n2.cross(n3) * -p1.d + n3.cross(n1) * -p2.d + n1.cross(n2) * -p3.d;
        Some(numerator / denominator)
    }
}

impl_approx_eq!(Plane, fields: a, b, c, d);
