//! 3D rays, covering `start + t * dir` for every `t >= 0`.

use crate::aabb::Aabb3;
use crate::float_types::{Real, tolerance};
use crate::plane::Plane;
use crate::vec3::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ray3 {
    pub start: Vec3,
    /// Need not be unit length.
    pub dir: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleHit {
    pub point: Vec3,
    /// Unit face normal, following the winding `(v1 - v0) × (v2 - v0)`.
    pub normal: Vec3,
    /// Distance from the ray start to `point`.
    pub distance: Real,
}

impl Ray3 {
    pub const fn new(px: Real, py: Real, pz: Real, vx: Real, vy: Real, vz: Real) -> Self {
        Self {
            start: Vec3::new(px, py, pz),
            dir: Vec3::new(vx, vy, vz),
        }
    }

    #[inline]
    pub const fn from_point_and_direction(point: Vec3, direction: Vec3) -> Self {
        Self {
            start: point,
            dir: direction,
        }
    }

    #[inline]
    pub fn point_at(&self, t: Real) -> Vec3 {
        self.start + self.dir * t
    }

    /// `None` when the ray runs parallel to the plane or points away from it.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        let denominator = plane.dot_normal(self.dir);
        if denominator == 0.0 {
            return None;
        }
        let t = -plane.dot_coord(self.start) / denominator;
        if t < 0.0 {
            return None;
        }
        Some(self.point_at(t))
    }

    /// Möller–Trumbore test against a single triangle. Both faces count.
    pub fn intersect_triangle(&self, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<TriangleHit> {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let pvec = self.dir.cross(edge2);
        let det = edge1.dot(pvec);
        if det.abs() < tolerance() * tolerance() {
            return None;
        }
        let inv_det = 1.0 / det;

        let tvec = self.start - v0;
        let u = tvec.dot(pvec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qvec = tvec.cross(edge1);
        let v = self.dir.dot(qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(qvec) * inv_det;
        if t < 0.0 {
            return None;
        }

        let point = self.point_at(t);
        Some(TriangleHit {
            point,
            normal: edge1.cross(edge2).normalize(),
            distance: self.start.distance_between(point),
        })
    }

    /// Slab test. Returns the entry point and its distance from the start;
    /// a ray starting inside the box hits at its own start.
    pub fn intersect_aabb3(&self, aabb: &Aabb3) -> Option<(Vec3, Real)> {
        let mut t_min: Real = 0.0;
        let mut t_max = Real::INFINITY;

        let axes = [
            (self.start.x, self.dir.x, aabb.min.x, aabb.max.x),
            (self.start.y, self.dir.y, aabb.min.y, aabb.max.y),
            (self.start.z, self.dir.z, aabb.min.z, aabb.max.z),
        ];
        for (origin, dir, lo, hi) in axes {
            if dir == 0.0 {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / dir;
            let (near, far) = {
                let a = (lo - origin) * inv;
                let b = (hi - origin) * inv;
                if a <= b { (a, b) } else { (b, a) }
            };
            t_min = t_min.max(near);
            t_max = t_max.min(far);
            if t_min > t_max {
                return None;
            }
        }

        let point = self.point_at(t_min);
        Some((point, self.start.distance_between(point)))
    }
}
