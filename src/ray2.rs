//! 2D rays. The direction also sets the extent: a `Ray2` covers
//! `start + t * dir` for `t` in `[0, 1]`, so every query here is a
//! segment query.

use crate::float_types::{Real, tolerance};
use crate::vec2::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ray2 {
    pub start: Vec2,
    pub dir: Vec2,
}

/// Closest hit of a ray against a polygon outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeHit {
    pub point: Vec2,
    /// Unit normal of the edge that was hit, facing away from the shape.
    pub normal: Vec2,
    pub distance: Real,
}

impl Ray2 {
    #[inline]
    pub const fn new(start: Vec2, dir: Vec2) -> Self {
        Self { start, dir }
    }

    pub fn from_endpoints(start: Vec2, end: Vec2) -> Self {
        Self::new(start, end - start)
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.start + self.dir
    }

    /// Intersection of the ray segment with the segment `p1`-`p2`.
    pub fn intersect_line_segment(&self, p1: Vec2, p2: Vec2) -> Option<Vec2> {
        segment_with_segment_intersection(self.start, self.end(), p1, p2)
    }

    /// Closest crossing of the triangle outline.
    pub fn intersect_triangle(&self, p1: Vec2, p2: Vec2, p3: Vec2) -> Option<EdgeHit> {
        self.closest_edge_hit(&[(p1, p2, p3), (p2, p3, p1), (p3, p1, p2)])
    }

    /// Closest crossing of a quad outline given as four corners in order.
    pub fn intersect_box(&self, p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<EdgeHit> {
        self.closest_edge_hit(&[(p1, p2, p3), (p2, p3, p4), (p3, p4, p1), (p4, p1, p2)])
    }

    /// First point where the ray segment enters (or, starting inside, leaves)
    /// the circle.
    pub fn intersect_circle(&self, centre: Vec2, radius: Real) -> Option<Vec2> {
        let a = self.dir.length_sq();
        if a == 0.0 {
            return None;
        }
        let offset = self.start - centre;
        let b = 2.0 * offset.dot(self.dir);
        let c = offset.length_sq() - radius * radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let near = (-b - root) / (2.0 * a);
        let far = (-b + root) / (2.0 * a);
        [near, far]
            .into_iter()
            .find(|t| (0.0..=1.0).contains(t))
            .map(|t| self.start + self.dir * t)
    }

    /// `edges` holds (edge start, edge end, a point on the inner side).
    fn closest_edge_hit(&self, edges: &[(Vec2, Vec2, Vec2)]) -> Option<EdgeHit> {
        let mut best: Option<EdgeHit> = None;
        for &(a, b, inner) in edges {
            let Some(point) = self.intersect_line_segment(a, b) else {
                continue;
            };
            let distance = self.start.distance_between(point);
            if best.is_none_or(|hit| distance < hit.distance) {
                best = Some(EdgeHit {
                    point,
                    normal: outward_edge_normal(a, b, inner),
                    distance,
                });
            }
        }
        best
    }
}

/// Crossing of the infinite lines through `p1`-`p2` and `p3`-`p4`.
/// `None` when the lines are parallel.
pub fn line2_with_line_intersection(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let denominator = d1.cross(d2);
    // sine of the angle between the lines below tolerance counts as parallel
    if denominator.abs() <= tolerance() * d1.length() * d2.length() {
        return None;
    }
    let t = (p3 - p1).cross(d2) / denominator;
    Some(p1 + d1 * t)
}

/// Crossing of the closed segments `p1`-`p2` and `p3`-`p4`.
pub fn segment_with_segment_intersection(
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
    p4: Vec2,
) -> Option<Vec2> {
    let point = line2_with_line_intersection(p1, p2, p3, p4)?;
    (within_bounds(point, p1, p2) && within_bounds(point, p3, p4)).then_some(point)
}

fn within_bounds(p: Vec2, a: Vec2, b: Vec2) -> bool {
    let eps = tolerance();
    p.x >= a.x.min(b.x) - eps
        && p.x <= a.x.max(b.x) + eps
        && p.y >= a.y.min(b.y) - eps
        && p.y <= a.y.max(b.y) + eps
}

fn outward_edge_normal(a: Vec2, b: Vec2, inner: Vec2) -> Vec2 {
    let edge = b - a;
    let normal = Vec2::new(-edge.y, edge.x).normalize();
    if normal.dot(inner - a) > 0.0 {
        -normal
    } else {
        normal
    }
}
