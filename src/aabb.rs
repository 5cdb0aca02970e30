use crate::float_types::Real;
use crate::vec2::Vec2;
use crate::vec3::Vec3;

/// How much of one box lies inside another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
    None,
    Partial,
    All,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb2 {
    /// Box spanning two opposite corners, in any order.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Box of half-extents `width / 2`, `height / 2` around `centre`.
    pub fn from_centre(centre: Vec2, width: Real, height: Real) -> Self {
        let half = Vec2::new(width * 0.5, height * 0.5);
        Self::new(centre - half, centre + half)
    }

    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn contains(&self, other: &Aabb2) -> Containment {
        if other.max.x < self.min.x
            || other.min.x > self.max.x
            || other.max.y < self.min.y
            || other.min.y > self.max.y
        {
            return Containment::None;
        }
        if self.contains_point(other.min) && self.contains_point(other.max) {
            Containment::All
        } else {
            Containment::Partial
        }
    }

    pub fn expand_to_contain(&mut self, p: Vec2) {
        self.min = Vec2::new(self.min.x.min(p.x), self.min.y.min(p.y));
        self.max = Vec2::new(self.max.x.max(p.x), self.max.y.max(p.y));
    }

    #[inline]
    pub fn centre(&self) -> Vec2 {
        self.min.mid_point(self.max)
    }

    #[inline]
    pub fn diameter_x(&self) -> Real {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn diameter_y(&self) -> Real {
        self.max.y - self.min.y
    }

    /// Scales the box about its centre.
    pub fn scale(&self, s: Real) -> Self {
        let centre = self.centre();
        let half = (self.max - centre) * s;
        Self::new(centre - half, centre + half)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb3 {
    /// Box spanning two opposite corners, in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub fn from_centre(centre: Vec3, width: Real, height: Real, depth: Real) -> Self {
        let half = Vec3::new(width * 0.5, height * 0.5, depth * 0.5);
        Self::new(centre - half, centre + half)
    }

    #[inline]
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    pub fn contains(&self, other: &Aabb3) -> Containment {
        if !self.intersects(other) {
            return Containment::None;
        }
        if self.contains_point(other.min) && self.contains_point(other.max) {
            Containment::All
        } else {
            Containment::Partial
        }
    }

    #[inline]
    pub fn intersects(&self, other: &Aabb3) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
            && self.max.z >= other.min.z
            && self.min.z <= other.max.z
    }

    pub fn expand_to_contain(&mut self, p: Vec3) {
        self.min = Vec3::new(self.min.x.min(p.x), self.min.y.min(p.y), self.min.z.min(p.z));
        self.max = Vec3::new(self.max.x.max(p.x), self.max.y.max(p.y), self.max.z.max(p.z));
    }

    #[inline]
    pub fn centre(&self) -> Vec3 {
        self.min.mid_point(self.max)
    }

    #[inline]
    pub fn diameter_x(&self) -> Real {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn diameter_y(&self) -> Real {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn diameter_z(&self) -> Real {
        self.max.z - self.min.z
    }

    pub fn scale(&self, s: Real) -> Self {
        let centre = self.centre();
        let half = (self.max - centre) * s;
        Self::new(centre - half, centre + half)
    }
}
