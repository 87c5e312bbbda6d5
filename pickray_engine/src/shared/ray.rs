use crate::core::types::{Number, Point3, Vector3};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Ray {
    pos: Point3,
    dir: Vector3,
    inv_dir: Vector3,
}

impl Ray {
    /// World-space coordinate of the ray
    #[inline(always)]
    pub fn pos(&self) -> Point3 { self.pos }

    /// Direction vector of the ray.
    ///
    /// # Requirements
    /// Must be normalised
    #[inline(always)]
    pub fn dir(&self) -> Vector3 { self.dir }

    /// Component-wise reciprocal of [Self::dir]. Components may be infinite for axis-parallel rays
    #[inline(always)]
    pub fn inv_dir(&self) -> Vector3 { self.inv_dir }

    pub fn new(pos: Point3, dir: Vector3) -> Self {
        let dir = dir.normalize();
        Self {
            pos,
            dir,
            inv_dir: dir.recip(),
        }
    }

    /// Gets the position at a given distance along the ray
    ///
    /// `pos + (t * dir)`
    pub fn at(&self, t: Number) -> Point3 { self.pos + (self.dir * t) }
}
