use getset::CopyGetters;
use num_traits::Zero;

use crate::core::types::{Number, Point3, Vector3};

use crate::mesh::{Mesh, MeshProperties};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;

/// A plane that extends infinitely in all directions along its surface
#[derive(Copy, Clone, Debug, CopyGetters)]
#[get_copy = "pub"]
pub struct InfinitePlaneMesh {
    /// A point that lies on the plane
    point: Point3,
    /// The normal vector for the plane, normalised
    normal: Vector3,
    /// Part of the plane equation: `dot(n, p) + d = 0`
    d: Number,
}

// region Constructors

impl InfinitePlaneMesh {
    /// Creates a plane that passes through `point`, facing in the direction of `normal`
    ///
    /// # Requirements
    /// `normal` must not be zero. It does not need to be normalised.
    pub fn new(point: impl Into<Point3>, normal: impl Into<Vector3>) -> Self {
        let (point, normal) = (point.into(), normal.into().normalize());
        Self {
            point,
            normal,
            d: -Vector3::dot(normal, point),
        }
    }

    /// The horizontal plane `y = 0`, facing upwards
    pub fn ground() -> Self { Self::new(Point3::ZERO, Vector3::Y) }
}

// endregion Constructors

// region Mesh Impl

impl Mesh for InfinitePlaneMesh {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        let denominator = Vector3::dot(self.normal, ray.dir());

        // Ray is parallel to plane
        if denominator.is_zero() {
            return None;
        }

        let t = -(Vector3::dot(self.normal, ray.pos()) + self.d) / denominator;

        if !interval.contains(&t) {
            return None;
        }

        let pos_w = ray.at(t);
        Some(Intersection {
            pos_w,
            pos_l: pos_w - self.point,
            dist: t,
            normal: self.normal,
            // Positive => ray and normal same dir => must be behind plane => backface
            front_face: denominator.is_sign_negative(),
            face: 0,
        })
    }
}

impl MeshProperties for InfinitePlaneMesh {
    fn centre(&self) -> Point3 { self.point }
    fn aabb(&self) -> Option<&Aabb> { None }
}

// endregion Mesh Impl
