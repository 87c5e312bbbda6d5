use crate::core::types::{Number, Point3, Vector3};
use crate::mesh::{Mesh, MeshProperties};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use getset::CopyGetters;
use std::borrow::Borrow;

/// A sphere mesh, with precomputed values
#[derive(Copy, Clone, Debug, CopyGetters)]
pub struct SphereMesh {
    #[get_copy = "pub"]
    pos: Point3,
    #[get_copy = "pub"]
    radius: Number,
    radius_sqr: Number,
    aabb: Aabb,
}

// region Constructors

impl SphereMesh {
    pub fn new(pos: impl Into<Point3>, radius: Number) -> Self {
        let pos = pos.into();
        Self {
            pos,
            radius,
            radius_sqr: radius * radius,
            // Cube centred around self
            aabb: Aabb::new(pos - Vector3::splat(radius), pos + Vector3::splat(radius)),
        }
    }

    /// Creates a sphere centred at `centre`, just large enough to enclose all the given points.
    ///
    /// With `centre` at the centre of the points' bounding box, this is not the *minimal* enclosing sphere,
    /// but is close and very cheap to find.
    pub fn enclosing<B: Borrow<Point3>>(centre: impl Into<Point3>, points: impl IntoIterator<Item = B>) -> Self {
        let centre = centre.into();
        let radius = points
            .into_iter()
            .map(|p| p.borrow().distance(centre))
            .fold(0.0, Number::max);
        Self::new(centre, radius)
    }
}

// endregion Constructors

impl Mesh for SphereMesh {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        //Do some ray-sphere intersection math to find if the ray intersects
        let ray_pos = ray.pos();
        let ray_dir = ray.dir();
        let ray_rel_pos = ray_pos - self.pos;

        // Quadratic formula variables
        let a = ray_dir.length_squared();
        let half_b = Vector3::dot(ray_rel_pos, ray_dir);
        let c = ray_rel_pos.length_squared() - self.radius_sqr;
        let discriminant = (half_b * half_b) - (a * c);

        //No solutions to where ray intersects with sphere because of negative square root
        if discriminant < 0. {
            return None;
        };

        let sqrt_d = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range.
        // Check the less-positive root first as it's closer, and only bail if neither is valid
        let mut root = (-half_b - sqrt_d) / a;
        if !interval.contains(&root) {
            root = (-half_b + sqrt_d) / a;
            if !interval.contains(&root) {
                return None;
            }
        }

        let dist = root;
        let world_point = ray.at(dist);
        let local_point = world_point - self.pos;
        let outward_normal = local_point / self.radius;
        let ray_pos_inside = Vector3::dot(ray_dir, outward_normal) > 0.;

        Some(Intersection {
            pos_w: world_point,
            pos_l: local_point,
            dist,
            normal: outward_normal,
            front_face: !ray_pos_inside,
            face: 0,
        })
    }
}

impl MeshProperties for SphereMesh {
    fn centre(&self) -> Point3 { self.pos }
    fn aabb(&self) -> Option<&Aabb> { Some(&self.aabb) }
}
