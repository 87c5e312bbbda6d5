use getset::CopyGetters;
use glam::Vec3Swizzles;

use crate::core::types::{Number, Point3, Vector3};

use crate::mesh::{Mesh, MeshProperties};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::validate;

/// Built instance of a box mesh, aligned to the axes of its own (local) space.
///
/// Paired with an [ObjectTransform](crate::shared::transform::ObjectTransform), this becomes an oriented box.
#[derive(Copy, Clone, Debug, CopyGetters)]
pub struct AxisBoxMesh {
    centre: Point3,
    /// Half the size of the box, along each axis
    #[get_copy = "pub"]
    radius: Vector3,
    inv_radius: Vector3,
    aabb: Aabb,
}

// region Constructors

impl AxisBoxMesh {
    pub fn new(a: impl Into<Point3>, b: impl Into<Point3>) -> Self { Self::from(Aabb::new(a, b)) }

    pub fn new_centred(centre: impl Into<Point3>, size: impl Into<Vector3>) -> Self {
        Self::from(Aabb::new_centred(centre, size))
    }
}

impl From<Aabb> for AxisBoxMesh {
    fn from(aabb: Aabb) -> Self {
        Self {
            centre: aabb.centre(),
            radius: aabb.size() / 2.,
            inv_radius: (aabb.size() / 2.).recip(),
            aabb,
        }
    }
}

// endregion Constructors

// region Mesh Implementation

impl Mesh for AxisBoxMesh {
    //noinspection RsLiveness
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        /*
        CREDITS:

        Title: "A Ray-Box Intersection Algorithm and Efficient Dynamic Voxel Rendering"
        Authors:
            - Alexander Majercik
            - Cyril Crassin
            - Peter Shirley
            - Morgan McGuire
        URL: <https://jcgt.org/published/0007/03/04/>
        Publisher: Journal of Computer Graphics Techniques (JCGT)
        Version: vol. 7, no. 3, 66-81, 2018
        */

        // Move to the box's reference frame
        let ro = ray.pos() - self.centre;
        let rd = ray.dir();

        // Winding direction: -1 if the ray starts inside of the box (i.e., and is leaving), +1 if it is starting outside of the box
        let winding = ((ro.abs() * self.inv_radius).max_element() - 1.).signum();

        // Negated sign of the ray direction, used in several places
        let sgn = -rd.signum();

        // Ray-plane intersection. For each pair of planes, choose the one that is front-facing
        // to the ray and compute the distance to it.
        let plane_dist = ((self.radius * winding * sgn) - ro) * ray.inv_dir();

        validate::vector3(&sgn);

        // Perform all three ray-box tests on each axis.
        macro_rules! test {
            ($axis:literal, $u:ident, $vw:ident) => {{
                let dist: Number = plane_dist.$u;
                // Is there a hit on this axis in the valid distance bounds?
                if interval.contains(&dist) {
                    let hit = ro.$vw() + (rd.$vw() * dist);
                    let radius = self.radius.$vw();
                    // Is that hit within the face of the box?
                    if (hit.x.abs() < radius.x) && (hit.y.abs() < radius.y) {
                        // Mask the sign to be the normal
                        let ray_normal = Vector3 {
                            $u: sgn.$u,
                            ..Vector3::ZERO
                        };
                        let pos_w = ray.at(dist);
                        return Some(Intersection {
                            pos_w,
                            pos_l: pos_w - self.centre,
                            normal: ray_normal * winding,
                            front_face: winding.is_sign_positive(),
                            dist,
                            // x: 0,1; y: 2,3; z: 4,5; -ve side first then positive side
                            face: ($axis * 2) + (ray_normal.$u * winding > 0.) as usize,
                        });
                    }
                }
            }};
        }

        test!(0, x, yz);
        test!(1, y, zx);
        test!(2, z, xy);

        // None of the tests matched, so we didn't hit any sides
        None
    }
}

impl MeshProperties for AxisBoxMesh {
    fn centre(&self) -> Point3 { self.centre }
    fn aabb(&self) -> Option<&Aabb> { Some(&self.aabb) }
}

// endregion Mesh Implementation
