use crate::core::targets::PICK;
use crate::core::types::{Colour, Point3};
use crate::mesh::axis_box::AxisBoxMesh;
use crate::mesh::sphere::SphereMesh;
use crate::mesh::trimesh::TriMesh;
use crate::mesh::{Mesh, MeshProperties};
use crate::pick::settings::RaycastMode;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::transform::ObjectTransform;
use crate::shared::validate;
use getset::{CopyGetters, Getters};
use puffin::profile_function;
use tracing::trace;

/// Bounding volumes of a mesh, in the mesh's local space
#[derive(Copy, Clone, Debug, CopyGetters)]
#[get_copy = "pub"]
pub struct BoundingVolumes {
    /// Box aligned to the mesh's local axes. Once transformed into the world this is an oriented bounding box
    obb: AxisBoxMesh,
    sphere: SphereMesh,
}

impl BoundingVolumes {
    pub fn of(mesh: &TriMesh) -> Self {
        let aabb = MeshProperties::aabb(mesh).copied().unwrap_or_default();
        Self {
            obb: AxisBoxMesh::from(aabb),
            sphere: SphereMesh::enclosing(aabb.centre(), mesh.vertices()),
        }
    }
}

/// The mesh that can be clicked on
#[derive(Clone, Debug, Getters, CopyGetters)]
pub struct PickTarget {
    /// Geometry of the target, in local space
    #[get = "pub"]
    mesh: TriMesh,
    /// Transform from the target's local space into the world
    #[get_copy = "pub"]
    transform: ObjectTransform,
    #[get_copy = "pub"]
    bounds: BoundingVolumes,
    #[get_copy = "pub"]
    colour: Colour,
}

impl PickTarget {
    /// Creates a new target, calculating the bounding volumes for the mesh
    pub fn new(mesh: TriMesh, transform: ObjectTransform, colour: Colour) -> Self {
        Self {
            bounds: BoundingVolumes::of(&mesh),
            mesh,
            transform,
            colour,
        }
    }

    /// World-space centre of the target
    pub fn centre(&self) -> Point3 { self.transform.point_to_world(self.mesh.centre()) }

    /// Tests the world-space ray against the target, using the given test.
    ///
    /// All tests happen in the target's local space; the returned intersection is in world-space.
    /// Only intersections in front of the ray's origin are considered, and the closest one is returned.
    pub fn raycast(&self, ray: &Ray, mode: RaycastMode) -> Option<Intersection> {
        profile_function!();

        let local_ray = self.transform.incoming_ray(ray);
        let interval = Interval::FORWARD;

        let local_hit = match mode {
            RaycastMode::Box => self.bounds.obb.intersect(&local_ray, &interval),
            RaycastMode::Sphere => self.bounds.sphere.intersect(&local_ray, &interval),
            RaycastMode::Mesh => self.mesh.intersect(&local_ray, &interval),
        }?;

        let hit = self.transform.outgoing_intersection(ray, local_hit);
        validate::intersection(ray, &hit, &interval);
        trace!(target: PICK, ?mode, pos = ?hit.pos_w, dist = hit.dist, face = hit.face, "target hit");
        Some(hit)
    }
}
