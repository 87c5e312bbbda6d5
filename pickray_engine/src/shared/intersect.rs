use crate::core::types::{Number, Point3, Vector3};
use std::cmp::Ordering;

/// A struct representing a ray-mesh intersection
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// The position in world coordinates of the intersection
    pub pos_w: Point3,
    /// The position in mesh-local coordinates of the intersection
    pub pos_l: Point3,
    /// Surface normal at intersection.
    /// This should point in the *outwards* direction, irrespective of the
    /// incident ray
    ///
    /// # Invariants
    ///  - Must be normalised
    ///  - Cannot be zero/nan
    pub normal: Vector3,
    /// Whether the ray hit the outside of the surface
    pub front_face: bool,
    /// Distance along the ray that the intersection occurred
    pub dist: Number,
    /// Numeric ID for which "face" was hit
    ///
    /// For meshes with a single 'surface' (like a [sphere](crate::mesh::sphere::SphereMesh)), this is always `0`.
    /// For a box this is unique per side, for a [trimesh](crate::mesh::trimesh::TriMesh) it's the triangle index.
    pub face: usize,
}

impl PartialOrd<Self> for Intersection {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Number::partial_cmp(&self.dist, &other.dist) }
}

impl Intersection {
    /// Total ordering by distance, for use with [Iterator::min_by]
    ///
    /// `NaN` distances are never produced by the meshes, and are treated as equal here.
    pub fn cmp_dist(a: &Self, b: &Self) -> Ordering { a.partial_cmp(b).unwrap_or(Ordering::Equal) }
}
