use crate::core::targets::MESH;
use crate::core::types::{Number, Point3};
use crate::mesh::triangle::Triangle;
use crate::mesh::{Mesh, MeshProperties};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use getset::Getters;
use thiserror::Error;
use tracing::{trace, warn};
use valuable::Valuable;

/// The recommended amount of padding around AABB's for flat meshes
pub const AABB_PADDING: Number = 1e-6;

#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Valuable)]
pub enum TriMeshError {
    /// There were no (non-degenerate) triangles to build the mesh from
    #[error("the mesh has no valid triangles")]
    Empty,
    /// One of the triangles referenced a vertex that doesn't exist
    #[error("triangle {triangle} references vertex {index}, but there are only {count} vertices")]
    IndexOutOfRange { triangle: usize, index: usize, count: usize },
}

/// A mesh made up of a list of triangles (a "triangle soup")
#[derive(Clone, Debug, Getters)]
pub struct TriMesh {
    /// The vertex buffer the mesh was built from
    #[get = "pub"]
    vertices: Vec<Point3>,
    #[get = "pub"]
    triangles: Vec<Triangle>,
    aabb: Aabb,
    centre: Point3,
}

// region Constructors

impl TriMesh {
    /// Builds a mesh from a vertex buffer and an index buffer, where each entry of `indices` is one triangle.
    ///
    /// Triangles that have no area are skipped.
    ///
    /// # Errors
    /// - [TriMeshError::IndexOutOfRange] if any index doesn't point into `vertices`
    /// - [TriMeshError::Empty] if no triangles remain
    pub fn new(vertices: Vec<Point3>, indices: impl IntoIterator<Item = [usize; 3]>) -> Result<Self, TriMeshError> {
        let count = vertices.len();
        let mut triangles = vec![];
        let mut skipped = 0_usize;

        for (triangle, tri_indices) in indices.into_iter().enumerate() {
            if let Some(&index) = tri_indices.iter().find(|&&i| i >= count) {
                return Err(TriMeshError::IndexOutOfRange { triangle, index, count });
            }
            match Triangle::new(tri_indices.map(|i| vertices[i])) {
                Some(tri) => triangles.push(tri),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(target: MESH, skipped, "skipped degenerate triangles while building mesh");
        }

        let aabb = Aabb::encompass_points(triangles.iter().flat_map(|t| t.vertices()))
            .ok_or(TriMeshError::Empty)?
            .min_padded(AABB_PADDING);
        let centre = aabb.centre();

        trace!(target: MESH, triangles = triangles.len(), vertices = count, ?aabb, "built trimesh");

        Ok(Self {
            vertices,
            triangles,
            aabb,
            centre,
        })
    }
}

// endregion Constructors

// region Mesh Impl

impl Mesh for TriMesh {
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        if !self.aabb.hit(ray, interval) {
            return None;
        }

        // Every triangle has to be checked, the closest one along the ray wins
        self.triangles
            .iter()
            .enumerate()
            .filter_map(|(idx, tri)| {
                tri.intersect(ray, interval)
                    .map(|i| Intersection { face: idx, ..i })
            })
            .min_by(Intersection::cmp_dist)
    }
}

impl MeshProperties for TriMesh {
    fn centre(&self) -> Point3 { self.centre }
    fn aabb(&self) -> Option<&Aabb> { Some(&self.aabb) }
}

// endregion Mesh Impl
