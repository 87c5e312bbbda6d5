use crate::core::types::{Number, Point3, Vector3};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use getset::CopyGetters;
use num_traits::Zero;

/// A single triangle, with a flat face normal
///
/// Triangles are not meshes by themselves, they are grouped into a [TriMesh](super::trimesh::TriMesh)
#[derive(Copy, Clone, Debug, CopyGetters)]
#[get_copy = "pub"]
pub struct Triangle {
    /// The three corner vertices of the triangle, counter-clockwise when viewed from the front
    vertices: [Point3; 3],
    /// Outward facing normal, according to the winding order of [Self::vertices]
    normal: Vector3,
}

impl Triangle {
    /// Creates a new triangle from the three corners
    ///
    /// Returns [None] if the triangle is degenerate (it has no area, so no normal can be found)
    pub fn new(vertices: [Point3; 3]) -> Option<Self> {
        let [a, b, c] = vertices;
        let normal = Vector3::cross(b - a, c - a).try_normalize()?;
        Some(Self { vertices, normal })
    }

    pub fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection> {
        /*
        CREDITS:

        Title:  "Ray-Tracing: Rendering a Triangle (Möller-Trumbore algorithm)"
        Author: Scratchapixel
        Url:    <https://www.scratchapixel.com/lessons/3d-basic-rendering/ray-tracing-rendering-a-triangle/moller-trumbore-ray-triangle-intersection.html>
        */

        let [v0, v1, v2] = self.vertices;
        let rd = ray.dir();
        let ro = ray.pos();

        let v0v1 = v1 - v0;
        let v0v2 = v2 - v0;
        let p_vec = Vector3::cross(rd, v0v2);
        let det = Vector3::dot(v0v1, p_vec);

        // ray and triangle are parallel
        if det.is_zero() {
            return None;
        }

        let inv_det = 1. / det;

        let t_vec = ro - v0;
        let u = Vector3::dot(t_vec, p_vec) * inv_det;
        if !(0. ..=1.).contains(&u) {
            return None;
        }

        let q_vec = Vector3::cross(t_vec, v0v1);
        let v = Vector3::dot(rd, q_vec) * inv_det;
        if v < 0. || u + v > 1. {
            return None;
        }
        let t = Vector3::dot(v0v2, q_vec) * inv_det;

        if !interval.contains(&t) {
            return None;
        }

        let pos_w = ray.at(t);

        Some(Intersection {
            pos_w,
            pos_l: pos_w,
            // Positive determinant => ray is travelling against the normal => front face
            front_face: det.is_sign_positive(),
            dist: t,
            normal: self.normal,
            face: 0,
        })
    }
}
