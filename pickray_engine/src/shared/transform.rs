//! This module contains utility functions for helping with mesh transformations
//!
//! # Terminology
//!
//! ## Transform
//! The mesh's 3D affine transform matrix (see [Transform3]). This represents the transformation from
//! mesh-space to world-space; e.g. a [Transform3::from_scale()] with a scale of `Vector3::splat(2.)`,
//! would cause the mesh to appear twice as large.
//!
//! ## Inverse Transform
//! The matrix inverse of `transform`. This is the matrix corresponding to the transformation from
//! world-space to mesh-space

use crate::core::types::{Point3, Transform3};
use crate::shared::intersect::Intersection;
use crate::shared::ray::Ray;
use getset::CopyGetters;

/// A struct that holds both a [Transform3] and it's inverse.
#[derive(Copy, Clone, Debug, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct ObjectTransform {
    transform: Transform3,
    inv_transform: Transform3,
}

impl ObjectTransform {
    pub const IDENTITY: Self = Self {
        transform: Transform3::IDENTITY,
        inv_transform: Transform3::IDENTITY,
    };

    pub fn new(transform: Transform3) -> Self {
        Self {
            transform,
            inv_transform: transform.inverse(),
        }
    }
}

impl Default for ObjectTransform {
    fn default() -> Self { Self::IDENTITY }
}

impl ObjectTransform {
    /// Transforms the incoming ray from world-space to mesh-space, using the mesh's inverse transform
    pub fn incoming_ray(&self, incoming_ray: &Ray) -> Ray {
        Ray::new(
            self.inv_transform.transform_point3(incoming_ray.pos()),
            self.inv_transform.transform_vector3(incoming_ray.dir()),
        )
    }

    /// Transforms the outgoing intersection from mesh-space to world-space
    pub fn outgoing_intersection(&self, original_ray: &Ray, mut intersection: Intersection) -> Intersection {
        // Normals are covectors, so they go through the inverse-transpose
        let normal_matrix = self.inv_transform.matrix3.transpose();

        intersection.normal = (normal_matrix * intersection.normal).normalize();
        intersection.pos_w = self.transform.transform_point3(intersection.pos_w);

        // The incoming ray was re-normalised in mesh-space, so the mesh-space distance is meaningless here
        intersection.dist = (intersection.pos_w - original_ray.pos()).length();

        intersection
    }

    /// Maps a point from mesh-space into world-space
    pub fn point_to_world(&self, point: Point3) -> Point3 { self.transform.transform_point3(point) }
}
