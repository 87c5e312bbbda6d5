//! # Module [crate::mesh]
//!
//! This module contains the submodules for different mesh (see [Mesh] and [MeshInstance]) types.
//!
//! Meshes are always defined in their own local space. Placing a mesh in the world is done by pairing it with an
//! [ObjectTransform](crate::shared::transform::ObjectTransform), which transforms incoming rays into mesh-space, and
//! outgoing intersections back into world-space.
//!
//! # DEV: Code Structure
//!
//! Meshes are placed into named submodules, and those submodules are publicly exported.
//! Each mesh stores precomputed values, so should be treated as immutable once built.
//!
//! - File: `./sphere.rs`
//! - Add module: `pub mod sphere;`
//! - Add an entry to [MeshInstance] to correspond to the `SphereMesh` for static-dispatch

use crate::core::types::{Number, Point3};
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use enum_dispatch::enum_dispatch;
use std::fmt::Debug;

// noinspection ALL - Used by enum_dispatch macro
#[allow(unused_imports)]
use self::{axis_box::AxisBoxMesh, infinite_plane::InfinitePlaneMesh, sphere::SphereMesh, trimesh::TriMesh};

pub mod axis_box;
pub mod generator;
pub mod infinite_plane;
pub mod sphere;
pub mod triangle;
pub mod trimesh;

// region Mesh traits

/// This trait describes a [Mesh], and the properties it has
#[enum_dispatch]
pub trait MeshProperties: Debug + Send + Sync {
    /// Gets the centre of the mesh.
    fn centre(&self) -> Point3;

    /// Gets the bounding box for this mesh. If the mesh can't be bounded (e.g. infinite plane), return [None]
    fn aabb(&self) -> Option<&Aabb>;
}

#[enum_dispatch]
pub trait Mesh: MeshProperties {
    /// Attempts to perform an intersection between the given ray and the target mesh
    ///
    /// # Return Value
    /// This should return the *first* (closest) intersection that is within the given interval, else [None].
    /// Rays that are parallel to a surface are misses, not errors.
    fn intersect(&self, ray: &Ray, interval: &Interval<Number>) -> Option<Intersection>;
}

/// An optimised implementation of [Mesh], using static dispatch.
#[enum_dispatch(Mesh, MeshProperties)]
#[derive(Clone, Debug)]
pub enum MeshInstance {
    SphereMesh,
    AxisBoxMesh,
    InfinitePlaneMesh,
    TriMesh,
}

// endregion Mesh traits
