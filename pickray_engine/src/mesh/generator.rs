//! Procedural mesh generation
//!
//! Vertices are generated in rings, and then stitched together into quads (two triangles each).

use crate::core::types::{Number, Point3};
use crate::mesh::trimesh::{TriMesh, TriMeshError};
use itertools::Itertools;
use std::f64::consts::TAU;

/// Generates a torus lying in the local `XZ` plane, centred at the origin
///
/// # Arguments
/// - `major_radius`: Distance from the centre of the torus to the centre of the tube
/// - `minor_radius`: Radius of the tube
/// - `rings`: Number of segments around the main ring
/// - `sides`: Number of segments around the tube
pub fn torus(major_radius: Number, minor_radius: Number, rings: usize, sides: usize) -> Result<TriMesh, TriMeshError> {
    let vertices = (0..rings)
        .cartesian_product(0..sides)
        .map(|(ring, side)| {
            let u = TAU * ring as Number / rings as Number;
            let v = TAU * side as Number / sides as Number;
            let r = major_radius + (minor_radius * v.cos());
            Point3::new(r * u.cos(), minor_radius * v.sin(), r * u.sin())
        })
        .collect_vec();

    let index = move |ring: usize, side: usize| ((ring % rings) * sides) + (side % sides);
    let indices = (0..rings).cartesian_product(0..sides).flat_map(move |(ring, side)| {
        let (a, b) = (index(ring, side), index(ring + 1, side));
        let (c, d) = (index(ring + 1, side + 1), index(ring, side + 1));
        // Wound so the normals point out of the tube
        [[a, d, c], [a, c, b]]
    });

    TriMesh::new(vertices, indices)
}
