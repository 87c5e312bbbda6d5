use crate::core::targets::SCENE;
use crate::core::types::{Number, Point3, Vector3};
use crate::mesh::MeshProperties;
use crate::pick::settings::BoundingVolumeMode;
use crate::pick::target::PickTarget;
use crate::shared::aabb::Aabb;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::debug;
use valuable::Valuable;

/// How many line segments make up each circle of the sphere wireframe
pub const CIRCLE_SEGMENTS: usize = 48;

/// Which bounding volume the overlay draws
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Valuable)]
pub enum BoundsShape {
    /// The pick target's oriented bounding box
    #[default]
    Obb,
    /// The pick target's bounding sphere
    Sphere,
}

/// Wireframe overlay showing one of the pick target's bounding volumes.
///
/// Hidden until a [BoundingVolumeMode] other than [BoundingVolumeMode::None] is applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Valuable)]
pub struct BoundsOverlay {
    pub shape: BoundsShape,
    pub visible: bool,
}

impl BoundsOverlay {
    /// Updates the overlay after the bounding volume mode was changed in the settings.
    ///
    /// [BoundingVolumeMode::None] only hides the overlay, the shape is kept as it was.
    pub fn apply_mode(&mut self, mode: BoundingVolumeMode) {
        match mode {
            BoundingVolumeMode::Box => {
                self.shape = BoundsShape::Obb;
                self.visible = true;
            }
            BoundingVolumeMode::Sphere => {
                self.shape = BoundsShape::Sphere;
                self.visible = true;
            }
            BoundingVolumeMode::None => self.visible = false,
        }
        debug!(target: SCENE, ?mode, overlay = ?self, "applied bounding volume mode");
    }
}

impl BoundsOverlay {
    /// World-space line segments outlining the target's bounding volume, for drawing the overlay.
    ///
    /// Empty when the overlay is hidden. The box is drawn with its 12 edges; the sphere as three great circles,
    /// one around each of the target's local axes.
    pub fn wireframe(&self, target: &PickTarget) -> Vec<(Point3, Point3)> {
        if !self.visible {
            return vec![];
        }

        let bounds = target.bounds();
        let local: Vec<(Point3, Point3)> = match self.shape {
            BoundsShape::Obb => {
                let obb = bounds.obb();
                let corners = Aabb::new_centred(obb.centre(), obb.radius() * 2.).corners();
                Aabb::EDGES.iter().map(|&(a, b)| (corners[a], corners[b])).collect()
            }
            BoundsShape::Sphere => {
                let sphere = bounds.sphere();
                [(Vector3::X, Vector3::Y), (Vector3::Y, Vector3::Z), (Vector3::Z, Vector3::X)]
                    .into_iter()
                    .flat_map(|(u, v)| {
                        (0..=CIRCLE_SEGMENTS)
                            .map(move |i| {
                                let theta = TAU * i as Number / CIRCLE_SEGMENTS as Number;
                                sphere.pos() + (((u * theta.cos()) + (v * theta.sin())) * sphere.radius())
                            })
                            .tuple_windows()
                    })
                    .collect()
            }
        };

        let transform = target.transform();
        local
            .into_iter()
            .map(|(a, b)| (transform.point_to_world(a), transform.point_to_world(b)))
            .collect()
    }
}
