//! Minimal scene-graph entities: something with a transform, that may or may not be shown

use crate::core::types::{Matrix3, Number, Point3, Quaternion, Transform3, Vector3};
use crate::shared::transform::ObjectTransform;
use serde::{Deserialize, Serialize};

/// Position, orientation and scale of an entity in the world
///
/// Transformations are applied in the order scale, rotation, translation.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityTransform {
    pub position: Point3,
    pub rotation: Quaternion,
    pub scale: Vector3,
}

impl EntityTransform {
    pub const IDENTITY: Self = Self {
        position: Point3::ZERO,
        rotation: Quaternion::IDENTITY,
        scale: Vector3::ONE,
    };

    /// The local axis that an entity "faces" along, matching the camera convention
    pub const FORWARD: Vector3 = Vector3::NEG_Z;

    /// World-space direction the entity is facing in (see [Self::FORWARD])
    pub fn facing(&self) -> Vector3 { self.rotation * Self::FORWARD }

    /// Rotates the entity so that it faces towards `target`, keeping its local `+Y` as close to world `+Y` as possible.
    ///
    /// If `target` is at the entity's position there is no direction to face, and the rotation is left unchanged.
    pub fn look_at(&mut self, target: Point3) {
        let Some(fwd) = (target - self.position).try_normalize() else {
            return;
        };
        let right = Vector3::cross(fwd, Vector3::Y).try_normalize().unwrap_or(Vector3::X);
        let up = Vector3::cross(right, fwd);
        // Columns are where the local axes end up; local -Z has to map onto `fwd`
        self.rotation = Quaternion::from_mat3(&Matrix3::from_cols(right, up, -fwd)).normalize();
    }

    /// Moves the entity along one of its own local axes
    pub fn translate_local(&mut self, axis: Vector3, dist: Number) { self.position += self.rotation * (axis * dist); }

    pub fn matrix(&self) -> Transform3 {
        Transform3::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Whether the transform can be inverted (no axis has been scaled down to nothing)
    pub fn is_invertible(&self) -> bool { self.matrix().matrix3.determinant().abs() > Number::EPSILON }

    pub fn object_transform(&self) -> ObjectTransform { ObjectTransform::new(self.matrix()) }
}

impl Default for EntityTransform {
    fn default() -> Self { Self::IDENTITY }
}

/// Something placed in the scene, which can be hidden
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub transform: EntityTransform,
    pub visible: bool,
}
