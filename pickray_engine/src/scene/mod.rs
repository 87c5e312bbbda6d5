//! # Module [crate::scene]
//!
//! Holds everything that makes up the demo scene, and [PickScene::assemble] which builds it.

use crate::core::targets::SCENE;
use crate::core::types::{Angle, Channel, Colour, Point3, Quaternion, Transform3, Vector3};
use crate::mesh::axis_box::AxisBoxMesh;
use crate::mesh::generator;
use crate::mesh::trimesh::TriMeshError;
use crate::pick::target::PickTarget;
use crate::scene::camera::Camera;
use crate::scene::overlay::BoundsOverlay;
use crate::shared::transform::ObjectTransform;
use tracing::info;

pub mod camera;
pub mod entity;
pub mod overlay;

/// A simple point light
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub pos: Point3,
    /// Light that reaches every surface, regardless of direction
    pub ambient: Channel,
    pub diffuse: Channel,
}

/// The solid ground beneath everything
#[derive(Copy, Clone, Debug)]
pub struct Ground {
    pub mesh: AxisBoxMesh,
    pub colour: Colour,
}

/// The complete scene for the demo
#[derive(Clone, Debug)]
pub struct PickScene {
    pub camera: Camera,
    pub light: PointLight,
    /// Colour of the sky, seen wherever no surface is hit
    pub sky: Colour,
    pub ground: Ground,
    /// The mesh that is tested when clicking
    pub target: PickTarget,
    pub overlay: BoundsOverlay,
}

// region Constructors

/// Size of the ground box, which stretches out towards the horizon
const GROUND_SIZE: Vector3 = Vector3::new(500., 10., 500.);

impl PickScene {
    /// Builds the default scene
    ///
    /// The ground is a large flat box whose top face sits at `y = 0`, and the pick target (a torus) floats above it,
    /// in front of the camera. The target is rotated and unevenly scaled, so that its oriented bounding box is
    /// visibly different from a world-aligned one.
    pub fn assemble() -> Result<Self, TriMeshError> {
        let camera = Camera::default();

        let light = PointLight {
            pos: Point3::new(10., 10., 10.),
            ambient: 0.25,
            diffuse: 1.0,
        };

        let ground = Ground {
            mesh: AxisBoxMesh::new_centred(Point3::new(0., -GROUND_SIZE.y / 2., 0.), GROUND_SIZE),
            colour: Colour::new([0., 0.5, 0.]),
        };

        let target_transform = Transform3::from_scale_rotation_translation(
            Vector3::new(1., 1.6, 0.8),
            Quaternion::from_euler(
                glam::EulerRot::XYZ,
                Angle::from_degrees(35.).radians,
                Angle::from_degrees(20.).radians,
                Angle::from_degrees(-15.).radians,
            ),
            Point3::new(0., 1.5, 0.),
        );
        let target = PickTarget::new(
            generator::torus(0.35, 0.12, 24, 12)?,
            ObjectTransform::new(target_transform),
            Colour::new([1., 0., 0.]),
        );

        info!(
            target: SCENE,
            triangles = target.mesh().triangles().len(),
            "assembled scene"
        );

        Ok(Self {
            camera,
            light,
            sky: Colour::new([0.749, 0.918, 0.988]),
            ground,
            target,
            overlay: BoundsOverlay::default(),
        })
    }
}

// endregion Constructors

impl PickScene {
    /// Direction from `point` towards the light, normalised
    pub fn light_dir(&self, point: Point3) -> Vector3 { (self.light.pos - point).normalize_or_zero() }

    /// Lambertian shading for a surface with the given colour and outward normal
    pub fn shade_lambert(&self, colour: Colour, point: Point3, normal: Vector3) -> Colour {
        let n_dot_l = Vector3::dot(normal, self.light_dir(point)).max(0.) as Channel;
        colour * (self.light.ambient + (self.light.diffuse * n_dot_l))
    }
}
