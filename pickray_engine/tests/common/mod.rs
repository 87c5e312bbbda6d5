#![allow(dead_code)]

use pickray_engine::core::types::*;
use pickray_engine::pick::target::PickTarget;
use pickray_engine::pick::{MouseButton, MouseDown};
use pickray_engine::scene::camera::{Camera, Viewport};
use pickray_engine::scene::PickScene;
use rand::{Rng as _, SeedableRng};

pub type Rng = rand::rngs::SmallRng;

pub const VIEWPORT_WIDTH: Number = 800.;
pub const VIEWPORT_HEIGHT: Number = 600.;

/// Tolerance for comparing world-space positions
pub const EPSILON: Number = 1e-6;

pub fn scene() -> PickScene { PickScene::assemble().expect("failed assembling scene") }

pub fn viewport() -> Viewport { Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT).expect("viewport should be valid") }

pub fn rng() -> Rng { Rng::seed_from_u64(0x5EED_CAFE) }

pub fn press(pos: Point2, button: MouseButton) -> MouseDown { MouseDown { pos, button } }

pub fn primary_click(pos: Point2) -> MouseDown { press(pos, MouseButton::PRIMARY) }

/// Finds where on the viewport the given world-space point appears
pub fn screen_pos_of(camera: &Camera, viewport: Viewport, point: Point3) -> Point2 {
    let ndc = camera
        .project(point, viewport.aspect())
        .expect("point should be in front of the camera");
    viewport.to_screen(ndc)
}

/// Picks random points that lie strictly inside triangles of the target's mesh, in world-space
pub fn target_surface_points(target: &PickTarget, rng: &mut Rng, count: usize) -> Vec<Point3> {
    let triangles = target.mesh().triangles();
    std::iter::repeat_with(|| {
        let tri = triangles[rng.gen_range(0..triangles.len())];
        let weights: [Number; 3] = std::array::from_fn(|_| rng.gen_range(0.1..1.0));
        let total: Number = weights.iter().sum();
        let [a, b, c] = tri.vertices();
        let local = ((a * weights[0]) + (b * weights[1]) + (c * weights[2])) / total;
        target.transform().point_to_world(local)
    })
    .take(count)
    .collect()
}
