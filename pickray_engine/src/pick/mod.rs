//! # Module [crate::pick]
//!
//! Turns a mouse click on the viewport into a pick ray, tests it against the pick target (or the ground as a
//! fallback), and updates the [Indicators] to show where it hit.

use crate::core::targets::PICK;
use crate::core::types::{Point2, Point3};
use crate::mesh::infinite_plane::InfinitePlaneMesh;
use crate::mesh::Mesh;
use crate::pick::indicators::Indicators;
use crate::pick::settings::{PickSettings, RaycastMode};
use crate::pick::target::PickTarget;
use crate::scene::camera::{Camera, Viewport};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use getset::Getters;
use puffin::profile_function;
use tracing::debug;

pub mod indicators;
pub mod settings;
pub mod target;

/// Index of a mouse button, as reported by the windowing layer
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MouseButton(pub u8);

impl MouseButton {
    pub const PRIMARY: Self = Self(0);
    pub const MIDDLE: Self = Self(1);
    pub const SECONDARY: Self = Self(2);
}

/// A mouse button being pressed over the viewport
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MouseDown {
    /// Position of the cursor in pixels, relative to the top-left of the viewport
    pub pos: Point2,
    pub button: MouseButton,
}

/// What happened as the result of a click
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PickOutcome {
    /// Not a primary click; nothing was changed
    Ignored,
    /// The pick target was hit, using the test for `mode`
    Target { intersection: Intersection, mode: RaycastMode },
    /// The target was missed, but the ground plane was hit
    Ground { point: Point3 },
    /// Nothing was hit, and the indicators were hidden
    Miss,
}

impl PickOutcome {
    /// World-space point that was hit, if any
    pub fn point(&self) -> Option<Point3> {
        match self {
            Self::Target { intersection, .. } => Some(intersection.pos_w),
            Self::Ground { point } => Some(*point),
            Self::Ignored | Self::Miss => None,
        }
    }
}

/// Handles clicks on the viewport, and owns the pick indicators that show the result
#[derive(Copy, Clone, Debug, Getters)]
pub struct PickDispatcher {
    /// Plane that is tested whenever the target is missed
    ground: InfinitePlaneMesh,
    #[get = "pub"]
    indicators: Indicators,
}

impl Default for PickDispatcher {
    fn default() -> Self { Self::new() }
}

impl PickDispatcher {
    pub fn new() -> Self {
        Self {
            ground: InfinitePlaneMesh::ground(),
            indicators: Indicators::default(),
        }
    }

    /// Processes a mouse button being pressed over the viewport.
    ///
    /// Only the primary button is handled, anything else is ignored and leaves the indicators untouched.
    /// The settings are read fresh on every call, so changing them only affects the next click.
    ///
    /// The ground plane is only ever tested when the target is missed, even if the plane would be closer.
    pub fn on_mouse_down(
        &mut self,
        event: &MouseDown,
        camera: &Camera,
        viewport: Viewport,
        target: &PickTarget,
        settings: &PickSettings,
    ) -> PickOutcome {
        profile_function!();

        if event.button != MouseButton::PRIMARY {
            debug!(target: PICK, button = event.button.0, "ignoring non-primary click");
            return PickOutcome::Ignored;
        }

        let ndc = viewport.to_ndc(event.pos);
        let ray = camera.ray_through_ndc(ndc, viewport.aspect());

        let outcome = if let Some(intersection) = target.raycast(&ray, settings.raycast) {
            PickOutcome::Target {
                intersection,
                mode: settings.raycast,
            }
        } else if let Some(ground) = self.ground.intersect(&ray, &Interval::FORWARD) {
            PickOutcome::Ground { point: ground.pos_w }
        } else {
            PickOutcome::Miss
        };

        match outcome.point() {
            Some(hit) => self.indicators.show_hit(camera.pos, hit),
            None => self.indicators.hide(),
        }

        debug!(target: PICK, ?ndc, ray_dir = ?ray.dir(), ?outcome, "processed click");
        outcome
    }
}
