use crate::core::types::{Angle, Number, Point2, Point3, Quaternion, Vector3};
use crate::shared::ray::Ray;
use crate::shared::validate;
use puffin::profile_function;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use valuable::Valuable;

/// The furthest the camera may pitch up or down, to stop the forward vector lining up with [Vector3::Y]
const MAX_PITCH_DEGREES: Number = 89.0;

/// A simple perspective camera
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Position the camera is located at
    pub pos: Point3,
    /// Vertical FOV
    pub v_fov: Angle,
    /// Direction the camera is looking in
    pub fwd: Vector3,
    /// Distance to the near clipping plane
    pub near: Number,
    /// Distance to the far clipping plane
    pub far: Number,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pos: Point3::new(0., 1.5, 2.),
            v_fov: Angle::from_degrees(60.0),
            fwd: Vector3::NEG_Z,
            near: 0.1,
            far: 750.,
        }
    }
}

#[derive(Error, Copy, Clone, Debug, PartialEq, Valuable)]
pub enum CamInvalidError {
    /// The calculated look direction (forward vector) was not valid.
    #[error("the provided `fwd` vector couldn't be normalised (too small)")]
    ForwardVectorInvalid,
    /// The calculated field-of-view was not valid.
    #[error("the provided FOV was not valid")]
    FovInvalid,
    /// The viewport has no area, or a non-finite size
    #[error("the viewport dimensions were not valid")]
    ViewportInvalid,
}

impl Camera {
    /// The right, up and forward unit vectors of the camera, in world-space.
    ///
    /// If the camera is looking straight up or down, the right vector falls back to [Vector3::X]
    pub fn basis(&self) -> (Vector3, Vector3, Vector3) {
        let fwd = self.fwd.try_normalize().unwrap_or(Vector3::NEG_Z);
        let right = Vector3::cross(fwd, Vector3::Y).try_normalize().unwrap_or(Vector3::X);
        let up = Vector3::cross(right, fwd);
        (right, up, fwd)
    }

    /// Applies a change in position to the camera
    ///
    /// Positive deltas imply a 'forwards' motion along the axis, negatives imply the opposite.
    /// E.g. `up_down = -2.0` is a downward motion of 2 units
    pub fn apply_pos_delta(&mut self, fwd_back: Number, right_left: Number, up_down: Number) {
        let (right, _, fwd) = self.basis();

        self.pos += Vector3::Y * up_down;
        self.pos += fwd * fwd_back;
        self.pos += right * right_left;
    }

    /// Applies rotation to the camera
    ///
    /// Pitch is clamped so the camera can never look exactly up or down
    pub fn apply_rot_delta(&mut self, yaw: Angle, pitch: Angle) -> Result<(), CamInvalidError> {
        profile_function!();

        let (right, _, fwd) = self.basis();

        let current_pitch = fwd.y.clamp(-1., 1.).asin();
        let max_pitch = MAX_PITCH_DEGREES.to_radians();
        let pitch = (current_pitch + pitch.radians).clamp(-max_pitch, max_pitch) - current_pitch;

        let yaw_quat = Quaternion::from_axis_angle(Vector3::Y, yaw.radians);
        let pitch_quat = Quaternion::from_axis_angle(right, pitch);
        self.fwd = ((yaw_quat * pitch_quat) * fwd)
            .try_normalize()
            .ok_or(CamInvalidError::ForwardVectorInvalid)?;

        Ok(())
    }

    /// Half the height of the view plane, one unit in front of the camera
    fn half_height(&self) -> Result<Number, CamInvalidError> {
        let h = (self.v_fov / 2.).tan();
        if h.is_finite() && h > 0. {
            Ok(h)
        } else {
            Err(CamInvalidError::FovInvalid)
        }
    }

    /// Checks that the camera is in a state that can produce rays
    pub fn validate(&self) -> Result<(), CamInvalidError> {
        self.fwd.try_normalize().ok_or(CamInvalidError::ForwardVectorInvalid)?;
        self.half_height().map(|_| ())
    }

    /// Calculates the world-space ray that starts at the camera and passes through the given point on the screen.
    ///
    /// # Parameters
    /// - `ndc`: Normalised device coordinates, `-1..=1` on both axes, with `+y` being up
    /// - `aspect`: Width divided by height of the viewport
    pub fn ray_through_ndc(&self, ndc: Point2, aspect: Number) -> Ray {
        let (right, up, fwd) = self.basis();
        // An invalid FOV collapses every ray onto the forward vector, rather than making NaNs
        let h = self.half_height().unwrap_or(0.);

        let dir = fwd + (right * (ndc.x * h * aspect)) + (up * (ndc.y * h));
        let ray = Ray::new(self.pos, dir);
        validate::ray(&ray);
        ray
    }

    /// Projects a world-space point onto the screen, returning the normalised device coordinates.
    ///
    /// This is the inverse of [Self::ray_through_ndc]. Returns [None] if the point is closer than the near plane
    /// (including points behind the camera).
    pub fn project(&self, point: Point3, aspect: Number) -> Option<Point2> {
        let (right, up, fwd) = self.basis();
        let h = self.half_height().ok()?;

        let rel = point - self.pos;
        let depth = Vector3::dot(rel, fwd);
        if depth < self.near {
            return None;
        }

        Some(Point2::new(
            Vector3::dot(rel, right) / (depth * h * aspect),
            Vector3::dot(rel, up) / (depth * h),
        ))
    }
}

/// The area of the screen that the scene is displayed in, in pixels
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: Number,
    height: Number,
}

impl Viewport {
    pub fn new(width: Number, height: Number) -> Result<Self, CamInvalidError> {
        let valid = |d: Number| d.is_finite() && d > 0.;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(CamInvalidError::ViewportInvalid)
        }
    }

    pub fn width(&self) -> Number { self.width }
    pub fn height(&self) -> Number { self.height }
    pub fn aspect(&self) -> Number { self.width / self.height }

    /// Converts screen-space pixel coordinates (top-left to bot-right) into normalised device coordinates
    pub fn to_ndc(&self, screen: Point2) -> Point2 {
        Point2::new(
            (2. * screen.x / self.width) - 1.,
            1. - (2. * screen.y / self.height),
        )
    }

    /// Converts normalised device coordinates into screen-space pixel coordinates. Inverse of [Self::to_ndc]
    pub fn to_screen(&self, ndc: Point2) -> Point2 {
        Point2::new(
            (ndc.x + 1.) * self.width / 2.,
            (1. - ndc.y) * self.height / 2.,
        )
    }
}
