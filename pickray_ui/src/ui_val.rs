//! Strings and constants for use in the UI, such as units, labels and speeds

use pickray_engine::core::types::Number;

pub const APP_NAME: &str = "pickray";

pub const UNIT_DEG: &str = " °";
pub const UNIT_LEN: &str = " m";

pub const DRAG_SPEED_LEN: f64 = 0.05;

/// Allowed range for the camera's vertical FOV, in degrees
pub const FOV_RANGE: (Number, Number) = (1.0, 179.0);

/// Degrees of rotation per pixel dragged, per second
pub const ROTATE_SPEED: Number = 25.0;
/// Metres moved per second while a movement key is held
pub const MOVE_SPEED: Number = 5.0;
/// Multiplier when holding shift (fast) or alt (slow)
pub const SPEED_MODIFIER: Number = 5.0;

/// Resolution of the preview render, relative to the size of the viewport on screen
pub const PREVIEW_SCALE: f32 = 0.5;

/// Colour and width of the bounding volume overlay
pub const OVERLAY_STROKE: (f32, egui::Color32) = (1.5, egui::Color32::from_rgb(255, 255, 255));
