//! Sizing, color, and styling constants for the dialog.

/// Label of the confirm button when none is configured
pub const DEFAULT_BUTTON_TEXT: &str = "SUBMIT";

/// Channel slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Thumb radius on channel sliders
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for the swatch and button
pub const RADIUS: f32 = 4.0;

/// Gap between dialog rows
pub const GAP: f32 = 8.0;

/// Padding around the whole dialog
pub const PADDING: f32 = 12.0;

/// Width of the channel letter column
pub const LABEL_WIDTH: f32 = 12.0;

/// Preview swatch height
pub const SWATCH_HEIGHT: f32 = 48.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 72.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Checkerboard cell size (behind the alpha slider and swatch)
pub const CHECKER_CELL: f64 = 5.0;

/// Confirm button accent when no background is configured, `0xAARRGGBB`
pub const BUTTON_ACCENT: u32 = 0xFF3B_82F6;
