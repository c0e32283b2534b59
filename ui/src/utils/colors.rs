//! Shared color constants for the UI.

use egui::Color32;

/// Forest green color for paid/active/success status.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for unpaid/error status.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber color for partial/warning status.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Blue color for primary highlights.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(59, 130, 246);

/// Teal color for informational status.
pub const COLOR_TEAL: Color32 = Color32::from_rgb(2, 136, 209);

/// Purple color for secondary highlights.
pub const COLOR_PURPLE: Color32 = Color32::from_rgb(139, 92, 246);

/// Neutral gray for unknown status and hints.
pub const COLOR_GRAY: Color32 = Color32::from_rgb(107, 114, 128);

/// Dark red background of data table headers.
pub const COLOR_HEADER_BG: Color32 = Color32::from_rgb(127, 29, 29);
