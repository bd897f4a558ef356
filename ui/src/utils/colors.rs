//! Shared color constants for the UI.

use egui::Color32;

/// Forest green for success toasts.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for errors and destructive actions.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Purple badge fill for admins.
pub const COLOR_ADMIN: Color32 = Color32::from_rgb(111, 66, 193);

/// Blue badge fill for regular users.
pub const COLOR_USER: Color32 = Color32::from_rgb(13, 110, 253);

/// Border color for the users table (subtle gray).
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background for the users table (light gray).
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);
