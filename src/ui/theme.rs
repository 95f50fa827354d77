//! Color theme constants for the atlas UI.
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected row highlight
pub const COLOR_SELECTED: Color = Color::LightGreen;

/// Error text
pub const COLOR_ERROR: Color = Color::LightRed;

/// Disabled pagination controls
pub const COLOR_DISABLED: Color = Color::DarkGray;
