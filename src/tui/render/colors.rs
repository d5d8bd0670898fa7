//! Color palette for the TUI
//!
//! Dark surface with the brand magenta as the single accent

use ratatui::style::Color;

// UI Chrome
pub const BORDER: Color = Color::Rgb(100, 110, 130);
pub const BORDER_FOCUSED: Color = Color::Rgb(223, 39, 123);
pub const SURFACE: Color = Color::Rgb(30, 32, 40);
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);
pub const TEXT_ON_ACCENT: Color = Color::Rgb(255, 255, 255);

// Brand
pub const ACCENT: Color = Color::Rgb(223, 39, 123);
pub const ACCENT_SOFT: Color = Color::Rgb(160, 110, 220);
pub const BADGE_NEW: Color = Color::Rgb(120, 180, 120);

// Panels
pub const PANEL_BG: Color = Color::Rgb(25, 27, 35);
pub const INPUT_BG: Color = Color::Rgb(35, 40, 50);

// Validation
pub const WARNING: Color = Color::Rgb(200, 100, 100);
pub const DISABLED: Color = Color::Rgb(70, 74, 88);
pub const SUCCESS: Color = Color::Rgb(120, 180, 120);
