//! TUI color semantics and style constants.
//!
//! Pure data — consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Cyan: focused field, keybinding hints
//! - Red: invalid result
//! - Green: valid result
//! - Dim: de-emphasized (unfocused borders, help line)
//! - Triangle fills come from the projector's palette, converted here

use ratatui::style::{Color, Modifier, Style};

use crate::project::{self, OUTLINE};
use crate::types::{Rgb, TriangleCategory};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Valid triangle — green.
pub const STYLE_VALID: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Invalid input — red.
pub const STYLE_INVALID: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// De-emphasized metadata — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Border of the field receiving keystrokes.
pub const STYLE_FOCUSED: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Border of the other fields.
pub const STYLE_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TRIANGLE COLORS
// ============================================================================

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Terminal fill color for a category.
pub fn category_color(category: TriangleCategory) -> Color {
    to_color(project::category_color(category))
}

/// Terminal outline color for every triangle.
pub fn outline_color() -> Color {
    to_color(OUTLINE)
}

/// Style of the result label.
pub fn result_style(category: TriangleCategory) -> Style {
    if category.is_valid() {
        STYLE_VALID
    } else {
        STYLE_INVALID
    }
}

// ============================================================================
// TESTS
// ============================================================================
