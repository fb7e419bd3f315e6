//! Color theme constants for the factdash UI.
//!
//! Minimal dark palette; category badge colors live in
//! `crate::projector` because they are part of the fixed mapping table.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the active screen tab
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Spinner and in-progress indicators
pub const COLOR_PENDING: Color = Color::Yellow;

/// Inline error banner text
pub const COLOR_ERROR: Color = Color::Red;

/// Positive sentiment bar
pub const COLOR_POSITIVE: Color = Color::Rgb(76, 175, 80); // green #4CAF50

/// Neutral sentiment bar
pub const COLOR_NEUTRAL: Color = Color::Rgb(255, 193, 7); // amber #FFC107

/// Negative sentiment bar
pub const COLOR_NEGATIVE: Color = Color::Rgb(244, 67, 54); // red #F44336
