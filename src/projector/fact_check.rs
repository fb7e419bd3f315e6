//! Display projection for fact-check predictions.

use ratatui::style::Color;

use crate::models::Category;

/// Visual badge for a prediction category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryBadge {
    /// Badge color.
    pub color: Color,
    /// Icon name from the fixed mapping table.
    pub icon: &'static str,
    /// Glyph rendered next to the category name.
    pub glyph: &'static str,
}

/// Fixed category-to-badge table.
pub fn badge_for(category: Category) -> CategoryBadge {
    match category {
        Category::Entailment => CategoryBadge {
            color: Color::Green,
            icon: "verified",
            glyph: "✔",
        },
        Category::Contradiction => CategoryBadge {
            color: Color::Red,
            icon: "cancel",
            glyph: "✖",
        },
        Category::Neutral => CategoryBadge {
            color: Color::Rgb(255, 165, 0),
            icon: "help",
            glyph: "?",
        },
        Category::Unknown => CategoryBadge {
            color: Color::Gray,
            icon: "none",
            glyph: "·",
        },
    }
}

/// Format a confidence in [0, 1] as a percentage with one decimal place.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}
