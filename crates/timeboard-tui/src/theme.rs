//! Theme and color system for the timeboard TUI
//!
//! Each activity kind gets an accent color (the card's top band) and a glyph
//! standing in for its icon:
//! - Work: orange
//! - Play: blue
//! - Study: pink
//! - Exercise: green
//! - Social: purple
//! - Self Care: yellow

use ratatui::style::Color;
use timeboard_core::models::{ActivityKind, ColorScheme};

/// Accent colors and glyphs per activity kind
pub struct ActivityStyle;

impl ActivityStyle {
    pub fn accent(kind: ActivityKind) -> Color {
        match kind {
            ActivityKind::Work => Color::Rgb(255, 139, 100),
            ActivityKind::Play => Color::Rgb(85, 194, 230),
            ActivityKind::Study => Color::Rgb(255, 94, 125),
            ActivityKind::Exercise => Color::Rgb(75, 207, 130),
            ActivityKind::Social => Color::Rgb(115, 53, 210),
            ActivityKind::SelfCare => Color::Rgb(241, 199, 91),
            ActivityKind::Other => Color::Gray,
        }
    }

    /// Single-width glyph; unknown kinds share the exercise glyph like the
    /// icon fallback does
    pub fn glyph(kind: ActivityKind) -> &'static str {
        match kind {
            ActivityKind::Work => "▣",
            ActivityKind::Play => "▶",
            ActivityKind::Study => "✎",
            ActivityKind::Exercise | ActivityKind::Other => "♥",
            ActivityKind::Social => "☺",
            ActivityKind::SelfCare => "✿",
        }
    }
}

/// Base color helpers for backgrounds and foregrounds
pub struct BaseColors;

impl BaseColors {
    /// Primary background color
    pub fn bg(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::Rgb(13, 20, 41),
            ColorScheme::Light => Color::White,
        }
    }

    /// Card and header surface
    pub fn surface(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::Rgb(28, 31, 74),
            ColorScheme::Light => Color::Rgb(235, 236, 245),
        }
    }

    /// Primary foreground/text color
    pub fn fg(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::White,
            ColorScheme::Light => Color::Black,
        }
    }

    /// Muted/secondary text color
    pub fn muted(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::Rgb(187, 192, 255),
            ColorScheme::Light => Color::DarkGray,
        }
    }

    /// Highlight for the profile block and focused elements
    pub fn highlight(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::Rgb(93, 95, 239),
            ColorScheme::Light => Color::Rgb(60, 62, 200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_kind_uses_fallback_glyph() {
        assert_eq!(
            ActivityStyle::glyph(ActivityKind::Other),
            ActivityStyle::glyph(ActivityKind::Exercise)
        );
    }

    #[test]
    fn test_known_kinds_have_distinct_accents() {
        let kinds = [
            ActivityKind::Work,
            ActivityKind::Play,
            ActivityKind::Study,
            ActivityKind::Exercise,
            ActivityKind::Social,
            ActivityKind::SelfCare,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(ActivityStyle::accent(*a), ActivityStyle::accent(*b));
            }
        }
    }

    #[test]
    fn test_schemes_differ() {
        assert_ne!(
            BaseColors::bg(ColorScheme::Dark),
            BaseColors::bg(ColorScheme::Light)
        );
        assert_ne!(
            BaseColors::fg(ColorScheme::Dark),
            BaseColors::fg(ColorScheme::Light)
        );
    }
}
