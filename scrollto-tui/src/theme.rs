//! Sunflower theme module.
//!
//! Warm yellow accent on a dark ink background. The accent is the carousel's
//! active color; inactive items use the same hue at low intensity.

use ratatui::style::Color;

/// Sunflower color palette
pub mod colors {
    use super::Color;

    // === Background Colors ===
    /// Ink - Primary background
    pub const BG_DARK: Color = Color::Rgb(0x1E, 0x1B, 0x24);
    /// Panel background
    pub const BG_MEDIUM: Color = Color::Rgb(0x28, 0x24, 0x30);
    /// Overlay background
    pub const BG_DIM: Color = Color::Rgb(0x16, 0x14, 0x1A);

    // === Foreground Colors ===
    /// Primary text color
    pub const FG_PRIMARY: Color = Color::Rgb(0xEE, 0xE8, 0xDC);
    /// Dimmed text for secondary information
    pub const FG_DIM: Color = Color::Rgb(0x8E, 0x87, 0x99);
    /// Hints and disabled controls
    pub const FG_HINT: Color = Color::Rgb(0x5A, 0x55, 0x63);
    /// Dark text drawn on the accent
    pub const INK: Color = Color::Rgb(0x36, 0x30, 0x3F);

    // === Accent Colors ===
    /// Sunflower - Active item and buttons
    pub const ACCENT: Color = Color::Rgb(0xFC, 0xD2, 0x59);
    /// Sunflower at 20% over the background - Inactive item fill
    pub const ACCENT_DIM: Color = Color::Rgb(0x4A, 0x42, 0x31);

    pub const GREEN: Color = Color::Rgb(0x9C, 0xC2, 0x7E);
    pub const BLUE: Color = Color::Rgb(0x8C, 0xAA, 0xD8);

    // === UI Element Colors ===
    pub const BORDER: Color = Color::Rgb(0x5A, 0x55, 0x63);
    pub const BORDER_DIM: Color = Color::Rgb(0x38, 0x34, 0x40);
}

/// Linear blend from `from` to `to`; non-RGB colors fall back to `from`
pub fn blend(from: Color, to: Color, ratio: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let ratio = ratio.clamp(0.0, 1.0);
            let mix = |a: u8, b: u8| (a as f32 * (1.0 - ratio) + b as f32 * ratio).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => from,
    }
}

/// Semantic styling helpers
pub mod styles {
    use super::colors;
    use ratatui::style::{Modifier, Style};

    pub fn text() -> Style {
        Style::default().fg(colors::FG_PRIMARY)
    }

    pub fn text_dim() -> Style {
        Style::default().fg(colors::FG_DIM)
    }

    pub fn text_hint() -> Style {
        Style::default().fg(colors::FG_HINT)
    }

    /// Section labels ("Scroll Position", "Navigation")
    pub fn label() -> Style {
        Style::default()
            .fg(colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(colors::BORDER)
    }

    pub fn border_dim() -> Style {
        Style::default().fg(colors::BORDER_DIM)
    }

    /// Idle button
    pub fn button() -> Style {
        Style::default()
            .fg(colors::INK)
            .bg(colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Button matching the current alignment
    pub fn button_active() -> Style {
        button().add_modifier(Modifier::REVERSED)
    }

    /// Navigation button that would be a no-op
    pub fn button_disabled() -> Style {
        Style::default().fg(colors::FG_HINT).bg(colors::ACCENT_DIM)
    }
}
