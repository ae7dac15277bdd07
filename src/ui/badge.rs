use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

use crate::config::config::BadgeConfig;

/// Background tint for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Red,
    Yellow,
    Green,
    Neutral,
}

impl BadgeColor {
    /// Fixed lookup from status text to tint. Anything unrecognised is neutral.
    pub fn for_status(status: &str) -> Self {
        match status {
            "Failed" => BadgeColor::Red,
            "Waiting" => BadgeColor::Yellow,
            "Paid" => BadgeColor::Green,
            _ => BadgeColor::Neutral,
        }
    }
}

/// Resolved RGB colours for each badge tint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgePalette {
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub neutral: Color,
}

impl Default for BadgePalette {
    fn default() -> Self {
        Self {
            red: Color::Rgb(0xFE, 0xB2, 0xB2),
            yellow: Color::Rgb(0xFE, 0xFC, 0xBF),
            green: Color::Rgb(0x9A, 0xE6, 0xB4),
            neutral: Color::Rgb(0xE2, 0xE8, 0xF0),
        }
    }
}

impl BadgePalette {
    /// Build from config, keeping the default for any colour that does not parse
    pub fn from_config(config: &BadgeConfig) -> Self {
        let defaults = Self::default();
        Self {
            red: parse_or(&config.failed, defaults.red),
            yellow: parse_or(&config.waiting, defaults.yellow),
            green: parse_or(&config.paid, defaults.green),
            neutral: parse_or(&config.neutral, defaults.neutral),
        }
    }

    pub fn color(&self, badge: BadgeColor) -> Color {
        match badge {
            BadgeColor::Red => self.red,
            BadgeColor::Yellow => self.yellow,
            BadgeColor::Green => self.green,
            BadgeColor::Neutral => self.neutral,
        }
    }

    /// Style for a badge: tinted background, dark bold text
    pub fn style_for_badge(&self, badge: BadgeColor) -> Style {
        Style::default()
            .bg(self.color(badge))
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }
}

/// Parse `#RRGGBB` (leading `#` optional)
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn parse_or(value: &str, fallback: Color) -> Color {
    parse_hex_color(value).unwrap_or_else(|| {
        warn!(target: "config", "Invalid badge colour '{}', using default", value);
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lookup() {
        assert_eq!(BadgeColor::for_status("Failed"), BadgeColor::Red);
        assert_eq!(BadgeColor::for_status("Waiting"), BadgeColor::Yellow);
        assert_eq!(BadgeColor::for_status("Paid"), BadgeColor::Green);
        assert_eq!(BadgeColor::for_status("paid"), BadgeColor::Neutral);
        assert_eq!(BadgeColor::for_status("Refunded"), BadgeColor::Neutral);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FEB2B2"), Some(Color::Rgb(0xFE, 0xB2, 0xB2)));
        assert_eq!(parse_hex_color("9ae6b4"), Some(Color::Rgb(0x9A, 0xE6, 0xB4)));
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn test_palette_from_default_config_matches_default() {
        let palette = BadgePalette::from_config(&BadgeConfig::default());
        assert_eq!(palette, BadgePalette::default());
    }

    #[test]
    fn test_bad_config_colour_falls_back() {
        let config = BadgeConfig {
            failed: "not-a-colour".to_string(),
            ..BadgeConfig::default()
        };
        let palette = BadgePalette::from_config(&config);
        assert_eq!(palette.red, BadgePalette::default().red);
    }
}
