//! Theme for the Colabino terminal prototype.
//!
//! A high-contrast greyscale base with a small set of accent tones for
//! the workspace badges (ribbons, health, presence, issue tags).

use ratatui::style::{Color, Modifier, Style};

use crate::workspace::chat::Presence;
use crate::workspace::drive::{Health, Permission};

pub struct Theme;

impl Theme {
    // Core greyscale palette, brightest to darkest.

    /// Pure white - maximum emphasis
    pub const WHITE: Color = Color::Rgb(255, 255, 255);

    /// Near white - headers, selected items
    pub const GREY_50: Color = Color::Rgb(250, 250, 250);

    /// Bright grey - primary text
    pub const GREY_100: Color = Color::Rgb(220, 220, 220);

    /// Light grey - secondary text
    pub const GREY_200: Color = Color::Rgb(180, 180, 180);

    /// Medium grey - muted text
    pub const GREY_300: Color = Color::Rgb(140, 140, 140);

    /// Dark grey - subtle elements, inactive tabs
    pub const GREY_400: Color = Color::Rgb(100, 100, 100);

    /// Darker grey - borders, separators
    pub const GREY_500: Color = Color::Rgb(70, 70, 70);

    /// Very dark grey - panel backgrounds
    pub const GREY_600: Color = Color::Rgb(45, 45, 45);

    /// Dark grey - overlay backgrounds
    pub const GREY_700: Color = Color::Rgb(35, 35, 35);

    /// Near black - main background
    pub const GREY_800: Color = Color::Rgb(28, 28, 28);

    /// True black - deepest background
    pub const GREY_900: Color = Color::Rgb(18, 18, 18);

    /// Background color alias
    pub const BG: Color = Self::GREY_900;

    // Accent tones, mapped from the workspace badge palette.

    pub const RED: Color = Color::Rgb(239, 68, 68);
    pub const AMBER: Color = Color::Rgb(245, 158, 11);
    pub const EMERALD: Color = Color::Rgb(16, 185, 129);
    pub const SKY: Color = Color::Rgb(14, 165, 233);
    pub const ROSE: Color = Color::Rgb(244, 63, 94);
    pub const VIOLET: Color = Color::Rgb(139, 92, 246);

    // Pre-built styles for common UI elements.

    /// Primary text style
    pub fn text() -> Style {
        Style::default().fg(Self::GREY_100)
    }

    /// Secondary/muted text
    pub fn text_muted() -> Style {
        Style::default().fg(Self::GREY_300)
    }

    /// Dimmed text for less important items
    pub fn text_dim() -> Style {
        Style::default().fg(Self::GREY_400)
    }

    /// Bold emphasis
    pub fn bold() -> Style {
        Style::default()
            .fg(Self::GREY_50)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for panels
    pub fn border() -> Style {
        Style::default().fg(Self::GREY_500)
    }

    /// Active border (focused panel)
    pub fn border_active() -> Style {
        Style::default().fg(Self::GREY_300)
    }

    /// Title style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::GREY_50)
            .add_modifier(Modifier::BOLD)
    }

    /// Keybinding highlight
    pub fn key() -> Style {
        Style::default()
            .fg(Self::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    // Badge colors.

    pub fn health_color(health: Health) -> Color {
        match health {
            Health::Healthy => Self::EMERALD,
            Health::Watch => Self::AMBER,
            Health::AtRisk => Self::RED,
        }
    }

    pub fn permission_color(permission: Permission) -> Color {
        match permission {
            Permission::Owner => Self::GREY_50,
            Permission::Editor => Self::GREY_200,
            Permission::Viewer => Self::GREY_300,
            Permission::Restricted => Self::AMBER,
        }
    }

    pub fn presence_color(presence: Presence) -> Color {
        match presence {
            Presence::Online => Self::EMERALD,
            Presence::Busy => Self::AMBER,
            Presence::Offline => Self::GREY_500,
        }
    }

    /// URGENT stands out; everything else stays quiet.
    pub fn priority_style(urgent: bool) -> Style {
        if urgent {
            Style::default().fg(Self::RED).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::GREY_300)
        }
    }

    /// Progress bar characters
    pub const BAR_FILLED: char = '█';
    pub const BAR_EMPTY: char = '░';

    /// Bullet/indicator characters
    pub const BULLET_FILLED: char = '●';
    pub const BULLET_EMPTY: char = '○';
    pub const BULLET_HALF: char = '◐';
    pub const DIAMOND_FILLED: char = '◆';
    pub const DIAMOND_EMPTY: char = '◇';
    pub const ARROW_RIGHT: char = '▸';
    pub const DOT_SEPARATOR: char = '·';
    pub const CHECK_MARK: char = '✓';
}

/// Generate a horizontal bar gauge for a 0-100 value.
pub fn bar_gauge(value: u8, width: usize) -> String {
    let filled = (value as usize * width) / 100;
    let mut result = String::new();

    for i in 0..width {
        if i < filled {
            result.push(Theme::BAR_FILLED);
        } else {
            result.push(Theme::BAR_EMPTY);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_gauge_width() {
        assert_eq!(bar_gauge(50, 10).chars().count(), 10);
        assert_eq!(bar_gauge(0, 6), "░░░░░░");
        assert_eq!(bar_gauge(100, 4), "████");
    }

    #[test]
    fn test_health_colors_are_distinct() {
        let colors = [
            Theme::health_color(Health::Healthy),
            Theme::health_color(Health::Watch),
            Theme::health_color(Health::AtRisk),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }
}
