//! Centralized theme and styling for the TUI
//!
//! Single source of truth for all colors and visual constants used
//! throughout the application. The palette follows the brand site's
//! dark-charcoal-and-gold look.
//!
//! # Usage
//! ```rust
//! use lincoln_tui::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::GOLD);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application.
/// All colors should be defined here rather than hardcoded in screens.
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background, used for most panels
    pub const BG_PRIMARY: Color = Color::Rgb(26, 26, 26);

    /// Alternative dark background for contrast areas
    pub const BG_SECONDARY: Color = Color::Rgb(45, 45, 45);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors (branding, emphasis)
    // -------------------------------------------------------------------------

    /// Brand gold, used for titles, prices, and highlights
    pub const GOLD: Color = Color::Rgb(212, 175, 55);

    /// Secondary accent for selected items
    pub const ACCENT: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors (status, feedback)
    // -------------------------------------------------------------------------

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Warning/caution feedback
    pub const WARNING: Color = Color::Yellow;

    /// Error/danger feedback
    pub const ERROR: Color = Color::Red;

    /// Informational feedback
    pub const INFO: Color = Color::Blue;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Rgb(212, 175, 55);

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected list item background
    pub const SELECTED_BG: Color = Color::Rgb(212, 175, 55);

    /// Selected list item text (for contrast on gold)
    pub const SELECTED_FG: Color = Color::Black;
}

/// Pre-built styles for common UI elements
pub struct Styles;

impl Styles {
    /// Screen title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::GOLD)
            .add_modifier(Modifier::BOLD)
    }

    /// Section heading style
    pub fn heading() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Muted helper text
    pub fn muted() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Price/rate emphasis
    pub fn price() -> Style {
        Style::default()
            .fg(Colors::GOLD)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted list row
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Error message style
    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Success message style
    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }
}
