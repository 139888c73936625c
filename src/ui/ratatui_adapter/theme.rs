//! Color theme for the browse TUI
//!
//! One palette struct, resolved to [`Style`] values through small
//! accessors so widgets never hardcode colors.

use ratatui::style::{Color, Modifier, Style};

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the selected card and highlighted result
    pub selection_bg: Color,
    /// Foreground color for selected items
    pub selection_fg: Color,
    /// Color for the active skin dot, panel border, and captions
    pub accent: Color,
    /// Color for the query cursor indicator
    pub cursor: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for entry names
    pub name: Color,
    /// Color for entry nicknames
    pub nickname: Color,
    /// Color for disabled navigation arrows
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The default dark palette, gold accents on a deep blue selection
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Rgb(17, 62, 89),
            selection_fg: Color::White,
            accent: Color::Rgb(201, 170, 113),
            cursor: Color::LightCyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            name: Color::White,
            nickname: Color::Gray,
            disabled: Color::DarkGray,
        }
    }

    /// Style for the selected card or highlighted result row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected items
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the query cursor indicator
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        fg(self.cursor).add_modifier(Modifier::BOLD)
    }

    /// Style for captions and emphasized panel chrome
    #[must_use]
    pub fn accent_style(&self) -> Style {
        fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for the detail panel border
    #[must_use]
    pub fn panel_border_style(&self) -> Style {
        fg(self.accent)
    }

    /// Style for grid and overlay borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        fg(self.dimmed)
    }

    /// Style for entry names
    #[must_use]
    pub fn name_style(&self) -> Style {
        fg(self.name)
    }

    /// Style for entry nicknames
    #[must_use]
    pub fn nickname_style(&self) -> Style {
        fg(self.nickname).add_modifier(Modifier::ITALIC)
    }

    /// Style for disabled navigation arrows
    #[must_use]
    pub fn disabled_style(&self) -> Style {
        fg(self.disabled).add_modifier(Modifier::DIM)
    }

    /// Style for the indicator dot under the carousel cursor
    #[must_use]
    pub fn active_dot_style(&self) -> Style {
        fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for inactive indicator dots
    #[must_use]
    pub fn dot_style(&self) -> Style {
        fg(self.dimmed)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        fg(self.info)
    }
}
