//! Bottom-row key hint bar

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One `key:action` pair shown in the hint bar
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Renders the hint pairs in a single dimmed row
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the search and grid surface
    #[must_use]
    pub fn browse_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("type", "filter"),
            KeyHint::new("↑/↓", "navigate"),
            KeyHint::new("Enter", "open"),
            KeyHint::new("click", "select"),
            KeyHint::new("ESC", "quit"),
        ]
    }

    /// Hints while the detail panel is open
    #[must_use]
    pub fn panel_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("←/→", "skins"),
            KeyHint::new("↑/↓", "entries"),
            KeyHint::new("q/w/e/r/p", "abilities"),
            KeyHint::new("ctrl+y", "copy name"),
            KeyHint::new("ctrl+o", "open splash"),
            KeyHint::new("ESC", "close"),
        ]
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut line = Line::default();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                line.push_span(Span::styled("  ", self.theme.dimmed_style()));
            }
            line.push_span(Span::styled(hint.key, self.theme.cursor_style()));
            line.push_span(Span::styled(":", self.theme.dimmed_style()));
            line.push_span(Span::raw(hint.action));
        }
        Paragraph::new(line).render(area, buf);
    }
}
