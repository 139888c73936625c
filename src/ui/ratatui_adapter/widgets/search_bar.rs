//! Query input bar at the top of the browse view

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the query text with a blinking caret at the edit position
pub struct SearchBar<'a> {
    query: &'a str,
    /// Byte offset of the caret, always on a char boundary
    cursor: usize,
    theme: &'a Theme,
    /// Whether the query owns the keyboard
    focused: bool,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

fn caret() -> Span<'static> {
    Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK))
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut line = Line::default();
        line.push_span(Span::styled("❯ ", self.theme.accent_style()));

        if self.query.is_empty() {
            if self.focused {
                line.push_span(caret());
            }
            line.push_span(Span::styled(
                "Type to filter champions",
                self.theme.dimmed_style(),
            ));
        } else {
            let (before, after) = self.query.split_at(self.cursor);
            line.push_span(Span::raw(before));
            if self.focused {
                line.push_span(caret());
            }
            line.push_span(Span::raw(after));
        }

        Paragraph::new(line).render(inner, buf);
    }
}
