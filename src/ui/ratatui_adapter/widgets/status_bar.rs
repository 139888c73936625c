//! Status row under the grid

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Single-row status bar: latest message left, catalog summary right
pub struct StatusBar<'a> {
    /// Most recent status message, if one is still fresh
    latest: Option<(MessageLevel, String)>,
    /// Right-aligned summary (entry count, selection)
    summary: String,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(
        latest: Option<(MessageLevel, String)>,
        summary: String,
        theme: &'a Theme,
    ) -> Self {
        Self {
            latest,
            summary,
            theme,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [message_area, summary_area] =
            Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)])
                .areas(area);

        if let Some((level, text)) = &self.latest {
            let (glyph, style) = match level {
                MessageLevel::Success => ("✓ ", self.theme.success_style()),
                MessageLevel::Error => ("✗ ", self.theme.error_style()),
                MessageLevel::Warning => ("⚠ ", self.theme.warning_style()),
                MessageLevel::Info => ("ℹ ", self.theme.info_style()),
                MessageLevel::Normal => ("", self.theme.normal_style()),
            };
            let line = Line::from(vec![
                Span::styled(glyph, style),
                Span::styled(text.as_str(), style),
            ]);
            Paragraph::new(line).render(message_area, buf);
        }

        let summary = Line::from(Span::styled(
            self.summary.as_str(),
            self.theme.dimmed_style(),
        ));
        Paragraph::new(summary)
            .alignment(Alignment::Right)
            .render(summary_area, buf);
    }
}
