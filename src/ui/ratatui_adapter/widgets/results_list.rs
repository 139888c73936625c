//! Result dropdown widget
//!
//! Overlay list of entries matching the current query, drawn under the
//! search bar. The highlighted row tracks either the keyboard cursor or
//! the hovered mouse position.

use crate::search::SearchController;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};

/// Dropdown list of search results
pub struct ResultsList<'a> {
    search: &'a SearchController,
    theme: &'a Theme,
}

impl<'a> ResultsList<'a> {
    /// Create a new results list widget
    #[must_use]
    pub const fn new(search: &'a SearchController, theme: &'a Theme) -> Self {
        Self { search, theme }
    }
}

impl Widget for ResultsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(" Results ({}) ", self.search.results.len()));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.search.results.is_empty() {
            let line = Line::from(Span::styled("No matches", self.theme.dimmed_style()));
            List::new([ListItem::new(line)]).render(inner, buf);
            return;
        }

        let start = self.search.results_scroll;
        let end = (start + inner.height as usize).min(self.search.results.len());

        let items: Vec<ListItem> = self.search.results[start..end]
            .iter()
            .enumerate()
            .map(|(offset, id)| {
                let index = start + offset;
                let is_active = self.search.active == Some(index);

                let name_style = if is_active {
                    self.theme.selected_style()
                } else {
                    self.theme.name_style()
                };

                let mut spans = Vec::new();
                if let Some(entry) = self.search.catalog().get(id) {
                    spans.push(Span::styled(entry.name.clone(), name_style));
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(
                        entry.nickname.clone(),
                        self.theme.nickname_style(),
                    ));
                } else {
                    spans.push(Span::styled(id.clone(), name_style));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
