//! Card grid widget
//!
//! The full catalog laid out as fixed-size cards in catalog order. The
//! selected card is emphasized; scrolling works in whole card rows. The
//! event loop decides the column count from the terminal width before
//! rendering, so the controller and the hit tests agree on geometry.

use crate::search::SearchController;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Width of one card in terminal columns
pub const CARD_WIDTH: u16 = 26;

/// Height of one card in terminal rows
pub const CARD_HEIGHT: u16 = 4;

/// Grid of entry cards
pub struct CardGrid<'a> {
    search: &'a SearchController,
    theme: &'a Theme,
}

impl<'a> CardGrid<'a> {
    /// Create a new card grid widget
    #[must_use]
    pub const fn new(search: &'a SearchController, theme: &'a Theme) -> Self {
        Self { search, theme }
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let catalog = self.search.catalog();
        if catalog.is_empty() {
            let line = Line::from(Span::styled(
                "Catalog is empty. Run `champdex fetch` first.",
                self.theme.dimmed_style(),
            ));
            Paragraph::new(line).render(area, buf);
            return;
        }

        let columns = self.search.grid_columns.max(1);
        let visible_rows = (area.height / CARD_HEIGHT) as usize;
        let ids = catalog.ids();

        for row in 0..visible_rows {
            let grid_row = self.search.grid_scroll + row;
            for column in 0..columns {
                let index = grid_row * columns + column;
                let Some(id) = ids.get(index) else {
                    return;
                };
                let Some(entry) = catalog.get(id) else {
                    continue;
                };

                let card_area = Rect::new(
                    area.x + column as u16 * CARD_WIDTH,
                    area.y + row as u16 * CARD_HEIGHT,
                    CARD_WIDTH,
                    CARD_HEIGHT,
                )
                .intersection(area);
                if card_area.height < CARD_HEIGHT {
                    continue;
                }

                let selected = self.search.selected_id.as_deref() == Some(id.as_str());
                let border_style = if selected {
                    self.theme.panel_border_style()
                } else {
                    self.theme.border_style()
                };
                let name_style = if selected {
                    self.theme.accent_style()
                } else {
                    self.theme.name_style()
                };

                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style);

                let lines = vec![
                    Line::from(Span::styled(entry.name.clone(), name_style)),
                    Line::from(Span::styled(
                        entry.nickname.clone(),
                        self.theme.nickname_style(),
                    )),
                ];

                Paragraph::new(lines).block(block).render(card_area, buf);
            }
        }
    }
}
