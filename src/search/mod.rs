//! Search controller - query filtering and card-grid selection
//!
//! Owns the search box state, the results dropdown, and which grid card is
//! currently selected. Filtering is a case-insensitive substring match on
//! entry names, preserving catalog order. Selection broadcasts the chosen id
//! together with the full grid order so the panel can navigate siblings.
//!
//! The controller is UI-agnostic: widgets render from its fields and report
//! measured geometry (visible rows, grid columns) back into it, but all
//! behavior lives here.

use crate::catalog::Catalog;
use crate::signals::{Signal, SignalBus, Subscriber};
use std::sync::Arc;

/// How the user is currently driving the results list
///
/// Keyboard interaction auto-scrolls the highlighted row into centered view;
/// mouse hovering highlights without scrolling, and leaving the results area
/// clears the highlight again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Keyboard,
    Mouse,
}

/// State and operations for search and grid selection
#[derive(Debug)]
pub struct SearchController {
    catalog: Arc<Catalog>,

    /// Current search box contents
    pub query: String,
    /// Byte cursor position within the query string
    pub query_cursor: usize,
    /// Ids of entries matching the query, in catalog order
    pub results: Vec<String>,
    /// Highlighted result index; `None` until the user moves or hovers
    pub active: Option<usize>,
    /// Current input mode for the results list
    pub input_mode: InputMode,
    /// Id of the selected grid card, if any
    pub selected_id: Option<String>,

    /// Scroll offset of the results list, in rows
    pub results_scroll: usize,
    /// Visible result rows (set during render)
    pub results_visible: usize,
    /// Scroll offset of the card grid, in card rows
    pub grid_scroll: usize,
    /// Visible card rows (set during render)
    pub grid_visible_rows: usize,
    /// Cards per grid row (set during render)
    pub grid_columns: usize,
}

impl SearchController {
    /// Create a controller over an already-loaded catalog
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            query: String::new(),
            query_cursor: 0,
            results: Vec::new(),
            active: None,
            input_mode: InputMode::Keyboard,
            selected_id: None,
            results_scroll: 0,
            results_visible: 8,
            grid_scroll: 0,
            grid_visible_rows: 4,
            grid_columns: 1,
        }
    }

    /// The catalog this controller searches
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    // ========================================================================
    // Query editing
    // ========================================================================

    /// Replace the query text and refresh the result list
    pub fn on_query_change(&mut self, text: &str) {
        self.query = text.to_string();
        self.query_cursor = self.query.len();
        self.input_mode = InputMode::Keyboard;
        self.refresh_results();
    }

    /// Insert a character at the query cursor
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
        self.input_mode = InputMode::Keyboard;
        self.refresh_results();
    }

    /// Remove the character before the query cursor
    pub fn query_backspace(&mut self) {
        if self.query_cursor > 0 {
            let prev = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.query.remove(prev);
            self.query_cursor = prev;
            self.input_mode = InputMode::Keyboard;
            self.refresh_results();
        }
    }

    /// Delete the character under the query cursor
    pub fn query_delete(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query.remove(self.query_cursor);
            self.input_mode = InputMode::Keyboard;
            self.refresh_results();
        }
    }

    /// Move the query cursor left one character
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the query cursor right one character
    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Clear the query and the result list
    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
        self.refresh_results();
    }

    /// Whether the results dropdown is shown
    ///
    /// Visible whenever the normalized query is non-empty, even with zero
    /// matches.
    #[must_use]
    pub fn results_shown(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Recompute `results` from the current query
    ///
    /// Normalizes with trim + lowercase and keeps every entry whose name
    /// contains the query, in catalog order. The highlight resets on every
    /// change.
    fn refresh_results(&mut self) {
        let normalized = self.query.trim().to_lowercase();
        self.active = None;
        self.results_scroll = 0;

        if normalized.is_empty() {
            self.results.clear();
            return;
        }

        self.results = self
            .catalog
            .iter()
            .filter(|(_, entry)| entry.name.to_lowercase().contains(&normalized))
            .map(|(id, _)| id.to_string())
            .collect();
    }

    // ========================================================================
    // Result navigation
    // ========================================================================

    /// Move the highlighted result cyclically, wrapping at both ends
    ///
    /// Switches back to keyboard mode and centers the highlight. With no
    /// highlight yet, a downward move lands on the first row.
    pub fn move_active(&mut self, direction: isize) {
        self.input_mode = InputMode::Keyboard;
        let len = self.results.len() as isize;
        if len == 0 {
            return;
        }

        let current = self.active.map_or(-1, |i| i as isize);
        let next = (current + direction).rem_euclid(len);
        self.active = Some(next as usize);
        self.center_active_result();
    }

    /// Highlight the hovered result row without scrolling
    pub fn hover_result(&mut self, index: usize) {
        self.input_mode = InputMode::Mouse;
        if index < self.results.len() {
            self.active = Some(index);
        }
    }

    /// The pointer left the results area
    ///
    /// Only clears the highlight in mouse mode; a keyboard-placed highlight
    /// stays put.
    pub fn leave_results(&mut self) {
        if self.input_mode == InputMode::Mouse {
            self.active = None;
        }
    }

    /// Scroll the results list by a number of rows
    pub fn scroll_results(&mut self, delta: isize) {
        let max = self.results.len().saturating_sub(self.results_visible);
        self.results_scroll = add_clamped(self.results_scroll, delta, max);
    }

    /// Select the highlighted result, or the first result if none is
    /// highlighted; no-op with an empty result list
    pub fn confirm_selection(&mut self, bus: &mut SignalBus) {
        if self.results.is_empty() {
            return;
        }
        let index = self.active.unwrap_or(0).min(self.results.len() - 1);
        let id = self.results[index].clone();
        self.select_by_id(&id, bus);
    }

    fn center_active_result(&mut self) {
        if let Some(index) = self.active {
            let max = self.results.len().saturating_sub(self.results_visible);
            self.results_scroll = index.saturating_sub(self.results_visible / 2).min(max);
        }
    }

    // ========================================================================
    // Grid selection
    // ========================================================================

    /// Select a card by id and broadcast the selection
    ///
    /// Always clears the result list, the query, and any previous card
    /// highlight first; an id missing from the catalog then drops out
    /// silently. On success the card is highlighted, scrolled into centered
    /// view, and the selection is broadcast together with the full grid
    /// order at this moment.
    pub fn select_by_id(&mut self, id: &str, bus: &mut SignalBus) {
        self.query_clear();
        self.selected_id = None;

        if !self.catalog.contains(id) {
            return;
        }
        self.selected_id = Some(id.to_string());
        self.center_card(id);

        let ordered_ids = self.catalog.ids().to_vec();
        bus.publish(Signal::EntrySelected {
            id: id.to_string(),
            ordered_ids,
        });
    }

    /// A grid card was activated (clicked)
    ///
    /// Activating the already-selected card deselects it and broadcasts the
    /// deselection; any other card is selected by id.
    pub fn card_activated(&mut self, id: &str, bus: &mut SignalBus) {
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
            bus.publish(Signal::SelectedCardClosed);
        } else {
            self.select_by_id(id, bus);
        }
    }

    /// Look up an id and broadcast the full record
    ///
    /// Answers a data request; an unknown id is silently ignored.
    pub fn resolve(&self, id: &str, bus: &mut SignalBus) {
        if let Some(entry) = self.catalog.get(id) {
            bus.publish(Signal::CurrentEntry(Box::new(entry.clone())));
        }
    }

    /// Scroll the card grid by a number of card rows
    pub fn scroll_grid(&mut self, delta: isize) {
        let max = self.grid_rows().saturating_sub(self.grid_visible_rows);
        self.grid_scroll = add_clamped(self.grid_scroll, delta, max);
    }

    /// Total card rows at the current grid width
    #[must_use]
    pub fn grid_rows(&self) -> usize {
        let columns = self.grid_columns.max(1);
        self.catalog.len().div_ceil(columns)
    }

    fn center_card(&mut self, id: &str) {
        let Some(position) = self.catalog.ids().iter().position(|i| i == id) else {
            return;
        };
        let columns = self.grid_columns.max(1);
        let row = position / columns;
        let max = self.grid_rows().saturating_sub(self.grid_visible_rows);
        self.grid_scroll = row.saturating_sub(self.grid_visible_rows / 2).min(max);
    }
}

impl Subscriber for SearchController {
    fn on_signal(&mut self, signal: &Signal, bus: &mut SignalBus) {
        match signal {
            Signal::DataReady(catalog) => {
                self.catalog = Arc::clone(catalog);
                self.selected_id = None;
                self.query_clear();
            }
            Signal::DataRequested { id } => self.resolve(id, bus),
            Signal::PanelClosed => self.selected_id = None,
            _ => {}
        }
    }
}

/// Offset `value` by `delta`, clamped to `[0, max]`
fn add_clamped(value: usize, delta: isize, max: usize) -> usize {
    if delta.is_negative() {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta.unsigned_abs()).min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    fn make_controller() -> SearchController {
        SearchController::new(Arc::new(sample_catalog()))
    }

    #[test]
    fn test_query_matches_substring_case_insensitive() {
        let mut search = make_controller();
        search.on_query_change("a");

        // Catalog order is Zed, Aatrox, Ahri, MissFortune
        assert_eq!(search.results, vec!["Aatrox".to_string(), "Ahri".to_string()]);
        for id in &search.results {
            let name = search.catalog().get(id).unwrap().name.to_lowercase();
            assert!(name.contains('a'));
        }
    }

    #[test]
    fn test_query_is_trimmed_and_lowercased() {
        let mut search = make_controller();
        search.on_query_change("  AAT ");
        assert_eq!(search.results, vec!["Aatrox".to_string()]);
    }

    #[test]
    fn test_empty_query_hides_results() {
        let mut search = make_controller();
        search.on_query_change("aat");
        assert!(search.results_shown());

        search.on_query_change("");
        assert!(search.results.is_empty());
        assert!(!search.results_shown());
    }

    #[test]
    fn test_whitespace_query_shows_nothing() {
        let mut search = make_controller();
        search.on_query_change("   ");
        assert!(search.results.is_empty());
        assert!(!search.results_shown());
    }

    #[test]
    fn test_no_matches_keeps_dropdown_visible() {
        let mut search = make_controller();
        search.on_query_change("zzzz");
        assert!(search.results.is_empty());
        assert!(search.results_shown());
    }

    #[test]
    fn test_query_editing_refreshes_results() {
        let mut search = make_controller();
        search.query_push('a');
        search.query_push('h');
        assert_eq!(search.results, vec!["Ahri".to_string()]);

        search.query_backspace();
        assert_eq!(search.results, vec!["Aatrox".to_string(), "Ahri".to_string()]);
    }

    #[test]
    fn test_move_active_is_cyclic() {
        let mut search = make_controller();
        search.on_query_change("a");
        let len = search.results.len();
        assert_eq!(len, 2);

        search.move_active(1);
        assert_eq!(search.active, Some(0));

        // Advancing len times returns to the starting index
        for _ in 0..len {
            search.move_active(1);
        }
        assert_eq!(search.active, Some(0));

        // Wraps backwards from the first row
        search.move_active(-1);
        assert_eq!(search.active, Some(len - 1));
    }

    #[test]
    fn test_move_active_without_results_is_noop() {
        let mut search = make_controller();
        search.move_active(1);
        assert_eq!(search.active, None);
    }

    #[test]
    fn test_query_change_resets_highlight() {
        let mut search = make_controller();
        search.on_query_change("a");
        search.move_active(1);
        assert!(search.active.is_some());

        search.query_push('h');
        assert_eq!(search.active, None);
    }

    #[test]
    fn test_confirm_selection_defaults_to_first_result() {
        let mut search = make_controller();
        let mut bus = SignalBus::new();
        search.on_query_change("a");
        search.confirm_selection(&mut bus);

        match bus.pop() {
            Some(Signal::EntrySelected { id, .. }) => assert_eq!(id, "Aatrox"),
            other => panic!("expected EntrySelected, got {other:?}"),
        }
    }

    #[test]
    fn test_confirm_selection_uses_highlight() {
        let mut search = make_controller();
        let mut bus = SignalBus::new();
        search.on_query_change("a");
        search.move_active(1);
        search.move_active(1);
        search.confirm_selection(&mut bus);

        match bus.pop() {
            Some(Signal::EntrySelected { id, .. }) => assert_eq!(id, "Ahri"),
            other => panic!("expected EntrySelected, got {other:?}"),
        }
    }

    #[test]
    fn test_confirm_selection_without_results_is_noop() {
        let mut search = make_controller();
        let mut bus = SignalBus::new();
        search.confirm_selection(&mut bus);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_select_by_id_broadcasts_grid_order() {
        let mut search = make_controller();
        let mut bus = SignalBus::new();
        search.on_query_change("aat");
        search.select_by_id("Aatrox", &mut bus);

        assert!(search.query.is_empty());
        assert!(search.results.is_empty());
        assert_eq!(search.selected_id.as_deref(), Some("Aatrox"));

        match bus.pop() {
            Some(Signal::EntrySelected { id, ordered_ids }) => {
                assert_eq!(id, "Aatrox");
                assert_eq!(ordered_ids, search.catalog().ids());
            }
            other => panic!("expected EntrySelected, got {other:?}"),
        }
    }

    #[test]
    fn test_select_by_unknown_id_clears_but_stays_silent() {
        let mut search = make_controller();
        let mut bus = SignalBus::new();
        search.on_query_change("aat");
        search.select_by_id("Nonexistent", &mut bus);

        assert!(search.query.is_empty());
        assert_eq!(search.selected_id, None);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_card_activation_toggles_selection() {
        let mut search = make_controller();
        let mut bus = SignalBus::new();

        search.card_activated("Ahri", &mut bus);
        assert_eq!(search.selected_id.as_deref(), Some("Ahri"));
        assert!(matches!(bus.pop(), Some(Signal::EntrySelected { .. })));

        search.card_activated("Ahri", &mut bus);
        assert_eq!(search.selected_id, None);
        assert_eq!(bus.pop(), Some(Signal::SelectedCardClosed));
    }

    #[test]
    fn test_resolve_known_and_unknown_ids() {
        let search = make_controller();
        let mut bus = SignalBus::new();

        search.resolve("Zed", &mut bus);
        match bus.pop() {
            Some(Signal::CurrentEntry(entry)) => assert_eq!(entry.name, "Zed"),
            other => panic!("expected CurrentEntry, got {other:?}"),
        }

        search.resolve("Nonexistent", &mut bus);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_hover_sets_mouse_mode_without_scrolling() {
        let mut search = make_controller();
        search.on_query_change("a");
        let scroll_before = search.results_scroll;

        search.hover_result(1);
        assert_eq!(search.input_mode, InputMode::Mouse);
        assert_eq!(search.active, Some(1));
        assert_eq!(search.results_scroll, scroll_before);
    }

    #[test]
    fn test_leave_results_only_clears_in_mouse_mode() {
        let mut search = make_controller();
        search.on_query_change("a");

        search.move_active(1);
        search.leave_results();
        assert_eq!(search.active, Some(0));

        search.hover_result(1);
        search.leave_results();
        assert_eq!(search.active, None);
    }

    #[test]
    fn test_typing_switches_back_to_keyboard_mode() {
        let mut search = make_controller();
        search.on_query_change("a");
        search.hover_result(0);
        assert_eq!(search.input_mode, InputMode::Mouse);

        search.query_push('h');
        assert_eq!(search.input_mode, InputMode::Keyboard);
    }

    #[test]
    fn test_empty_catalog_always_yields_empty_results() {
        let mut search = SearchController::new(Arc::new(Catalog::new()));
        search.on_query_change("a");
        assert!(search.results.is_empty());

        let mut bus = SignalBus::new();
        search.confirm_selection(&mut bus);
        assert!(bus.is_empty());
    }

    #[test]
    fn test_panel_closed_clears_card_highlight() {
        let mut search = make_controller();
        let mut bus = SignalBus::new();
        search.select_by_id("Zed", &mut bus);
        assert!(search.selected_id.is_some());

        bus.pop();
        search.on_signal(&Signal::PanelClosed, &mut bus);
        assert_eq!(search.selected_id, None);
    }

    #[test]
    fn test_data_ready_replaces_catalog() {
        let mut search = SearchController::new(Arc::new(Catalog::new()));
        let mut bus = SignalBus::new();
        search.on_signal(&Signal::DataReady(Arc::new(sample_catalog())), &mut bus);

        search.on_query_change("zed");
        assert_eq!(search.results, vec!["Zed".to_string()]);
    }

    #[test]
    fn test_grid_scroll_clamps() {
        let mut search = make_controller();
        search.grid_columns = 2;
        search.grid_visible_rows = 1;

        search.scroll_grid(100);
        assert_eq!(search.grid_scroll, search.grid_rows() - 1);

        search.scroll_grid(-100);
        assert_eq!(search.grid_scroll, 0);
    }
}
