//! Event handling for the browse TUI
//!
//! Translates raw keyboard and mouse events into browse actions. The key
//! map depends on which surface owns the keyboard (detail panel open or
//! not) and whether the result dropdown is visible. Mouse events are
//! resolved against the rectangles measured during the previous render.

use crate::catalog::AbilitySlot;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

/// Actions the event loop can apply to the controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    /// Exit the application
    Quit,
    /// Context-dependent escape (close panel, clear query, or quit)
    Escape,
    /// Insert a character at the query cursor
    QueryChar(char),
    /// Delete the character before the query cursor
    QueryBackspace,
    /// Delete the character at the query cursor
    QueryDelete,
    /// Move the query cursor left
    QueryCursorLeft,
    /// Move the query cursor right
    QueryCursorRight,
    /// Clear the whole query
    QueryClear,
    /// Move the dropdown highlight up or down
    MoveActive(isize),
    /// Open the highlighted result
    ConfirmResult,
    /// Highlight the hovered dropdown row
    HoverResult(usize),
    /// Pointer left the dropdown
    LeaveResults,
    /// Open the clicked dropdown row
    ClickResult(usize),
    /// Toggle selection of the clicked grid card
    ClickCard(usize),
    /// Scroll the dropdown window
    ScrollResults(isize),
    /// Scroll the card grid by rows
    ScrollGrid(isize),
    /// Scroll the card grid by a page in the given direction
    PageGrid(isize),
    /// Show the previous skin
    PrevSkin,
    /// Show the next skin
    NextSkin,
    /// Jump to the previous sibling entry
    PrevEntry,
    /// Jump to the next sibling entry
    NextEntry,
    /// Expand or collapse an ability row
    ToggleAbility(AbilitySlot),
    /// A swipe started at the given column
    BeginDrag(u16),
    /// A swipe ended at the given column
    EndDrag(u16),
    /// Close the detail panel
    ClosePanel,
    /// Open the current splash in the system viewer
    OpenSplash,
    /// Copy the current entry name to the clipboard
    YankName,
}

/// Map a key event to a browse action
///
/// `panel_open` routes keys to the detail panel instead of the search
/// surface. `results_shown` decides whether vertical arrows drive the
/// dropdown highlight or the card grid.
pub fn map_key(key: KeyEvent, panel_open: bool, results_shown: bool) -> Option<BrowseAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Bindings that work on every surface
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(BrowseAction::Quit),
        (KeyCode::Esc, _) => return Some(BrowseAction::Escape),
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => return Some(BrowseAction::YankName),
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => return Some(BrowseAction::OpenSplash),
        _ => {}
    }

    if panel_open {
        return map_panel_key(key);
    }
    map_search_key(key, results_shown)
}

fn map_panel_key(key: KeyEvent) -> Option<BrowseAction> {
    match (key.code, key.modifiers) {
        (KeyCode::Up, _) | (KeyCode::BackTab, _) | (KeyCode::Left, KeyModifiers::SHIFT) => {
            Some(BrowseAction::PrevEntry)
        }
        (KeyCode::Down, _) | (KeyCode::Tab, _) | (KeyCode::Right, KeyModifiers::SHIFT) => {
            Some(BrowseAction::NextEntry)
        }
        (KeyCode::Left, _) => Some(BrowseAction::PrevSkin),
        (KeyCode::Right, _) => Some(BrowseAction::NextSkin),
        (KeyCode::Char('p' | 'P'), _) => Some(BrowseAction::ToggleAbility(AbilitySlot::Passive)),
        (KeyCode::Char('q' | 'Q'), _) => Some(BrowseAction::ToggleAbility(AbilitySlot::Q)),
        (KeyCode::Char('w' | 'W'), _) => Some(BrowseAction::ToggleAbility(AbilitySlot::W)),
        (KeyCode::Char('e' | 'E'), _) => Some(BrowseAction::ToggleAbility(AbilitySlot::E)),
        (KeyCode::Char('r' | 'R'), _) => Some(BrowseAction::ToggleAbility(AbilitySlot::R)),
        _ => None,
    }
}

fn map_search_key(key: KeyEvent, results_shown: bool) -> Option<BrowseAction> {
    match (key.code, key.modifiers) {
        (KeyCode::Up, _) if results_shown => Some(BrowseAction::MoveActive(-1)),
        (KeyCode::Down, _) if results_shown => Some(BrowseAction::MoveActive(1)),
        (KeyCode::Enter, _) => Some(BrowseAction::ConfirmResult),
        (KeyCode::Up, _) => Some(BrowseAction::ScrollGrid(-1)),
        (KeyCode::Down, _) => Some(BrowseAction::ScrollGrid(1)),
        (KeyCode::PageUp, _) => Some(BrowseAction::PageGrid(-1)),
        (KeyCode::PageDown, _) => Some(BrowseAction::PageGrid(1)),
        (KeyCode::Backspace, _) => Some(BrowseAction::QueryBackspace),
        (KeyCode::Delete, _) => Some(BrowseAction::QueryDelete),
        (KeyCode::Left, _) => Some(BrowseAction::QueryCursorLeft),
        (KeyCode::Right, _) => Some(BrowseAction::QueryCursorRight),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(BrowseAction::QueryClear),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            Some(BrowseAction::QueryChar(c))
        }
        _ => None,
    }
}

/// Screen rectangles measured during the previous render
///
/// Rectangles for hidden surfaces are zero-sized, so their hit tests
/// never match.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    /// Inner rows of the result dropdown
    pub results: Rect,
    /// First visible dropdown row index
    pub results_scroll: usize,
    /// Card grid area
    pub grid: Rect,
    /// Width of one grid card
    pub card_width: u16,
    /// Height of one grid card
    pub card_height: u16,
    /// Cards per grid row
    pub grid_columns: usize,
    /// First visible grid row index
    pub grid_scroll: usize,
    /// Whole detail panel overlay
    pub panel: Rect,
    /// Splash carousel (swipe surface)
    pub carousel: Rect,
    /// Previous-skin arrow
    pub skin_left: Rect,
    /// Next-skin arrow
    pub skin_right: Rect,
    /// Previous-sibling button in the panel footer
    pub entry_prev: Rect,
    /// Next-sibling button in the panel footer
    pub entry_next: Rect,
    /// Header row of each ability slot
    pub ability_rows: Vec<(AbilitySlot, Rect)>,
}

impl HitAreas {
    /// Dropdown row index under the pointer, if any
    #[must_use]
    pub fn result_row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.results.contains(Position::new(column, row)) {
            return None;
        }
        Some(self.results_scroll + (row - self.results.y) as usize)
    }

    /// Grid card index under the pointer, if any
    ///
    /// The index may point past the end of the catalog when the last
    /// row is partially filled; callers bounds-check against it.
    #[must_use]
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.grid.contains(Position::new(column, row)) {
            return None;
        }
        if self.card_width == 0 || self.card_height == 0 || self.grid_columns == 0 {
            return None;
        }
        let grid_column = ((column - self.grid.x) / self.card_width) as usize;
        if grid_column >= self.grid_columns {
            return None;
        }
        let grid_row = self.grid_scroll + ((row - self.grid.y) / self.card_height) as usize;
        Some(grid_row * self.grid_columns + grid_column)
    }

    /// Ability slot whose header row is under the pointer, if any
    #[must_use]
    pub fn ability_slot_at(&self, column: u16, row: u16) -> Option<AbilitySlot> {
        let position = Position::new(column, row);
        self.ability_rows
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(slot, _)| *slot)
    }

    /// Forget the panel rectangles after the overlay closes
    pub fn clear_panel(&mut self) {
        self.panel = Rect::default();
        self.carousel = Rect::default();
        self.skin_left = Rect::default();
        self.skin_right = Rect::default();
        self.entry_prev = Rect::default();
        self.entry_next = Rect::default();
        self.ability_rows.clear();
    }
}

/// Map a mouse event to a browse action
pub fn map_mouse(mouse: MouseEvent, areas: &HitAreas, panel_open: bool) -> Option<BrowseAction> {
    let position = Position::new(mouse.column, mouse.row);

    if panel_open {
        return match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if areas.skin_left.contains(position) {
                    Some(BrowseAction::PrevSkin)
                } else if areas.skin_right.contains(position) {
                    Some(BrowseAction::NextSkin)
                } else if areas.entry_prev.contains(position) {
                    Some(BrowseAction::PrevEntry)
                } else if areas.entry_next.contains(position) {
                    Some(BrowseAction::NextEntry)
                } else if let Some(slot) = areas.ability_slot_at(mouse.column, mouse.row) {
                    Some(BrowseAction::ToggleAbility(slot))
                } else if areas.carousel.contains(position) {
                    Some(BrowseAction::BeginDrag(mouse.column))
                } else if !areas.panel.contains(position) {
                    Some(BrowseAction::ClosePanel)
                } else {
                    None
                }
            }
            MouseEventKind::Up(MouseButton::Left) => Some(BrowseAction::EndDrag(mouse.column)),
            MouseEventKind::ScrollDown if areas.carousel.contains(position) => {
                Some(BrowseAction::NextSkin)
            }
            MouseEventKind::ScrollUp if areas.carousel.contains(position) => {
                Some(BrowseAction::PrevSkin)
            }
            _ => None,
        };
    }

    match mouse.kind {
        MouseEventKind::Moved => match areas.result_row_at(mouse.column, mouse.row) {
            Some(row) => Some(BrowseAction::HoverResult(row)),
            None => Some(BrowseAction::LeaveResults),
        },
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(row) = areas.result_row_at(mouse.column, mouse.row) {
                Some(BrowseAction::ClickResult(row))
            } else {
                areas
                    .card_at(mouse.column, mouse.row)
                    .map(BrowseAction::ClickCard)
            }
        }
        MouseEventKind::ScrollDown => {
            if areas.results.contains(position) {
                Some(BrowseAction::ScrollResults(1))
            } else if areas.grid.contains(position) {
                Some(BrowseAction::ScrollGrid(1))
            } else {
                None
            }
        }
        MouseEventKind::ScrollUp => {
            if areas.results.contains(position) {
                Some(BrowseAction::ScrollResults(-1))
            } else if areas.grid.contains(position) {
                Some(BrowseAction::ScrollGrid(-1))
            } else {
                None
            }
        }
        _ => None,
    }
}
