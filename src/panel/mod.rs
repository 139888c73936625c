//! Panel controller - detail overlay, skin carousel, sibling navigation
//!
//! Drives the detail panel that opens when a grid card is selected. The
//! panel requests the full record over the signal bus, then renders a skin
//! carousel with an indicator strip, entry navigation between siblings, and
//! a single-open abilities accordion.
//!
//! Skin navigation is cyclic; sibling navigation clamps at both ends. All
//! panel state is ephemeral and cleared on close.

use crate::catalog::{AbilitySlot, Entry, Skin};
use crate::signals::{Signal, SignalBus, Subscriber};

/// Horizontal drag distance, in terminal columns, that counts as a swipe
/// over the carousel
pub const SWIPE_THRESHOLD_COLUMNS: u16 = 6;

/// State and operations for the detail overlay
#[derive(Debug, Default)]
pub struct PanelController {
    /// Whether the overlay is shown
    pub is_open: bool,
    /// Id of the entry the panel is showing or loading
    pub current_id: Option<String>,
    /// Grid order captured at selection time, used for sibling navigation
    pub sibling_ids: Vec<String>,
    /// Full record, present once the data request has been answered
    pub entry: Option<Entry>,
    /// Index into the current entry's skin list
    pub skin_index: usize,
    /// Which ability description is expanded, if any
    pub open_ability: Option<AbilitySlot>,

    /// First visible dot of the indicator strip
    pub indicator_scroll: usize,
    /// Dots that fit in the strip (set during render)
    pub indicator_visible: usize,
    /// Column where a carousel drag started
    drag_origin: Option<u16>,
}

impl PanelController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            indicator_visible: 16,
            ..Self::default()
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Open the panel on an id and request its full record
    ///
    /// Also used for sibling navigation while already open; the current
    /// contents stay up until the fresh record arrives.
    pub fn open(&mut self, id: &str, bus: &mut SignalBus) {
        self.current_id = Some(id.to_string());
        self.is_open = true;
        bus.publish(Signal::DataRequested { id: id.to_string() });
    }

    /// Store a freshly received record and rebuild the panel contents
    ///
    /// The skin index resets to 0 and any expanded ability collapses.
    pub fn on_entry_received(&mut self, entry: Entry) {
        self.entry = Some(entry);
        self.skin_index = 0;
        self.open_ability = None;
        self.drag_origin = None;
        self.center_indicator();
    }

    /// Close the panel, broadcasting the close before clearing state
    ///
    /// No-op while already closed.
    pub fn close(&mut self, bus: &mut SignalBus) {
        if !self.is_open {
            return;
        }
        bus.publish(Signal::PanelClosed);

        self.is_open = false;
        self.current_id = None;
        self.sibling_ids.clear();
        self.entry = None;
        self.skin_index = 0;
        self.open_ability = None;
        self.indicator_scroll = 0;
        self.drag_origin = None;
    }

    // ========================================================================
    // Skin carousel
    // ========================================================================

    /// Number of skins on the current entry
    #[must_use]
    pub fn skin_count(&self) -> usize {
        self.entry.as_ref().map_or(0, |e| e.skins.len())
    }

    /// The skin the carousel is showing
    #[must_use]
    pub fn current_skin(&self) -> Option<&Skin> {
        self.entry.as_ref()?.skins.get(self.skin_index)
    }

    /// Advance to the next skin, wrapping past the end
    pub fn next_skin(&mut self) {
        let len = self.skin_count();
        if len == 0 {
            return;
        }
        self.skin_index = (self.skin_index + 1) % len;
        self.center_indicator();
    }

    /// Step back to the previous skin, wrapping past the start
    pub fn prev_skin(&mut self) {
        let len = self.skin_count();
        if len == 0 {
            return;
        }
        self.skin_index = (self.skin_index + len - 1) % len;
        self.center_indicator();
    }

    /// Caption under the carousel
    ///
    /// The base skin carries the literal name "default" in the upstream
    /// data; it is shown under the entry's own name instead.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        let entry = self.entry.as_ref()?;
        let skin = entry.skins.get(self.skin_index)?;
        if skin.is_default() {
            Some(&entry.name)
        } else {
            Some(&skin.name)
        }
    }

    /// Splash references adjacent to the current skin, for preloading
    ///
    /// Bounded neighbors only; preloading never wraps around the list.
    #[must_use]
    pub fn preload_targets(&self) -> Vec<&str> {
        let Some(entry) = self.entry.as_ref() else {
            return Vec::new();
        };
        let mut targets = Vec::new();
        if let Some(prev) = self.skin_index.checked_sub(1)
            && let Some(skin) = entry.skins.get(prev)
        {
            targets.push(skin.splash.as_str());
        }
        if let Some(skin) = entry.skins.get(self.skin_index + 1) {
            targets.push(skin.splash.as_str());
        }
        targets
    }

    /// Scroll the indicator strip so the active dot sits centered
    fn center_indicator(&mut self) {
        let visible = self.indicator_visible.max(1);
        let max = self.skin_count().saturating_sub(visible);
        self.indicator_scroll = self.skin_index.saturating_sub(visible / 2).min(max);
    }

    // ========================================================================
    // Sibling navigation
    // ========================================================================

    fn sibling_position(&self) -> Option<usize> {
        let current = self.current_id.as_deref()?;
        self.sibling_ids.iter().position(|id| id == current)
    }

    /// Whether the current id is the first sibling (previous arrow disabled)
    #[must_use]
    pub fn at_first(&self) -> bool {
        self.sibling_position().is_none_or(|p| p == 0)
    }

    /// Whether the current id is the last sibling (next arrow disabled)
    #[must_use]
    pub fn at_last(&self) -> bool {
        let len = self.sibling_ids.len();
        self.sibling_position().is_none_or(|p| p + 1 >= len)
    }

    /// Move to the previous sibling; no-op at the first
    pub fn prev_entry(&mut self, bus: &mut SignalBus) {
        let Some(position) = self.sibling_position() else {
            return;
        };
        if let Some(prev) = position.checked_sub(1) {
            let id = self.sibling_ids[prev].clone();
            self.open(&id, bus);
        }
    }

    /// Move to the next sibling; no-op at the last
    pub fn next_entry(&mut self, bus: &mut SignalBus) {
        let Some(position) = self.sibling_position() else {
            return;
        };
        if position + 1 < self.sibling_ids.len() {
            let id = self.sibling_ids[position + 1].clone();
            self.open(&id, bus);
        }
    }

    // ========================================================================
    // Abilities accordion
    // ========================================================================

    /// Toggle an ability description, collapsing any other open one
    pub fn toggle_ability(&mut self, slot: AbilitySlot) {
        if self.open_ability == Some(slot) {
            self.open_ability = None;
        } else {
            self.open_ability = Some(slot);
        }
    }

    // ========================================================================
    // Carousel drag
    // ========================================================================

    /// A drag started over the carousel at this column
    pub fn begin_drag(&mut self, column: u16) {
        self.drag_origin = Some(column);
    }

    /// The drag ended; a horizontal move past the threshold changes skin
    ///
    /// Dragging left advances, dragging right steps back. Shorter moves are
    /// ignored.
    pub fn end_drag(&mut self, column: u16) {
        let Some(origin) = self.drag_origin.take() else {
            return;
        };
        let delta = i32::from(column) - i32::from(origin);
        if delta <= -i32::from(SWIPE_THRESHOLD_COLUMNS) {
            self.next_skin();
        } else if delta >= i32::from(SWIPE_THRESHOLD_COLUMNS) {
            self.prev_skin();
        }
    }
}

impl Subscriber for PanelController {
    fn on_signal(&mut self, signal: &Signal, bus: &mut SignalBus) {
        match signal {
            Signal::EntrySelected { id, ordered_ids } => {
                self.sibling_ids = ordered_ids.clone();
                self.open(id, bus);
            }
            Signal::CurrentEntry(entry) => {
                if self.is_open {
                    self.on_entry_received((**entry).clone());
                }
            }
            Signal::SelectedCardClosed => self.close(bus),
            _ => {}
        }
    }
}
