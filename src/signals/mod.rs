//! Typed broadcast signals between the catalog store and the controllers
//!
//! The three coordinating pieces (data store, search controller, panel
//! controller) never call each other directly. They communicate through
//! [`Signal`] values queued on a [`SignalBus`] and fanned out to every
//! [`Subscriber`] in FIFO order, so the whole contract between them is this
//! one enum.
//!
//! # Architecture
//!
//! ```text
//!  DataStore ──DataReady──▶ SearchController ── populates grid
//!                                │
//!                     user selects a card
//!                                │
//!                          EntrySelected ──▶ PanelController (opens)
//!                                                  │
//!                ┌──── DataRequested ◀─────────────┘
//!                ▼
//!        SearchController ──CurrentEntry──▶ PanelController (renders)
//!
//!        close action ──PanelClosed──▶ SearchController (clears highlight)
//!        re-click selected card ──SelectedCardClosed──▶ PanelController
//! ```
//!
//! Dispatch is synchronous and single-threaded: signals published while one
//! signal is being handled are drained in the same turn.

use crate::catalog::{Catalog, Entry};
use std::collections::VecDeque;
use std::sync::Arc;

/// A broadcast notification with its payload
///
/// Every subscriber sees every signal; payload shapes mirror what each
/// notification has always carried.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// The dataset finished loading and is ready for consumers
    DataReady(Arc<Catalog>),

    /// A card was selected: the entry id plus the full grid order at the
    /// moment of selection, for sibling navigation
    EntrySelected {
        id: String,
        ordered_ids: Vec<String>,
    },

    /// The panel needs the full record for an id
    DataRequested { id: String },

    /// The resolved record for the most recent data request
    CurrentEntry(Box<Entry>),

    /// The panel was closed
    PanelClosed,

    /// The selected card was activated again, deselecting it
    SelectedCardClosed,
}

impl Signal {
    /// Stable name of the signal, for status lines and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DataReady(_) => "data-ready",
            Self::EntrySelected { .. } => "entry-selected",
            Self::DataRequested { .. } => "data-requested",
            Self::CurrentEntry(_) => "current-entry",
            Self::PanelClosed => "panel-closed",
            Self::SelectedCardClosed => "selected-card-closed",
        }
    }
}

/// FIFO queue of pending signals
///
/// Publishing never blocks and never dispatches; delivery happens when the
/// owner drains the queue with [`dispatch_all`].
#[derive(Debug, Default)]
pub struct SignalBus {
    queue: VecDeque<Signal>,
}

impl SignalBus {
    /// Create an empty bus
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a signal for broadcast
    pub fn publish(&mut self, signal: Signal) {
        self.queue.push_back(signal);
    }

    /// Take the oldest pending signal
    pub fn pop(&mut self) -> Option<Signal> {
        self.queue.pop_front()
    }

    /// Number of pending signals
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is pending
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// A controller that reacts to broadcast signals
///
/// Handlers may publish further signals onto the bus; those are delivered
/// later in the same drain.
pub trait Subscriber {
    fn on_signal(&mut self, signal: &Signal, bus: &mut SignalBus);
}

/// Drain the bus, fanning each signal out to every subscriber in order
///
/// Runs until the queue is empty, so cascades triggered by handlers
/// complete within a single call.
pub fn dispatch_all(bus: &mut SignalBus, subscribers: &mut [&mut dyn Subscriber]) {
    while let Some(signal) = bus.pop() {
        for subscriber in subscribers.iter_mut() {
            subscriber.on_signal(&signal, bus);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every signal it sees, optionally publishing a response once
    struct Recorder {
        seen: Vec<Signal>,
        respond_to_request: bool,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                seen: Vec::new(),
                respond_to_request: false,
            }
        }
    }

    impl Subscriber for Recorder {
        fn on_signal(&mut self, signal: &Signal, bus: &mut SignalBus) {
            self.seen.push(signal.clone());
            if self.respond_to_request
                && let Signal::DataRequested { .. } = signal
            {
                self.respond_to_request = false;
                bus.publish(Signal::PanelClosed);
            }
        }
    }

    #[test]
    fn test_bus_is_fifo() {
        let mut bus = SignalBus::new();
        bus.publish(Signal::PanelClosed);
        bus.publish(Signal::SelectedCardClosed);

        assert_eq!(bus.pending(), 2);
        assert_eq!(bus.pop(), Some(Signal::PanelClosed));
        assert_eq!(bus.pop(), Some(Signal::SelectedCardClosed));
        assert_eq!(bus.pop(), None);
    }

    #[test]
    fn test_dispatch_fans_out_to_all_subscribers() {
        let mut bus = SignalBus::new();
        let mut first = Recorder::new();
        let mut second = Recorder::new();

        bus.publish(Signal::DataRequested {
            id: "Aatrox".to_string(),
        });
        dispatch_all(&mut bus, &mut [&mut first, &mut second]);

        assert_eq!(first.seen.len(), 1);
        assert_eq!(second.seen.len(), 1);
        assert_eq!(first.seen[0].name(), "data-requested");
    }

    #[test]
    fn test_dispatch_drains_cascades_in_same_turn() {
        let mut bus = SignalBus::new();
        let mut responder = Recorder::new();
        responder.respond_to_request = true;
        let mut observer = Recorder::new();

        bus.publish(Signal::DataRequested {
            id: "Ahri".to_string(),
        });
        dispatch_all(&mut bus, &mut [&mut responder, &mut observer]);

        assert!(bus.is_empty());
        assert_eq!(observer.seen.len(), 2);
        assert_eq!(observer.seen[1], Signal::PanelClosed);
    }

    #[test]
    fn test_signal_names() {
        assert_eq!(Signal::PanelClosed.name(), "panel-closed");
        assert_eq!(Signal::SelectedCardClosed.name(), "selected-card-closed");
        assert_eq!(
            Signal::EntrySelected {
                id: String::new(),
                ordered_ids: Vec::new(),
            }
            .name(),
            "entry-selected"
        );
    }
}
