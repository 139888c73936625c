//! Ratatui-based browse TUI adapter
//!
//! Terminal front end for the catalog: the controllers own all behavior,
//! and this adapter maps terminal events onto them and renders their
//! state with ratatui widgets.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                BrowseApp                    │
//! │   (event loop, geometry, signal dispatch)   │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │ Controllers│ │  Ratatui  │ │ Crossterm │
//! │ (via bus)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! Splash artwork is fetched on a worker thread and rendered inline when
//! the terminal supports it and the `artwork` feature is enabled.

mod app;
mod artwork;
mod events;
mod theme;
pub mod widgets;

pub use app::{BrowseApp, BrowseOptions, run};
pub use artwork::{ArtworkLoader, ImageProtocol};
pub use events::{BrowseAction, HitAreas, map_key, map_mouse};
pub use theme::Theme;
