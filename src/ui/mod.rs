//! Presentation layer
//!
//! The controllers in `search` and `panel` own all state transitions and
//! talk over the signal bus; everything here only renders that state and
//! reports input and geometry back.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │       Controllers + Signal Bus          │
//! │   (search, panel, catalog store)        │
//! └────────────────┬────────────────────────┘
//!                  │ state in, actions out
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │        ratatui_adapter::BrowseApp       │
//! │  (event loop, widgets, splash artwork)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The CLI commands share the same output abstraction: [`StdoutWriter`]
//! prints leveled messages to the console, while [`StatusBarWriter`]
//! buffers them for the browse view's status bar with an expiry so the
//! render loop shows only fresh notices:
//!
//! ```
//! use champdex::ui::output::{OutputWriter, StatusBarWriter, StdoutWriter};
//! use std::time::Duration;
//!
//! let output = StdoutWriter::new();
//! output.success("Cached 170 champions");
//!
//! let writer = StatusBarWriter::with_ttl(Duration::from_secs(5));
//! writer.success("Copied to clipboard");
//! for (level, msg) in writer.recent_messages() {
//!     println!("{level:?}: {msg}");
//! }
//! ```

mod error;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StatusBarWriter, StdoutWriter};
pub use ratatui_adapter::{BrowseApp, BrowseOptions, Theme};
