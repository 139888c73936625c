//! Ratatui widgets for the browse TUI
//!
//! Widgets render from controller state and never mutate it; the event
//! loop measures geometry and writes it back before drawing.

mod card_grid;
mod help_bar;
mod panel;
mod results_list;
mod search_bar;
mod status_bar;

pub use card_grid::{CARD_HEIGHT, CARD_WIDTH, CardGrid};
pub use help_bar::{HelpBar, KeyHint};
pub use panel::{DetailPanel, PanelLayout, SplashState};
pub use results_list::ResultsList;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
