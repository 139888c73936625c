//! Subcommand handlers
//!
//! One module per subcommand, each exposing an `execute` function that takes
//! the parsed arguments plus whatever store or catalog access it needs.

pub mod browse;
pub mod cache;
pub mod config;
pub mod export;
pub mod fetch;
pub mod list;
pub mod show;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use cache::execute as cache;
pub use self::config::execute as config;
pub use export::execute as export;
pub use fetch::execute as fetch;
pub use list::execute as list;
pub use show::execute as show;
