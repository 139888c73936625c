//! Leveled output sinks
//!
//! Command handlers report progress through [`OutputWriter`] without
//! knowing whether the text lands on the console or in the browse view's
//! status bar.

use colored::Colorize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Most notices a status bar buffers before the oldest are dropped
const NOTICE_CAP: usize = 64;

/// How long a status bar notice stays visible by default
const DEFAULT_LINGER: Duration = Duration::from_secs(10);

/// Leveled message sink
///
/// # Examples
///
/// ```no_run
/// use champdex::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("Resolving latest patch");
/// output.success("Cached 170 champions");
/// output.error("Request failed");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Drop any buffered messages
    fn clear(&self);
}

/// Console sink for the non-interactive commands (`fetch`, `cache`,
/// `export`)
///
/// Errors go to stderr, everything else to stdout, with a colored glyph
/// marking the level.
///
/// # Examples
///
/// ```
/// use champdex::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.success("Catalog saved to cache");
/// output.error("No cached catalog, run `champdex fetch` first");
/// ```
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {message}", "✗".red().bold());
    }

    fn success(&self, message: &str) {
        println!("{} {message}", "✔".green());
    }

    fn warning(&self, message: &str) {
        println!("{} {message}", "⚠".yellow());
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }

    fn clear(&self) {
        // Nothing is buffered on the console side
    }
}

/// Severity attached to each buffered message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Plain progress text
    Normal,
    /// Secondary detail
    Info,
    /// Completed action
    Success,
    /// Something degraded but recoverable
    Warning,
    /// Failed action
    Error,
}

/// One buffered status bar entry
struct Notice {
    level: MessageLevel,
    text: String,
    posted: Instant,
}

impl Notice {
    fn is_live(&self, linger: Duration) -> bool {
        self.posted.elapsed() < linger
    }
}

/// Buffered sink for the browse view's status bar
///
/// Notices expire after a linger period so stale confirmations disappear
/// on their own; the render loop reads whatever is still live each frame.
///
/// # Examples
///
/// ```
/// use champdex::ui::output::{OutputWriter, StatusBarWriter};
///
/// let writer = StatusBarWriter::new();
/// writer.success("Copied Aatrox to clipboard");
///
/// // Render loop picks up the live messages
/// for (level, msg) in writer.recent_messages() {
///     println!("{level:?}: {msg}");
/// }
/// ```
pub struct StatusBarWriter {
    notices: Arc<Mutex<VecDeque<Notice>>>,
    linger: Duration,
}

impl StatusBarWriter {
    /// Create a writer with the default linger period
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_LINGER)
    }

    /// Create a writer whose notices expire after `ttl`
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            notices: Arc::new(Mutex::new(VecDeque::new())),
            linger: ttl,
        }
    }

    /// Live messages in posting order
    #[must_use]
    pub fn recent_messages(&self) -> Vec<(MessageLevel, String)> {
        let notices = self.notices.lock().unwrap();
        notices
            .iter()
            .filter(|n| n.is_live(self.linger))
            .map(|n| (n.level, n.text.clone()))
            .collect()
    }

    /// The newest live message, if any
    #[must_use]
    pub fn latest_message(&self) -> Option<(MessageLevel, String)> {
        let notices = self.notices.lock().unwrap();
        notices
            .iter()
            .rev()
            .find(|n| n.is_live(self.linger))
            .map(|n| (n.level, n.text.clone()))
    }

    /// Number of live messages
    #[must_use]
    pub fn message_count(&self) -> usize {
        let notices = self.notices.lock().unwrap();
        notices.iter().filter(|n| n.is_live(self.linger)).count()
    }

    fn post(&self, level: MessageLevel, text: String) {
        let mut notices = self.notices.lock().unwrap();
        notices.retain(|n| n.is_live(self.linger));
        notices.push_back(Notice {
            level,
            text,
            posted: Instant::now(),
        });
        while notices.len() > NOTICE_CAP {
            notices.pop_front();
        }
    }
}

impl Default for StatusBarWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StatusBarWriter {
    fn write(&self, message: &str) {
        self.post(MessageLevel::Normal, message.to_string());
    }

    fn error(&self, message: &str) {
        self.post(MessageLevel::Error, message.to_string());
    }

    fn success(&self, message: &str) {
        self.post(MessageLevel::Success, message.to_string());
    }

    fn warning(&self, message: &str) {
        self.post(MessageLevel::Warning, message.to_string());
    }

    fn info(&self, message: &str) {
        self.post(MessageLevel::Info, message.to_string());
    }

    fn clear(&self) {
        self.notices.lock().unwrap().clear();
    }
}
