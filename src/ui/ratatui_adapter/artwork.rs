//! Splash artwork loading for the browse TUI
//!
//! Splash art is fetched on a background thread and the raw bytes are
//! cached in memory, so skin flips and revisits render without another
//! request. The event loop polls [`ArtworkLoader::drain`] each tick and
//! surfaces failed downloads in the status bar. Decoding bytes into a
//! terminal graphics protocol lives behind the `artwork` feature.

use moka::sync::Cache;
use reqwest::blocking::Client;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[cfg(feature = "artwork")]
use ratatui_image::{picker::Picker, protocol::StatefulProtocol};

/// Max splash images kept decoded-ready in memory
const CACHE_CAPACITY: u64 = 64;

/// How long cached bytes stay valid
const CACHE_TTL: Duration = Duration::from_secs(900);

/// Per-request timeout for splash downloads
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Terminal graphics support, probed from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageProtocol {
    /// Terminal advertises an inline-image protocol
    Supported,
    /// No known protocol, text placeholders only
    None,
}

impl ImageProtocol {
    /// Detect the terminal image protocol from environment variables
    #[must_use]
    pub fn detect() -> Self {
        if let Ok(term) = std::env::var("TERM") {
            if term.contains("kitty") || term.contains("ghostty") {
                return Self::Supported;
            }
        }
        if let Ok(term_program) = std::env::var("TERM_PROGRAM") {
            if term_program.contains("ghostty") {
                return Self::Supported;
            }
        }
        Self::None
    }

    /// Whether inline images can be rendered
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Supported)
    }
}

struct FetchRequest {
    url: String,
}

struct FetchResponse {
    url: String,
    bytes: Result<Vec<u8>, String>,
}

/// Asynchronous splash downloader with an in-memory byte cache
pub struct ArtworkLoader {
    cache: Cache<String, Arc<Vec<u8>>>,
    pending: HashSet<String>,
    request_tx: Sender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
}

impl ArtworkLoader {
    /// Create a loader and start its fetch worker
    ///
    /// The worker thread is detached; it exits on its own once the
    /// loader drops and the request channel closes.
    #[must_use]
    pub fn new() -> Self {
        let (request_tx, request_rx) = channel::<FetchRequest>();
        let (response_tx, response_rx) = channel::<FetchResponse>();
        drop(spawn_fetch_worker(request_rx, response_tx));

        Self {
            cache: Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(CACHE_TTL)
                .build(),
            pending: HashSet::new(),
            request_tx,
            response_rx,
        }
    }

    #[cfg(test)]
    fn with_channels(request_tx: Sender<FetchRequest>, response_rx: Receiver<FetchResponse>) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(CACHE_TTL)
                .build(),
            pending: HashSet::new(),
            request_tx,
            response_rx,
        }
    }

    /// Queue a download unless the bytes are cached or already in flight
    pub fn request(&mut self, url: &str) {
        if url.is_empty() || self.pending.contains(url) || self.cache.contains_key(url) {
            return;
        }
        if self
            .request_tx
            .send(FetchRequest {
                url: url.to_string(),
            })
            .is_ok()
        {
            self.pending.insert(url.to_string());
        }
    }

    /// Collect finished downloads, returning error messages for failures
    pub fn drain(&mut self) -> Vec<String> {
        let mut failures = Vec::new();
        while let Ok(response) = self.response_rx.try_recv() {
            self.pending.remove(&response.url);
            match response.bytes {
                Ok(bytes) => self.cache.insert(response.url, Arc::new(bytes)),
                Err(message) => {
                    failures.push(format!("Splash download failed: {message}"));
                }
            }
        }
        failures
    }

    /// Cached bytes for a splash URL, if the download has finished
    #[must_use]
    pub fn get(&self, url: &str) -> Option<Arc<Vec<u8>>> {
        self.cache.get(url)
    }

    /// Whether a download for this URL is still in flight
    #[must_use]
    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains(url)
    }
}

impl Default for ArtworkLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_fetch_worker(
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let Ok(client) = Client::builder()
            .user_agent(concat!("champdex/", env!("CARGO_PKG_VERSION")))
            .timeout(FETCH_TIMEOUT)
            .build()
        else {
            return;
        };

        while let Ok(request) = request_rx.recv() {
            let bytes = fetch_bytes(&client, &request.url).map_err(|e| e.to_string());
            if response_tx
                .send(FetchResponse {
                    url: request.url,
                    bytes,
                })
                .is_err()
            {
                return;
            }
        }
    })
}

fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, reqwest::Error> {
    let response = client.get(url).send()?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

/// Decode downloaded bytes into a resizable image protocol
#[cfg(feature = "artwork")]
pub fn decode_artwork(bytes: &[u8], picker: &Picker) -> Option<StatefulProtocol> {
    let img = image::load_from_memory(bytes).ok()?;
    Some(picker.new_resize_protocol(img))
}
