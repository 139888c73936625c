use thiserror::Error;

/// Errors from downloading and assembling catalog data
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Upstream published an empty version list")]
    EmptyVersions,

    #[error("Champion payload for '{id}' is missing its own record")]
    MissingRecord { id: String },

    #[error("Malformed champion data for '{id}': {reason}")]
    MalformedEntry { id: String, reason: String },
}

impl FetchError {
    pub fn malformed(id: &str, reason: impl Into<String>) -> Self {
        Self::MalformedEntry {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
