//! Error handling for tubetile

use thiserror::Error;

/// Main error type for tubetile.
///
/// Nothing in here ever reaches the end user: resolution errors are absorbed
/// into the embed fallback and thumbnail errors leave the placeholder blank.
/// The type exists so the resolver and fetch boundaries stay `Result`-shaped
/// and loggable.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("Failed to resolve stream: {0}")]
    ResolveFailed(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
