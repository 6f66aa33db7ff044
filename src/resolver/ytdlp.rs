//! yt-dlp backed stream resolution
//!
//! Resolves a video identifier to a direct media URL with `yt-dlp -g`.
//! Supports system-installed yt-dlp found on PATH or in common install
//! locations; a missing binary is reported at construction so the widget can
//! fall back to embedded playback up front.

use crate::resolver::traits::StreamResolver;
use crate::utils::error::PlayerError;
use crate::video::VideoId;
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info, warn};

pub struct YtDlpResolver {
    ytdlp_path: PathBuf,
}

impl YtDlpResolver {
    /// Initialize the resolver and verify yt-dlp availability.
    pub fn new() -> Result<Self> {
        let ytdlp_path = match find_ytdlp() {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                path
            }
            None => {
                warn!("yt-dlp not found; stream resolution unavailable");
                return Err(PlayerError::YtDlpNotFound.into());
            }
        };

        Ok(Self { ytdlp_path })
    }

    /// Path of the yt-dlp binary in use.
    pub fn ytdlp_path(&self) -> &PathBuf {
        &self.ytdlp_path
    }
}

#[async_trait]
impl StreamResolver for YtDlpResolver {
    fn id(&self) -> &'static str {
        "ytdlp"
    }

    async fn resolve(&self, video: &VideoId) -> Result<Option<String>> {
        let url = format!("https://www.youtube.com/watch?v={}", video);
        debug!("Resolving stream URL for: {}", url);

        let output = AsyncCommand::new(&self.ytdlp_path)
            .arg("-f")
            .arg("best")
            .arg("-g")
            .arg("--no-warnings")
            .arg(&url)
            .output()
            .await?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp resolution failed: {}", error_msg);
            return Err(PlayerError::ResolveFailed(error_msg.to_string()).into());
        }

        let stdout = String::from_utf8(output.stdout)?;
        let stream_url = stdout.lines().next().unwrap_or("").trim().to_string();
        if stream_url.is_empty() {
            debug!("yt-dlp returned no stream URL for {}", video);
            return Ok(None);
        }

        Ok(Some(stream_url))
    }
}

/// Find the yt-dlp binary: PATH first, then common installation paths
/// (Homebrew, python.org framework installs) for GUI launches where PATH
/// does not include user-installed binaries.
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Ok(path) = which::which("yt-dlp") {
        debug!("yt-dlp found on PATH: {:?}", path);
        return Some(path);
    }

    let common_paths = [
        "/usr/local/bin/yt-dlp",
        "/opt/homebrew/bin/yt-dlp",
        "/Library/Frameworks/Python.framework/Versions/3.12/bin/yt-dlp",
        "/Library/Frameworks/Python.framework/Versions/3.11/bin/yt-dlp",
    ];

    for candidate in &common_paths {
        let path = PathBuf::from(candidate);
        if path.is_file() {
            debug!("yt-dlp found at common path: {:?}", path);
            return Some(path);
        }
    }

    None
}
