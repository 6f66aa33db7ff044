use crate::video::VideoId;
use anyhow::Result;
use async_trait::async_trait;

/// Core trait for stream resolution backends
///
/// This trait isolates the widget from the specific resolution method
/// (yt-dlp, a metadata web API, a test double, etc.).
#[async_trait]
pub trait StreamResolver: Send + Sync {
    /// Returns a unique identifier for this resolver (e.g., "ytdlp", "none")
    fn id(&self) -> &'static str;

    /// Resolves a video identifier to a direct media stream URL.
    ///
    /// `Ok(Some(url))` means a player-consumable stream was found;
    /// `Ok(None)` means the video resolved but exposes no usable stream.
    /// Either `None` or an error sends the widget to the embed fallback.
    async fn resolve(&self, video: &VideoId) -> Result<Option<String>>;
}
