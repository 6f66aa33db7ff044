//! Asynchronous source resolution
//!
//! One resolution request per widget activation: the identifier goes to a
//! [`StreamResolver`] backend, and whatever comes back — stream URL, "no
//! stream", or any error — is folded into a [`Source`]. Failures never
//! surface; the embedded web player is the universal fallback.

pub mod traits;
pub mod ytdlp;

pub use traits::StreamResolver;
pub use ytdlp::YtDlpResolver;

use crate::player::Source;
use crate::video::VideoId;
use std::sync::Arc;
use tracing::{info, warn};

/// Resolve an identifier to a playback source, exactly once.
///
/// Errors from the backend are absorbed here: the caller always gets a
/// usable `Source` and never an error.
pub async fn resolve_source(resolver: Arc<dyn StreamResolver>, video: VideoId) -> Source {
    match resolver.resolve(&video).await {
        Ok(Some(url)) => {
            info!("Resolver {} found stream for {}", resolver.id(), video);
            Source::Stream(url)
        }
        Ok(None) => {
            info!(
                "Resolver {} found no stream for {}, using embed fallback",
                resolver.id(),
                video
            );
            Source::Embed
        }
        Err(e) => {
            warn!(
                "Resolver {} failed for {}: {}. Using embed fallback",
                resolver.id(),
                video,
                e
            );
            Source::Embed
        }
    }
}

/// Resolver that never finds a stream. Used when no backend is available
/// (or wanted), forcing every activation onto the embed fallback.
pub struct NoStreamResolver;

#[async_trait::async_trait]
impl StreamResolver for NoStreamResolver {
    fn id(&self) -> &'static str {
        "none"
    }

    async fn resolve(&self, _video: &VideoId) -> anyhow::Result<Option<String>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct FixedResolver(Option<String>);

    #[async_trait::async_trait]
    impl StreamResolver for FixedResolver {
        fn id(&self) -> &'static str {
            "fixed"
        }

        async fn resolve(&self, _video: &VideoId) -> anyhow::Result<Option<String>> {
            Ok(self.0.clone())
        }
    }

    struct FailingResolver;

    #[async_trait::async_trait]
    impl StreamResolver for FailingResolver {
        fn id(&self) -> &'static str {
            "failing"
        }

        async fn resolve(&self, _video: &VideoId) -> anyhow::Result<Option<String>> {
            Err(anyhow!("network down"))
        }
    }

    #[tokio::test]
    async fn stream_url_yields_stream_source() {
        let resolver = Arc::new(FixedResolver(Some("https://cdn.example/v.mp4".into())));
        let source = resolve_source(resolver, VideoId::new("abc123")).await;
        assert_eq!(source, Source::Stream("https://cdn.example/v.mp4".into()));
    }

    #[tokio::test]
    async fn missing_stream_yields_embed() {
        let resolver = Arc::new(FixedResolver(None));
        let source = resolve_source(resolver, VideoId::new("abc123")).await;
        assert_eq!(source, Source::Embed);
    }

    #[tokio::test]
    async fn resolver_error_yields_embed() {
        let source = resolve_source(Arc::new(FailingResolver), VideoId::new("abc123")).await;
        assert_eq!(source, Source::Embed);
    }

    #[tokio::test]
    async fn no_stream_resolver_always_falls_back() {
        let source = resolve_source(Arc::new(NoStreamResolver), VideoId::new("abc123")).await;
        assert_eq!(source, Source::Embed);
    }
}
