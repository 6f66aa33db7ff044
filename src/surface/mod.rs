//! Playback surfaces and the host adapter
//!
//! The widget never renders video itself: a resolved source is handed to one
//! of two collaborator surfaces — a native media player for direct streams or
//! a web view for the embedded player page. [`PlaybackHost`] owns that
//! dispatch and guarantees that exactly one surface gets mounted per widget.

use crate::player::Source;
use crate::utils::config::EmbedParams;
use crate::video::VideoId;
use tracing::{debug, info};

/// Native media-player collaborator. Accepts a direct stream URL and exposes
/// playback control; full-screen presentation is the platform's own toggle
/// and reaches us only as [`FullscreenEvent`]s.
pub trait VideoSurface: Send {
    fn load(&mut self, stream_url: &str);
    fn play(&mut self);
    fn pause(&mut self);
}

/// Web-rendering collaborator. Accepts a page URL to load.
pub trait WebSurface: Send {
    fn load_url(&mut self, url: &str);
}

/// Full-screen transition notifications relayed from the native player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenEvent {
    WillEnd,
    /// Transition out of full screen has completed; playback resumes here.
    DidEnd,
}

/// Which surface is currently mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mounted {
    Native,
    Web,
}

/// Mounts exactly one playback surface for a widget.
///
/// Re-entrant `mount` calls while a surface is already mounted are no-ops,
/// and an unresolved source mounts nothing (the widget defers until the
/// resolution callback lands).
pub struct PlaybackHost {
    video: Box<dyn VideoSurface>,
    web: Box<dyn WebSurface>,
    embed_params: EmbedParams,
    mounted: Option<Mounted>,
}

impl PlaybackHost {
    pub fn new(video: Box<dyn VideoSurface>, web: Box<dyn WebSurface>) -> Self {
        Self::with_embed_params(video, web, EmbedParams::default())
    }

    pub fn with_embed_params(
        video: Box<dyn VideoSurface>,
        web: Box<dyn WebSurface>,
        embed_params: EmbedParams,
    ) -> Self {
        Self {
            video,
            web,
            embed_params,
            mounted: None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Mount the surface for the current source. Exhaustive on the source
    /// variants: absent defers, a stream autoplays on the native surface,
    /// embed loads the player page on the web surface.
    pub fn mount(&mut self, video_id: &VideoId, source: Option<&Source>) {
        if self.mounted.is_some() {
            debug!("mount ignored: surface already mounted");
            return;
        }

        match source {
            None => {
                // Resolution still in flight; render nothing yet.
            }
            Some(Source::Stream(url)) => {
                info!("Mounting native player for {}", video_id);
                self.video.load(url);
                self.video.play();
                self.mounted = Some(Mounted::Native);
            }
            Some(Source::Embed) => {
                let embed_url = video_id.embed_url(&self.embed_params);
                info!("Mounting web player: {}", embed_url);
                self.web.load_url(&embed_url);
                self.mounted = Some(Mounted::Web);
            }
        }
    }

    /// Relay a full-screen transition event from the native player.
    pub fn fullscreen_event(&mut self, event: FullscreenEvent) {
        if self.mounted == Some(Mounted::Native) && event == FullscreenEvent::DidEnd {
            debug!("full-screen ended, resuming playback");
            self.video.play();
        }
    }
}

/// Demo surface that only logs what a native player would do.
#[derive(Default)]
pub struct LoggingVideoSurface;

impl VideoSurface for LoggingVideoSurface {
    fn load(&mut self, stream_url: &str) {
        info!("native player: load {}", stream_url);
    }

    fn play(&mut self) {
        info!("native player: play");
    }

    fn pause(&mut self) {
        info!("native player: pause");
    }
}

/// Demo surface that only logs what a web view would load.
#[derive(Default)]
pub struct LoggingWebSurface;

impl WebSurface for LoggingWebSurface {
    fn load_url(&mut self, url: &str) {
        info!("web view: load {}", url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl Recorder {
        fn calls(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }

        fn push(&self, call: impl Into<String>) {
            self.0.lock().unwrap().push(call.into());
        }
    }

    struct MockVideo(Recorder);

    impl VideoSurface for MockVideo {
        fn load(&mut self, stream_url: &str) {
            self.0.push(format!("load {stream_url}"));
        }
        fn play(&mut self) {
            self.0.push("play");
        }
        fn pause(&mut self) {
            self.0.push("pause");
        }
    }

    struct MockWeb(Recorder);

    impl WebSurface for MockWeb {
        fn load_url(&mut self, url: &str) {
            self.0.push(format!("load_url {url}"));
        }
    }

    fn host() -> (PlaybackHost, Recorder, Recorder) {
        let video_calls = Recorder::default();
        let web_calls = Recorder::default();
        let host = PlaybackHost::new(
            Box::new(MockVideo(video_calls.clone())),
            Box::new(MockWeb(web_calls.clone())),
        );
        (host, video_calls, web_calls)
    }

    #[test]
    fn unresolved_source_mounts_nothing() {
        let (mut host, video, web) = host();
        host.mount(&VideoId::new("abc123"), None);
        assert!(!host.is_mounted());
        assert!(video.calls().is_empty());
        assert!(web.calls().is_empty());
    }

    #[test]
    fn stream_mounts_native_player_with_autoplay() {
        let (mut host, video, web) = host();
        let source = Source::Stream("https://cdn.example/v.mp4".into());
        host.mount(&VideoId::new("abc123"), Some(&source));
        assert!(host.is_mounted());
        assert_eq!(video.calls(), vec!["load https://cdn.example/v.mp4", "play"]);
        assert!(web.calls().is_empty());
    }

    #[test]
    fn embed_mounts_web_player_with_fixed_params() {
        let (mut host, video, web) = host();
        host.mount(&VideoId::new("abc123"), Some(&Source::Embed));
        assert!(host.is_mounted());
        assert!(video.calls().is_empty());
        assert_eq!(
            web.calls(),
            vec!["load_url https://www.youtube.com/embed/abc123?autoplay=1&modestbranding=1&start=0&loop=1"]
        );
    }

    #[test]
    fn second_mount_is_a_no_op() {
        let (mut host, video, web) = host();
        let stream = Source::Stream("https://cdn.example/v.mp4".into());
        host.mount(&VideoId::new("abc123"), Some(&stream));
        host.mount(&VideoId::new("abc123"), Some(&Source::Embed));
        assert_eq!(video.calls().len(), 2); // load + play, nothing more
        assert!(web.calls().is_empty());
    }

    #[test]
    fn fullscreen_did_end_resumes_native_playback() {
        let (mut host, video, _web) = host();
        let stream = Source::Stream("https://cdn.example/v.mp4".into());
        host.mount(&VideoId::new("abc123"), Some(&stream));
        host.fullscreen_event(FullscreenEvent::WillEnd);
        host.fullscreen_event(FullscreenEvent::DidEnd);
        assert_eq!(
            video.calls(),
            vec!["load https://cdn.example/v.mp4", "play", "play"]
        );
    }

    #[test]
    fn fullscreen_events_ignored_on_web_surface() {
        let (mut host, video, _web) = host();
        host.mount(&VideoId::new("abc123"), Some(&Source::Embed));
        host.fullscreen_event(FullscreenEvent::DidEnd);
        assert!(video.calls().is_empty());
    }
}
