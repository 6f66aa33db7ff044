//! tubetile library
//!
//! An embeddable YouTube preview/playback widget: thumbnail placeholder with
//! a play affordance, asynchronous stream resolution on tap, and dispatch to
//! either a native player surface or the embedded web player as fallback.

pub mod gui;
pub mod player;
pub mod resolver;
pub mod surface;
pub mod utils;
pub mod video;

// Re-export main types for easier use
pub use gui::{Message, PlayerEvent, PreviewApp, PreviewFlags, PreviewPlayer};
pub use player::{Phase, PlayerState, Source};
pub use resolver::{NoStreamResolver, StreamResolver, YtDlpResolver};
pub use surface::{FullscreenEvent, PlaybackHost, VideoSurface, WebSurface};
pub use utils::{EmbedParams, PlayerError};
pub use video::VideoId;
