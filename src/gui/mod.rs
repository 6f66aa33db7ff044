//! GUI module

pub mod app;
pub mod player;
pub mod theme;

// Re-export for convenience
pub use app::{Message, PreviewApp, PreviewFlags};
pub use player::{PlayerEvent, PreviewPlayer};
