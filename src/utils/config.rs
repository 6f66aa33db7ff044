//! Widget configuration

use serde::{Deserialize, Serialize};

/// Query parameters for the embedded-player page URL.
///
/// Defaults reproduce the fixed parameter set the widget has always used:
/// `autoplay=1&modestbranding=1&start=0&loop=1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedParams {
    /// Start playback as soon as the page loads
    pub autoplay: bool,

    /// Reduced YouTube branding in the player chrome
    pub modest_branding: bool,

    /// Playback start offset in seconds
    pub start: u32,

    /// Restart from the beginning when playback ends
    pub loop_playback: bool,
}

impl Default for EmbedParams {
    fn default() -> Self {
        Self {
            autoplay: true,
            modest_branding: true,
            start: 0,
            loop_playback: true,
        }
    }
}

impl EmbedParams {
    /// Render as the embed URL query string, parameters in fixed order.
    pub fn query_string(&self) -> String {
        format!(
            "autoplay={}&modestbranding={}&start={}&loop={}",
            self.autoplay as u8, self.modest_branding as u8, self.start, self.loop_playback as u8
        )
    }
}
