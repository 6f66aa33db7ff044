//! Widget playback state
//!
//! A widget is either showing its placeholder or it is active. Activation is
//! one-way and happens exactly once, on the user's tap. Within the active
//! phase the resolved source starts absent and is filled in at most once by
//! the resolution callback; anything arriving after that is ignored.

use tracing::debug;

/// Where playback comes from once resolution has completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Embedded web player — the universal fallback.
    Embed,
    /// Direct media stream for a native player.
    Stream(String),
}

/// The widget's phase. There is no transition back to `Placeholder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Placeholder,
    Active { source: Option<Source> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    phase: Phase,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Placeholder,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.phase, Phase::Placeholder)
    }

    /// The resolved source, if activation and resolution have both happened.
    pub fn source(&self) -> Option<&Source> {
        match &self.phase {
            Phase::Placeholder => None,
            Phase::Active { source } => source.as_ref(),
        }
    }

    /// `Placeholder → Active`. Returns `true` on the one real transition;
    /// a repeated activation is a no-op.
    pub fn activate(&mut self) -> bool {
        match self.phase {
            Phase::Placeholder => {
                self.phase = Phase::Active { source: None };
                true
            }
            Phase::Active { .. } => {
                debug!("activation ignored: already active");
                false
            }
        }
    }

    /// Apply the resolution result. Fires at most once per widget: a
    /// duplicate or late callback, or one arriving before activation, is
    /// ignored. Returns `true` when the source was applied.
    pub fn apply_resolution(&mut self, resolved: Source) -> bool {
        match &mut self.phase {
            Phase::Active { source } if source.is_none() => {
                *source = Some(resolved);
                true
            }
            Phase::Active { .. } => {
                debug!("resolution ignored: source already set");
                false
            }
            Phase::Placeholder => {
                debug!("resolution ignored: widget not activated");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_placeholder() {
        let state = PlayerState::new();
        assert!(state.is_placeholder());
        assert_eq!(state.source(), None);
    }

    #[test]
    fn activates_exactly_once() {
        let mut state = PlayerState::new();
        assert!(state.activate());
        assert!(!state.is_placeholder());
        // second tap is a no-op
        assert!(!state.activate());
        assert_eq!(state.phase(), &Phase::Active { source: None });
    }

    #[test]
    fn resolution_is_monotonic() {
        let mut state = PlayerState::new();
        state.activate();
        assert!(state.apply_resolution(Source::Stream("https://cdn.example/v.mp4".into())));
        // late duplicate must not overwrite
        assert!(!state.apply_resolution(Source::Embed));
        assert_eq!(
            state.source(),
            Some(&Source::Stream("https://cdn.example/v.mp4".into()))
        );
    }

    #[test]
    fn resolution_before_activation_is_ignored() {
        let mut state = PlayerState::new();
        assert!(!state.apply_resolution(Source::Embed));
        assert!(state.is_placeholder());
        assert_eq!(state.source(), None);
    }

    #[test]
    fn fallback_resolution_applies() {
        let mut state = PlayerState::new();
        state.activate();
        assert!(state.apply_resolution(Source::Embed));
        assert_eq!(state.source(), Some(&Source::Embed));
    }
}
