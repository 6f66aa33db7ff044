//! Player state machine

pub mod state;

pub use state::{Phase, PlayerState, Source};
