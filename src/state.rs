//! Shared application state.
//!
//! All mutable state lives in one [`AppState`] value guarded by a single
//! `tokio::sync::Mutex` in the bot, so message handling, command handling,
//! and timer-driven round transitions always observe and mutate a consistent
//! snapshot. There are no module-level globals; every handler receives the
//! state explicitly.

use crate::roster::Roster;
use crate::rounds::RoundState;

/// The complete mutable state of the tracker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// All tracked players.
    pub roster: Roster,
    /// The active round's flags and identifiers.
    pub round: RoundState,
}

impl AppState {
    /// Creates an empty state: no players, puzzle number 0, nothing scored.
    pub fn new() -> Self {
        AppState::default()
    }
}
