//! Round-level state flags and identifiers.

use chrono::{DateTime, Local};

/// Process-wide state of the active puzzle round.
///
/// The flags gate the daily cycle: `scored_today` prevents a double tally,
/// `sent_warning` prevents a double ping. `sent_warning` is an in-memory
/// cycle flag and is not part of the persisted document; after a restart the
/// warning may fire again, which is harmless and preferable to never firing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundState {
    /// Active puzzle number; strictly increases by 1 at each rollover.
    pub puzzle_number: u32,
    /// Whether the scoreboard has been tallied and posted for this puzzle.
    pub scored_today: bool,
    /// Whether the pre-deadline warning ping has fired this cycle.
    pub sent_warning: bool,
    /// Timestamp of the most recent successful tally; drives startup
    /// catch-up after a restart.
    pub last_scored: Option<DateTime<Local>>,
    /// Identifier of the single channel the bot operates in.
    pub bound_channel: Option<String>,
}

impl RoundState {
    /// Creates the initial round state: puzzle 0, nothing scored or warned,
    /// no channel bound.
    pub fn new() -> Self {
        RoundState::default()
    }
}
