//! Player record and lifetime statistics.

use serde::{Deserialize, Serialize};

/// One tracked player.
///
/// The record combines per-round fields (`score`, `completed_today`,
/// `succeeded_today`), which reset at every rollover, with lifetime counters
/// that only ever grow. In the persisted document the player's name is the
/// key of the record, so it is skipped during (de)serialization and restored
/// by the loader; the remaining fields keep their original camelCase wire
/// names so existing documents round-trip exactly.
///
/// # Examples
///
/// ```
/// # use grouper::roster::Player;
/// let player = Player::new("alice");
/// assert!(player.registered);
/// assert_eq!(player.submission_count, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique identifier; key of the persisted record.
    #[serde(skip)]
    pub name: String,
    /// Lifetime rounds won (shared wins included).
    pub win_count: u32,
    /// Lifetime submissions achieving all four categories.
    pub connection_count: u32,
    /// Lifetime clean category matches.
    pub sub_connection_count: u32,
    /// Lifetime accepted submissions.
    pub submission_count: u32,
    /// Lifetime guesses that matched no category.
    pub mistake_count: u32,
    /// Lifetime guess lines submitted.
    pub total_guess_count: u32,
    /// Points earned in the current round; reset at rollover.
    pub score: u32,
    /// Whether the player participates in completion checks and pings.
    pub registered: bool,
    /// Suppresses only the pre-deadline warning ping.
    pub silenced: bool,
    /// Whether the player submitted valid results for the active puzzle.
    pub completed_today: bool,
    /// Whether that submission achieved all four categories.
    pub succeeded_today: bool,
}

impl Player {
    /// Creates a freshly registered player with zeroed counters.
    pub fn new(name: &str) -> Self {
        Player {
            name: name.to_owned(),
            win_count: 0,
            connection_count: 0,
            sub_connection_count: 0,
            submission_count: 0,
            mistake_count: 0,
            total_guess_count: 0,
            score: 0,
            registered: true,
            silenced: false,
            completed_today: false,
            succeeded_today: false,
        }
    }

    /// Clears the per-round fields at rollover, leaving lifetime counters
    /// untouched.
    pub fn reset_round(&mut self) {
        self.score = 0;
        self.completed_today = false;
        self.succeeded_today = false;
    }
}
