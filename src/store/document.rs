//! Persisted document shape.
//!
//! The tracker persists one JSON document holding the round flags and every
//! player record, with player names as top-level keys next to the round
//! fields. [`StateDocument`] models that exact shape so existing documents
//! round-trip without loss:
//!
//! ```json
//! {
//!   "boundChannel": "1234",
//!   "puzzleNumber": 310,
//!   "lastScored": "2024-03-14T00:00:02-04:00",
//!   "scoredToday": false,
//!   "alice": { "winCount": 12, "connectionCount": 40, ... }
//! }
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::roster::{Player, Roster};
use crate::rounds::RoundState;
use crate::state::AppState;

/// On-disk form of the complete tracker state.
///
/// Player records are flattened beside the round fields, keyed by player
/// name; `lastScored` is an ISO-8601 timestamp with offset. The in-memory
/// `sent_warning` cycle flag is deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateDocument {
    /// Channel the bot operates in.
    pub bound_channel: Option<String>,
    /// Active puzzle number.
    pub puzzle_number: u32,
    /// Timestamp of the most recent tally.
    pub last_scored: Option<DateTime<Local>>,
    /// Whether the active puzzle has been tallied.
    pub scored_today: bool,
    /// Player records keyed by name.
    #[serde(flatten)]
    pub players: BTreeMap<String, Player>,
}

impl StateDocument {
    /// Builds the document from the in-memory state.
    pub fn from_state(state: &AppState) -> Self {
        let players = state
            .roster
            .players()
            .iter()
            .map(|p| (p.name.clone(), p.clone()))
            .collect();

        StateDocument {
            bound_channel: state.round.bound_channel.clone(),
            puzzle_number: state.round.puzzle_number,
            last_scored: state.round.last_scored,
            scored_today: state.round.scored_today,
            players,
        }
    }

    /// Rebuilds the in-memory state, restoring each player's name from its
    /// document key.
    pub fn into_state(self) -> AppState {
        let mut roster = Roster::new();
        for (name, mut player) in self.players {
            player.name = name;
            roster.insert(player);
        }

        AppState {
            roster,
            round: RoundState {
                puzzle_number: self.puzzle_number,
                scored_today: self.scored_today,
                sent_warning: false,
                last_scored: self.last_scored,
                bound_channel: self.bound_channel,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_state() -> AppState {
        let mut state = AppState::new();
        state.round.puzzle_number = 310;
        state.round.scored_today = true;
        state.round.last_scored = Some(Local.with_ymd_and_hms(2024, 3, 14, 0, 0, 2).unwrap());
        state.round.bound_channel = Some("1234".to_owned());

        state.roster.register("Alice");
        {
            let alice = state.roster.find_mut("Alice").unwrap();
            alice.win_count = 12;
            alice.connection_count = 40;
            alice.sub_connection_count = 160;
            alice.submission_count = 45;
            alice.mistake_count = 20;
            alice.total_guess_count = 200;
            alice.score = 10;
            alice.silenced = true;
            alice.completed_today = true;
            alice.succeeded_today = true;
        }
        state.roster.register("Bob");
        state.roster.find_mut("Bob").unwrap().registered = false;
        state
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let state = sample_state();

        let json = serde_json::to_string(&StateDocument::from_state(&state)).unwrap();
        let reloaded: StateDocument = serde_json::from_str(&json).unwrap();
        let restored = reloaded.into_state();

        assert_eq!(restored.round, state.round);
        assert_eq!(restored.roster.find("Alice"), state.roster.find("Alice"));
        assert_eq!(restored.roster.find("Bob"), state.roster.find("Bob"));
        assert_eq!(restored.roster.players().len(), 2);
    }

    #[test]
    fn test_document_uses_wire_field_names() {
        let json = serde_json::to_value(StateDocument::from_state(&sample_state())).unwrap();

        assert_eq!(json["boundChannel"], "1234");
        assert_eq!(json["puzzleNumber"], 310);
        assert_eq!(json["scoredToday"], true);
        assert!(json["lastScored"].is_string());
        assert_eq!(json["Alice"]["winCount"], 12);
        assert_eq!(json["Bob"]["registered"], false);
    }

    #[test]
    fn test_empty_document_deserializes_to_defaults() {
        let doc: StateDocument = serde_json::from_str("{}").unwrap();
        let state = doc.into_state();

        assert_eq!(state.round.puzzle_number, 0);
        assert!(!state.round.scored_today);
        assert!(state.roster.is_empty());
    }

    #[test]
    fn test_sent_warning_is_not_persisted() {
        let mut state = sample_state();
        state.round.sent_warning = true;

        let json = serde_json::to_value(StateDocument::from_state(&state)).unwrap();
        assert!(json.get("sentWarning").is_none());

        let restored: StateDocument = serde_json::from_value(json).unwrap();
        assert!(!restored.into_state().round.sent_warning);
    }
}
