//! Round tally and scoreboard ranking.
//!
//! Ranks everyone who completed the active puzzle and assigns win credit.
//! Ranking is competition style: all players tied at the top score win the
//! round together and share first place, ties below share a place, and each
//! lower distinct score takes the next place number. A top score of zero
//! means nobody won; the round merely got attempted.

use chrono::{DateTime, Local};
use log::info;

use crate::roster::Roster;
use crate::rounds::state::RoundState;

/// One ranked row of a [`Scoreboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// Shared place number, starting at 1.
    pub place: usize,
    /// Player name in stored casing.
    pub name: String,
    /// Lifetime wins, already including credit for this round.
    pub win_count: u32,
    /// Round score.
    pub score: u32,
    /// Whether the player achieved all four categories.
    pub succeeded: bool,
    /// Whether the player is part of the winner set.
    pub winner: bool,
}

/// The tallied result of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    /// Puzzle number the tally belongs to.
    pub puzzle_number: u32,
    /// Ranked standings, winners first.
    pub standings: Vec<Standing>,
}

impl Scoreboard {
    /// Formats the scoreboard announcement.
    pub fn to_message(&self, game_name: &str) -> String {
        let mut message = format!(
            "{} #{} COMPLETE!\n\n**SCOREBOARD:**\n",
            game_name.to_uppercase(),
            self.puzzle_number
        );

        for standing in &self.standings {
            let wins = if standing.win_count == 1 {
                "1 win".to_owned()
            } else {
                format!("{} wins", standing.win_count)
            };
            let outcome = match (standing.succeeded, standing.winner) {
                (true, true) => "got the connections and wins",
                (true, false) => "got the connections",
                (false, true) => "did not get all of the subconnections but wins",
                (false, false) => "did not get all of the subconnections",
            };
            let punctuation = if standing.winner { "!" } else { "." };
            message.push_str(&format!(
                "{}. {} ({}) {} with a score of {}{}\n",
                standing.place, standing.name, wins, outcome, standing.score, punctuation
            ));
        }

        message
    }
}

/// Tallies the active round.
///
/// Eligible players are those both registered and completed; a player who
/// attempted with a zero score is still ranked. Every player tied at the top
/// score receives win credit, unless the top score is zero. Sets
/// `scored_today` and `last_scored` so the tally cannot run twice for the
/// same puzzle.
///
/// # Returns
///
/// The scoreboard, or `None` when the round was already scored or nobody is
/// eligible.
pub fn tally(roster: &mut Roster, round: &mut RoundState, now: DateTime<Local>) -> Option<Scoreboard> {
    if round.scored_today {
        return None;
    }

    let mut eligible: Vec<(String, u32, bool)> = roster
        .players()
        .iter()
        .filter(|p| p.registered && p.completed_today)
        .map(|p| (p.name.clone(), p.score, p.succeeded_today))
        .collect();

    if eligible.is_empty() {
        return None;
    }

    info!("tallying scores for puzzle #{}", round.puzzle_number);

    eligible.sort_by(|a, b| b.1.cmp(&a.1));
    let top_score = eligible[0].1;
    let has_winners = top_score > 0;

    let mut standings = Vec::with_capacity(eligible.len());
    let mut place = 0;
    let mut previous_score = None;

    for (name, score, succeeded) in eligible {
        if previous_score != Some(score) {
            place += 1;
            previous_score = Some(score);
        }
        let winner = has_winners && score == top_score;
        if winner {
            if let Some(player) = roster.find_mut(&name) {
                player.win_count += 1;
            }
        }
        let win_count = roster.find(&name).map(|p| p.win_count).unwrap_or(0);
        standings.push(Standing {
            place,
            name,
            win_count,
            score,
            succeeded,
            winner,
        });
    }

    round.scored_today = true;
    round.last_scored = Some(now);

    Some(Scoreboard {
        puzzle_number: round.puzzle_number,
        standings,
    })
}
