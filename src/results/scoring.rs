//! Scoring engine for accepted submissions.
//!
//! Converts a parsed guess sequence into a round score and outcome flags on
//! the submitting player. The engine only mutates the given player record and
//! emits a [`ScoreReport`]; all I/O (acknowledgments, reactions, scoreboard
//! posting) is the caller's concern.

use std::collections::HashSet;

use crate::results::structs::{Category, GuessResult, ParsedSubmission};
use crate::roster::Player;

/// Reaction emoji for round scores 0 through 10.
const SCORE_EMOJI: [&str; 11] = [
    "0️⃣", "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟",
];

/// Per-player result record for one accepted submission.
///
/// Consumed by the outbound notification path: the score and success flag
/// drive the acknowledgment reactions, and the achieved categories drive one
/// tile reaction per clean match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    /// Points earned this round
    pub score: u32,
    /// Whether all four categories were achieved
    pub succeeded: bool,
    /// Cleanly matched categories, in guess order
    pub categories: Vec<Category>,
}

impl ScoreReport {
    /// Emoji reaction sequence acknowledging the submission.
    ///
    /// One tile per cleanly matched category, followed by the score digit and
    /// a thumbs up or down for overall success. Scores outside the 0..=10
    /// range (impossible for well-formed share texts) get no digit reaction.
    pub fn reactions(&self) -> Vec<&'static str> {
        let mut reactions: Vec<&'static str> =
            self.categories.iter().map(Category::marker).collect();
        if let Some(digit) = SCORE_EMOJI.get(self.score as usize) {
            reactions.push(digit);
        }
        reactions.push(if self.succeeded { "👍" } else { "👎" });
        reactions
    }
}

/// Applies one accepted submission to a player record.
///
/// Every guess increments the lifetime guess counter. A clean category match
/// adds the category's fixed weight to the round score and counts a
/// subconnection; any other guess counts a mistake. Achieving all four
/// categories counts a full connection and marks the day succeeded. The
/// submission itself marks the day completed and counts exactly one
/// submission, regardless of content, so an all-mistake submission still
/// registers as a completed attempt.
///
/// # Arguments
///
/// * `player` - The submitting player's record
/// * `submission` - The parsed guess sequence
///
/// # Returns
///
/// A [`ScoreReport`] describing the outcome for the notification path.
pub fn apply_submission(player: &mut Player, submission: &ParsedSubmission) -> ScoreReport {
    let mut score = 0;
    let mut achieved = HashSet::new();
    let mut categories = Vec::new();

    for guess in &submission.guesses {
        player.total_guess_count += 1;
        match guess {
            GuessResult::Clean(category) => {
                player.sub_connection_count += 1;
                score += category.points();
                achieved.insert(*category);
                categories.push(*category);
            }
            GuessResult::Miss => player.mistake_count += 1,
        }
    }

    let succeeded = Category::ALL.iter().all(|c| achieved.contains(c));
    if succeeded {
        player.connection_count += 1;
        player.succeeded_today = true;
    }

    player.score = score;
    player.completed_today = true;
    player.submission_count += 1;

    ScoreReport {
        score,
        succeeded,
        categories,
    }
}
