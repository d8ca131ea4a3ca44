//! Lifetime statistics report.
//!
//! Builds the `stats` command output: every tracked player's lifetime
//! metrics, ordered by a caller-chosen sort key. Ratio metrics guard against
//! players with zero submissions by reporting 0.

use std::cmp::Ordering;

use crate::roster::player::Player;
use crate::roster::registry::Roster;

/// Sort keys accepted by the `stats` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Percentage of submissions that won the round
    WinPct,
    /// Lifetime wins
    Wins,
    /// Lifetime accepted submissions
    Submissions,
    /// Average guesses per submission
    AvgGuesses,
    /// Lifetime guess lines
    TotalGuesses,
    /// Percentage of submissions achieving all four categories
    CompletionPct,
    /// Lifetime full connections
    Connections,
    /// Lifetime clean category matches
    Subconnections,
    /// Percentage of submissions that were mistakes
    MistakePct,
    /// Lifetime mistakes
    Mistakes,
}

impl SortKey {
    /// Human-readable label used in the report header.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::WinPct => "Win %",
            SortKey::Wins => "Wins",
            SortKey::Submissions => "Submissions",
            SortKey::AvgGuesses => "Avg. Guesses",
            SortKey::TotalGuesses => "Total Guesses",
            SortKey::CompletionPct => "Completion %",
            SortKey::Connections => "Connections",
            SortKey::Subconnections => "Subconnections",
            SortKey::MistakePct => "Mistakes %",
            SortKey::Mistakes => "Mistakes",
        }
    }

    /// The metric value this key sorts by.
    fn value(&self, player: &Player) -> f64 {
        match self {
            SortKey::WinPct => win_percent(player),
            SortKey::Wins => player.win_count as f64,
            SortKey::Submissions => player.submission_count as f64,
            SortKey::AvgGuesses => avg_guesses(player),
            SortKey::TotalGuesses => player.total_guess_count as f64,
            SortKey::CompletionPct => completion_percent(player),
            SortKey::Connections => player.connection_count as f64,
            SortKey::Subconnections => player.sub_connection_count as f64,
            SortKey::MistakePct => mistake_percent(player),
            SortKey::Mistakes => player.mistake_count as f64,
        }
    }

    /// Mistake metrics read best lowest-first; everything else highest-first.
    fn ascending(&self) -> bool {
        matches!(self, SortKey::MistakePct | SortKey::Mistakes)
    }
}

fn per_submission(numerator: u32, player: &Player) -> f64 {
    if player.submission_count == 0 {
        return 0.0;
    }
    numerator as f64 / player.submission_count as f64
}

fn win_percent(player: &Player) -> f64 {
    per_submission(player.win_count, player) * 100.0
}

fn completion_percent(player: &Player) -> f64 {
    per_submission(player.connection_count, player) * 100.0
}

fn mistake_percent(player: &Player) -> f64 {
    per_submission(player.mistake_count, player) * 100.0
}

fn avg_guesses(player: &Player) -> f64 {
    per_submission(player.total_guess_count, player)
}

fn plural(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Builds the full stats report for all tracked players.
///
/// # Arguments
///
/// * `roster` - The player registry
/// * `sort_key` - Metric to order by
/// * `limit` - Show only the first `limit` players; any value below 1 shows
///   everyone
/// * `include_unregistered` - Whether deregistered players with retained
///   stats appear in the report
pub fn stats_report(
    roster: &Roster,
    sort_key: SortKey,
    limit: i32,
    include_unregistered: bool,
) -> String {
    let mut players: Vec<&Player> = roster
        .players()
        .iter()
        .filter(|p| include_unregistered || p.registered)
        .collect();

    players.sort_by(|a, b| {
        let ordering = sort_key
            .value(a)
            .partial_cmp(&sort_key.value(b))
            .unwrap_or(Ordering::Equal);
        if sort_key.ascending() {
            ordering
        } else {
            ordering.reverse()
        }
    });

    let shown = if limit < 1 {
        players.len()
    } else {
        players.len().min(limit as usize)
    };

    let mut report = if shown == players.len() {
        format!("Sorting all players by {}:\n", sort_key.label())
    } else {
        format!("Sorting top {} players by {}:\n", shown, sort_key.label())
    };

    for player in players.into_iter().take(shown) {
        report.push_str(&format!("{}\n", player.name));
        report.push_str(&format!("\t{:.2} Win %\n", win_percent(player)));
        report.push_str(&format!("\t{}\n", plural(player.win_count, "Win", "Wins")));
        report.push_str(&format!(
            "\t{}\n",
            plural(player.submission_count, "Submission", "Submissions")
        ));
        report.push_str(&format!(
            "\t{:.2} Average Guesses per Submission\n",
            avg_guesses(player)
        ));
        report.push_str(&format!(
            "\t{}\n",
            plural(player.total_guess_count, "Total guess", "Total guesses")
        ));
        report.push_str(&format!("\t{:.2} Completion %\n", completion_percent(player)));
        report.push_str(&format!(
            "\t{}\n",
            plural(
                player.connection_count,
                "Successful connection",
                "Successful connections"
            )
        ));
        report.push_str(&format!(
            "\t{}\n",
            plural(
                player.sub_connection_count,
                "Successful subconnection",
                "Successful subconnections"
            )
        ));
        report.push_str(&format!("\t{:.2} Mistake %\n", mistake_percent(player)));
        report.push_str(&format!(
            "\t{}\n",
            plural(player.mistake_count, "Mistake", "Mistakes")
        ));
    }

    report
}
