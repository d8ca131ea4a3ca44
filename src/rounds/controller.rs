//! Daily round state machine.
//!
//! The [`RoundController`] drives a round through its daily cycle: open for
//! submissions, warned an hour before the deadline, scored, and finally
//! rolled over into the next puzzle. Two independent triggers advance it:
//!
//! 1. The **completion trigger** runs after every accepted submission and
//!    tallies early once every registered player has completed.
//! 2. The **time trigger** is a periodic tick that fires the pre-deadline
//!    warning and, once the local date changes, forces the tally and rolls
//!    the round over.
//!
//! The controller never performs I/O. Each transition returns
//! [`RoundEvent`]s describing what should be announced; the bot persists the
//! state and delivers the events. Transition bodies are idempotent and
//! guarded by the persisted flags, so a re-entered or restarted cycle is
//! safe.

use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use log::info;

use crate::rounds::scoreboard::{Scoreboard, tally};
use crate::state::AppState;

/// An announcement produced by a round transition.
///
/// Names are plain player names; the delivery path resolves them to
/// platform mentions and skips any that no longer resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// Pre-deadline ping to registered, incomplete, non-silenced players.
    Warning {
        /// Players to ping
        names: Vec<String>,
    },
    /// Deadline call-out of registered players who never submitted.
    Shame {
        /// Players to call out
        names: Vec<String>,
    },
    /// The tallied scoreboard to post.
    Scoreboard(Scoreboard),
    /// A new puzzle round has opened.
    NewRound {
        /// The new puzzle number
        puzzle_number: u32,
        /// Registered players to announce it to
        names: Vec<String>,
    },
}

/// Drives the warning, scoring, and rollover transitions of the daily round.
///
/// Keeps only two pieces of non-persisted state: the date the active round
/// belongs to and the configured warning instant. Everything else it reads
/// and writes through [`AppState`], so the machine picks up exactly where
/// the persisted flags say it left off.
#[derive(Debug)]
pub struct RoundController {
    /// Local date of the active round.
    round_date: NaiveDate,
    /// Local time of day the pre-deadline warning fires.
    warning_time: NaiveTime,
}

impl RoundController {
    /// Creates a controller for the round belonging to `today`.
    pub fn new(today: NaiveDate, warning_time: NaiveTime) -> Self {
        RoundController {
            round_date: today,
            warning_time,
        }
    }

    /// The local date of the active round.
    pub fn round_date(&self) -> NaiveDate {
        self.round_date
    }

    /// Completion trigger, run after every accepted submission.
    ///
    /// Tallies immediately when every registered player has completed the
    /// active puzzle and the round is still unscored, so an early-finishing
    /// group gets its scoreboard before the deadline.
    pub fn check_completion(&self, state: &mut AppState, now: DateTime<Local>) -> Option<RoundEvent> {
        if state.round.scored_today || !state.roster.all_registered_completed() {
            return None;
        }
        info!("all registered players completed puzzle #{}", state.round.puzzle_number);
        tally(&mut state.roster, &mut state.round, now).map(RoundEvent::Scoreboard)
    }

    /// Time trigger, run on every scheduler tick.
    ///
    /// Fires the warning once the warning instant passes on the round's own
    /// date, and handles the deadline once the local date moves past it:
    /// shames incomplete registered players, forces the tally if it never
    /// happened, and rolls the round over. An empty roster leaves the timer
    /// idle.
    pub fn tick(&mut self, state: &mut AppState, now: DateTime<Local>) -> Vec<RoundEvent> {
        let mut events = Vec::new();
        if state.roster.is_empty() {
            return events;
        }

        if now.date_naive() == self.round_date
            && now.time() >= self.warning_time
            && !state.round.scored_today
            && !state.round.sent_warning
        {
            let names: Vec<String> = state
                .roster
                .registered()
                .filter(|p| !p.completed_today && !p.silenced)
                .map(|p| p.name.clone())
                .collect();
            if !names.is_empty() {
                events.push(RoundEvent::Warning { names });
            }
            state.round.sent_warning = true;
        }

        if now.date_naive() > self.round_date {
            if !state.round.scored_today {
                let names: Vec<String> = state
                    .roster
                    .registered()
                    .filter(|p| !p.completed_today)
                    .map(|p| p.name.clone())
                    .collect();
                if !names.is_empty() {
                    events.push(RoundEvent::Shame { names });
                }
                if let Some(scoreboard) = tally(&mut state.roster, &mut state.round, now) {
                    events.push(RoundEvent::Scoreboard(scoreboard));
                }
            }
            events.push(self.roll_over(state, now.date_naive()));
        }

        events
    }

    /// Startup check that catches up transitions missed while the process
    /// was down.
    ///
    /// Compares the persisted `last_scored` date against the current date:
    /// a round scored on a previous day missed its midnight rollover, and a
    /// round whose score is two or more days stale was never tallied at
    /// all. Either way the machine is brought back to a clean open round
    /// before the loops start.
    pub fn catch_up(&mut self, state: &mut AppState, now: DateTime<Local>) -> Vec<RoundEvent> {
        let today = now.date_naive();
        let mut events = Vec::new();

        let Some(last_scored) = state.round.last_scored else {
            self.round_date = today;
            return events;
        };
        let last_date = last_scored.date_naive();

        if state.round.scored_today && last_date < today {
            info!("catching up rollover missed since {}", last_date);
            events.push(self.roll_over(state, today));
        } else if !state.round.scored_today && (today - last_date).num_days() > 1 {
            info!("catching up tally missed since {}", last_date);
            if let Some(scoreboard) = tally(&mut state.roster, &mut state.round, now) {
                events.push(RoundEvent::Scoreboard(scoreboard));
            }
            events.push(self.roll_over(state, today));
        } else {
            self.round_date = today;
        }

        events
    }

    /// Unconditional end-of-day transition into the next round.
    ///
    /// Resets every player's per-round fields, advances the puzzle number,
    /// clears the cycle flags, and re-dates the round.
    fn roll_over(&mut self, state: &mut AppState, today: NaiveDate) -> RoundEvent {
        state.roster.reset_round();
        state.round.puzzle_number += 1;
        state.round.scored_today = false;
        state.round.sent_warning = false;
        self.round_date = today;

        info!("rolled over to puzzle #{}", state.round.puzzle_number);

        let names: Vec<String> = state.roster.registered().map(|p| p.name.clone()).collect();
        RoundEvent::NewRound {
            puzzle_number: state.round.puzzle_number,
            names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn warning_time() -> NaiveTime {
        NaiveTime::from_hms_opt(23, 0, 0).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn state_with_players(players: &[(&str, bool, bool)]) -> AppState {
        // (name, completed, silenced)
        let mut state = AppState::new();
        state.round.puzzle_number = 50;
        for (name, completed, silenced) in players {
            state.roster.register(name);
            let player = state.roster.find_mut(name).unwrap();
            player.completed_today = *completed;
            player.silenced = *silenced;
        }
        state
    }

    fn controller_for(day: u32) -> RoundController {
        RoundController::new(
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            warning_time(),
        )
    }

    #[test]
    fn test_tick_before_warning_time_does_nothing() {
        let mut controller = controller_for(14);
        let mut state = state_with_players(&[("Alice", false, false)]);

        let events = controller.tick(&mut state, at(2024, 3, 14, 22, 59));

        assert!(events.is_empty());
        assert!(!state.round.sent_warning);
    }

    #[test]
    fn test_warning_pings_incomplete_unsilenced_players() {
        let mut controller = controller_for(14);
        let mut state = state_with_players(&[
            ("Alice", false, false),
            ("Bob", true, false),
            ("Carol", false, true),
        ]);

        let events = controller.tick(&mut state, at(2024, 3, 14, 23, 0));

        assert_eq!(
            events,
            vec![RoundEvent::Warning {
                names: vec!["Alice".to_owned()]
            }]
        );
        assert!(state.round.sent_warning);
    }

    #[test]
    fn test_warning_fires_once_per_cycle() {
        let mut controller = controller_for(14);
        let mut state = state_with_players(&[("Alice", false, false)]);

        assert_eq!(controller.tick(&mut state, at(2024, 3, 14, 23, 0)).len(), 1);
        assert!(controller.tick(&mut state, at(2024, 3, 14, 23, 1)).is_empty());
    }

    #[test]
    fn test_no_warning_when_already_scored() {
        let mut controller = controller_for(14);
        let mut state = state_with_players(&[("Alice", true, false)]);
        state.round.scored_today = true;

        assert!(controller.tick(&mut state, at(2024, 3, 14, 23, 0)).is_empty());
        assert!(!state.round.sent_warning);
    }

    #[test]
    fn test_midnight_shames_tallies_and_rolls_over() {
        let mut controller = controller_for(14);
        let mut state = state_with_players(&[("Alice", true, false), ("Bob", false, false)]);
        state.roster.find_mut("Alice").unwrap().score = 6;

        let events = controller.tick(&mut state, at(2024, 3, 15, 0, 0));

        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            RoundEvent::Shame {
                names: vec!["Bob".to_owned()]
            }
        );
        let RoundEvent::Scoreboard(scoreboard) = &events[1] else {
            panic!("expected a scoreboard event, got {:?}", events[1]);
        };
        assert_eq!(scoreboard.puzzle_number, 50);
        assert_eq!(
            events[2],
            RoundEvent::NewRound {
                puzzle_number: 51,
                names: vec!["Alice".to_owned(), "Bob".to_owned()]
            }
        );
    }

    #[test]
    fn test_rollover_resets_round_fields_and_keeps_lifetime_stats() {
        let mut controller = controller_for(14);
        let mut state = state_with_players(&[("Alice", true, false)]);
        {
            let alice = state.roster.find_mut("Alice").unwrap();
            alice.score = 10;
            alice.succeeded_today = true;
            alice.submission_count = 20;
        }

        controller.tick(&mut state, at(2024, 3, 15, 0, 0));

        let alice = state.roster.find("Alice").unwrap();
        assert_eq!(alice.score, 0);
        assert!(!alice.completed_today);
        assert!(!alice.succeeded_today);
        assert_eq!(alice.submission_count, 20);
        assert_eq!(state.round.puzzle_number, 51);
        assert!(!state.round.scored_today);
        assert!(!state.round.sent_warning);
        assert_eq!(controller.round_date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_midnight_after_early_scoring_skips_tally() {
        let mut controller = controller_for(14);
        let mut state = state_with_players(&[("Alice", true, false)]);
        state.round.scored_today = true;

        let events = controller.tick(&mut state, at(2024, 3, 15, 0, 0));

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], RoundEvent::NewRound { puzzle_number: 51, .. }));
    }

    #[test]
    fn test_tick_with_empty_roster_is_idle() {
        let mut controller = controller_for(14);
        let mut state = AppState::new();

        assert!(controller.tick(&mut state, at(2024, 3, 15, 0, 0)).is_empty());
        assert_eq!(state.round.puzzle_number, 0);
    }

    #[test]
    fn test_completion_trigger_tallies_early() {
        let controller = controller_for(14);
        let mut state = state_with_players(&[("Alice", true, false), ("Bob", true, false)]);
        state.roster.find_mut("Alice").unwrap().score = 10;

        let event = controller.check_completion(&mut state, at(2024, 3, 14, 9, 30));

        assert!(matches!(event, Some(RoundEvent::Scoreboard(_))));
        assert!(state.round.scored_today);
    }

    #[test]
    fn test_completion_trigger_waits_for_everyone() {
        let controller = controller_for(14);
        let mut state = state_with_players(&[("Alice", true, false), ("Bob", false, false)]);

        assert!(controller.check_completion(&mut state, at(2024, 3, 14, 9, 30)).is_none());
        assert!(!state.round.scored_today);
    }

    #[test]
    fn test_completion_trigger_never_double_tallies() {
        let controller = controller_for(14);
        let mut state = state_with_players(&[("Alice", true, false)]);
        state.round.scored_today = true;

        assert!(controller.check_completion(&mut state, at(2024, 3, 14, 9, 30)).is_none());
    }

    #[test]
    fn test_catch_up_fresh_state_only_dates_the_round() {
        let mut controller = controller_for(1);
        let mut state = state_with_players(&[("Alice", false, false)]);

        let events = controller.catch_up(&mut state, at(2024, 3, 14, 8, 0));

        assert!(events.is_empty());
        assert_eq!(controller.round_date(), NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
    }

    #[test]
    fn test_catch_up_rolls_over_after_missed_midnight() {
        let mut controller = controller_for(1);
        let mut state = state_with_players(&[("Alice", true, false)]);
        state.round.scored_today = true;
        state.round.last_scored = Some(at(2024, 3, 13, 22, 15));

        let events = controller.catch_up(&mut state, at(2024, 3, 14, 8, 0));

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], RoundEvent::NewRound { puzzle_number: 51, .. }));
        assert!(!state.round.scored_today);
    }

    #[test]
    fn test_catch_up_tallies_a_round_never_scored() {
        let mut controller = controller_for(1);
        let mut state = state_with_players(&[("Alice", true, false)]);
        state.roster.find_mut("Alice").unwrap().score = 4;
        state.round.last_scored = Some(at(2024, 3, 11, 23, 59));

        let events = controller.catch_up(&mut state, at(2024, 3, 14, 8, 0));

        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], RoundEvent::Scoreboard(_)));
        assert!(matches!(events[1], RoundEvent::NewRound { .. }));
        assert_eq!(state.round.puzzle_number, 51);
    }

    #[test]
    fn test_catch_up_mid_day_restart_is_quiet() {
        let mut controller = controller_for(1);
        let mut state = state_with_players(&[("Alice", true, false)]);
        state.round.scored_today = true;
        state.round.last_scored = Some(at(2024, 3, 14, 9, 0));

        let events = controller.catch_up(&mut state, at(2024, 3, 14, 11, 0));

        assert!(events.is_empty());
        assert!(state.round.scored_today);
    }

    #[test]
    fn test_catch_up_yesterday_scored_normally_is_quiet() {
        // Scored yesterday, rolled at midnight, restarted this morning.
        let mut controller = controller_for(1);
        let mut state = state_with_players(&[("Alice", false, false)]);
        state.round.last_scored = Some(at(2024, 3, 13, 23, 59));

        let events = controller.catch_up(&mut state, at(2024, 3, 14, 8, 0));

        assert!(events.is_empty());
        assert_eq!(state.round.puzzle_number, 50);
    }
}
