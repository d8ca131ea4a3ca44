//! Warning-ping silencing command handler.
//!
//! Silencing only suppresses the pre-deadline warning ping; a silenced
//! player still appears in the deadline call-out and the new-round
//! announcement. The target defaults to the invoker, so `silenceping` with
//! no arguments silences yourself.

use log::debug;

use crate::commands::{CommandContext, CommandOutcome};
use crate::responses::{format_silence, format_silence_not_found};
use crate::roster::SilenceOutcome;

/// Sets the warning-ping silence flag for the target player.
pub fn handle_silence(
    context: &mut CommandContext,
    target: Option<&str>,
    silence: bool,
) -> CommandOutcome {
    let target = target.unwrap_or(context.invoker);
    debug!(
        "handling silenceping command from {} for {} (silence={})",
        context.invoker, target, silence
    );

    let outcome = context.state.roster.set_silenced(target, silence);
    // echo the stored casing when the player exists
    let stored_name = context
        .state
        .roster
        .find(target)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| target.to_owned());

    let response = match outcome {
        SilenceOutcome::NotFound => format_silence_not_found(target, &context.state.roster),
        _ => format_silence(outcome, &stored_name, silence),
    };

    CommandOutcome {
        response,
        state_changed: outcome == SilenceOutcome::Updated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    fn run(state: &mut AppState, target: Option<&str>, silence: bool) -> CommandOutcome {
        let mut context = CommandContext {
            state,
            invoker: "alice",
            channel_id: "chan",
            game_name: "Connections",
        };
        handle_silence(&mut context, target, silence)
    }

    #[test]
    fn test_silence_defaults_to_invoker() {
        let mut state = AppState::new();
        state.roster.register("Alice");

        let outcome = run(&mut state, None, true);

        assert!(outcome.state_changed);
        assert_eq!(outcome.response, "Silenced daily ping for Alice.");
        assert!(state.roster.find("alice").unwrap().silenced);
    }

    #[test]
    fn test_silence_named_target() {
        let mut state = AppState::new();
        state.roster.register("Bob");

        let outcome = run(&mut state, Some("bob"), true);

        assert!(outcome.state_changed);
        assert!(state.roster.find("Bob").unwrap().silenced);
    }

    #[test]
    fn test_silence_is_idempotent() {
        let mut state = AppState::new();
        state.roster.register("Alice");
        run(&mut state, None, true);

        let outcome = run(&mut state, None, true);

        assert!(!outcome.state_changed);
        assert_eq!(outcome.response, "Daily ping already silenced for Alice.");
    }

    #[test]
    fn test_unsilence() {
        let mut state = AppState::new();
        state.roster.register("Alice");
        run(&mut state, None, true);

        let outcome = run(&mut state, None, false);

        assert!(outcome.state_changed);
        assert_eq!(outcome.response, "Enabled daily ping for Alice.");
        assert!(!state.roster.find("Alice").unwrap().silenced);
    }

    #[test]
    fn test_unknown_target_lists_existing_players() {
        let mut state = AppState::new();
        state.roster.register("Alice");

        let outcome = run(&mut state, Some("zed"), true);

        assert!(!outcome.state_changed);
        assert!(outcome.response.starts_with("Could not find zed."));
        assert!(outcome.response.contains("Alice"));
    }
}
