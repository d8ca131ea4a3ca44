//! Player deregistration command handler.
//!
//! The first call disables tracking and keeps lifetime statistics; a second
//! call on the already-deregistered player deletes the record entirely. The
//! two-step scheme gives players a way out without instantly losing years of
//! stats.

use log::debug;

use crate::commands::{CommandContext, CommandOutcome};
use crate::responses::format_deregister;
use crate::roster::DeregisterOutcome;

/// Deregisters the invoking player, deleting saved data on the second call.
pub fn handle_deregister(context: &mut CommandContext) -> CommandOutcome {
    debug!("handling deregister command from {}", context.invoker);

    let outcome = context.state.roster.deregister(context.invoker);

    CommandOutcome {
        response: format_deregister(outcome, context.game_name),
        state_changed: outcome != DeregisterOutcome::NoData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    fn run(state: &mut AppState, invoker: &str) -> CommandOutcome {
        let mut context = CommandContext {
            state,
            invoker,
            channel_id: "chan",
            game_name: "Connections",
        };
        handle_deregister(&mut context)
    }

    #[test]
    fn test_first_deregister_keeps_data() {
        let mut state = AppState::new();
        state.roster.register("alice");

        let outcome = run(&mut state, "alice");

        assert!(outcome.state_changed);
        assert!(outcome.response.contains("Deregistering a second time"));
        assert!(state.roster.find("alice").is_some());
        assert!(!state.roster.find("alice").unwrap().registered);
    }

    #[test]
    fn test_second_deregister_deletes_data() {
        let mut state = AppState::new();
        state.roster.register("alice");
        run(&mut state, "alice");

        let outcome = run(&mut state, "alice");

        assert!(outcome.state_changed);
        assert_eq!(
            outcome.response,
            "Your saved data has been deleted for Connections tracking."
        );
        assert!(state.roster.find("alice").is_none());
    }

    #[test]
    fn test_deregister_unknown_player() {
        let mut state = AppState::new();

        let outcome = run(&mut state, "nobody");

        assert!(!outcome.state_changed);
        assert_eq!(
            outcome.response,
            "You have no saved data for Connections tracking."
        );
    }
}
