//! Lifetime statistics command handler.

use log::debug;

use crate::commands::{CommandContext, CommandOutcome};
use crate::roster::{SortKey, stats_report};

/// Builds the stats report. Read-only.
pub fn handle_stats(
    context: &mut CommandContext,
    sort_key: SortKey,
    limit: i32,
    include_unregistered: bool,
) -> CommandOutcome {
    debug!(
        "handling stats command from {} sorted by {}",
        context.invoker,
        sort_key.label()
    );

    CommandOutcome {
        response: stats_report(&context.state.roster, sort_key, limit, include_unregistered),
        state_changed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[test]
    fn test_stats_is_read_only() {
        let mut state = AppState::new();
        state.roster.register("alice");
        let before = state.clone();

        let mut context = CommandContext {
            state: &mut state,
            invoker: "alice",
            channel_id: "chan",
            game_name: "Connections",
        };
        let outcome = handle_stats(&mut context, SortKey::Wins, -1, false);

        assert!(!outcome.state_changed);
        assert!(outcome.response.contains("alice"));
        assert_eq!(state, before);
    }
}
