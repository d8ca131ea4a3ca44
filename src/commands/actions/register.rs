//! Player registration command handler.
//!
//! Registers the invoking user for puzzle tracking. Registration is
//! idempotent: an already-registered player gets a reminder instead of a
//! second record, and a previously deregistered player is re-enabled with
//! their lifetime statistics intact.

use log::debug;

use crate::commands::{CommandContext, CommandOutcome};
use crate::responses::format_register;
use crate::roster::RegisterOutcome;

/// Registers the invoking player for tracking.
pub fn handle_register(context: &mut CommandContext) -> CommandOutcome {
    debug!("handling register command from {}", context.invoker);

    let outcome = context.state.roster.register(context.invoker);

    CommandOutcome {
        response: format_register(outcome, context.game_name),
        state_changed: outcome != RegisterOutcome::AlreadyRegistered,
    }
}
