//! Command routing.
//!
//! The [`Commander`] is the single entry point for executing validated
//! command invocations. It builds the handler context from the invocation
//! and the locked state, then routes to the matching action handler.

use crate::commands::actions::{
    handle_bind, handle_deregister, handle_register, handle_silence, handle_stats,
};
use crate::commands::{Command, CommandContext, CommandInvocation, CommandOutcome};
use crate::state::AppState;

/// Routes validated command invocations to their handlers.
///
/// Stateless apart from the configured game name used in reply wording; one
/// instance is shared by the whole bot.
pub struct Commander {
    /// Game name echoed in replies.
    game_name: String,
}

impl Commander {
    /// Creates a commander for the configured game name.
    pub fn new(game_name: &str) -> Self {
        Commander {
            game_name: game_name.to_owned(),
        }
    }

    /// Executes one command invocation against the locked state.
    ///
    /// The caller is responsible for persisting the state when the returned
    /// outcome's `state_changed` flag is set, before delivering the reply.
    pub fn execute(&self, invocation: &CommandInvocation, state: &mut AppState) -> CommandOutcome {
        let mut context = CommandContext {
            state,
            invoker: &invocation.invoker,
            channel_id: &invocation.channel_id,
            game_name: &self.game_name,
        };

        match &invocation.command {
            Command::Register => handle_register(&mut context),
            Command::Deregister => handle_deregister(&mut context),
            Command::Bind => handle_bind(&mut context),
            Command::SilencePing { target, silence } => {
                handle_silence(&mut context, target.as_deref(), *silence)
            }
            Command::Stats {
                sort_key,
                limit,
                include_unregistered,
            } => handle_stats(&mut context, *sort_key, *limit, *include_unregistered),
        }
    }
}
