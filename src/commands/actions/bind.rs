//! Channel binding command handler.
//!
//! The tracker operates in exactly one channel. Binding points it at the
//! channel the command was invoked in; submissions arriving anywhere else
//! are ignored.

use log::debug;

use crate::commands::{CommandContext, CommandOutcome};
use crate::responses::format_bind;

/// Binds the invoking channel as the tracker channel.
pub fn handle_bind(context: &mut CommandContext) -> CommandOutcome {
    debug!(
        "handling bind command from {} in channel {}",
        context.invoker, context.channel_id
    );

    context.state.round.bound_channel = Some(context.channel_id.to_owned());

    CommandOutcome {
        response: format_bind(context.channel_id, context.game_name),
        state_changed: true,
    }
}
