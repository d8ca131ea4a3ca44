//! Command handling.
//!
//! Commands arrive from the adapter layer as already-validated invocations,
//! the platform side owns registration of the command set and argument
//! parsing. This module routes each invocation to its handler and produces
//! a reply plus a flag telling the bot whether state must be persisted
//! before that reply goes out.
//!
//! # Flow
//!
//! ```text
//! CommandInvocation → Commander::execute() → action handler → CommandOutcome
//! ```
//!
//! # Available commands
//!
//! | Command | Effect |
//! |---------|--------|
//! | `register` | Track the invoking player |
//! | `deregister` | Stop tracking; a second call deletes saved data |
//! | `bind` | Rebind the active channel to the invoking channel |
//! | `silenceping` | Toggle the pre-deadline warning ping for a player |
//! | `stats` | Show lifetime statistics, sorted by a chosen key |

mod commander;

pub mod actions;

pub use crate::commands::commander::Commander;

use crate::roster::SortKey;
use crate::state::AppState;

/// A validated command, with its arguments already typed by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register the invoking player for tracking.
    Register,
    /// Deregister the invoking player; deletes data on the second call.
    Deregister,
    /// Bind the invoking channel as the tracker channel.
    Bind,
    /// Silence or re-enable the warning ping.
    SilencePing {
        /// Player to change; defaults to the invoker
        target: Option<String>,
        /// `true` silences, `false` re-enables
        silence: bool,
    },
    /// Show lifetime statistics.
    Stats {
        /// Metric to sort by
        sort_key: SortKey,
        /// Number of players to show; below 1 shows everyone
        limit: i32,
        /// Whether deregistered players appear
        include_unregistered: bool,
    },
}

/// One command invocation as delivered by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Username of the invoking user.
    pub invoker: String,
    /// Channel the command was invoked in.
    pub channel_id: String,
    /// The validated command.
    pub command: Command,
}

/// Runtime context handed to every command handler.
pub struct CommandContext<'a> {
    /// Shared application state, already locked by the caller.
    pub state: &'a mut AppState,
    /// Username of the invoking user.
    pub invoker: &'a str,
    /// Channel the command was invoked in.
    pub channel_id: &'a str,
    /// Configured game name, used in reply wording.
    pub game_name: &'a str,
}

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Reply to send back to the invoker.
    pub response: String,
    /// Whether the state mutated and must be persisted before replying.
    pub state_changed: bool,
}
