//! Command action handlers.
//!
//! Individual handler functions for each command. Each handler receives a
//! [`CommandContext`](crate::commands::CommandContext) with the locked
//! state, mutates it as needed, and returns a
//! [`CommandOutcome`](crate::commands::CommandOutcome) whose
//! `state_changed` flag tells the bot to persist before replying.

mod bind;
mod deregister;
mod register;
mod silence;
mod stats;

pub use crate::commands::actions::{
    bind::handle_bind, deregister::handle_deregister, register::handle_register,
    silence::handle_silence, stats::handle_stats,
};
