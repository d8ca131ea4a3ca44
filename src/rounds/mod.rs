//! Daily round lifecycle: state, tally, and the driving state machine.
//!
//! A round moves through four phases each real-world day:
//!
//! ```text
//! Open ──(warning instant)──▶ Warned ──(all complete / deadline)──▶ Scored
//!   ▲                                                                 │
//!   └───────────────────────(midnight rollover)◀──────────────────────┘
//! ```
//!
//! - [`RoundState`]: the persisted flags and identifiers of the active round
//! - [`tally`] / [`Scoreboard`]: ranking and win credit for a finished round
//! - [`RoundController`]: the transitions, driven by submissions and a
//!   periodic tick, emitting [`RoundEvent`]s for the delivery path

mod controller;
mod scoreboard;
mod state;

pub use crate::rounds::controller::{RoundController, RoundEvent};
pub use crate::rounds::scoreboard::{Scoreboard, Standing, tally};
pub use crate::rounds::state::RoundState;
