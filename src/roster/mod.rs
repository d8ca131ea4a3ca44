//! Player registry and lifetime statistics.
//!
//! This module owns everything about tracked players:
//!
//! - [`Player`]: one record per distinct identity, mixing per-round fields
//!   with lifetime counters
//! - [`Roster`]: the registry with the registration lifecycle
//!   (register, two-step deregister, silence) and round-completion checks
//! - [`stats_report`]: the sortable lifetime statistics report
//!
//! # Example
//!
//! ```
//! use grouper::roster::{DeregisterOutcome, RegisterOutcome, Roster};
//!
//! let mut roster = Roster::new();
//! assert_eq!(roster.register("alice"), RegisterOutcome::Registered);
//! assert_eq!(roster.deregister("alice"), DeregisterOutcome::Deregistered);
//! // stats survive a single deregistration
//! assert!(roster.find("alice").is_some());
//! assert_eq!(roster.deregister("alice"), DeregisterOutcome::DataDeleted);
//! assert!(roster.find("alice").is_none());
//! ```

mod player;
mod registry;
mod stats;

pub use crate::roster::player::Player;
pub use crate::roster::registry::{
    DeregisterOutcome, RegisterOutcome, Roster, SilenceOutcome,
};
pub use crate::roster::stats::{SortKey, stats_report};
