//! Player registry and registration lifecycle.
//!
//! The [`Roster`] holds every tracked player and implements the
//! registration, deregistration, and silencing operations. Lookups are
//! case-insensitive while the stored name keeps its original casing.
//!
//! Registration follows a two-step deletion scheme: deregistering once only
//! disables tracking and keeps the lifetime statistics; deregistering a
//! second time removes the record entirely.

use log::info;

use crate::roster::player::Player;

/// Outcome of a [`Roster::register`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The player exists and was already registered; nothing changed.
    AlreadyRegistered,
    /// The player existed unregistered and was re-enabled with stats intact.
    Reregistered,
    /// A fresh player record was created.
    Registered,
}

/// Outcome of a [`Roster::deregister`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeregisterOutcome {
    /// Tracking disabled; lifetime statistics retained.
    Deregistered,
    /// The already-unregistered record was removed entirely.
    DataDeleted,
    /// No record exists for the name.
    NoData,
}

/// Outcome of a [`Roster::set_silenced`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SilenceOutcome {
    /// The flag already had the requested value; nothing changed.
    AlreadySet,
    /// The flag was updated.
    Updated,
    /// No record exists for the name.
    NotFound,
}

/// All tracked players, in registration order.
///
/// Every mutating operation on the roster happens under the caller's state
/// lock, and callers persist the full state before acknowledging the change
/// so a crash right after the chat-side acknowledgment cannot lose it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Roster::default()
    }

    /// Returns whether no players are tracked at all.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All tracked players, registered or not.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Registered players only.
    pub fn registered(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.registered)
    }

    /// Adds an already-built player record, used by the persistence loader.
    pub fn insert(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Finds a player by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Player> {
        let lowered = name.to_lowercase();
        self.players.iter().find(|p| p.name.to_lowercase() == lowered)
    }

    /// Mutable variant of [`Roster::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Player> {
        let lowered = name.to_lowercase();
        self.players
            .iter_mut()
            .find(|p| p.name.to_lowercase() == lowered)
    }

    /// Registers a player for tracking.
    ///
    /// An existing registered player is left untouched. An existing
    /// unregistered player is re-enabled with their lifetime statistics
    /// preserved. An unknown name creates a fresh record.
    pub fn register(&mut self, name: &str) -> RegisterOutcome {
        match self.find_mut(name) {
            Some(player) if player.registered => {
                info!("player {} attempted to re-register", player.name);
                RegisterOutcome::AlreadyRegistered
            }
            Some(player) => {
                player.registered = true;
                info!("re-registered player {}", player.name);
                RegisterOutcome::Reregistered
            }
            None => {
                self.players.push(Player::new(name));
                info!("registered new player {}", name);
                RegisterOutcome::Registered
            }
        }
    }

    /// Deregisters a player, deleting the record on the second call.
    ///
    /// The first call on a registered player only disables tracking. A call
    /// on an already-unregistered player removes the record and all lifetime
    /// statistics.
    pub fn deregister(&mut self, name: &str) -> DeregisterOutcome {
        let lowered = name.to_lowercase();
        let Some(index) = self
            .players
            .iter()
            .position(|p| p.name.to_lowercase() == lowered)
        else {
            info!("unknown player {} attempted to deregister", name);
            return DeregisterOutcome::NoData;
        };

        if self.players[index].registered {
            self.players[index].registered = false;
            info!("deregistered player {}", self.players[index].name);
            DeregisterOutcome::Deregistered
        } else {
            let removed = self.players.remove(index);
            info!("deleted data for player {}", removed.name);
            DeregisterOutcome::DataDeleted
        }
    }

    /// Sets the warning-ping silence flag for a player.
    ///
    /// Idempotent: requesting the already-set value reports
    /// [`SilenceOutcome::AlreadySet`] and changes nothing.
    pub fn set_silenced(&mut self, name: &str, silence: bool) -> SilenceOutcome {
        match self.find_mut(name) {
            Some(player) if player.silenced == silence => SilenceOutcome::AlreadySet,
            Some(player) => {
                player.silenced = silence;
                info!(
                    "{} daily ping for player {}",
                    if silence { "silenced" } else { "enabled" },
                    player.name
                );
                SilenceOutcome::Updated
            }
            None => SilenceOutcome::NotFound,
        }
    }

    /// Whether every registered player has completed the active puzzle.
    ///
    /// Returns `false` when there is no registered player, so an empty
    /// roster can never trigger an early tally.
    pub fn all_registered_completed(&self) -> bool {
        let mut any = false;
        for player in self.registered() {
            any = true;
            if !player.completed_today {
                return false;
            }
        }
        any
    }

    /// Resets every player's per-round fields at rollover.
    pub fn reset_round(&mut self) {
        for player in &mut self.players {
            player.reset_round();
        }
    }
}
