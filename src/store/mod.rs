//! State document persistence.
//!
//! - [`StateDocument`]: the exact on-disk JSON shape (round fields plus a
//!   flattened map of player records keyed by name)
//! - [`StateLoader`]: async load/persist with surfaced errors
//!
//! Every mutating operation in the bot persists through the loader before
//! the chat-side acknowledgment goes out, so a crash immediately after an
//! acknowledgment cannot lose the acknowledged state.

mod document;
mod loader;

pub use crate::store::document::StateDocument;
pub use crate::store::loader::StateLoader;
