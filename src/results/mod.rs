//! Submission parsing and scoring.
//!
//! This module turns raw chat text into scored results in two strictly
//! separated stages:
//!
//! - [`parser`] - Scans the share text into a [`ParsedSubmission`] or a typed
//!   [`SubmissionRejection`], touching no state.
//! - [`scoring`] - Applies a parsed submission to a player record and emits a
//!   [`ScoreReport`] for the notification path.
//!
//! The split guarantees the parse-before-mutate contract: a malformed or
//! wrong-puzzle message can never leave a player record half updated.
//!
//! # Example
//!
//! ```
//! use grouper::results::{apply_submission, is_submission, parse};
//! use grouper::roster::Player;
//!
//! let body = "Connections\nPuzzle #42\n🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟪🟪🟪";
//! assert!(is_submission(body, "Connections"));
//!
//! let parsed = parse(body, 42).unwrap();
//! let mut player = Player::new("alice");
//! let report = apply_submission(&mut player, &parsed);
//! assert_eq!(report.score, 10);
//! ```

mod parser;
mod scoring;
mod structs;

pub use crate::results::parser::{PUZZLE_MARKER, SubmissionRejection, is_submission, parse};
pub use crate::results::scoring::{ScoreReport, apply_submission};
pub use crate::results::structs::{Category, GuessResult, ParsedSubmission};
