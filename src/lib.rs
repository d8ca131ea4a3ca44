//! Grouper - a chat bot engine for tracking daily Connections puzzle scores.
//!
//! Grouper tracks player submissions to the daily Connections word puzzle in
//! a single chat channel, scores them, and drives the daily cycle of
//! reminder pings, scoreboard posting, and puzzle rollover.
//!
//! # Overview
//!
//! Players paste their share text into the bound channel; the engine parses
//! it, scores the guesses, and acknowledges with emoji reactions. Once every
//! registered player has submitted (or at midnight, whichever comes first)
//! the scoreboard is tallied and posted, win credit is assigned, and a new
//! round opens with the next puzzle number.
//!
//! # Features
//!
//! - **Submission Tracking**: Parses pasted share texts and scores the four
//!   categories with fixed weights (yellow 1, green 2, blue 3, purple 4)
//! - **Lifetime Statistics**: Wins, connections, subconnections, mistakes,
//!   guesses, and submissions per player, with a sortable `stats` report
//! - **Daily Cycle**: A one-hour warning ping before the deadline, a
//!   deadline call-out of players who never submitted, and an automatic
//!   rollover to the next puzzle at midnight
//! - **Early Scoring**: The scoreboard posts as soon as everyone has
//!   submitted, without waiting for midnight
//! - **Restart Resilience**: Persisted state plus a startup catch-up check,
//!   so a restart never skips a missed tally or rollover
//! - **Platform Agnostic**: The chat platform sits behind a small trait;
//!   any adapter that can deliver messages and reactions can host the engine
//!
//! # Architecture
//!
//! The engine consists of several modules:
//!
//! - [`bot`] - Main orchestration wiring state, scheduler, and messenger
//! - [`commands`] - Validated command invocations and their handlers
//! - [`config`] - YAML configuration with environment variable support
//! - [`messenger`] - Outbound boundary trait to the chat platform
//! - [`responses`] - User-facing reply wording
//! - [`results`] - Submission parsing and scoring
//! - [`roster`] - Player registry and lifetime statistics
//! - [`rounds`] - Daily round state machine, tally, and ranking
//! - [`state`] - The single shared state unit
//! - [`store`] - State document persistence
//!
//! # Runtime Behavior
//!
//! Once started, the host runs two concurrent tasks:
//!
//! 1. **Adapter loop**: feeds inbound messages and command invocations into
//!    the [`bot::Bot`]
//! 2. **Round task**: ticks the daily state machine on an interval,
//!    firing warnings and the midnight tally and rollover
//!
//! All state mutation is serialized behind one async mutex, and every
//! mutation is persisted before its chat-side acknowledgment goes out.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//! - `GROUPER_*` - Overrides any configuration value, e.g.
//!   `GROUPER_SCHEDULE__WARNING_HOUR=22`

pub mod bot;
pub mod commands;
pub mod config;
pub mod messenger;
pub mod responses;
pub mod results;
pub mod roster;
pub mod rounds;
pub mod state;
pub mod store;
pub mod utils;
