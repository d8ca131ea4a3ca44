//! Bot orchestration.
//!
//! This module provides the main [`Bot`] implementation that wires the
//! submission pipeline, the command handlers, and the daily round scheduler
//! around one shared state. The chat platform feeds it through two entry
//! points, [`Bot::handle_message`] for channel messages and
//! [`Bot::handle_command`] for validated command invocations, and receives
//! everything back through the [`Messenger`] trait.
//!
//! # Architecture
//!
//! All mutable state (player roster, round flags, and the round controller's
//! date) lives behind a single async mutex, so submissions, commands, and
//! timer transitions are fully serialized and the round-completion check
//! always sees a consistent snapshot. The lock is held across mutation and
//! persistence, then released before outbound messages are awaited.
//!
//! # Submission Flow
//!
//! ```text
//! message → channel/trigger gates → registry checks → parse → score
//!         → completion check → persist → reactions + replies
//! ```
//!
//! # Runtime Behavior
//!
//! Once started, the host runs two concurrent tasks:
//!
//! 1. **Adapter loop**: delivers inbound messages and command invocations
//! 2. **Round task** ([`Bot::run_round_task`]): ticks the round state
//!    machine every `tick_seconds`, firing the pre-deadline warning and the
//!    midnight tally and rollover
//!
//! Before either loop starts, [`Bot::catch_up`] reconciles the persisted
//! state with the current date so a restart never skips a missed tally or
//! rollover.

use std::time::Duration;

use chrono::{DateTime, Local};
use futures::future::join_all;
use log::{error, info, warn};
use tokio::sync::Mutex;
use tokio::time;

use crate::commands::{CommandInvocation, Commander};
use crate::config::Config;
use crate::messenger::Messenger;
use crate::responses::{
    format_already_submitted, format_invalid_syntax, format_new_round,
    format_no_registered_players, format_not_registered, format_save_failure, format_shame,
    format_warning, format_wrong_puzzle,
};
use crate::results::{SubmissionRejection, apply_submission, is_submission, parse};
use crate::rounds::{RoundController, RoundEvent, Scoreboard};
use crate::state::AppState;
use crate::store::StateLoader;

/// One inbound channel message as delivered by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Username of the author.
    pub author: String,
    /// Channel the message was posted in.
    pub channel_id: String,
    /// Platform identifier of the message, used for reactions.
    pub message_id: String,
    /// Raw message text.
    pub body: String,
}

/// State guarded by the single bot lock.
struct Shared {
    state: AppState,
    controller: RoundController,
}

/// Outbound work decided under the lock, delivered after it is released.
enum Reply {
    /// Prompt the author to register first; needs mention resolution.
    NoPlayers,
    /// Plain reply text.
    Text(String),
    /// Acknowledgment reactions on the submission message.
    Reactions(Vec<&'static str>),
    /// The early-completion scoreboard.
    Scoreboard(Scoreboard),
}

/// Main bot structure tying the engine together.
///
/// Generic over the [`Messenger`] implementation so tests can drive it with
/// a mock while the binary wires a real adapter.
pub struct Bot<M: Messenger> {
    /// All mutable state behind one lock.
    shared: Mutex<Shared>,
    /// Outbound boundary to the chat platform.
    messenger: M,
    /// State persistence.
    loader: StateLoader,
    /// Command router.
    commander: Commander,
    /// Game name used for trigger detection and reply wording.
    game_name: String,
    /// Link posted with each new-round announcement.
    puzzle_url: String,
    /// Seconds between round scheduler ticks.
    tick_seconds: u64,
}

impl<M: Messenger> Bot<M> {
    /// Creates the bot, loading persisted state through the loader.
    ///
    /// # Errors
    ///
    /// Fails when the state file exists but cannot be read or parsed;
    /// starting blind would silently discard lifetime statistics.
    pub async fn new(config: Config, loader: StateLoader, messenger: M) -> Result<Self, anyhow::Error> {
        let state = loader.load().await?;
        let controller = RoundController::new(
            Local::now().date_naive(),
            config.schedule.warning_time(),
        );

        Ok(Bot {
            shared: Mutex::new(Shared { state, controller }),
            messenger,
            loader,
            commander: Commander::new(&config.game.name),
            game_name: config.game.name,
            puzzle_url: config.game.url,
            tick_seconds: config.schedule.tick_seconds,
        })
    }

    /// Startup reconciliation of persisted state against the current date.
    ///
    /// Call once before the loops start. Catches up any tally or rollover
    /// missed while the process was down and announces the results.
    pub async fn catch_up(&self) {
        self.catch_up_at(Local::now()).await;
    }

    /// Runs the round scheduler until the process terminates.
    ///
    /// Each tick's body is isolated: failures are logged and the next tick
    /// proceeds normally.
    pub async fn run_round_task(&self) {
        info!("running round scheduler every {} seconds", self.tick_seconds);
        let mut interval = time::interval(Duration::from_secs(self.tick_seconds));

        loop {
            interval.tick().await;
            self.round_tick(Local::now()).await;
        }
    }

    /// Handles one inbound channel message.
    ///
    /// Messages outside the bound channel, after the day's tally, or
    /// without all three submission markers are ignored entirely.
    /// Rejections (unknown sender, duplicate, wrong puzzle, bad syntax) are
    /// reported to the sender and mutate nothing. An accepted submission is
    /// scored, checked for early round completion, persisted, and then
    /// acknowledged with reactions.
    pub async fn handle_message(&self, message: IncomingMessage) {
        self.process_message(message, Local::now()).await;
    }

    /// Handles one validated command invocation.
    ///
    /// State-changing commands persist before the reply goes out; a failed
    /// write downgrades the acknowledgment to a save-failure notice.
    pub async fn handle_command(&self, invocation: CommandInvocation) {
        let mut response;
        {
            let mut guard = self.shared.lock().await;
            let outcome = self.commander.execute(&invocation, &mut guard.state);
            response = outcome.response;

            if outcome.state_changed {
                if let Err(e) = self.loader.persist(&guard.state).await {
                    error!("failed to persist after {:?}: {:#}", invocation.command, e);
                    response = format!("{}\n{}", response, format_save_failure());
                }
            }
        }

        self.send(&invocation.channel_id, &response).await;
    }

    async fn process_message(&self, message: IncomingMessage, now: DateTime<Local>) {
        let mut replies: Vec<Reply> = Vec::new();

        {
            let mut guard = self.shared.lock().await;
            let Shared { state, controller } = &mut *guard;

            match state.round.bound_channel.as_deref() {
                Some(bound) if bound == message.channel_id => {}
                _ => return,
            }
            if state.round.scored_today {
                return;
            }
            if !is_submission(&message.body, &self.game_name) {
                return;
            }

            if state.roster.is_empty() {
                replies.push(Reply::NoPlayers);
            } else {
                match state.roster.find(&message.author) {
                    None => {
                        replies.push(Reply::Text(format_not_registered(&message.author)));
                    }
                    Some(player) if !player.registered => {
                        replies.push(Reply::Text(format_not_registered(&player.name)));
                    }
                    Some(player) if player.completed_today => {
                        info!("player {} tried to resubmit results", player.name);
                        replies.push(Reply::Text(format_already_submitted(&player.name)));
                    }
                    Some(_) => match parse(&message.body, state.round.puzzle_number) {
                        Err(SubmissionRejection::WrongPuzzle { submitted, expected }) => {
                            info!(
                                "player {} submitted results for puzzle #{}, expected #{}",
                                message.author, submitted, expected
                            );
                            replies.push(Reply::Text(format_wrong_puzzle(expected, submitted)));
                        }
                        Err(SubmissionRejection::InvalidSyntax) => {
                            info!("player {} submitted an invalid results message", message.author);
                            replies.push(Reply::Text(format_invalid_syntax(
                                &message.author,
                                &self.game_name,
                            )));
                        }
                        Ok(parsed) => {
                            if let Some(player) = state.roster.find_mut(&message.author) {
                                let report = apply_submission(player, &parsed);
                                info!(
                                    "player {} scored {} (succeeded: {})",
                                    player.name, report.score, report.succeeded
                                );
                                replies.push(Reply::Reactions(report.reactions()));
                            }

                            if let Some(RoundEvent::Scoreboard(scoreboard)) =
                                controller.check_completion(state, now)
                            {
                                replies.push(Reply::Scoreboard(scoreboard));
                            }

                            if let Err(e) = self.loader.persist(state).await {
                                error!("failed to persist after submission: {:#}", e);
                                replies.push(Reply::Text(format_save_failure()));
                            }
                        }
                    },
                }
            }
        }

        for reply in replies {
            match reply {
                Reply::NoPlayers => {
                    let mention = self
                        .messenger
                        .resolve_mention(&message.author)
                        .await
                        .unwrap_or_else(|| message.author.clone());
                    self.send(&message.channel_id, &format_no_registered_players(&mention))
                        .await;
                }
                Reply::Text(text) => self.send(&message.channel_id, &text).await,
                Reply::Reactions(reactions) => {
                    for emoji in reactions {
                        if let Err(e) = self
                            .messenger
                            .react(&message.channel_id, &message.message_id, emoji)
                            .await
                        {
                            warn!("failed to add reaction {}: {}", emoji, e);
                        }
                    }
                }
                Reply::Scoreboard(scoreboard) => {
                    self.send(&message.channel_id, &scoreboard.to_message(&self.game_name))
                        .await;
                }
            }
        }
    }

    async fn catch_up_at(&self, now: DateTime<Local>) {
        let (events, channel) = {
            let mut guard = self.shared.lock().await;
            let Shared { state, controller } = &mut *guard;

            let events = controller.catch_up(state, now);
            if !events.is_empty() {
                if let Err(e) = self.loader.persist(state).await {
                    error!("failed to persist after catch-up: {:#}", e);
                }
            }
            (events, state.round.bound_channel.clone())
        };

        self.dispatch_events(events, channel).await;
    }

    async fn round_tick(&self, now: DateTime<Local>) {
        let (events, channel) = {
            let mut guard = self.shared.lock().await;
            let Shared { state, controller } = &mut *guard;

            let events = controller.tick(state, now);
            if events.is_empty() {
                return;
            }
            if let Err(e) = self.loader.persist(state).await {
                error!("failed to persist after round transition: {:#}", e);
            }
            (events, state.round.bound_channel.clone())
        };

        self.dispatch_events(events, channel).await;
    }

    async fn dispatch_events(&self, events: Vec<RoundEvent>, channel: Option<String>) {
        if events.is_empty() {
            return;
        }
        let Some(channel) = channel else {
            warn!("no bound channel, dropping {} round announcements", events.len());
            return;
        };

        for event in events {
            match event {
                RoundEvent::Warning { names } => {
                    let mentions = self.resolve_mentions(&names).await;
                    if !mentions.is_empty() {
                        self.send(&channel, &format_warning(&mentions, &self.game_name))
                            .await;
                    }
                }
                RoundEvent::Shame { names } => {
                    let mentions = self.resolve_mentions(&names).await;
                    if !mentions.is_empty() {
                        self.send(&channel, &format_shame(&mentions, &self.game_name))
                            .await;
                    }
                }
                RoundEvent::Scoreboard(scoreboard) => {
                    self.send(&channel, &scoreboard.to_message(&self.game_name))
                        .await;
                }
                RoundEvent::NewRound { puzzle_number, names } => {
                    let mentions = self.resolve_mentions(&names).await;
                    self.send(
                        &channel,
                        &format_new_round(&mentions, &self.game_name, puzzle_number, &self.puzzle_url),
                    )
                    .await;
                }
            }
        }
    }

    /// Resolves player names to mentions, skipping anyone no longer
    /// resolvable.
    async fn resolve_mentions(&self, names: &[String]) -> String {
        let resolutions = join_all(names.iter().map(|n| self.messenger.resolve_mention(n))).await;

        let mut mentions = Vec::new();
        for (name, resolution) in names.iter().zip(resolutions) {
            match resolution {
                Some(mention) => mentions.push(mention),
                None => warn!("failed to resolve user {}, skipping notification", name),
            }
        }
        mentions.join(" ")
    }

    async fn send(&self, channel_id: &str, body: &str) {
        if let Err(e) = self.messenger.send_message(channel_id, body).await {
            warn!("failed to send message to {}: {}", channel_id, e);
        }
    }
}
