//! Grouper binary - runs the tracker engine against a console adapter.
//!
//! The engine itself is platform agnostic; this binary wires it to a minimal
//! console adapter for local use. Stdin lines are fed in as channel traffic
//! and everything outbound is printed to stdout, which is enough to exercise
//! the full submission, command, and scheduling pipeline without a chat
//! platform connection.
//!
//! # Usage
//!
//! ```bash
//! grouper --config config.yaml --data ./grouper-data
//! ```
//!
//! Input lines take the form `author: text`. A `\n` in the text stands for a
//! newline, so a whole share text fits on one line:
//!
//! ```text
//! alice: /bind
//! alice: /register
//! alice: Connections\nPuzzle #123\n🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟪🟪🟪
//! ```
//!
//! Commands are `/register`, `/deregister`, `/bind`, `/silence [name]`,
//! `/unsilence [name]`, and `/stats`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//! - `GROUPER_*` - Configuration overrides, see [`config`](grouper::config)

use std::sync::Arc;

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use grouper::bot::{Bot, IncomingMessage};
use grouper::commands::{Command, CommandInvocation};
use grouper::config::Config;
use grouper::messenger::{Messenger, NotifyError};
use grouper::roster::SortKey;
use grouper::store::StateLoader;
use grouper::utils::get_path;

/// Channel identifier the console adapter reports for all traffic.
const CONSOLE_CHANNEL: &str = "console";

/// Command-line arguments for the tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Every value has a default, so the file may be absent. See the
    /// [`config`](grouper::config) module for the expected format.
    #[arg(short, long)]
    config: String,

    /// Path to the directory for storing persistent data.
    ///
    /// The tracker state document is written to `<data>/tracker.json`.
    #[arg(short, long)]
    data: String,
}

/// Messenger that prints all outbound traffic to stdout.
struct ConsoleMessenger;

impl Messenger for ConsoleMessenger {
    async fn send_message(&self, channel_id: &str, body: &str) -> Result<(), NotifyError> {
        println!("[{}] {}", channel_id, body);
        Ok(())
    }

    async fn react(
        &self,
        channel_id: &str,
        message_id: &str,
        emoji: &str,
    ) -> Result<(), NotifyError> {
        println!("[{}] reaction on message {}: {}", channel_id, message_id, emoji);
        Ok(())
    }

    async fn resolve_mention(&self, username: &str) -> Option<String> {
        Some(format!("@{}", username))
    }
}

/// Maps a console command line onto a validated invocation, the job a chat
/// platform's command registration does in a real deployment.
fn parse_console_command(text: &str) -> Option<Command> {
    let mut parts = text.split_whitespace();
    match parts.next()? {
        "/register" => Some(Command::Register),
        "/deregister" => Some(Command::Deregister),
        "/bind" => Some(Command::Bind),
        "/silence" => Some(Command::SilencePing {
            target: parts.next().map(str::to_owned),
            silence: true,
        }),
        "/unsilence" => Some(Command::SilencePing {
            target: parts.next().map(str::to_owned),
            silence: false,
        }),
        "/stats" => Some(Command::Stats {
            sort_key: SortKey::WinPct,
            limit: -1,
            include_unregistered: false,
        }),
        _ => None,
    }
}

#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting grouper {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    let loader = StateLoader::new(get_path(&args.data, "tracker.json"));

    let bot = match Bot::new(config, loader, ConsoleMessenger).await {
        Ok(bot) => bot,
        Err(e) => {
            error!("Failed to initialize bot: {}", e);
            return;
        }
    };
    let bot = Arc::new(bot);

    // Reconcile persisted state with today before the loops start
    bot.catch_up().await;

    let round_bot = Arc::clone(&bot);
    tokio::spawn(async move {
        round_bot.run_round_task().await;
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut message_counter: u64 = 0;

    while let Ok(Some(line)) = lines.next_line().await {
        let Some((author, text)) = line.split_once(':') else {
            continue;
        };
        let author = author.trim();
        let text = text.trim();

        if let Some(command) = parse_console_command(text) {
            bot.handle_command(CommandInvocation {
                invoker: author.to_owned(),
                channel_id: CONSOLE_CHANNEL.to_owned(),
                command,
            })
            .await;
        } else {
            message_counter += 1;
            bot.handle_message(IncomingMessage {
                author: author.to_owned(),
                channel_id: CONSOLE_CHANNEL.to_owned(),
                message_id: message_counter.to_string(),
                body: text.replace("\\n", "\n"),
            })
            .await;
        }
    }
}
