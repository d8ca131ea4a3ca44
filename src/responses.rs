//! User-facing reply formatters.
//!
//! Every message the engine sends back to the chat is built here, so the
//! wording lives in one place and handlers stay free of string assembly.
//! All formatters return plain text; platform markup is the adapter's
//! business.

use crate::roster::{DeregisterOutcome, RegisterOutcome, Roster, SilenceOutcome};

/// Reply when a submission arrives before anyone registered.
pub fn format_no_registered_players(mention: &str) -> String {
    format!(
        "{}, there are no registered players! Please register and resend your results to be the first.",
        mention
    )
}

/// Reply when the sender has no registered player record.
pub fn format_not_registered(name: &str) -> String {
    format!(
        "{}, you are not registered! Please register and resend your results.",
        name
    )
}

/// Reply when the sender already submitted for the active puzzle.
pub fn format_already_submitted(name: &str) -> String {
    format!("{}, you have already submitted your results today.", name)
}

/// Reply when a submission cites the wrong puzzle number.
pub fn format_wrong_puzzle(expected: u32, submitted: u32) -> String {
    format!(
        "The current puzzle # is {}. Your submission for puzzle #{} has not been accepted.",
        expected, submitted
    )
}

/// Reply when a submission's structure could not be parsed.
pub fn format_invalid_syntax(name: &str, game_name: &str) -> String {
    format!(
        "{}, you sent a {} results message with invalid syntax. Please try again.",
        name, game_name
    )
}

/// Reply when state could not be written after a mutating action.
pub fn format_save_failure() -> String {
    "Failed to save tracker data, the change may not survive a restart. Please try again.".to_owned()
}

/// Reply for the `register` command.
pub fn format_register(outcome: RegisterOutcome, game_name: &str) -> String {
    match outcome {
        RegisterOutcome::AlreadyRegistered => {
            format!("You are already registered for {} tracking!", game_name)
        }
        RegisterOutcome::Registered | RegisterOutcome::Reregistered => {
            format!("You have been registered for {} tracking.", game_name)
        }
    }
}

/// Reply for the `deregister` command.
pub fn format_deregister(outcome: DeregisterOutcome, game_name: &str) -> String {
    match outcome {
        DeregisterOutcome::Deregistered => format!(
            "You have been deregistered for {} tracking. Deregistering a second time will delete your saved data.",
            game_name
        ),
        DeregisterOutcome::DataDeleted => {
            format!("Your saved data has been deleted for {} tracking.", game_name)
        }
        DeregisterOutcome::NoData => {
            format!("You have no saved data for {} tracking.", game_name)
        }
    }
}

/// Reply for the `silenceping` command against an existing player.
pub fn format_silence(outcome: SilenceOutcome, name: &str, silence: bool) -> String {
    match (outcome, silence) {
        (SilenceOutcome::AlreadySet, true) => {
            format!("Daily ping already silenced for {}.", name)
        }
        (SilenceOutcome::AlreadySet, false) => {
            format!("Daily ping already enabled for {}.", name)
        }
        (_, true) => format!("Silenced daily ping for {}.", name),
        (_, false) => format!("Enabled daily ping for {}.", name),
    }
}

/// Reply for the `silenceping` command against an unknown name, listing who
/// exists instead.
pub fn format_silence_not_found(name: &str, roster: &Roster) -> String {
    let existing: Vec<&str> = roster.players().iter().map(|p| p.name.as_str()).collect();
    format!(
        "Could not find {}.\n\n__Existing players:__\n{}",
        name,
        existing.join("\n")
    )
}

/// Reply for a successful `bind` command.
pub fn format_bind(channel_id: &str, game_name: &str) -> String {
    format!(
        "Successfully set text channel for {} tracking to {}!",
        game_name, channel_id
    )
}

/// Pre-deadline warning ping.
pub fn format_warning(mentions: &str, game_name: &str) -> String {
    format!("{}, you have one hour left to do the {}!", mentions, game_name)
}

/// Deadline call-out of players who never submitted.
pub fn format_shame(mentions: &str, game_name: &str) -> String {
    format!(
        "SHAME ON {} FOR NOT DOING THE {}!",
        mentions,
        game_name.to_uppercase()
    )
}

/// New-round announcement with a link to the day's puzzle.
pub fn format_new_round(mentions: &str, game_name: &str, puzzle_number: u32, url: &str) -> String {
    format!(
        "{}\nIt's time to find the {} #{}!\n{}",
        mentions, game_name, puzzle_number, url
    )
}
