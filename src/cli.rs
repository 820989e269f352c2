use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::edit::Edit;

/// Edit keyboard macro configurations
#[derive(Debug, Parser)]
#[command(name = "keym", version, about)]
pub struct Cli {
    /// Config file (.toml or .json)
    #[arg(
        short,
        long,
        global = true,
        env = "KEYM_CONFIG",
        default_value = "config.toml"
    )]
    pub config: PathBuf,

    /// More logging (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the keys accepted as triggers and action keys
    Keys,
    /// Print every macro and its actions
    Show,
    /// Append a macro bound to the first key
    AddMacro,
    /// Change a macro's trigger and mode (0 disabled, 1 repeat, 2 once)
    UpdateMacro {
        index: usize,
        trigger: String,
        #[arg(allow_negative_numbers = true)]
        mode: i64,
    },
    /// Remove a macro
    DeleteMacro { index: usize },
    /// Append an action to a macro
    AddAction {
        macro_index: usize,
        #[command(flatten)]
        step: Step,
    },
    /// Replace an action
    UpdateAction {
        macro_index: usize,
        action_index: usize,
        #[command(flatten)]
        step: Step,
    },
    /// Remove an action
    DeleteAction {
        macro_index: usize,
        action_index: usize,
    },
    /// Move an action to another position in the same macro
    MoveAction {
        macro_index: usize,
        from: usize,
        to: usize,
    },
    /// Swap an action with the one above it
    MoveUp {
        macro_index: usize,
        action_index: usize,
    },
    /// Swap an action with the one below it
    MoveDown {
        macro_index: usize,
        action_index: usize,
    },
    /// Set the runner toggle key ("" for always active)
    ToggleKey { key: String },
}

#[derive(Debug, Args)]
pub struct Step {
    pub key: String,
    /// Hold time in milliseconds
    #[arg(allow_negative_numbers = true)]
    pub hold_ms: i64,
    /// Pause after release in milliseconds
    #[arg(allow_negative_numbers = true)]
    pub delay_ms: i64,
}

impl Command {
    /// The edit this command performs directly. `None` for read-only
    /// commands and for the one-row moves, which go through the session.
    pub fn to_edit(&self) -> Option<Edit> {
        let edit = match self {
            Command::Keys | Command::Show => return None,
            Command::MoveUp { .. } | Command::MoveDown { .. } => return None,
            Command::AddMacro => Edit::AddMacro,
            Command::UpdateMacro {
                index,
                trigger,
                mode,
            } => Edit::UpdateMacro {
                index: *index,
                trigger: trigger.clone(),
                mode: *mode,
            },
            Command::DeleteMacro { index } => Edit::DeleteMacro { index: *index },
            Command::AddAction { macro_index, step } => Edit::AddAction {
                macro_index: *macro_index,
                key: step.key.clone(),
                hold_ms: step.hold_ms,
                delay_ms: step.delay_ms,
            },
            Command::UpdateAction {
                macro_index,
                action_index,
                step,
            } => Edit::UpdateAction {
                macro_index: *macro_index,
                action_index: *action_index,
                key: step.key.clone(),
                hold_ms: step.hold_ms,
                delay_ms: step.delay_ms,
            },
            Command::DeleteAction {
                macro_index,
                action_index,
            } => Edit::DeleteAction {
                macro_index: *macro_index,
                action_index: *action_index,
            },
            Command::MoveAction {
                macro_index,
                from,
                to,
            } => Edit::MoveAction {
                macro_index: *macro_index,
                from_index: *from,
                to_index: *to,
            },
            Command::ToggleKey { key } => Edit::SetToggleKey(key.clone()),
        };
        Some(edit)
    }
}
