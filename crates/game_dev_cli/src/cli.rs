use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "game-dev",
    about = "Roblox game-dev helpers: Luau checks, session state, tools and hooks",
    version
)]
pub struct Cli {
    /// Project directory holding session state and the progress board
    #[arg(long, global = true)]
    pub project_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a Luau script for common beginner mistakes
    Check {
        /// Script file to check
        file: PathBuf,

        /// Label used in the report (defaults to the file name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Print which hackathon day this is
    Day,

    /// Show the saved session
    Status,

    /// Save the current session
    Save {
        #[arg(long)]
        session_id: String,

        #[arg(long)]
        team: Option<String>,

        #[arg(long)]
        game_name: Option<String>,

        /// Day number (1 or 2); detected when omitted
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
        day: Option<u8>,
    },

    /// Run one dev tool
    Tool {
        /// Tool name, e.g. check_luau_syntax
        name: String,

        /// Tool arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,
    },

    /// List dev tool definitions as JSON
    Tools,

    /// List the specialist subagents as JSON
    Agents,

    /// Dispatch one hook event given as JSON
    Hook {
        /// e.g. {"hook_event_name":"UserPromptSubmit","prompt":"ugh"}
        event: String,
    },
}
