use std::fs;
use std::io::Write;
use std::path::Path;

use agent_hooks::{HookEvent, HookRegistry};
use anyhow::{Context, Result};
use dev_tools::{
    agent_definitions, tool_definitions, BuiltinToolExecutor, ToolCallRequest, ToolExecutor,
};
use game_dev_kit::config::{EnvConfig, GuardrailPolicy};
use serde_json::Value;
use session_store::{Day, SessionRecord, SessionStore};
use tracing::debug;

use crate::cli::Command;

pub const EXIT_OK: u8 = 0;
pub const EXIT_FINDINGS: u8 = 1;

/// Runs one subcommand, writing user-facing text to `out`. Returns the exit
/// status: non-zero when a check found issues or a tool call failed.
pub fn run(command: Command, config: &EnvConfig, out: &mut impl Write) -> Result<u8> {
    match command {
        Command::Check { file, name } => check(&file, name.as_deref(), out),
        Command::Day => {
            writeln!(out, "{}", store(config).detect_day())?;
            Ok(EXIT_OK)
        }
        Command::Status => status(config, out),
        Command::Save {
            session_id,
            team,
            game_name,
            day,
        } => save(config, session_id, team, game_name, day, out),
        Command::Tool { name, args } => tool(config, name, &args, out),
        Command::Tools => {
            let definitions: Vec<Value> =
                tool_definitions().iter().map(|tool| tool.to_json()).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&definitions)?)?;
            Ok(EXIT_OK)
        }
        Command::Agents => {
            writeln!(out, "{}", serde_json::to_string_pretty(agent_definitions())?)?;
            Ok(EXIT_OK)
        }
        Command::Hook { event } => hook(config, &event, out),
    }
}

fn store(config: &EnvConfig) -> SessionStore {
    SessionStore::new(config.session_path.clone())
}

fn check(file: &Path, name: Option<&str>, out: &mut impl Write) -> Result<u8> {
    let code = fs::read_to_string(file)
        .with_context(|| format!("failed to read script {}", file.display()))?;
    let label = name
        .map(str::to_string)
        .or_else(|| file.file_name().map(|name| name.to_string_lossy().into_owned()));

    let report = luau_check::check(&code, label.as_deref());
    writeln!(out, "{}", report.render())?;
    Ok(if report.ok { EXIT_OK } else { EXIT_FINDINGS })
}

fn status(config: &EnvConfig, out: &mut impl Write) -> Result<u8> {
    let Some(record) = store(config).load() else {
        writeln!(out, "No saved session.")?;
        return Ok(EXIT_OK);
    };

    writeln!(
        out,
        "Game: {}",
        record.game_name.as_deref().unwrap_or("(unnamed)")
    )?;
    writeln!(out, "Team: {}", record.team.as_deref().unwrap_or("(none)"))?;
    writeln!(out, "Day: {}", record.day.number())?;
    writeln!(out, "Saved at: {}", record.saved_at)?;
    writeln!(out, "Session: {}", record.session_id)?;
    Ok(EXIT_OK)
}

fn save(
    config: &EnvConfig,
    session_id: String,
    team: Option<String>,
    game_name: Option<String>,
    day: Option<u8>,
    out: &mut impl Write,
) -> Result<u8> {
    let store = store(config);
    let day = match day {
        Some(number) => Day::try_from(number)?,
        None => store.detect_day(),
    };

    let mut record = SessionRecord::stamped_now(session_id, day)?;
    if let Some(team) = team {
        record = record.with_team(team);
    }
    if let Some(game_name) = game_name {
        record = record.with_game_name(game_name);
    }

    store
        .save(&record)
        .with_context(|| format!("failed to save session to {}", store.path().display()))?;
    writeln!(out, "Saved {} progress to {}.", record.day, store.path().display())?;
    Ok(EXIT_OK)
}

fn tool(config: &EnvConfig, name: String, args: &str, out: &mut impl Write) -> Result<u8> {
    let arguments: Value =
        serde_json::from_str(args).with_context(|| format!("tool arguments are not JSON: {args}"))?;
    let request = ToolCallRequest {
        call_id: uuid::Uuid::new_v4().to_string(),
        tool_name: name,
        arguments,
    };
    debug!(call_id = %request.call_id, tool = %request.tool_name, "running tool");

    let mut executor = BuiltinToolExecutor::new(config.progress_board_path.clone());
    let result = executor.execute_request(request);
    match &result.content {
        Value::String(text) => writeln!(out, "{text}")?,
        other => writeln!(out, "{}", serde_json::to_string_pretty(other)?)?,
    }
    Ok(if result.is_error { EXIT_FINDINGS } else { EXIT_OK })
}

fn hook(config: &EnvConfig, event: &str, out: &mut impl Write) -> Result<u8> {
    let event: HookEvent =
        serde_json::from_str(event).context("hook event is not a recognised JSON event")?;
    let registry = HookRegistry::with_defaults(config, GuardrailPolicy::default());
    let output = registry.dispatch(&event);
    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(EXIT_OK)
}
