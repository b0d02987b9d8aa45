use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::progress::{local_time_label, ProgressBoard, ProgressEntry};
use crate::protocol::{
    ToolCallRequest, ToolResult, CHECK_LUAU_SYNTAX, ROBLOX_SNIPPET, UPDATE_PROGRESS,
};
use crate::snippets::SnippetPattern;

#[derive(Debug, Error)]
pub enum ToolCallError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    CheckLuauSyntax {
        script_content: String,
        script_name: Option<String>,
    },
    UpdateProgress(ProgressEntry),
    RobloxSnippet {
        pattern: String,
    },
}

#[derive(Deserialize)]
struct CheckLuauSyntaxArgs {
    script_content: String,
    script_name: Option<String>,
}

#[derive(Deserialize)]
struct UpdateProgressArgs {
    player_name: String,
    what_you_did: String,
    next_step: Option<String>,
}

#[derive(Deserialize)]
struct RobloxSnippetArgs {
    pattern: String,
}

impl ToolCall {
    /// Parses a free-form request into a typed call.
    pub fn from_request(tool_name: &str, arguments: Value) -> Result<Self, ToolCallError> {
        match tool_name {
            CHECK_LUAU_SYNTAX => {
                let args: CheckLuauSyntaxArgs = parse_args(CHECK_LUAU_SYNTAX, arguments)?;
                Ok(Self::CheckLuauSyntax {
                    script_content: args.script_content,
                    script_name: args.script_name,
                })
            }
            UPDATE_PROGRESS => {
                let args: UpdateProgressArgs = parse_args(UPDATE_PROGRESS, arguments)?;
                Ok(Self::UpdateProgress(ProgressEntry {
                    player_name: args.player_name,
                    what_you_did: args.what_you_did,
                    next_step: args.next_step,
                }))
            }
            ROBLOX_SNIPPET => {
                let args: RobloxSnippetArgs = parse_args(ROBLOX_SNIPPET, arguments)?;
                Ok(Self::RobloxSnippet {
                    pattern: args.pattern,
                })
            }
            unknown => Err(ToolCallError::UnknownTool(unknown.to_string())),
        }
    }

    #[must_use]
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::CheckLuauSyntax { .. } => CHECK_LUAU_SYNTAX,
            Self::UpdateProgress(_) => UPDATE_PROGRESS,
            Self::RobloxSnippet { .. } => ROBLOX_SNIPPET,
        }
    }
}

fn parse_args<T: for<'de> Deserialize<'de>>(
    tool: &'static str,
    arguments: Value,
) -> Result<T, ToolCallError> {
    serde_json::from_value(arguments)
        .map_err(|source| ToolCallError::InvalidArguments { tool, source })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub ok: bool,
    pub content: String,
}

impl ToolOutput {
    pub fn ok(content: impl Into<String>) -> Self {
        Self {
            ok: true,
            content: content.into(),
        }
    }

    pub fn fail(content: impl Into<String>) -> Self {
        Self {
            ok: false,
            content: content.into(),
        }
    }
}

pub trait ToolExecutor {
    fn execute(&mut self, call: ToolCall) -> ToolOutput;

    /// Parses and executes one agent request, mapping every outcome to a result.
    fn execute_request(&mut self, request: ToolCallRequest) -> ToolResult {
        let ToolCallRequest {
            call_id,
            tool_name,
            arguments,
        } = request;

        let call = match ToolCall::from_request(&tool_name, arguments) {
            Ok(call) => call,
            Err(error) => {
                warn!(%error, call_id = %call_id, "rejected tool call");
                return ToolResult::error(call_id, tool_name, error.to_string());
            }
        };

        let output = self.execute(call);
        if output.ok {
            ToolResult::success(call_id, tool_name, output.content)
        } else {
            ToolResult::error(call_id, tool_name, output.content)
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuiltinToolExecutor {
    board: ProgressBoard,
}

impl BuiltinToolExecutor {
    pub fn new(progress_board_path: impl Into<PathBuf>) -> Self {
        Self {
            board: ProgressBoard::new(progress_board_path),
        }
    }

    pub fn progress_board(&self) -> &ProgressBoard {
        &self.board
    }

    fn execute_check_luau_syntax(
        &self,
        script_content: String,
        script_name: Option<String>,
    ) -> ToolOutput {
        let report = luau_check::check(&script_content, script_name.as_deref());
        debug!(
            label = %report.label,
            findings = report.findings.len(),
            "checked luau script"
        );
        ToolOutput::ok(report.render())
    }

    fn execute_update_progress(&self, entry: ProgressEntry) -> ToolOutput {
        match self.board.append(&entry, &local_time_label()) {
            Ok(()) => ToolOutput::ok(format!(
                "Progress updated! {} completed: \"{}\". Everyone can see what you accomplished on the progress board.",
                entry.player_name, entry.what_you_did
            )),
            Err(error) => {
                warn!(%error, path = %self.board.path().display(), "progress board write failed");
                ToolOutput::fail(format!(
                    "Couldn't update the progress board ({error}), but great job on: \"{}\"!",
                    entry.what_you_did
                ))
            }
        }
    }

    fn execute_roblox_snippet(&self, pattern: String) -> ToolOutput {
        match pattern.parse::<SnippetPattern>() {
            Ok(pattern) => ToolOutput::ok(pattern.snippet().render()),
            Err(unknown) => ToolOutput::fail(format!(
                "Pattern \"{unknown}\" not found. Available patterns: {}",
                SnippetPattern::available()
            )),
        }
    }
}

impl ToolExecutor for BuiltinToolExecutor {
    fn execute(&mut self, call: ToolCall) -> ToolOutput {
        match call {
            ToolCall::CheckLuauSyntax {
                script_content,
                script_name,
            } => self.execute_check_luau_syntax(script_content, script_name),
            ToolCall::UpdateProgress(entry) => self.execute_update_progress(entry),
            ToolCall::RobloxSnippet { pattern } => self.execute_roblox_snippet(pattern),
        }
    }
}
