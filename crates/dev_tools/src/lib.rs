//! Roblox development tools served to the agent.
//!
//! Three host-mediated tools are exposed under [`SERVER_NAME`]:
//!
//! - `check_luau_syntax`: heuristic pre-check from the `luau_check` crate,
//!   rendered as a numbered plain-text report;
//! - `update_progress`: appends a row to the team's markdown progress board;
//! - `roblox_snippet`: returns a starter script for a common mechanic.
//!
//! [`agent_definitions`] lists the specialist subagents the main agent can
//! delegate to, each with its own prompt and tool allow-list.
//!
//! Requests arrive as free-form JSON ([`ToolCallRequest`]) and are parsed into
//! a typed [`ToolCall`] before dispatch. Tool-level failures (a missing
//! snippet, an unwritable board) are returned as failed [`ToolOutput`]s rather
//! than errors so the agent can relay them.

pub mod agents;
pub mod progress;
pub mod protocol;
pub mod snippets;
pub mod tools;

pub use agents::{agent_definitions, find_agent, AgentDefinition, AgentModel};
pub use progress::{ProgressBoard, ProgressEntry, BOARD_HEADER};
pub use protocol::{
    tool_definitions, ToolCallRequest, ToolDefinition, ToolResult, CHECK_LUAU_SYNTAX,
    ROBLOX_SNIPPET, SERVER_NAME, UPDATE_PROGRESS,
};
pub use snippets::{Snippet, SnippetPattern};
pub use tools::{BuiltinToolExecutor, ToolCall, ToolCallError, ToolExecutor, ToolOutput};
