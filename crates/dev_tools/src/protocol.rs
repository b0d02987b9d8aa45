use serde_json::{json, Value};

use crate::snippets::SnippetPattern;

pub const CHECK_LUAU_SYNTAX: &str = "check_luau_syntax";
pub const UPDATE_PROGRESS: &str = "update_progress";
pub const ROBLOX_SNIPPET: &str = "roblox_snippet";

/// Name the tool server registers under.
pub const SERVER_NAME: &str = "roblox-dev-tools";

/// Host-mediated tool definition advertised to the agent.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: Option<String>,
    pub input_schema: Value,
}

impl ToolDefinition {
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "input_schema": self.input_schema,
        })
    }
}

/// One tool call as received from the agent.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCallRequest {
    pub call_id: String,
    pub tool_name: String,
    pub arguments: Value,
}

/// Tool call result returned to the agent.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    pub call_id: String,
    pub tool_name: String,
    pub is_error: bool,
    pub content: Value,
}

impl ToolResult {
    #[must_use]
    pub fn success(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        content: impl Into<Value>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            is_error: false,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn error(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        content: impl Into<Value>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            is_error: true,
            content: content.into(),
        }
    }
}

/// Every tool this crate serves, in registration order.
#[must_use]
pub fn tool_definitions() -> Vec<ToolDefinition> {
    let patterns: Vec<&str> = SnippetPattern::ALL
        .iter()
        .map(|pattern| pattern.as_str())
        .collect();

    vec![
        ToolDefinition {
            name: CHECK_LUAU_SYNTAX.to_string(),
            description: Some(
                "Check if a Luau script has any syntax errors before putting it in Roblox Studio. \
                 Catches common mistakes like missing 'end', unbalanced parentheses, and typos."
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "script_content": {
                        "type": "string",
                        "description": "The Luau script code to validate"
                    },
                    "script_name": {
                        "type": "string",
                        "description": "Name of the script for reference"
                    }
                },
                "required": ["script_content"]
            }),
        },
        ToolDefinition {
            name: UPDATE_PROGRESS.to_string(),
            description: Some(
                "Update the team progress board with what you just accomplished. \
                 Everyone can see the progress!"
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "player_name": { "type": "string", "description": "Your name" },
                    "what_you_did": {
                        "type": "string",
                        "description": "What you just built or fixed"
                    },
                    "next_step": {
                        "type": "string",
                        "description": "What you plan to do next"
                    }
                },
                "required": ["player_name", "what_you_did"]
            }),
        },
        ToolDefinition {
            name: ROBLOX_SNIPPET.to_string(),
            description: Some(
                "Generate a common Roblox code pattern with explanations. \
                 Great for learning common game mechanics!"
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "pattern": {
                        "type": "string",
                        "enum": patterns,
                        "description": "The code pattern you need"
                    }
                },
                "required": ["pattern"]
            }),
        },
    ]
}
