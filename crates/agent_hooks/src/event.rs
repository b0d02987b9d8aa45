use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookEventKind {
    SessionStart,
    UserPromptSubmit,
    PreToolUse,
    PostToolUse,
}

/// Lifecycle event fired by the agent runtime.
///
/// The JSON form is tagged by `hook_event_name`, e.g.
/// `{"hook_event_name": "UserPromptSubmit", "prompt": "ugh"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "hook_event_name")]
pub enum HookEvent {
    SessionStart {
        #[serde(default = "default_source")]
        source: String,
    },
    UserPromptSubmit {
        prompt: String,
    },
    PreToolUse {
        tool_name: String,
        #[serde(default)]
        tool_input: Value,
    },
    PostToolUse {
        tool_name: String,
        #[serde(default)]
        tool_input: Value,
    },
}

fn default_source() -> String {
    "startup".to_string()
}

impl HookEvent {
    #[must_use]
    pub fn kind(&self) -> HookEventKind {
        match self {
            Self::SessionStart { .. } => HookEventKind::SessionStart,
            Self::UserPromptSubmit { .. } => HookEventKind::UserPromptSubmit,
            Self::PreToolUse { .. } => HookEventKind::PreToolUse,
            Self::PostToolUse { .. } => HookEventKind::PostToolUse,
        }
    }
}

/// String field of a tool input, or "" when absent or not a string.
#[must_use]
pub fn input_str<'a>(tool_input: &'a Value, key: &str) -> &'a str {
    tool_input.get(key).and_then(Value::as_str).unwrap_or("")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum PermissionDecision {
    Deny { reason: String },
}

/// What a hook hands back to the runtime. Empty output means "carry on".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HookOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<PermissionDecision>,
}

impl HookOutput {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn context(text: impl Into<String>) -> Self {
        Self {
            additional_context: Some(text.into()),
            permission: None,
        }
    }

    #[must_use]
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            additional_context: None,
            permission: Some(PermissionDecision::Deny {
                reason: reason.into(),
            }),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.additional_context.is_none() && self.permission.is_none()
    }

    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self.permission, Some(PermissionDecision::Deny { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_parse_from_tagged_json() {
        let event: HookEvent = serde_json::from_value(json!({
            "hook_event_name": "PreToolUse",
            "tool_name": "Bash",
            "tool_input": { "command": "ls" }
        }))
        .expect("event should parse");

        assert_eq!(event.kind(), HookEventKind::PreToolUse);
        match event {
            HookEvent::PreToolUse { tool_input, .. } => {
                assert_eq!(input_str(&tool_input, "command"), "ls");
                assert_eq!(input_str(&tool_input, "missing"), "");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn session_start_source_defaults_to_startup() {
        let event: HookEvent =
            serde_json::from_value(json!({ "hook_event_name": "SessionStart" }))
                .expect("event should parse");
        assert_eq!(
            event,
            HookEvent::SessionStart {
                source: "startup".to_string()
            }
        );
    }

    #[test]
    fn output_serializes_only_present_fields() {
        assert_eq!(
            serde_json::to_value(HookOutput::deny("no")).expect("serialize"),
            json!({ "permission": { "decision": "deny", "reason": "no" } })
        );
        assert_eq!(
            serde_json::to_value(HookOutput::none()).expect("serialize"),
            json!({})
        );
    }
}
