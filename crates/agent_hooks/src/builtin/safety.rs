use game_dev_kit::config::GuardrailPolicy;
use serde_json::Value;
use tracing::info;

use crate::event::{input_str, HookEvent, HookEventKind, HookOutput};
use crate::registry::Hook;

pub const BLOCKED_COMMAND_REASON: &str =
    "This command isn't needed for Roblox game development. Let's focus on building your game!";
pub const OUTSIDE_PROJECT_REASON: &str = "Let's keep our work in the game project folder!";

/// Denies dangerous shell commands and file writes outside the game project.
pub struct SafetyGuardrails {
    policy: GuardrailPolicy,
}

impl SafetyGuardrails {
    pub fn new(policy: GuardrailPolicy) -> Self {
        Self { policy }
    }

    pub fn is_blocked_command(&self, command: &str) -> bool {
        self.policy
            .blocked_commands
            .iter()
            .any(|pattern| pattern.is_match(command))
    }

    /// Separators are normalised to `/` and case is ignored.
    pub fn is_allowed_path(&self, file_path: &str) -> bool {
        let normalized = file_path.replace('\\', "/").to_lowercase();

        let under_safe_segment = self
            .policy
            .safe_path_segments
            .iter()
            .any(|segment| normalized.contains(&format!("/{segment}")));
        let in_framework = self
            .policy
            .project_path_markers
            .iter()
            .any(|marker| normalized.contains(marker.as_str()));

        under_safe_segment || in_framework
    }

    fn check(&self, tool_name: &str, tool_input: &Value) -> HookOutput {
        match tool_name {
            "Bash" => {
                let command = input_str(tool_input, "command");
                if self.is_blocked_command(command) {
                    info!(command, "blocked shell command");
                    return HookOutput::deny(BLOCKED_COMMAND_REASON);
                }
            }
            "Write" | "Edit" => {
                let file_path = input_str(tool_input, "file_path");
                if !self.is_allowed_path(file_path) {
                    info!(file_path, tool_name, "blocked write outside project");
                    return HookOutput::deny(OUTSIDE_PROJECT_REASON);
                }
            }
            _ => {}
        }
        HookOutput::none()
    }
}

impl Hook for SafetyGuardrails {
    fn name(&self) -> &str {
        "safety-guardrails"
    }

    fn event(&self) -> HookEventKind {
        HookEventKind::PreToolUse
    }

    fn handle(&self, event: &HookEvent) -> HookOutput {
        match event {
            HookEvent::PreToolUse {
                tool_name,
                tool_input,
            } => self.check(tool_name, tool_input),
            _ => HookOutput::none(),
        }
    }
}
