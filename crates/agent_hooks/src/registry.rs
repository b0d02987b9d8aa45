use game_dev_kit::config::{EnvConfig, GuardrailPolicy};
use session_store::SessionStore;
use tracing::{debug, info};

use crate::builtin::{AchievementTracker, FrustrationDetector, SafetyGuardrails, SessionBriefing};
use crate::event::{HookEvent, HookEventKind, HookOutput};

/// A lifecycle hook. Handlers only see events of the kind they declare.
pub trait Hook: Send + Sync {
    fn name(&self) -> &str;

    fn event(&self) -> HookEventKind;

    fn handle(&self, event: &HookEvent) -> HookOutput;
}

/// Runs hooks in registration order and folds their outputs together.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Box<dyn Hook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Briefing, encouragement, guardrails and achievements wired to `config`.
    pub fn with_defaults(config: &EnvConfig, policy: GuardrailPolicy) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SessionBriefing::new(SessionStore::new(
            config.session_path.clone(),
        ))));
        registry.register(Box::new(FrustrationDetector::new(
            policy.frustration_signals.clone(),
        )));
        registry.register(Box::new(SafetyGuardrails::new(policy)));
        registry.register(Box::new(AchievementTracker::new()));
        registry
    }

    pub fn register(&mut self, hook: Box<dyn Hook>) {
        self.hooks.push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn hook_names(&self) -> Vec<&str> {
        self.hooks.iter().map(|hook| hook.name()).collect()
    }

    /// Contexts are joined with blank lines; the first deny wins.
    pub fn dispatch(&self, event: &HookEvent) -> HookOutput {
        let kind = event.kind();
        let mut contexts = Vec::new();
        let mut permission = None;

        for hook in self.hooks.iter().filter(|hook| hook.event() == kind) {
            let output = hook.handle(event);
            if output.is_empty() {
                continue;
            }
            debug!(hook = hook.name(), ?kind, "hook produced output");

            if let Some(context) = output.additional_context {
                contexts.push(context);
            }
            if permission.is_none() {
                if let Some(decision) = output.permission {
                    info!(hook = hook.name(), ?decision, "hook denied tool use");
                    permission = Some(decision);
                }
            }
        }

        HookOutput {
            additional_context: (!contexts.is_empty()).then(|| contexts.join("\n\n")),
            permission,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PermissionDecision;
    use pretty_assertions::assert_eq;

    struct Fixed {
        name: &'static str,
        kind: HookEventKind,
        output: HookOutput,
    }

    impl Hook for Fixed {
        fn name(&self) -> &str {
            self.name
        }

        fn event(&self) -> HookEventKind {
            self.kind
        }

        fn handle(&self, _event: &HookEvent) -> HookOutput {
            self.output.clone()
        }
    }

    fn prompt(text: &str) -> HookEvent {
        HookEvent::UserPromptSubmit {
            prompt: text.to_string(),
        }
    }

    #[test]
    fn dispatch_only_runs_hooks_for_the_event_kind() {
        let mut registry = HookRegistry::new();
        registry.register(Box::new(Fixed {
            name: "start",
            kind: HookEventKind::SessionStart,
            output: HookOutput::context("briefing"),
        }));
        registry.register(Box::new(Fixed {
            name: "prompt",
            kind: HookEventKind::UserPromptSubmit,
            output: HookOutput::context("cheer"),
        }));

        assert_eq!(registry.dispatch(&prompt("hi")), HookOutput::context("cheer"));
    }

    #[test]
    fn dispatch_joins_contexts_and_keeps_first_deny() {
        let mut registry = HookRegistry::new();
        for (name, output) in [
            ("a", HookOutput::context("one")),
            ("b", HookOutput::deny("first")),
            ("c", HookOutput::none()),
            ("d", HookOutput::deny("second")),
            ("e", HookOutput::context("two")),
        ] {
            registry.register(Box::new(Fixed {
                name,
                kind: HookEventKind::UserPromptSubmit,
                output,
            }));
        }

        let merged = registry.dispatch(&prompt("hi"));
        assert_eq!(merged.additional_context.as_deref(), Some("one\n\ntwo"));
        assert_eq!(
            merged.permission,
            Some(PermissionDecision::Deny {
                reason: "first".to_string()
            })
        );
    }

    #[test]
    fn empty_registry_dispatches_nothing() {
        let registry = HookRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.dispatch(&prompt("hi")).is_empty());
    }
}
