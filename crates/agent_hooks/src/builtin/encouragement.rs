use tracing::debug;

use crate::event::{HookEvent, HookEventKind, HookOutput};
use crate::registry::Hook;

pub const ENCOURAGEMENT_CONTEXT: &str = "The developer sounds frustrated. Before the technical answer:
1. Tell them this feeling is completely normal
2. Remind them every game developer gets stuck, it's part of making games
3. Shrink the problem to the smallest possible next step
4. Offer to explain the idea a different way if they're confused
5. If they've been stuck a while, suggest a 5-minute break or working on another part of the game
6. Stay warm and encouraging: they're learning something hard and doing great";

/// Adds encouragement context when a prompt contains a frustration signal.
pub struct FrustrationDetector {
    signals: Vec<String>,
}

impl FrustrationDetector {
    /// `signals` are matched as lowercase substrings.
    pub fn new(signals: Vec<String>) -> Self {
        Self {
            signals: signals
                .into_iter()
                .map(|signal| signal.to_lowercase())
                .collect(),
        }
    }

    pub fn is_frustrated(&self, prompt: &str) -> bool {
        let prompt = prompt.to_lowercase();
        self.signals
            .iter()
            .any(|signal| prompt.contains(signal.as_str()))
    }
}

impl Hook for FrustrationDetector {
    fn name(&self) -> &str {
        "frustration-detector"
    }

    fn event(&self) -> HookEventKind {
        HookEventKind::UserPromptSubmit
    }

    fn handle(&self, event: &HookEvent) -> HookOutput {
        let HookEvent::UserPromptSubmit { prompt } = event else {
            return HookOutput::none();
        };

        if self.is_frustrated(prompt) {
            debug!("frustration signal in prompt");
            HookOutput::context(ENCOURAGEMENT_CONTEXT)
        } else {
            HookOutput::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_dev_kit::config::FRUSTRATION_SIGNALS;

    fn detector() -> FrustrationDetector {
        FrustrationDetector::new(FRUSTRATION_SIGNALS.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn matches_signals_case_insensitively() {
        let detector = detector();
        assert!(detector.is_frustrated("UGH the door won't open"));
        assert!(detector.is_frustrated("Nothing Works anymore"));
        assert!(!detector.is_frustrated("make the door open when touched"));
    }

    #[test]
    fn calm_prompt_produces_no_output() {
        let output = detector().handle(&HookEvent::UserPromptSubmit {
            prompt: "add a coin counter".to_string(),
        });
        assert!(output.is_empty());
    }

    #[test]
    fn frustrated_prompt_gets_encouragement() {
        let output = detector().handle(&HookEvent::UserPromptSubmit {
            prompt: "I give up, this is impossible".to_string(),
        });
        assert_eq!(output, HookOutput::context(ENCOURAGEMENT_CONTEXT));
    }
}
