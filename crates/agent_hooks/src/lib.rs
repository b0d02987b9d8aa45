//! Agent lifecycle hooks for the youth game-dev sessions.
//!
//! The runtime fires a [`HookEvent`] at session start, on each prompt and
//! around each tool call. A [`HookRegistry`] routes the event to the hooks
//! registered for that kind and merges what they return into one
//! [`HookOutput`]: extra context for the model, or a permission denial.

pub mod builtin;
pub mod event;
pub mod registry;

pub use builtin::{
    Achievement, AchievementTracker, FrustrationDetector, SafetyGuardrails, SessionBriefing,
};
pub use event::{HookEvent, HookEventKind, HookOutput, PermissionDecision};
pub use registry::{Hook, HookRegistry};
