pub mod achievements;
pub mod briefing;
pub mod encouragement;
pub mod safety;

pub use achievements::{Achievement, AchievementTracker};
pub use briefing::{SessionBriefing, DAY_ONE_BRIEFING, DAY_TWO_BRIEFING};
pub use encouragement::{FrustrationDetector, ENCOURAGEMENT_CONTEXT};
pub use safety::{SafetyGuardrails, BLOCKED_COMMAND_REASON, OUTSIDE_PROJECT_REASON};
