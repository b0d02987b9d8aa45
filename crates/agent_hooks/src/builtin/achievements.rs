use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;
use tracing::info;

use crate::event::{input_str, HookEvent, HookEventKind, HookOutput};
use crate::registry::Hook;

const SCRIPT_MACHINE_AT: u32 = 5;
const SCRIPTS_CLUB_AT: u32 = 10;
const DEBUGGING_PRO_AT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    FirstScript,
    ScriptMachine,
    ScriptsClub,
    BugSquasher,
    DebuggingPro,
    UiDesigner,
}

impl Achievement {
    pub fn title(self) -> &'static str {
        match self {
            Self::FirstScript => "First Script",
            Self::ScriptMachine => "Script Machine",
            Self::ScriptsClub => "10 Scripts Club",
            Self::BugSquasher => "Bug Squasher",
            Self::DebuggingPro => "Debugging Pro",
            Self::UiDesigner => "UI Designer",
        }
    }

    fn cheer(self) -> &'static str {
        match self {
            Self::FirstScript => {
                "You just wrote your first Luau script. You're officially a Roblox developer now!"
            }
            Self::ScriptMachine => "Five scripts written. Your game is really coming together!",
            Self::ScriptsClub => {
                "Double digits! You're building something seriously impressive."
            }
            Self::BugSquasher => {
                "You just fixed your first bug. Even the best programmers spend most of their time debugging, so you're learning a real skill!"
            }
            Self::DebuggingPro => "Ten code edits. You're getting really good at improving your code!",
            Self::UiDesigner => {
                "You're building the screens players will see. Making games look good is a real art!"
            }
        }
    }

    pub fn announcement(self) -> String {
        format!("ACHIEVEMENT UNLOCKED: {}! {}", self.title(), self.cheer())
    }
}

#[derive(Debug, Default)]
struct Progress {
    unlocked: HashSet<Achievement>,
    scripts_written: u32,
    edits_performed: u32,
}

impl Progress {
    fn unlock(&mut self, achievement: Achievement) -> Option<Achievement> {
        self.unlocked.insert(achievement).then_some(achievement)
    }

    fn record(&mut self, tool_name: &str, file_path: &str) -> Option<Achievement> {
        let is_luau = file_path.ends_with(".lua") || file_path.ends_with(".luau");
        let is_write = tool_name == "Write";
        let is_edit = tool_name == "Edit";

        if is_write && is_luau {
            self.scripts_written += 1;
            if let Some(unlocked) = self.unlock(Achievement::FirstScript) {
                return Some(unlocked);
            }
            let milestone = match self.scripts_written {
                SCRIPT_MACHINE_AT => self.unlock(Achievement::ScriptMachine),
                SCRIPTS_CLUB_AT => self.unlock(Achievement::ScriptsClub),
                _ => None,
            };
            if milestone.is_some() {
                return milestone;
            }
        }

        if is_edit && is_luau {
            self.edits_performed += 1;
            if let Some(unlocked) = self.unlock(Achievement::BugSquasher) {
                return Some(unlocked);
            }
            if self.edits_performed == DEBUGGING_PRO_AT {
                if let Some(unlocked) = self.unlock(Achievement::DebuggingPro) {
                    return Some(unlocked);
                }
            }
        }

        if is_write && looks_like_ui(file_path) {
            return self.unlock(Achievement::UiDesigner);
        }
        None
    }
}

fn looks_like_ui(file_path: &str) -> bool {
    let lower = file_path.to_lowercase();
    ["gui", "ui", "screen"]
        .iter()
        .any(|needle| lower.contains(needle))
}

/// Celebrates coding milestones after successful writes and edits.
///
/// Counters live for the lifetime of the tracker; each achievement unlocks
/// once and at most one is announced per event.
#[derive(Debug, Default)]
pub struct AchievementTracker {
    progress: Mutex<Progress>,
}

impl AchievementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unlocked(&self) -> Vec<Achievement> {
        let mut unlocked: Vec<_> = self.lock().unlocked.iter().copied().collect();
        unlocked.sort_by_key(|achievement| *achievement as u8);
        unlocked
    }

    fn lock(&self) -> MutexGuard<'_, Progress> {
        match self.progress.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn observe(&self, tool_name: &str, tool_input: &Value) -> HookOutput {
        let file_path = input_str(tool_input, "file_path");
        match self.lock().record(tool_name, file_path) {
            Some(achievement) => {
                info!(achievement = achievement.title(), "achievement unlocked");
                HookOutput::context(achievement.announcement())
            }
            None => HookOutput::none(),
        }
    }
}

impl Hook for AchievementTracker {
    fn name(&self) -> &str {
        "achievement-tracker"
    }

    fn event(&self) -> HookEventKind {
        HookEventKind::PostToolUse
    }

    fn handle(&self, event: &HookEvent) -> HookOutput {
        match event {
            HookEvent::PostToolUse {
                tool_name,
                tool_input,
            } => self.observe(tool_name, tool_input),
            _ => HookOutput::none(),
        }
    }
}
