use session_store::{local_now, Day, SessionStore};
use time::OffsetDateTime;

use crate::event::{HookEvent, HookEventKind, HookOutput};
use crate::registry::Hook;

pub const DAY_ONE_BRIEFING: &str = "HACKATHON DAY 1! Welcome to your game development adventure!

Today's goal: come up with a game idea and build the core gameplay.
Before the end of the day, aim for:
- A game idea you're excited about
- The basic world built in Roblox Studio
- At least one mechanic players can actually do
- A name for your game!

Start simple and add cool stuff later. Great games start small.

Try /new-game to shape your concept, or just describe the game you want to build!";

pub const DAY_TWO_BRIEFING: &str = "HACKATHON DAY 2: SHIP IT DAY! Polish, playtest, publish!

Welcome back! Yesterday's work is saved and ready. Today:
- Fix the bugs you found yesterday
- Add juice: sounds, effects, UI polish
- Playtest with friends on an iPad
- Get the game ready to publish!

Done beats perfect. Ship what you have!

Use /playtest for a guided test run, or /ship-it when you're ready to publish.";

/// Sets the tone at session start: a Day 1 kickoff or a Day 2 ship-it brief.
pub struct SessionBriefing {
    store: SessionStore,
    clock: fn() -> OffsetDateTime,
}

impl SessionBriefing {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            clock: local_now,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;
        self
    }

    fn is_day_two(&self) -> bool {
        let has_session = self
            .store
            .load()
            .is_some_and(|record| !record.session_id.is_empty());
        has_session && self.store.detect_day_at((self.clock)()) == Day::Day2
    }
}

impl Hook for SessionBriefing {
    fn name(&self) -> &str {
        "session-briefing"
    }

    fn event(&self) -> HookEventKind {
        HookEventKind::SessionStart
    }

    fn handle(&self, event: &HookEvent) -> HookOutput {
        let HookEvent::SessionStart { source } = event else {
            return HookOutput::none();
        };

        if source == "resume" || self.is_day_two() {
            HookOutput::context(DAY_TWO_BRIEFING)
        } else {
            HookOutput::context(DAY_ONE_BRIEFING)
        }
    }
}
