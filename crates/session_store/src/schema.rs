use std::fmt;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::{InvalidDay, SessionStoreError};
use crate::store::local_now;

/// Which half of the two-day hackathon a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Day {
    Day1,
    Day2,
}

impl Day {
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Day1 => 1,
            Self::Day2 => 2,
        }
    }
}

impl TryFrom<u8> for Day {
    type Error = InvalidDay;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Day1),
            2 => Ok(Self::Day2),
            other => Err(InvalidDay(other)),
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.number()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}", self.number())
    }
}

/// The single persisted "where we left off" record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: String,
    /// RFC 3339 instant of the save. Older state files call this `date`.
    #[serde(alias = "date")]
    pub saved_at: String,
    pub day: Day,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
}

impl SessionRecord {
    #[must_use]
    pub fn new(session_id: impl Into<String>, saved_at: impl Into<String>, day: Day) -> Self {
        Self {
            session_id: session_id.into(),
            saved_at: saved_at.into(),
            day,
            team: None,
            game_name: None,
        }
    }

    /// Record stamped with the current local time and offset (UTC when the
    /// platform cannot report one).
    pub fn stamped_now(session_id: impl Into<String>, day: Day) -> Result<Self, SessionStoreError> {
        let saved_at = local_now()
            .format(&Rfc3339)
            .map_err(SessionStoreError::ClockFormat)?;
        Ok(Self::new(session_id, saved_at, day))
    }

    #[must_use]
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    #[must_use]
    pub fn with_game_name(mut self, game_name: impl Into<String>) -> Self {
        self.game_name = Some(game_name.into());
        self
    }

    /// Parsed `saved_at`, or `None` when it is not RFC 3339.
    #[must_use]
    pub fn saved_at_datetime(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::parse(&self.saved_at, &Rfc3339).ok()
    }
}
