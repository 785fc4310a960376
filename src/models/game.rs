//! Match (game) record and its persisted status.

use crate::models::sport::SportId;
use crate::models::team::TeamId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Score shown for a team before anything has been entered.
pub const DEFAULT_SCORE: &str = "0";

/// Display status of a match.
///
/// Serialized as the lowercase label. Deserialization goes through
/// [`FromStr`], so it accepts the same spellings as `"Live".parse()`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Live,
    #[default]
    Upcoming,
    Completed,
}

impl MatchStatus {
    pub fn is_live(self) -> bool {
        self == MatchStatus::Live
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Live => "live",
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status label is not one of `live`, `upcoming`, `completed`.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown match status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for MatchStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(MatchStatus::Live),
            "upcoming" => Ok(MatchStatus::Upcoming),
            "completed" => Ok(MatchStatus::Completed),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for MatchStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A stored match between two teams of the same sport.
///
/// `status` and `is_live` are private: they only change together through
/// [`GameMatch::set_status`], so `is_live == (status == Live)` always holds.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub sport_id: SportId,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    /// Free-form display string ("245/6", "21-15, 19-21, 21-18", ...).
    pub team1_score: String,
    pub team2_score: String,
    pub venue: Option<String>,
    pub tournament: Option<String>,
    pub match_details: Option<String>,
    /// Scheduled start, UTC.
    pub match_date: NaiveDateTime,
    /// Human display time, e.g. "19:30 IST".
    pub match_time: Option<String>,
    status: MatchStatus,
    is_live: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl GameMatch {
    /// New upcoming match with default scores; `now` becomes both timestamps.
    pub fn new(
        sport_id: SportId,
        team1_id: TeamId,
        team2_id: TeamId,
        match_date: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sport_id,
            team1_id,
            team2_id,
            team1_score: DEFAULT_SCORE.to_string(),
            team2_score: DEFAULT_SCORE.to_string(),
            venue: None,
            tournament: None,
            match_details: None,
            match_date,
            match_time: None,
            status: MatchStatus::Upcoming,
            is_live: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Persisted status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Persisted live flag; always equal to `status() == Live`.
    pub fn is_live(&self) -> bool {
        self.is_live
    }

    /// Set the persisted status and the live flag in one step.
    pub fn set_status(&mut self, status: MatchStatus) {
        self.status = status;
        self.is_live = status.is_live();
    }

    pub fn involves_team(&self, team_id: TeamId) -> bool {
        self.team1_id == team_id || self.team2_id == team_id
    }
}
