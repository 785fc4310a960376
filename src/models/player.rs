//! Player and PlayerStats data structures.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player.
pub type PlayerId = Uuid;

/// Sport-specific counters. Only the ones relevant to the player's sport are
/// ever non-zero.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    // cricket
    pub runs: u32,
    pub wickets: u32,
    // football
    pub goals: u32,
    pub assists: u32,
    // basketball
    pub points: u32,
    // kabaddi
    pub raid_points: u32,
    pub tackle_points: u32,
    // badminton / volleyball
    pub smashes: u32,
    pub aces: u32,
}

/// A player on a team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team_id: TeamId,
    pub position: Option<String>,
    pub jersey_number: Option<u32>,
    pub nationality: Option<String>,
    #[serde(flatten)]
    pub stats: PlayerStats,
}

impl Player {
    /// Create a player with the given name on a team. Stats start at zero.
    pub fn new(name: impl Into<String>, team_id: TeamId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            team_id,
            position: None,
            jersey_number: None,
            nationality: None,
            stats: PlayerStats::default(),
        }
    }
}
