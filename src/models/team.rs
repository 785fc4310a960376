//! Team data structure.

use crate::models::sport::SportId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

/// A team playing one sport.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Abbreviation for scoreboards, e.g. "MI".
    pub short_name: Option<String>,
    /// CSS color used when rendering the team.
    pub color: Option<String>,
    pub sport_id: SportId,
}

impl Team {
    pub fn new(name: impl Into<String>, sport_id: SportId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            short_name: None,
            color: None,
            sport_id,
        }
    }
}
