//! Sport data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a sport.
pub type SportId = Uuid;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Sport {
    pub id: SportId,
    /// Unique across the league.
    pub name: String,
    pub icon: Option<String>,
    /// How scores read for this sport, e.g. "runs/wickets" or "sets".
    pub scoring_type: Option<String>,
}

impl Sport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            icon: None,
            scoring_type: None,
        }
    }
}
