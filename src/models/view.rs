//! Read-only projections handed to the API layer.

use crate::models::game::{MatchId, MatchStatus};
use crate::models::league::MatchRecord;
use crate::models::player::{Player, PlayerId, PlayerStats};
use crate::models::team::{Team, TeamId};
use chrono::NaiveDateTime;
use serde::Serialize;

/// A resolved match annotated with the status shown to users.
#[derive(Clone, Copy, Debug)]
pub struct MatchView<'a> {
    pub record: MatchRecord<'a>,
    pub is_live: bool,
    pub status: MatchStatus,
}

impl MatchView<'_> {
    pub fn id(&self) -> MatchId {
        self.record.game.id
    }

    pub fn summary(&self) -> MatchSummary {
        let game = self.record.game;
        MatchSummary {
            id: game.id,
            sport: self.record.sport.name.clone(),
            team1: self.record.team1.name.clone(),
            team2: self.record.team2.name.clone(),
            team1_score: game.team1_score.clone(),
            team2_score: game.team2_score.clone(),
            status: self.status,
            is_live: self.is_live,
            venue: game.venue.clone(),
            match_details: game.match_details.clone(),
            match_date: game.match_date,
            match_time: game.match_time.clone(),
            tournament: game.tournament.clone(),
        }
    }

    pub fn live_score(&self) -> LiveScore {
        let game = self.record.game;
        LiveScore {
            id: game.id,
            sport: self.record.sport.name.clone(),
            team1: self.record.team1.name.clone(),
            team1_short: self.record.team1.short_name.clone(),
            team2: self.record.team2.name.clone(),
            team2_short: self.record.team2.short_name.clone(),
            team1_score: game.team1_score.clone(),
            team2_score: game.team2_score.clone(),
            match_details: game.match_details.clone(),
        }
    }
}

/// Match object of the JSON API. Field names and order are part of the API.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchSummary {
    pub id: MatchId,
    pub sport: String,
    pub team1: String,
    pub team2: String,
    pub team1_score: String,
    pub team2_score: String,
    pub status: MatchStatus,
    pub is_live: bool,
    pub venue: Option<String>,
    pub match_details: Option<String>,
    /// ISO-8601, e.g. "2024-05-01T14:00:00".
    pub match_date: NaiveDateTime,
    pub match_time: Option<String>,
    pub tournament: Option<String>,
}

/// Reduced shape served by the live-scores endpoint.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LiveScore {
    pub id: MatchId,
    pub sport: String,
    pub team1: String,
    pub team1_short: Option<String>,
    pub team2: String,
    pub team2_short: Option<String>,
    pub team1_score: String,
    pub team2_score: String,
    pub match_details: Option<String>,
}

/// Entry of the per-sport team list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TeamEntry {
    pub id: TeamId,
    pub name: String,
    pub short_name: Option<String>,
}

impl From<&Team> for TeamEntry {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            short_name: team.short_name.clone(),
        }
    }
}

/// A player together with the live matches of their team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayerCard {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    pub sport: String,
    pub position: Option<String>,
    pub jersey_number: Option<u32>,
    pub nationality: Option<String>,
    #[serde(flatten)]
    pub stats: PlayerStats,
    pub live_matches: Vec<MatchSummary>,
}

impl PlayerCard {
    pub fn new(player: &Player, team: &Team, sport: &str, live_matches: Vec<MatchSummary>) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            team: team.name.clone(),
            sport: sport.to_string(),
            position: player.position.clone(),
            jersey_number: player.jersey_number,
            nationality: player.nationality.clone(),
            stats: player.stats.clone(),
            live_matches,
        }
    }
}
