//! League: the in-memory store of sports, teams, players and matches.

use crate::models::game::{GameMatch, MatchId, MatchStatus};
use crate::models::player::{Player, PlayerId};
use crate::models::sport::{Sport, SportId};
use crate::models::team::{Team, TeamId};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Kind of record a lookup failed for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityKind {
    Sport,
    Team,
    Player,
    Match,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Sport => "Sport",
            EntityKind::Team => "Team",
            EntityKind::Player => "Player",
            EntityKind::Match => "Match",
        })
    }
}

/// Errors from league lookups and mutations. A failed operation leaves the
/// league unchanged.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LeagueError {
    /// The identifier does not resolve to an existing record.
    #[error("{kind} not found")]
    NotFound { kind: EntityKind, id: Uuid },
    /// A referenced sport/team is missing, or the references contradict each other.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),
    /// Sport names are unique, team names are unique within a sport.
    #[error("A {0} with this name already exists")]
    DuplicateName(EntityKind),
    #[error("{0} name must not be empty")]
    EmptyName(EntityKind),
}

/// Input for creating a match. Everything except the three references is optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewMatch {
    pub sport_id: SportId,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    pub team1_score: Option<String>,
    pub team2_score: Option<String>,
    pub venue: Option<String>,
    pub tournament: Option<String>,
    pub match_details: Option<String>,
    /// Defaults to the creation time.
    pub match_date: Option<NaiveDateTime>,
    pub match_time: Option<String>,
    /// Wins over `is_live` when both are given.
    pub status: Option<MatchStatus>,
    pub is_live: Option<bool>,
}

impl NewMatch {
    pub fn new(sport_id: SportId, team1_id: TeamId, team2_id: TeamId) -> Self {
        Self {
            sport_id,
            team1_id,
            team2_id,
            ..Self::default()
        }
    }

    fn initial_status(&self) -> MatchStatus {
        match (self.status, self.is_live) {
            (Some(status), _) => status,
            (None, Some(true)) => MatchStatus::Live,
            (None, _) => MatchStatus::Upcoming,
        }
    }
}

/// Partial score update; `None` fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ScoreUpdate {
    pub team1_score: Option<String>,
    pub team2_score: Option<String>,
    pub match_details: Option<String>,
    pub status: Option<MatchStatus>,
}

/// A match with its sport and both teams looked up.
#[derive(Clone, Copy, Debug)]
pub struct MatchRecord<'a> {
    pub game: &'a GameMatch,
    pub sport: &'a Sport,
    pub team1: &'a Team,
    pub team2: &'a Team,
}

/// All sports data held by the server.
#[derive(Clone, Debug, Default)]
pub struct League {
    sports: Vec<Sport>,
    teams: Vec<Team>,
    players: Vec<Player>,
    matches: Vec<GameMatch>,
}

impl League {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sports(&self) -> &[Sport] {
        &self.sports
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn matches(&self) -> &[GameMatch] {
        &self.matches
    }

    pub fn sport(&self, id: SportId) -> Option<&Sport> {
        self.sports.iter().find(|s| s.id == id)
    }

    /// Exact, case-sensitive name lookup.
    pub fn sport_by_name(&self, name: &str) -> Option<&Sport> {
        self.sports.iter().find(|s| s.name == name)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_by_name(&self, sport_id: SportId, name: &str) -> Option<&Team> {
        self.teams
            .iter()
            .find(|t| t.sport_id == sport_id && t.name == name)
    }

    pub fn game(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Teams of one sport, in insertion order.
    pub fn teams_for_sport(&self, sport_id: SportId) -> Result<Vec<&Team>, LeagueError> {
        if self.sport(sport_id).is_none() {
            return Err(LeagueError::NotFound {
                kind: EntityKind::Sport,
                id: sport_id,
            });
        }
        Ok(self.teams.iter().filter(|t| t.sport_id == sport_id).collect())
    }

    /// Add a sport. Names must be non-empty and unique (case-insensitive).
    pub fn add_sport(&mut self, mut sport: Sport) -> Result<SportId, LeagueError> {
        sport.name = sport.name.trim().to_string();
        if sport.name.is_empty() {
            return Err(LeagueError::EmptyName(EntityKind::Sport));
        }
        if self
            .sports
            .iter()
            .any(|s| s.name.eq_ignore_ascii_case(&sport.name))
        {
            return Err(LeagueError::DuplicateName(EntityKind::Sport));
        }
        let id = sport.id;
        self.sports.push(sport);
        Ok(id)
    }

    /// Add a team to an existing sport. Names are unique within the sport.
    pub fn add_team(&mut self, mut team: Team) -> Result<TeamId, LeagueError> {
        team.name = team.name.trim().to_string();
        if team.name.is_empty() {
            return Err(LeagueError::EmptyName(EntityKind::Team));
        }
        if self.sport(team.sport_id).is_none() {
            return Err(LeagueError::InvalidReference(format!(
                "sport {} does not exist",
                team.sport_id
            )));
        }
        if self
            .teams
            .iter()
            .any(|t| t.sport_id == team.sport_id && t.name.eq_ignore_ascii_case(&team.name))
        {
            return Err(LeagueError::DuplicateName(EntityKind::Team));
        }
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Add a player to an existing team.
    pub fn add_player(&mut self, mut player: Player) -> Result<PlayerId, LeagueError> {
        player.name = player.name.trim().to_string();
        if player.name.is_empty() {
            return Err(LeagueError::EmptyName(EntityKind::Player));
        }
        if self.team(player.team_id).is_none() {
            return Err(LeagueError::InvalidReference(format!(
                "team {} does not exist",
                player.team_id
            )));
        }
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Create a match. The sport and both teams must exist, the teams must be
    /// different and both play that sport.
    pub fn create_match(
        &mut self,
        new: NewMatch,
        now: NaiveDateTime,
    ) -> Result<&GameMatch, LeagueError> {
        self.check_references(&new)?;

        let status = new.initial_status();
        let mut game = GameMatch::new(
            new.sport_id,
            new.team1_id,
            new.team2_id,
            new.match_date.unwrap_or(now),
            now,
        );
        if let Some(score) = new.team1_score {
            game.team1_score = score;
        }
        if let Some(score) = new.team2_score {
            game.team2_score = score;
        }
        game.venue = new.venue;
        game.tournament = new.tournament;
        game.match_details = new.match_details;
        game.match_time = new.match_time;
        game.set_status(status);

        let id = game.id;
        self.matches.push(game);
        self.matches.last().ok_or(LeagueError::NotFound {
            kind: EntityKind::Match,
            id,
        })
    }

    fn check_references(&self, new: &NewMatch) -> Result<(), LeagueError> {
        if self.sport(new.sport_id).is_none() {
            return Err(LeagueError::InvalidReference(format!(
                "sport {} does not exist",
                new.sport_id
            )));
        }
        if new.team1_id == new.team2_id {
            return Err(LeagueError::InvalidReference(
                "a team cannot play itself".to_string(),
            ));
        }
        for team_id in [new.team1_id, new.team2_id] {
            let team = self.team(team_id).ok_or_else(|| {
                LeagueError::InvalidReference(format!("team {} does not exist", team_id))
            })?;
            if team.sport_id != new.sport_id {
                return Err(LeagueError::InvalidReference(format!(
                    "team '{}' does not play this sport",
                    team.name
                )));
            }
        }
        Ok(())
    }

    /// Apply a score update. Only provided fields change; a new status also
    /// resets the live flag. `updated_at` becomes `now`.
    pub fn update_score(
        &mut self,
        id: MatchId,
        update: ScoreUpdate,
        now: NaiveDateTime,
    ) -> Result<&GameMatch, LeagueError> {
        let game = self
            .matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(LeagueError::NotFound {
                kind: EntityKind::Match,
                id,
            })?;
        if let Some(score) = update.team1_score {
            game.team1_score = score;
        }
        if let Some(score) = update.team2_score {
            game.team2_score = score;
        }
        if let Some(details) = update.match_details {
            game.match_details = Some(details);
        }
        if let Some(status) = update.status {
            game.set_status(status);
        }
        game.updated_at = now;
        Ok(&*game)
    }

    /// Remove a match and return it.
    pub fn delete_match(&mut self, id: MatchId) -> Result<GameMatch, LeagueError> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.id == id)
            .ok_or(LeagueError::NotFound {
                kind: EntityKind::Match,
                id,
            })?;
        Ok(self.matches.remove(idx))
    }

    /// Look up the sport and teams of a match.
    pub fn resolve<'a>(&'a self, game: &'a GameMatch) -> Option<MatchRecord<'a>> {
        Some(MatchRecord {
            game,
            sport: self.sport(game.sport_id)?,
            team1: self.team(game.team1_id)?,
            team2: self.team(game.team2_id)?,
        })
    }

    /// Every match with its references resolved, in store order.
    pub fn records(&self) -> Vec<MatchRecord<'_>> {
        self.matches.iter().filter_map(|m| self.resolve(m)).collect()
    }
}
