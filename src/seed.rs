//! Fixture loading: builds a [`League`] from four CSV files.
//!
//! Rows reference each other by name (`sport`, `team`), resolved while
//! loading. Match start times are either absolute (`match_date`) or relative
//! to the load time (`starts_in_minutes`), so the built-in fixtures always
//! show live, recent and upcoming matches.

use crate::models::{League, LeagueError, MatchStatus, NewMatch, Player, Sport, Team};
use chrono::{Duration, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SPORTS_FILE: &str = "sports.csv";
pub const TEAMS_FILE: &str = "teams.csv";
pub const PLAYERS_FILE: &str = "players.csv";
pub const MATCHES_FILE: &str = "matches.csv";

const BUILTIN_SPORTS: &str = include_str!("../data/sports.csv");
const BUILTIN_TEAMS: &str = include_str!("../data/teams.csv");
const BUILTIN_PLAYERS: &str = include_str!("../data/players.csv");
const BUILTIN_MATCHES: &str = include_str!("../data/matches.csv");

/// Errors that can occur while loading fixtures.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {file}: {source}")]
    Csv {
        file: &'static str,
        #[source]
        source: csv::Error,
    },
    /// Row is well-formed CSV but its content is unusable.
    #[error("{file} row {row}: {message}")]
    InvalidRow {
        file: &'static str,
        row: usize,
        message: String,
    },
    #[error("{file} row {row}: {source}")]
    Rejected {
        file: &'static str,
        row: usize,
        #[source]
        source: LeagueError,
    },
}

/// Contents of the four fixture files.
#[derive(Clone, Copy, Debug)]
pub struct Fixtures<'a> {
    pub sports: &'a str,
    pub teams: &'a str,
    pub players: &'a str,
    pub matches: &'a str,
}

impl Fixtures<'static> {
    /// Fixtures compiled into the binary (from `data/`).
    pub fn builtin() -> Self {
        Self {
            sports: BUILTIN_SPORTS,
            teams: BUILTIN_TEAMS,
            players: BUILTIN_PLAYERS,
            matches: BUILTIN_MATCHES,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SportRow {
    name: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    scoring_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TeamRow {
    sport: String,
    name: String,
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlayerRow {
    sport: String,
    team: String,
    name: String,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    jersey_number: Option<u32>,
    #[serde(default)]
    nationality: Option<String>,
    #[serde(default)]
    runs: Option<u32>,
    #[serde(default)]
    wickets: Option<u32>,
    #[serde(default)]
    goals: Option<u32>,
    #[serde(default)]
    assists: Option<u32>,
    #[serde(default)]
    points: Option<u32>,
    #[serde(default)]
    raid_points: Option<u32>,
    #[serde(default)]
    tackle_points: Option<u32>,
    #[serde(default)]
    smashes: Option<u32>,
    #[serde(default)]
    aces: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct MatchRow {
    sport: String,
    team1: String,
    team2: String,
    #[serde(default)]
    team1_score: Option<String>,
    #[serde(default)]
    team2_score: Option<String>,
    #[serde(default)]
    venue: Option<String>,
    #[serde(default)]
    tournament: Option<String>,
    #[serde(default)]
    match_details: Option<String>,
    #[serde(default)]
    match_date: Option<String>,
    #[serde(default)]
    starts_in_minutes: Option<i64>,
    #[serde(default)]
    match_time: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Load the built-in fixtures.
pub fn load_builtin(now: NaiveDateTime) -> Result<League, SeedError> {
    load(Fixtures::builtin(), now)
}

/// Load `sports.csv`, `teams.csv`, `players.csv` and `matches.csv` from a directory.
pub fn load_dir(dir: &Path, now: NaiveDateTime) -> Result<League, SeedError> {
    let read = |file: &str| {
        let path = dir.join(file);
        std::fs::read_to_string(&path).map_err(|source| SeedError::Io { path, source })
    };
    let sports = read(SPORTS_FILE)?;
    let teams = read(TEAMS_FILE)?;
    let players = read(PLAYERS_FILE)?;
    let matches = read(MATCHES_FILE)?;
    load(
        Fixtures {
            sports: &sports,
            teams: &teams,
            players: &players,
            matches: &matches,
        },
        now,
    )
}

/// Build a league from fixture contents. `now` is the creation time of every
/// match and the origin of `starts_in_minutes`.
pub fn load(fixtures: Fixtures<'_>, now: NaiveDateTime) -> Result<League, SeedError> {
    let mut league = League::new();

    for (idx, row) in rows::<SportRow>(SPORTS_FILE, fixtures.sports)?.into_iter().enumerate() {
        let mut sport = Sport::new(row.name);
        sport.icon = row.icon;
        sport.scoring_type = row.scoring_type;
        league.add_sport(sport).map_err(|source| SeedError::Rejected {
            file: SPORTS_FILE,
            row: idx + 1,
            source,
        })?;
    }

    for (idx, row) in rows::<TeamRow>(TEAMS_FILE, fixtures.teams)?.into_iter().enumerate() {
        let row_no = idx + 1;
        let sport_id = league
            .sport_by_name(&row.sport)
            .map(|s| s.id)
            .ok_or_else(|| unknown(TEAMS_FILE, row_no, "sport", &row.sport))?;
        let mut team = Team::new(row.name, sport_id);
        team.short_name = row.short_name;
        team.color = row.color;
        league.add_team(team).map_err(|source| SeedError::Rejected {
            file: TEAMS_FILE,
            row: row_no,
            source,
        })?;
    }

    for (idx, row) in rows::<PlayerRow>(PLAYERS_FILE, fixtures.players)?.into_iter().enumerate() {
        let row_no = idx + 1;
        let sport_id = league
            .sport_by_name(&row.sport)
            .map(|s| s.id)
            .ok_or_else(|| unknown(PLAYERS_FILE, row_no, "sport", &row.sport))?;
        let team_id = league
            .team_by_name(sport_id, &row.team)
            .map(|t| t.id)
            .ok_or_else(|| unknown(PLAYERS_FILE, row_no, "team", &row.team))?;
        let mut player = Player::new(row.name, team_id);
        player.position = row.position;
        player.jersey_number = row.jersey_number;
        player.nationality = row.nationality;
        player.stats.runs = row.runs.unwrap_or(0);
        player.stats.wickets = row.wickets.unwrap_or(0);
        player.stats.goals = row.goals.unwrap_or(0);
        player.stats.assists = row.assists.unwrap_or(0);
        player.stats.points = row.points.unwrap_or(0);
        player.stats.raid_points = row.raid_points.unwrap_or(0);
        player.stats.tackle_points = row.tackle_points.unwrap_or(0);
        player.stats.smashes = row.smashes.unwrap_or(0);
        player.stats.aces = row.aces.unwrap_or(0);
        league.add_player(player).map_err(|source| SeedError::Rejected {
            file: PLAYERS_FILE,
            row: row_no,
            source,
        })?;
    }

    for (idx, row) in rows::<MatchRow>(MATCHES_FILE, fixtures.matches)?.into_iter().enumerate() {
        let row_no = idx + 1;
        let new = match_from_row(&league, row, row_no, now)?;
        league
            .create_match(new, now)
            .map_err(|source| SeedError::Rejected {
                file: MATCHES_FILE,
                row: row_no,
                source,
            })?;
    }

    log::info!(
        "Loaded {} sports, {} teams, {} players, {} matches",
        league.sports().len(),
        league.teams().len(),
        league.players().len(),
        league.matches().len()
    );
    Ok(league)
}

fn match_from_row(
    league: &League,
    row: MatchRow,
    row_no: usize,
    now: NaiveDateTime,
) -> Result<NewMatch, SeedError> {
    let sport_id = league
        .sport_by_name(&row.sport)
        .map(|s| s.id)
        .ok_or_else(|| unknown(MATCHES_FILE, row_no, "sport", &row.sport))?;
    let team1_id = league
        .team_by_name(sport_id, &row.team1)
        .map(|t| t.id)
        .ok_or_else(|| unknown(MATCHES_FILE, row_no, "team", &row.team1))?;
    let team2_id = league
        .team_by_name(sport_id, &row.team2)
        .map(|t| t.id)
        .ok_or_else(|| unknown(MATCHES_FILE, row_no, "team", &row.team2))?;

    let invalid = |message: String| SeedError::InvalidRow {
        file: MATCHES_FILE,
        row: row_no,
        message,
    };
    let match_date = match (row.match_date.as_deref(), row.starts_in_minutes) {
        (Some(date), None) => date
            .parse::<NaiveDateTime>()
            .map_err(|e| invalid(format!("invalid match_date '{}': {}", date, e)))?,
        (None, Some(minutes)) => Duration::try_minutes(minutes)
            .and_then(|offset| now.checked_add_signed(offset))
            .ok_or_else(|| invalid(format!("starts_in_minutes out of range: {}", minutes)))?,
        _ => {
            return Err(invalid(
                "exactly one of match_date or starts_in_minutes is required".to_string(),
            ))
        }
    };
    let status = row
        .status
        .as_deref()
        .map(str::parse::<MatchStatus>)
        .transpose()
        .map_err(|e| invalid(e.to_string()))?;

    let mut new = NewMatch::new(sport_id, team1_id, team2_id);
    new.team1_score = row.team1_score;
    new.team2_score = row.team2_score;
    new.venue = row.venue;
    new.tournament = row.tournament;
    new.match_details = row.match_details;
    new.match_date = Some(match_date);
    new.match_time = row.match_time;
    new.status = status;
    Ok(new)
}

fn unknown(file: &'static str, row: usize, kind: &str, name: &str) -> SeedError {
    SeedError::InvalidRow {
        file,
        row,
        message: format!("unknown {} '{}'", kind, name),
    }
}

fn rows<T: DeserializeOwned>(file: &'static str, data: &str) -> Result<Vec<T>, SeedError> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes())
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| SeedError::Csv { file, source })
}
