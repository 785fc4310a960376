//! Sports scores web app: library with models, board logic, fixtures and the HTTP API.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod seed;

pub use config::{BoardSettings, Settings};
pub use logic::{
    admin_matches, annotate, assemble_board, classify, effective_status, filter_by_sport,
    live_matches, roster, schedule, Board, SportFilter,
};
pub use models::{
    EntityKind, GameMatch, League, LeagueError, LiveScore, MatchId, MatchRecord, MatchStatus,
    MatchSummary, MatchView, NewMatch, Player, PlayerCard, PlayerId, PlayerStats, ScoreUpdate,
    Sport, SportId, Team, TeamEntry, TeamId,
};
pub use seed::{Fixtures, SeedError};
