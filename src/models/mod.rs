//! Data structures for the scores board: sports, teams, players, matches and the league store.

mod game;
mod league;
mod player;
mod sport;
mod team;
mod view;

pub use game::{GameMatch, MatchId, MatchStatus, UnknownStatus, DEFAULT_SCORE};
pub use league::{EntityKind, League, LeagueError, MatchRecord, NewMatch, ScoreUpdate};
pub use player::{Player, PlayerId, PlayerStats};
pub use sport::{Sport, SportId};
pub use team::{Team, TeamId};
pub use view::{LiveScore, MatchSummary, MatchView, PlayerCard, TeamEntry};
