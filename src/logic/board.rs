//! Query assembly for the landing, schedule and admin views.

use crate::config::BoardSettings;
use crate::logic::status::annotate;
use crate::models::{MatchRecord, MatchStatus, MatchView, Sport};
use chrono::{Duration, NaiveDateTime};
use std::cmp::Reverse;

/// Which sport a view is restricted to.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum SportFilter {
    #[default]
    All,
    /// Exact sport name. An unknown name simply matches nothing.
    Named(String),
}

impl SportFilter {
    /// `None`, `""` and `"all"` mean every sport.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => SportFilter::All,
            Some(name) => SportFilter::Named(name.to_string()),
        }
    }

    pub fn accepts(&self, sport: &Sport) -> bool {
        match self {
            SportFilter::All => true,
            SportFilter::Named(name) => sport.name == *name,
        }
    }

    /// Value echoed back to clients as `selected_sport`.
    pub fn label(&self) -> &str {
        match self {
            SportFilter::All => "all",
            SportFilter::Named(name) => name,
        }
    }
}

impl From<&str> for SportFilter {
    fn from(raw: &str) -> Self {
        SportFilter::parse(Some(raw))
    }
}

/// The three display buckets of the landing view.
#[derive(Clone, Debug, Default)]
pub struct Board<'a> {
    pub live: Vec<MatchView<'a>>,
    /// Completed matches, most recently updated first.
    pub recent: Vec<MatchView<'a>>,
    /// Soonest first.
    pub upcoming: Vec<MatchView<'a>>,
}

impl Board<'_> {
    /// Total number of matches across all buckets.
    pub fn len(&self) -> usize {
        self.live.len() + self.recent.len() + self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keep the matches of the selected sport, preserving order.
pub fn filter_by_sport<'a>(
    records: Vec<MatchRecord<'a>>,
    filter: &SportFilter,
) -> Vec<MatchRecord<'a>> {
    records
        .into_iter()
        .filter(|r| filter.accepts(r.sport))
        .collect()
}

/// Partition the selected matches into live / recent / upcoming.
///
/// `recent` is ordered by last update (newest first), `upcoming` by start
/// time (soonest first); both are truncated to `settings.display_limit`.
/// `live` keeps input order and is never truncated.
pub fn assemble_board<'a>(
    records: Vec<MatchRecord<'a>>,
    filter: &SportFilter,
    now: NaiveDateTime,
    settings: &BoardSettings,
) -> Board<'a> {
    let mut board = Board::default();
    for record in filter_by_sport(records, filter) {
        let view = annotate(record, now, settings.match_duration);
        match view.status {
            MatchStatus::Live => board.live.push(view),
            MatchStatus::Completed => board.recent.push(view),
            MatchStatus::Upcoming => board.upcoming.push(view),
        }
    }

    board.recent.sort_by_key(|v| Reverse(v.record.game.updated_at));
    board.upcoming.sort_by_key(|v| v.record.game.match_date);
    if let Some(limit) = settings.display_limit {
        board.recent.truncate(limit);
        board.upcoming.truncate(limit);
    }
    board
}

/// Every selected match, soonest first, uncapped.
pub fn schedule<'a>(
    records: Vec<MatchRecord<'a>>,
    filter: &SportFilter,
    now: NaiveDateTime,
    duration: Duration,
) -> Vec<MatchView<'a>> {
    let mut views: Vec<_> = filter_by_sport(records, filter)
        .into_iter()
        .map(|r| annotate(r, now, duration))
        .collect();
    views.sort_by_key(|v| v.record.game.match_date);
    views
}

/// Every match, most recently created first.
pub fn admin_matches<'a>(
    records: Vec<MatchRecord<'a>>,
    now: NaiveDateTime,
    duration: Duration,
) -> Vec<MatchView<'a>> {
    let mut views: Vec<_> = records
        .into_iter()
        .map(|r| annotate(r, now, duration))
        .collect();
    views.sort_by_key(|v| Reverse(v.record.game.created_at));
    views
}

/// Matches currently live, in store order.
pub fn live_matches<'a>(
    records: Vec<MatchRecord<'a>>,
    now: NaiveDateTime,
    duration: Duration,
) -> Vec<MatchView<'a>> {
    records
        .into_iter()
        .map(|r| annotate(r, now, duration))
        .filter(|v| v.is_live)
        .collect()
}
