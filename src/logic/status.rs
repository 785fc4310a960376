//! Match status: time-window classification and reconciliation with the stored status.

use crate::models::{GameMatch, MatchRecord, MatchStatus, MatchView};
use chrono::{Duration, NaiveDateTime};

/// Classify a match from its start time alone.
///
/// The live window is the closed interval `[start, start + duration]`:
/// 1. `start <= now <= start + duration` -> `(true, Live)`
/// 2. `now > start + duration` -> `(false, Completed)`
/// 3. otherwise (`now < start`) -> `(false, Upcoming)`
///
/// Pure and total: if `start + duration` leaves the timestamp range, the end
/// of the window saturates.
pub fn classify(
    start: NaiveDateTime,
    now: NaiveDateTime,
    duration: Duration,
) -> (bool, MatchStatus) {
    let saturated = if duration < Duration::zero() {
        NaiveDateTime::MIN
    } else {
        NaiveDateTime::MAX
    };
    let end = start.checked_add_signed(duration).unwrap_or(saturated);
    if start <= now && now <= end {
        (true, MatchStatus::Live)
    } else if now > end {
        (false, MatchStatus::Completed)
    } else {
        (false, MatchStatus::Upcoming)
    }
}

/// Status shown for a stored match.
///
/// `Live` and `Completed` are only ever stored by an explicit create or
/// score update, and then win over the clock. `Upcoming` is the default
/// state, so the time window decides.
pub fn effective_status(
    game: &GameMatch,
    now: NaiveDateTime,
    duration: Duration,
) -> MatchStatus {
    match game.status() {
        MatchStatus::Upcoming => classify(game.match_date, now, duration).1,
        stored => stored,
    }
}

/// Attach the effective status to a resolved match.
pub fn annotate<'a>(
    record: MatchRecord<'a>,
    now: NaiveDateTime,
    duration: Duration,
) -> MatchView<'a> {
    let status = effective_status(record.game, now, duration);
    MatchView {
        record,
        is_live: status.is_live(),
        status,
    }
}
