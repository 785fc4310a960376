//! Players view: players of the selected sport with their team's live matches.

use crate::logic::board::SportFilter;
use crate::logic::status::annotate;
use crate::models::{League, PlayerCard};
use chrono::{Duration, NaiveDateTime};

/// Players of the selected sport in store order. Each card lists the live
/// matches its team is playing in.
pub fn roster(
    league: &League,
    filter: &SportFilter,
    now: NaiveDateTime,
    duration: Duration,
) -> Vec<PlayerCard> {
    let records = league.records();
    league
        .players()
        .iter()
        .filter_map(|player| {
            let team = league.team(player.team_id)?;
            let sport = league.sport(team.sport_id)?;
            if !filter.accepts(sport) {
                return None;
            }
            let live = records
                .iter()
                .filter(|r| r.game.involves_team(team.id))
                .map(|r| annotate(*r, now, duration))
                .filter(|v| v.is_live)
                .map(|v| v.summary())
                .collect();
            Some(PlayerCard::new(player, team, &sport.name, live))
        })
        .collect()
}
