//! HTTP API: JSON endpoints for the scores board plus the landing page.
//! Mount with `App::new().app_data(state).configure(api::configure)`.

use crate::config::BoardSettings;
use crate::logic::{
    admin_matches, annotate, assemble_board, live_matches, roster, schedule, SportFilter,
};
use crate::models::{
    League, LeagueError, LiveScore, MatchId, MatchSummary, MatchView, NewMatch, Player, PlayerCard,
    ScoreUpdate, Sport, SportId, Team, TeamEntry,
};
use actix_web::{
    delete,
    error::InternalError,
    get, post, put,
    web::{self, Data, Json, Path, Query},
    HttpResponse, Responder,
};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Server state: the league behind a lock plus the board display policy.
pub struct AppState {
    pub league: RwLock<League>,
    pub board: BoardSettings,
}

impl AppState {
    pub fn new(league: League, board: BoardSettings) -> Self {
        Self {
            league: RwLock::new(league),
            board,
        }
    }
}

pub type SharedState = Data<AppState>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// `?sport=<name>`; missing or `all` selects every sport.
#[derive(Deserialize)]
struct SportQuery {
    sport: Option<String>,
}

#[derive(Serialize)]
struct HomeResponse<'a> {
    sports: Vec<&'a str>,
    selected_sport: &'a str,
    live_matches: Vec<MatchSummary>,
    recent_matches: Vec<MatchSummary>,
    upcoming_matches: Vec<MatchSummary>,
}

#[derive(Serialize)]
struct ScheduleResponse<'a> {
    sports: Vec<&'a str>,
    selected_sport: &'a str,
    matches: Vec<MatchSummary>,
}

#[derive(Serialize)]
struct PlayersResponse<'a> {
    sports: Vec<&'a str>,
    selected_sport: &'a str,
    players: Vec<PlayerCard>,
}

#[derive(Serialize)]
struct AdminResponse<'a> {
    sports: &'a [Sport],
    teams: &'a [Team],
    players: &'a [Player],
    matches: Vec<MatchSummary>,
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn league_error(e: &LeagueError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        LeagueError::NotFound { .. } => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn sport_names(league: &League) -> Vec<&str> {
    league.sports().iter().map(|s| s.name.as_str()).collect()
}

fn summaries(views: &[MatchView<'_>]) -> Vec<MatchSummary> {
    views.iter().map(MatchView::summary).collect()
}

fn match_summary(league: &League, id: MatchId, board: &BoardSettings) -> Option<MatchSummary> {
    let record = league.resolve(league.game(id)?)?;
    Some(annotate(record, now(), board.match_duration).summary())
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "sports-scores-web",
    })
}

#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[get("/api/sports")]
async fn api_sports(state: SharedState) -> HttpResponse {
    let league = match state.league.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(league.sports())
}

/// Landing view: live, recent and upcoming buckets for the selected sport.
#[get("/api/home")]
async fn api_home(state: SharedState, query: Query<SportQuery>) -> HttpResponse {
    let league = match state.league.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let filter = SportFilter::parse(query.sport.as_deref());
    let board = assemble_board(league.records(), &filter, now(), &state.board);
    HttpResponse::Ok().json(HomeResponse {
        sports: sport_names(&league),
        selected_sport: filter.label(),
        live_matches: summaries(&board.live),
        recent_matches: summaries(&board.recent),
        upcoming_matches: summaries(&board.upcoming),
    })
}

/// Every match of the selected sport, soonest first.
#[get("/api/schedule")]
async fn api_schedule(state: SharedState, query: Query<SportQuery>) -> HttpResponse {
    let league = match state.league.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let filter = SportFilter::parse(query.sport.as_deref());
    let views = schedule(league.records(), &filter, now(), state.board.match_duration);
    HttpResponse::Ok().json(ScheduleResponse {
        sports: sport_names(&league),
        selected_sport: filter.label(),
        matches: summaries(&views),
    })
}

/// Players of the selected sport with their team's live matches.
#[get("/api/players")]
async fn api_players(state: SharedState, query: Query<SportQuery>) -> HttpResponse {
    let league = match state.league.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let filter = SportFilter::parse(query.sport.as_deref());
    let players = roster(&league, &filter, now(), state.board.match_duration);
    HttpResponse::Ok().json(PlayersResponse {
        sports: sport_names(&league),
        selected_sport: filter.label(),
        players,
    })
}

/// Everything an admin screen needs; matches newest-created first.
#[get("/api/admin")]
async fn api_admin(state: SharedState) -> HttpResponse {
    let league = match state.league.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let views = admin_matches(league.records(), now(), state.board.match_duration);
    HttpResponse::Ok().json(AdminResponse {
        sports: league.sports(),
        teams: league.teams(),
        players: league.players(),
        matches: summaries(&views),
    })
}

/// All matches in store order.
#[get("/api/matches")]
async fn api_list_matches(state: SharedState) -> HttpResponse {
    let league = match state.league.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let at = now();
    let result: Vec<MatchSummary> = league
        .records()
        .into_iter()
        .map(|r| annotate(r, at, state.board.match_duration).summary())
        .collect();
    HttpResponse::Ok().json(result)
}

#[post("/api/matches")]
async fn api_create_match(state: SharedState, body: Json<NewMatch>) -> HttpResponse {
    let mut league = match state.league.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let id = match league.create_match(body.into_inner(), now()) {
        Ok(game) => game.id,
        Err(e) => {
            log::warn!("Rejected new match: {}", e);
            return league_error(&e);
        }
    };
    log::info!("Created match {}", id);
    match match_summary(&league, id, &state.board) {
        Some(summary) => HttpResponse::Created().json(summary),
        None => HttpResponse::InternalServerError().finish(),
    }
}

/// Update scores, details and/or status of one match.
#[put("/api/matches/{id}")]
async fn api_update_score(
    state: SharedState,
    path: Path<MatchId>,
    body: Json<ScoreUpdate>,
) -> HttpResponse {
    let id = path.into_inner();
    let mut league = match state.league.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if let Err(e) = league.update_score(id, body.into_inner(), now()) {
        log::warn!("Rejected score update for {}: {}", id, e);
        return league_error(&e);
    }
    log::info!("Updated match {}", id);
    match match_summary(&league, id, &state.board) {
        Some(summary) => HttpResponse::Ok().json(summary),
        None => HttpResponse::InternalServerError().finish(),
    }
}

#[delete("/api/matches/{id}")]
async fn api_delete_match(state: SharedState, path: Path<MatchId>) -> HttpResponse {
    let id = path.into_inner();
    let mut league = match state.league.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match league.delete_match(id) {
        Ok(_) => {
            log::info!("Deleted match {}", id);
            HttpResponse::Ok().json(serde_json::json!({ "success": true }))
        }
        Err(e) => league_error(&e),
    }
}

/// Reduced score objects for matches that are live right now.
#[get("/api/live-scores")]
async fn api_live_scores(state: SharedState) -> HttpResponse {
    let league = match state.league.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let result: Vec<LiveScore> = live_matches(league.records(), now(), state.board.match_duration)
        .iter()
        .map(MatchView::live_score)
        .collect();
    HttpResponse::Ok().json(result)
}

#[get("/api/teams/{sport_id}")]
async fn api_teams(state: SharedState, path: Path<SportId>) -> HttpResponse {
    let league = match state.league.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match league.teams_for_sport(path.into_inner()) {
        Ok(teams) => {
            let result: Vec<TeamEntry> = teams.into_iter().map(TeamEntry::from).collect();
            HttpResponse::Ok().json(result)
        }
        Err(e) => league_error(&e),
    }
}

async fn serve_index() -> HttpResponse {
    let html = include_str!("../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// Register every route. Malformed JSON bodies get a `{"error": ...}` 400.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let body = serde_json::json!({ "error": err.to_string() });
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    });
    cfg.app_data(json_config)
        .route("/", web::get().to(serve_index))
        .service(api_health)
        .service(favicon)
        .service(api_sports)
        .service(api_home)
        .service(api_schedule)
        .service(api_players)
        .service(api_admin)
        .service(api_list_matches)
        .service(api_create_match)
        .service(api_update_score)
        .service(api_delete_match)
        .service(api_live_scores)
        .service(api_teams);
}
