//! HTTP tests: JSON shapes, status codes and the score-update round trip.

use actix_web::http::StatusCode;
use actix_web::{test, web::Data, App};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use sports_scores_web::api::{self, AppState};
use sports_scores_web::{
    BoardSettings, League, MatchId, MatchStatus, NewMatch, Sport, SportId, Team,
};

struct Seeded {
    state: Data<AppState>,
    cricket: SportId,
    live: MatchId,
    upcoming: MatchId,
}

fn seeded() -> Seeded {
    let now = Utc::now().naive_utc();
    let mut league = League::new();
    let cricket = league.add_sport(Sport::new("Cricket")).unwrap();
    let mut mi = Team::new("Mumbai Indians", cricket);
    mi.short_name = Some("MI".to_string());
    let mut csk = Team::new("Chennai Super Kings", cricket);
    csk.short_name = Some("CSK".to_string());
    let mi = league.add_team(mi).unwrap();
    let csk = league.add_team(csk).unwrap();
    let football = league.add_sport(Sport::new("Football")).unwrap();
    let kbfc = league.add_team(Team::new("Kerala Blasters", football)).unwrap();
    let bfc = league.add_team(Team::new("Bengaluru FC", football)).unwrap();

    let mut live = NewMatch::new(cricket, mi, csk);
    live.match_date = Some(now - Duration::hours(1));
    live.team1_score = Some("187/5".to_string());
    live.venue = Some("Wankhede Stadium".to_string());
    let live = league.create_match(live, now).unwrap().id;

    let mut done = NewMatch::new(football, kbfc, bfc);
    done.match_date = Some(now - Duration::days(2));
    done.status = Some(MatchStatus::Completed);
    league.create_match(done, now).unwrap();

    let mut upcoming = NewMatch::new(cricket, csk, mi);
    upcoming.match_date = Some(now + Duration::days(1));
    let upcoming = league.create_match(upcoming, now).unwrap().id;

    Seeded {
        state: Data::new(AppState::new(league, BoardSettings::default())),
        cricket,
        live,
        upcoming,
    }
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(App::new().app_data($state.clone()).configure(api::configure)).await
    };
}

#[actix_web::test]
async fn health_reports_ok() {
    let s = seeded();
    let app = app!(s.state);
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["ok"], json!(true));
}

#[actix_web::test]
async fn match_objects_have_the_api_fields() {
    let s = seeded();
    let app = app!(s.state);
    let req = test::TestRequest::get().uri("/api/matches").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let matches = body.as_array().unwrap();
    assert_eq!(matches.len(), 3);

    let mut keys: Vec<&str> = matches[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    let mut expected = vec![
        "id", "sport", "team1", "team2", "team1_score", "team2_score", "status", "is_live",
        "venue", "match_details", "match_date", "match_time", "tournament",
    ];
    expected.sort_unstable();
    assert_eq!(keys, expected);

    let live = &matches[0];
    assert_eq!(live["sport"], "Cricket");
    assert_eq!(live["team1"], "Mumbai Indians");
    assert_eq!(live["team1_score"], "187/5");
    assert_eq!(live["status"], "live");
    assert_eq!(live["is_live"], true);
    assert!(live["match_date"].as_str().unwrap().contains('T'));
}

#[actix_web::test]
async fn home_partitions_by_sport() {
    let s = seeded();
    let app = app!(s.state);

    let req = test::TestRequest::get().uri("/api/home").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["selected_sport"], "all");
    assert_eq!(body["sports"], json!(["Cricket", "Football"]));
    assert_eq!(body["live_matches"].as_array().unwrap().len(), 1);
    assert_eq!(body["recent_matches"].as_array().unwrap().len(), 1);
    assert_eq!(body["upcoming_matches"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::get().uri("/api/home?sport=Cricket").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["selected_sport"], "Cricket");
    assert!(body["recent_matches"].as_array().unwrap().is_empty());

    let req = test::TestRequest::get().uri("/api/home?sport=Curling").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["live_matches"].as_array().unwrap().is_empty());
    assert!(body["upcoming_matches"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn schedule_lists_everything_soonest_first() {
    let s = seeded();
    let app = app!(s.state);
    let req = test::TestRequest::get().uri("/api/schedule").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let statuses: Vec<&str> = body["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["completed", "live", "upcoming"]);
}

#[actix_web::test]
async fn live_scores_use_the_reduced_shape() {
    let s = seeded();
    let app = app!(s.state);
    let req = test::TestRequest::get().uri("/api/live-scores").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let scores = body.as_array().unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(
        scores[0],
        json!({
            "id": s.live,
            "sport": "Cricket",
            "team1": "Mumbai Indians",
            "team1_short": "MI",
            "team2": "Chennai Super Kings",
            "team2_short": "CSK",
            "team1_score": "187/5",
            "team2_score": "0",
            "match_details": null,
        })
    );
}

#[actix_web::test]
async fn teams_by_sport() {
    let s = seeded();
    let app = app!(s.state);
    let req = test::TestRequest::get()
        .uri(&format!("/api/teams/{}", s.cricket))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Mumbai Indians", "Chennai Super Kings"]);
    assert_eq!(body[0]["short_name"], "MI");

    let req = test::TestRequest::get()
        .uri(&format!("/api/teams/{}", uuid::Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_score_round_trip() {
    let s = seeded();
    let app = app!(s.state);
    let req = test::TestRequest::put()
        .uri(&format!("/api/matches/{}", s.upcoming))
        .set_json(json!({ "team2_score": "12/1 (2)", "status": "live" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["team2_score"], "12/1 (2)");
    assert_eq!(body["team1_score"], "0");
    assert_eq!(body["status"], "live");
    assert_eq!(body["is_live"], true);

    let league = s.state.league.read().unwrap();
    let game = league.game(s.upcoming).unwrap();
    assert_eq!(game.status(), MatchStatus::Live);
    assert!(game.is_live());
}

#[actix_web::test]
async fn status_labels_in_bodies_ignore_case() {
    let s = seeded();
    let app = app!(s.state);
    let req = test::TestRequest::put()
        .uri(&format!("/api/matches/{}", s.upcoming))
        .set_json(json!({ "status": "Live" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "live");
    assert_eq!(body["is_live"], true);
}

#[actix_web::test]
async fn update_rejects_unknown_status_and_unknown_match() {
    let s = seeded();
    let app = app!(s.state);

    let req = test::TestRequest::put()
        .uri(&format!("/api/matches/{}", s.live))
        .set_json(json!({ "status": "postponed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri(&format!("/api/matches/{}", uuid::Uuid::new_v4()))
        .set_json(json!({ "team1_score": "1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Match not found");
}

#[actix_web::test]
async fn create_and_delete() {
    let s = seeded();
    let app = app!(s.state);
    let (mi, csk) = {
        let league = s.state.league.read().unwrap();
        let teams = league.teams_for_sport(s.cricket).unwrap();
        (teams[0].id, teams[1].id)
    };

    let req = test::TestRequest::post()
        .uri("/api/matches")
        .set_json(json!({
            "sport_id": s.cricket,
            "team1_id": mi,
            "team2_id": mi,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/matches")
        .set_json(json!({
            "sport_id": s.cricket,
            "team1_id": mi,
            "team2_id": csk,
            "venue": "Eden Gardens",
            "match_date": "2099-04-01T14:00:00",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["status"], "upcoming");
    assert_eq!(created["is_live"], false);
    assert_eq!(created["match_date"], "2099-04-01T14:00:00");
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/matches/{}", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "success": true }));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/matches/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn players_view_attaches_live_matches() {
    let s = seeded();
    {
        let mut league = s.state.league.write().unwrap();
        let football_team = league
            .teams()
            .iter()
            .find(|t| t.name == "Kerala Blasters")
            .unwrap()
            .id;
        let cricket_team = league.teams_for_sport(s.cricket).unwrap()[0].id;
        league
            .add_player(sports_scores_web::Player::new("Rohit Sharma", cricket_team))
            .unwrap();
        league
            .add_player(sports_scores_web::Player::new("Adrian Luna", football_team))
            .unwrap();
    }
    let app = app!(s.state);

    let req = test::TestRequest::get().uri("/api/players").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let players = body["players"].as_array().unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0]["name"], "Rohit Sharma");
    assert_eq!(players[0]["team"], "Mumbai Indians");
    assert_eq!(players[0]["runs"], 0);
    assert_eq!(players[0]["live_matches"].as_array().unwrap().len(), 1);
    // Kerala Blasters only have a completed match.
    assert!(players[1]["live_matches"].as_array().unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri("/api/players?sport=Football")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["players"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn admin_lists_all_records() {
    let s = seeded();
    let app = app!(s.state);
    let req = test::TestRequest::get().uri("/api/admin").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["sports"].as_array().unwrap().len(), 2);
    assert_eq!(body["teams"].as_array().unwrap().len(), 4);
    assert_eq!(body["matches"].as_array().unwrap().len(), 3);
}
