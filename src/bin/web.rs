//! Single binary web server: landing page, static files from /static, JSON API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. See `config` for the environment
//! variables (HOST, PORT, MATCH_DURATION_MINUTES, DISPLAY_LIMIT, SEED_DIR).

use actix_files::Files;
use actix_web::{web::Data, App, HttpServer};
use chrono::Utc;
use sports_scores_web::{api, seed, Settings};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::from_env();
    let now = Utc::now().naive_utc();
    let league = match &settings.seed_dir {
        Some(dir) => {
            log::info!("Loading fixtures from {}", dir.display());
            seed::load_dir(dir, now)
        }
        None => seed::load_builtin(now),
    }
    .map_err(|e| {
        log::error!("Could not load fixtures: {}", e);
        std::io::Error::other(e)
    })?;

    log::info!(
        "Match duration {} min, display limit {:?}",
        settings.board.match_duration.num_minutes(),
        settings.board.display_limit
    );
    let state = Data::new(api::AppState::new(league, settings.board));

    let bind = (settings.host.as_str(), settings.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::configure)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}
