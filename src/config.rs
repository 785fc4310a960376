//! Runtime settings, read from the environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `HOST` | `0.0.0.0` | bind address |
//! | `PORT` | `8080` | bind port |
//! | `MATCH_DURATION_MINUTES` | `180` | length of the live window |
//! | `DISPLAY_LIMIT` | `6` | cap on recent/upcoming buckets, `0` = no cap |
//! | `SEED_DIR` | unset | directory with fixture CSVs, built-in fixtures otherwise |

use chrono::Duration;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MATCH_DURATION_MINUTES: i64 = 180;
pub const DEFAULT_DISPLAY_LIMIT: usize = 6;

/// Display policy for the scores board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoardSettings {
    /// How long after its start a match counts as live.
    pub match_duration: Duration,
    /// Max entries in the recent and upcoming buckets; `None` for no cap.
    pub display_limit: Option<usize>,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            match_duration: Duration::minutes(DEFAULT_MATCH_DURATION_MINUTES),
            display_limit: Some(DEFAULT_DISPLAY_LIMIT),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub board: BoardSettings,
    pub seed_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            board: BoardSettings::default(),
            seed_dir: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Unparseable values are logged and
    /// replaced by their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            settings.host = host.trim().to_string();
        }
        if let Some(port) = parse_var::<u16>(&lookup, "PORT") {
            settings.port = port;
        }
        if let Some(minutes) = parse_var::<i64>(&lookup, "MATCH_DURATION_MINUTES") {
            match Duration::try_minutes(minutes).filter(|_| minutes > 0) {
                Some(duration) => settings.board.match_duration = duration,
                None => log::warn!(
                    "MATCH_DURATION_MINUTES must be a positive number of minutes, got {}; using {}",
                    minutes,
                    DEFAULT_MATCH_DURATION_MINUTES
                ),
            }
        }
        if let Some(limit) = parse_var::<usize>(&lookup, "DISPLAY_LIMIT") {
            settings.board.display_limit = (limit > 0).then_some(limit);
        }
        if let Some(dir) = lookup("SEED_DIR").filter(|d| !d.trim().is_empty()) {
            settings.seed_dir = Some(PathBuf::from(dir.trim()));
        }

        settings
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring invalid {}={:?}", key, raw);
            None
        }
    }
}
