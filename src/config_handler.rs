use std::fs;
use std::io::ErrorKind;

use anyhow::Context;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::LogResult;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default="default_port")]
    pub port: u16,

    #[serde(default="default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default="default_league_id")]
    pub league_id: u32,

    #[serde(default="default_season_fallbacks")]
    pub season_fallbacks: u8,

    #[serde(default="default_fixtures_days_ahead")]
    pub fixtures_days_ahead: i64,

    #[serde(default="default_results_days_back")]
    pub results_days_back: i64,

    #[serde(default="default_timezone")]
    pub timezone: String,

    #[serde(default="default_request_timeout_s")]
    pub request_timeout_s: u64,
}

fn default_port() -> u16 {
    8000
}

fn default_api_url() -> String {
    "https://v3.football.api-sports.io".to_string()
}

fn default_league_id() -> u32 {
    39
}

fn default_season_fallbacks() -> u8 {
    3
}

fn default_fixtures_days_ahead() -> i64 {
    30
}

fn default_results_days_back() -> i64 {
    7
}

fn default_timezone() -> String {
    "Europe/London".to_string()
}

fn default_request_timeout_s() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: default_port(),
            api_url: default_api_url(),
            api_key: String::new(),
            league_id: default_league_id(),
            season_fallbacks: default_season_fallbacks(),
            fixtures_days_ahead: default_fixtures_days_ahead(),
            results_days_back: default_results_days_back(),
            timezone: default_timezone(),
            request_timeout_s: default_request_timeout_s(),
        }
    }
}

impl Config {
    /// Reads the JSON file at `CONFIG_PATH` (or `./deployment/config.json`),
    /// then applies `API_FOOTBALL_KEY` and `PORT` from the environment.
    /// A missing file is not an error, a malformed one is.
    pub fn load() -> anyhow::Result<Config> {
        let path = std::env::var("CONFIG_PATH").ok()
            .unwrap_or_else(|| "./deployment/config.json".to_string());
        let mut result = match fs::read_to_string(&path) {
            Ok(data) => Config::parse(&data)
                .with_context(|| format!("Could not parse JSON at {path}"))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                println!("[CONFIG] No file at {path}, using defaults");
                Config::default()
            },
            Err(e) => return Err(e).with_context(|| format!("Unable to read {path}")),
        };

        if let Ok(api_key) = std::env::var("API_FOOTBALL_KEY") {
            result.api_key = api_key;
        }
        if let Ok(port) = std::env::var("PORT") {
            result.port = port.parse().with_context(|| format!("Invalid PORT {port}"))?;
        }
        println!("[CONFIG] {}", result.describe());
        Ok(result)
    }

    pub fn parse(data: &str) -> anyhow::Result<Config> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn get_timezone(&self) -> Tz {
        self.timezone.parse::<Tz>()
            .ok_log(&format!("[CONFIG] Invalid timezone {}, using UTC", self.timezone))
            .unwrap_or(Tz::UTC)
    }

    fn describe(&self) -> String {
        format!(
            "port={} api_url={} api_key={} league_id={} season_fallbacks={} fixtures_days_ahead={} results_days_back={} timezone={} request_timeout_s={}",
            self.port,
            self.api_url,
            if self.api_key.is_empty() { "<missing>" } else { "<set>" },
            self.league_id,
            self.season_fallbacks,
            self.fixtures_days_ahead,
            self.results_days_back,
            self.timezone,
            self.request_timeout_s,
        )
    }
}
