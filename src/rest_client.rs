use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::log;

use crate::config_handler::Config;
use crate::error::FetchError;
use crate::models::Season;
use crate::models_external::envelope::ApiRsp;
use crate::models_external::fixture::FixtureRsp;
use crate::models_external::standings::LeagueStandingsRsp;
use crate::models_external::top_scorer::TopScorerRsp;

/// API-Football client. Cheap to clone.
#[derive(Clone)]
pub struct FootballClient {
    client: reqwest::Client,
    base_url: Arc<str>,
    league_id: u32,
}

impl FootballClient {
    pub fn new(config: &Config) -> anyhow::Result<FootballClient> {
        let base_url = config.api_url.trim_end_matches('/').to_string();
        let host = url::Url::parse(&base_url)?
            .host_str()
            .map(|e| e.to_string())
            .unwrap_or_default();

        let mut headers = HeaderMap::new();
        headers.insert("x-rapidapi-host", HeaderValue::from_str(&host)?);
        let mut key = HeaderValue::from_str(&config.api_key)?;
        key.set_sensitive(true);
        headers.insert("x-rapidapi-key", key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_s))
            .build()?;

        Ok(FootballClient { client, base_url: base_url.into(), league_id: config.league_id })
    }

    pub async fn get_standings(&self, season: Season) -> Result<Vec<LeagueStandingsRsp>, FetchError> {
        let url = format!("{}/standings?league={}&season={season}", self.base_url, self.league_id);
        self.get_call(&url).await
    }

    pub async fn get_top_scorers(&self, season: Season) -> Result<Vec<TopScorerRsp>, FetchError> {
        let url = format!("{}/players/topscorers?league={}&season={season}", self.base_url, self.league_id);
        self.get_call(&url).await
    }

    pub async fn get_fixtures(&self, season: Season, from: NaiveDate, to: NaiveDate) -> Result<Vec<FixtureRsp>, FetchError> {
        let url = format!(
            "{}/fixtures?league={}&season={season}&from={}&to={}",
            self.base_url,
            self.league_id,
            from.format("%Y-%m-%d"),
            to.format("%Y-%m-%d"),
        );
        self.get_call(&url).await
    }

    async fn get_call<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, FetchError> {
        let before = Instant::now();
        let rsp = self.client.get(url).send().await?;
        let status = rsp.status();
        let body = rsp.text().await?;
        log::info!("[REST] Call {url} {} {:.2?}", status.as_u16(), before.elapsed());

        if !status.is_success() {
            return Err(FetchError::status(status.as_u16(), url));
        }
        parse_body(url, &body)
    }
}

/// Checks the envelope in order: shape, reported errors, then emptiness.
pub fn parse_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<Vec<T>, FetchError> {
    let rsp: ApiRsp<T> = serde_json::from_str(body)
        .map_err(|e| FetchError::malformed(url, e.to_string()))?;
    if rsp.has_errors() {
        return Err(FetchError::api(url, rsp.errors.to_string()));
    }
    if rsp.response.is_empty() {
        return Err(FetchError::no_data(url));
    }
    Ok(rsp.response)
}
