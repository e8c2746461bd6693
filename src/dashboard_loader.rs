use std::time::Instant;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::log;

use crate::config_handler::Config;
use crate::fixture_service::{FixtureService, MatchWindow};
use crate::models::Season;
use crate::models_api::dashboard::{DashboardData, DataSources};
use crate::news_service::NewsService;
use crate::rest_client::FootballClient;
use crate::standing_service::StandingService;
use crate::top_scorer_service::TopScorerService;

#[derive(Clone)]
pub struct DashboardLoader {
    client: FootballClient,
    season_fallbacks: u8,
    fixtures_days_ahead: i64,
    results_days_back: i64,
    tz: Tz,
}

impl DashboardLoader {
    pub fn new(client: FootballClient, config: &Config) -> DashboardLoader {
        DashboardLoader {
            client,
            season_fallbacks: config.season_fallbacks,
            fixtures_days_ahead: config.fixtures_days_ahead,
            results_days_back: config.results_days_back,
            tz: config.get_timezone(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }

    /// One call per category, each awaited before the next starts.
    pub async fn load(&self, today: NaiveDate) -> DashboardData {
        let before = Instant::now();
        let seasons = Season::fallbacks(today, self.season_fallbacks);

        let (standings, standings_source) = StandingService::fetch(&self.client, &seasons).await;
        let (top_scorers, top_scorers_source) = TopScorerService::fetch(&self.client, &seasons).await;
        let (fixtures, fixtures_source) = FixtureService::fetch(
            &self.client, &seasons, MatchWindow::Upcoming { days_ahead: self.fixtures_days_ahead }, today, self.tz,
        ).await;
        let (results, results_source) = FixtureService::fetch(
            &self.client, &seasons, MatchWindow::Recent { days_back: self.results_days_back }, today, self.tz,
        ).await;

        log::info!("[LOADER] Loaded dashboard for {today} in {:.2?}", before.elapsed());
        DashboardData {
            standings,
            top_scorers,
            fixtures,
            results,
            news: NewsService::read(),
            sources: DataSources {
                standings: standings_source,
                top_scorers: top_scorers_source,
                fixtures: fixtures_source,
                results: results_source,
            },
        }
    }
}
