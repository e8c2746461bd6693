use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use tracing::log;

use crate::mock_data;
use crate::models::{DataSource, Season};
use crate::models_api::fixture::Fixture;
use crate::models_external::fixture::FixtureRsp;
use crate::rest_client::FootballClient;
use crate::season_probe::probe_seasons;

/// Which slice of the calendar to ask for, relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchWindow {
    Upcoming { days_ahead: i64 },
    Recent { days_back: i64 },
}

impl MatchWindow {
    pub fn range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            MatchWindow::Upcoming { days_ahead } => (today, today + Duration::days(*days_ahead)),
            MatchWindow::Recent { days_back } => (today - Duration::days(*days_back), today),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MatchWindow::Upcoming { .. } => "fixtures",
            MatchWindow::Recent { .. } => "results",
        }
    }

    fn mock(&self) -> Vec<Fixture> {
        match self {
            MatchWindow::Upcoming { .. } => mock_data::fixtures(),
            MatchWindow::Recent { .. } => mock_data::results(),
        }
    }
}

pub struct FixtureService;
impl FixtureService {
    pub async fn fetch(
        client: &FootballClient,
        seasons: &[Season],
        window: MatchWindow,
        today: NaiveDate,
        tz: Tz,
    ) -> (Vec<Fixture>, DataSource) {
        let (from, to) = window.range(today);
        let probe = probe_seasons(window.label(), seasons, |season| async move {
            client.get_fixtures(season, from, to).await
        }).await;
        let source = DataSource::from_probe(&probe);

        let result = match probe {
            Some((_, matches)) => FixtureService::map(matches, tz),
            None => window.mock(),
        };
        log::info!("[FIXTURE] {} {} {from}..{to} from {:?}", result.len(), window.label(), source);
        (result, source)
    }

    /// Sorts by kickoff, then formats date and time in `tz`.
    pub fn map(mut matches: Vec<FixtureRsp>, tz: Tz) -> Vec<Fixture> {
        matches.sort_by_key(|e| e.fixture.date);
        matches.into_iter().map(|e| {
            let kickoff = e.fixture.date.with_timezone(&tz);
            Fixture {
                home: e.teams.home.name,
                away: e.teams.away.name,
                home_logo: e.teams.home.logo,
                away_logo: e.teams.away.logo,
                home_score: e.goals.home,
                away_score: e.goals.away,
                date: kickoff.format("%b %-d").to_string(),
                time: Some(kickoff.format("%H:%M").to_string()),
            }
        }).collect()
    }
}
