use std::time::Instant;

use tracing::log;

use crate::error::FetchError;
use crate::mock_data;
use crate::models::{DataSource, Season};
use crate::models_api::standings::{FormResult, Standing};
use crate::models_external::standings::{LeagueStandingsRsp, TeamStanding};
use crate::rest_client::FootballClient;
use crate::season_probe::probe_seasons;

impl From<&TeamStanding> for Standing {
    fn from(v: &TeamStanding) -> Self {
        Standing {
            position: v.rank,
            team: v.team.name.clone(),
            logo: v.team.logo.clone(),
            played: v.all.played,
            points: v.points,
            form: FormResult::parse_all(v.form.as_deref().unwrap_or_default()),
            goals_for: v.all.goals.for_,
            goals_against: v.all.goals.against,
        }
    }
}

pub struct StandingService;
impl StandingService {
    pub async fn fetch(client: &FootballClient, seasons: &[Season]) -> (Vec<Standing>, DataSource) {
        let before = Instant::now();
        let probe = probe_seasons("standings", seasons, |season| async move {
            let rsp = client.get_standings(season).await?;
            StandingService::map(&rsp)
        }).await;
        let source = DataSource::from_probe(&probe);

        let result = match probe {
            Some((_, standings)) => standings,
            None => mock_data::standings(),
        };
        log::info!("[STANDING] {} teams from {:?} in {:.0?}", result.len(), source, before.elapsed());
        (result, source)
    }

    /// Takes the first group table of the first league in the response.
    pub fn map(rsp: &[LeagueStandingsRsp]) -> Result<Vec<Standing>, FetchError> {
        let table = rsp.first()
            .and_then(|e| e.league.standings.first())
            .ok_or_else(|| FetchError::malformed("standings", "no standings table in response"))?;

        let mut standings: Vec<Standing> = table.iter().map(Standing::from).collect();
        standings.sort_by_key(|e| e.position);
        Ok(standings)
    }
}
