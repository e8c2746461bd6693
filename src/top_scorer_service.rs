use tracing::log;

use crate::error::FetchError;
use crate::mock_data;
use crate::models::{DataSource, Season};
use crate::models_api::top_scorer::TopScorer;
use crate::models_external::top_scorer::TopScorerRsp;
use crate::rest_client::FootballClient;
use crate::season_probe::probe_seasons;

impl TopScorer {
    /// Players without a statistics entry are dropped.
    fn from_rsp(v: &TopScorerRsp) -> Option<TopScorer> {
        let stats = v.statistics.first()?;
        Some(TopScorer {
            name: v.player.name.clone(),
            team: stats.team.name.clone(),
            goals: stats.goals.total.unwrap_or_default(),
            logo: stats.team.logo.clone(),
            photo: v.player.photo.clone(),
        })
    }
}

pub struct TopScorerService;
impl TopScorerService {
    pub async fn fetch(client: &FootballClient, seasons: &[Season]) -> (Vec<TopScorer>, DataSource) {
        let probe = probe_seasons("top scorers", seasons, |season| async move {
            let rsp = client.get_top_scorers(season).await?;
            Ok::<_, FetchError>(TopScorerService::map(&rsp))
        }).await;
        let source = DataSource::from_probe(&probe);

        let result = match probe {
            Some((_, scorers)) => scorers,
            None => mock_data::top_scorers(),
        };
        log::info!("[TOP_SCORER] {} players from {:?}", result.len(), source);
        (result, source)
    }

    pub fn map(rsp: &[TopScorerRsp]) -> Vec<TopScorer> {
        rsp.iter().filter_map(TopScorer::from_rsp).collect()
    }
}
