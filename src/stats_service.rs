use serde::Serialize;

use crate::models::DataSource;
use crate::models_api::standings::Standing;

const FULL_TABLE: usize = 20;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QuickStats {
    pub matches_played: u32,
    pub goals_scored: u32,
    pub avg_goals_per_match: f64,
}

/// Shown when the table cannot account for every match of the season.
pub const SEASON_STATS: QuickStats = QuickStats {
    matches_played: 380,
    goals_scored: 1084,
    avg_goals_per_match: 2.85,
};

pub struct StatsService;

impl StatsService {
    /// Every match shows up twice in the table, once per team, so only a
    /// complete live table is summed.
    pub fn quick_stats(standings: &[Standing], source: DataSource) -> QuickStats {
        if source == DataSource::Mock || standings.len() < FULL_TABLE {
            return SEASON_STATS;
        }
        let appearances: u32 = standings.iter().map(|e| e.played as u32).sum();
        let matches_played = appearances / 2;
        let goals_scored: u32 = standings.iter().map(|e| e.goals_for as u32).sum();
        let avg_goals_per_match = if matches_played == 0 {
            0.0
        } else {
            goals_scored as f64 / matches_played as f64
        };
        QuickStats { matches_played, goals_scored, avg_goals_per_match }
    }
}
