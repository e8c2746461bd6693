use serde::{Deserialize, Serialize};

use super::standings::TeamRef;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TopScorerRsp {
    pub player: PlayerInfo,
    #[serde(default)]
    pub statistics: Vec<PlayerStatistics>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayerInfo {
    pub id: u64,
    pub name: String,
    pub photo: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayerStatistics {
    pub team: TeamRef,
    pub goals: PlayerGoals,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PlayerGoals {
    pub total: Option<u16>,
}
