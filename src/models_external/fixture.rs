use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::standings::TeamRef;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FixtureRsp {
    pub fixture: FixtureInfo,
    pub teams: FixtureTeams,
    pub goals: FixtureGoals,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FixtureInfo {
    pub id: u64,
    pub date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FixtureTeams {
    pub home: TeamRef,
    pub away: TeamRef,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FixtureGoals {
    pub home: Option<u16>,
    pub away: Option<u16>,
}
