use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LeagueStandingsRsp {
    pub league: LeagueStandings,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LeagueStandings {
    pub id: u32,
    pub season: i32,
    /// One table per group, the Premier League only has one.
    #[serde(default)]
    pub standings: Vec<Vec<TeamStanding>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamStanding {
    pub rank: u8,
    pub team: TeamRef,
    pub points: u16,
    pub form: Option<String>,
    pub all: StandingRecord,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamRef {
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub logo: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StandingRecord {
    pub played: u16,
    #[serde(default)]
    pub goals: GoalsRecord,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GoalsRecord {
    #[serde(rename = "for", default)]
    pub for_: u16,
    #[serde(default)]
    pub against: u16,
}
