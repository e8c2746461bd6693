use serde::{Deserialize, Serialize};

use crate::models::DataSource;

use super::{fixture::Fixture, news::NewsItem, standings::Standing, top_scorer::TopScorer};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DataSources {
    pub standings: DataSource,
    pub top_scorers: DataSource,
    pub fixtures: DataSource,
    pub results: DataSource,
}

/// Everything one page render needs, fetched fresh per request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub standings: Vec<Standing>,
    pub top_scorers: Vec<TopScorer>,
    pub fixtures: Vec<Fixture>,
    pub results: Vec<Fixture>,
    pub news: Vec<NewsItem>,
    pub sources: DataSources,
}
