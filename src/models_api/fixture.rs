use serde::{Deserialize, Serialize};

/// A match as shown on the dashboard. Upcoming fixtures have no scores.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Fixture {
    pub home: String,
    pub away: String,
    pub home_logo: String,
    pub away_logo: String,
    pub home_score: Option<u16>,
    pub away_score: Option<u16>,
    pub date: String,
    pub time: Option<String>,
}

impl Fixture {
    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }

    pub fn score_display(&self) -> String {
        match (self.home_score, self.away_score) {
            (None, None) => "-".to_string(),
            (home, away) => format!("{} - {}", score_side(home), score_side(away)),
        }
    }
}

fn score_side(score: Option<u16>) -> String {
    score.map(|e| e.to_string()).unwrap_or_else(|| "?".to_string())
}
