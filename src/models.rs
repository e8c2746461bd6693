use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A Premier League season, keyed by the year it starts in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Season(pub i32);

impl Season {
    /// Seasons kick off in August, so January to July still belong to last year's season.
    pub fn current(today: NaiveDate) -> Season {
        if today.month() < 8 {
            Season(today.year() - 1)
        } else {
            Season(today.year())
        }
    }

    pub fn previous(&self) -> Season {
        Season(self.0 - 1)
    }

    /// Current season first, then `count - 1` earlier ones.
    pub fn fallbacks(today: NaiveDate, count: u8) -> Vec<Season> {
        let mut result = vec![Season::current(today)];
        for _ in 1..count.max(1) {
            let last = result[result.len() - 1];
            result.push(last.previous());
        }
        result
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = ParseStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>().map(Season).map_err(|_| ParseStringError)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStringError;

/// Where a category of dashboard data came from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataSource {
    Live { season: Season },
    Mock,
}

impl DataSource {
    pub fn from_probe<T>(probe: &Option<(Season, T)>) -> DataSource {
        match probe {
            Some((season, _)) => DataSource::Live { season: *season },
            None => DataSource::Mock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn current_season_switches_in_august() {
        assert_eq!(Season::current(date(2024, 7, 31)), Season(2023));
        assert_eq!(Season::current(date(2024, 8, 1)), Season(2024));
        assert_eq!(Season::current(date(2025, 1, 15)), Season(2024));
        assert_eq!(Season::current(date(2024, 12, 31)), Season(2024));
    }

    #[test]
    fn fallbacks_go_backwards_from_current() {
        assert_eq!(
            Season::fallbacks(date(2025, 3, 1), 3),
            vec![Season(2024), Season(2023), Season(2022)]
        );
    }

    #[test]
    fn fallbacks_always_include_current() {
        assert_eq!(Season::fallbacks(date(2025, 9, 1), 0), vec![Season(2025)]);
    }

    #[test]
    fn season_parses_from_year() {
        assert_eq!("2023".parse::<Season>(), Ok(Season(2023)));
        assert_eq!("Season2023".parse::<Season>(), Err(ParseStringError));
    }

    #[test]
    fn data_source_serializes_with_kind() {
        let live = serde_json::to_string(&DataSource::Live { season: Season(2024) }).unwrap();
        assert_eq!(live, r#"{"kind":"live","season":2024}"#);
        let mock = serde_json::to_string(&DataSource::Mock).unwrap();
        assert_eq!(mock, r#"{"kind":"mock"}"#);
    }
}
