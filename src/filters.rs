//! Team-scoped views over dashboard data. Nothing is ever dropped: items
//! about the selected team move to the front, the rest keep their order.

use crate::models_api::{fixture::Fixture, news::NewsItem, standings::Standing};

/// Stable partition, items matching `pred` first.
pub fn partition_first<T: Clone, F: Fn(&T) -> bool>(items: &[T], pred: F) -> Vec<T> {
    let (mut matching, rest): (Vec<T>, Vec<T>) = items.iter().cloned().partition(|e| pred(e));
    matching.extend(rest);
    matching
}

pub fn team_news(news: &[NewsItem], team: Option<&str>) -> Vec<NewsItem> {
    match team {
        Some(team) => partition_first(news, |e| e.title.contains(team)),
        None => news.to_vec(),
    }
}

pub fn team_fixtures(fixtures: &[Fixture], team: Option<&str>) -> Vec<Fixture> {
    match team {
        Some(team) => partition_first(fixtures, |e| e.involves(team)),
        None => fixtures.to_vec(),
    }
}

pub fn team_position<'a>(standings: &'a [Standing], team: Option<&str>) -> Option<&'a Standing> {
    let team = team?;
    standings.iter().find(|e| e.team == team)
}
