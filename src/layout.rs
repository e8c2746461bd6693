use std::fmt::Display;
use std::str::FromStr;

use crate::models::ParseStringError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    TeamOverview,
    News,
    Fixtures,
    Twitter,
    LeagueTable,
    TopScorers,
    QuickStats,
    SocialFeed,
}

impl SectionId {
    pub fn get_all() -> Vec<SectionId> {
        vec![
            SectionId::TeamOverview,
            SectionId::News,
            SectionId::Fixtures,
            SectionId::Twitter,
            SectionId::LeagueTable,
            SectionId::TopScorers,
            SectionId::QuickStats,
            SectionId::SocialFeed,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            SectionId::TeamOverview => "team-overview",
            SectionId::News => "news",
            SectionId::Fixtures => "fixtures",
            SectionId::Twitter => "twitter",
            SectionId::LeagueTable => "league-table",
            SectionId::TopScorers => "top-scorers",
            SectionId::QuickStats => "quick-stats",
            SectionId::SocialFeed => "social-feed",
        }
    }

    /// Grid classes the section is rendered with.
    pub fn size(&self) -> &'static str {
        match self {
            SectionId::TeamOverview | SectionId::News | SectionId::Fixtures => "col-span-2",
            SectionId::LeagueTable => "col-span-1 row-span-2",
            SectionId::SocialFeed => "col-span-3",
            SectionId::Twitter | SectionId::TopScorers | SectionId::QuickStats => "col-span-1",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::TeamOverview => "Team Overview",
            SectionId::News => "Latest News",
            SectionId::Fixtures => "Fixtures & Results",
            SectionId::Twitter => "Twitter Feed",
            SectionId::LeagueTable => "League Table",
            SectionId::TopScorers => "Top Scorers",
            SectionId::QuickStats => "Quick Stats",
            SectionId::SocialFeed => "Comments",
        }
    }
}

impl FromStr for SectionId {
    type Err = ParseStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::get_all()
            .into_iter()
            .find(|e| e.slug() == s)
            .ok_or(ParseStringError)
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Order of the dashboard sections. Always holds every section exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    order: Vec<SectionId>,
}

impl Default for Layout {
    fn default() -> Self {
        Layout { order: SectionId::get_all() }
    }
}

impl Layout {
    /// Unknown slugs and repeats are ignored, missing sections are appended in default order.
    pub fn from_slugs<'a>(slugs: impl IntoIterator<Item = &'a str>) -> Layout {
        let mut order: Vec<SectionId> = vec![];
        for id in slugs.into_iter().filter_map(|e| e.trim().parse::<SectionId>().ok()) {
            if !order.contains(&id) {
                order.push(id);
            }
        }
        for id in SectionId::get_all() {
            if !order.contains(&id) {
                order.push(id);
            }
        }
        Layout { order }
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.order
    }

    pub fn is_default(&self) -> bool {
        self == &Layout::default()
    }

    pub fn to_param(&self) -> String {
        self.order.iter().map(|e| e.slug()).collect::<Vec<_>>().join(",")
    }

    /// Swaps `id` with its neighbour, a no-op at either end.
    pub fn moved(&self, id: SectionId, direction: Direction) -> Layout {
        let mut order = self.order.clone();
        if let Some(pos) = order.iter().position(|e| *e == id) {
            match direction {
                Direction::Up if pos > 0 => order.swap(pos, pos - 1),
                Direction::Down if pos + 1 < order.len() => order.swap(pos, pos + 1),
                _ => {},
            }
        }
        Layout { order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_str() {
        for id in SectionId::get_all() {
            assert_eq!(id.slug().parse::<SectionId>(), Ok(id));
        }
        assert!("sidebar".parse::<SectionId>().is_err());
    }

    #[test]
    fn default_sizes() {
        assert_eq!(SectionId::LeagueTable.size(), "col-span-1 row-span-2");
        assert_eq!(SectionId::SocialFeed.size(), "col-span-3");
        assert_eq!(SectionId::Twitter.size(), "col-span-1");
        assert_eq!(SectionId::News.size(), "col-span-2");
    }

    #[test]
    fn from_slugs_repairs_partial_orders() {
        let layout = Layout::from_slugs("social-feed,bogus,news,social-feed".split(','));
        let sections = layout.sections();
        assert_eq!(sections.len(), 8);
        assert_eq!(sections[0], SectionId::SocialFeed);
        assert_eq!(sections[1], SectionId::News);
        assert_eq!(sections[2], SectionId::TeamOverview);
        assert_eq!(sections[7], SectionId::QuickStats);
    }

    #[test]
    fn move_swaps_neighbours_and_stops_at_edges() {
        let layout = Layout::default();
        let up = layout.moved(SectionId::News, Direction::Up);
        assert_eq!(up.sections()[0], SectionId::News);
        assert_eq!(up.sections()[1], SectionId::TeamOverview);
        assert_eq!(up.moved(SectionId::News, Direction::Up), up);
        assert_eq!(layout.moved(SectionId::SocialFeed, Direction::Down), layout);
    }

    #[test]
    fn param_lists_every_slug() {
        let param = Layout::default().to_param();
        assert_eq!(param, "team-overview,news,fixtures,twitter,league-table,top-scorers,quick-stats,social-feed");
        assert!(Layout::from_slugs(param.split(',')).is_default());
    }
}
