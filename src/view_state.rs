//! Per-request dashboard state. Everything the page can toggle lives in the
//! query string, every control links to the state it produces.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::layout::{Direction, Layout, SectionId};
use crate::models_api::social::SocialPost;

/// Raw query string, as the router hands it over.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ViewQuery {
    pub team: Option<String>,
    pub collapsed: Option<String>,
    pub table: Option<String>,
    pub tab: Option<String>,
    pub customize: Option<String>,
    pub liked: Option<String>,
    pub comment: Option<String>,
    pub order: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTab {
    Fixtures,
    Results,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub selected_team: Option<String>,
    pub news_expanded: bool,
    pub twitter_expanded: bool,
    pub fixtures_expanded: bool,
    pub table_expanded: bool,
    pub tab: MatchTab,
    pub customize: bool,
    pub comment: String,
    pub liked_posts: BTreeSet<u32>,
    pub layout: Layout,
}

impl Default for DashboardState {
    fn default() -> Self {
        DashboardState {
            selected_team: None,
            news_expanded: true,
            twitter_expanded: true,
            fixtures_expanded: true,
            table_expanded: false,
            tab: MatchTab::Fixtures,
            customize: false,
            comment: String::new(),
            liked_posts: BTreeSet::new(),
            layout: Layout::default(),
        }
    }
}

fn split_list(value: &Option<String>) -> impl Iterator<Item = &str> {
    value.as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
}

fn is_truthy(value: &Option<String>) -> bool {
    matches!(value.as_deref(), Some("1") | Some("true") | Some("on"))
}

impl From<ViewQuery> for DashboardState {
    fn from(q: ViewQuery) -> Self {
        let collapsed: Vec<SectionId> = split_list(&q.collapsed)
            .filter_map(|e| e.parse().ok())
            .collect();

        DashboardState {
            selected_team: q.team.as_deref()
                .map(|e| e.trim())
                .filter(|e| !e.is_empty())
                .map(|e| e.to_string()),
            news_expanded: !collapsed.contains(&SectionId::News),
            twitter_expanded: !collapsed.contains(&SectionId::Twitter),
            fixtures_expanded: !collapsed.contains(&SectionId::Fixtures),
            table_expanded: q.table.as_deref() == Some("all"),
            tab: match q.tab.as_deref() {
                Some("results") => MatchTab::Results,
                _ => MatchTab::Fixtures,
            },
            customize: is_truthy(&q.customize),
            liked_posts: split_list(&q.liked).filter_map(|e| e.parse().ok()).collect(),
            comment: q.comment.unwrap_or_default(),
            layout: if q.order.is_some() {
                Layout::from_slugs(split_list(&q.order))
            } else {
                Layout::default()
            },
        }
    }
}

impl DashboardState {
    /// Only the collapsible cards answer false here.
    pub fn is_expanded(&self, id: SectionId) -> bool {
        match id {
            SectionId::News => self.news_expanded,
            SectionId::Twitter => self.twitter_expanded,
            SectionId::Fixtures => self.fixtures_expanded,
            _ => true,
        }
    }

    pub fn selected_team(&self) -> Option<&str> {
        self.selected_team.as_deref()
    }

    pub fn can_post(&self) -> bool {
        !self.comment.trim().is_empty()
    }

    pub fn is_liked(&self, post_id: u32) -> bool {
        self.liked_posts.contains(&post_id)
    }

    pub fn like_count(&self, post: &SocialPost) -> u32 {
        if self.is_liked(post.id) { post.likes + 1 } else { post.likes }
    }

    pub fn table_rows(&self) -> usize {
        if self.table_expanded { 20 } else { 10 }
    }

    /// Picking the already selected team clears the selection.
    pub fn with_team_toggled(&self, team: &str) -> DashboardState {
        let mut next = self.clone();
        next.selected_team = match self.selected_team() {
            Some(current) if current == team => None,
            _ => Some(team.to_string()),
        };
        next
    }

    pub fn with_section_toggled(&self, id: SectionId) -> DashboardState {
        let mut next = self.clone();
        match id {
            SectionId::News => next.news_expanded = !self.news_expanded,
            SectionId::Twitter => next.twitter_expanded = !self.twitter_expanded,
            SectionId::Fixtures => next.fixtures_expanded = !self.fixtures_expanded,
            _ => {},
        }
        next
    }

    pub fn with_table_toggled(&self) -> DashboardState {
        DashboardState { table_expanded: !self.table_expanded, ..self.clone() }
    }

    pub fn with_tab(&self, tab: MatchTab) -> DashboardState {
        DashboardState { tab, ..self.clone() }
    }

    pub fn with_customize_toggled(&self) -> DashboardState {
        DashboardState { customize: !self.customize, ..self.clone() }
    }

    pub fn with_like_toggled(&self, post_id: u32) -> DashboardState {
        let mut next = self.clone();
        if !next.liked_posts.remove(&post_id) {
            next.liked_posts.insert(post_id);
        }
        next
    }

    pub fn with_section_moved(&self, id: SectionId, direction: Direction) -> DashboardState {
        DashboardState { layout: self.layout.moved(id, direction), ..self.clone() }
    }

    /// Non-default values only, in a fixed order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![];
        if let Some(team) = self.selected_team() {
            pairs.push(("team", team.to_string()));
        }
        let collapsed: Vec<&str> = [SectionId::News, SectionId::Fixtures, SectionId::Twitter]
            .iter()
            .filter(|e| !self.is_expanded(**e))
            .map(|e| e.slug())
            .collect();
        if !collapsed.is_empty() {
            pairs.push(("collapsed", collapsed.join(",")));
        }
        if self.table_expanded {
            pairs.push(("table", "all".to_string()));
        }
        if self.tab == MatchTab::Results {
            pairs.push(("tab", "results".to_string()));
        }
        if self.customize {
            pairs.push(("customize", "1".to_string()));
        }
        if !self.liked_posts.is_empty() {
            let liked: Vec<String> = self.liked_posts.iter().map(|e| e.to_string()).collect();
            pairs.push(("liked", liked.join(",")));
        }
        if !self.layout.is_default() {
            pairs.push(("order", self.layout.to_param()));
        }
        if !self.comment.is_empty() {
            pairs.push(("comment", self.comment.clone()));
        }
        pairs
    }

    pub fn href(&self) -> String {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return "/".to_string();
        }
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        format!("/?{query}")
    }
}
