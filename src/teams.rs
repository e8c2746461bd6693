use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

pub const LEAGUE_LOGO: &str = "https://media.api-sports.io/football/leagues/39.png";
pub const LEAGUE_NAME: &str = "Premier League";

const DEFAULT_TEAM_ID: u32 = 1;
const DEFAULT_COLOR: &str = "bg-gray-500";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Team {
    pub name: &'static str,
    pub short_name: &'static str,
    pub color: &'static str,
    pub id: u32,
}

impl Team {
    pub fn logo(&self) -> String {
        team_logo_url(self.id)
    }
}

const fn team(name: &'static str, short_name: &'static str, color: &'static str, id: u32) -> Team {
    Team { name, short_name, color, id }
}

/// Clubs offered in the team picker.
pub const TEAMS: [Team; 19] = [
    team("Arsenal", "ARS", "bg-red-600", 42),
    team("Aston Villa", "AVL", "bg-purple-600", 66),
    team("Brighton", "BHA", "bg-blue-500", 51),
    team("Brentford", "BRE", "bg-red-500", 55),
    team("Burnley", "BUR", "bg-red-600", 44),
    team("Chelsea", "CHE", "bg-blue-600", 49),
    team("Crystal Palace", "CRY", "bg-red-500", 52),
    team("Everton", "EVE", "bg-blue-700", 45),
    team("Fulham", "FUL", "bg-white", 36),
    team("Liverpool", "LIV", "bg-red-700", 40),
    team("Luton", "LUT", "bg-orange-600", 1359),
    team("Manchester City", "MCI", "bg-sky-500", 50),
    team("Manchester United", "MUN", "bg-red-600", 33),
    team("Newcastle", "NEW", "bg-gray-800", 34),
    team("Nottingham Forest", "NFO", "bg-red-600", 65),
    team("Sheffield Utd", "SHU", "bg-red-600", 62),
    team("Tottenham", "TOT", "bg-white", 47),
    team("West Ham", "WHU", "bg-purple-800", 48),
    team("Wolves", "WOL", "bg-orange-600", 39),
];

lazy_static! {
    /// API-Football ids by every name the data sources use, long forms included.
    static ref TEAM_IDS: HashMap<&'static str, u32> = {
        let mut ids: HashMap<&'static str, u32> = TEAMS.iter().map(|e| (e.name, e.id)).collect();
        ids.insert("Newcastle United", 34);
        ids.insert("Tottenham Hotspur", 47);
        ids
    };
}

pub fn team_logo_url(id: u32) -> String {
    format!("https://media.api-sports.io/football/teams/{id}.png")
}

pub fn team_id(name: &str) -> Option<u32> {
    TEAM_IDS.get(name).copied()
}

/// Logo for a team known only by name, used when building mock data.
pub fn logo_for(name: &str) -> String {
    team_logo_url(team_id(name).unwrap_or(DEFAULT_TEAM_ID))
}

pub fn find(name: &str) -> Option<&'static Team> {
    TEAMS.iter().find(|e| e.name == name)
}

pub fn get_color(name: &str) -> &'static str {
    find(name).map(|e| e.color).unwrap_or(DEFAULT_COLOR)
}

pub fn get_short_name(name: &str) -> String {
    match find(name) {
        Some(e) => e.short_name.to_string(),
        None => name.chars().take(3).collect::<String>().to_uppercase(),
    }
}

pub fn get_logo(name: &str) -> String {
    find(name).map(|e| e.logo()).unwrap_or_default()
}

/// Catalog teams whose name appears in `text`, ignoring case.
pub fn mentioned_in(text: &str) -> Vec<&'static Team> {
    let text = text.to_lowercase();
    TEAMS.iter()
        .filter(|e| text.contains(&e.name.to_lowercase()))
        .collect()
}
