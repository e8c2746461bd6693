//! Fixed datasets shown when API-Football cannot be reached.

use crate::models_api::{fixture::Fixture, standings::{FormResult, Standing}, top_scorer::TopScorer};
use crate::teams;

pub fn standings() -> Vec<Standing> {
    [
        ("Liverpool", 82, "WWDWW", 86, 41),
        ("Manchester City", 80, "WWWLW", 96, 34),
        ("Arsenal", 79, "LWWWW", 91, 29),
        ("Tottenham Hotspur", 71, "WWLWL", 74, 61),
        ("Aston Villa", 68, "LDWLD", 76, 61),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (team, points, form, goals_for, goals_against))| Standing {
        position: (i + 1) as u8,
        team: team.to_string(),
        logo: teams::logo_for(team),
        played: 38,
        points,
        form: FormResult::parse_all(form),
        goals_for,
        goals_against,
    })
    .collect()
}

pub fn fixtures() -> Vec<Fixture> {
    [
        ("Arsenal", "Everton", "14:00", "Aug 17"),
        ("Chelsea", "Manchester City", "15:30", "Aug 18"),
    ]
    .into_iter()
    .map(|(home, away, time, date)| Fixture {
        home: home.to_string(),
        away: away.to_string(),
        home_logo: teams::logo_for(home),
        away_logo: teams::logo_for(away),
        home_score: None,
        away_score: None,
        date: date.to_string(),
        time: Some(time.to_string()),
    })
    .collect()
}

pub fn results() -> Vec<Fixture> {
    [
        ("Liverpool", "Wolves", 2, 0, "May 19"),
        ("Manchester United", "Brighton", 2, 0, "May 19"),
    ]
    .into_iter()
    .map(|(home, away, home_score, away_score, date)| Fixture {
        home: home.to_string(),
        away: away.to_string(),
        home_logo: teams::logo_for(home),
        away_logo: teams::logo_for(away),
        home_score: Some(home_score),
        away_score: Some(away_score),
        date: date.to_string(),
        time: None,
    })
    .collect()
}

pub fn top_scorers() -> Vec<TopScorer> {
    [
        ("Erling Haaland", "https://media.api-sports.io/football/players/909.png", "Manchester City", 27),
        ("Cole Palmer", "https://media.api-sports.io/football/players/19187.png", "Chelsea", 22),
        ("Alexander Isak", "https://media.api-sports.io/football/players/745.png", "Newcastle United", 21),
    ]
    .into_iter()
    .map(|(name, photo, team, goals)| TopScorer {
        name: name.to_string(),
        team: team.to_string(),
        goals,
        logo: teams::logo_for(team),
        photo: Some(photo.to_string()),
    })
    .collect()
}
