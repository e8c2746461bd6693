use chrono::Utc;
use pl_hub_rs::{mock_data, models::{DataSource, Season}};
use reqwest::StatusCode;
use tempdir::TempDir;

use crate::common::{dashboard_server::DashboardServer, external_server::{ExternalServer, API_KEY}};

mod common;

fn current_season() -> Season {
    Season::current(Utc::now().with_timezone(&chrono_tz::Europe::London).date_naive())
}

fn section<'a>(html: &'a str, slug: &str) -> &'a str {
    let start = html.find(&format!(r#"id="{slug}""#)).expect("section should render");
    &html[start..]
}

#[tokio::test]
async fn test_live_data_from_previous_season() -> Result<(), Box<dyn std::error::Error>> {
    // Given - upstream only serves last season
    let temp_dir = TempDir::new("integration_test").expect("dir to be created");
    let path = temp_dir.path().to_str().unwrap();
    let season = current_season().previous();

    let mut external_server = ExternalServer::new(8101);
    let external_state = external_server.start(season).await;

    let mut server = DashboardServer::new(8102);
    server.start(path, &external_server.get_url(), API_KEY);
    server.retry_until_up().await;

    // When
    let data = server.get_dashboard().await?;

    // Then - every category is live from the season that answered
    let live = DataSource::Live { season };
    assert_eq!(data.sources.standings, live);
    assert_eq!(data.sources.top_scorers, live);
    assert_eq!(data.sources.fixtures, live);
    assert_eq!(data.sources.results, live);

    // Then - the current season was tried first
    let calls = external_state.read().await.calls.clone();
    let standing_calls: Vec<&String> = calls.iter().filter(|e| e.starts_with("standings.json")).collect();
    assert_eq!(standing_calls, vec![
        &format!("standings.json:{}", current_season()),
        &format!("standings.json:{season}"),
    ]);

    // Then - standings sorted by rank
    let teams: Vec<&str> = data.standings.iter().map(|e| e.team.as_str()).collect();
    assert_eq!(teams, vec!["Liverpool", "Arsenal", "Nottingham Forest", "Chelsea"]);
    assert_eq!(data.standings[0].points, 45);
    assert_eq!(data.standings[0].goals_for, 44);
    assert!(data.standings[3].form.is_empty());

    // Then - players without statistics are dropped
    let scorers: Vec<&str> = data.top_scorers.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(scorers, vec!["Mohamed Salah", "Erling Haaland", "Bryan Mbeumo"]);
    assert_eq!(data.top_scorers[0].goals, 17);
    assert_eq!(data.top_scorers[2].photo, None);

    // Then - matches sorted by kickoff, in London time
    let fixture = &data.fixtures[0];
    assert_eq!((fixture.home.as_str(), fixture.away.as_str()), ("Manchester City", "Everton"));
    assert_eq!(fixture.date, "Dec 26");
    assert_eq!(fixture.time.as_deref(), Some("12:30"));
    assert_eq!(data.fixtures[2].time.as_deref(), Some("20:15"));

    let scores: Vec<String> = data.results.iter().map(|e| e.score_display()).collect();
    assert_eq!(scores, vec!["1 - 5", "-", "3 - 6"]);

    // When - render the page
    let (status, html) = server.get_page("").await?;

    // Then - a partial table cannot count the season, quick stats show season figures
    assert_eq!(status, StatusCode::OK);
    assert!(section(&html, "quick-stats").contains("<b>380</b>"));
    assert!(section(&html, "quick-stats").contains("<b>1084</b>"));
    assert!(section(&html, "quick-stats").contains("<b>2.85</b>"));
    assert!(section(&html, "top-scorers").contains("/next.svg"));

    Ok(())
}

#[tokio::test]
async fn test_unreachable_api_serves_mock_data() -> Result<(), Box<dyn std::error::Error>> {
    // Given - nothing listens on the upstream port
    let temp_dir = TempDir::new("integration_test").expect("dir to be created");
    let path = temp_dir.path().to_str().unwrap();

    let mut server = DashboardServer::new(8103);
    server.start(path, "http://localhost:8104", API_KEY);
    server.retry_until_up().await;

    // When
    let data = server.get_dashboard().await?;

    // Then
    assert_eq!(data.standings, mock_data::standings());
    assert_eq!(data.top_scorers, mock_data::top_scorers());
    assert_eq!(data.fixtures, mock_data::fixtures());
    assert_eq!(data.results, mock_data::results());
    assert_eq!(data.sources.standings, DataSource::Mock);
    assert_eq!(data.sources.results, DataSource::Mock);

    // When - the page still renders
    let (status, html) = server.get_page("?tab=results").await?;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Erling Haaland"));
    assert!(section(&html, "fixtures").contains("2 - 0"));

    Ok(())
}

#[tokio::test]
async fn test_failing_endpoint_falls_back_alone() -> Result<(), Box<dyn std::error::Error>> {
    // Given - upstream fails standings only
    let temp_dir = TempDir::new("integration_test").expect("dir to be created");
    let path = temp_dir.path().to_str().unwrap();
    let season = current_season();

    let mut external_server = ExternalServer::new(8109);
    let external_state = external_server.start(season).await;
    external_state.write().await.failing.push("standings.json");

    let mut server = DashboardServer::new(8110);
    server.start(path, &external_server.get_url(), API_KEY);
    server.retry_until_up().await;

    // When
    let data = server.get_dashboard().await?;

    // Then - standings are mock, every other category stays live
    assert_eq!(data.sources.standings, DataSource::Mock);
    assert_eq!(data.standings, mock_data::standings());

    let live = DataSource::Live { season };
    assert_eq!(data.sources.top_scorers, live);
    assert_eq!(data.sources.fixtures, live);
    assert_eq!(data.sources.results, live);
    assert_eq!(data.top_scorers[0].name, "Mohamed Salah");
    assert_eq!(data.fixtures[0].home, "Manchester City");
    assert_eq!(data.results[0].home, "Crystal Palace");

    // Then - standings were probed for every season
    let calls = external_state.read().await.calls.clone();
    assert_eq!(calls.iter().filter(|e| e.starts_with("standings.json")).count(), 3);

    Ok(())
}

#[tokio::test]
async fn test_rejected_key_falls_back_after_every_season() -> Result<(), Box<dyn std::error::Error>> {
    // Given - upstream rejects the configured key
    let temp_dir = TempDir::new("integration_test").expect("dir to be created");
    let path = temp_dir.path().to_str().unwrap();

    let mut external_server = ExternalServer::new(8105);
    let external_state = external_server.start(current_season()).await;

    let mut server = DashboardServer::new(8106);
    server.start(path, &external_server.get_url(), "wrong-key");
    server.retry_until_up().await;

    // When
    let data = server.get_dashboard().await?;

    // Then - all three seasons were probed before giving up
    assert_eq!(data.sources.standings, DataSource::Mock);
    assert_eq!(data.sources.top_scorers, DataSource::Mock);
    assert_eq!(data.standings, mock_data::standings());
    let calls = external_state.read().await.calls.clone();
    assert_eq!(calls.iter().filter(|e| e.starts_with("standings.json")).count(), 3);
    assert_eq!(calls.iter().filter(|e| e.starts_with("results.json")).count(), 3);

    Ok(())
}

#[tokio::test]
async fn test_selected_team_reorders_page() -> Result<(), Box<dyn std::error::Error>> {
    // Given
    let temp_dir = TempDir::new("integration_test").expect("dir to be created");
    let path = temp_dir.path().to_str().unwrap();

    let mut external_server = ExternalServer::new(8107);
    external_server.start(current_season()).await;

    let mut server = DashboardServer::new(8108);
    server.start(path, &external_server.get_url(), API_KEY);
    server.retry_until_up().await;

    // When - Arsenal selected
    let (status, html) = server.get_page("?team=Arsenal").await?;

    // Then - overview shows the live table entry
    assert_eq!(status, StatusCode::OK);
    let overview = section(&html, "team-overview");
    assert!(overview.contains("<h2>Arsenal</h2>"));
    assert!(overview.contains("<b>League Position</b><p>2</p>"));
    assert!(overview.contains("<b>Points</b><p>36</p>"));

    // Then - Arsenal's fixture moves to the front, the rest keep kickoff order
    let fixtures = section(&html, "fixtures");
    let ipswich = fixtures.find("Ipswich").unwrap();
    let everton = fixtures.find("Everton").unwrap();
    let fulham = fixtures.find("Fulham").unwrap();
    assert!(ipswich < everton && everton < fulham);

    // When - Liverpool selected on the results tab
    let (_, html) = server.get_page("?team=Liverpool&tab=results").await?;

    // Then
    let results = section(&html, "fixtures");
    assert!(results.find("3 - 6").unwrap() < results.find("1 - 5").unwrap());

    // When - unknown team
    let (status, html) = server.get_page("?team=Real+Madrid").await?;

    // Then - overview without table data
    assert_eq!(status, StatusCode::OK);
    assert!(section(&html, "team-overview").contains("<b>League Position</b><p>N/A</p>"));

    Ok(())
}
