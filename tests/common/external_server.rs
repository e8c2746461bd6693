use std::{net::SocketAddr, sync::Arc};

use axum::{Router, extract::{Query, State}, response::{IntoResponse, Response}, body::StreamBody, routing::get, http::HeaderMap, Json};
use chrono::NaiveDate;
use pl_hub_rs::models::Season;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tokio::{sync::RwLock, task::JoinHandle};
use tokio_util::io::ReaderStream;

pub const API_KEY: &str = "integration-key";

#[derive(Deserialize)]
struct FootballQuery {
    season: i32,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

#[derive(Clone)]
pub struct AppState {
    /// The only season the mock answers, every other one gets a plan error.
    pub available_season: Season,
    /// Files answered with a server error whatever the season.
    pub failing: Vec<&'static str>,
    pub calls: Vec<String>,
}

pub struct ExternalServer {
    port: u16,
    handles: Vec<JoinHandle<()>>,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl ExternalServer {
    pub fn new(port: u16) -> ExternalServer {
        ExternalServer { port, handles: vec![] }
    }

    pub async fn start(&mut self, available_season: Season) -> Arc<RwLock<AppState>> {
        let external_mock_state = Arc::new(RwLock::new(AppState { available_season, failing: vec![], calls: vec![] }));
        let external_mock = {
            let port = self.port;
            let state = external_mock_state.clone();
            tokio::spawn(async move { ExternalServer::serve_external_data(state, port).await })
        };
        self.handles.push(external_mock);

        tokio::time::sleep(std::time::Duration::from_secs(1)).await; // wait for mock to start

        external_mock_state
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    async fn serve_external_data(state: Arc<RwLock<AppState>>, port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/standings", get(ExternalServer::get_standings_file))
            .route("/players/topscorers", get(ExternalServer::get_top_scorers_file))
            .route("/fixtures", get(ExternalServer::get_fixtures_file))
            .with_state(state);

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn get_standings_file(headers: HeaderMap, query: Query<FootballQuery>, State(state): State<Arc<RwLock<AppState>>>) -> impl IntoResponse {
        ExternalServer::get_checked("standings.json", headers, &query, state).await
    }

    async fn get_top_scorers_file(headers: HeaderMap, query: Query<FootballQuery>, State(state): State<Arc<RwLock<AppState>>>) -> impl IntoResponse {
        ExternalServer::get_checked("topscorers.json", headers, &query, state).await
    }

    /// The upcoming window spans a month, the recent one a week.
    async fn get_fixtures_file(headers: HeaderMap, query: Query<FootballQuery>, State(state): State<Arc<RwLock<AppState>>>) -> impl IntoResponse {
        let is_recent = match (query.from, query.to) {
            (Some(from), Some(to)) => (to - from).num_days() <= 7,
            _ => false,
        };
        let file = if is_recent { "results.json" } else { "fixtures.json" };
        ExternalServer::get_checked(file, headers, &query, state).await
    }

    async fn get_checked(file: &str, headers: HeaderMap, query: &FootballQuery, state: Arc<RwLock<AppState>>) -> Result<impl IntoResponse, Response> {
        let (available_season, is_failing) = {
            let mut state = state.write().await;
            state.calls.push(format!("{file}:{}", query.season));
            (state.available_season, state.failing.iter().any(|e| *e == file))
        };

        if is_failing {
            return Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string()).into_response());
        }

        if headers.get("x-rapidapi-key").and_then(|e| e.to_str().ok()) != Some(API_KEY) {
            return Err(Json(json!({ "errors": { "token": "Error/Missing application key." }, "response": [] })).into_response());
        }
        if query.season != available_season.0 {
            return Err(Json(json!({ "errors": { "plan": "Free plans do not have access to this season, try from 2021 to 2023." }, "response": [] })).into_response());
        }
        ExternalServer::get_file_from(format!("./tests/integration/external/{file}")).await
            .map_err(|e| e.into_response())
    }

    async fn get_file_from(path: String) -> Result<impl IntoResponse, (StatusCode, String)> {
        let file = match tokio::fs::File::open(path).await {
            Ok(file) => file,
            Err(err) => return Err((StatusCode::NOT_FOUND, format!("File not found: {}", err))),
        };
        let stream = ReaderStream::new(file);
        let body = StreamBody::new(stream);
        Ok(body)
    }
}
