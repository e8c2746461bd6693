use std::net::SocketAddr;

use anyhow::Context;
use axum::{Router, extract::{Query, State}, response::Html, Json};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::log;

use crate::{dashboard_loader::DashboardLoader, models_api::dashboard::DashboardData, page_renderer::PageRenderer, view_state::{DashboardState, ViewQuery}};

#[derive(Clone)]
pub struct ApiState {
    pub loader: DashboardLoader,
}

pub struct Api;
impl Api {
    pub fn router(loader: DashboardLoader) -> Router {
        let state = ApiState { loader };
        Router::new()
            .route("/", axum::routing::get(Api::get_dashboard_page))
            .route("/api/dashboard", axum::routing::get(Api::get_dashboard))
            .route("/health", axum::routing::get(Api::health))
            .with_state(state)
            .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
            )
    }

    pub async fn serve(port: u16, loader: DashboardLoader) -> anyhow::Result<()> {
        let app = Api::router(loader);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        log::info!("[API] Listening on {}", addr);
        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .with_context(|| format!("Server on {addr} stopped"))
    }

    async fn health() -> &'static str {
        "ok"
    }

    /// Every request reloads, nothing is cached between page views.
    async fn get_dashboard_page(Query(query): Query<ViewQuery>, State(state): State<ApiState>) -> Html<String> {
        let view: DashboardState = query.into();
        let data = state.loader.load(state.loader.today()).await;
        Html(PageRenderer::render(&data, &view))
    }

    async fn get_dashboard(State(state): State<ApiState>) -> Json<DashboardData> {
        Json(state.loader.load(state.loader.today()).await)
    }
}
