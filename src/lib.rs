#![allow(clippy::upper_case_acronyms)]

use std::fmt::Display;

use tracing::log;

pub mod config_handler;
pub mod error;
pub mod models;
pub mod models_api;
pub mod models_external;
pub mod rest_client;
pub mod season_probe;
pub mod standing_service;
pub mod top_scorer_service;
pub mod fixture_service;
pub mod mock_data;
pub mod teams;
pub mod news_service;
pub mod feed_service;
pub mod dashboard_loader;
pub mod layout;
pub mod view_state;
pub mod filters;
pub mod stats_service;
pub mod page_renderer;
pub mod api;

pub trait LogResult<T, E: Display> {
    fn ok_log(self, msg: &str) -> Option<T>;
}

impl<T, E: Display> LogResult<T, E> for Result<T, E> {
    fn ok_log(self, msg: &str) -> Option<T> {
        match self {
            Ok(o) => Some(o),
            Err(e) => {
                log::error!("{}: {}", msg, e);
                None
            }
        }
    }
}
