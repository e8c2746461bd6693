use std::process::{Command, Child};

use assert_cmd::prelude::CommandCargoExt;
use pl_hub_rs::{config_handler::Config, models_api::dashboard::DashboardData};
use predicates::{function::FnPredicate, Predicate};
use reqwest::StatusCode;

pub struct DashboardServer {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for DashboardServer {
    fn drop(&mut self) {
        if let Some(child) = self.child_process.as_mut() {
            child.kill().expect("Should kill");
        }
    }
}

impl DashboardServer {
    pub fn new(port: u16) -> DashboardServer {
        DashboardServer { port, child_process: None }
    }

    pub fn start(&mut self, path: &str, external_url: &str, api_key: &str) {
        let config = Config {
            port: self.port,
            api_url: external_url.to_string(),
            api_key: api_key.to_string(),
            season_fallbacks: 3,
            request_timeout_s: 2,
            ..Default::default()
        };

        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        let child_process = Command::cargo_bin("pl-hub-rs")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .env_remove("API_FOOTBALL_KEY")
            .env_remove("PORT")
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
    }

    pub async fn get_dashboard(&self) -> Result<DashboardData, Box<dyn std::error::Error>> {
        Ok(reqwest::get(format!("http://localhost:{}/api/dashboard", self.port))
            .await?.json().await?)
    }

    pub async fn get_page(&self, query: &str) -> Result<(StatusCode, String), Box<dyn std::error::Error>> {
        let rsp = reqwest::get(format!("http://localhost:{}/{query}", self.port)).await?;
        Ok((rsp.status(), rsp.text().await?))
    }

    pub async fn retry_until_up(&self) {
        let predicate = predicates::function::function(|e: &String| e == "ok");
        self.retry_until("health", predicate, 100).await;
    }

    pub async fn retry_until<F>(&self, path: &str, predicate: FnPredicate<F, String>, retry_ms: u64) -> String
    where
        F: Fn(&String) -> bool,
    {
        let mut nr_loops = 0;
        loop {
            if let Ok(rsp) = reqwest::get(format!("http://localhost:{}/{path}", self.port)).await {
                if let Ok(body) = rsp.text().await {
                    if predicate.eval(&body) {
                        return body;
                    }
                }
            }
            tokio::time::sleep(std::time::Duration::from_millis(retry_ms)).await;
            nr_loops += 1;
            if nr_loops > 300 {
                panic!("retry failed");
            }
        }
    }
}
