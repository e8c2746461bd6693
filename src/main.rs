use anyhow::Context;
use pl_hub_rs::api::Api;
use pl_hub_rs::config_handler::Config;
use pl_hub_rs::dashboard_loader::DashboardLoader;
use pl_hub_rs::rest_client::FootballClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "info,hyper=info")
    }

    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::load().context("Unable to load config")?;
    let client = FootballClient::new(&config).context("Unable to create API client")?;
    let loader = DashboardLoader::new(client, &config);

    Api::serve(config.port, loader).await
}
