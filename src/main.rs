use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use venue_detail_page::config::Config;
use venue_detail_page::controller::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting venue detail server in {} against {}", config.environment, config.api_base_url);

    let app_state = AppState::from_config(&config)?;
    controller::serve(app_state, &config).await
}
