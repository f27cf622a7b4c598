//! Console front end for the gw2spidy trading post companion.
use anyhow::Context;
use black_lion_trader::{ConsoleRouter, Config, ServiceContainer};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting Black Lion Trader v{}", black_lion_trader::VERSION);

    let config = Config::from_env();

    let services = ServiceContainer::initialize(config)
        .await
        .context("Failed to initialize services")?;
    let services = Arc::new(services);

    let router = ConsoleRouter::new(services);
    router.run(BufReader::new(tokio::io::stdin())).await?;

    Ok(())
}
