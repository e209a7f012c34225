use clap::Parser;
use tracing::{error, info};

use landlord_infrastructure::database::connection;
use landlord_shared::config::AppConfig;
use landlord_shared::telemetry::init_telemetry;

mod cli;
mod commands;
mod output;
mod state;

use cli::{Cli, Command, DbCommand};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(url) = cli.database_url.clone() {
        config.database.url = url;
    }

    // Keep the guard alive until exit so buffered log lines are flushed
    let _guard = init_telemetry(&config.log)?;

    let pool = connection::connect(&config.database).await?;

    if let Command::Db(DbCommand::Init) = cli.command {
        info!("Database ready at {}", config.database.url);
        println!("Database at {} is up to date", config.database.url);
        pool.close().await;
        return Ok(());
    }

    let state = AppState::new(pool.clone());
    let result = commands::dispatch(&state, cli.command, cli.json).await;
    pool.close().await;

    if let Err(e) = &result {
        error!("Command failed: {:#}", e);
    }
    result
}
