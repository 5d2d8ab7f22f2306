//! `flavorfare` binary entry point.

use anyhow::{Context, Result};
use clap::Parser;
use flavorfare_cli::commands::execute;
use flavorfare_cli::config::CliConfig;
use flavorfare_cli::{Cli, EXIT_NOT_FOUND};
use flavorfare_core::db::open_db;
use flavorfare_core::{
    init_logging, RestaurantService, RestaurantServiceError, SqliteRestaurantRepository,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<RestaurantServiceError>() {
            Some(RestaurantServiceError::NotFound(id)) => {
                eprintln!("restaurant not found: {id}");
                ExitCode::from(EXIT_NOT_FOUND)
            }
            _ => {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::resolve(cli.db, cli.log_level, cli.log_dir);

    if let Some(log_dir) = &config.log_dir {
        let log_dir = log_dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        init_logging(&config.log_level, log_dir)
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }

    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open database `{}`", config.db_path.display()))?;
    let repo = SqliteRestaurantRepository::try_new(&conn)
        .context("failed to initialize restaurant repository")?;
    let service = RestaurantService::new(repo);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&service, &cli.command, &mut out)
}
