use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use backoff::ExponentialBackoff;
use backoff::backoff::Backoff;
use sqlx::{
    Sqlite,
    migrate::MigrateDatabase,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
};

use crate::config::Config;

pub mod entity;
pub mod models;
pub mod repositories;
pub mod value;

/// Opens the pool, creating the database file if needed, and applies
/// pending migrations.
pub async fn init_database(config: &Config) -> Result<SqlitePool> {
    let database_url = config.database_url.as_str();

    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        log::info!("Creating database {}", database_url);
        Sqlite::create_database(database_url)
            .await
            .with_context(|| format!("Error creating database {}", database_url))?;
    }

    let pool = connect_with_retry(config).await?;

    log::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("Migrations completed successfully");

    Ok(pool)
}

fn retry_backoff(config: &Config) -> ExponentialBackoff {
    let initial_interval = Duration::from_millis(200);
    ExponentialBackoff {
        current_interval: initial_interval,
        initial_interval,
        max_interval: Duration::from_secs(config.database_max_retry_delay_secs.max(1)),
        multiplier: 2.0,
        max_elapsed_time: None,
        ..Default::default()
    }
}

/// Connects, retrying transient failures with exponential backoff up to
/// `database_connect_retries` times.
async fn connect_with_retry(config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool_options = SqlitePoolOptions::new().max_connections(config.database_max_connections);

    let mut backoff = retry_backoff(config);
    let mut attempts = 0;

    loop {
        match pool_options.clone().connect_with(options.clone()).await {
            Ok(pool) => return Ok(pool),
            Err(error) => {
                if attempts >= config.database_connect_retries {
                    log::error!(
                        "Database connection failed after {} retries: {}",
                        attempts,
                        error
                    );
                    return Err(error.into());
                }
                attempts += 1;

                match backoff.next_backoff() {
                    Some(delay) => {
                        log::warn!(
                            "Database connection attempt {} failed: {}. Retrying in {} ms",
                            attempts,
                            error,
                            delay.as_millis()
                        );
                        tokio::time::sleep(delay).await;
                    }
                    None => return Err(error.into()),
                }
            }
        }
    }
}
