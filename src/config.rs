use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct ExecutionTimingOptions {
    pub enabled: bool,
    pub include_header: bool,
    pub header_name: String,
    pub log_timings: bool,
}

impl Default for ExecutionTimingOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            include_header: true,
            header_name: "X-Execution-Time-Ms".to_string(),
            log_timings: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_connect_retries: u32,
    pub database_max_retry_delay_secs: u64,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub execution_timing: ExecutionTimingOptions,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        let timing_defaults = ExecutionTimingOptions::default();

        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:./hr.db".to_string()),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 5),
            database_connect_retries: parse_var("DATABASE_CONNECT_RETRIES", 5),
            database_max_retry_delay_secs: parse_var("DATABASE_MAX_RETRY_DELAY_SECS", 15),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            execution_timing: ExecutionTimingOptions {
                enabled: parse_var("EXECUTION_TIMING_ENABLED", timing_defaults.enabled),
                include_header: parse_var(
                    "EXECUTION_TIMING_INCLUDE_HEADER",
                    timing_defaults.include_header,
                ),
                header_name: env::var("EXECUTION_TIMING_HEADER_NAME")
                    .unwrap_or(timing_defaults.header_name),
                log_timings: parse_var("EXECUTION_TIMING_LOG", timing_defaults.log_timings),
            },
        })
    }

    /// Configuration for tests: a throwaway database url and no request logging
    pub fn test_config() -> Result<Self> {
        Ok(Config {
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            database_connect_retries: 0,
            database_max_retry_delay_secs: 1,
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            execution_timing: ExecutionTimingOptions {
                log_timings: false,
                ..ExecutionTimingOptions::default()
            },
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
