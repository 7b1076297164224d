use std::env;

use serial_test::serial;

use hr_api::config::Config;

const KEYS: &[&str] = &[
    "DATABASE_URL",
    "DATABASE_MAX_CONNECTIONS",
    "DATABASE_CONNECT_RETRIES",
    "DATABASE_MAX_RETRY_DELAY_SECS",
    "HOST",
    "PORT",
    "ENVIRONMENT",
    "EXECUTION_TIMING_ENABLED",
    "EXECUTION_TIMING_INCLUDE_HEADER",
    "EXECUTION_TIMING_HEADER_NAME",
    "EXECUTION_TIMING_LOG",
];

/// Clears every config variable, runs `f`, then restores the originals.
fn with_clean_env(f: impl FnOnce()) {
    let original: Vec<(&str, Option<String>)> =
        KEYS.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in KEYS {
        unsafe { env::remove_var(key) };
    }

    f();

    for (key, value) in original {
        unsafe {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
    }
}

#[test]
#[serial]
fn test_config_defaults() {
    with_clean_env(|| {
        let config = Config::from_env_only().unwrap();

        assert_eq!(config.database_url, "sqlite:./hr.db");
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.database_connect_retries, 5);
        assert_eq!(config.database_max_retry_delay_secs, 15);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "development");
        assert!(config.execution_timing.enabled);
        assert!(config.execution_timing.include_header);
        assert_eq!(config.execution_timing.header_name, "X-Execution-Time-Ms");
        assert!(config.execution_timing.log_timings);
    });
}

#[test]
#[serial]
fn test_config_custom_values() {
    with_clean_env(|| {
        unsafe {
            env::set_var("DATABASE_URL", "sqlite:./custom.db");
            env::set_var("DATABASE_MAX_CONNECTIONS", "12");
            env::set_var("DATABASE_CONNECT_RETRIES", "2");
            env::set_var("DATABASE_MAX_RETRY_DELAY_SECS", "30");
            env::set_var("HOST", "0.0.0.0");
            env::set_var("PORT", "3000");
            env::set_var("ENVIRONMENT", "production");
            env::set_var("EXECUTION_TIMING_INCLUDE_HEADER", "false");
            env::set_var("EXECUTION_TIMING_HEADER_NAME", "X-Elapsed");
        }

        let config = Config::from_env_only().unwrap();

        assert_eq!(config.database_url, "sqlite:./custom.db");
        assert_eq!(config.database_max_connections, 12);
        assert_eq!(config.database_connect_retries, 2);
        assert_eq!(config.database_max_retry_delay_secs, 30);
        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert!(config.is_production());
        assert!(!config.is_development());
        assert!(config.execution_timing.enabled);
        assert!(!config.execution_timing.include_header);
        assert_eq!(config.execution_timing.header_name, "X-Elapsed");
    });
}

#[test]
#[serial]
fn test_config_unparseable_values_fall_back() {
    with_clean_env(|| {
        unsafe {
            env::set_var("PORT", "not-a-port");
            env::set_var("DATABASE_MAX_CONNECTIONS", "-3");
            env::set_var("EXECUTION_TIMING_LOG", "sometimes");
        }

        let config = Config::from_env_only().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.database_max_connections, 5);
        assert!(config.execution_timing.log_timings);
    });
}

#[test]
fn test_test_config() {
    let config = Config::test_config().unwrap();

    assert_eq!(config.environment, "test");
    assert!(!config.is_production());
    assert!(!config.is_development());
    assert!(!config.execution_timing.log_timings);
    assert_eq!(config.database_connect_retries, 0);
}
