//! Offline unit tests for autoreel-db pool configuration.
//! These tests do not require a live database connection.

use autoreel_core::{AppConfig, Environment};
use autoreel_db::PoolConfig;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: Some("postgres://example".to_string()),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8000),
        log_level: "info".to_string(),
        api_url: "http://localhost:8000/api/v1".to_string(),
        api_token: None,
        api_keys: vec![],
        cors_origins: vec!["http://localhost:3000".to_string()],
        rate_limit_per_minute: 100,
        request_timeout_secs: 30,
        log_retention_days: 30,
        seed_path: PathBuf::from("./config/seed.yaml"),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}
