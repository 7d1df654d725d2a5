//! Tests for configuration loading
//!
//! - Explicit config file via PUBMED_GATEWAY_CONFIG
//! - XDG config file discovery
//! - Environment overrides and validation on load

use pubmed_gateway::core::config::Config;
use pubmed_gateway::core::error::GatewayError;
use pubmed_gateway::core::xdg::XdgDirs;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

fn clear_env() {
    for key in [
        "PUBMED_GATEWAY_CONFIG",
        "PUBMED_GATEWAY_CONFIG_DIR",
        "PUBMED_GATEWAY_HOST",
        "PUBMED_GATEWAY_PORT",
        "PUBMED_GATEWAY_UPSTREAM_URL",
        "PUBMED_GATEWAY_TIMEOUT_SEC",
        "PUBMED_GATEWAY_MAX_RESULTS",
        "PUBMED_GATEWAY_CORS_ORIGINS",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_load_from_explicit_file() {
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("gateway.toml");
    fs::write(&path, "[server]\nport = 7000\n[search]\nmax_results = 3\n").unwrap();

    env::set_var("PUBMED_GATEWAY_CONFIG", &path);
    let config = Config::load().unwrap();
    clear_env();

    assert_eq!(config.server.port, 7000);
    assert_eq!(config.search.max_results, 3);
}

#[test]
#[serial]
fn test_load_from_xdg_file() {
    clear_env();
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.toml"),
        "[upstream]\nbase_url = \"http://localhost:9000/eutils\"\n",
    )
    .unwrap();

    env::set_var("PUBMED_GATEWAY_CONFIG_DIR", temp.path());
    let xdg = XdgDirs::new();
    let config = Config::load_with_xdg(&xdg).unwrap();
    clear_env();

    assert_eq!(config.upstream.base_url, "http://localhost:9000/eutils");
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("gateway.toml");
    fs::write(&path, "[upstream]\ntimeout_sec = 10\n").unwrap();

    env::set_var("PUBMED_GATEWAY_CONFIG", &path);
    env::set_var("PUBMED_GATEWAY_TIMEOUT_SEC", "3");
    let config = Config::load().unwrap();
    clear_env();

    assert_eq!(config.upstream.timeout_sec, 3);
}

#[test]
#[serial]
fn test_invalid_values_rejected_on_load() {
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("gateway.toml");
    fs::write(&path, "[search]\nmax_results = 50\n").unwrap();

    env::set_var("PUBMED_GATEWAY_CONFIG", &path);
    let result = Config::load();
    clear_env();

    assert!(matches!(result, Err(GatewayError::ConfigError(_))));
}

#[test]
#[serial]
fn test_malformed_toml_rejected() {
    clear_env();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("gateway.toml");
    fs::write(&path, "[server\nport = ").unwrap();

    env::set_var("PUBMED_GATEWAY_CONFIG", &path);
    let result = Config::load();
    clear_env();

    assert!(matches!(result, Err(GatewayError::TomlError(_))));
}
