mod config;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tubelate_core::{DEFAULT_TIMEOUT, HttpSettings, TubelateError, TubelateResult};

pub use config::TubelateConfig;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const CONFIG_ENV: &str = "TUBELATE_CONFIG";
pub const TIMEOUT_ENV: &str = "TUBELATE_TIMEOUT_SECS";

pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    select_config_path(explicit, env::var(CONFIG_ENV).ok())
}

fn select_config_path(explicit: Option<&Path>, from_env: Option<String>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match from_env {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

pub fn load_config(path: &Path) -> TubelateResult<TubelateConfig> {
    log::debug!("loading config from {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| TubelateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> TubelateResult<TubelateConfig> {
    serde_json::from_str(content)
        .map_err(|err| TubelateError::Parse(format!("failed to parse config: {err}")))
}

/// Picks the request timeout: command line, then environment, then config
/// file, then the built-in default.
pub fn resolve_http_settings(
    config: &TubelateConfig,
    cli_timeout: Option<u64>,
) -> TubelateResult<HttpSettings> {
    let timeout = select_timeout(cli_timeout, env::var(TIMEOUT_ENV).ok(), config.timeout_secs)?;
    Ok(HttpSettings::with_timeout(timeout))
}

fn select_timeout(
    cli: Option<u64>,
    from_env: Option<String>,
    from_config: Option<u64>,
) -> TubelateResult<Duration> {
    let env_secs = match from_env {
        Some(value) if !value.trim().is_empty() => Some(value.trim().parse::<u64>().map_err(
            |_| TubelateError::Config(format!("{TIMEOUT_ENV} must be a whole number: {value}")),
        )?),
        _ => None,
    };

    match cli.or(env_secs).or(from_config) {
        Some(0) => Err(TubelateError::Config(
            "timeout must be at least one second".to_string(),
        )),
        Some(secs) => Ok(Duration::from_secs(secs)),
        None => Ok(DEFAULT_TIMEOUT),
    }
}
