//! Environment-based application configuration.

use std::path::PathBuf;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Optional YAML file replacing the built-in benchmark table.
    pub benchmarks_path: Option<PathBuf>,
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// The parsing logic is decoupled from the actual environment so it can be
/// tested with a pure lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let env = match lookup("LVA_ENV").as_deref() {
        Ok("production") => Environment::Production,
        Ok("test") => Environment::Test,
        Ok("development") | Err(_) => Environment::Development,
        Ok(other) => {
            return Err(ConfigError::InvalidEnvVar {
                var: "LVA_ENV".to_string(),
                reason: format!("unknown environment '{other}'"),
            })
        }
    };

    let log_level = lookup("LVA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let benchmarks_path = lookup("LVA_BENCHMARKS_PATH").ok().map(PathBuf::from);

    Ok(AppConfig {
        env,
        log_level,
        benchmarks_path,
    })
}
