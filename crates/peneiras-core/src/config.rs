use crate::app_config::{AppConfig, Environment};

/// Errors produced while loading application configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any configured value fails to parse or validate.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if any configured value fails to parse or validate.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("PENEIRAS_ENV", "development"))?;

    let bind_addr = {
        let raw = or_default("PENEIRAS_BIND_ADDR", "0.0.0.0:3000");
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "PENEIRAS_BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?
    };

    let log_level = or_default("PENEIRAS_LOG_LEVEL", "info");

    let viacep_base_url = or_default("PENEIRAS_VIACEP_BASE_URL", "https://viacep.com.br/ws");
    if !viacep_base_url.starts_with("http://") && !viacep_base_url.starts_with("https://") {
        return Err(ConfigError::InvalidEnvVar {
            var: "PENEIRAS_VIACEP_BASE_URL".to_string(),
            reason: "must start with http:// or https://".to_string(),
        });
    }

    let request_timeout_secs = {
        let raw = or_default("PENEIRAS_REQUEST_TIMEOUT_SECS", "10");
        let parsed = raw
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "PENEIRAS_REQUEST_TIMEOUT_SECS".to_string(),
                reason: e.to_string(),
            })?;
        if parsed == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: "PENEIRAS_REQUEST_TIMEOUT_SECS".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        parsed
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        viacep_base_url,
        request_timeout_secs,
    })
}

fn parse_environment(raw: &str) -> Result<Environment, ConfigError> {
    match raw {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PENEIRAS_ENV".to_string(),
            reason: format!("unknown environment: {other}"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
