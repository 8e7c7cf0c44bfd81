use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_flag = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        parse_bool(&raw).ok_or_else(|| invalid(var, format!("expected a boolean, got '{raw}'")))
    };

    let openai_api_key = require("OPENAI_API_KEY")?;

    let env = parse_environment(&or_default("TRENDSCRIPT_ENV", "development"))?;
    let bind_addr = parse_addr("TRENDSCRIPT_BIND_ADDR", "0.0.0.0:8001")?;
    let log_level = or_default("TRENDSCRIPT_LOG_LEVEL", "info");

    let llm_base_url = or_default("TRENDSCRIPT_LLM_BASE_URL", "https://api.openai.com/v1");
    let llm_model = or_default("TRENDSCRIPT_LLM_MODEL", "gpt-4o");
    let llm_max_tokens = parse_u32("TRENDSCRIPT_LLM_MAX_TOKENS", "4096")?;
    let analysis_max_tokens = parse_u32("TRENDSCRIPT_ANALYSIS_MAX_TOKENS", "2048")?;
    let llm_timeout_secs = parse_u64("TRENDSCRIPT_LLM_TIMEOUT_SECS", "60")?;
    if llm_timeout_secs == 0 {
        return Err(invalid(
            "TRENDSCRIPT_LLM_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let fallback_on_timeout = parse_flag("TRENDSCRIPT_FALLBACK_ON_TIMEOUT", "true")?;
    let trend_enrichment = parse_flag("TRENDSCRIPT_TREND_ENRICHMENT", "false")?;
    let history_capacity = parse_usize("TRENDSCRIPT_HISTORY_CAPACITY", "200")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        openai_api_key,
        llm_base_url,
        llm_model,
        llm_max_tokens,
        analysis_max_tokens,
        llm_timeout_secs,
        fallback_on_timeout,
        trend_enrichment,
        history_capacity,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TRENDSCRIPT_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
