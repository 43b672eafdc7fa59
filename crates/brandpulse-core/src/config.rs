use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid, or if enrichment is enabled
/// without `LLM_API_KEY` set.
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
/// Returns `ConfigError` if values are invalid, or if enrichment is enabled
/// without `LLM_API_KEY` set.
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
    let optional = |var: &str| -> Option<String> { lookup(var).ok() };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected true/false, got '{other}'"),
            }),
        }
    };

    let config = AppConfig {
        log_level: or_default("LOG_LEVEL", "info"),
        llm_api_key: optional("LLM_API_KEY"),
        llm_base_url: optional("LLM_BASE_URL"),
        llm_model: or_default("LLM_MODEL", "gpt-4o-mini"),
        llm_request_timeout_secs: parse_u64("LLM_REQUEST_TIMEOUT_SECS", "30")?,
        llm_max_retries: parse_u32("LLM_MAX_RETRIES", "3")?,
        analytics_max_concurrent: parse_usize("ANALYTICS_MAX_CONCURRENT", "8")?,
        enrichment_enabled: parse_bool("ENRICHMENT_ENABLED", "false")?,
    };

    if config.enrichment_enabled && config.llm_api_key.is_none() {
        return Err(ConfigError::MissingEnvVar("LLM_API_KEY".to_string()));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from<'a>(map: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Result<String, std::env::VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(std::env::VarError::NotPresent)
        }
    }

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let env = HashMap::new();
        let config = build_app_config(lookup_from(&env)).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.llm_model, "gpt-4o-mini");
        assert_eq!(config.llm_request_timeout_secs, 30);
        assert_eq!(config.llm_max_retries, 3);
        assert_eq!(config.analytics_max_concurrent, 8);
        assert!(!config.enrichment_enabled);
        assert!(config.llm_api_key.is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let env = HashMap::from([
            ("LLM_MODEL", "gpt-4o"),
            ("ANALYTICS_MAX_CONCURRENT", "32"),
            ("LLM_REQUEST_TIMEOUT_SECS", "10"),
        ]);
        let config = build_app_config(lookup_from(&env)).unwrap();
        assert_eq!(config.llm_model, "gpt-4o");
        assert_eq!(config.analytics_max_concurrent, 32);
        assert_eq!(config.llm_request_timeout_secs, 10);
    }

    #[test]
    fn invalid_number_is_rejected() {
        let env = HashMap::from([("ANALYTICS_MAX_CONCURRENT", "lots")]);
        let err = build_app_config(lookup_from(&env)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar { ref var, .. } if var == "ANALYTICS_MAX_CONCURRENT"
        ));
    }

    #[test]
    fn invalid_bool_is_rejected() {
        let env = HashMap::from([("ENRICHMENT_ENABLED", "yes")]);
        let err = build_app_config(lookup_from(&env)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar { .. }));
    }

    #[test]
    fn enrichment_requires_api_key() {
        let env = HashMap::from([("ENRICHMENT_ENABLED", "true")]);
        let err = build_app_config(lookup_from(&env)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingEnvVar(ref var) if var == "LLM_API_KEY"
        ));
    }

    #[test]
    fn enrichment_with_api_key_is_accepted() {
        let env = HashMap::from([("ENRICHMENT_ENABLED", "true"), ("LLM_API_KEY", "sk-test")]);
        let config = build_app_config(lookup_from(&env)).unwrap();
        assert!(config.enrichment_enabled);
        assert_eq!(config.llm_api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let env = HashMap::from([("LLM_API_KEY", "sk-secret")]);
        let config = build_app_config(lookup_from(&env)).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("[redacted]"));
    }
}
