//! Configuration management for the Sigiriya guide.
//!
//! Configuration can be set via environment variables (a `.env` file is
//! loaded first when present):
//! - `GROQ_API_KEY` - API key for the Groq LLM endpoint. Checked when a model call is made.
//! - `SERPER_API_KEY` - API key for the Serper web search tool. Checked when the tool runs.
//! - `SIGIRIYA_MODEL` - Optional. Model binding. Defaults to `groq/llama-3.3-70b-versatile`.
//! - `LLM_TEMPERATURE` - Optional. Sampling temperature. Defaults to `0`.
//! - `GROQ_BASE_URL` - Optional. OpenAI-compatible base URL. Defaults to `https://api.groq.com/openai/v1`.
//! - `HOST` - Optional. Server host. Defaults to `0.0.0.0`.
//! - `PORT` - Optional. Server port. Defaults to `8001`.
//! - `MAX_ITERATIONS` - Optional. Maximum agent loop iterations. Defaults to `20`.

use std::sync::Once;

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "groq/llama-3.3-70b-versatile";
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const OPENAI_KEY_PLACEHOLDER: &str = "NA";

static ENV_DEFAULTS: Once = Once::new();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key
    pub groq_api_key: Option<String>,

    /// Serper API key used by the web search tool
    pub serper_api_key: Option<String>,

    /// Model binding in provider-prefixed form
    pub model: String,

    /// Sampling temperature for every model call
    pub temperature: f32,

    /// Base URL of the OpenAI-compatible chat completions API
    pub groq_base_url: String,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Maximum model calls per agent run
    pub max_iterations: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `get`, which returns the raw value of a variable.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| get(name).filter(|v| !v.trim().is_empty());

        let groq_api_key = non_empty("GROQ_API_KEY");
        let serper_api_key = non_empty("SERPER_API_KEY");

        let model = get("SIGIRIYA_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = get("LLM_TEMPERATURE")
            .unwrap_or_else(|| "0".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("LLM_TEMPERATURE".to_string(), format!("{}", e)))?;

        let groq_base_url =
            get("GROQ_BASE_URL").unwrap_or_else(|| DEFAULT_GROQ_BASE_URL.to_string());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = get("PORT")
            .unwrap_or_else(|| "8001".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let max_iterations: usize = get("MAX_ITERATIONS")
            .unwrap_or_else(|| "20".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("MAX_ITERATIONS".to_string(), format!("{}", e)))?;

        if max_iterations == 0 {
            return Err(ConfigError::InvalidValue(
                "MAX_ITERATIONS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            groq_api_key,
            serper_api_key,
            model,
            temperature,
            groq_base_url,
            host,
            port,
            max_iterations,
        })
    }

    /// Create a config with default values and no credentials (useful for testing).
    pub fn new(model: String) -> Self {
        Self {
            groq_api_key: None,
            serper_api_key: None,
            model,
            temperature: 0.0,
            groq_base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 8001,
            max_iterations: 20,
        }
    }
}

/// One-time process environment setup.
///
/// Sets `OPENAI_API_KEY` to the placeholder `NA` when it is unset, so
/// libraries that insist on an OpenAI key at startup do not abort. Must run
/// before the server accepts requests; later calls are no-ops.
pub fn apply_env_defaults() {
    ENV_DEFAULTS.call_once(|| {
        if let Some(value) = openai_key_default(std::env::var_os("OPENAI_API_KEY").is_some()) {
            std::env::set_var("OPENAI_API_KEY", value);
            tracing::debug!("OPENAI_API_KEY not set; using placeholder");
        }
    });
}

/// Value to install for `OPENAI_API_KEY`, or `None` to keep the existing one.
fn openai_key_default(already_set: bool) -> Option<&'static str> {
    (!already_set).then_some(OPENAI_KEY_PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn new_uses_service_defaults() {
        let config = Config::new(DEFAULT_MODEL.to_string());
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8001);
        assert_eq!(config.temperature, 0.0);
        assert!(config.groq_api_key.is_none());
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8001);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.model, "groq/llama-3.3-70b-versatile");
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.max_iterations, 20);
        assert_eq!(config.groq_base_url, DEFAULT_GROQ_BASE_URL);
        assert!(config.groq_api_key.is_none());
        assert!(config.serper_api_key.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("SIGIRIYA_MODEL", "groq/llama-3.1-8b-instant"),
            ("LLM_TEMPERATURE", "0.5"),
            ("PORT", "9000"),
            ("MAX_ITERATIONS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk_test"));
        assert_eq!(config.model, "groq/llama-3.1-8b-instant");
        assert_eq!(config.temperature, 0.5);
        assert_eq!(config.port, 9000);
        assert_eq!(config.max_iterations, 3);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[("PORT", "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref name, _) if name == "PORT"));
    }

    #[test]
    fn zero_iterations_is_rejected() {
        let err = Config::from_lookup(lookup(&[("MAX_ITERATIONS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref name, _) if name == "MAX_ITERATIONS"));
    }

    #[test]
    fn blank_api_keys_count_as_unset() {
        let config = Config::from_lookup(lookup(&[
            ("GROQ_API_KEY", "  "),
            ("SERPER_API_KEY", ""),
        ]))
        .unwrap();
        assert!(config.groq_api_key.is_none());
        assert!(config.serper_api_key.is_none());
    }

    #[test]
    fn openai_placeholder_only_when_unset() {
        assert_eq!(openai_key_default(false), Some("NA"));
        assert_eq!(openai_key_default(true), None);
    }
}
