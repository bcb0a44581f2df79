use serde::{Deserialize, Serialize};
use std::env;

use super::client::ClientError;

/// Default inference endpoint (Diffbot's OpenAI-compatible API)
pub const DEFAULT_BASE_URL: &str = "https://llm.diffbot.com/rag/v1";
pub const DEFAULT_MODEL: &str = "diffbot-small-xl";
pub const API_TOKEN_ENV_VAR: &str = "DIFFBOT_API_TOKEN";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Configuration for the remote analysis client, immutable per call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the OpenAI-compatible chat-completion endpoint
    pub base_url: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Environment variable consulted when no explicit token is given
    pub token_env_var: String,

    /// Explicit API token; takes precedence over the environment
    pub api_token: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            token_env_var: API_TOKEN_ENV_VAR.to_string(),
            api_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, reading `.env` first
    pub fn from_env() -> Self {
        Self::from_env_internal(true)
    }

    #[cfg(test)]
    fn from_env_no_dotenv() -> Self {
        Self::from_env_internal(false)
    }

    fn from_env_internal(load_dotenv: bool) -> Self {
        if load_dotenv {
            let _ = dotenv::dotenv();
        }

        let mut config = Self::default();

        if let Ok(base_url) = env::var("DIFFBOT_BASE_URL") {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }

        if let Ok(model) = env::var("DIFFBOT_MODEL") {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }

        if let Ok(timeout) = env::var("LLM_REQUEST_TIMEOUT") {
            if let Ok(timeout_secs) = timeout.parse::<u64>() {
                config.timeout_secs = timeout_secs;
            }
        }

        config
    }

    /// Resolve the effective API token for this configuration
    pub fn resolve_token(&self) -> Result<String, ClientError> {
        resolve_credential(self.api_token.as_deref(), &self.token_env_var)
    }
}

/// Resolve the effective credential: an explicit token wins, otherwise the
/// named environment variable is consulted. Blank values count as absent.
pub fn resolve_credential(explicit: Option<&str>, env_var: &str) -> Result<String, ClientError> {
    if let Some(token) = explicit {
        if !token.trim().is_empty() {
            return Ok(token.to_string());
        }
    }

    match env::var(env_var) {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(ClientError::MissingCredential {
            env_var: env_var.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const TEST_ENV_VAR: &str = "ABPILOT_TEST_TOKEN";

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.token_env_var, API_TOKEN_ENV_VAR);
        assert_eq!(config.api_token, None);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    #[serial]
    fn test_explicit_token_wins_over_env() {
        env::set_var(TEST_ENV_VAR, "from-env");

        let token = resolve_credential(Some("explicit"), TEST_ENV_VAR).unwrap();
        assert_eq!(token, "explicit");

        env::remove_var(TEST_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_env_token_used_when_no_explicit() {
        env::set_var(TEST_ENV_VAR, "from-env");

        let token = resolve_credential(None, TEST_ENV_VAR).unwrap();
        assert_eq!(token, "from-env");

        env::remove_var(TEST_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_missing_credential() {
        env::remove_var(TEST_ENV_VAR);

        let result = resolve_credential(None, TEST_ENV_VAR);
        assert!(matches!(
            result,
            Err(ClientError::MissingCredential { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_blank_tokens_count_as_absent() {
        env::set_var(TEST_ENV_VAR, "   ");

        let result = resolve_credential(Some(""), TEST_ENV_VAR);
        assert!(matches!(
            result,
            Err(ClientError::MissingCredential { .. })
        ));

        env::remove_var(TEST_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_with_overrides() {
        env::set_var("DIFFBOT_BASE_URL", "https://custom.example.com/v1");
        env::set_var("DIFFBOT_MODEL", "diffbot-large-xl");
        env::set_var("LLM_REQUEST_TIMEOUT", "120");

        let config = ClientConfig::from_env_no_dotenv();
        assert_eq!(config.base_url, "https://custom.example.com/v1");
        assert_eq!(config.model, "diffbot-large-xl");
        assert_eq!(config.timeout_secs, 120);

        env::remove_var("DIFFBOT_BASE_URL");
        env::remove_var("DIFFBOT_MODEL");
        env::remove_var("LLM_REQUEST_TIMEOUT");
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout_falls_back() {
        env::remove_var("DIFFBOT_BASE_URL");
        env::remove_var("DIFFBOT_MODEL");
        env::set_var("LLM_REQUEST_TIMEOUT", "not-a-number");

        let config = ClientConfig::from_env_no_dotenv();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        env::remove_var("LLM_REQUEST_TIMEOUT");
    }
}
