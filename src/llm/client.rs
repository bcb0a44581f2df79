use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
            CreateChatCompletionRequestArgs},
    Client,
};
use std::time::Duration;
use thiserror::Error;

use super::config::ClientConfig;

/// Errors from the remote analysis call
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("No API token found: set {env_var} or pass a token explicitly")]
    MissingCredential { env_var: String },

    #[error("Remote analysis failed: {0}")]
    Remote(String),

    #[error("Remote analysis timed out")]
    Timeout,
}

/// Client for the remote chat-completion endpoint.
///
/// Holds only immutable configuration, so it is safe to use from any number
/// of independent sessions. Each `query` builds its own transport client and
/// issues exactly one request; retries are the caller's decision.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    config: ClientConfig,
}

impl AnalysisClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Create a client from environment configuration
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one prompt to the remote model and return its reply verbatim.
    ///
    /// The credential is resolved before any network activity, so a missing
    /// token fails fast without a request. The call is bounded by the
    /// configured timeout; the endpoint's first completion is returned with
    /// no post-processing.
    pub async fn query(&self, prompt: &str) -> Result<String, ClientError> {
        let token = self.config.resolve_token()?;

        let openai_config = OpenAIConfig::new()
            .with_api_key(&token)
            .with_api_base(&self.config.base_url);
        let client = Client::with_config(openai_config);

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| ClientError::Remote(e.to_string()))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.config.model)
            .messages(vec![ChatCompletionRequestMessage::User(message)])
            .build()
            .map_err(|e| ClientError::Remote(e.to_string()))?;

        tracing::debug!(
            model = %self.config.model,
            prompt_chars = prompt.len(),
            "Sending analysis request"
        );

        let response = tokio::time::timeout(
            Duration::from_secs(self.config.timeout_secs),
            client.chat().create(request),
        )
        .await
        .map_err(|_| ClientError::Timeout)?
        .map_err(|e| ClientError::Remote(e.to_string()))?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_ref())
            .ok_or_else(|| ClientError::Remote("Response contained no completion".to_string()))?
            .to_string();

        tracing::debug!(response_chars = content.len(), "Received analysis response");

        Ok(content)
    }
}
