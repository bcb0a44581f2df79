pub mod history;

pub use history::{AnalysisKind, AnalysisRecord, HistoryStore};

use thiserror::Error;

use crate::analytics::{ab_test_chart, AnalyticsError, ChartSpec, Group};
use crate::llm::{prompts, AnalysisClient, ClientConfig, ClientError};

pub const ERROR_ENTER_TOPIC: &str = "Please enter a research topic.";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Outcome of one A/B-test analysis run
#[derive(Debug, Clone)]
pub struct AbTestOutcome {
    pub control: Group,
    pub treatment: Group,
    pub control_rate: f64,
    pub treatment_rate: f64,
    pub chart: ChartSpec,
    pub analysis: String,
}

/// One logical user session: owns its history and its client configuration.
///
/// Every component call goes through an explicit session value; concurrent
/// sessions each construct their own and share nothing. Not thread-safe by
/// contract, matching the history store it owns.
#[derive(Debug)]
pub struct Session {
    client: AnalysisClient,
    history: HistoryStore,
}

impl Session {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: AnalysisClient::new(config),
            history: HistoryStore::new(),
        }
    }

    pub fn client(&self) -> &AnalysisClient {
        &self.client
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Run the full A/B-test flow: validate cohorts, build the chart,
    /// compose the prompt, query the remote model, record the outcome.
    ///
    /// The history entry is appended after the remote call completes,
    /// whether it succeeded or failed; a credential failure happens before
    /// any call and leaves history untouched.
    pub async fn run_ab_test(
        &mut self,
        control: Group,
        treatment: Group,
    ) -> SessionResult<AbTestOutcome> {
        let control_rate = control.rate()?;
        let treatment_rate = treatment.rate()?;
        let chart = ab_test_chart(&control, &treatment)?;
        let prompt = prompts::ab_test_prompt(&control, &treatment)?;

        let analysis = self
            .run_query(AnalysisKind::AbTest, &prompt, &prompt)
            .await?;

        Ok(AbTestOutcome {
            control,
            treatment,
            control_rate,
            treatment_rate,
            chart,
            analysis,
        })
    }

    /// Run a market-research query. An empty topic is refused before any
    /// remote call is attempted.
    pub async fn run_research(&mut self, topic: &str) -> SessionResult<String> {
        if topic.trim().is_empty() {
            return Err(SessionError::InvalidInput(ERROR_ENTER_TOPIC.to_string()));
        }

        let prompt = prompts::research_prompt(topic);
        self.run_query(AnalysisKind::MarketResearch, topic.trim(), &prompt)
            .await
    }

    /// `query` is the user-facing question recorded in history; `prompt` is
    /// the full instruction sent to the model.
    async fn run_query(
        &mut self,
        kind: AnalysisKind,
        query: &str,
        prompt: &str,
    ) -> SessionResult<String> {
        match self.client.query(prompt).await {
            Ok(result) => {
                self.history
                    .append(AnalysisRecord::new(kind, query, result.as_str()));
                Ok(result)
            }
            Err(err @ ClientError::MissingCredential { .. }) => Err(err.into()),
            Err(err) => {
                self.history
                    .append(AnalysisRecord::new(kind, query, format!("ERROR: {err}")));
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn offline_config(env_var: &str) -> ClientConfig {
        ClientConfig {
            base_url: "http://127.0.0.1:1/v1".to_string(),
            token_env_var: env_var.to_string(),
            api_token: None,
            timeout_secs: 1,
            ..ClientConfig::default()
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_empty_topic_refused_before_any_call() {
        let env_var = "ABPILOT_SESSION_TEST_TOKEN";
        env::remove_var(env_var);
        let mut session = Session::new(offline_config(env_var));

        let result = session.run_research("   ").await;
        assert!(matches!(result, Err(SessionError::InvalidInput(_))));
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_credential_leaves_history_untouched() {
        let env_var = "ABPILOT_SESSION_TEST_TOKEN";
        env::remove_var(env_var);
        let mut session = Session::new(offline_config(env_var));

        let control = Group::new(1000, 50).unwrap();
        let treatment = Group::new(1000, 65).unwrap();

        let result = session.run_ab_test(control, treatment).await;
        assert!(matches!(
            result,
            Err(SessionError::Client(ClientError::MissingCredential { .. }))
        ));
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_failed_remote_call_is_recorded() {
        let env_var = "ABPILOT_SESSION_TEST_TOKEN";
        env::set_var(env_var, "test-token");
        let mut session = Session::new(offline_config(env_var));

        // Unroutable endpoint: the call is attempted and fails
        let result = session.run_research("retention benchmarks").await;
        assert!(result.is_err());
        assert_eq!(session.history().len(), 1);

        let record = &session.history().all()[0];
        assert_eq!(record.kind, AnalysisKind::MarketResearch);
        assert_eq!(record.query, "retention benchmarks");
        assert!(record.result.starts_with("ERROR:"));

        env::remove_var(env_var);
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_cohort_rejected_without_call() {
        let env_var = "ABPILOT_SESSION_TEST_TOKEN";
        env::remove_var(env_var);
        let mut session = Session::new(offline_config(env_var));

        let control = Group {
            users: 10,
            conversions: 20,
        };
        let treatment = Group::new(10, 1).unwrap();

        let result = session.run_ab_test(control, treatment).await;
        assert!(matches!(result, Err(SessionError::Analytics(_))));
        assert!(session.history().is_empty());
    }
}
