use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::llm::ClientConfig;

#[derive(Parser, Debug)]
#[command(
    name = "abpilot",
    about = "Conversational A/B-test analytics and market research via remote LLM analysis",
    version,
    author
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for logs
    #[arg(long, default_value = "text", global = true)]
    pub log_format: String,

    /// API token for the inference endpoint (overrides the environment)
    #[arg(long, global = true, env = "DIFFBOT_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Model identifier to request
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible endpoint
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Remote request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolved client configuration: environment first, flags override
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();

        if let Some(token) = &self.api_token {
            config.api_token = Some(token.clone());
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }

        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an A/B test: rates, chart, and remote significance analysis
    AbTest {
        /// Users in the control group
        #[arg(long, default_value_t = 1000)]
        control_users: u64,

        /// Conversions in the control group
        #[arg(long, default_value_t = 50)]
        control_conversions: u64,

        /// Users in the treatment group
        #[arg(long, default_value_t = 1000)]
        treatment_users: u64,

        /// Conversions in the treatment group
        #[arg(long, default_value_t = 65)]
        treatment_conversions: u64,

        /// Write the results as CSV to this file (or directory)
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Skip the remote analysis; print rates and chart only
        #[arg(long)]
        no_analysis: bool,
    },

    /// Research a free-text market topic
    Research {
        /// The research topic
        topic: String,

        /// Write the result as CSV to this file (or directory)
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// List example research topics
    Examples,

    /// Display the effective configuration
    Config,

    /// Show information about abpilot
    Info,
}
