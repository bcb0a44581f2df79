pub mod client;
pub mod config;
pub mod prompts;

pub use client::{AnalysisClient, ClientError};
pub use config::{resolve_credential, ClientConfig};
