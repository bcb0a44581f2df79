pub mod config;
pub mod research;

pub use ab_test::handle_ab_test_command;
pub use config::handle_config_command;
pub use research::{handle_examples_command, handle_research_command};
