use abpilot::cli::commands::{Cli, Commands};
use abpilot::cli::handlers::{
    handle_ab_test_command, handle_config_command, handle_examples_command,
    handle_research_command,
};
use abpilot::cli::utils::{init_logging, print_info};
use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, &cli.log_format);

    let config = cli.client_config();
    let no_color = cli.no_color;

    // Execute command
    match cli.command {
        Commands::AbTest {
            control_users,
            control_conversions,
            treatment_users,
            treatment_conversions,
            export,
            no_analysis,
        } => {
            handle_ab_test_command(
                config,
                control_users,
                control_conversions,
                treatment_users,
                treatment_conversions,
                export,
                no_analysis,
                no_color,
            )
            .await
        }

        Commands::Research { topic, export } => {
            handle_research_command(config, topic, export, no_color).await
        }

        Commands::Examples => {
            handle_examples_command();
            Ok(())
        }

        Commands::Config => {
            handle_config_command(&config);
            Ok(())
        }

        Commands::Info => {
            print_info();
            Ok(())
        }
    }
}
