use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use crate::cli::utils::{analysis_spinner, write_export};
use crate::export::{export_rows, record_row, suggested_filename};
use crate::llm::{prompts::RESEARCH_EXAMPLES, ClientConfig};
use crate::report::TerminalReporter;
use crate::session::Session;

pub async fn handle_research_command(
    config: ClientConfig,
    topic: String,
    export: Option<PathBuf>,
    no_color: bool,
) -> Result<()> {
    let mut session = Session::new(config);

    info!(topic = %topic, "Starting market research");

    let spinner = analysis_spinner("Researching topic...");
    let result = session.run_research(&topic).await;
    spinner.finish_and_clear();

    let result = result.context("Research failed")?;

    TerminalReporter::new()
        .with_colors(!no_color)
        .print_research(&topic, &result);

    if let Some(target) = export {
        // The session recorded the completed call; export that entry
        let record = session
            .history()
            .all()
            .last()
            .context("No history entry for completed research")?;
        let csv = export_rows(&[record_row(record)], suggested_filename("research"))?;
        let written = write_export(&csv, &target)?;
        println!("\nResults exported to {}", written.display());
    }

    Ok(())
}

pub fn handle_examples_command() {
    println!("\n{}", "Example research topics".bold());
    for (title, text) in RESEARCH_EXAMPLES {
        println!("\n{}", title.bright_blue().bold());
        println!("  {}", text);
    }
    println!();
}
