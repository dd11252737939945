//! CLI for the seoscope binary.

use crate::analysis::Evaluator;
use crate::config::Config;
use crate::server;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "seoscope", version, about = "On-page SEO analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the web server with the analyzer form.
    Serve {
        /// Port to listen on (overrides SEOSCOPE_PORT).
        #[arg(long)]
        port: Option<u16>,
    },
    /// Analyze a single URL and print the JSON report to stdout.
    Audit {
        /// Target URL, e.g. https://example.com
        url: String,
    },
}

/// Dispatch a parsed CLI invocation.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Serve { port } => {
            let mut config = Config::from_env()?;
            if let Some(port) = port {
                config.port = port;
            }
            server::serve(&config).await
        }
        Command::Audit { url } => audit(&url).await,
    }
}

/// Run one analysis and print `{"score": ..., "suggestions": [...]}`.
async fn audit(url: &str) -> Result<()> {
    let evaluator = Evaluator::default();

    let (score, suggestions) = match evaluator.evaluate(url).await {
        Ok(report) => (report.score, report.suggestions()),
        Err(e) => (0, vec![format!("Error analyzing website: {e}")]),
    };

    let out = serde_json::json!({ "score": score, "suggestions": suggestions });
    println!(
        "{}",
        serde_json::to_string_pretty(&out).context("serializing report")?
    );

    Ok(())
}
