//! # vibecheck-cli
//!
//! Sends text to a running `vibecheck-server` and prints the vibe report.

mod api_client;

use anyhow::{bail, Context, Result};
use api_client::{ApiClient, ModerateReply};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vibecheck::VibeReport;

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze the vibe of a piece of text
    Analyze(AnalyzeArgs),
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// The text to analyze. Read from stdin when neither this nor --file is given.
    text: Option<String>,
    /// Read the text from a file instead
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,
    /// Base URL of the vibecheck server
    #[arg(long, env = "VIBECHECK_SERVER_URL", default_value = "http://localhost:3000")]
    server: String,
    /// Print the raw JSON response instead of the report
    #[arg(long)]
    json: bool,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => handle_analyze(args).await,
    }
}

// --- Command Handlers ---

fn read_text(args: &AnalyzeArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    Ok(text)
}

async fn handle_analyze(args: AnalyzeArgs) -> Result<()> {
    let text = read_text(&args)?;
    if text.is_empty() {
        bail!("Please enter some text to analyze.");
    }

    let client = ApiClient::new(args.server.as_str());
    match client.moderate(&text).await? {
        ModerateReply::Envelope(envelope) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&envelope)?);
            } else {
                print!("{}", VibeReport::from_response(&envelope));
            }
        }
        ModerateReply::Failed {
            status,
            error,
            details,
        } => {
            eprintln!("⚠️ Error: {error}");
            if let Some(details) = details {
                eprintln!("   ({details})");
            }
            bail!("Server responded with HTTP {status}");
        }
    }

    Ok(())
}
