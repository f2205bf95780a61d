use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::info;

use dialscope::analyzer;
use dialscope::catalog::DetectorCatalog;
use dialscope::ingest;
use dialscope::output::terminal;
use dialscope::report::CaseReport;
use dialscope::timeline::build_timeline;
use dialscope::triage::score_message;

/// Dialscope: forensic risk triage for call and message records.
///
/// Scores a case file of call-detail and message records against a
/// catalog of telephony-fraud and phishing detectors.
#[derive(Parser)]
#[command(name = "dialscope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a case file and print the risk report
    Analyze {
        /// JSON case file with "calls" and "messages" arrays
        case_file: PathBuf,

        /// Print the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Score a single message text
    Triage {
        /// The message content to score
        text: String,

        /// Print the verdict as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Reconstruct the chronological event timeline of a case file
    Timeline {
        /// JSON case file with "calls" and "messages" arrays
        case_file: PathBuf,

        /// Print the timeline as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Generate a full case report with an integrity hash (JSON)
    Report {
        /// JSON case file with "calls" and "messages" arrays
        case_file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dialscope=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { case_file, json } => {
            let store = ingest::load_case(&case_file)?;
            let catalog = DetectorCatalog::standard()?;
            let report = analyzer::analyze(&store, &catalog);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_report(&report);
            }
        }

        Commands::Triage { text, json } => {
            let triage = score_message(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&triage)?);
            } else {
                terminal::display_triage(&text, &triage);
            }
        }

        Commands::Timeline { case_file, json } => {
            let store = ingest::load_case(&case_file)?;
            let timeline = build_timeline(&store);
            if json {
                println!("{}", serde_json::to_string_pretty(&timeline)?);
            } else {
                terminal::display_timeline(&timeline);
            }
        }

        Commands::Report { case_file } => {
            let store = ingest::load_case(&case_file)?;
            let catalog = DetectorCatalog::standard()?;
            let now = Local::now().naive_local();
            let report = analyzer::analyze_at(&store, &catalog, now);
            let case_report = CaseReport::build(&store, report, now)?;
            info!(case_id = %case_report.case_id, "case report generated");
            println!("{}", serde_json::to_string_pretty(&case_report)?);
        }
    }

    Ok(())
}
