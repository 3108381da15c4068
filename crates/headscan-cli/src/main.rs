mod extract;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "headscan-cli")]
#[command(about = "Extract heading text from a batch of web pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch every address (one per line) and print its headings
    Extract {
        /// Extract H1, H2 and H3 instead of H1 only
        #[arg(long)]
        more: bool,
        /// File with one address per line; stdin when omitted
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Write results to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Maximum simultaneous fetches (overrides `HEADSCAN_MAX_CONCURRENT_FETCHES`)
        #[arg(long)]
        concurrency: Option<usize>,
        /// Per-page timeout in seconds (overrides `HEADSCAN_REQUEST_TIMEOUT_SECS`)
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Same records as the HTTP API
    Json,
    /// Clipboard-style text listing
    Tsv,
    /// Spreadsheet export, one column per heading
    Csv,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = headscan_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract {
            more,
            input,
            output,
            format,
            concurrency,
            timeout_secs,
        } => {
            let options = extract::ExtractOptions {
                mode: if more {
                    headscan_core::ExtractionMode::H1H2H3
                } else {
                    headscan_core::ExtractionMode::H1Only
                },
                format,
                max_concurrent: concurrency.unwrap_or(config.max_concurrent_fetches),
                timeout_secs: timeout_secs.unwrap_or(config.request_timeout_secs),
                user_agent: config.user_agent.clone(),
            };
            extract::run_extract(input.as_deref(), output.as_deref(), &options).await?;
        }
    }

    Ok(())
}
