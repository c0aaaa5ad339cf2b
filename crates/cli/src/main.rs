use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use paperchase_core::scholar::DEFAULT_SCHOLAR_URL;
use paperchase_core::{RunConfig, load_conferences, run};

mod echo;
mod logging;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Download conference papers listed in a JSON configuration
#[derive(Parser, Debug)]
#[command(name = "paperchase")]
#[command(version)]
#[command(about = "Download conference papers from proceedings listing pages", long_about = None)]
struct Args {
    /// Pause between downloads in milliseconds
    #[arg(long, visible_alias = "timeout", default_value = "2000", value_name = "MS")]
    delay: u64,

    /// JSON file listing conferences
    #[arg(short, long, default_value = "conferences.json", value_name = "FILE")]
    config: PathBuf,

    /// Output directory for storing papers
    #[arg(short, long, default_value = "papers", value_name = "DIR")]
    output_dir: PathBuf,

    /// Search endpoint used for title-only listings
    #[arg(long, default_value = DEFAULT_SCHOLAR_URL, value_name = "URL")]
    scholar_url: String,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "paperchase", &mut io::stdout());
        return Ok(());
    }

    logging::init_tracing(args.verbose);

    if args.verbose {
        echo::print_banner();
    }

    let conferences = load_conferences(&args.config)
        .with_context(|| format!("Failed to load conferences from {}", args.config.display()))?;
    echo::print_info(&format!("{} conference entries loaded", conferences.len()));

    let config = RunConfig::builder()
        .delay(Duration::from_millis(args.delay))
        .conferences_file(args.config)
        .output_dir(args.output_dir)
        .scholar_url(args.scholar_url)
        .conferences(conferences)
        .build();

    let summary = run(&config).await.context("Run aborted")?;

    echo::print_summary(&summary, &config.output_dir);

    Ok(())
}
