//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::api::{ProvisionOptions, provision};

#[derive(Parser)]
#[command(name = "n8n-provision")]
#[command(version)]
#[command(
    about = "Interactively generate .env and deploy.sh for running n8n on Zeabur",
    long_about = None
)]
struct Cli {
    /// Directory that receives .env and deploy.sh (defaults to the current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Settings file (defaults to n8n-provision.toml in the output directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log debug detail to stderr
    #[arg(long)]
    debug: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let options = ProvisionOptions { output_dir: cli.output_dir, config_path: cli.config };
    if let Err(e) = provision(&options) {
        if !e.is_interrupt() {
            eprintln!("❌ Deployment setup failed: {}", e);
        }
        std::process::exit(e.exit_code());
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("debug")
        } else if verbose {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .init();
}
