use clap::Parser;
use tracing_subscriber::EnvFilter;

use recall_reporter::cli::{self, Commands};
use recall_reporter::errors::ReporterError;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let quiet = cli.quiet;
    let result = match cli.command {
        Commands::Run(args) => cli::run::handle_run(args, quiet).await,
        Commands::Summary(args) => cli::summary::handle_summary(args).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                ReporterError::Config(_) => 2,
                ReporterError::MissingCredential(_) => 3,
                ReporterError::SourceUnavailable(_) => 4,
                ReporterError::GenerationFailed(_) => 5,
                ReporterError::SinkWrite(_) => 6,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
