use std::path::PathBuf;

use console::style;
use tracing::info;

use crate::cli::commands::RunArgs;
use crate::config::Credentials;
use crate::errors::ReporterError;
use crate::pipeline::{ReportConfig, ReportPipeline};

pub async fn handle_run(args: RunArgs, quiet: bool) -> Result<(), ReporterError> {
    // Both keys must resolve before any network activity.
    let credentials = Credentials::resolve(
        args.fda_api_key.as_deref(),
        args.openai_api_key.as_deref(),
    )?;

    if !quiet {
        println!(
            "{} Querying FDA device recalls for {}...",
            style(">").cyan().bold(),
            args.year
        );
    }

    let pipeline = ReportPipeline::new(build_config(&args), credentials);
    let outcome = pipeline.run().await?;

    if !quiet {
        let rule = style("=".repeat(60)).dim().to_string();
        println!();
        println!("{}", rule);
        println!(
            "{}",
            style("AI-GENERATED FDA DEVICE RECALL REPORT").bold()
        );
        println!("{}", rule);
        println!("{}", outcome.report);
        println!("{}", rule);
    }

    info!(
        records = outcome.total_records,
        model = %outcome.model,
        output_tokens = ?outcome.output_tokens,
        output = %outcome.output_path.display(),
        "Report pipeline completed"
    );
    Ok(())
}

pub fn build_config(args: &RunArgs) -> ReportConfig {
    ReportConfig {
        year: args.year,
        limit: args.limit,
        model: args.model.clone(),
        output: PathBuf::from(&args.output),
        fda_base_url: args.fda_base_url.clone(),
        openai_base_url: args.openai_base_url.clone(),
    }
}
