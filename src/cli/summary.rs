use crate::aggregate;
use crate::cli::commands::RunArgs;
use crate::config::credentials;
use crate::errors::ReporterError;
use crate::fda::FdaClient;
use crate::narrative;
use crate::pipeline::year_range;

/// Offline inspection of the prompt payload: fetch, aggregate, print.
/// Never contacts the generation service and writes no file, so only the
/// FDA key is required.
pub async fn handle_summary(args: RunArgs) -> Result<(), ReporterError> {
    let api_key = credentials::fda_api_key(args.fda_api_key.as_deref())?;
    let (start, end) = year_range(args.year)?;

    let client = FdaClient::new(&api_key, args.fda_base_url.as_deref());
    let records = client.fetch_recalls(&start, &end, args.limit).await?;

    let summary = aggregate::summarize(&records);
    println!("{}", narrative::format_data_summary(&summary, args.year));
    Ok(())
}
