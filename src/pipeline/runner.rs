use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use crate::aggregate::{self, RecallSummary};
use crate::config::Credentials;
use crate::errors::ReporterError;
use crate::fda::FdaClient;
use crate::llm::{LLMProvider, OpenAIProvider};
use crate::narrative;
use crate::report;

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub year: i32,
    pub limit: usize,
    pub model: Option<String>,
    pub output: PathBuf,
    pub fda_base_url: Option<String>,
    pub openai_base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub total_records: usize,
    pub model: String,
    pub output_tokens: Option<u64>,
    pub report: String,
    pub output_path: PathBuf,
}

/// The five-stage batch pipeline: fetch, aggregate, format, generate,
/// sink. Strictly sequential, no retries; the first failure aborts the
/// run and nothing is written.
pub struct ReportPipeline {
    config: ReportConfig,
    credentials: Credentials,
}

impl ReportPipeline {
    pub fn new(config: ReportConfig, credentials: Credentials) -> Self {
        Self {
            config,
            credentials,
        }
    }

    /// Stages one through three. Also used on its own by the offline
    /// `summary` command.
    pub async fn build_data_summary(&self) -> Result<(RecallSummary, String), ReporterError> {
        let (start, end) = year_range(self.config.year)?;
        let client = FdaClient::new(
            &self.credentials.fda_api_key,
            self.config.fda_base_url.as_deref(),
        );
        let records = client
            .fetch_recalls(&start, &end, self.config.limit)
            .await?;

        let summary = aggregate::summarize(&records);
        info!(total = summary.total, "Aggregated recall records");

        let text = narrative::format_data_summary(&summary, self.config.year);
        Ok((summary, text))
    }

    /// Full run. Builds the OpenAI provider from injected credentials.
    pub async fn run(&self) -> Result<RunSummary, ReporterError> {
        let (summary, data_summary) = self.build_data_summary().await?;
        let prompt = narrative::build_prompt(&data_summary, self.config.year);

        let provider = match self.config.openai_base_url.as_deref() {
            Some(url) => OpenAIProvider::with_base_url(
                &self.credentials.openai_api_key,
                self.config.model.as_deref(),
                url,
            ),
            None => OpenAIProvider::new(
                &self.credentials.openai_api_key,
                self.config.model.as_deref(),
            ),
        };

        self.generate_and_persist(&provider, summary.total, &prompt)
            .await
    }

    /// Stages four and five against any provider implementation.
    pub async fn generate_and_persist(
        &self,
        provider: &dyn LLMProvider,
        total_records: usize,
        prompt: &str,
    ) -> Result<RunSummary, ReporterError> {
        info!(model = provider.model_name(), "Requesting report generation");
        let response = provider.complete(prompt).await?;

        report::write_report(&self.config.output, &response.content).await?;

        Ok(RunSummary {
            total_records,
            model: response.model,
            output_tokens: response.output_tokens,
            report: response.content,
            output_path: self.config.output.clone(),
        })
    }
}

/// Inclusive ISO date range covering one calendar year.
pub fn year_range(year: i32) -> Result<(String, String), ReporterError> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| ReporterError::Config(format!("Invalid year: {}", year)))?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| ReporterError::Config(format!("Invalid year: {}", year)))?;
    Ok((
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    ))
}
