use async_trait::async_trait;

use super::types::LLMResponse;
use crate::errors::ReporterError;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Single-turn text completion. Exactly one request, no streaming,
    /// no retries; any failure is terminal for the run.
    async fn complete(&self, prompt: &str) -> Result<LLMResponse, ReporterError>;

    /// Model identifier for logging
    fn model_name(&self) -> &str;
}
