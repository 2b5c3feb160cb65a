use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Data source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Report generation failed: {0}")]
    GenerationFailed(String),

    #[error("Report sink write failed: {0}")]
    SinkWrite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
