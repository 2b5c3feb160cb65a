use std::path::Path;

use tracing::info;

use crate::errors::ReporterError;

/// Persist the generated report, overwriting prior contents. This is the
/// final stage: nothing exists on disk unless generation already succeeded.
pub async fn write_report(path: &Path, report: &str) -> Result<(), ReporterError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                ReporterError::SinkWrite(format!(
                    "Failed to create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    tokio::fs::write(path, report).await.map_err(|e| {
        ReporterError::SinkWrite(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!(path = %path.display(), bytes = report.len(), "Report written");
    Ok(())
}
