pub mod runner;

pub use runner::{year_range, ReportConfig, ReportPipeline, RunSummary};
