pub mod types;

pub use types::ReporterError;
