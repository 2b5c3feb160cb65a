pub mod aggregate;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fda;
pub mod llm;
pub mod narrative;
pub mod pipeline;
pub mod report;
pub mod utils;
