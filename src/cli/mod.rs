pub mod commands;
pub mod run;
pub mod summary;

pub use commands::{Cli, Commands};
