pub mod client;
pub mod types;

pub use client::FdaClient;
pub use types::RecallRecord;
