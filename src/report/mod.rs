pub mod sink;

pub use sink::write_report;
