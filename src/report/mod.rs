//! Report module - summarizing selection results

pub mod summary;
pub mod variance_report;

pub use summary::*;
pub use variance_report::*;
