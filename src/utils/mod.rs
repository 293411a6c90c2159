//! Utility module - terminal styling, progress indicators, and logging

mod logging;
mod progress;
mod styling;

pub use logging::*;
pub use progress::*;
pub use styling::*;
