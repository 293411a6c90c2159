//! CLI module - argument parsing, interactive prompts, and subcommands

mod args;
mod prompts;
pub mod scale;

pub use args::{derive_output_path, Cli, Commands};
pub use prompts::*;
