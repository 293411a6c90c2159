//! featscale: Feature Scaling and Selection Library
//!
//! A library for preparing tabular data for linear regression using
//! min-max scaling, z-score standardization, dummy encoding, and
//! variance-threshold feature selection.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
