//! Tagscore CLI library
//!
//! This library provides the command-line interface for scoring
//! punctuation and capitalization tag predictions.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
