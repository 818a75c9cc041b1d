//! Output formatting module

use anyhow::Result;
use tagscore_core::MetricsReport;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write a complete metrics report
    fn write_report(&mut self, report: &MetricsReport) -> Result<()>;
}

pub mod json;

pub use json::JsonFormatter;
