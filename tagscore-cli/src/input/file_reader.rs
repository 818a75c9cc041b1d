//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a whole tag file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        match fs::read_to_string(path) {
            Ok(content) => {
                log::debug!("Read {} bytes from {}", content.len(), path.display());
                Ok(content)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(CliError::FileNotFound(path.display().to_string()).into())
            }
            Err(err) => {
                Err(err).with_context(|| format!("Failed to read file: {}", path.display()))
            }
        }
    }
}
