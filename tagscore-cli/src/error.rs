//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Home directory needed for `~` expansion is unknown
    HomeDirUnavailable(String),
    /// Decoding or scoring error from core
    ScoringError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::HomeDirUnavailable(path) => {
                write!(f, "Cannot expand '~' in {path}: home directory unknown")
            }
            CliError::ScoringError(msg) => write!(f, "Scoring error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("preds.txt".to_string());
        assert_eq!(error.to_string(), "File not found: preds.txt");
    }

    #[test]
    fn test_home_dir_error_display() {
        let error = CliError::HomeDirUnavailable("~/labels.txt".to_string());
        assert_eq!(
            error.to_string(),
            "Cannot expand '~' in ~/labels.txt: home directory unknown"
        );
    }

    #[test]
    fn test_scoring_error_display() {
        let error = CliError::ScoringError("malformed tag".to_string());
        assert_eq!(error.to_string(), "Scoring error: malformed tag");
    }

    #[test]
    fn test_cli_result_type_alias() {
        let failure: CliResult<String> = Err(CliError::FileNotFound("x".to_string()).into());
        assert!(failure
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("File not found: x"));
        assert!(failure.unwrap_err().downcast_ref::<CliError>().is_some());
    }
}
