//! Error types for timeboard-core
//!
//! Dataset loading is the only fallible path in the core; rendering and view
//! projection never fail.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for timeboard operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML in {path}: {message}")]
    YamlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unexpected dataset layout in {path}: {message}")]
    InvalidSchema { path: PathBuf, message: String },

    #[error("Unsupported dataset format for {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    // ===================
    // Dataset Errors
    // ===================
    #[error("Invalid dataset: {message}")]
    InvalidDataset { message: String },

    #[error("Invalid timeframe '{value}' (expected daily, weekly or monthly)")]
    InvalidTimeframe { value: String },
}

impl CoreError {
    /// Actionable suggestion for the user, if one applies
    pub fn hint(&self) -> Option<String> {
        match self {
            CoreError::FileNotFound { path } => {
                Some(format!("Check if file exists: ls {}", path.display()))
            }
            CoreError::FileRead { path, .. } => {
                Some(format!("Check permissions: chmod +r {}", path.display()))
            }
            CoreError::JsonParse { .. } => {
                Some("Validate JSON syntax with: jq . <file>".to_string())
            }
            CoreError::YamlParse { .. } => {
                Some("Check YAML indentation and quoting".to_string())
            }
            CoreError::InvalidSchema { .. } => Some(
                "Each activity needs a title and daily, weekly and monthly entries with current and previous hours".to_string(),
            ),
            CoreError::UnsupportedFormat { .. } => {
                Some("Rename the file with a .json or .yaml extension".to_string())
            }
            CoreError::InvalidDataset { .. } => {
                Some("Every activity needs a unique title and the list must not be empty".to_string())
            }
            CoreError::InvalidTimeframe { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_hint() {
        let err = CoreError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        assert_eq!(err.to_string(), "File not found: /tmp/missing.json");
        assert_eq!(
            err.hint(),
            Some("Check if file exists: ls /tmp/missing.json".to_string())
        );
    }

    #[test]
    fn test_invalid_timeframe_has_no_hint() {
        let err = CoreError::InvalidTimeframe {
            value: "yearly".to_string(),
        };
        assert!(err.to_string().contains("'yearly'"));
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_invalid_schema_message() {
        let err = CoreError::InvalidSchema {
            path: PathBuf::from("hours.json"),
            message: "activity 1 ('Work'): missing field `weekly`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected dataset layout in hours.json: activity 1 ('Work'): missing field `weekly`"
        );
        assert!(err.hint().is_some());
    }
}
