//! Unified application error type.
//! All modules (ingest, core, export, cli, utils) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input data
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data file not found: {0}")]
    DataFileNotFound(String),

    /// The header row lacks a column every record needs.
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A record is missing a required field or carries an unparsable value.
    /// `row` is the 1-based data row (header excluded).
    #[error("Invalid input at row {row}, field '{field}': {reason}")]
    InvalidInput {
        row: usize,
        field: &'static str,
        reason: String,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub(crate) fn invalid_input(row: usize, field: &'static str, reason: impl Into<String>) -> Self {
        AppError::InvalidInput {
            row,
            field,
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
