//! Unified application error type.
//! All modules (db, core, cli, server, export) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Invalid table name: {0}")]
    InvalidTable(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid Kit ID format: {0}. Expected EC-####.")]
    InvalidKitId(String),

    #[error("Invalid Sampler ID format: {0}. Expected ECCC####.")]
    InvalidSamplerId(String),

    #[error("Invalid datetime format: {0}. Expected format: YYYY-MM-DD HH:MM.")]
    InvalidTimestamp(String),

    #[error("Invalid date format: {0}. Expected format: YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("Invalid sample type: {0}. Expected Sample or Blank.")]
    InvalidSampleType(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Row {0} does not exist")]
    InvalidRow(usize),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Background task failed: {0}")]
    Blocking(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing configuration values ({source_name}): {}", .missing.join(", "))]
    MissingConfig {
        source_name: String,
        missing: Vec<String>,
    },

    #[error(".env error: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
