//! Unified application error type.
//! All modules (geotab, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Remote calls
    // ---------------------------
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error ({name}): {message}")]
    Api { name: String, message: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Unexpected API response: {0}")]
    Response(String),

    #[error("Failed to load foundation data: {0}")]
    Foundation(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Invalid preset: {0}")]
    InvalidPreset(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

pub type AppResult<T> = Result<T, AppError>;
