//! Unified application error type.
//! All modules (core, export, config, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use crate::models::status::Status;
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
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Unknown status label: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Lifecycle errors
    // ---------------------------
    #[error("Timesheet entry not found: {0}")]
    EntryNotFound(String),

    #[error("Entry can only be edited while pending (current status: {0:?})")]
    EditNotAllowed(Status),

    #[error("Entry can only be deleted while pending (current status: {0:?})")]
    DeleteNotAllowed(Status),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
