// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Document-level failures abort a run; fragment-level anomalies never
/// surface here — they degrade to partial/empty records instead.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("could not parse document: {0}")]
    ParseFailure(String),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
