//! Error types for phasor operations.
//!
//! Diagram input itself never fails: malformed lines collapse to zero
//! vectors. [`PhasorError`] covers everything around the drawing pipeline.

use std::io;

use thiserror::Error;

/// The main error type for phasor operations.
#[derive(Debug, Error)]
pub enum PhasorError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}
