//! Error types for record ingestion, configuration and simulation history
//!
//! The projection and advisory computations themselves never fail; only the
//! layers that read external input or look up referenced records do.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record in {file} at line {line}: {reason}")]
    InvalidRecord {
        file: String,
        line: u64,
        reason: String,
    },

    #[error("Unknown event frequency: {0}")]
    UnknownFrequency(String),

    #[error("Unknown insurance type: {0}")]
    UnknownInsuranceType(String),

    #[error("Client not found: {0}")]
    ClientNotFound(u32),

    #[error("Wallet not found for client {0}")]
    WalletNotFound(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
