//! Error types for the pairing tool

use ds4_transport::TransportError;
use thiserror::Error;

use crate::address::AddressError;
use crate::report::ReportError;

/// Errors that end an invocation
#[derive(Error, Debug)]
pub enum PairError {
    #[error(transparent)]
    InvalidFormat(#[from] AddressError),

    #[error("No DualShock 4 found (USB {vid:04x}:{pid:04x})")]
    DeviceNotFound { vid: u16, pid: u16 },

    #[error("Transfer failed: {0}")]
    Transfer(TransportError),

    #[error("Malformed report: {0}")]
    Report(#[from] ReportError),

    #[error("Paired address verification failed: wrote {expected}, controller reports {actual}")]
    VerifyMismatch { expected: String, actual: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Usage(String),
}

impl From<TransportError> for PairError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::DeviceNotFound { vid, pid } => PairError::DeviceNotFound { vid, pid },
            other => PairError::Transfer(other),
        }
    }
}
