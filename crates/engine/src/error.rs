//! The errors the conversion engine can produce.
//!
//! Every failure is recoverable: the workflow translates these into a
//! fixed user-facing message and keeps running. Nothing here should
//! ever escape past the workflow boundary.

use thiserror::Error;

use crate::rates::RateError;

/// Engine custom errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The amount input is empty, non-numeric, or not strictly positive.
    #[error("invalid amount")]
    InvalidAmount,
    /// The currency listing could not be fetched.
    #[error("currency list fetch failed: {0}")]
    CurrencyList(RateError),
    /// A conversion request failed.
    #[error("conversion fetch failed: {0}")]
    Conversion(RateError),
    /// The favorites slot could not be read or written.
    #[error("favorites store: {0}")]
    Store(#[from] StoreError),
}

/// Failures of the persisted favorites slot.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
