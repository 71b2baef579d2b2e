//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into `IxError`
//! via `From` impls, or keep them separate and wrap `IxError` as one variant.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::VehicleId;

/// The top-level error type for `ix-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum IxError {
    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ix-*` crates.
pub type IxResult<T> = Result<T, IxError>;
