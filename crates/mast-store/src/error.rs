//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during credential and hub preference operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No credentials have been stored yet.
    #[error("no credentials found; authorize a signer first")]
    NoCredentials,

    /// The stored fid is not a decimal number.
    #[error("stored fid is not a decimal number: {0:?}")]
    MalformedFid(String),

    /// The stored signer seed is not valid key material.
    #[error("invalid stored key material: {0}")]
    KeyMaterial(#[from] mast_core::KeyMaterialError),

    /// The platform has no home directory to store credentials under.
    #[error("could not determine home directory")]
    NoHomeDir,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
