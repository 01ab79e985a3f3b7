//! Error types for the top-level mast API.

use mast_core::{CoreError, KeyMaterialError};
use mast_net::{AuthorizationError, HubError, ResolveError, SubmitError};
use mast_store::StoreError;
use thiserror::Error;

/// Errors that can occur while publishing a cast.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The cast content is invalid.
    #[error("invalid cast: {0}")]
    Content(#[from] CoreError),

    /// Credential or hub preference storage failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Channel resolution failed.
    #[error("channel resolution error: {0}")]
    Resolve(#[from] ResolveError),

    /// The hub rejected the message or was unreachable.
    #[error("submission error: {0}")]
    Submit(#[from] SubmitError),
}

/// Errors that can occur while managing the stored account.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Supplied key material is invalid.
    #[error("invalid key material: {0}")]
    KeyMaterial(#[from] KeyMaterialError),

    /// The hub check failed.
    #[error("hub error: {0}")]
    Hub(#[from] HubError),

    /// Credential or hub preference storage failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Errors starting a remote authorization session.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The key issuer could not mint a signer.
    #[error("authorization error: {0}")]
    Authorization(#[from] AuthorizationError),
}
