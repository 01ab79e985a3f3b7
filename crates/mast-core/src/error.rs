//! Error types for mast core primitives.

use thiserror::Error;

/// Errors raised while parsing signer key material.
///
/// Key material is validated where it enters the system (credential load,
/// manual authorization, issuer response) so that nothing downstream ever
/// holds a seed of the wrong shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyMaterialError {
    #[error("private key is not a valid hex string")]
    InvalidHex,

    #[error("private key must be exactly 32 bytes (64 hex characters), got {got} bytes")]
    WrongLength { got: usize },
}

/// Errors that can occur while building a protocol message.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A cast must carry at least one of text, embeds, or a channel.
    #[error("empty cast: at least one of text, embed urls, or channel is required")]
    EmptyCast,

    /// The protocol carries at most two embed slots per cast.
    #[error("too many embeds: at most {max} embed urls per cast, got {got}")]
    TooManyEmbeds { max: usize, got: usize },

    /// Invalid signer key material.
    #[error("invalid key material: {0}")]
    KeyMaterial(#[from] KeyMaterialError),
}
