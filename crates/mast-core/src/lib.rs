//! # Mast Core
//!
//! Pure primitives for mast: cast content, protocol messages, wire encoding,
//! hashing, and signing.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over protocol data structures.
//!
//! ## Key Types
//!
//! - [`CastContent`] - User-authored cast input
//! - [`MessageData`] - The hashed and signed portion of a message
//! - [`MessageEnvelope`] - The signed unit submitted to a hub
//! - [`SignerSeed`] / [`SignerKeypair`] - Ed25519 key material
//! - [`CastHash`] - 20-byte truncated Blake3 content hash
//!
//! ## Wire Encoding
//!
//! Messages are encoded with a deterministic protobuf encoder. See the
//! [`wire`] module.

pub mod cast;
pub mod crypto;
pub mod error;
pub mod message;
pub mod wire;

pub use cast::{CastContent, ChannelReference, MAX_EMBEDS};
pub use crypto::{
    CastHash, Ed25519PublicKey, Ed25519Signature, SignerKeypair, SignerSeed, CAST_HASH_LENGTH,
    SEED_LENGTH,
};
pub use error::{CoreError, KeyMaterialError};
pub use message::{
    farcaster_timestamp, CastBody, FarcasterNetwork, HashScheme, MessageData, MessageEnvelope,
    MessageType, SignatureScheme, FARCASTER_EPOCH,
};
pub use wire::{encode_cast_add_body, encode_message, encode_message_data};
