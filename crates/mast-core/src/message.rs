//! Protocol messages: the semantic payload and the signed envelope.
//!
//! A cast becomes a `CastBody`, is wrapped in `MessageData` (who, when,
//! which network), encoded to its canonical wire bytes, hashed, signed, and
//! shipped as a `MessageEnvelope`.

use bytes::Bytes;

use crate::cast::CastContent;
use crate::crypto::{CastHash, Ed25519PublicKey, Ed25519Signature, SignerKeypair};
use crate::error::CoreError;
use crate::wire;

/// Seconds between the Unix epoch and the protocol epoch (2021-01-01T00:00:00Z).
pub const FARCASTER_EPOCH: u64 = 1_609_459_200;

/// Convert a Unix timestamp (seconds) to a protocol timestamp: seconds since
/// the protocol epoch, truncated to 32 bits.
pub fn farcaster_timestamp(unix_secs: u64) -> u32 {
    unix_secs.saturating_sub(FARCASTER_EPOCH) as u32
}

/// The network a message is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u64)]
pub enum FarcasterNetwork {
    Mainnet = 1,
    Testnet = 2,
    Devnet = 3,
}

/// Message type. Only cast additions are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u64)]
pub enum MessageType {
    CastAdd = 1,
}

/// Hash scheme carried in the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u64)]
pub enum HashScheme {
    Blake3 = 1,
}

/// Signature scheme carried in the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u64)]
pub enum SignatureScheme {
    Ed25519 = 1,
}

/// The semantic body of a cast-add message, post channel resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastBody {
    pub text: String,
    /// Filled embed URLs only; empty slots never reach the body.
    pub embeds: Vec<String>,
    /// Canonical channel URL when the cast was addressed to a channel.
    pub parent_url: Option<String>,
}

impl CastBody {
    /// Build the body from user content and an optionally resolved channel URL.
    pub fn from_content(
        content: &CastContent,
        parent_url: Option<String>,
    ) -> Result<Self, CoreError> {
        content.validate()?;
        Ok(Self {
            text: content.text.clone(),
            embeds: content.embeds().map(String::from).collect(),
            parent_url,
        })
    }
}

/// Everything that gets hashed and signed: type, author, time, network, body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageData {
    pub message_type: MessageType,
    pub fid: u64,
    pub timestamp: u32,
    pub network: FarcasterNetwork,
    pub body: CastBody,
}

impl MessageData {
    /// A cast-add message from the given author at the given protocol time.
    pub fn cast_add(fid: u64, timestamp: u32, network: FarcasterNetwork, body: CastBody) -> Self {
        Self {
            message_type: MessageType::CastAdd,
            fid,
            timestamp,
            network,
            body,
        }
    }
}

/// The fully signed, hash-bearing unit submitted to a hub.
///
/// Invariants: `hash` is the 20-byte truncated Blake3 of `data_bytes`;
/// `signature` verifies over `hash` under `signer`; `signer` is the public
/// half of the keypair used at signing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEnvelope {
    pub hash_scheme: HashScheme,
    pub hash: CastHash,
    pub signature_scheme: SignatureScheme,
    pub signature: Ed25519Signature,
    pub signer: Ed25519PublicKey,
    pub data_bytes: Bytes,
}

impl MessageEnvelope {
    /// Encode, hash, and sign message data.
    pub fn build(data: &MessageData, keypair: &SignerKeypair) -> Self {
        let data_bytes = wire::encode_message_data(data);
        let hash = CastHash::digest(&data_bytes);
        let signature = keypair.sign(hash.as_bytes());

        Self {
            hash_scheme: HashScheme::Blake3,
            hash,
            signature_scheme: SignatureScheme::Ed25519,
            signature,
            signer: keypair.public_key(),
            data_bytes: data_bytes.into(),
        }
    }

    /// Serialize the envelope to its canonical wire form.
    pub fn to_wire_bytes(&self) -> Vec<u8> {
        wire::encode_message(self)
    }

    /// Check the envelope invariants: hash matches the body, signature
    /// verifies under the attached signer.
    pub fn verify(&self) -> bool {
        self.hash == CastHash::digest(&self.data_bytes)
            && self.signer.verify(self.hash.as_bytes(), &self.signature)
    }
}
