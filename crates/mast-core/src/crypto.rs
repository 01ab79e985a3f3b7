//! Cryptographic primitives for mast.
//!
//! Wraps Ed25519 signing and Blake3 hashing with strong types. The protocol
//! hashes message bodies with Blake3 truncated to 20 bytes and signs that
//! hash with an Ed25519 key derived from a 32-byte seed.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use std::fmt;

use crate::error::KeyMaterialError;

/// Length of a cast content hash in bytes.
pub const CAST_HASH_LENGTH: usize = 20;

/// Length of a signer seed in bytes.
pub const SEED_LENGTH: usize = 32;

/// A 20-byte truncated Blake3 hash over an encoded message body.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastHash(pub [u8; CAST_HASH_LENGTH]);

impl CastHash {
    /// Hash the given bytes: Blake3, truncated to 20 bytes.
    pub fn digest(data: &[u8]) -> Self {
        let full = blake3::hash(data);
        let mut out = [0u8; CAST_HASH_LENGTH];
        out.copy_from_slice(&full.as_bytes()[..CAST_HASH_LENGTH]);
        Self(out)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; CAST_HASH_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; CAST_HASH_LENGTH] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for CastHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastHash({})", self.to_hex())
    }
}

impl AsRef<[u8]> for CastHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A 32-byte Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey(pub [u8; 32]);

impl Ed25519PublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Verify a signature over a message.
    ///
    /// Returns false if the key itself is not a valid curve point.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.0) else {
            return false;
        };
        let sig = Signature::from_bytes(&signature.0);
        verifying_key.verify(message, &sig).is_ok()
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Pub({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A 64-byte Ed25519 signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Signature(pub [u8; 64]);

impl Ed25519Signature {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Sig({}...)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Ed25519Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A 32-byte Ed25519 private-key seed.
///
/// Seeds arrive as hex text (credential file, issuer response, manual
/// entry); [`SignerSeed::from_hex`] is the single validation point.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SignerSeed([u8; SEED_LENGTH]);

impl SignerSeed {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; SEED_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse from a hex string, stripping an optional `0x` prefix.
    ///
    /// Anything other than exactly 64 hex characters is rejected.
    pub fn from_hex(s: &str) -> Result<Self, KeyMaterialError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|_| KeyMaterialError::InvalidHex)?;
        let arr: [u8; SEED_LENGTH] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyMaterialError::WrongLength { got: bytes.len() })?;
        Ok(Self(arr))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }

    /// Convert to hex string (no `0x` prefix).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SignerSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print key material.
        write!(f, "SignerSeed(..)")
    }
}

/// A signing keypair derived deterministically from a seed.
///
/// Same seed, same keypair, always.
#[derive(Clone)]
pub struct SignerKeypair {
    signing_key: SigningKey,
}

impl SignerKeypair {
    /// Derive the keypair from a 32-byte seed.
    pub fn from_seed(seed: &SignerSeed) -> Self {
        let signing_key = SigningKey::from_bytes(seed.as_bytes());
        Self { signing_key }
    }

    /// Get the public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign a message.
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        let sig = self.signing_key.sign(message);
        Ed25519Signature(sig.to_bytes())
    }

    /// Get the seed back out (secret key material).
    pub fn seed(&self) -> SignerSeed {
        SignerSeed(self.signing_key.to_bytes())
    }
}

impl fmt::Debug for SignerKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignerKeypair({:?})", self.public_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypair_sign_verify() {
        let seed = SignerSeed::from_bytes([0x42; 32]);
        let keypair = SignerKeypair::from_seed(&seed);
        let hash = CastHash::digest(b"hello world");
        let signature = keypair.sign(hash.as_bytes());

        assert!(keypair.public_key().verify(hash.as_bytes(), &signature));

        // Tampered message must fail
        let other = CastHash::digest(b"hello worlD");
        assert!(!keypair.public_key().verify(other.as_bytes(), &signature));
    }

    #[test]
    fn test_keypair_deterministic_from_seed() {
        let seed = SignerSeed::from_bytes([0x42; 32]);
        let kp1 = SignerKeypair::from_seed(&seed);
        let kp2 = SignerKeypair::from_seed(&seed);
        assert_eq!(kp1.public_key(), kp2.public_key());
        assert_eq!(kp1.seed(), kp2.seed());
    }

    #[test]
    fn test_cast_hash_is_truncated_blake3() {
        let data = b"test data";
        let h = CastHash::digest(data);
        assert_eq!(h.as_bytes().len(), CAST_HASH_LENGTH);
        assert_eq!(h.as_bytes()[..], blake3::hash(data).as_bytes()[..20]);

        // Stable across invocations, sensitive to input
        assert_eq!(h, CastHash::digest(data));
        assert_ne!(h, CastHash::digest(b"different data"));
    }

    #[test]
    fn test_seed_from_hex_roundtrip() {
        let seed = SignerSeed::from_bytes([0xab; 32]);
        let recovered = SignerSeed::from_hex(&seed.to_hex()).unwrap();
        assert_eq!(seed, recovered);
    }

    #[test]
    fn test_seed_from_hex_strips_0x_prefix() {
        let bare = "11".repeat(32);
        let prefixed = format!("0x{bare}");
        assert_eq!(
            SignerSeed::from_hex(&bare).unwrap(),
            SignerSeed::from_hex(&prefixed).unwrap()
        );
    }

    #[test]
    fn test_seed_from_hex_rejects_wrong_length() {
        let short = "11".repeat(31);
        assert_eq!(
            SignerSeed::from_hex(&short),
            Err(KeyMaterialError::WrongLength { got: 31 })
        );

        let long = "11".repeat(33);
        assert_eq!(
            SignerSeed::from_hex(&long),
            Err(KeyMaterialError::WrongLength { got: 33 })
        );
    }

    #[test]
    fn test_seed_from_hex_rejects_non_hex() {
        let bad = "zz".repeat(32);
        assert_eq!(SignerSeed::from_hex(&bad), Err(KeyMaterialError::InvalidHex));
    }

    #[test]
    fn test_seed_debug_is_redacted() {
        let seed = SignerSeed::from_bytes([0x42; 32]);
        assert_eq!(format!("{seed:?}"), "SignerSeed(..)");
    }
}
