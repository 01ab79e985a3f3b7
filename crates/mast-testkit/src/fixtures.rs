//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a seeded identity, an
//! in-memory store, and a scripted transport shared by every client.

use std::sync::Arc;

use mast_core::{SignerKeypair, SignerSeed};
use mast_net::transport::scripted::ScriptedTransport;
use mast_store::{Credentials, MemoryStore};

/// The fid used by the default fixture identity.
pub const TEST_FID: u64 = 6596;

/// A test fixture with a deterministic signer, memory store, and scripted
/// transport.
pub struct TestFixture {
    pub seed: SignerSeed,
    pub store: Arc<MemoryStore>,
    pub transport: Arc<ScriptedTransport>,
}

impl TestFixture {
    /// Fixture with credentials already stored for [`TEST_FID`].
    pub fn new() -> Self {
        Self::with_seed([0x42; 32])
    }

    /// Fixture with credentials derived from an explicit seed.
    pub fn with_seed(seed_bytes: [u8; 32]) -> Self {
        let seed = SignerSeed::from_bytes(seed_bytes);
        let store = MemoryStore::with_credentials(Credentials {
            fid: TEST_FID,
            seed,
        });
        Self {
            seed,
            store: Arc::new(store),
            transport: Arc::new(ScriptedTransport::new()),
        }
    }

    /// Fixture with an empty store: no credentials, default hub.
    pub fn unauthorized() -> Self {
        Self {
            seed: SignerSeed::from_bytes([0x42; 32]),
            store: Arc::new(MemoryStore::new()),
            transport: Arc::new(ScriptedTransport::new()),
        }
    }

    /// The fixture identity's keypair.
    pub fn keypair(&self) -> SignerKeypair {
        SignerKeypair::from_seed(&self.seed)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
