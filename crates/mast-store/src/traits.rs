//! Store traits: the abstract interface for credential persistence.
//!
//! These traits keep the publishing pipeline storage-agnostic.
//! Implementations include dot-files in the home directory (primary) and
//! in-memory (for tests).

use async_trait::async_trait;
use mast_core::SignerSeed;

use crate::error::Result;

/// Default hub a fresh installation submits to.
pub const DEFAULT_HUB_URL: &str = "https://hub-api.neynar.com";

/// A stored identity: who the user is and the key that signs for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The numeric protocol identity.
    pub fid: u64,
    /// Seed of the Ed25519 signer authorized for that fid.
    pub seed: SignerSeed,
}

/// Which hub to submit to, and how to authenticate with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubPreference {
    /// Base URL of the hub's HTTP API.
    pub base_url: String,
    /// Optional API key sent as `x-api-key` on submissions.
    pub api_key: Option<String>,
}

impl Default for HubPreference {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HUB_URL.to_owned(),
            api_key: None,
        }
    }
}

/// Async interface for credential persistence.
///
/// # Design Notes
///
/// - **Load validates**: implementations parse and validate stored material
///   on load, so callers never hold a malformed fid or seed.
/// - **Missing is distinct**: absent credentials surface as
///   [`StoreError::NoCredentials`](crate::StoreError::NoCredentials), not as
///   an I/O error.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load the stored identity, or `NoCredentials` if none exists.
    async fn load_credentials(&self) -> Result<Credentials>;

    /// Persist the identity, replacing any previous one.
    async fn save_credentials(&self, credentials: &Credentials) -> Result<()>;
}

/// Async interface for hub preference persistence.
///
/// A missing preference is not an error: loading falls back to
/// [`HubPreference::default`].
#[async_trait]
pub trait HubStore: Send + Sync {
    /// Load the hub preference, or the default hub if none is stored.
    async fn load_hub(&self) -> Result<HubPreference>;

    /// Persist the hub preference, replacing any previous one.
    async fn save_hub(&self, hub: &HubPreference) -> Result<()>;
}
