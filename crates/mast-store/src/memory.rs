//! In-memory implementation of the store traits.
//!
//! This is primarily for testing. It has the same semantics as the dot-file
//! store but keeps everything in memory with no persistence.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::traits::{CredentialStore, Credentials, HubPreference, HubStore};

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
#[derive(Default)]
pub struct MemoryStore {
    credentials: RwLock<Option<Credentials>>,
    hub: RwLock<Option<HubPreference>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with credentials.
    pub fn with_credentials(credentials: Credentials) -> Self {
        let store = Self::new();
        *store.credentials.write().unwrap() = Some(credentials);
        store
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn load_credentials(&self) -> Result<Credentials> {
        self.credentials
            .read()
            .unwrap()
            .clone()
            .ok_or(StoreError::NoCredentials)
    }

    async fn save_credentials(&self, credentials: &Credentials) -> Result<()> {
        *self.credentials.write().unwrap() = Some(credentials.clone());
        Ok(())
    }
}

#[async_trait]
impl HubStore for MemoryStore {
    async fn load_hub(&self) -> Result<HubPreference> {
        Ok(self.hub.read().unwrap().clone().unwrap_or_default())
    }

    async fn save_hub(&self, hub: &HubPreference) -> Result<()> {
        *self.hub.write().unwrap() = Some(hub.clone());
        Ok(())
    }
}
