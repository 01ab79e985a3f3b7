//! # Mast Store
//!
//! Credential persistence for mast. Provides a trait-based interface for
//! storing the user's fid, signer seed, and hub preference, with dot-file
//! and in-memory implementations.
//!
//! ## Key Types
//!
//! - [`CredentialStore`] / [`HubStore`] - The async traits for persistence
//! - [`FileStore`] - Dot-files in the home directory (primary)
//! - [`MemoryStore`] - In-memory storage for tests
//! - [`Credentials`] - A fid plus the seed of its authorized signer
//! - [`HubPreference`] - Which hub to submit to, with an optional API key
//!
//! ## Design Notes
//!
//! - **Load validates**: stored material is parsed on load, so nothing
//!   downstream holds a malformed fid or seed
//! - **Missing credentials are distinct** from I/O failures
//! - **Missing hub preference falls back** to the default hub

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::{CredentialStore, Credentials, HubPreference, HubStore, DEFAULT_HUB_URL};
