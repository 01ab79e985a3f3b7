//! Dot-file implementation of the store traits.
//!
//! Credentials live as three small text files in the user's home directory:
//!
//! - `.fc-cast-fid`: the fid, decimal
//! - `.fc-cast-signer`: the signer seed, hex (optional `0x` prefix)
//! - `.fc-cast-hub`: the hub, `url` or `url|apikey`
//!
//! Files holding key material are written with owner-only permissions.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use mast_core::SignerSeed;

use crate::error::{Result, StoreError};
use crate::traits::{CredentialStore, Credentials, HubPreference, HubStore};

/// File name for the stored fid.
pub const FID_FILE: &str = ".fc-cast-fid";
/// File name for the stored signer seed.
pub const SIGNER_FILE: &str = ".fc-cast-signer";
/// File name for the stored hub preference.
pub const HUB_FILE: &str = ".fc-cast-hub";

/// Store backed by dot-files under a base directory.
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    /// Store rooted at the user's home directory.
    pub fn in_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
        Ok(Self::new(home))
    }

    /// Store rooted at an explicit directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.base.join(name)
    }
}

/// Read a file, mapping a missing file to `None`.
async fn read_optional(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents.trim().to_owned())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Write a file readable and writable by the owner only.
///
/// The temp file is created with owner-only mode from the start, so key
/// material is never observable under a looser mode, and the rename
/// replaces the target as a whole: readers see either the old contents or
/// the new, never a partial write.
async fn write_private(path: &Path, contents: &str) -> Result<()> {
    use tokio::io::AsyncWriteExt;

    let tmp = path.with_extension("tmp");
    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(&tmp).await?;
    file.write_all(contents.as_bytes()).await?;
    file.sync_all().await?;
    drop(file);

    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

#[async_trait]
impl CredentialStore for FileStore {
    async fn load_credentials(&self) -> Result<Credentials> {
        let fid_text = read_optional(&self.path(FID_FILE))
            .await?
            .ok_or(StoreError::NoCredentials)?;
        let seed_text = read_optional(&self.path(SIGNER_FILE))
            .await?
            .ok_or(StoreError::NoCredentials)?;

        let fid: u64 = fid_text
            .parse()
            .map_err(|_| StoreError::MalformedFid(fid_text.clone()))?;
        let seed = SignerSeed::from_hex(&seed_text)?;

        Ok(Credentials { fid, seed })
    }

    async fn save_credentials(&self, credentials: &Credentials) -> Result<()> {
        write_private(&self.path(FID_FILE), &credentials.fid.to_string()).await?;
        write_private(&self.path(SIGNER_FILE), &credentials.seed.to_hex()).await?;
        Ok(())
    }
}

#[async_trait]
impl HubStore for FileStore {
    async fn load_hub(&self) -> Result<HubPreference> {
        let Some(line) = read_optional(&self.path(HUB_FILE)).await? else {
            tracing::debug!("no hub preference stored, using default hub");
            return Ok(HubPreference::default());
        };
        if line.is_empty() {
            return Ok(HubPreference::default());
        }

        let (base_url, api_key) = match line.split_once('|') {
            Some((url, key)) if !key.is_empty() => (url.to_owned(), Some(key.to_owned())),
            Some((url, _)) => (url.to_owned(), None),
            None => (line, None),
        };

        Ok(HubPreference { base_url, api_key })
    }

    async fn save_hub(&self, hub: &HubPreference) -> Result<()> {
        let line = match &hub.api_key {
            Some(key) => format!("{}|{}", hub.base_url, key),
            None => hub.base_url.clone(),
        };
        write_private(&self.path(HUB_FILE), &line).await
    }
}
