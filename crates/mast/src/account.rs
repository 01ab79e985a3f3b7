//! Account management: manual signer authorization and hub selection.

use mast_core::{Ed25519PublicKey, SignerKeypair, SignerSeed};
use mast_net::{HubClient, Transport};
use mast_store::{CredentialStore, Credentials, HubPreference, HubStore};

use crate::error::AccountError;

/// Authorize a manually supplied signer for a fid and persist it.
///
/// The seed is parsed before any network traffic, then checked against the
/// configured hub's on-chain signer registry. Nothing is saved unless the
/// hub confirms the signer.
pub async fn authorize_signer<S, T>(
    store: &S,
    transport: T,
    fid: u64,
    seed_hex: &str,
) -> Result<Ed25519PublicKey, AccountError>
where
    S: CredentialStore + HubStore,
    T: Transport,
{
    let seed = SignerSeed::from_hex(seed_hex)?;
    let public_key = SignerKeypair::from_seed(&seed).public_key();

    let hub = store.load_hub().await?;
    let client = HubClient::new(transport, hub.base_url, hub.api_key);
    client.verify_signer(fid, &public_key).await?;

    store.save_credentials(&Credentials { fid, seed }).await?;
    Ok(public_key)
}

/// Select a hub and persist the preference.
///
/// The hub's info endpoint is checked first; an unreachable hub is never
/// saved.
pub async fn select_hub<S, T>(
    store: &S,
    transport: T,
    base_url: &str,
    api_key: Option<String>,
) -> Result<(), AccountError>
where
    S: HubStore,
    T: Transport,
{
    let client = HubClient::new(transport, base_url, api_key.clone());
    client.info().await?;

    store
        .save_hub(&HubPreference {
            base_url: base_url.to_owned(),
            api_key,
        })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mast_net::transport::scripted::ScriptedTransport;
    use mast_net::HubError;
    use mast_store::{MemoryStore, StoreError, DEFAULT_HUB_URL};

    #[tokio::test]
    async fn test_authorize_signer_saves_credentials() {
        let store = MemoryStore::new();
        let transport = ScriptedTransport::new();
        transport.push_response(200, br#"{"events":[]}"#.to_vec());

        let seed_hex = "ab".repeat(32);
        let public_key = authorize_signer(&store, &transport, 6596, &seed_hex)
            .await
            .unwrap();

        let creds = store.load_credentials().await.unwrap();
        assert_eq!(creds.fid, 6596);
        assert_eq!(creds.seed, SignerSeed::from_bytes([0xab; 32]));
        assert_eq!(
            public_key,
            SignerKeypair::from_seed(&creds.seed).public_key()
        );

        // Verification went to the default hub.
        let requests = transport.requests();
        assert!(requests[0]
            .url
            .starts_with(&format!("{DEFAULT_HUB_URL}/v1/onChainSignersByFid")));
    }

    #[tokio::test]
    async fn test_authorize_signer_rejects_bad_seed_before_network() {
        let store = MemoryStore::new();
        let transport = ScriptedTransport::new();

        let err = authorize_signer(&store, &transport, 6596, "not-hex")
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::KeyMaterial(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_authorize_signer_unverified_is_not_saved() {
        let store = MemoryStore::new();
        let transport = ScriptedTransport::new();
        transport.push_response(404, b"no signer".to_vec());

        let err = authorize_signer(&store, &transport, 6596, &"ab".repeat(32))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AccountError::Hub(HubError::SignerNotAuthorized { status: 404 })
        ));
        assert!(matches!(
            store.load_credentials().await,
            Err(StoreError::NoCredentials)
        ));
    }

    #[tokio::test]
    async fn test_select_hub_checks_info_before_saving() {
        let store = MemoryStore::new();
        let transport = ScriptedTransport::new();
        transport.push_response(200, br#"{"version":"1.0"}"#.to_vec());

        select_hub(
            &store,
            &transport,
            "https://hub.example",
            Some("key".to_owned()),
        )
        .await
        .unwrap();

        let hub = store.load_hub().await.unwrap();
        assert_eq!(hub.base_url, "https://hub.example");
        assert_eq!(hub.api_key.as_deref(), Some("key"));
        assert_eq!(transport.requests()[0].url, "https://hub.example/v1/info");
    }

    #[tokio::test]
    async fn test_select_hub_unreachable_is_not_saved() {
        let store = MemoryStore::new();
        let transport = ScriptedTransport::new();
        transport.push_response(502, b"bad gateway".to_vec());

        let err = select_hub(&store, &transport, "https://hub.example", None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AccountError::Hub(HubError::HubUnavailable { status: 502 })
        ));
        // Preference still falls back to the default.
        assert_eq!(store.load_hub().await.unwrap(), HubPreference::default());
    }
}
