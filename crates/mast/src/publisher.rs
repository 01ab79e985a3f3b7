//! The publishing pipeline: content to signed message to hub.
//!
//! Publishing is strictly sequential: validate, load credentials, resolve
//! the channel (if any), encode, hash, sign, submit. Every step either
//! succeeds or fails the publish; nothing is retried.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use mast_core::{
    farcaster_timestamp, CastBody, CastContent, FarcasterNetwork, MessageData, MessageEnvelope,
    SignerKeypair,
};
use mast_net::{ChannelDirectory, HubClient, SubmitAck, Transport, DEFAULT_DIRECTORY_URL};
use mast_store::{CredentialStore, HubStore};

use crate::error::PublishError;

/// Publishes casts on behalf of the stored identity.
pub struct Publisher<S, T> {
    store: Arc<S>,
    transport: T,
    directory_url: String,
    network: FarcasterNetwork,
}

impl<S, T> Publisher<S, T>
where
    S: CredentialStore + HubStore,
    T: Transport + Clone,
{
    /// Publisher over the given store and transport.
    pub fn new(store: Arc<S>, transport: T) -> Self {
        Self {
            store,
            transport,
            directory_url: DEFAULT_DIRECTORY_URL.to_owned(),
            network: FarcasterNetwork::Mainnet,
        }
    }

    /// Use a custom channel directory endpoint.
    pub fn with_directory_url(mut self, url: impl Into<String>) -> Self {
        self.directory_url = url.into();
        self
    }

    /// Target a different network.
    pub fn with_network(mut self, network: FarcasterNetwork) -> Self {
        self.network = network;
        self
    }

    /// Publish a cast.
    ///
    /// Content is validated before anything touches the network. Returns
    /// the hub-reported hash of the accepted message.
    pub async fn publish(&self, content: &CastContent) -> Result<SubmitAck, PublishError> {
        content.validate()?;

        let credentials = self.store.load_credentials().await?;

        let parent_url = match content.channel_id.as_deref() {
            Some(channel_id) if !channel_id.is_empty() => {
                let directory =
                    ChannelDirectory::with_base_url(self.transport.clone(), &self.directory_url);
                Some(directory.resolve(channel_id).await?.canonical_url)
            }
            _ => None,
        };

        let body = CastBody::from_content(content, parent_url)?;
        let data = MessageData::cast_add(
            credentials.fid,
            farcaster_timestamp(now_unix()),
            self.network,
            body,
        );

        let keypair = SignerKeypair::from_seed(&credentials.seed);
        let envelope = MessageEnvelope::build(&data, &keypair);

        let hub = self.store.load_hub().await?;
        let client = HubClient::new(self.transport.clone(), hub.base_url, hub.api_key);
        let ack = client.submit_message(&envelope.to_wire_bytes()).await?;

        tracing::debug!(fid = credentials.fid, hash = %ack.hash, "cast accepted");
        Ok(ack)
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
