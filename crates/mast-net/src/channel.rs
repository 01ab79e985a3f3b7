//! Channel directory client.
//!
//! Resolves a channel identifier (the short name users type, like `dev`) to
//! the canonical channel URL that casts carry as their parent. Resolution
//! happens once per publish and is never cached.

use serde::Deserialize;

use mast_core::ChannelReference;

use crate::error::ResolveError;
use crate::transport::{HttpRequest, Transport};

/// Default channel directory endpoint.
pub const DEFAULT_DIRECTORY_URL: &str = "https://api.warpcast.com/v1";

/// Client for the channel directory.
pub struct ChannelDirectory<T> {
    transport: T,
    base_url: String,
}

#[derive(Deserialize)]
struct ChannelEnvelope {
    result: ChannelResult,
}

#[derive(Deserialize)]
struct ChannelResult {
    channel: ChannelRecord,
}

#[derive(Deserialize)]
struct ChannelRecord {
    url: String,
}

impl<T: Transport> ChannelDirectory<T> {
    /// Directory client against the default endpoint.
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, DEFAULT_DIRECTORY_URL)
    }

    /// Directory client against a custom endpoint.
    pub fn with_base_url(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Resolve a channel identifier to its canonical URL.
    pub async fn resolve(&self, channel_id: &str) -> Result<ChannelReference, ResolveError> {
        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("channelId", channel_id)
            .finish();
        let url = format!("{}/channel?{}", self.base_url, query);
        let response = self.transport.execute(HttpRequest::get(url)).await?;

        if !response.is_success() {
            tracing::warn!(channel_id, status = response.status, "channel fetch failed");
            return Err(ResolveError::ChannelNotFound {
                channel_id: channel_id.to_owned(),
            });
        }

        let envelope: ChannelEnvelope = response
            .json()
            .map_err(|err| ResolveError::MalformedResponse(err.to_string()))?;

        let canonical_url = envelope.result.channel.url;
        if canonical_url.is_empty() {
            return Err(ResolveError::MalformedResponse(
                "channel record has no url".to_owned(),
            ));
        }

        Ok(ChannelReference {
            channel_id: channel_id.to_owned(),
            canonical_url,
        })
    }
}
