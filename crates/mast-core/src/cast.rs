//! Cast content: what the user wrote, before protocol encoding.

use crate::error::CoreError;

/// Maximum number of embed URLs a cast can carry.
pub const MAX_EMBEDS: usize = 2;

/// User-authored cast content.
///
/// This is the input to the publishing pipeline: free text, up to two embed
/// URLs, and an optional channel identifier. The channel is resolved to its
/// canonical URL at publish time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CastContent {
    pub text: String,
    pub embed_urls: Vec<String>,
    pub channel_id: Option<String>,
}

impl CastContent {
    /// Start from plain text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            embed_urls: Vec::new(),
            channel_id: None,
        }
    }

    /// Add an embed URL slot.
    pub fn with_embed(mut self, url: impl Into<String>) -> Self {
        self.embed_urls.push(url.into());
        self
    }

    /// Attach a channel identifier.
    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// The embed slots that are actually filled. Empty strings are dropped,
    /// never encoded as empty embeds.
    pub fn embeds(&self) -> impl Iterator<Item = &str> {
        self.embed_urls.iter().map(String::as_str).filter(|u| !u.is_empty())
    }

    /// True when no field carries anything.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.embeds().next().is_none()
            && self.channel_id.as_deref().map_or(true, str::is_empty)
    }

    /// Check the content invariants before encoding is attempted.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.is_empty() {
            return Err(CoreError::EmptyCast);
        }
        let embeds = self.embeds().count();
        if embeds > MAX_EMBEDS {
            return Err(CoreError::TooManyEmbeds {
                max: MAX_EMBEDS,
                got: embeds,
            });
        }
        Ok(())
    }
}

/// A channel identifier resolved to its canonical reference URL.
///
/// Resolved once per publish; never cached across invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelReference {
    pub channel_id: String,
    pub canonical_url: String,
}
