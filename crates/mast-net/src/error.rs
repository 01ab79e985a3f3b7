//! Error types for the network module.

use thiserror::Error;

/// Transport-level failure: the request never produced an HTTP response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, DNS, or TLS failure.
    #[error("network error: {0}")]
    Network(String),
}

/// Errors resolving a channel identifier to its canonical URL.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The directory does not know this channel.
    #[error("channel not found: {channel_id:?}")]
    ChannelNotFound { channel_id: String },

    /// The directory answered with something that is not a channel record.
    #[error("malformed channel directory response: {0}")]
    MalformedResponse(String),

    /// Transport-level error.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors submitting a signed message to a hub.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The hub rejected the API key (401).
    #[error("authentication failed (401): check your API key")]
    AuthenticationFailed,

    /// The hub requires payment (402).
    #[error("payment required (402): check your account status and billing")]
    PaymentRequired,

    /// The hub refused the request (403).
    #[error("forbidden (403): no permission to use this endpoint")]
    Forbidden,

    /// The hub is rate limiting this client (429).
    #[error("rate limited (429): try again later")]
    RateLimited,

    /// Any other non-success status.
    #[error("submission failed: HTTP status {status}: {body}")]
    SubmissionFailed { status: u16, body: String },

    /// The hub accepted the message but the acknowledgement was unreadable.
    #[error("malformed hub response: {0}")]
    MalformedResponse(String),

    /// Transport-level error.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors checking a hub: signer verification or the info endpoint.
#[derive(Debug, Error)]
pub enum HubError {
    /// The hub does not list this signer as active for the fid.
    #[error("signer not authorized for fid (HTTP status {status})")]
    SignerNotAuthorized { status: u16 },

    /// The hub's info endpoint did not answer with success.
    #[error("hub unavailable (HTTP status {status}): check that the hub is active")]
    HubUnavailable { status: u16 },

    /// Transport-level error.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors talking to the key issuer during remote authorization.
#[derive(Debug, Error)]
pub enum AuthorizationError {
    /// The issuer answered with a non-success status.
    #[error("key issuer returned error code: {status}")]
    IssuerUnavailable { status: u16 },

    /// The issuer's response could not be parsed.
    #[error("malformed key issuer response: {0}")]
    MalformedResponse(String),

    /// The issuer handed out key material of the wrong shape.
    #[error("issuer returned invalid key material: {0}")]
    KeyMaterial(#[from] mast_core::KeyMaterialError),

    /// Transport-level error.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
