//! # Mast Net
//!
//! HTTP clients for the three services a cast publisher talks to: the hub
//! (message submission and signer checks), the channel directory (channel
//! id to canonical URL), and the key issuer (remote authorization).
//!
//! ## Key Types
//!
//! - [`Transport`] - The async trait all clients talk through
//! - [`ReqwestTransport`] - Production transport
//! - [`HubClient`] - Submission, signer verification, info check
//! - [`ChannelDirectory`] - Channel resolution
//! - [`KeyIssuerClient`] - Sign-in and approval polling
//!
//! ## Design Notes
//!
//! - **One attempt per call**: no retries at this layer; callers decide
//!   what a failure means
//! - **Status classification**: hub rejections map to distinct errors for
//!   401, 402, 403, and 429
//! - **Scripted testing**: [`transport::scripted::ScriptedTransport`]
//!   replays canned responses and records requests

pub mod channel;
pub mod error;
pub mod hub;
pub mod issuer;
pub mod transport;

pub use channel::{ChannelDirectory, DEFAULT_DIRECTORY_URL};
pub use error::{AuthorizationError, HubError, ResolveError, SubmitError, TransportError};
pub use hub::{HubClient, SubmitAck};
pub use issuer::{KeyIssuerClient, PollStatus, SignInSession, DEFAULT_ISSUER_URL};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
