//! Key issuer client for remote authorization.
//!
//! The issuer mints a fresh Ed25519 signer, hands back an approval deep
//! link, and lets the client poll until the user approves the key from
//! their mobile app. Key material in the sign-in response is parsed
//! immediately so a malformed seed fails the flow before any polling.

use serde::Deserialize;

use mast_core::SignerSeed;

use crate::error::AuthorizationError;
use crate::transport::{HttpRequest, Transport};

/// Default key issuer endpoint.
pub const DEFAULT_ISSUER_URL: &str = "https://mast-server.stevedsimkins.workers.dev";

/// A sign-in session: a minted signer awaiting user approval.
#[derive(Debug, Clone)]
pub struct SignInSession {
    /// Deep link the user opens (or scans) to approve the key.
    pub approval_url: String,
    /// Opaque token identifying this session when polling.
    pub polling_token: String,
    /// Seed of the freshly minted signer.
    pub seed: SignerSeed,
}

/// Outcome of one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStatus {
    /// The user approved the key; `fid` is their identity.
    Approved { fid: u64 },
    /// Not approved yet; poll again.
    Pending,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    deep_link_url: String,
    polling_token: String,
    private_key: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PollResponse {
    state: String,
    #[serde(default)]
    user_fid: u64,
}

/// Client for the key issuer.
pub struct KeyIssuerClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> KeyIssuerClient<T> {
    /// Issuer client against the default endpoint.
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, DEFAULT_ISSUER_URL)
    }

    /// Issuer client against a custom endpoint.
    pub fn with_base_url(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Request a fresh signer and an approval link.
    pub async fn sign_in(&self) -> Result<SignInSession, AuthorizationError> {
        let request = HttpRequest::post(format!("{}/sign-in", self.base_url))
            .header("Content-Type", "application/json")
            .body(b"{}".to_vec());
        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            return Err(AuthorizationError::IssuerUnavailable {
                status: response.status,
            });
        }

        let body: SignInResponse = response
            .json()
            .map_err(|err| AuthorizationError::MalformedResponse(err.to_string()))?;
        let seed = SignerSeed::from_hex(&body.private_key)?;

        Ok(SignInSession {
            approval_url: body.deep_link_url,
            polling_token: body.polling_token,
            seed,
        })
    }

    /// Ask the issuer whether the session has been approved.
    pub async fn poll(&self, polling_token: &str) -> Result<PollStatus, AuthorizationError> {
        let url = format!("{}/sign-in/poll?token={}", self.base_url, polling_token);
        let response = self.transport.execute(HttpRequest::get(url)).await?;

        if !response.is_success() {
            return Err(AuthorizationError::IssuerUnavailable {
                status: response.status,
            });
        }

        let body: PollResponse = response
            .json()
            .map_err(|err| AuthorizationError::MalformedResponse(err.to_string()))?;

        if body.state == "approved" {
            Ok(PollStatus::Approved { fid: body.user_fid })
        } else {
            Ok(PollStatus::Pending)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::scripted::ScriptedTransport;

    fn issuer(transport: ScriptedTransport) -> KeyIssuerClient<ScriptedTransport> {
        KeyIssuerClient::with_base_url(transport, "https://issuer.example")
    }

    fn sign_in_body(private_key: &str) -> Vec<u8> {
        format!(
            r#"{{"deepLinkUrl":"https://client.example/approve?t=abc","pollingToken":"tok-1","privateKey":"{private_key}","publicKey":"{}"}}"#,
            "cd".repeat(32)
        )
        .into_bytes()
    }

    #[tokio::test]
    async fn test_sign_in_parses_session() {
        let transport = ScriptedTransport::new();
        transport.push_response(200, sign_in_body(&"ab".repeat(32)));
        let issuer = issuer(transport);

        let session = issuer.sign_in().await.unwrap();
        assert_eq!(session.approval_url, "https://client.example/approve?t=abc");
        assert_eq!(session.polling_token, "tok-1");
        assert_eq!(session.seed, SignerSeed::from_bytes([0xab; 32]));
    }

    #[tokio::test]
    async fn test_sign_in_rejects_bad_key_material() {
        let transport = ScriptedTransport::new();
        transport.push_response(200, sign_in_body("deadbeef"));
        let issuer = issuer(transport);

        let err = issuer.sign_in().await.unwrap_err();
        assert!(matches!(err, AuthorizationError::KeyMaterial(_)));
    }

    #[tokio::test]
    async fn test_sign_in_issuer_error() {
        let transport = ScriptedTransport::new();
        transport.push_response(503, b"down".to_vec());
        let issuer = issuer(transport);

        let err = issuer.sign_in().await.unwrap_err();
        assert!(matches!(
            err,
            AuthorizationError::IssuerUnavailable { status: 503 }
        ));
    }

    #[tokio::test]
    async fn test_poll_pending_then_approved() {
        let transport = ScriptedTransport::new();
        transport.push_response(200, br#"{"state":"pending"}"#.to_vec());
        transport.push_response(200, br#"{"state":"approved","userFid":6596}"#.to_vec());
        let issuer = issuer(transport);

        assert_eq!(issuer.poll("tok-1").await.unwrap(), PollStatus::Pending);
        assert_eq!(
            issuer.poll("tok-1").await.unwrap(),
            PollStatus::Approved { fid: 6596 }
        );

        let requests = issuer.transport.requests();
        assert_eq!(
            requests[0].url,
            "https://issuer.example/sign-in/poll?token=tok-1"
        );
    }

    #[tokio::test]
    async fn test_poll_server_error_terminates() {
        let transport = ScriptedTransport::new();
        transport.push_response(500, b"oops".to_vec());
        let issuer = issuer(transport);

        let err = issuer.poll("tok-1").await.unwrap_err();
        assert!(matches!(
            err,
            AuthorizationError::IssuerUnavailable { status: 500 }
        ));
    }
}
