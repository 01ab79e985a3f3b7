//! Hub client: message submission and hub-side checks.
//!
//! A hub accepts signed messages over HTTP. Submission is a single attempt;
//! there is no retry policy at this layer or above it.

use serde::Deserialize;

use mast_core::Ed25519PublicKey;

use crate::error::{HubError, SubmitError};
use crate::transport::{HttpRequest, Transport};

/// Acknowledgement for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAck {
    /// The message hash as reported by the hub, `0x`-prefixed hex.
    pub hash: String,
}

#[derive(Deserialize)]
struct SubmitResponse {
    hash: String,
}

/// Client for a single hub.
pub struct HubClient<T> {
    transport: T,
    base_url: String,
    api_key: Option<String>,
}

impl<T: Transport> HubClient<T> {
    /// Client for the hub at `base_url`, authenticating with `api_key` if set.
    pub fn new(transport: T, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            api_key,
        }
    }

    fn with_api_key(&self, request: HttpRequest) -> HttpRequest {
        match &self.api_key {
            Some(key) => request.header("x-api-key", key.clone()),
            None => request,
        }
    }

    /// Submit an encoded message envelope.
    ///
    /// Returns the hub-reported hash on success. Rejections are classified
    /// by status; anything else non-success carries the raw status and body.
    pub async fn submit_message(&self, wire_bytes: &[u8]) -> Result<SubmitAck, SubmitError> {
        let request = self
            .with_api_key(HttpRequest::post(format!(
                "{}/v1/submitMessage",
                self.base_url
            )))
            .header("Content-Type", "application/octet-stream")
            .body(wire_bytes.to_vec());

        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            tracing::warn!(status = response.status, "hub rejected message");
            return Err(match response.status {
                401 => SubmitError::AuthenticationFailed,
                402 => SubmitError::PaymentRequired,
                403 => SubmitError::Forbidden,
                429 => SubmitError::RateLimited,
                status => SubmitError::SubmissionFailed {
                    status,
                    body: response.text(),
                },
            });
        }

        let ack: SubmitResponse = response
            .json()
            .map_err(|err| SubmitError::MalformedResponse(err.to_string()))?;

        Ok(SubmitAck { hash: ack.hash })
    }

    /// Check that `signer` is registered on-chain for `fid` on this hub.
    pub async fn verify_signer(
        &self,
        fid: u64,
        signer: &Ed25519PublicKey,
    ) -> Result<(), HubError> {
        let url = format!(
            "{}/v1/onChainSignersByFid?fid={}&signer=0x{}",
            self.base_url,
            fid,
            signer.to_hex()
        );
        let response = self
            .transport
            .execute(self.with_api_key(HttpRequest::get(url)))
            .await?;

        if !response.is_success() {
            return Err(HubError::SignerNotAuthorized {
                status: response.status,
            });
        }
        Ok(())
    }

    /// Check that the hub is reachable and answering.
    pub async fn info(&self) -> Result<(), HubError> {
        let url = format!("{}/v1/info", self.base_url);
        let response = self
            .transport
            .execute(self.with_api_key(HttpRequest::get(url)))
            .await?;

        if !response.is_success() {
            return Err(HubError::HubUnavailable {
                status: response.status,
            });
        }
        Ok(())
    }
}
