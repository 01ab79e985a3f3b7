//! Remote authorization: mint a signer, wait for mobile approval.
//!
//! [`begin_login`] asks the key issuer for a fresh signer and spawns a
//! background task that polls for approval. The caller shows the approval
//! URL to the user and awaits the handle; the outcome is delivered exactly
//! once. Credentials are persisted inside the task the moment approval
//! lands, so the login survives even if the caller stops waiting.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;

use mast_net::{KeyIssuerClient, PollStatus, Transport};
use mast_store::{CredentialStore, Credentials};

use crate::error::LoginError;

/// How approval polling is paced.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    /// Delay before each poll, including the first.
    pub interval: Duration,
    /// Polls before the session is abandoned.
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        // 60 polls at 5s: up to five minutes of waiting.
        Self {
            interval: Duration::from_secs(5),
            max_attempts: 60,
        }
    }
}

/// Terminal result of a login session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The user approved the key; credentials are saved.
    Approved { fid: u64 },
    /// The user never approved within the polling window.
    TimedOut,
    /// Polling or persistence failed.
    Failed { reason: String },
}

/// A login session in flight.
#[derive(Debug)]
pub struct LoginHandle {
    /// Deep link the user opens (or scans) to approve the key.
    pub approval_url: String,
    outcome: oneshot::Receiver<LoginOutcome>,
}

impl LoginHandle {
    /// Wait for the session to finish.
    pub async fn wait(self) -> LoginOutcome {
        self.outcome.await.unwrap_or(LoginOutcome::Failed {
            reason: "login task aborted".to_owned(),
        })
    }
}

/// Start a remote authorization session.
///
/// Fails immediately if the issuer cannot mint a signer (including when it
/// hands back malformed key material). Otherwise returns a handle carrying
/// the approval URL; polling continues in the background.
pub async fn begin_login<S, T>(
    store: Arc<S>,
    issuer: KeyIssuerClient<T>,
    config: PollConfig,
) -> Result<LoginHandle, LoginError>
where
    S: CredentialStore + 'static,
    T: Transport + 'static,
{
    let session = issuer.sign_in().await.map_err(LoginError::Authorization)?;
    let approval_url = session.approval_url.clone();

    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let outcome = poll_until_settled(store.as_ref(), &issuer, &session.polling_token, session.seed, config).await;
        // The receiver may have been dropped; the credentials are already
        // saved either way.
        let _ = tx.send(outcome);
    });

    Ok(LoginHandle {
        approval_url,
        outcome: rx,
    })
}

async fn poll_until_settled<S, T>(
    store: &S,
    issuer: &KeyIssuerClient<T>,
    polling_token: &str,
    seed: mast_core::SignerSeed,
    config: PollConfig,
) -> LoginOutcome
where
    S: CredentialStore,
    T: Transport,
{
    for _ in 0..config.max_attempts {
        tokio::time::sleep(config.interval).await;

        match issuer.poll(polling_token).await {
            Ok(PollStatus::Approved { fid }) => {
                if let Err(err) = store.save_credentials(&Credentials { fid, seed }).await {
                    tracing::warn!(fid, "approved key could not be saved: {err}");
                    return LoginOutcome::Failed {
                        reason: err.to_string(),
                    };
                }
                return LoginOutcome::Approved { fid };
            }
            Ok(PollStatus::Pending) => {}
            Err(err) => {
                return LoginOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    LoginOutcome::TimedOut
}
