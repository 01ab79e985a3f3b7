//! # Mast
//!
//! Unified API for publishing casts: compose, sign, and submit, plus signer
//! authorization and hub selection.
//!
//! ## Overview
//!
//! [`Publisher`] runs the pipeline from user content to an accepted
//! message: validate, resolve the channel, encode, hash, sign, submit.
//! Identity comes from a [`CredentialStore`](mast_store::CredentialStore);
//! signers get there either through [`account::authorize_signer`] (manual
//! entry, verified against the hub) or [`login::begin_login`] (remote
//! authorization with mobile approval).
//!
//! ## Key Types
//!
//! - [`Publisher`] - The publishing pipeline
//! - [`LoginHandle`] / [`LoginOutcome`] - A remote authorization in flight
//! - [`PublishError`] - Everything that can fail a publish
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mast::Publisher;
//! use mast_core::CastContent;
//! use mast_net::ReqwestTransport;
//! use mast_store::FileStore;
//!
//! async fn example() {
//!     let store = Arc::new(FileStore::in_home().unwrap());
//!     let publisher = Publisher::new(store, ReqwestTransport::new());
//!
//!     let content = CastContent::new("gm").with_channel("dev");
//!     let ack = publisher.publish(&content).await.unwrap();
//!     println!("cast accepted: {}", ack.hash);
//! }
//! ```

pub mod account;
pub mod error;
pub mod login;
pub mod publisher;

pub use account::{authorize_signer, select_hub};
pub use error::{AccountError, LoginError, PublishError};
pub use login::{begin_login, LoginHandle, LoginOutcome, PollConfig};
pub use publisher::Publisher;
