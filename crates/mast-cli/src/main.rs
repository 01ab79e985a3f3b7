//! Command line client for publishing casts.

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mast::{authorize_signer, begin_login, select_hub, LoginOutcome, PollConfig, Publisher};
use mast_core::CastContent;
use mast_net::{KeyIssuerClient, ReqwestTransport};
use mast_store::FileStore;

#[derive(Parser)]
#[command(name = "mast", version)]
#[command(about = "Publish casts from the command line")]
#[command(arg_required_else_help(true))]
struct MastCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Authorize with an existing signer private key and fid
    #[command(visible_alias = "a")]
    Auth {
        /// Your fid
        #[arg(long)]
        fid: u64,
        /// Signer private key, hex (optional 0x prefix)
        #[arg(long)]
        key: String,
    },
    /// Log in by approving a freshly minted signer from the mobile app
    #[command(visible_alias = "l")]
    Login {
        /// Key issuer base URL
        #[arg(long, default_value = mast_net::DEFAULT_ISSUER_URL)]
        issuer: String,
    },
    /// Send a new cast
    #[command(visible_alias = "n")]
    New {
        /// Cast message text
        #[arg(short, long)]
        message: Option<String>,
        /// URL to embed in the cast
        #[arg(short, long)]
        url: Option<String>,
        /// Second URL to embed in the cast
        #[arg(long)]
        url2: Option<String>,
        /// Channel ID for the cast
        #[arg(short, long)]
        channel: Option<String>,
    },
    /// Set a preferred hub
    Hub {
        /// Hub base URL
        #[arg(long)]
        url: String,
        /// API key sent as x-api-key (required for some hubs)
        #[arg(long)]
        api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = MastCli::parse();
    let store = Arc::new(FileStore::in_home()?);
    let transport = ReqwestTransport::new();

    match cli.command {
        Commands::Auth { fid, key } => {
            let public_key = authorize_signer(store.as_ref(), transport, fid, &key).await?;
            println!("Signer 0x{} authorized for fid {fid}.", public_key.to_hex());
            println!("Credentials saved.");
        }
        Commands::Login { issuer } => {
            let issuer = KeyIssuerClient::with_base_url(transport, issuer);
            let handle = begin_login(store, issuer, PollConfig::default()).await?;

            println!("Open this link on your phone to approve the new signer:");
            println!("\n  {}\n", handle.approval_url);
            println!("Waiting for approval...");

            match handle.wait().await {
                LoginOutcome::Approved { fid } => {
                    println!("Key approved by fid {fid}. Credentials saved.");
                }
                LoginOutcome::TimedOut => bail!("timed out waiting for key approval"),
                LoginOutcome::Failed { reason } => bail!("login failed: {reason}"),
            }
        }
        Commands::New {
            message,
            url,
            url2,
            channel,
        } => {
            let mut content = CastContent::new(message.unwrap_or_default());
            if let Some(url) = url {
                content = content.with_embed(url);
            }
            if let Some(url) = url2 {
                content = content.with_embed(url);
            }
            if let Some(channel) = channel {
                content = content.with_channel(channel);
            }

            let publisher = Publisher::new(store, transport);
            let ack = publisher.publish(&content).await?;
            println!("Cast successful!");
            println!("Hash: {}", ack.hash);
        }
        Commands::Hub { url, api_key } => {
            select_hub(store.as_ref(), transport, &url, api_key).await?;
            println!("Hub preference saved!");
        }
    }

    Ok(())
}
