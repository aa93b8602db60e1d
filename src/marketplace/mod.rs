//! Marketplace protocol client capability.
//!
//! Publishing an asset means registering its metadata with the
//! marketplace and receiving three references back: a data NFT address,
//! a fungible access-token address, and a decentralized identifier. The
//! protocol itself is an external collaborator; the production
//! implementation in [`gateway`] delegates to a marketplace gateway
//! service over HTTP.

pub mod gateway;

pub use gateway::GatewayPublisher;

use async_trait::async_trait;
use thiserror::Error;

use crate::account::Account;
use crate::model::{AssetDescriptor, PublishedAsset};

/// Error type for asset publishing.
#[derive(Debug, Error)]
pub enum PublishError {
    /// No marketplace gateway is configured or usable; real-mode
    /// publishing cannot proceed at all.
    #[error("marketplace gateway unavailable: {0}")]
    GatewayUnavailable(String),

    #[error("gateway rejected asset '{name}': {reason}")]
    Rejected { name: String, reason: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed gateway response: {0}")]
    MalformedResponse(String),
}

/// Publishes one asset per call.
///
/// A failed call must leave the publisher usable for further assets;
/// callers isolate failures per asset.
#[async_trait]
pub trait AssetPublisher: Send + Sync {
    async fn publish(
        &self,
        account: &Account,
        network: &str,
        descriptor: &AssetDescriptor,
    ) -> Result<PublishedAsset, PublishError>;
}
