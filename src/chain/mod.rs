//! Blockchain RPC capability.
//!
//! The orchestrator talks to chains through the [`Connector`] and
//! [`ChainClient`] traits so endpoint behavior can be scripted in tests;
//! the production implementation is JSON-RPC over HTTP in [`rpc`].

pub mod rpc;

pub use rpc::{HttpChainClient, HttpConnector};

use async_trait::async_trait;
use thiserror::Error;

/// Error type for chain RPC operations.
///
/// Every variant is a per-endpoint, connection-class failure: the
/// orchestrator advances to the next candidate instead of aborting.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("endpoint returned HTTP status {0}")]
    HttpStatus(u16),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("malformed quantity in response: {0}")]
    MalformedQuantity(String),
}

/// A live connection to one blockchain endpoint.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Chain identifier; doubles as the liveness probe after connecting.
    async fn chain_id(&self) -> Result<u64, ChainError>;

    /// Latest block number.
    async fn block_number(&self) -> Result<u64, ChainError>;

    /// Account balance in wei.
    async fn get_balance(&self, address: &str) -> Result<u128, ChainError>;
}

/// Factory for chain clients, one per endpoint candidate.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, url: &str) -> Result<Box<dyn ChainClient>, ChainError>;
}
