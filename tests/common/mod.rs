//! Test doubles and fixtures for orchestrator tests.
//!
//! Provides:
//! - A scripted connector replaying per-endpoint behavior and recording
//!   attempt order
//! - A scripted publisher that fails for named assets
//! - Settings and account fixtures

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use shoal::account::Account;
use shoal::chain::{ChainClient, ChainError, Connector};
use shoal::config::Mode;
use shoal::marketplace::{AssetPublisher, PublishError};
use shoal::model::{default_descriptors, AssetDescriptor, Endpoint, PublishedAsset};
use shoal::orchestrator::Settings;

/// Well-known throwaway development key (deterministic ganache account 0).
pub const TEST_PRIVATE_KEY: &str =
    "0x4f3edf983ac636a65a842ce7c78d9aa706d3b113bce9c46f30d7d21715b23b1d";

pub fn test_account() -> Account {
    Account::from_private_key(TEST_PRIVATE_KEY).expect("test key is valid")
}

/// Settings with the built-in descriptor pair and a 0.01 ETH funds gate.
pub fn test_settings(endpoints: Vec<Endpoint>, mode: Mode) -> Settings {
    Settings {
        endpoints,
        mode,
        min_balance_wei: 10_000_000_000_000_000,
        descriptors: default_descriptors(),
    }
}

/// Scripted behavior for one endpoint URL.
#[derive(Clone, Copy)]
pub enum EndpointScript {
    /// The connection attempt itself fails.
    Unreachable,
    /// The connection succeeds but the chain never answers the probe.
    Dead,
    /// The chain answers the probe but every balance query errors.
    BalanceQueryFails,
    /// A healthy chain reporting the given publisher balance.
    Healthy { balance: u128 },
}

/// Connector replaying scripted endpoint behavior; records the order in
/// which URLs were attempted.
pub struct ScriptedConnector {
    scripts: HashMap<String, EndpointScript>,
    attempts: Mutex<Vec<String>>,
}

impl ScriptedConnector {
    pub fn new(scripts: &[(&str, EndpointScript)]) -> Arc<Self> {
        Arc::new(Self {
            scripts: scripts
                .iter()
                .map(|(url, script)| ((*url).to_string(), *script))
                .collect(),
            attempts: Mutex::new(Vec::new()),
        })
    }

    /// URLs attempted so far, in order.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connector for ScriptedConnector {
    async fn connect(&self, url: &str) -> Result<Box<dyn ChainClient>, ChainError> {
        self.attempts.lock().unwrap().push(url.to_string());
        match self.scripts.get(url) {
            None | Some(EndpointScript::Unreachable) => {
                Err(ChainError::Transport(format!("connection refused: {url}")))
            }
            Some(EndpointScript::Dead) => Ok(Box::new(FakeChainClient {
                probe_ok: false,
                balance: None,
            })),
            Some(EndpointScript::BalanceQueryFails) => Ok(Box::new(FakeChainClient {
                probe_ok: true,
                balance: None,
            })),
            Some(EndpointScript::Healthy { balance }) => Ok(Box::new(FakeChainClient {
                probe_ok: true,
                balance: Some(*balance),
            })),
        }
    }
}

struct FakeChainClient {
    probe_ok: bool,
    /// `None` means every balance query errors.
    balance: Option<u128>,
}

#[async_trait]
impl ChainClient for FakeChainClient {
    async fn chain_id(&self) -> Result<u64, ChainError> {
        if self.probe_ok {
            Ok(80001)
        } else {
            Err(ChainError::Rpc {
                code: -32000,
                message: "node not ready".to_string(),
            })
        }
    }

    async fn block_number(&self) -> Result<u64, ChainError> {
        if self.probe_ok {
            Ok(42)
        } else {
            Err(ChainError::Transport("connection reset".to_string()))
        }
    }

    async fn get_balance(&self, _address: &str) -> Result<u128, ChainError> {
        self.balance
            .ok_or_else(|| ChainError::Transport("connection reset".to_string()))
    }
}

/// Publisher that succeeds for every asset except the named ones.
pub struct ScriptedPublisher {
    fail_names: Vec<String>,
}

impl ScriptedPublisher {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            fail_names: Vec::new(),
        })
    }

    pub fn failing_for(names: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            fail_names: names.iter().map(|n| (*n).to_string()).collect(),
        })
    }
}

#[async_trait]
impl AssetPublisher for ScriptedPublisher {
    async fn publish(
        &self,
        _account: &Account,
        _network: &str,
        descriptor: &AssetDescriptor,
    ) -> Result<PublishedAsset, PublishError> {
        if self.fail_names.contains(&descriptor.name) {
            return Err(PublishError::Rejected {
                name: descriptor.name.clone(),
                reason: "scripted failure".to_string(),
            });
        }
        Ok(PublishedAsset {
            kind: descriptor.kind,
            data_nft: "0x1111111111111111111111111111111111111111".to_string(),
            datatoken: "0x2222222222222222222222222222222222222222".to_string(),
            did: format!("did:mkt:{}", hex::encode(descriptor.name.as_bytes())),
            metadata: descriptor.metadata.clone(),
            price: Some(descriptor.price_label()),
        })
    }
}
