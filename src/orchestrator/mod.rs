//! Publish orchestrator.
//!
//! Scans endpoint candidates strictly in order, gates on the publisher
//! balance, and publishes each asset independently. Whenever real
//! publishing cannot proceed, the run degrades to a simulated report with
//! the same shape (or, in forced-real mode, to an empty real-mode
//! report). [`Orchestrator::run`] always produces a report and never
//! propagates an error to its caller.

pub mod simulation;

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::account::Account;
use crate::chain::{ChainClient, ChainError, Connector};
use crate::config::Mode;
use crate::marketplace::AssetPublisher;
use crate::model::{AssetDescriptor, Endpoint, PublishReport, PublishedAsset, RunMode};

/// Returned by [`Orchestrator::select_network`] once every candidate has
/// been tried and failed.
#[derive(Debug, Error)]
#[error("no network available after trying {attempted} candidate(s)")]
pub struct NoNetworkAvailable {
    pub attempted: usize,
}

/// Settings injected into the orchestrator; no embedded literals.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Candidates in preference order.
    pub endpoints: Vec<Endpoint>,
    pub mode: Mode,
    /// Funds gate threshold in wei.
    pub min_balance_wei: u128,
    pub descriptors: Vec<AssetDescriptor>,
}

/// Drives one publish run end to end.
pub struct Orchestrator {
    settings: Settings,
    account: Account,
    connector: Arc<dyn Connector>,
    publisher: Option<Arc<dyn AssetPublisher>>,
}

impl Orchestrator {
    pub fn new(
        settings: Settings,
        account: Account,
        connector: Arc<dyn Connector>,
        publisher: Option<Arc<dyn AssetPublisher>>,
    ) -> Self {
        Self {
            settings,
            account,
            connector,
            publisher,
        }
    }

    /// Try candidates strictly in order; the first whose connection and
    /// chain-id probe both succeed wins, and later candidates are never
    /// touched. No retry or backoff: each candidate gets one attempt.
    pub async fn select_network(
        &self,
    ) -> Result<(Box<dyn ChainClient>, String), NoNetworkAvailable> {
        for endpoint in &self.settings.endpoints {
            match self.probe(endpoint).await {
                Ok(client) => {
                    tracing::info!(
                        network = %endpoint.label,
                        url = %endpoint.url,
                        "Connected to network"
                    );
                    return Ok((client, endpoint.label.clone()));
                }
                Err(e) => {
                    tracing::warn!(
                        network = %endpoint.label,
                        error = %e,
                        "Endpoint candidate failed, trying next"
                    );
                }
            }
        }
        Err(NoNetworkAvailable {
            attempted: self.settings.endpoints.len(),
        })
    }

    async fn probe(&self, endpoint: &Endpoint) -> Result<Box<dyn ChainClient>, ChainError> {
        let client = self.connector.connect(&endpoint.url).await?;
        // A connection only counts once the chain actually answers.
        let chain_id = client.chain_id().await?;
        tracing::debug!(chain_id, network = %endpoint.label, "Chain responded");
        Ok(client)
    }

    /// Balance gate. Below-threshold is not an error; a failed query is
    /// logged and gates the same way as an insufficient balance.
    pub async fn check_funds(&self, client: &dyn ChainClient) -> bool {
        match client.get_balance(self.account.address()).await {
            Ok(balance) => {
                let sufficient = balance >= self.settings.min_balance_wei;
                tracing::info!(
                    balance_wei = %balance,
                    minimum_wei = %self.settings.min_balance_wei,
                    sufficient,
                    "Publisher balance checked"
                );
                sufficient
            }
            Err(e) => {
                tracing::warn!(error = %e, "Balance query failed, treating as insufficient funds");
                false
            }
        }
    }

    /// Publish every descriptor, isolating failures per asset: a failed
    /// attempt is logged and skipped without affecting the others.
    async fn publish_assets(
        &self,
        publisher: &dyn AssetPublisher,
        network: &str,
    ) -> Vec<PublishedAsset> {
        let mut assets = Vec::with_capacity(self.settings.descriptors.len());
        for descriptor in &self.settings.descriptors {
            match publisher.publish(&self.account, network, descriptor).await {
                Ok(asset) => {
                    tracing::info!(name = %descriptor.name, did = %asset.did, "Asset published");
                    assets.push(asset);
                }
                Err(e) => {
                    tracing::warn!(
                        name = %descriptor.name,
                        error = %e,
                        "Asset publish failed, skipping"
                    );
                }
            }
        }
        assets
    }

    /// Run the full publish flow.
    ///
    /// Never fails: when real publishing cannot proceed the result is
    /// either a simulated report (`Auto`, `Simulation`) or an empty
    /// real-mode report (`Real`).
    pub async fn run(&self) -> PublishReport {
        if self.settings.mode == Mode::Simulation {
            tracing::info!("Simulation mode forced, skipping network selection");
            return self.simulated_report();
        }

        let Some(publisher) = self.publisher.clone() else {
            tracing::warn!("No marketplace client configured, real publishing unavailable");
            return self.degraded_report("no marketplace client");
        };

        let (client, network) = match self.select_network().await {
            Ok(selected) => selected,
            Err(e) => {
                tracing::warn!(error = %e, "Network selection exhausted");
                return self.degraded_report("no network available");
            }
        };

        if !self.check_funds(client.as_ref()).await {
            return self.degraded_report("insufficient funds");
        }

        let assets = self.publish_assets(publisher.as_ref(), &network).await;
        PublishReport {
            mode: RunMode::Real,
            published_at: Utc::now(),
            publisher: self.account.address().to_string(),
            network,
            assets,
        }
    }

    /// Degrade according to mode policy: `Auto` substitutes a simulated
    /// report, forced-real records the failure as an empty asset list.
    fn degraded_report(&self, cause: &str) -> PublishReport {
        match self.settings.mode {
            Mode::Real => {
                tracing::warn!(cause, "Real mode forced, reporting empty result");
                PublishReport {
                    mode: RunMode::Real,
                    published_at: Utc::now(),
                    publisher: self.account.address().to_string(),
                    network: "unavailable".to_string(),
                    assets: Vec::new(),
                }
            }
            Mode::Auto | Mode::Simulation => {
                tracing::info!(cause, "Falling back to simulation");
                self.simulated_report()
            }
        }
    }

    fn simulated_report(&self) -> PublishReport {
        simulation::simulated_report(&self.account, &self.settings.descriptors)
    }
}
