//! HTTP marketplace gateway publisher.
//!
//! POSTs asset descriptors to a gateway service that anchors them
//! on-chain and returns the resulting references. The on-chain protocol
//! is the gateway's concern, not ours.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{AssetPublisher, PublishError};
use crate::account::Account;
use crate::model::{AssetDescriptor, AssetMetadata, PublishedAsset};

#[derive(Serialize)]
struct GatewayRequest<'a> {
    publisher: &'a str,
    network: &'a str,
    name: &'a str,
    url: &'a str,
    metadata: &'a AssetMetadata,
    pricing: Option<&'a str>,
}

#[derive(Deserialize)]
struct GatewayResponse {
    data_nft: String,
    datatoken: String,
    did: String,
}

/// Publisher backed by a marketplace gateway HTTP endpoint.
pub struct GatewayPublisher {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayPublisher {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, PublishError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| PublishError::GatewayUnavailable(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn assets_url(&self) -> String {
        format!("{}/assets", self.base_url)
    }
}

#[async_trait]
impl AssetPublisher for GatewayPublisher {
    async fn publish(
        &self,
        account: &Account,
        network: &str,
        descriptor: &AssetDescriptor,
    ) -> Result<PublishedAsset, PublishError> {
        let request = GatewayRequest {
            publisher: account.address(),
            network,
            name: &descriptor.name,
            url: &descriptor.source_url,
            metadata: &descriptor.metadata,
            pricing: descriptor.pricing.as_deref(),
        };

        let response = self
            .http
            .post(self.assets_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Err(PublishError::Rejected {
                name: descriptor.name.clone(),
                reason: format!("HTTP {status}: {reason}"),
            });
        }

        let refs: GatewayResponse = response
            .json()
            .await
            .map_err(|e| PublishError::MalformedResponse(e.to_string()))?;
        if refs.did.is_empty() {
            return Err(PublishError::MalformedResponse(
                "gateway returned an empty did".to_string(),
            ));
        }

        Ok(PublishedAsset {
            kind: descriptor.kind,
            data_nft: refs.data_nft,
            datatoken: refs.datatoken,
            did: refs.did,
            metadata: descriptor.metadata.clone(),
            price: Some(descriptor.price_label()),
        })
    }
}
