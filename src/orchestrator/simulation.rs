//! Simulated publishing.
//!
//! Produces a report with the same shape as a real run, using fixed
//! illustrative identifiers so downstream consumers need no branching and
//! repeated runs stay deterministic.

use chrono::Utc;

use crate::account::Account;
use crate::model::{AssetDescriptor, AssetKind, PublishReport, PublishedAsset, RunMode};

/// Network label recorded on simulated reports.
pub const SIMULATED_NETWORK: &str = "Simulated Marketplace Network";

/// Fixed placeholder identifiers, one set per asset kind.
pub const FREE_DATA_NFT: &str = "0x1234567890abcdef1234567890abcdef12345678";
pub const FREE_DATATOKEN: &str = "0xabcdef1234567890abcdef1234567890abcdef12";
pub const FREE_DID: &str =
    "did:mkt:1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
pub const PREMIUM_DATA_NFT: &str = "0x9876543210fedcba9876543210fedcba98765432";
pub const PREMIUM_DATATOKEN: &str = "0xfedcba9876543210fedcba9876543210fedcba98";
pub const PREMIUM_DID: &str =
    "did:mkt:fedcba9876543210fedcba9876543210fedcba9876543210fedcba9876543210";

/// Build a simulated asset for one descriptor.
pub fn simulated_asset(descriptor: &AssetDescriptor) -> PublishedAsset {
    let (data_nft, datatoken, did) = match descriptor.kind {
        AssetKind::FreeDirectory => (FREE_DATA_NFT, FREE_DATATOKEN, FREE_DID),
        AssetKind::PremiumVerification => (PREMIUM_DATA_NFT, PREMIUM_DATATOKEN, PREMIUM_DID),
    };
    PublishedAsset {
        kind: descriptor.kind,
        data_nft: data_nft.to_string(),
        datatoken: datatoken.to_string(),
        did: did.to_string(),
        metadata: descriptor.metadata.clone(),
        price: Some(descriptor.price_label()),
    }
}

/// Build a full simulated report for the given descriptors.
pub fn simulated_report(account: &Account, descriptors: &[AssetDescriptor]) -> PublishReport {
    PublishReport {
        mode: RunMode::Simulation,
        published_at: Utc::now(),
        publisher: account.address().to_string(),
        network: SIMULATED_NETWORK.to_string(),
        assets: descriptors.iter().map(simulated_asset).collect(),
    }
}
