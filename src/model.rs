//! Typed records for publish runs.
//!
//! Field names and nesting mirror the JSON files this tool writes, so a
//! report read back from disk deserializes to an equal value. The asset
//! kind is a tagged variant validated at construction rather than a free
//! string.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate blockchain endpoint, tried in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub label: String,
    pub url: String,
}

impl Endpoint {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, url) = s
            .split_once('=')
            .ok_or_else(|| format!("expected LABEL=URL, got '{s}'"))?;
        if label.is_empty() || url.is_empty() {
            return Err(format!("label and url must both be non-empty in '{s}'"));
        }
        Ok(Self::new(label, url))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.url)
    }
}

/// Kind of published asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    FreeDirectory,
    PremiumVerification,
}

/// Descriptive metadata attached to an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub name: String,
    pub description: String,
    pub author: String,
    pub created: DateTime<Utc>,
    pub license: String,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub asset_type: String,
}

/// Everything needed to publish one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    pub kind: AssetKind,
    pub name: String,
    pub source_url: String,
    pub metadata: AssetMetadata,
    /// Price label for gated access; `None` means free.
    pub pricing: Option<String>,
}

impl AssetDescriptor {
    /// Price label recorded on the published asset.
    pub fn price_label(&self) -> String {
        self.pricing.clone().unwrap_or_else(|| "Free".to_string())
    }
}

/// One successfully published (or simulated) asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedAsset {
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub data_nft: String,
    pub datatoken: String,
    pub did: String,
    pub metadata: AssetMetadata,
    pub price: Option<String>,
}

/// Whether a report came from real publishing or the simulation fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Real,
    Simulation,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => f.write_str("real"),
            Self::Simulation => f.write_str("simulation"),
        }
    }
}

/// Result of one publish run.
///
/// `assets` holds exactly the per-asset attempts that succeeded; an empty
/// list is valid and signals total failure while `mode` is still recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishReport {
    pub mode: RunMode,
    pub published_at: DateTime<Utc>,
    pub publisher: String,
    pub network: String,
    pub assets: Vec<PublishedAsset>,
}

/// Contract section of the soul-bound token integration template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSection {
    pub name: String,
    pub asset_dids: Vec<String>,
    pub features: Vec<String>,
}

/// Manual integration guide for wiring published asset identifiers into a
/// soul-bound token verification contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationTemplate {
    pub contract: ContractSection,
    pub published_assets: Vec<PublishedAsset>,
}

impl IntegrationTemplate {
    /// Build the template from a finished publish report.
    pub fn from_report(report: &PublishReport) -> Self {
        Self {
            contract: ContractSection {
                name: "AssetAccessSBT".to_string(),
                asset_dids: report.assets.iter().map(|a| a.did.clone()).collect(),
                features: vec![
                    "verification".to_string(),
                    "access_control".to_string(),
                    "sbt_minting".to_string(),
                ],
            },
            published_assets: report.assets.clone(),
        }
    }
}

/// The illustrative free-directory plus premium-verification pair used
/// when no descriptor file is supplied.
pub fn default_descriptors() -> Vec<AssetDescriptor> {
    let created = Utc::now();
    let source_url =
        "https://raw.githubusercontent.com/datasets/country-list/master/data.json".to_string();
    vec![
        AssetDescriptor {
            kind: AssetKind::FreeDirectory,
            name: "Volunteer Directory - Free Access".to_string(),
            source_url: source_url.clone(),
            metadata: AssetMetadata {
                name: "Volunteer Directory - Free Access".to_string(),
                description: "Basic volunteer records for public verification".to_string(),
                author: "Volunteer Registry".to_string(),
                created,
                license: "CC0".to_string(),
                tags: vec![
                    "volunteers".to_string(),
                    "verification".to_string(),
                    "directory".to_string(),
                ],
                asset_type: "dataset".to_string(),
            },
            pricing: None,
        },
        AssetDescriptor {
            kind: AssetKind::PremiumVerification,
            name: "Volunteer Verification - Premium Access".to_string(),
            source_url,
            metadata: AssetMetadata {
                name: "Volunteer Verification - Premium Access".to_string(),
                description: "Detailed volunteer verification with background checks".to_string(),
                author: "Volunteer Registry".to_string(),
                created,
                license: "Commercial".to_string(),
                tags: vec![
                    "volunteers".to_string(),
                    "verification".to_string(),
                    "premium".to_string(),
                ],
                asset_type: "dataset".to_string(),
            },
            pricing: Some("1 TOKEN".to_string()),
        },
    ]
}
