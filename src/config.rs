//! Configuration parsing for Shoal.
//!
//! Supports:
//! - CLI arguments via clap
//! - Environment variable overrides
//! - Sensible defaults for quick start
//!
//! All run parameters, including the endpoint candidate list and the
//! publisher key, are injected here; nothing is embedded in the library.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::model::{default_descriptors, AssetDescriptor, Endpoint};

/// Publish mode selected for a run.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Try real publishing, fall back to simulation when it cannot proceed.
    Auto,
    /// Real publishing only; a run that cannot proceed yields an empty report.
    Real,
    /// Simulated publishing only; the network is never touched.
    Simulation,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Real => "real",
            Self::Simulation => "simulation",
        };
        f.write_str(name)
    }
}

/// Shoal: publish orchestrator for decentralized data-marketplace assets.
#[derive(Parser, Debug, Clone)]
#[command(name = "shoal")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Endpoint candidate in LABEL=URL form; repeat in preference order
    #[arg(
        short,
        long = "endpoint",
        env = "SHOAL_ENDPOINTS",
        value_delimiter = ',',
        value_name = "LABEL=URL"
    )]
    pub endpoints: Vec<Endpoint>,

    /// Publisher private key (hex, with or without 0x prefix)
    #[arg(long, env = "SHOAL_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,

    /// Publish mode
    #[arg(long, value_enum, default_value_t = Mode::Auto)]
    pub mode: Mode,

    /// Minimum publisher balance in wei required for real publishing
    #[arg(
        long,
        env = "SHOAL_MIN_BALANCE_WEI",
        default_value_t = 10_000_000_000_000_000
    )]
    pub min_balance_wei: u128,

    /// Marketplace gateway base URL for real publishing
    #[arg(long, env = "SHOAL_GATEWAY")]
    pub gateway: Option<String>,

    /// Connect timeout for endpoint probing, in seconds
    #[arg(long, default_value_t = 10)]
    pub connect_timeout_secs: u64,

    /// Request timeout for RPC and gateway calls, in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Path for the publish report JSON
    #[arg(short, long, default_value = "published_assets.json")]
    pub output: PathBuf,

    /// Path for the soul-bound token integration template JSON
    #[arg(long, default_value = "sbt_integration_template.json")]
    pub template_output: PathBuf,

    /// JSON file of asset descriptors (defaults to the built-in pair)
    #[arg(long)]
    pub descriptors: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Parse configuration from CLI arguments and environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Load asset descriptors from the configured file, or fall back to
    /// the built-in pair when no file was given.
    pub fn load_descriptors(&self) -> Result<Vec<AssetDescriptor>> {
        match &self.descriptors {
            Some(path) => {
                let raw = fs::read_to_string(path).with_context(|| {
                    format!("failed to read descriptor file {}", path.display())
                })?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("invalid descriptor file {}", path.display()))
            }
            None => Ok(default_descriptors()),
        }
    }

    /// Create a default configuration for testing.
    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            endpoints: Vec::new(),
            // Deterministic ganache dev key, safe to embed in tests.
            private_key: "0x4f3edf983ac636a65a842ce7c78d9aa706d3b113bce9c46f30d7d21715b23b1d"
                .into(),
            mode: Mode::Simulation,
            min_balance_wei: 10_000_000_000_000_000,
            gateway: None,
            connect_timeout_secs: 1,
            request_timeout_secs: 1,
            output: PathBuf::from("published_assets.json"),
            template_output: PathBuf::from("sbt_integration_template.json"),
            descriptors: None,
            log_level: "debug".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut full = vec!["shoal", "--private-key", "0xabc"];
        full.extend_from_slice(args);
        Config::try_parse_from(full).expect("args should parse")
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.mode, Mode::Auto);
        assert!(config.endpoints.is_empty());
        assert_eq!(config.min_balance_wei, 10_000_000_000_000_000);
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.output, PathBuf::from("published_assets.json"));
        assert_eq!(
            config.template_output,
            PathBuf::from("sbt_integration_template.json")
        );
        assert!(config.gateway.is_none());
    }

    #[test]
    fn test_endpoints_parse_in_order() {
        let config = parse(&[
            "--endpoint",
            "Mumbai=https://rpc-a.example",
            "--endpoint",
            "Polygon=https://rpc-b.example",
        ]);
        assert_eq!(config.endpoints.len(), 2);
        assert_eq!(config.endpoints[0].label, "Mumbai");
        assert_eq!(config.endpoints[0].url, "https://rpc-a.example");
        assert_eq!(config.endpoints[1].label, "Polygon");
    }

    #[test]
    fn test_malformed_endpoint_rejected() {
        let result = Config::try_parse_from([
            "shoal",
            "--private-key",
            "0xabc",
            "--endpoint",
            "no-separator-here",
        ]);
        assert!(result.is_err(), "LABEL=URL form should be required");
    }

    #[test]
    fn test_mode_values() {
        assert_eq!(parse(&["--mode", "real"]).mode, Mode::Real);
        assert_eq!(parse(&["--mode", "simulation"]).mode, Mode::Simulation);
        assert_eq!(Mode::Simulation.to_string(), "simulation");
    }

    #[test]
    fn test_descriptors_default_to_builtin_pair() {
        let config = Config::test_config();
        let descriptors = config.load_descriptors().expect("defaults should load");
        let builtin = default_descriptors();
        assert_eq!(descriptors.len(), builtin.len());
        for (loaded, expected) in descriptors.iter().zip(&builtin) {
            assert_eq!(loaded.name, expected.name);
            assert_eq!(loaded.pricing, expected.pricing);
        }
    }

    #[test]
    fn test_descriptors_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("descriptors.json");
        let written = default_descriptors();
        fs::write(&path, serde_json::to_string(&written).expect("serialize"))
            .expect("write descriptor file");

        let mut config = Config::test_config();
        config.descriptors = Some(path);
        let loaded = config.load_descriptors().expect("file should load");
        assert_eq!(loaded.len(), written.len());
        assert_eq!(loaded[0].name, written[0].name);
        assert_eq!(loaded[1].pricing, written[1].pricing);
    }

    #[test]
    fn test_missing_descriptor_file_errors() {
        let mut config = Config::test_config();
        config.descriptors = Some(PathBuf::from("/nonexistent/descriptors.json"));
        let err = config.load_descriptors().unwrap_err();
        assert!(err.to_string().contains("failed to read descriptor file"));
    }

    #[test]
    fn test_invalid_descriptor_file_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("descriptors.json");
        fs::write(&path, "{not json").expect("write descriptor file");

        let mut config = Config::test_config();
        config.descriptors = Some(path);
        let err = config.load_descriptors().unwrap_err();
        assert!(err.to_string().contains("invalid descriptor file"));
    }
}
