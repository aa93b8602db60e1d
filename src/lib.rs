//! Shoal: publish orchestrator for decentralized data-marketplace assets.
//!
//! Shoal scans an ordered list of blockchain endpoint candidates, gates on
//! the publisher account balance, publishes metadata-bearing data assets
//! through a marketplace gateway, and degrades to a structurally identical
//! simulated result whenever real publishing cannot proceed. A run always
//! ends with a publish report; total failure is an empty asset list, never
//! an error.
//!
//! # Modules
//!
//! - [`account`]: Publisher address derivation from a secp256k1 key
//! - [`chain`]: Blockchain RPC capability (trait seam + JSON-RPC client)
//! - [`config`]: CLI and environment configuration
//! - [`marketplace`]: Marketplace gateway publisher
//! - [`model`]: Typed records for descriptors, assets, and reports
//! - [`observability`]: Tracing setup
//! - [`orchestrator`]: Network selection, funds gate, fallback policy
//! - [`output`]: JSON report and integration-template files

// Lint configuration
#![warn(clippy::all)]
#![allow(
    clippy::module_name_repetitions, // orchestrator::OrchestratorError is fine
    clippy::must_use_candidate,      // Not all functions need #[must_use]
    clippy::missing_errors_doc,      // Error docs can be verbose
    clippy::missing_panics_doc       // Panic docs can be verbose
)]

pub mod account;
pub mod chain;
pub mod config;
pub mod marketplace;
pub mod model;
pub mod observability;
pub mod orchestrator;
pub mod output;
