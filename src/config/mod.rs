//! Policy configuration loading and management for the credit engine.
//!
//! This module provides the externally-supplied policy parameters: per-head
//! credit amounts, retention periods, caps, exclusions, and clawback tier
//! bands. Rule changes arrive as new JSON documents, never as code changes.
//!
//! # Example
//!
//! ```no_run
//! use employment_credit_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/policy_2025.json").unwrap();
//! println!("Tier bands: {}", loader.params().clawback_tiers().len());
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{ClawbackTier, PolicyDocument, PolicyParameters, RateTable};
