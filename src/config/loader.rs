//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading a policy
//! parameter document from a JSON file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PolicyDocument, PolicyParameters};

/// Loads and provides access to the validated policy parameters.
///
/// The `PolicyLoader` reads a JSON policy file, checks its structure, and
/// hands out the validated [`PolicyParameters`]. Byte-level handling stops
/// here; the calculators only ever see validated parameters.
///
/// # Example
///
/// ```no_run
/// use employment_credit_engine::config::PolicyLoader;
/// use employment_credit_engine::models::{CompanySize, Region};
///
/// let loader = PolicyLoader::load("./config/policy_2025.json").unwrap();
/// let rate = loader
///     .params()
///     .basic_rate(CompanySize::SmallMedium, Region::Capital);
/// println!("Per-head basic credit: {}", rate);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    params: PolicyParameters,
}

impl PolicyLoader {
    /// Loads policy parameters from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/policy_2025.json")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid JSON (`ConfigParseError`)
    /// - The document is structurally incomplete (`InvalidConfiguration`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let doc: PolicyDocument =
            serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Self::from_document(doc)
    }

    /// Builds a loader from an already-parsed policy document.
    ///
    /// Useful when the document arrives through another channel (e.g., an
    /// upload handler that has already parsed the bytes).
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the document fails validation.
    pub fn from_document(doc: PolicyDocument) -> EngineResult<Self> {
        Ok(Self {
            params: PolicyParameters::from_document(doc)?,
        })
    }

    /// Returns the validated policy parameters.
    pub fn params(&self) -> &PolicyParameters {
        &self.params
    }
}
