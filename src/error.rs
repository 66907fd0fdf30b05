//! Error types for the employment credit engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during credit calculation.

use thiserror::Error;

/// The main error type for the employment credit engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use employment_credit_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy file not found: /missing/policy.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Policy document was parsed but is structurally incomplete or malformed.
    ///
    /// A missing company-size or region key is a configuration error, never a
    /// silent zero rate.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidConfiguration {
        /// The policy field that was missing or malformed.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Clawback method tag was not one of the recognized methods.
    #[error("Unknown clawback method: {method}")]
    InvalidMethod {
        /// The unrecognized method tag.
        method: String,
    },

    /// A calculation input violated a field-level constraint.
    #[error("Constraint violation on '{field}': {message}")]
    ConstraintViolation {
        /// The input field that violated the constraint.
        field: String,
        /// A description of the violated constraint.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
