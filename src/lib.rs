//! Calculation engine for the integrated employment tax credit.
//!
//! This crate computes the statutory employment tax credit from year-over-year
//! headcount data: a gross credit per net new hire, caps and a minimum-tax
//! floor, and the recapture ("clawback") owed when headcount later falls below
//! the level that earned the credit.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
