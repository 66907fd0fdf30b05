//! Core data models for the employment credit engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod company;
mod headcount;

pub use calculation_result::{
    AppliedCredit, CalculationResult, ClawbackEntry, ClawbackMethod, ClawbackSchedule,
    CreditLimit, GrossCreditBreakdown,
};
pub use company::{CompanyClassification, CompanySize, Region};
pub use headcount::HeadcountInputs;
