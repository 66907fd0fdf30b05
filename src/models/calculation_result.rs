//! Calculation result models for the employment credit engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs from a credit calculation: the
//! gross-credit breakdown, the applied credit, and the clawback schedule.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::CompanyClassification;

/// The method used to compute clawback when headcount falls during the
/// retention period.
///
/// Method selection is by exact tag match; an unrecognized tag is an
/// `InvalidMethod` error.
///
/// # Example
///
/// ```
/// use employment_credit_engine::models::ClawbackMethod;
/// use std::str::FromStr;
///
/// let method = ClawbackMethod::from_str("proportional").unwrap();
/// assert_eq!(method, ClawbackMethod::Proportional);
/// assert!(ClawbackMethod::from_str("partial").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClawbackMethod {
    /// Recapture proportional to the fraction of headcount lost.
    Proportional,
    /// Full recapture on any net reduction, however small.
    AllOrNothing,
    /// Recapture at a policy-configured rate per reduction-ratio band.
    Tiered,
}

impl ClawbackMethod {
    /// Returns the wire tag for this method.
    pub const fn tag(self) -> &'static str {
        match self {
            ClawbackMethod::Proportional => "proportional",
            ClawbackMethod::AllOrNothing => "all_or_nothing",
            ClawbackMethod::Tiered => "tiered",
        }
    }
}

impl FromStr for ClawbackMethod {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s {
            "proportional" => Ok(ClawbackMethod::Proportional),
            "all_or_nothing" => Ok(ClawbackMethod::AllOrNothing),
            "tiered" => Ok(ClawbackMethod::Tiered),
            other => Err(EngineError::InvalidMethod {
                method: other.to_string(),
            }),
        }
    }
}

/// The components of a gross credit, before caps and the minimum-tax floor.
///
/// Keeps the per-rule amounts so the report layer never has to recompute
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossCreditBreakdown {
    /// Net increase in total headcount, floored at zero.
    pub delta_total: u32,
    /// Net increase in qualifying-youth headcount, capped at `delta_total`.
    pub delta_youth: u32,
    /// The non-youth portion of the total increase.
    pub delta_non_youth: u32,
    /// Credit for net new non-youth regular employees.
    pub basic_amount: Decimal,
    /// Credit for net new qualifying-youth employees.
    pub youth_amount: Decimal,
    /// Credit for employees converted to regular status.
    pub conversion_amount: Decimal,
    /// Credit for employees returning from parental leave.
    pub parental_return_amount: Decimal,
    /// The gross credit (sum of the four component amounts).
    pub total: Decimal,
}

/// The rule that bounded an applied credit below the gross credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditLimit {
    /// The `max_credit_total` cap was binding.
    MaxCreditCap,
    /// The minimum-tax floor was binding.
    MinTaxFloor,
}

/// The credit after caps and the minimum-tax floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedCredit {
    /// The applied credit amount, always within `[0, gross]`.
    pub amount: Decimal,
    /// The rule that bounded the credit, if any was binding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limited_by: Option<CreditLimit>,
}

/// One follow-up year's recapture in a clawback schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClawbackEntry {
    /// Year index counted from the credit year (1 = first follow-up year).
    pub year_index: u32,
    /// Headcount observed in that follow-up year.
    pub headcount: u32,
    /// Recapture amount for that year.
    pub amount: Decimal,
}

/// A per-year clawback schedule over the retention period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClawbackSchedule {
    /// The method used for every entry.
    pub method: ClawbackMethod,
    /// One entry per supplied follow-up year.
    pub entries: Vec<ClawbackEntry>,
    /// Sum of all entry amounts.
    pub total: Decimal,
}

/// The complete result of a credit calculation.
///
/// This is the structure returned to the presentation layer, which formats
/// it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Correlation id for this calculation.
    pub id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The company classification the rates were looked up for.
    pub company: CompanyClassification,
    /// The gross credit and its components.
    pub gross_credit: GrossCreditBreakdown,
    /// The credit after caps and the minimum-tax floor.
    pub applied_credit: AppliedCredit,
    /// The headcount-maintenance period for this company size, in years.
    pub retention_years: u32,
    /// The clawback schedule, when one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clawback: Option<ClawbackSchedule>,
}
