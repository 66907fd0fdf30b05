//! Request types for the employment credit engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::FollowupYear;
use crate::models::{CompanyClassification, CompanySize, HeadcountInputs, Region};

/// Request body for the `/calculate` endpoint.
///
/// Contains the company classification, one year of headcount data, and the
/// optional tax-liability and clawback sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The company classification.
    pub company: CompanyRequest,
    /// Optional industry label, screened against the exclusion list.
    #[serde(default)]
    pub industry: Option<String>,
    /// The headcount inputs for the credit year.
    pub headcounts: HeadcountRequest,
    /// Optional pre-credit tax liability; enables the minimum-tax floor.
    #[serde(default)]
    pub tax_before_credit: Option<Decimal>,
    /// Optional clawback simulation request.
    #[serde(default)]
    pub clawback: Option<ClawbackRequest>,
}

/// Company classification in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRequest {
    /// The company-size category.
    pub size: CompanySize,
    /// The region category.
    pub region: Region,
}

/// Headcount inputs in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadcountRequest {
    /// Prior-year total regular headcount.
    pub prev_total: u32,
    /// Current-year total regular headcount.
    pub curr_total: u32,
    /// Prior-year qualifying-youth headcount.
    pub prev_youth: u32,
    /// Current-year qualifying-youth headcount.
    pub curr_youth: u32,
    /// Employees converted to regular status this year.
    #[serde(default)]
    pub converted_regular: u32,
    /// Employees who returned from parental leave this year.
    #[serde(default)]
    pub returned_from_parental_leave: u32,
}

/// Clawback simulation section in a calculation request.
///
/// The method arrives as a raw tag and is matched exactly against the three
/// known method names; anything else is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClawbackRequest {
    /// The clawback method tag ("proportional", "all_or_nothing", "tiered").
    pub method: String,
    /// Observed (or simulated) headcounts for the follow-up years.
    pub followup_years: Vec<FollowupYearRequest>,
}

/// One follow-up year in a clawback request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowupYearRequest {
    /// Year index counted from the credit year (1 = first follow-up year).
    pub year_index: u32,
    /// Headcount in that follow-up year.
    pub headcount: u32,
}

impl From<CompanyRequest> for CompanyClassification {
    fn from(req: CompanyRequest) -> Self {
        CompanyClassification {
            size: req.size,
            region: req.region,
        }
    }
}

impl From<HeadcountRequest> for HeadcountInputs {
    fn from(req: HeadcountRequest) -> Self {
        HeadcountInputs {
            prev_total: req.prev_total,
            curr_total: req.curr_total,
            prev_youth: req.prev_youth,
            curr_youth: req.curr_youth,
            converted_regular: req.converted_regular,
            returned_from_parental_leave: req.returned_from_parental_leave,
        }
    }
}

impl From<FollowupYearRequest> for FollowupYear {
    fn from(req: FollowupYearRequest) -> Self {
        FollowupYear {
            year_index: req.year_index,
            headcount: req.headcount,
        }
    }
}
