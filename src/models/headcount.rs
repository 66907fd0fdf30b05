//! Headcount input model.
//!
//! This module defines the HeadcountInputs value object holding one year's
//! employment counts for one company.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One year's employment counts for one company.
///
/// Constructed fresh per calculation request and never mutated. Two
/// instances with equal fields are interchangeable.
///
/// # Example
///
/// ```
/// use employment_credit_engine::models::HeadcountInputs;
///
/// let heads = HeadcountInputs {
///     prev_total: 50,
///     curr_total: 60,
///     prev_youth: 10,
///     curr_youth: 14,
///     converted_regular: 2,
///     returned_from_parental_leave: 1,
/// };
/// assert!(heads.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadcountInputs {
    /// Prior-year total regular headcount.
    pub prev_total: u32,
    /// Current-year total regular headcount.
    pub curr_total: u32,
    /// Prior-year qualifying-youth headcount (subset of `prev_total`).
    pub prev_youth: u32,
    /// Current-year qualifying-youth headcount (subset of `curr_total`).
    pub curr_youth: u32,
    /// Employees converted from non-regular to regular status this year.
    #[serde(default)]
    pub converted_regular: u32,
    /// Employees who returned from parental leave this year.
    #[serde(default)]
    pub returned_from_parental_leave: u32,
}

impl HeadcountInputs {
    /// Checks the field-level constraints on the headcounts.
    ///
    /// The youth counts must be subsets of the corresponding totals. A
    /// violation is rejected before any calculation runs.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` naming the offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if self.curr_youth > self.curr_total {
            return Err(EngineError::ConstraintViolation {
                field: "curr_youth".to_string(),
                message: format!(
                    "youth headcount {} exceeds total headcount {}",
                    self.curr_youth, self.curr_total
                ),
            });
        }
        if self.prev_youth > self.prev_total {
            return Err(EngineError::ConstraintViolation {
                field: "prev_youth".to_string(),
                message: format!(
                    "youth headcount {} exceeds total headcount {}",
                    self.prev_youth, self.prev_total
                ),
            });
        }
        Ok(())
    }

    /// Net increase in total headcount, floored at zero.
    pub fn delta_total(&self) -> u32 {
        self.curr_total.saturating_sub(self.prev_total)
    }

    /// Net increase in qualifying-youth headcount, capped at the total
    /// increase.
    ///
    /// A youth increase is drawn from within the total increase, so it can
    /// never exceed `delta_total`.
    pub fn delta_youth(&self) -> u32 {
        self.curr_youth
            .saturating_sub(self.prev_youth)
            .min(self.delta_total())
    }
}
