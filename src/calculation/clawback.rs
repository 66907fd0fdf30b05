//! Clawback (recapture) calculation functionality.
//!
//! This module computes the tax re-imposed when headcount falls below the
//! level that earned the credit during the retention period, under one of
//! three policy-selectable methods.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ClawbackTier;
use crate::error::{EngineError, EngineResult};
use crate::models::{ClawbackEntry, ClawbackMethod, ClawbackSchedule};

/// One follow-up year's observed headcount for schedule building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowupYear {
    /// Year index counted from the credit year (1 = first follow-up year).
    pub year_index: u32,
    /// Headcount observed in that follow-up year.
    pub headcount: u32,
}

/// Computes the headcount reduction ratio for a follow-up year.
///
/// The ratio is `(base - followup) / base`, floored at zero, so growth or
/// an unchanged headcount yields 0. A zero base yields 0: there was no
/// credited level to fall below.
pub fn reduction_ratio(base_headcount: u32, followup_headcount: u32) -> Decimal {
    if base_headcount == 0 {
        return Decimal::ZERO;
    }
    let lost = base_headcount.saturating_sub(followup_headcount);
    Decimal::from(lost) / Decimal::from(base_headcount)
}

/// Computes the clawback amount for one follow-up year.
///
/// A follow-up check outside the retention window (`year_index` of zero or
/// greater than `retention_years`) yields zero: the obligation has expired,
/// which is not an error.
///
/// # Arguments
///
/// * `credit_applied` - The capped credit the clawback is based on
/// * `base_headcount` - Headcount in the credit year
/// * `followup_headcount` - Headcount observed in the follow-up year
/// * `retention_years` - The retention period for the company's size
/// * `year_index` - Follow-up year counted from the credit year, starting at 1
/// * `method` - The recapture method
/// * `tiers` - The configured tier bands (used by `Tiered` only)
///
/// # Returns
///
/// Returns an amount within `[0, credit_applied]` under every method.
///
/// # Errors
///
/// Returns `InvalidConfiguration` when the `Tiered` method is requested but
/// no band covers the reduction ratio (in particular, when no tiers are
/// configured at all).
///
/// # Examples
///
/// ```
/// use employment_credit_engine::calculation::calculate_clawback;
/// use employment_credit_engine::models::ClawbackMethod;
/// use rust_decimal::Decimal;
///
/// let clawback = calculate_clawback(
///     Decimal::from(10_000_000),
///     60,
///     54,
///     3,
///     1,
///     ClawbackMethod::Proportional,
///     &[],
/// )
/// .unwrap();
/// assert_eq!(clawback, Decimal::from(1_000_000));
/// ```
pub fn calculate_clawback(
    credit_applied: Decimal,
    base_headcount: u32,
    followup_headcount: u32,
    retention_years: u32,
    year_index: u32,
    method: ClawbackMethod,
    tiers: &[ClawbackTier],
) -> EngineResult<Decimal> {
    if year_index == 0 || year_index > retention_years {
        return Ok(Decimal::ZERO);
    }

    let ratio = reduction_ratio(base_headcount, followup_headcount);
    if ratio == Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let amount = match method {
        ClawbackMethod::Proportional => credit_applied * ratio,
        ClawbackMethod::AllOrNothing => credit_applied,
        ClawbackMethod::Tiered => {
            let tier = tiers
                .iter()
                .find(|tier| ratio <= tier.max_reduction_ratio)
                .ok_or_else(|| EngineError::InvalidConfiguration {
                    field: "clawback_tiers".to_string(),
                    message: format!("no band covers reduction ratio {}", ratio),
                })?;
            credit_applied * tier.recapture_rate
        }
    };

    Ok(amount)
}

/// Builds the per-year clawback schedule for a set of follow-up years.
///
/// Each entry is computed independently via [`calculate_clawback`] with that
/// year's index and headcount; the schedule total is the sum of all entries.
/// Entries outside the retention window contribute zero.
///
/// # Errors
///
/// Propagates any error from [`calculate_clawback`].
pub fn build_clawback_schedule(
    credit_applied: Decimal,
    base_headcount: u32,
    followup_years: &[FollowupYear],
    retention_years: u32,
    method: ClawbackMethod,
    tiers: &[ClawbackTier],
) -> EngineResult<ClawbackSchedule> {
    let mut entries = Vec::with_capacity(followup_years.len());
    let mut total = Decimal::ZERO;

    for followup in followup_years {
        let amount = calculate_clawback(
            credit_applied,
            base_headcount,
            followup.headcount,
            retention_years,
            followup.year_index,
            method,
            tiers,
        )?;
        total += amount;
        entries.push(ClawbackEntry {
            year_index: followup.year_index,
            headcount: followup.headcount,
            amount,
        });
    }

    Ok(ClawbackSchedule {
        method,
        entries,
        total,
    })
}
