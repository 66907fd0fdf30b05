//! Policy parameter types for credit calculation.
//!
//! This module contains the raw policy document shape deserialized from
//! JSON and the validated [`PolicyParameters`] the calculators consume.
//! All statutory amounts, caps, retention periods, and clawback tier bands
//! are configuration, never embedded constants.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{EngineError, EngineResult};
use crate::models::{CompanySize, Region};

/// One clawback tier band.
///
/// A reduction ratio `r` falls in the first band whose `max_reduction_ratio`
/// is at least `r`; that band's `recapture_rate` is applied to the credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClawbackTier {
    /// Upper bound (inclusive) of the reduction ratio covered by this band.
    pub max_reduction_ratio: Decimal,
    /// Fraction of the applied credit recaptured within this band.
    pub recapture_rate: Decimal,
}

/// The raw policy document as deserialized from JSON.
///
/// Field shapes match the external configuration format; no validation has
/// happened yet. Use [`PolicyParameters::from_document`] to validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyDocument {
    /// Credit per net new regular employee, by size and region.
    pub per_head_basic: HashMap<CompanySize, HashMap<Region, Decimal>>,
    /// Credit per net new qualifying-youth employee, by size and region.
    pub per_head_youth: HashMap<CompanySize, HashMap<Region, Decimal>>,
    /// Credit per employee converted to regular status.
    pub per_head_conversion: Decimal,
    /// Credit per employee returning from parental leave.
    pub per_head_return_from_parental: Decimal,
    /// Post-credit headcount-maintenance period, by size.
    pub retention_years: HashMap<CompanySize, u32>,
    /// Optional cap on the gross credit; absent means uncapped.
    #[serde(default)]
    pub max_credit_total: Option<Decimal>,
    /// Floor on post-credit tax liability as a fraction of pre-credit
    /// liability.
    pub min_tax_limit_rate: Decimal,
    /// Industry labels ineligible for any credit.
    #[serde(default)]
    pub excluded_industries: Vec<String>,
    /// Tier bands for the `tiered` clawback method.
    #[serde(default)]
    pub clawback_tiers: Vec<ClawbackTier>,
}

/// A complete per-size, per-region currency table.
///
/// Built during validation, so lookups are infallible: every company size
/// and region is guaranteed present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    amounts: [[Decimal; Region::COUNT]; CompanySize::COUNT],
}

impl RateTable {
    /// Returns the amount for the given size and region.
    pub fn amount(&self, size: CompanySize, region: Region) -> Decimal {
        self.amounts[size.index()][region.index()]
    }

    fn from_map(
        field: &str,
        map: &HashMap<CompanySize, HashMap<Region, Decimal>>,
    ) -> EngineResult<Self> {
        let mut amounts = [[Decimal::ZERO; Region::COUNT]; CompanySize::COUNT];

        for size in CompanySize::ALL {
            let regions = map.get(&size).ok_or_else(|| EngineError::InvalidConfiguration {
                field: field.to_string(),
                message: format!("missing company size '{}'", size),
            })?;

            for region in Region::ALL {
                let amount =
                    regions
                        .get(&region)
                        .copied()
                        .ok_or_else(|| EngineError::InvalidConfiguration {
                            field: format!("{}.{}", field, size),
                            message: format!("missing region '{}'", region),
                        })?;

                if amount < Decimal::ZERO {
                    return Err(EngineError::InvalidConfiguration {
                        field: format!("{}.{}.{}", field, size, region),
                        message: format!("amount {} is negative", amount),
                    });
                }

                amounts[size.index()][region.index()] = amount;
            }
        }

        Ok(Self { amounts })
    }
}

/// Validated, immutable policy parameters for one calculation session.
///
/// Constructed once via [`PolicyParameters::from_document`] and shared
/// read-only across arbitrarily many calculator invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyParameters {
    per_head_basic: RateTable,
    per_head_youth: RateTable,
    per_head_conversion: Decimal,
    per_head_return_from_parental: Decimal,
    retention_years: [u32; CompanySize::COUNT],
    max_credit_total: Option<Decimal>,
    min_tax_limit_rate: Decimal,
    excluded_industries: HashSet<String>,
    clawback_tiers: Vec<ClawbackTier>,
}

impl PolicyParameters {
    /// Validates a raw policy document and builds the parameter set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` naming the offending field when:
    /// - a company size is missing from `per_head_basic`, `per_head_youth`,
    ///   or `retention_years`
    /// - a region is missing under any company size
    /// - any currency amount is negative
    /// - a retention period is zero
    /// - `min_tax_limit_rate` is outside `[0, 1]`
    /// - the clawback tiers are unordered, out of range, or fail to cover
    ///   the full reduction-ratio range
    pub fn from_document(doc: PolicyDocument) -> EngineResult<Self> {
        let per_head_basic = RateTable::from_map("per_head_basic", &doc.per_head_basic)?;
        let per_head_youth = RateTable::from_map("per_head_youth", &doc.per_head_youth)?;

        Self::check_non_negative("per_head_conversion", doc.per_head_conversion)?;
        Self::check_non_negative(
            "per_head_return_from_parental",
            doc.per_head_return_from_parental,
        )?;

        let mut retention_years = [0u32; CompanySize::COUNT];
        for size in CompanySize::ALL {
            let years = doc.retention_years.get(&size).copied().ok_or_else(|| {
                EngineError::InvalidConfiguration {
                    field: "retention_years".to_string(),
                    message: format!("missing company size '{}'", size),
                }
            })?;
            if years == 0 {
                return Err(EngineError::InvalidConfiguration {
                    field: format!("retention_years.{}", size),
                    message: "retention period must be at least one year".to_string(),
                });
            }
            retention_years[size.index()] = years;
        }

        if let Some(cap) = doc.max_credit_total {
            Self::check_non_negative("max_credit_total", cap)?;
        }

        if doc.min_tax_limit_rate < Decimal::ZERO || doc.min_tax_limit_rate > Decimal::ONE {
            return Err(EngineError::InvalidConfiguration {
                field: "min_tax_limit_rate".to_string(),
                message: format!("rate {} is outside [0, 1]", doc.min_tax_limit_rate),
            });
        }

        Self::validate_tiers(&doc.clawback_tiers)?;

        Ok(Self {
            per_head_basic,
            per_head_youth,
            per_head_conversion: doc.per_head_conversion,
            per_head_return_from_parental: doc.per_head_return_from_parental,
            retention_years,
            max_credit_total: doc.max_credit_total,
            min_tax_limit_rate: doc.min_tax_limit_rate,
            excluded_industries: doc.excluded_industries.into_iter().collect(),
            clawback_tiers: doc.clawback_tiers,
        })
    }

    fn check_non_negative(field: &str, amount: Decimal) -> EngineResult<()> {
        if amount < Decimal::ZERO {
            return Err(EngineError::InvalidConfiguration {
                field: field.to_string(),
                message: format!("amount {} is negative", amount),
            });
        }
        Ok(())
    }

    fn validate_tiers(tiers: &[ClawbackTier]) -> EngineResult<()> {
        let mut previous_bound = Decimal::ZERO;
        for (i, tier) in tiers.iter().enumerate() {
            if tier.max_reduction_ratio <= previous_bound || tier.max_reduction_ratio > Decimal::ONE
            {
                return Err(EngineError::InvalidConfiguration {
                    field: format!("clawback_tiers[{}].max_reduction_ratio", i),
                    message: format!(
                        "bound {} must be ascending and within (0, 1]",
                        tier.max_reduction_ratio
                    ),
                });
            }
            if tier.recapture_rate < Decimal::ZERO || tier.recapture_rate > Decimal::ONE {
                return Err(EngineError::InvalidConfiguration {
                    field: format!("clawback_tiers[{}].recapture_rate", i),
                    message: format!("rate {} is outside [0, 1]", tier.recapture_rate),
                });
            }
            previous_bound = tier.max_reduction_ratio;
        }

        // A non-empty band set must cover the full ratio range, or some
        // reduction would have no defined recapture.
        if let Some(last) = tiers.last()
            && last.max_reduction_ratio != Decimal::ONE
        {
            return Err(EngineError::InvalidConfiguration {
                field: "clawback_tiers".to_string(),
                message: format!(
                    "final band bound {} must be 1 to cover every reduction ratio",
                    last.max_reduction_ratio
                ),
            });
        }

        Ok(())
    }

    /// Credit per net new regular employee for the given size and region.
    pub fn basic_rate(&self, size: CompanySize, region: Region) -> Decimal {
        self.per_head_basic.amount(size, region)
    }

    /// Credit per net new qualifying-youth employee for the given size and
    /// region.
    pub fn youth_rate(&self, size: CompanySize, region: Region) -> Decimal {
        self.per_head_youth.amount(size, region)
    }

    /// Credit per employee converted to regular status.
    pub fn conversion_rate(&self) -> Decimal {
        self.per_head_conversion
    }

    /// Credit per employee returning from parental leave.
    pub fn parental_return_rate(&self) -> Decimal {
        self.per_head_return_from_parental
    }

    /// Headcount-maintenance period for the given company size, in years.
    pub fn retention_years(&self, size: CompanySize) -> u32 {
        self.retention_years[size.index()]
    }

    /// Optional cap on the gross credit.
    pub fn max_credit_total(&self) -> Option<Decimal> {
        self.max_credit_total
    }

    /// Floor on post-credit tax liability as a fraction of pre-credit
    /// liability.
    pub fn min_tax_limit_rate(&self) -> Decimal {
        self.min_tax_limit_rate
    }

    /// Returns true if the given industry label is ineligible for the credit.
    pub fn is_excluded_industry(&self, industry: &str) -> bool {
        self.excluded_industries.contains(industry)
    }

    /// The configured tier bands for the `tiered` clawback method.
    pub fn clawback_tiers(&self) -> &[ClawbackTier] {
        &self.clawback_tiers
    }
}
