//! Gross credit calculation functionality.
//!
//! This module computes the gross employment credit from net headcount
//! growth and the qualifying-event counts, before any cap or minimum-tax
//! adjustment is applied.

use rust_decimal::Decimal;

use crate::config::PolicyParameters;
use crate::models::{CompanySize, GrossCreditBreakdown, HeadcountInputs, Region};

/// Computes the gross credit for one company-year.
///
/// The net total increase is floored at zero and the youth increase is
/// capped at the total increase: youth hires are drawn from within the
/// total delta, never on top of it. The non-youth portion earns the basic
/// per-head rate, the youth portion the youth rate. Conversion and
/// parental-return credits reward specific qualifying events and apply even
/// when there is no net hiring growth.
///
/// # Arguments
///
/// * `size` - The company-size category for rate lookup
/// * `region` - The region category for rate lookup
/// * `heads` - The validated headcount inputs
/// * `params` - The validated policy parameters
///
/// # Returns
///
/// Returns a [`GrossCreditBreakdown`] whose `total` is always non-negative.
/// There are no error paths: the classification enums are closed and the
/// parameters were validated to cover every variant at load time.
///
/// # Examples
///
/// ```no_run
/// use employment_credit_engine::calculation::calculate_gross_credit;
/// use employment_credit_engine::config::PolicyLoader;
/// use employment_credit_engine::models::{CompanySize, HeadcountInputs, Region};
///
/// let loader = PolicyLoader::load("./config/policy_2025.json").unwrap();
/// let heads = HeadcountInputs {
///     prev_total: 50,
///     curr_total: 60,
///     prev_youth: 10,
///     curr_youth: 14,
///     converted_regular: 2,
///     returned_from_parental_leave: 1,
/// };
/// let breakdown = calculate_gross_credit(
///     CompanySize::SmallMedium,
///     Region::Capital,
///     &heads,
///     loader.params(),
/// );
/// println!("Gross credit: {}", breakdown.total);
/// ```
pub fn calculate_gross_credit(
    size: CompanySize,
    region: Region,
    heads: &HeadcountInputs,
    params: &PolicyParameters,
) -> GrossCreditBreakdown {
    let delta_total = heads.delta_total();
    let delta_youth = heads.delta_youth();
    let delta_non_youth = delta_total - delta_youth;

    let basic_amount = Decimal::from(delta_non_youth) * params.basic_rate(size, region);
    let youth_amount = Decimal::from(delta_youth) * params.youth_rate(size, region);
    let conversion_amount = Decimal::from(heads.converted_regular) * params.conversion_rate();
    let parental_return_amount =
        Decimal::from(heads.returned_from_parental_leave) * params.parental_return_rate();

    let total = basic_amount + youth_amount + conversion_amount + parental_return_amount;

    GrossCreditBreakdown {
        delta_total,
        delta_youth,
        delta_non_youth,
        basic_amount,
        youth_amount,
        conversion_amount,
        parental_return_amount,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PolicyDocument, PolicyParameters};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_params() -> PolicyParameters {
        let doc: PolicyDocument = serde_json::from_str(
            r#"{
                "per_head_basic": {
                    "small_medium": { "capital": 1200000, "non_capital": 1300000 },
                    "mid_sized": { "capital": 900000, "non_capital": 1000000 },
                    "large": { "capital": 600000, "non_capital": 700000 }
                },
                "per_head_youth": {
                    "small_medium": { "capital": 1500000, "non_capital": 1600000 },
                    "mid_sized": { "capital": 1100000, "non_capital": 1200000 },
                    "large": { "capital": 800000, "non_capital": 900000 }
                },
                "per_head_conversion": 800000,
                "per_head_return_from_parental": 800000,
                "retention_years": { "small_medium": 3, "mid_sized": 3, "large": 2 },
                "min_tax_limit_rate": 0.07
            }"#,
        )
        .unwrap();
        PolicyParameters::from_document(doc).unwrap()
    }

    fn heads(
        prev_total: u32,
        curr_total: u32,
        prev_youth: u32,
        curr_youth: u32,
    ) -> HeadcountInputs {
        HeadcountInputs {
            prev_total,
            curr_total,
            prev_youth,
            curr_youth,
            converted_regular: 0,
            returned_from_parental_leave: 0,
        }
    }

    /// GC-001: full worked example for an SME in the capital area.
    #[test]
    fn test_sme_capital_worked_example() {
        let params = create_test_params();
        let inputs = HeadcountInputs {
            prev_total: 50,
            curr_total: 60,
            prev_youth: 10,
            curr_youth: 14,
            converted_regular: 2,
            returned_from_parental_leave: 1,
        };

        let breakdown = calculate_gross_credit(
            CompanySize::SmallMedium,
            Region::Capital,
            &inputs,
            &params,
        );

        assert_eq!(breakdown.delta_total, 10);
        assert_eq!(breakdown.delta_youth, 4);
        assert_eq!(breakdown.delta_non_youth, 6);
        assert_eq!(breakdown.basic_amount, dec("7200000"));
        assert_eq!(breakdown.youth_amount, dec("6000000"));
        assert_eq!(breakdown.conversion_amount, dec("1600000"));
        assert_eq!(breakdown.parental_return_amount, dec("800000"));
        assert_eq!(breakdown.total, dec("15600000"));
    }

    /// GC-002: no net growth zeroes the per-head terms but keeps event terms.
    #[test]
    fn test_no_growth_keeps_event_credits() {
        let params = create_test_params();
        let inputs = HeadcountInputs {
            prev_total: 60,
            curr_total: 60,
            prev_youth: 10,
            curr_youth: 14,
            converted_regular: 3,
            returned_from_parental_leave: 2,
        };

        let breakdown = calculate_gross_credit(
            CompanySize::SmallMedium,
            Region::Capital,
            &inputs,
            &params,
        );

        assert_eq!(breakdown.delta_total, 0);
        assert_eq!(breakdown.delta_youth, 0);
        assert_eq!(breakdown.basic_amount, Decimal::ZERO);
        assert_eq!(breakdown.youth_amount, Decimal::ZERO);
        assert_eq!(breakdown.conversion_amount, dec("2400000"));
        assert_eq!(breakdown.parental_return_amount, dec("1600000"));
        assert_eq!(breakdown.total, dec("4000000"));
    }

    /// GC-003: headcount shrink yields zero per-head credit.
    #[test]
    fn test_shrinking_headcount_yields_zero_per_head_credit() {
        let params = create_test_params();
        let inputs = heads(60, 50, 10, 14);

        let breakdown =
            calculate_gross_credit(CompanySize::MidSized, Region::NonCapital, &inputs, &params);

        assert_eq!(breakdown.delta_total, 0);
        assert_eq!(breakdown.delta_youth, 0);
        assert_eq!(breakdown.total, Decimal::ZERO);
    }

    /// GC-004: youth increase is capped at the total increase.
    #[test]
    fn test_youth_increase_capped_at_total_increase() {
        let params = create_test_params();
        // Youth grew by 8 but the total only grew by 3: all 3 net hires are
        // credited at the youth rate, nothing at the basic rate.
        let inputs = heads(50, 53, 10, 18);

        let breakdown =
            calculate_gross_credit(CompanySize::SmallMedium, Region::Capital, &inputs, &params);

        assert_eq!(breakdown.delta_youth, 3);
        assert_eq!(breakdown.delta_non_youth, 0);
        assert_eq!(breakdown.basic_amount, Decimal::ZERO);
        assert_eq!(breakdown.youth_amount, dec("4500000"));
    }

    /// GC-005: rates vary by size and region.
    #[test]
    fn test_rates_vary_by_size_and_region() {
        let params = create_test_params();
        let inputs = heads(50, 55, 0, 0);

        let sme = calculate_gross_credit(CompanySize::SmallMedium, Region::Capital, &inputs, &params);
        let large =
            calculate_gross_credit(CompanySize::Large, Region::NonCapital, &inputs, &params);

        assert_eq!(sme.total, dec("6000000"));
        assert_eq!(large.total, dec("3500000"));
    }

    /// GC-006: all-zero inputs yield an all-zero breakdown.
    #[test]
    fn test_zero_inputs_yield_zero_credit() {
        let params = create_test_params();
        let inputs = heads(0, 0, 0, 0);

        let breakdown =
            calculate_gross_credit(CompanySize::Large, Region::Capital, &inputs, &params);

        assert_eq!(breakdown.total, Decimal::ZERO);
    }

    #[test]
    fn test_total_is_sum_of_components() {
        let params = create_test_params();
        let inputs = HeadcountInputs {
            prev_total: 10,
            curr_total: 25,
            prev_youth: 2,
            curr_youth: 9,
            converted_regular: 4,
            returned_from_parental_leave: 3,
        };

        let breakdown =
            calculate_gross_credit(CompanySize::MidSized, Region::Capital, &inputs, &params);

        assert_eq!(
            breakdown.total,
            breakdown.basic_amount
                + breakdown.youth_amount
                + breakdown.conversion_amount
                + breakdown.parental_return_amount
        );
    }
}
