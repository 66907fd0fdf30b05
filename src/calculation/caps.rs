//! Credit cap and minimum-tax floor functionality.
//!
//! This module bounds a gross credit by the optional total-credit cap and
//! by the statutory minimum-tax floor.

use rust_decimal::Decimal;

use crate::config::PolicyParameters;
use crate::models::{AppliedCredit, CreditLimit};

/// Applies the credit cap and the minimum-tax floor to a gross credit.
///
/// Starts from the gross amount, bounds it by `max_credit_total` when one is
/// configured, then — when a pre-credit tax liability is supplied — bounds
/// it so the post-credit liability never drops below
/// `tax_before_credit * min_tax_limit_rate`. When `tax_before_credit` is
/// `None` the caller is asserting the floor rule does not apply (e.g., no
/// tax base established yet) and it is skipped entirely.
///
/// # Arguments
///
/// * `gross` - The gross credit, assumed non-negative
/// * `params` - The validated policy parameters
/// * `tax_before_credit` - Optional pre-credit tax liability
///
/// # Returns
///
/// Returns an [`AppliedCredit`] whose amount is always within `[0, gross]`,
/// recording which rule bound the credit, if any.
///
/// # Examples
///
/// ```no_run
/// use employment_credit_engine::calculation::apply_caps_and_min_tax;
/// use employment_credit_engine::config::PolicyLoader;
/// use rust_decimal::Decimal;
///
/// let loader = PolicyLoader::load("./config/policy_2025.json").unwrap();
/// let applied = apply_caps_and_min_tax(
///     Decimal::from(15_600_000),
///     loader.params(),
///     Some(Decimal::from(120_000_000)),
/// );
/// assert!(applied.amount <= Decimal::from(15_600_000));
/// ```
pub fn apply_caps_and_min_tax(
    gross: Decimal,
    params: &PolicyParameters,
    tax_before_credit: Option<Decimal>,
) -> AppliedCredit {
    let mut amount = gross;
    let mut limited_by = None;

    if let Some(cap) = params.max_credit_total()
        && amount > cap
    {
        amount = cap;
        limited_by = Some(CreditLimit::MaxCreditCap);
    }

    if let Some(tax) = tax_before_credit {
        // The credit may not reduce liability below the floor.
        let floor = tax * params.min_tax_limit_rate();
        let max_reduction = (tax - floor).max(Decimal::ZERO);
        if amount > max_reduction {
            amount = max_reduction;
            limited_by = Some(CreditLimit::MinTaxFloor);
        }
    }

    AppliedCredit { amount, limited_by }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PolicyDocument, PolicyParameters};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_params(max_credit_total: Option<&str>, min_tax_rate: &str) -> PolicyParameters {
        let cap = match max_credit_total {
            Some(c) => c.to_string(),
            None => "null".to_string(),
        };
        let doc: PolicyDocument = serde_json::from_str(&format!(
            r#"{{
                "per_head_basic": {{
                    "small_medium": {{ "capital": 1200000, "non_capital": 1300000 }},
                    "mid_sized": {{ "capital": 900000, "non_capital": 1000000 }},
                    "large": {{ "capital": 600000, "non_capital": 700000 }}
                }},
                "per_head_youth": {{
                    "small_medium": {{ "capital": 1500000, "non_capital": 1600000 }},
                    "mid_sized": {{ "capital": 1100000, "non_capital": 1200000 }},
                    "large": {{ "capital": 800000, "non_capital": 900000 }}
                }},
                "per_head_conversion": 800000,
                "per_head_return_from_parental": 800000,
                "retention_years": {{ "small_medium": 3, "mid_sized": 3, "large": 2 }},
                "max_credit_total": {cap},
                "min_tax_limit_rate": {min_tax_rate}
            }}"#
        ))
        .unwrap();
        PolicyParameters::from_document(doc).unwrap()
    }

    /// CAP-001: uncapped gross passes through unchanged.
    #[test]
    fn test_uncapped_gross_passes_through() {
        let params = create_test_params(None, "0.07");

        let applied = apply_caps_and_min_tax(dec("15600000"), &params, None);

        assert_eq!(applied.amount, dec("15600000"));
        assert_eq!(applied.limited_by, None);
    }

    /// CAP-002: the total-credit cap binds.
    #[test]
    fn test_max_credit_cap_binds() {
        let params = create_test_params(Some("10000000"), "0.07");

        let applied = apply_caps_and_min_tax(dec("15600000"), &params, None);

        assert_eq!(applied.amount, dec("10000000"));
        assert_eq!(applied.limited_by, Some(CreditLimit::MaxCreditCap));
    }

    /// CAP-003: a cap above the gross is not binding.
    #[test]
    fn test_cap_above_gross_is_not_binding() {
        let params = create_test_params(Some("20000000"), "0.07");

        let applied = apply_caps_and_min_tax(dec("15600000"), &params, None);

        assert_eq!(applied.amount, dec("15600000"));
        assert_eq!(applied.limited_by, None);
    }

    /// CAP-004: worked example where the floor is not binding.
    #[test]
    fn test_min_tax_floor_not_binding() {
        let params = create_test_params(None, "0.07");

        // floor = 8,400,000; max reduction = 111,600,000 > gross.
        let applied =
            apply_caps_and_min_tax(dec("15600000"), &params, Some(dec("120000000")));

        assert_eq!(applied.amount, dec("15600000"));
        assert_eq!(applied.limited_by, None);
    }

    /// CAP-005: the floor binds when liability is small.
    #[test]
    fn test_min_tax_floor_binds() {
        let params = create_test_params(None, "0.07");

        // floor = 700,000; max reduction = 9,300,000 < gross.
        let applied =
            apply_caps_and_min_tax(dec("15600000"), &params, Some(dec("10000000")));

        assert_eq!(applied.amount, dec("9300000"));
        assert_eq!(applied.limited_by, Some(CreditLimit::MinTaxFloor));
    }

    /// CAP-006: zero liability forces a zero credit.
    #[test]
    fn test_zero_tax_liability_forces_zero_credit() {
        let params = create_test_params(None, "0.07");

        let applied = apply_caps_and_min_tax(dec("15600000"), &params, Some(Decimal::ZERO));

        assert_eq!(applied.amount, Decimal::ZERO);
        assert_eq!(applied.limited_by, Some(CreditLimit::MinTaxFloor));
    }

    /// CAP-007: the cap and floor compose; the floor is applied last.
    #[test]
    fn test_cap_then_floor_compose() {
        let params = create_test_params(Some("10000000"), "0.07");

        // Cap brings 15.6M down to 10M, floor brings it down to 9.3M.
        let applied =
            apply_caps_and_min_tax(dec("15600000"), &params, Some(dec("10000000")));

        assert_eq!(applied.amount, dec("9300000"));
        assert_eq!(applied.limited_by, Some(CreditLimit::MinTaxFloor));
    }

    /// CAP-008: omitted liability skips the floor rule entirely.
    #[test]
    fn test_omitted_liability_skips_floor() {
        let params = create_test_params(None, "1.0");

        // A rate of 1.0 would zero any credit, but without a liability the
        // rule never runs.
        let applied = apply_caps_and_min_tax(dec("15600000"), &params, None);

        assert_eq!(applied.amount, dec("15600000"));
    }

    /// CAP-009: output never exceeds gross and never goes negative.
    #[test]
    fn test_output_bounded_by_gross_and_zero() {
        let params = create_test_params(Some("10000000"), "0.07");

        for gross in ["0", "1", "9999999", "10000001", "50000000"] {
            for tax in [None, Some("0"), Some("1000"), Some("999999999")] {
                let applied = apply_caps_and_min_tax(
                    dec(gross),
                    &params,
                    tax.map(dec),
                );
                assert!(applied.amount >= Decimal::ZERO);
                assert!(applied.amount <= dec(gross));
            }
        }
    }
}
