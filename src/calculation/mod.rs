//! Calculation logic for the employment credit engine.
//!
//! This module contains the three pure calculators: the gross-credit
//! calculation from headcount growth and qualifying events, the cap and
//! minimum-tax-floor application, and the multi-method clawback calculation
//! with its per-year schedule builder.

mod caps;
mod clawback;
mod gross_credit;

pub use caps::apply_caps_and_min_tax;
pub use clawback::{FollowupYear, build_clawback_schedule, calculate_clawback, reduction_ratio};
pub use gross_credit::calculate_gross_credit;
