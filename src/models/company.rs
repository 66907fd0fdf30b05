//! Company classification types.
//!
//! This module defines the CompanySize and Region enums that key the
//! per-head rate tables and the retention-period table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The statutory company-size category.
///
/// Determines which per-head rates and which retention period apply.
/// The set is closed: rate tables are validated to cover every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    /// Small and medium enterprise.
    SmallMedium,
    /// Mid-sized enterprise.
    MidSized,
    /// Large enterprise.
    Large,
}

impl CompanySize {
    /// All company-size variants, in table order.
    pub const ALL: [CompanySize; 3] =
        [CompanySize::SmallMedium, CompanySize::MidSized, CompanySize::Large];

    /// The number of company-size variants.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the stable table index for this variant.
    pub const fn index(self) -> usize {
        match self {
            CompanySize::SmallMedium => 0,
            CompanySize::MidSized => 1,
            CompanySize::Large => 2,
        }
    }

    /// Returns the JSON label for this variant.
    pub const fn label(self) -> &'static str {
        match self {
            CompanySize::SmallMedium => "small_medium",
            CompanySize::MidSized => "mid_sized",
            CompanySize::Large => "large",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The statutory region category.
///
/// Second axis of the per-head-rate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Capital area.
    Capital,
    /// Outside the capital area.
    NonCapital,
}

impl Region {
    /// All region variants, in table order.
    pub const ALL: [Region; 2] = [Region::Capital, Region::NonCapital];

    /// The number of region variants.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the stable table index for this variant.
    pub const fn index(self) -> usize {
        match self {
            Region::Capital => 0,
            Region::NonCapital => 1,
        }
    }

    /// Returns the JSON label for this variant.
    pub const fn label(self) -> &'static str {
        match self {
            Region::Capital => "capital",
            Region::NonCapital => "non_capital",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A company's classification for rate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyClassification {
    /// The company-size category.
    pub size: CompanySize,
    /// The region category.
    pub region: Region,
}
