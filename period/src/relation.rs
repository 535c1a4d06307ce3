//! Named comparisons between two Periods, used by higher layers as pluggable temporal filters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::period::Period;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodRelation {
    /// Accepts every pair.
    Always,
    /// Rejects every pair.
    Never,
    Equals,
    /// The two Periods share at least one instant.
    #[serde(rename = "intersects")]
    HasCommonPoint,
    /// The current Period lies within the reference.
    #[serde(rename = "contained")]
    ReferenceContains,
}

impl PeriodRelation {
    pub fn evaluate(&self, current: &Period, reference: &Period) -> bool {
        match self {
            PeriodRelation::Always => true,
            PeriodRelation::Never => false,
            PeriodRelation::Equals => current == reference,
            PeriodRelation::HasCommonPoint => current.overlaps(reference),
            PeriodRelation::ReferenceContains => current.is_included_in(reference),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PeriodRelation::Always => "always",
            PeriodRelation::Never => "never",
            PeriodRelation::Equals => "equals",
            PeriodRelation::HasCommonPoint => "intersects",
            PeriodRelation::ReferenceContains => "contained",
        }
    }
}

impl fmt::Display for PeriodRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for PeriodRelation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(PeriodRelation::Always),
            "never" => Ok(PeriodRelation::Never),
            "equals" => Ok(PeriodRelation::Equals),
            "intersects" => Ok(PeriodRelation::HasCommonPoint),
            "contained" => Ok(PeriodRelation::ReferenceContains),
            _ => Err(ParseError::UnknownRelation(s.to_string())),
        }
    }
}
