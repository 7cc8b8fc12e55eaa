//! Scope model
//!
//! The filter applied before aggregation: every unit, or one unit.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::Dataset;

/// Text form of [`Scope::All`]
pub const ALL_UNITS: &str = "all";

/// Which units a computation covers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// Every unit in the dataset
    #[default]
    All,
    /// A single unit, by identifier
    Unit(String),
}

impl Scope {
    pub fn unit(id: impl Into<String>) -> Self {
        Self::Unit(id.into())
    }

    /// Scope for an optional unit argument (`None` means every unit)
    pub fn from_option(unit: Option<&str>) -> Self {
        unit.map(|u| u.parse().unwrap_or_default()).unwrap_or_default()
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Unit identifiers this scope covers, in dataset order
    ///
    /// A unit scope naming a unit absent from the dataset covers nothing.
    pub fn resolve<'a>(&self, dataset: &'a Dataset) -> Vec<&'a str> {
        match self {
            Self::All => dataset.unit_ids().collect(),
            Self::Unit(id) => dataset.unit_ids().filter(|u| *u == id.as_str()).collect(),
        }
    }

    /// Whether this scope names something the dataset has
    pub fn exists_in(&self, dataset: &Dataset) -> bool {
        match self {
            Self::All => true,
            Self::Unit(id) => dataset.contains_unit(id),
        }
    }
}

impl FromStr for Scope {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_UNITS {
            Ok(Self::All)
        } else {
            Ok(Self::Unit(s.to_string()))
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_UNITS),
            Self::Unit(id) => f.write_str(id),
        }
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
