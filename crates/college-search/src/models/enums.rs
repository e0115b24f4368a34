//! Enumeration types for search criteria and college records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MappingError;

/// Institution ownership, with the fixed College Scorecard codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Ownership {
    /// Public institution (code 1).
    Public,
    /// Private non-profit institution (code 2).
    PrivateNonprofit,
    /// Private for-profit institution (code 3).
    PrivateForprofit,
}

impl Ownership {
    /// All variants, in code order.
    pub const ALL: [Self; 3] = [Self::Public, Self::PrivateNonprofit, Self::PrivateForprofit];

    /// Upstream numeric code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Public => 1,
            Self::PrivateNonprofit => 2,
            Self::PrivateForprofit => 3,
        }
    }

    /// Canonical label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::PrivateNonprofit => "private-nonprofit",
            Self::PrivateForprofit => "private-forprofit",
        }
    }

    /// Look up an ownership by upstream code.
    pub fn from_code(code: i64) -> Result<Self, MappingError> {
        Self::ALL
            .into_iter()
            .find(|o| i64::from(o.code()) == code)
            .ok_or_else(|| MappingError::invalid_ownership(code))
    }

    /// Look up an ownership by label.
    ///
    /// Also accepts the spaced spellings sent by the web front end
    /// (`private non-profit`, `private for-profit`).
    pub fn from_label(label: &str) -> Result<Self, MappingError> {
        let alias = match label {
            "private non-profit" => "private-nonprofit",
            "private for-profit" => "private-forprofit",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|o| o.label() == alias)
            .ok_or_else(|| MappingError::invalid_ownership(label))
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Ownership {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl TryFrom<String> for Ownership {
    type Error = MappingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value)
    }
}

impl From<Ownership> for &'static str {
    fn from(value: Ownership) -> Self {
        value.label()
    }
}

/// Sort direction for a single sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Wire form used in the `sort` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
