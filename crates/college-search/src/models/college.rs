//! Normalized college record returned to the front end.

use serde::{Deserialize, Serialize};

use super::Ownership;

/// Display-oriented college record.
///
/// Optional numeric leaves are omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct College {
    pub name: String,
    pub ownership: Ownership,
    /// Copied verbatim; zero stays zero.
    pub student_count: Option<u64>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub admissions: Admissions,
    pub costs: Costs,
    pub aid: Aid,
    pub completion: Completion,
    pub location: Location,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Admissions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    pub sat: Sat,
    pub act: Act,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sat {
    /// Math plus reading, only when both are known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub math: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writing: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Act {
    /// Composite score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub math: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writing: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Costs {
    pub tuition: Tuition,
    pub room: Room,
    /// Average net price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tuition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_state: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_of_state: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_campus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_campus: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aid {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pell_grant_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federal_loan_rate: Option<f64>,
    pub average_debt: AverageDebt,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageDebt {
    /// Median debt of completers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl College {
    /// Acceptance rate as a percentage, if known.
    #[must_use]
    pub fn acceptance_percent(&self) -> Option<f64> {
        self.admissions.rate.map(|r| r * 100.0)
    }

    /// Check if any test score is known.
    #[must_use]
    pub fn has_test_scores(&self) -> bool {
        let sat = &self.admissions.sat;
        let act = &self.admissions.act;
        [sat.math, sat.reading, sat.writing, act.total, act.english, act.math, act.writing]
            .iter()
            .any(Option::is_some)
    }
}
