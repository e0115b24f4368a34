//! Search criteria accepted by the search endpoint.
//!
//! Field names match the JSON body posted by the web front end.

use serde::{Deserialize, Serialize};

use super::{Ownership, SortDirection};

/// Inclusive numeric interval with independently optional bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Lower bound (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper bound (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Range {
    /// Range with both bounds.
    #[must_use]
    pub const fn between(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// Range with only a lower bound.
    #[must_use]
    pub const fn at_least(min: f64) -> Self {
        Self { min: Some(min), max: None }
    }

    /// Range with only an upper bound.
    #[must_use]
    pub const fn at_most(max: f64) -> Self {
        Self { min: None, max: Some(max) }
    }
}

/// One sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Upstream field name (e.g. `latest.student.size`).
    pub field: String,

    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a sort key.
    #[must_use]
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self { field: field.into(), direction }
    }
}

/// Latitude/longitude origin for distance searches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geographic {
    pub latitude: f64,
    pub longitude: f64,
}

/// Location filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationCriteria {
    /// Two-letter state code.
    #[serde(default)]
    pub state: Option<String>,

    /// ZIP code.
    #[serde(default)]
    pub zip: Option<String>,

    /// Origin for distance filtering.
    #[serde(default)]
    pub geographic: Option<Geographic>,

    /// Radius in miles.
    #[serde(default)]
    pub distance: Option<f64>,
}

/// Institution filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolCriteria {
    #[serde(default)]
    pub ownership: Option<Ownership>,

    #[serde(default)]
    pub location: Option<LocationCriteria>,
}

/// Student body filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentCriteria {
    /// Enrollment size.
    #[serde(default)]
    pub count: Option<Range>,
}

/// SAT section midpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SatCriteria {
    #[serde(default)]
    pub math: Option<Range>,

    /// Sent upstream as `critical_reading`.
    #[serde(default)]
    pub reading: Option<Range>,

    #[serde(default)]
    pub writing: Option<Range>,
}

/// ACT section midpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActCriteria {
    #[serde(default)]
    pub cumulative: Option<Range>,

    #[serde(default)]
    pub math: Option<Range>,

    #[serde(default)]
    pub english: Option<Range>,

    #[serde(default)]
    pub writing: Option<Range>,
}

/// Admissions filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdmissionsCriteria {
    /// Overall admission rate, as a fraction.
    #[serde(default)]
    pub rate: Option<Range>,

    #[serde(default)]
    pub sat_scores: Option<SatCriteria>,

    #[serde(default)]
    pub act_scores: Option<ActCriteria>,
}

/// Tuition filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TuitionCriteria {
    #[serde(default)]
    pub in_state: Option<Range>,

    #[serde(default)]
    pub out_of_state: Option<Range>,
}

/// Cost and aid filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostsCriteria {
    #[serde(default)]
    pub tuition: Option<TuitionCriteria>,

    #[serde(default)]
    pub average_net_price: Option<Range>,

    /// Median debt of completers.
    #[serde(default)]
    pub average_debt: Option<Range>,
}

/// Required pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Page index as understood by the upstream.
    pub page: u32,

    /// Results per page.
    pub per_page: u32,
}

impl Paging {
    #[must_use]
    pub const fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }
}

/// Full search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub school: Option<SchoolCriteria>,

    #[serde(default)]
    pub student: Option<StudentCriteria>,

    #[serde(default)]
    pub admissions: Option<AdmissionsCriteria>,

    #[serde(default)]
    pub costs: Option<CostsCriteria>,

    /// Multi-key sort, applied left to right.
    #[serde(default)]
    pub sort: Option<Vec<SortSpec>>,

    pub paging: Paging,
}

impl SearchCriteria {
    /// Criteria with only pagination set.
    #[must_use]
    pub const fn paged(page: u32, per_page: u32) -> Self {
        Self {
            school: None,
            student: None,
            admissions: None,
            costs: None,
            sort: None,
            paging: Paging::new(page, per_page),
        }
    }
}
