//! College Scorecard response schema.
//!
//! Every field is optional and every nested object tolerates `null`, so a
//! sparse upstream record still deserializes; the transformer decides what
//! survives. The `overrall` keys are spelled the way the upstream sends them.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize `null` as the type's default.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserialize a count sent either as an integer or an integral float.
/// Negative or fractional values are dropped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|n| n.is_finite() && *n >= 0.0 && n.fract() == 0.0).map(|n| n as u64))
}

/// Top-level response of the schools endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawApiResult {
    #[serde(default, deserialize_with = "null_default")]
    pub metadata: Metadata,

    #[serde(default, deserialize_with = "null_default")]
    pub results: Vec<RawResult>,
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "null_default")]
    pub total: u64,

    #[serde(default, deserialize_with = "null_default")]
    pub page: u64,

    #[serde(default, deserialize_with = "null_default")]
    pub per_page: u64,
}

/// One institution in the result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawResult {
    #[serde(default, deserialize_with = "null_default")]
    pub latest: Latest,

    #[serde(default, deserialize_with = "null_default")]
    pub location: RawLocation,
}

/// Most recent reporting year.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Latest {
    #[serde(default, deserialize_with = "null_default")]
    pub school: RawSchool,

    #[serde(default, deserialize_with = "null_default")]
    pub student: RawStudent,

    #[serde(default, deserialize_with = "null_default")]
    pub admissions: RawAdmissions,

    #[serde(default, deserialize_with = "null_default")]
    pub cost: RawCost,

    #[serde(default, deserialize_with = "null_default")]
    pub aid: RawAid,

    #[serde(default, deserialize_with = "null_default")]
    pub completion: RawCompletion,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSchool {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_default")]
    pub address: String,

    #[serde(default, deserialize_with = "null_default")]
    pub city: String,

    #[serde(default, deserialize_with = "null_default")]
    pub state: String,

    #[serde(default, deserialize_with = "null_default")]
    pub zip: String,

    /// Ownership code (1, 2 or 3).
    #[serde(default)]
    pub ownership: Option<i64>,

    #[serde(default)]
    pub school_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawStudent {
    /// Degree-seeking undergraduate enrollment.
    #[serde(default, deserialize_with = "whole_number")]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAdmissions {
    #[serde(default, deserialize_with = "null_default")]
    pub admission_rate: AdmissionRate,

    #[serde(default, deserialize_with = "null_default")]
    pub sat_scores: SatScores,

    #[serde(default, deserialize_with = "null_default")]
    pub act_scores: ActScores,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdmissionRate {
    #[serde(default)]
    pub overall: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SatScores {
    #[serde(default, deserialize_with = "null_default")]
    pub midpoint: SatMidpoint,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActScores {
    #[serde(default, deserialize_with = "null_default")]
    pub midpoint: ActMidpoint,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SatMidpoint {
    #[serde(default)]
    pub math: Option<f64>,

    #[serde(default)]
    pub critical_reading: Option<f64>,

    #[serde(default)]
    pub writing: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActMidpoint {
    #[serde(default)]
    pub cumulative: Option<f64>,

    #[serde(default)]
    pub english: Option<f64>,

    #[serde(default)]
    pub math: Option<f64>,

    #[serde(default)]
    pub writing: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCost {
    #[serde(default, deserialize_with = "null_default")]
    pub tuition: RawTuition,

    #[serde(default, deserialize_with = "null_default")]
    pub room_board: RoomBoard,

    #[serde(default, deserialize_with = "null_default")]
    pub avg_net_price: Overrall,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTuition {
    #[serde(default)]
    pub in_state: Option<f64>,

    #[serde(default)]
    pub out_of_state: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomBoard {
    #[serde(default)]
    pub oncampus: Option<f64>,

    #[serde(default)]
    pub offcampus: Option<f64>,
}

/// Holder for the upstream's misspelled `overrall` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Overrall {
    #[serde(default)]
    pub overrall: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAid {
    #[serde(default)]
    pub pell_grant_rate: Option<f64>,

    #[serde(default)]
    pub federal_loan_rate: Option<f64>,

    #[serde(default, deserialize_with = "null_default")]
    pub median_debt: MedianDebt,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedianDebt {
    #[serde(default, deserialize_with = "null_default")]
    pub completers: Completers,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Completers {
    #[serde(default)]
    pub overrall: Option<f64>,

    #[serde(default)]
    pub monthly_payments: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCompletion {
    #[serde(default)]
    pub consumer_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLocation {
    #[serde(default)]
    pub lat: Option<f64>,

    #[serde(default)]
    pub lon: Option<f64>,
}
