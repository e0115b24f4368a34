//! Search criteria to College Scorecard query parameters.
//!
//! Parameter keys are the upstream's filter contract and must not change.
//! Range filters use the upstream's inclusive `min..max` syntax.

use crate::error::MappingError;
use crate::models::{
    ActCriteria, AdmissionsCriteria, CostsCriteria, Range, SatCriteria, SchoolCriteria,
    SearchCriteria, SortSpec,
};

/// Upstream parameter keys.
pub mod keys {
    pub const API_KEY: &str = "api_key";
    pub const PAGE: &str = "page";
    pub const PER_PAGE: &str = "per_page";
    pub const OWNERSHIP: &str = "school.ownership";
    pub const STATE: &str = "school.state";
    pub const ZIP: &str = "school.zip";
    pub const LATITUDE: &str = "location.lat";
    pub const LONGITUDE: &str = "location.lon";
    pub const DISTANCE: &str = "distance";
    pub const STUDENT_SIZE: &str = "latest.student.size__range";
    pub const ADMISSION_RATE: &str = "latest.admissions.admission_rate.overall__range";
    pub const SAT_MATH: &str = "latest.admissions.sat_scores.midpoint.math__range";
    pub const SAT_READING: &str = "latest.admissions.sat_scores.midpoint.critical_reading__range";
    pub const SAT_WRITING: &str = "latest.admissions.sat_scores.midpoint.writing__range";
    pub const ACT_CUMULATIVE: &str = "latest.admissions.act_scores.midpoint.cumulative__range";
    pub const ACT_ENGLISH: &str = "latest.admissions.act_scores.midpoint.english__range";
    pub const ACT_MATH: &str = "latest.admissions.act_scores.midpoint.math__range";
    pub const ACT_WRITING: &str = "latest.admissions.act_scores.midpoint.writing__range";
    pub const TUITION_IN_STATE: &str = "latest.cost.tuition.in_state__range";
    pub const TUITION_OUT_OF_STATE: &str = "latest.cost.tuition.out_of_state__range";
    pub const NET_PRICE: &str = "latest.cost.avg_net_price.overall__range";
    pub const MEDIAN_DEBT: &str = "latest.aid.median_debt.completers.overall__range";
    pub const SORT: &str = "sort";
}

impl Range {
    /// Encode as `min..max`, `min..` or `..max`.
    pub fn encode(&self) -> Result<String, MappingError> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Ok(format!("{min}..{max}")),
            (Some(min), None) => Ok(format!("{min}..")),
            (None, Some(max)) => Ok(format!("..{max}")),
            (None, None) => Err(MappingError::InvalidRange),
        }
    }
}

/// Ordered query parameters for one upstream request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    fn push(&mut self, key: &str, value: impl Into<String>) {
        self.0.push((key.to_string(), value.into()));
    }

    fn push_range(&mut self, key: &str, range: Option<&Range>) -> Result<(), MappingError> {
        if let Some(range) = range {
            self.push(key, range.encode()?);
        }
        Ok(())
    }

    /// Key/value pairs in emission order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Value of the first pair with the given key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no pairs were emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as an `application/x-www-form-urlencoded` query string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new()).extend_pairs(&self.0).finish()
    }

    /// Same as [`to_query_string`](Self::to_query_string) with the API key
    /// value masked, for logging.
    #[must_use]
    pub fn redacted(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter().map(|(k, v)| {
                if k == keys::API_KEY { (k.as_str(), "***") } else { (k.as_str(), v.as_str()) }
            }))
            .finish()
    }
}

/// Builds upstream query parameters from search criteria.
#[derive(Clone)]
pub struct QueryBuilder {
    api_key: String,
}

impl QueryBuilder {
    /// Create a builder that stamps every query with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }

    /// Build the query for one search.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidRange`] for a range filter with no bounds.
    pub fn build(&self, criteria: &SearchCriteria) -> Result<QueryParams, MappingError> {
        let mut params = QueryParams::default();

        params.push(keys::PAGE, criteria.paging.page.to_string());
        params.push(keys::PER_PAGE, criteria.paging.per_page.to_string());
        params.push(keys::API_KEY, self.api_key.as_str());

        if let Some(school) = &criteria.school {
            push_school(&mut params, school);
        }

        let count = criteria.student.as_ref().and_then(|s| s.count.as_ref());
        params.push_range(keys::STUDENT_SIZE, count)?;

        if let Some(admissions) = &criteria.admissions {
            push_admissions(&mut params, admissions)?;
        }

        if let Some(costs) = &criteria.costs {
            push_costs(&mut params, costs)?;
        }

        if let Some(sort) = criteria.sort.as_deref().filter(|s| !s.is_empty()) {
            params.push(keys::SORT, encode_sort(sort));
        }

        Ok(params)
    }
}

impl std::fmt::Debug for QueryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryBuilder").field("has_api_key", &!self.api_key.is_empty()).finish()
    }
}

fn push_school(params: &mut QueryParams, school: &SchoolCriteria) {
    if let Some(ownership) = school.ownership {
        params.push(keys::OWNERSHIP, ownership.code().to_string());
    }

    let Some(location) = &school.location else {
        return;
    };

    // Empty strings and a zero distance mean the field was left blank.
    if let Some(state) = location.state.as_deref().filter(|s| !s.is_empty()) {
        params.push(keys::STATE, state);
    }
    if let Some(zip) = location.zip.as_deref().filter(|s| !s.is_empty()) {
        params.push(keys::ZIP, zip);
    }
    if let Some(geo) = location.geographic {
        params.push(keys::LATITUDE, geo.latitude.to_string());
        params.push(keys::LONGITUDE, geo.longitude.to_string());
    }
    // Sent even without an origin; the upstream decides what that means.
    if let Some(distance) = location.distance.filter(|d| *d != 0.0) {
        params.push(keys::DISTANCE, format!("{distance}mi"));
    }
}

fn push_admissions(
    params: &mut QueryParams,
    admissions: &AdmissionsCriteria,
) -> Result<(), MappingError> {
    params.push_range(keys::ADMISSION_RATE, admissions.rate.as_ref())?;

    if let Some(SatCriteria { math, reading, writing }) = &admissions.sat_scores {
        params.push_range(keys::SAT_MATH, math.as_ref())?;
        params.push_range(keys::SAT_READING, reading.as_ref())?;
        params.push_range(keys::SAT_WRITING, writing.as_ref())?;
    }

    if let Some(ActCriteria { cumulative, math, english, writing }) = &admissions.act_scores {
        params.push_range(keys::ACT_CUMULATIVE, cumulative.as_ref())?;
        params.push_range(keys::ACT_ENGLISH, english.as_ref())?;
        params.push_range(keys::ACT_MATH, math.as_ref())?;
        params.push_range(keys::ACT_WRITING, writing.as_ref())?;
    }

    Ok(())
}

fn push_costs(params: &mut QueryParams, costs: &CostsCriteria) -> Result<(), MappingError> {
    if let Some(tuition) = &costs.tuition {
        params.push_range(keys::TUITION_IN_STATE, tuition.in_state.as_ref())?;
        params.push_range(keys::TUITION_OUT_OF_STATE, tuition.out_of_state.as_ref())?;
    }
    params.push_range(keys::NET_PRICE, costs.average_net_price.as_ref())?;
    params.push_range(keys::MEDIAN_DEBT, costs.average_debt.as_ref())?;
    Ok(())
}

fn encode_sort(sort: &[SortSpec]) -> String {
    sort.iter()
        .map(|s| format!("{}:{}", s.field, s.direction))
        .collect::<Vec<_>>()
        .join(",")
}
