//! Data models for search criteria, the College Scorecard schema and
//! normalized college records.
//!
//! Criteria and records use the snake_case names of the web front end;
//! raw models mirror the upstream JSON exactly.

mod college;
mod criteria;
mod enums;
pub mod raw;

pub use college::{
    Act, Admissions, Aid, AverageDebt, College, Completion, Costs, Location, Room, Sat, Tuition,
};
pub use criteria::{
    ActCriteria, AdmissionsCriteria, CostsCriteria, Geographic, LocationCriteria, Paging, Range,
    SatCriteria, SchoolCriteria, SearchCriteria, SortSpec, StudentCriteria, TuitionCriteria,
};
pub use enums::{Ownership, SortDirection};
pub use raw::{Metadata, RawApiResult};
