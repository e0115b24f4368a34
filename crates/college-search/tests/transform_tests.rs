//! Response transformer tests.
//!
//! Fixtures follow the nested College Scorecard result shape.

use serde_json::json;

use college_search::MappingError;
use college_search::models::{Ownership, RawApiResult};
use college_search::transform::transform;

/// Fully populated upstream result.
fn sample_result(name: &str, ownership: i64) -> serde_json::Value {
    json!({
        "latest": {
            "school": {
                "name": name,
                "address": "450 Serra Mall",
                "city": "Stanford",
                "state": "CA",
                "zip": "94305-2004",
                "ownership": ownership,
                "school_url": "www.stanford.edu"
            },
            "student": { "size": 7841 },
            "admissions": {
                "admission_rate": { "overall": 0.0368 },
                "sat_scores": { "midpoint": { "math": 650, "critical_reading": 600, "writing": 610 } },
                "act_scores": { "midpoint": { "cumulative": 34, "english": 35, "math": 33, "writing": 9 } }
            },
            "cost": {
                "tuition": { "in_state": 62484, "out_of_state": 62484 },
                "room_board": { "oncampus": 19922, "offcampus": 21000 },
                "avg_net_price": { "overrall": 4320 }
            },
            "aid": {
                "pell_grant_rate": 0.1793,
                "federal_loan_rate": 0.0415,
                "median_debt": { "completers": { "overrall": 13000, "monthly_payments": 134.7 } }
            },
            "completion": { "consumer_rate": 0.9456 }
        },
        "location": { "lat": 37.4275, "lon": -122.1697 }
    })
}

fn response(results: Vec<serde_json::Value>) -> RawApiResult {
    serde_json::from_value(json!({
        "metadata": { "total": results.len(), "page": 0, "per_page": 20 },
        "results": results
    }))
    .unwrap()
}

// =============================================================================
// Field mapping
// =============================================================================

#[test]
fn test_full_record() {
    let colleges = transform(&response(vec![sample_result("Stanford University", 2)])).unwrap();
    assert_eq!(colleges.len(), 1);
    let c = &colleges[0];

    assert_eq!(c.name, "Stanford University");
    assert_eq!(c.ownership, Ownership::PrivateNonprofit);
    assert_eq!(c.student_count, Some(7841));
    assert_eq!(c.address, "450 Serra Mall");
    assert_eq!(c.city, "Stanford");
    assert_eq!(c.state, "CA");
    assert_eq!(c.zip, "94305-2004");

    assert_eq!(c.admissions.rate, Some(0.0368));
    assert_eq!(c.admissions.sat.total, Some(1250.0));
    assert_eq!(c.admissions.sat.math, Some(650.0));
    assert_eq!(c.admissions.sat.reading, Some(600.0));
    assert_eq!(c.admissions.sat.writing, Some(610.0));
    assert_eq!(c.admissions.act.total, Some(34.0));
    assert_eq!(c.admissions.act.english, Some(35.0));
    assert_eq!(c.admissions.act.math, Some(33.0));
    assert_eq!(c.admissions.act.writing, Some(9.0));

    assert_eq!(c.costs.tuition.in_state, Some(62484.0));
    assert_eq!(c.costs.tuition.out_of_state, Some(62484.0));
    assert_eq!(c.costs.room.on_campus, Some(19922.0));
    assert_eq!(c.costs.room.off_campus, Some(21000.0));
    assert_eq!(c.costs.net, Some(4320.0));

    assert_eq!(c.aid.pell_grant_rate, Some(0.1793));
    assert_eq!(c.aid.federal_loan_rate, Some(0.0415));
    assert_eq!(c.aid.average_debt.total, Some(13000.0));
    assert_eq!(c.aid.average_debt.monthly, Some(134.7));

    assert_eq!(c.completion.rate, Some(0.9456));
    assert_eq!(c.location.latitude, Some(37.4275));
    assert_eq!(c.location.longitude, Some(-122.1697));

    assert!(c.has_test_scores());
    assert!((c.acceptance_percent().unwrap() - 3.68).abs() < 1e-9);
}

#[test]
fn test_results_keep_upstream_order() {
    let colleges = transform(&response(vec![
        sample_result("Alpha College", 1),
        sample_result("Beta Institute", 3),
    ]))
    .unwrap();

    let names: Vec<_> = colleges.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Alpha College", "Beta Institute"]);
    assert_eq!(colleges[0].ownership, Ownership::Public);
    assert_eq!(colleges[1].ownership, Ownership::PrivateForprofit);
}

#[test]
fn test_empty_results() {
    assert!(transform(&response(vec![])).unwrap().is_empty());
}

// =============================================================================
// Falsy -> absent
// =============================================================================

#[test]
fn test_sat_total_needs_both_sections() {
    let mut raw = sample_result("Partial U", 1);
    raw["latest"]["admissions"]["sat_scores"]["midpoint"]["critical_reading"] = json!(0);

    let c = &transform(&response(vec![raw])).unwrap()[0];

    assert_eq!(c.admissions.sat.total, None);
    assert_eq!(c.admissions.sat.math, Some(650.0));
    assert_eq!(c.admissions.sat.reading, None);
}

#[test]
fn test_sat_total_absent_when_math_missing() {
    let mut raw = sample_result("Partial U", 1);
    raw["latest"]["admissions"]["sat_scores"]["midpoint"]["math"] = json!(null);

    let c = &transform(&response(vec![raw])).unwrap()[0];

    assert_eq!(c.admissions.sat.total, None);
    assert_eq!(c.admissions.sat.reading, Some(600.0));
}

#[test]
fn test_zero_rate_is_reported_as_unknown() {
    let mut raw = sample_result("Open Door CC", 1);
    raw["latest"]["admissions"]["admission_rate"]["overall"] = json!(0);
    raw["latest"]["cost"]["avg_net_price"]["overrall"] = json!(0.0);
    raw["location"] = json!({ "lat": 0, "lon": null });

    let c = &transform(&response(vec![raw])).unwrap()[0];

    assert_eq!(c.admissions.rate, None);
    assert_eq!(c.acceptance_percent(), None);
    assert_eq!(c.costs.net, None);
    assert_eq!(c.location.latitude, None);
    assert_eq!(c.location.longitude, None);
}

#[test]
fn test_zero_student_count_is_kept() {
    let mut raw = sample_result("Closed Campus", 1);
    raw["latest"]["student"]["size"] = json!(0);

    let c = &transform(&response(vec![raw])).unwrap()[0];
    assert_eq!(c.student_count, Some(0));
}

#[test]
fn test_sparse_record() {
    let raw = json!({
        "latest": {
            "school": { "name": "Sparse College", "ownership": 3 },
            "cost": { "room_board": null },
            "aid": null
        }
    });

    let c = &transform(&response(vec![raw])).unwrap()[0];

    assert_eq!(c.name, "Sparse College");
    assert_eq!(c.student_count, None);
    assert_eq!(c.city, "");
    assert!(!c.has_test_scores());
    assert_eq!(c.costs.room.on_campus, None);
    assert_eq!(c.aid.average_debt.total, None);
    assert_eq!(c.completion.rate, None);
}

#[test]
fn test_absent_fields_omitted_from_json() {
    let raw = json!({ "latest": { "school": { "name": "Sparse College", "ownership": 1 } } });
    let c = &transform(&response(vec![raw])).unwrap()[0];

    let value = serde_json::to_value(c).unwrap();
    assert_eq!(value["ownership"], "public");
    assert_eq!(value["admissions"]["sat"], json!({}));
    assert!(value["costs"].get("net").is_none());
}

// =============================================================================
// Ownership
// =============================================================================

#[test]
fn test_unknown_ownership_code_fails() {
    let result = transform(&response(vec![sample_result("Mystery U", 4)]));
    assert_eq!(result, Err(MappingError::invalid_ownership(4)));
}

#[test]
fn test_one_bad_record_fails_whole_response() {
    let result = transform(&response(vec![
        sample_result("Good U", 1),
        sample_result("Bad U", 9),
    ]));
    assert!(matches!(result, Err(MappingError::InvalidOwnership { .. })));
}

#[test]
fn test_ownership_roundtrip_through_query_and_transform() {
    use college_search::models::{SchoolCriteria, SearchCriteria};
    use college_search::query::QueryBuilder;

    for ownership in Ownership::ALL {
        let criteria = SearchCriteria {
            school: Some(SchoolCriteria { ownership: Some(ownership), location: None }),
            ..SearchCriteria::paged(1, 1)
        };
        let params = QueryBuilder::new("k").build(&criteria).unwrap();
        let code: i64 = params.get("school.ownership").unwrap().parse().unwrap();

        let colleges = transform(&response(vec![sample_result("Roundtrip U", code)])).unwrap();
        assert_eq!(colleges[0].ownership, ownership);
    }
}
