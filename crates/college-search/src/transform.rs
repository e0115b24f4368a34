//! College Scorecard results to normalized college records.
//!
//! Numeric leaves follow one rule: zero, `null`, NaN and missing all become
//! absent. A real zero (say a 0% admission rate) is therefore reported as
//! unknown. `student_count` is the exception and is copied as-is.

use crate::error::MappingError;
use crate::models::raw::{Latest, RawLocation, RawResult};
use crate::models::{
    Act, Admissions, Aid, AverageDebt, College, Completion, Costs, Location, Ownership,
    RawApiResult, Room, Sat, Tuition,
};

/// Normalize every result in an upstream response.
///
/// # Errors
///
/// Returns [`MappingError::InvalidOwnership`] if any result carries an
/// ownership code other than 1, 2 or 3.
pub fn transform(raw: &RawApiResult) -> Result<Vec<College>, MappingError> {
    raw.results.iter().map(transform_result).collect()
}

/// Normalize a single upstream result.
pub fn transform_result(result: &RawResult) -> Result<College, MappingError> {
    let RawResult { latest, location } = result;
    let school = &latest.school;

    let ownership = match school.ownership {
        Some(code) => Ownership::from_code(code)?,
        None => return Err(MappingError::invalid_ownership("missing")),
    };

    Ok(College {
        name: school.name.clone(),
        ownership,
        student_count: latest.student.size,
        address: school.address.clone(),
        city: school.city.clone(),
        state: school.state.clone(),
        zip: school.zip.clone(),
        admissions: admissions(latest),
        costs: costs(latest),
        aid: aid(latest),
        completion: Completion { rate: present(latest.completion.consumer_rate) },
        location: location_of(location),
    })
}

/// Collapse falsy numbers to `None`.
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

fn admissions(latest: &Latest) -> Admissions {
    let sat = &latest.admissions.sat_scores.midpoint;
    let act = &latest.admissions.act_scores.midpoint;

    let math = present(sat.math);
    let reading = present(sat.critical_reading);

    Admissions {
        rate: present(latest.admissions.admission_rate.overall),
        sat: Sat {
            total: math.zip(reading).map(|(m, r)| m + r),
            math,
            reading,
            writing: present(sat.writing),
        },
        act: Act {
            total: present(act.cumulative),
            english: present(act.english),
            math: present(act.math),
            writing: present(act.writing),
        },
    }
}

fn costs(latest: &Latest) -> Costs {
    let cost = &latest.cost;
    Costs {
        tuition: Tuition {
            in_state: present(cost.tuition.in_state),
            out_of_state: present(cost.tuition.out_of_state),
        },
        room: Room {
            on_campus: present(cost.room_board.oncampus),
            off_campus: present(cost.room_board.offcampus),
        },
        net: present(cost.avg_net_price.overrall),
    }
}

fn aid(latest: &Latest) -> Aid {
    let aid = &latest.aid;
    Aid {
        pell_grant_rate: present(aid.pell_grant_rate),
        federal_loan_rate: present(aid.federal_loan_rate),
        average_debt: AverageDebt {
            total: present(aid.median_debt.completers.overrall),
            monthly: present(aid.median_debt.completers.monthly_payments),
        },
    }
}

fn location_of(location: &RawLocation) -> Location {
    Location { latitude: present(location.lat), longitude: present(location.lon) }
}
