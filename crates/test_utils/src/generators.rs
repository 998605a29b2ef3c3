//! Property-based test generators
//!
//! Proptest strategies for generating claim data that stays inside the
//! domain's input ranges.

use proptest::prelude::*;

use domain_claims::actor::Role;
use domain_claims::claim::{Claim, ClaimStatus};

use crate::builders::ClaimBuilder;

/// Strategy over every claim status
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Pending),
        Just(ClaimStatus::Verified),
        Just(ClaimStatus::Query),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
    ]
}

/// Strategy over every role
pub fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::Lecturer),
        Just(Role::Coordinator),
        Just(Role::Manager),
        Just(Role::Hr),
        Just(Role::Admin),
    ]
}

/// Strategy over roles other than the given one
pub fn role_other_than(excluded: Role) -> impl Strategy<Value = Role> {
    role_strategy().prop_filter("excluded role", move |r| *r != excluded)
}

/// Session counts within the input range
pub fn sessions_strategy() -> impl Strategy<Value = u32> {
    1u32..=100
}

/// Hour counts within the input range
pub fn hours_strategy() -> impl Strategy<Value = u32> {
    1u32..=1000
}

/// Hourly rates within the input range
pub fn rate_strategy() -> impl Strategy<Value = u32> {
    1u32..=1000
}

/// Faculties with a configured rate band, plus some without
pub fn faculty_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Science".to_string()),
        Just("Engineering".to_string()),
        Just("Business".to_string()),
        Just("Arts".to_string()),
        Just("Health Sciences".to_string()),
        Just("Law".to_string()),
        Just("Education".to_string()),
    ]
}

/// Strategy over pending claims with in-range economic fields
pub fn claim_strategy() -> impl Strategy<Value = Claim> {
    (
        sessions_strategy(),
        hours_strategy(),
        rate_strategy(),
        faculty_strategy(),
    )
        .prop_map(|(sessions, hours, rate, faculty)| {
            ClaimBuilder::new()
                .with_sessions(sessions)
                .with_hours(hours)
                .with_rate(rate)
                .with_faculty(faculty)
                .build()
        })
}
