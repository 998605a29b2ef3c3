//! Property-based tests over the validation policy and claim arithmetic

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_claims::actor::{Actor, Role};
use domain_claims::claim::ClaimStatus;
use domain_claims::validation::ClaimValidator;

use test_utils::{
    claim_status_strategy, claim_strategy, faculty_strategy, role_other_than, ClaimBuilder,
};

proptest! {
    #[test]
    fn prop_total_amount_is_hours_times_rate(claim in claim_strategy()) {
        let expected = Decimal::from(claim.hours) * Decimal::from(claim.hourly_rate);
        prop_assert_eq!(claim.total_amount(), expected);
    }

    #[test]
    fn prop_policy_compliant_claims_validate(
        sessions in 1u32..=20,
        hours in 1u32..=160,
        rate in 150u32..=400,
        faculty in faculty_strategy(),
    ) {
        // 150-400 sits inside every configured faculty band
        let claim = ClaimBuilder::new()
            .with_sessions(sessions)
            .with_hours(hours)
            .with_rate(rate)
            .with_faculty(faculty)
            .build();

        let result = ClaimValidator::validate(&claim);
        prop_assert!(result.is_valid, "messages: {:?}", result.messages);
    }

    #[test]
    fn prop_warning_iff_hours_exceed_eight(claim in claim_strategy()) {
        let result = ClaimValidator::validate(&claim);
        let has_warning = result.messages.iter().any(|m| m.starts_with("Warning:"));
        prop_assert_eq!(has_warning, claim.hours > 8);
    }

    #[test]
    fn prop_session_count_above_twenty_invalidates(
        sessions in 21u32..=100,
        claim in claim_strategy(),
    ) {
        let claim = ClaimBuilder::new()
            .with_sessions(sessions)
            .with_hours(claim.hours)
            .with_rate(claim.hourly_rate)
            .with_faculty(claim.faculty)
            .build();

        let result = ClaimValidator::validate(&claim);
        prop_assert!(!result.is_valid);
    }

    #[test]
    fn prop_terminal_statuses_are_exactly_approved_and_rejected(
        status in claim_status_strategy(),
    ) {
        let expected = matches!(status, ClaimStatus::Approved | ClaimStatus::Rejected);
        prop_assert_eq!(status.is_terminal(), expected);
    }

    #[test]
    fn prop_only_lecturer_constructors_carry_identity(role in role_other_than(Role::Lecturer)) {
        prop_assert!(Actor::new("someone", role).lecturer_id.is_none());
    }
}
