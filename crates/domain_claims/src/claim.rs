//! Claim aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ClaimId, LecturerId};

use crate::error::WorkflowError;

/// Claim status
///
/// One closed set of states governs the whole review lifecycle. A claim
/// enters at `Pending` and leaves through one of the terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Submitted, awaiting coordinator review
    Pending,
    /// Verified by a coordinator, awaiting manager decision
    Verified,
    /// Pushed back to the lecturer with a query
    Query,
    /// Approved by a manager
    Approved,
    /// Rejected by a manager
    Rejected,
}

impl ClaimStatus {
    /// Returns true once no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Rejected)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Verified => "Verified",
            ClaimStatus::Query => "Query",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        };
        f.write_str(label)
    }
}

/// A compensation claim for taught hours and sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier, assigned by the store on creation
    pub id: ClaimId,
    /// Submitting lecturer; immutable after creation
    pub lecturer_id: LecturerId,
    /// Number of sessions claimed
    pub sessions: u32,
    /// Number of hours claimed
    pub hours: u32,
    /// Hourly rate in rand
    pub hourly_rate: u32,
    /// Module the work was taught for
    pub module_name: String,
    /// Faculty the module belongs to
    pub faculty: String,
    /// Reference to an externally stored supporting document
    pub supporting_document: Option<String>,
    /// Current workflow status
    pub status: ClaimStatus,
    /// Set once at creation, never changes
    pub submitted_at: DateTime<Utc>,
    /// Coordinator who verified or queried the claim
    pub verified_by: Option<String>,
    /// When the claim was verified or queried
    pub verified_at: Option<DateTime<Utc>>,
    /// Manager who approved or rejected the claim
    pub approved_by: Option<String>,
    /// When the claim was approved or rejected
    pub approved_at: Option<DateTime<Utc>>,
    /// Reason recorded by a query or rejection
    pub rejection_reason: Option<String>,
}

impl Claim {
    /// The claimed amount, derived and never stored
    pub fn total_amount(&self) -> Decimal {
        Decimal::from(self.hours) * Decimal::from(self.hourly_rate)
    }

    /// Returns true if the claim belongs to the given lecturer
    pub fn is_owned_by(&self, lecturer_id: LecturerId) -> bool {
        self.lecturer_id == lecturer_id
    }

    /// Marks the claim verified by a coordinator
    pub fn verify(&mut self, verifier: &str) -> Result<(), WorkflowError> {
        self.transition_to(ClaimStatus::Verified)?;
        self.verified_by = Some(verifier.to_string());
        self.verified_at = Some(Utc::now());
        Ok(())
    }

    /// Pushes the claim back to the lecturer with a query
    pub fn query(&mut self, verifier: &str, reason: &str) -> Result<(), WorkflowError> {
        self.transition_to(ClaimStatus::Query)?;
        self.rejection_reason = Some(reason.to_string());
        self.verified_by = Some(verifier.to_string());
        self.verified_at = Some(Utc::now());
        Ok(())
    }

    /// Marks the claim approved by a manager
    pub fn approve(&mut self, approver: &str) -> Result<(), WorkflowError> {
        self.transition_to(ClaimStatus::Approved)?;
        self.approved_by = Some(approver.to_string());
        self.approved_at = Some(Utc::now());
        Ok(())
    }

    /// Marks the claim rejected by a manager
    pub fn reject(&mut self, approver: &str, reason: &str) -> Result<(), WorkflowError> {
        self.transition_to(ClaimStatus::Rejected)?;
        self.rejection_reason = Some(reason.to_string());
        self.approved_by = Some(approver.to_string());
        self.approved_at = Some(Utc::now());
        Ok(())
    }

    /// Returns a queried claim to the pending queue
    ///
    /// Clears the query reason and the verification stamps so the claim
    /// re-enters review clean.
    pub fn resubmit(&mut self) -> Result<(), WorkflowError> {
        self.transition_to(ClaimStatus::Pending)?;
        self.rejection_reason = None;
        self.verified_by = None;
        self.verified_at = None;
        Ok(())
    }

    fn transition_to(&mut self, target: ClaimStatus) -> Result<(), WorkflowError> {
        if !self.can_transition_to(target) {
            return Err(WorkflowError::InvalidTransition {
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }

    /// The authoritative transition table
    fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self.status, target),
            (Pending, Verified) |
            (Pending, Query) |
            (Query, Pending) |
            (Verified, Approved) |
            (Verified, Rejected)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pending_claim() -> Claim {
        Claim {
            id: ClaimId::new_v7(),
            lecturer_id: LecturerId::new_v7(),
            sessions: 2,
            hours: 10,
            hourly_rate: 100,
            module_name: "Programming 101".to_string(),
            faculty: "Science".to_string(),
            supporting_document: None,
            status: ClaimStatus::Pending,
            submitted_at: Utc::now(),
            verified_by: None,
            verified_at: None,
            approved_by: None,
            approved_at: None,
            rejection_reason: None,
        }
    }

    #[test]
    fn test_total_amount_is_derived() {
        let mut claim = pending_claim();
        assert_eq!(claim.total_amount(), dec!(1000));

        claim.hours = 12;
        claim.hourly_rate = 150;
        assert_eq!(claim.total_amount(), dec!(1800));
    }

    #[test]
    fn test_verify_stamps_metadata() {
        let mut claim = pending_claim();
        claim.verify("coord@uni.ac.za").unwrap();

        assert_eq!(claim.status, ClaimStatus::Verified);
        assert_eq!(claim.verified_by.as_deref(), Some("coord@uni.ac.za"));
        assert!(claim.verified_at.is_some());
        assert!(claim.approved_by.is_none());
    }

    #[test]
    fn test_query_requires_pending() {
        let mut claim = pending_claim();
        claim.verify("coord").unwrap();

        let result = claim.query("coord", "missing timesheet");
        assert!(matches!(
            result,
            Err(WorkflowError::InvalidTransition {
                from: ClaimStatus::Verified,
                to: ClaimStatus::Query,
            })
        ));
        assert_eq!(claim.status, ClaimStatus::Verified);
    }

    #[test]
    fn test_approve_requires_verified() {
        let mut claim = pending_claim();
        let result = claim.approve("manager");
        assert!(result.is_err());
        assert_eq!(claim.status, ClaimStatus::Pending);

        claim.verify("coord").unwrap();
        claim.approve("manager").unwrap();
        assert_eq!(claim.status, ClaimStatus::Approved);
        assert_eq!(claim.approved_by.as_deref(), Some("manager"));
        assert!(claim.approved_at.is_some());
    }

    #[test]
    fn test_reject_stamps_reason() {
        let mut claim = pending_claim();
        claim.verify("coord").unwrap();
        claim.reject("manager", "duplicate of last month").unwrap();

        assert_eq!(claim.status, ClaimStatus::Rejected);
        assert_eq!(
            claim.rejection_reason.as_deref(),
            Some("duplicate of last month")
        );
    }

    #[test]
    fn test_resubmit_clears_query_stamps() {
        let mut claim = pending_claim();
        claim.query("coord", "wrong module code").unwrap();
        assert_eq!(claim.status, ClaimStatus::Query);

        claim.resubmit().unwrap();
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert!(claim.rejection_reason.is_none());
        assert!(claim.verified_by.is_none());
        assert!(claim.verified_at.is_none());
    }

    #[test]
    fn test_terminal_states_admit_no_transition() {
        use ClaimStatus::*;

        for terminal in [Approved, Rejected] {
            let mut claim = pending_claim();
            claim.status = terminal;
            assert!(terminal.is_terminal());

            for target in [Pending, Verified, Query, Approved, Rejected] {
                assert!(
                    claim.transition_to(target).is_err(),
                    "{terminal} -> {target} must be illegal"
                );
            }
        }
    }

    #[test]
    fn test_non_terminal_states() {
        assert!(!ClaimStatus::Pending.is_terminal());
        assert!(!ClaimStatus::Verified.is_terminal());
        assert!(!ClaimStatus::Query.is_terminal());
    }

    #[test]
    fn test_status_serialization() {
        for status in [
            ClaimStatus::Pending,
            ClaimStatus::Verified,
            ClaimStatus::Query,
            ClaimStatus::Approved,
            ClaimStatus::Rejected,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let back: ClaimStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status, back);
        }
    }
}
