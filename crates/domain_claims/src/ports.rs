//! Claims domain ports
//!
//! The [`ClaimStore`] trait is the contract any persistence backend must
//! satisfy. The workflow engine performs read-modify-write against it and
//! relies on the store to linearize concurrent updates to the same claim
//! identifier; last-committed-wins is acceptable. The engine itself takes
//! no locks.

use async_trait::async_trait;
use chrono::Utc;

use core_kernel::{ClaimId, DomainPort, LecturerId, PortError};

use crate::claim::{Claim, ClaimStatus};
use crate::submission::ClaimSubmission;

/// Data for creating a new claim
#[derive(Debug, Clone)]
pub struct NewClaim {
    pub lecturer_id: LecturerId,
    pub sessions: u32,
    pub hours: u32,
    pub hourly_rate: u32,
    pub module_name: String,
    pub faculty: String,
    pub supporting_document: Option<String>,
}

impl NewClaim {
    /// Builds creation data from a validated submission
    pub fn from_submission(lecturer_id: LecturerId, submission: ClaimSubmission) -> Self {
        Self {
            lecturer_id,
            sessions: submission.sessions,
            hours: submission.hours,
            hourly_rate: submission.hourly_rate,
            module_name: submission.module_name,
            faculty: submission.faculty,
            supporting_document: submission.supporting_document,
        }
    }

    /// Materializes the initial Pending record under a store-assigned id
    pub fn into_claim(self, id: ClaimId) -> Claim {
        Claim {
            id,
            lecturer_id: self.lecturer_id,
            sessions: self.sessions,
            hours: self.hours,
            hourly_rate: self.hourly_rate,
            module_name: self.module_name,
            faculty: self.faculty,
            supporting_document: self.supporting_document,
            status: ClaimStatus::Pending,
            submitted_at: Utc::now(),
            verified_by: None,
            verified_at: None,
            approved_by: None,
            approved_at: None,
            rejection_reason: None,
        }
    }
}

/// Query parameters for fetching claims
#[derive(Debug, Clone, Default)]
pub struct ClaimQuery {
    /// Match any of these statuses; empty matches all
    pub statuses: Vec<ClaimStatus>,
    /// Restrict to one lecturer's claims
    pub lecturer: Option<LecturerId>,
}

impl ClaimQuery {
    /// Matches every claim
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches claims in one status
    pub fn with_status(status: ClaimStatus) -> Self {
        Self {
            statuses: vec![status],
            ..Default::default()
        }
    }

    /// Matches claims in any of the given statuses
    pub fn with_statuses(statuses: &[ClaimStatus]) -> Self {
        Self {
            statuses: statuses.to_vec(),
            ..Default::default()
        }
    }

    /// Matches one lecturer's claims
    pub fn for_lecturer(lecturer_id: LecturerId) -> Self {
        Self {
            lecturer: Some(lecturer_id),
            ..Default::default()
        }
    }

    /// Evaluates the query against a claim
    pub fn matches(&self, claim: &Claim) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&claim.status) {
            return false;
        }
        if let Some(lecturer) = self.lecturer {
            if claim.lecturer_id != lecturer {
                return false;
            }
        }
        true
    }
}

/// Port to durable claim storage
///
/// Implementations must linearize concurrent updates to the same claim
/// id and must never persist a claim without an owner.
#[async_trait]
pub trait ClaimStore: DomainPort {
    /// Creates a claim and assigns its identifier
    ///
    /// Fails with a validation error on constraint violation (missing
    /// owner, empty descriptive fields).
    async fn create(&self, claim: NewClaim) -> Result<Claim, PortError>;

    /// Fetches a claim by id, or NotFound
    async fn get(&self, id: ClaimId) -> Result<Claim, PortError>;

    /// Returns matching claims ordered by submission time (oldest first,
    /// id as tiebreak)
    async fn find(&self, query: ClaimQuery) -> Result<Vec<Claim>, PortError>;

    /// Overwrites a claim's status
    ///
    /// Returns true iff a record changed. A pure overwrite: repeating the
    /// same status succeeds again.
    async fn update_status(&self, id: ClaimId, status: ClaimStatus) -> Result<bool, PortError>;

    /// Overwrites all mutable fields, including workflow metadata
    ///
    /// Returns true iff a record changed.
    async fn update(&self, claim: &Claim) -> Result<bool, PortError>;
}
