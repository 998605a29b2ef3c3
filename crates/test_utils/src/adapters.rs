//! Failure-injecting port implementations
//!
//! Adapters that fail on demand, for exercising the engine's error paths
//! and its claim-update/audit-append atomicity.

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, PortError};
use domain_claims::audit::{AuditEntry, AuditLog};
use domain_claims::claim::{Claim, ClaimStatus};
use domain_claims::ports::{ClaimQuery, ClaimStore, NewClaim};

/// Audit log whose appends always fail
///
/// Reads succeed and report an empty history.
#[derive(Debug, Default)]
pub struct FailingAuditLog;

impl FailingAuditLog {
    pub fn new() -> Self {
        Self
    }
}

impl DomainPort for FailingAuditLog {}

#[async_trait]
impl AuditLog for FailingAuditLog {
    async fn append(&self, _entry: AuditEntry) -> Result<(), PortError> {
        Err(PortError::connection("audit log unavailable"))
    }

    async fn for_claim(&self, _claim_id: ClaimId) -> Result<Vec<AuditEntry>, PortError> {
        Ok(Vec::new())
    }
}

/// Claim store where every operation fails
#[derive(Debug, Default)]
pub struct UnavailableClaimStore;

impl UnavailableClaimStore {
    pub fn new() -> Self {
        Self
    }

    fn offline() -> PortError {
        PortError::connection("claim store offline")
    }
}

impl DomainPort for UnavailableClaimStore {}

#[async_trait]
impl ClaimStore for UnavailableClaimStore {
    async fn create(&self, _claim: NewClaim) -> Result<Claim, PortError> {
        Err(Self::offline())
    }

    async fn get(&self, _id: ClaimId) -> Result<Claim, PortError> {
        Err(Self::offline())
    }

    async fn find(&self, _query: ClaimQuery) -> Result<Vec<Claim>, PortError> {
        Err(Self::offline())
    }

    async fn update_status(&self, _id: ClaimId, _status: ClaimStatus) -> Result<bool, PortError> {
        Err(Self::offline())
    }

    async fn update(&self, _claim: &Claim) -> Result<bool, PortError> {
        Err(Self::offline())
    }
}
