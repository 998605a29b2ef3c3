//! In-memory reference adapters
//!
//! The workflow core treats persistence as an injected dependency, so the
//! crate ships reference implementations of both ports backed by
//! `tokio::sync::RwLock`. They serve the test suite and embedders that do
//! not need durable storage. Same-id updates are linearized by the write
//! lock.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{ClaimId, DomainPort, PortError};

use crate::audit::{AuditEntry, AuditLog};
use crate::claim::{Claim, ClaimStatus};
use crate::ports::{ClaimQuery, ClaimStore, NewClaim};

/// In-memory claim store
#[derive(Debug, Default)]
pub struct InMemoryClaimStore {
    claims: RwLock<HashMap<ClaimId, Claim>>,
}

impl InMemoryClaimStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store for tests and demos
    pub async fn with_claims(claims: Vec<Claim>) -> Self {
        let store = Self::new();
        {
            let mut map = store.claims.write().await;
            for claim in claims {
                map.insert(claim.id, claim);
            }
        }
        store
    }
}

impl DomainPort for InMemoryClaimStore {}

#[async_trait]
impl ClaimStore for InMemoryClaimStore {
    async fn create(&self, claim: NewClaim) -> Result<Claim, PortError> {
        if claim.lecturer_id.is_nil() {
            return Err(PortError::validation("Claim must reference a lecturer"));
        }
        if claim.module_name.trim().is_empty() {
            return Err(PortError::validation("Module name cannot be empty"));
        }
        if claim.faculty.trim().is_empty() {
            return Err(PortError::validation("Faculty name cannot be empty"));
        }

        let id = ClaimId::new_v7();
        let record = claim.into_claim(id);

        self.claims.write().await.insert(id, record.clone());
        debug!(claim = %id, "claim created");
        Ok(record)
    }

    async fn get(&self, id: ClaimId) -> Result<Claim, PortError> {
        self.claims
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Claim", id))
    }

    async fn find(&self, query: ClaimQuery) -> Result<Vec<Claim>, PortError> {
        let claims = self.claims.read().await;
        let mut results: Vec<Claim> = claims
            .values()
            .filter(|c| query.matches(c))
            .cloned()
            .collect();
        results.sort_by_key(|c| (c.submitted_at, c.id));
        Ok(results)
    }

    async fn update_status(&self, id: ClaimId, status: ClaimStatus) -> Result<bool, PortError> {
        let mut claims = self.claims.write().await;
        match claims.get_mut(&id) {
            Some(claim) => {
                claim.status = status;
                debug!(claim = %id, %status, "claim status overwritten");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update(&self, claim: &Claim) -> Result<bool, PortError> {
        let mut claims = self.claims.write().await;
        match claims.get_mut(&claim.id) {
            Some(existing) => {
                *existing = claim.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// In-memory append-only audit log
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    entries: RwLock<Vec<AuditEntry>>,
}

impl InMemoryAuditLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every entry in append order
    pub async fn all(&self) -> Vec<AuditEntry> {
        self.entries.read().await.clone()
    }
}

impl DomainPort for InMemoryAuditLog {}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn append(&self, entry: AuditEntry) -> Result<(), PortError> {
        debug!(claim = %entry.claim_id, action = %entry.action, "audit entry appended");
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn for_claim(&self, claim_id: ClaimId) -> Result<Vec<AuditEntry>, PortError> {
        let entries = self.entries.read().await;
        let mut history: Vec<AuditEntry> = entries
            .iter()
            .filter(|e| e.claim_id == claim_id)
            .cloned()
            .collect();
        history.sort_by_key(|e| e.recorded_at);
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::LecturerId;
    use uuid::Uuid;

    use crate::actor::Actor;

    fn new_claim() -> NewClaim {
        NewClaim {
            lecturer_id: LecturerId::new_v7(),
            sessions: 2,
            hours: 10,
            hourly_rate: 100,
            module_name: "Programming 101".to_string(),
            faculty: "Science".to_string(),
            supporting_document: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = InMemoryClaimStore::new();

        let created = store.create(new_claim()).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.status, ClaimStatus::Pending);
    }

    #[tokio::test]
    async fn test_get_missing_claim() {
        let store = InMemoryClaimStore::new();
        let result = store.get(ClaimId::new_v7()).await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_create_rejects_missing_owner() {
        let store = InMemoryClaimStore::new();
        let mut claim = new_claim();
        claim.lecturer_id = LecturerId::from_uuid(Uuid::nil());

        let result = store.create(claim).await;
        assert!(matches!(result, Err(PortError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_rejects_blank_faculty() {
        let store = InMemoryClaimStore::new();
        let mut claim = new_claim();
        claim.faculty = "   ".to_string();

        let result = store.create(claim).await;
        assert!(matches!(result, Err(PortError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_status_is_pure_overwrite() {
        let store = InMemoryClaimStore::new();
        let created = store.create(new_claim()).await.unwrap();

        assert!(store
            .update_status(created.id, ClaimStatus::Approved)
            .await
            .unwrap());
        // repeating the same status succeeds again
        assert!(store
            .update_status(created.id, ClaimStatus::Approved)
            .await
            .unwrap());
        assert_eq!(
            store.get(created.id).await.unwrap().status,
            ClaimStatus::Approved
        );
    }

    #[tokio::test]
    async fn test_update_status_missing_claim_changes_nothing() {
        let store = InMemoryClaimStore::new();
        let changed = store
            .update_status(ClaimId::new_v7(), ClaimStatus::Approved)
            .await
            .unwrap();
        assert!(!changed);
    }

    #[tokio::test]
    async fn test_find_filters_and_orders() {
        let store = InMemoryClaimStore::new();
        let first = store.create(new_claim()).await.unwrap();
        let second = store.create(new_claim()).await.unwrap();
        store
            .update_status(second.id, ClaimStatus::Verified)
            .await
            .unwrap();

        let pending = store
            .find(ClaimQuery::with_status(ClaimStatus::Pending))
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, first.id);

        let all = store.find(ClaimQuery::all()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].submitted_at <= all[1].submitted_at);
    }

    #[tokio::test]
    async fn test_find_by_lecturer() {
        let store = InMemoryClaimStore::new();
        let mine = store.create(new_claim()).await.unwrap();
        store.create(new_claim()).await.unwrap();

        let found = store
            .find(ClaimQuery::for_lecturer(mine.lecturer_id))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, mine.id);
    }

    #[tokio::test]
    async fn test_full_update_overwrites_metadata() {
        let store = InMemoryClaimStore::new();
        let mut claim = store.create(new_claim()).await.unwrap();

        claim.verify("coord").unwrap();
        assert!(store.update(&claim).await.unwrap());

        let stored = store.get(claim.id).await.unwrap();
        assert_eq!(stored.status, ClaimStatus::Verified);
        assert_eq!(stored.verified_by.as_deref(), Some("coord"));
    }

    #[tokio::test]
    async fn test_audit_log_append_and_read() {
        let log = InMemoryAuditLog::new();
        let claim_id = ClaimId::new_v7();
        let other_id = ClaimId::new_v7();

        log.append(AuditEntry::record(
            claim_id,
            &Actor::coordinator("coord"),
            "Verified by Coordinator",
        ))
        .await
        .unwrap();
        log.append(AuditEntry::record(
            other_id,
            &Actor::manager("mgr"),
            "Approved by Manager",
        ))
        .await
        .unwrap();
        log.append(AuditEntry::record(
            claim_id,
            &Actor::manager("mgr"),
            "Approved by Manager",
        ))
        .await
        .unwrap();

        let history = log.for_claim(claim_id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].action, "Verified by Coordinator");
        assert_eq!(history[1].action, "Approved by Manager");
        assert!(history[0].recorded_at <= history[1].recorded_at);
    }
}
