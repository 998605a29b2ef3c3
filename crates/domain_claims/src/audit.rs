//! Approval audit log
//!
//! Every workflow transition leaves an immutable record of who did what
//! and when. The log is append-only: the port deliberately exposes no
//! update or delete operation, and the per-claim read exists so the
//! history stays available for compliance.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AuditEntryId, ClaimId, DomainPort, PortError};

use crate::actor::{Actor, Role};

/// One immutable record of a workflow action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: AuditEntryId,
    pub claim_id: ClaimId,
    /// Display name of the acting user
    pub actor: String,
    /// Role the action was performed under
    pub role: Role,
    /// What happened, e.g. "Approved by Manager"
    pub action: String,
    pub recorded_at: DateTime<Utc>,
}

impl AuditEntry {
    /// Records an action performed by an actor on a claim
    pub fn record(claim_id: ClaimId, actor: &Actor, action: impl Into<String>) -> Self {
        Self {
            id: AuditEntryId::new_v7(),
            claim_id,
            actor: actor.name.clone(),
            role: actor.role,
            action: action.into(),
            recorded_at: Utc::now(),
        }
    }
}

/// Port to the append-only audit log
///
/// A failed append fails the enclosing workflow transition; the engine
/// treats the claim update and the audit record as one unit.
#[async_trait]
pub trait AuditLog: DomainPort {
    /// Appends an entry to the log
    async fn append(&self, entry: AuditEntry) -> Result<(), PortError>;

    /// Returns a claim's history in chronological order
    async fn for_claim(&self, claim_id: ClaimId) -> Result<Vec<AuditEntry>, PortError>;
}
