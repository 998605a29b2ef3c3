//! Review queue views
//!
//! Read-only projections over the claim store, one per reviewing role.
//! Each queue is a predicate plus an ordering, recomputed on every read;
//! nothing is cached, so a queue can never show a stale status.

use std::sync::Arc;

use core_kernel::{LecturerId, PortError};

use crate::actor::Role;
use crate::claim::{Claim, ClaimStatus};
use crate::ports::{ClaimQuery, ClaimStore};

/// Per-role worklists derived from current claim states
pub struct ReviewQueues {
    store: Arc<dyn ClaimStore>,
}

impl ReviewQueues {
    /// Creates queue views over the given store
    pub fn new(store: Arc<dyn ClaimStore>) -> Self {
        Self { store }
    }

    /// Claims awaiting coordinator review, oldest first
    pub async fn pending(&self) -> Result<Vec<Claim>, PortError> {
        let mut claims = self
            .store
            .find(ClaimQuery::with_status(ClaimStatus::Pending))
            .await?;
        claims.sort_by_key(|c| (c.submitted_at, c.id));
        Ok(claims)
    }

    /// Verified claims awaiting a manager decision, oldest verification first
    pub async fn awaiting_approval(&self) -> Result<Vec<Claim>, PortError> {
        let mut claims = self
            .store
            .find(ClaimQuery::with_status(ClaimStatus::Verified))
            .await?;
        claims.sort_by_key(|c| (c.verified_at, c.id));
        Ok(claims)
    }

    /// Approved claims, most recent approval first
    pub async fn approved(&self) -> Result<Vec<Claim>, PortError> {
        let mut claims = self
            .store
            .find(ClaimQuery::with_status(ClaimStatus::Approved))
            .await?;
        claims.sort_by(|a, b| b.approved_at.cmp(&a.approved_at).then(b.id.cmp(&a.id)));
        Ok(claims)
    }

    /// One lecturer's claims in submission order
    pub async fn for_lecturer(&self, lecturer_id: LecturerId) -> Result<Vec<Claim>, PortError> {
        self.store
            .find(ClaimQuery::for_lecturer(lecturer_id))
            .await
    }

    /// Every claim, newest submission first (administrative view)
    pub async fn all(&self) -> Result<Vec<Claim>, PortError> {
        let mut claims = self.store.find(ClaimQuery::all()).await?;
        claims.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at).then(b.id.cmp(&a.id)));
        Ok(claims)
    }

    /// The worklist a reviewing role acts on
    ///
    /// Lecturers have no review worklist; they read their own claims via
    /// [`ReviewQueues::for_lecturer`].
    pub async fn worklist_for(&self, role: Role) -> Result<Vec<Claim>, PortError> {
        match role {
            Role::Coordinator => self.pending().await,
            Role::Manager => self.awaiting_approval().await,
            Role::Hr => self.approved().await,
            Role::Admin => self.all().await,
            Role::Lecturer => Ok(Vec::new()),
        }
    }
}
