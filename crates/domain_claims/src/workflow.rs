//! Approval workflow engine
//!
//! The engine owns the review lifecycle: it gates each transition on the
//! acting role, checks the claim exists before touching anything, applies
//! the validation policy where the workflow demands it, and couples every
//! status change to an audit entry. Transitions are short-lived units of
//! work; the claim store is the single source of truth for serializing
//! concurrent updates to the same claim.

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use validator::Validate;

use core_kernel::ClaimId;

use crate::actor::{Actor, Role};
use crate::audit::{AuditEntry, AuditLog};
use crate::claim::{Claim, ClaimStatus};
use crate::error::WorkflowError;
use crate::ports::{ClaimStore, NewClaim};
use crate::submission::{input_messages, ClaimSubmission};
use crate::validation::{ClaimValidator, ValidationResult};

/// Total amount above which an approval is classified as special
const SPECIAL_APPROVAL_THRESHOLD: u32 = 10_000;

/// The transitions a reviewer can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowAction {
    Verify,
    Query,
    Approve,
    Reject,
    Resubmit,
}

impl fmt::Display for WorkflowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkflowAction::Verify => "verify",
            WorkflowAction::Query => "query",
            WorkflowAction::Approve => "approve",
            WorkflowAction::Reject => "reject",
            WorkflowAction::Resubmit => "resubmit",
        };
        f.write_str(label)
    }
}

/// Classification reported with a manager approval; never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalKind {
    Standard,
    Special,
}

impl ApprovalKind {
    fn for_amount(amount: Decimal) -> Self {
        if amount > Decimal::from(SPECIAL_APPROVAL_THRESHOLD) {
            ApprovalKind::Special
        } else {
            ApprovalKind::Standard
        }
    }
}

impl fmt::Display for ApprovalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ApprovalKind::Standard => "Standard Approval",
            ApprovalKind::Special => "Special Approval",
        };
        f.write_str(label)
    }
}

/// Result of a successful transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionOutcome {
    pub claim_id: ClaimId,
    /// Status the claim holds after the transition
    pub status: ClaimStatus,
    /// Present on manager approvals only
    pub classification: Option<ApprovalKind>,
    /// User-facing summary for the presentation layer
    pub message: String,
}

/// Result of an administrative bulk status update
///
/// Claims are updated independently; the batch is not atomic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOutcome {
    /// Number of claims whose status was overwritten
    pub updated: usize,
    /// Ids that matched no claim
    pub missing: Vec<ClaimId>,
}

/// The approval workflow state machine
pub struct WorkflowEngine {
    store: Arc<dyn ClaimStore>,
    audit: Arc<dyn AuditLog>,
}

impl WorkflowEngine {
    /// Creates an engine over the given storage ports
    pub fn new(store: Arc<dyn ClaimStore>, audit: Arc<dyn AuditLog>) -> Self {
        Self { store, audit }
    }

    /// Evaluates the validation policy for a claim
    pub fn validate(&self, claim: &Claim) -> ValidationResult {
        ClaimValidator::validate(claim)
    }

    /// Submits a new claim on behalf of a lecturer
    ///
    /// Input constraints are enforced; the validation policy is evaluated
    /// and returned with the created claim so the caller can surface
    /// warnings, but a policy-invalid claim is still accepted into the
    /// pending queue. Reviewers re-check the policy at verification.
    pub async fn submit(
        &self,
        actor: &Actor,
        submission: ClaimSubmission,
    ) -> Result<(Claim, ValidationResult), WorkflowError> {
        self.require_role(actor, Role::Lecturer, "submit a claim")?;
        let lecturer_id = actor.lecturer_id.ok_or_else(|| WorkflowError::Unauthorized {
            role: actor.role,
            action: "submit a claim without a lecturer identity".to_string(),
        })?;

        submission.validate().map_err(|e| WorkflowError::ValidationFailed {
            messages: input_messages(&e),
        })?;

        let claim = self
            .store
            .create(NewClaim::from_submission(lecturer_id, submission))
            .await?;
        let policy = ClaimValidator::validate(&claim);

        info!(claim = %claim.id, lecturer = %lecturer_id, "claim submitted");
        Ok((claim, policy))
    }

    /// Coordinator verifies a pending claim
    ///
    /// Refuses claims the validation policy marks invalid.
    pub async fn verify(
        &self,
        actor: &Actor,
        id: ClaimId,
    ) -> Result<TransitionOutcome, WorkflowError> {
        self.require_role(actor, Role::Coordinator, "verify a claim")?;
        let before = self.load(id).await?;

        let policy = ClaimValidator::validate(&before);
        if !policy.is_valid {
            return Err(WorkflowError::ValidationFailed {
                messages: policy.messages,
            });
        }

        let mut claim = before.clone();
        claim.verify(&actor.name)?;
        self.commit(before, &claim, AuditEntry::record(id, actor, "Verified by Coordinator"))
            .await?;

        info!(claim = %id, verifier = %actor.name, "claim verified");
        Ok(TransitionOutcome {
            claim_id: id,
            status: claim.status,
            classification: None,
            message: format!("Claim {id} verified and sent to Manager for approval"),
        })
    }

    /// Coordinator queries a pending claim back to the lecturer
    pub async fn query(
        &self,
        actor: &Actor,
        id: ClaimId,
        reason: &str,
    ) -> Result<TransitionOutcome, WorkflowError> {
        self.require_role(actor, Role::Coordinator, "query a claim")?;
        let reason = required_reason(reason, WorkflowAction::Query)?;
        let before = self.load(id).await?;

        let mut claim = before.clone();
        claim.query(&actor.name, reason)?;
        self.commit(before, &claim, AuditEntry::record(id, actor, "Queried by Coordinator"))
            .await?;

        info!(claim = %id, verifier = %actor.name, "claim queried");
        Ok(TransitionOutcome {
            claim_id: id,
            status: claim.status,
            classification: None,
            message: format!("Claim {id} has been queried. Lecturer will be notified"),
        })
    }

    /// Manager approves a verified claim
    ///
    /// Reports a Special Approval classification above the amount
    /// threshold; the classification is never stored.
    pub async fn approve(
        &self,
        actor: &Actor,
        id: ClaimId,
    ) -> Result<TransitionOutcome, WorkflowError> {
        self.require_role(actor, Role::Manager, "approve a claim")?;
        let before = self.load(id).await?;

        let policy = ClaimValidator::validate(&before);
        if !policy.is_valid {
            return Err(WorkflowError::ValidationFailed {
                messages: policy.messages,
            });
        }

        let total = before.total_amount();
        let kind = ApprovalKind::for_amount(total);

        let mut claim = before.clone();
        claim.approve(&actor.name)?;
        self.commit(before, &claim, AuditEntry::record(id, actor, "Approved by Manager"))
            .await?;

        info!(claim = %id, approver = %actor.name, %kind, "claim approved");
        Ok(TransitionOutcome {
            claim_id: id,
            status: claim.status,
            classification: Some(kind),
            message: format!("Claim {id} approved ({kind}) - Amount: R{total}"),
        })
    }

    /// Manager rejects a verified claim with a reason
    ///
    /// The reason is stored on the claim and in the audit log within the
    /// same committed unit.
    pub async fn reject(
        &self,
        actor: &Actor,
        id: ClaimId,
        reason: &str,
    ) -> Result<TransitionOutcome, WorkflowError> {
        self.require_role(actor, Role::Manager, "reject a claim")?;
        let reason = required_reason(reason, WorkflowAction::Reject)?;
        let before = self.load(id).await?;

        let mut claim = before.clone();
        claim.reject(&actor.name, reason)?;
        self.commit(before, &claim, AuditEntry::record(id, actor, "Rejected by Manager"))
            .await?;

        info!(claim = %id, approver = %actor.name, "claim rejected");
        Ok(TransitionOutcome {
            claim_id: id,
            status: claim.status,
            classification: None,
            message: format!("Claim {id} has been rejected"),
        })
    }

    /// Owning lecturer returns a queried claim to the pending queue
    pub async fn resubmit(
        &self,
        actor: &Actor,
        id: ClaimId,
    ) -> Result<TransitionOutcome, WorkflowError> {
        self.require_role(actor, Role::Lecturer, "resubmit a claim")?;
        let lecturer_id = actor.lecturer_id.ok_or_else(|| WorkflowError::Unauthorized {
            role: actor.role,
            action: "resubmit a claim without a lecturer identity".to_string(),
        })?;
        let before = self.load(id).await?;

        if !before.is_owned_by(lecturer_id) {
            warn!(claim = %id, lecturer = %lecturer_id, "resubmission by non-owner refused");
            return Err(WorkflowError::Unauthorized {
                role: actor.role,
                action: "resubmit another lecturer's claim".to_string(),
            });
        }

        let mut claim = before.clone();
        claim.resubmit()?;
        self.commit(before, &claim, AuditEntry::record(id, actor, "Resubmitted by Lecturer"))
            .await?;

        info!(claim = %id, lecturer = %lecturer_id, "claim resubmitted");
        Ok(TransitionOutcome {
            claim_id: id,
            status: claim.status,
            classification: None,
            message: format!("Claim {id} returned to the pending queue"),
        })
    }

    /// Generic transition entry point for the presentation layer
    pub async fn transition(
        &self,
        actor: &Actor,
        id: ClaimId,
        action: WorkflowAction,
        reason: Option<&str>,
    ) -> Result<TransitionOutcome, WorkflowError> {
        match action {
            WorkflowAction::Verify => self.verify(actor, id).await,
            WorkflowAction::Query => self.query(actor, id, reason.unwrap_or_default()).await,
            WorkflowAction::Approve => self.approve(actor, id).await,
            WorkflowAction::Reject => self.reject(actor, id, reason.unwrap_or_default()).await,
            WorkflowAction::Resubmit => self.resubmit(actor, id).await,
        }
    }

    /// Administrative bulk status overwrite
    ///
    /// Bypasses the transition table by design. Each claim is updated
    /// independently and audited; ids that match nothing are reported,
    /// not fatal.
    pub async fn set_status(
        &self,
        actor: &Actor,
        ids: &[ClaimId],
        status: ClaimStatus,
    ) -> Result<BulkOutcome, WorkflowError> {
        self.require_role(actor, Role::Admin, "bulk-update claim status")?;

        let mut updated = 0;
        let mut missing = Vec::new();
        for &id in ids {
            if self.store.update_status(id, status).await? {
                self.audit
                    .append(AuditEntry::record(id, actor, format!("Status set to {status}")))
                    .await?;
                updated += 1;
            } else {
                missing.push(id);
            }
        }

        info!(%status, updated, skipped = missing.len(), "bulk status update");
        Ok(BulkOutcome { updated, missing })
    }

    fn require_role(
        &self,
        actor: &Actor,
        required: Role,
        action: &str,
    ) -> Result<(), WorkflowError> {
        if actor.role != required {
            warn!(actor = %actor.name, role = %actor.role, action, "unauthorized workflow call");
            return Err(WorkflowError::Unauthorized {
                role: actor.role,
                action: action.to_string(),
            });
        }
        Ok(())
    }

    async fn load(&self, id: ClaimId) -> Result<Claim, WorkflowError> {
        self.store
            .get(id)
            .await
            .map_err(|e| WorkflowError::from_store(id, e))
    }

    /// Commits a transition: claim update plus audit entry, or neither
    ///
    /// The store contract has no transaction boundary, so on audit
    /// failure the prior record is written back before the failure is
    /// surfaced. The restore is best-effort under last-committed-wins.
    async fn commit(
        &self,
        before: Claim,
        after: &Claim,
        entry: AuditEntry,
    ) -> Result<(), WorkflowError> {
        let changed = self.store.update(after).await?;
        if !changed {
            // claim vanished between the read and the write
            return Err(WorkflowError::NotFound(after.id));
        }

        if let Err(append_err) = self.audit.append(entry).await {
            if let Err(restore_err) = self.store.update(&before).await {
                error!(claim = %before.id, %restore_err, "failed to restore claim after audit failure");
            }
            return Err(WorkflowError::Storage(append_err));
        }
        Ok(())
    }
}

fn required_reason(reason: &str, action: WorkflowAction) -> Result<&str, WorkflowError> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        return Err(WorkflowError::MissingReason {
            action: action.to_string(),
        });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_approval_kind_threshold() {
        assert_eq!(ApprovalKind::for_amount(dec!(10000)), ApprovalKind::Standard);
        assert_eq!(ApprovalKind::for_amount(dec!(10001)), ApprovalKind::Special);
        assert_eq!(ApprovalKind::for_amount(dec!(1000)), ApprovalKind::Standard);
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(WorkflowAction::Verify.to_string(), "verify");
        assert_eq!(WorkflowAction::Resubmit.to_string(), "resubmit");
    }

    #[test]
    fn test_required_reason() {
        assert!(required_reason("  ", WorkflowAction::Reject).is_err());
        assert_eq!(
            required_reason(" late timesheet ", WorkflowAction::Query).unwrap(),
            "late timesheet"
        );
    }
}
