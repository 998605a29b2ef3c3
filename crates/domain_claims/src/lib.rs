//! Claims Workflow Domain
//!
//! This crate implements the compensation-claim lifecycle for academic
//! staff: lecturers submit hour/session claims, coordinators verify or
//! query them, managers approve or reject them, and HR reads the approved
//! set for payment.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending -> Verified -> Approved | Rejected
//!    ^  \
//!    |   -> Query
//!    +-------'        (lecturer resubmission)
//! ```
//!
//! Persistence is injected through the [`ports::ClaimStore`] and
//! [`audit::AuditLog`] traits; [`memory`] provides in-memory reference
//! adapters.

pub mod actor;
pub mod audit;
pub mod claim;
pub mod error;
pub mod memory;
pub mod ports;
pub mod queues;
pub mod reporting;
pub mod submission;
pub mod validation;
pub mod workflow;

pub use actor::{Actor, Role};
pub use audit::{AuditEntry, AuditLog};
pub use claim::{Claim, ClaimStatus};
pub use error::WorkflowError;
pub use memory::{InMemoryAuditLog, InMemoryClaimStore};
pub use ports::{ClaimQuery, ClaimStore, NewClaim};
pub use queues::ReviewQueues;
pub use reporting::{
    ApprovedSummary, DashboardStats, MonthlyTotal, PaymentReportRow, ReportPeriod,
    ReportingService,
};
pub use submission::ClaimSubmission;
pub use validation::{ClaimValidator, ValidationResult};
pub use workflow::{
    ApprovalKind, BulkOutcome, TransitionOutcome, WorkflowAction, WorkflowEngine,
};
