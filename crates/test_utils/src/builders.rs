//! Test data builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::{DateTime, Utc};
use core_kernel::{ClaimId, LecturerId};
use domain_claims::claim::{Claim, ClaimStatus};
use domain_claims::submission::ClaimSubmission;

/// Builder for claim records
pub struct ClaimBuilder {
    id: ClaimId,
    lecturer_id: LecturerId,
    sessions: u32,
    hours: u32,
    hourly_rate: u32,
    module_name: String,
    faculty: String,
    supporting_document: Option<String>,
    status: ClaimStatus,
    submitted_at: DateTime<Utc>,
    verified_by: Option<String>,
    verified_at: Option<DateTime<Utc>>,
    approved_by: Option<String>,
    approved_at: Option<DateTime<Utc>>,
    rejection_reason: Option<String>,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// Creates a builder with a valid pending Science claim
    pub fn new() -> Self {
        Self {
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

    /// Sets the claim id
    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning lecturer
    pub fn with_lecturer_id(mut self, lecturer_id: LecturerId) -> Self {
        self.lecturer_id = lecturer_id;
        self
    }

    /// Sets the session count
    pub fn with_sessions(mut self, sessions: u32) -> Self {
        self.sessions = sessions;
        self
    }

    /// Sets the claimed hours
    pub fn with_hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    /// Sets the hourly rate
    pub fn with_rate(mut self, hourly_rate: u32) -> Self {
        self.hourly_rate = hourly_rate;
        self
    }

    /// Sets the module name
    pub fn with_module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = module_name.into();
        self
    }

    /// Sets the faculty
    pub fn with_faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculty = faculty.into();
        self
    }

    /// Sets the supporting document reference
    pub fn with_supporting_document(mut self, reference: impl Into<String>) -> Self {
        self.supporting_document = Some(reference.into());
        self
    }

    /// Sets the workflow status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the submission instant
    pub fn with_submitted_at(mut self, submitted_at: DateTime<Utc>) -> Self {
        self.submitted_at = submitted_at;
        self
    }

    /// Sets the verification stamps
    pub fn with_verified(mut self, by: impl Into<String>, at: DateTime<Utc>) -> Self {
        self.verified_by = Some(by.into());
        self.verified_at = Some(at);
        self
    }

    /// Sets the approval stamps
    pub fn with_approved(mut self, by: impl Into<String>, at: DateTime<Utc>) -> Self {
        self.approved_by = Some(by.into());
        self.approved_at = Some(at);
        self
    }

    /// Sets the query/rejection reason
    pub fn with_rejection_reason(mut self, reason: impl Into<String>) -> Self {
        self.rejection_reason = Some(reason.into());
        self
    }

    /// Builds the claim record
    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            lecturer_id: self.lecturer_id,
            sessions: self.sessions,
            hours: self.hours,
            hourly_rate: self.hourly_rate,
            module_name: self.module_name,
            faculty: self.faculty,
            supporting_document: self.supporting_document,
            status: self.status,
            submitted_at: self.submitted_at,
            verified_by: self.verified_by,
            verified_at: self.verified_at,
            approved_by: self.approved_by,
            approved_at: self.approved_at,
            rejection_reason: self.rejection_reason,
        }
    }
}

/// Builder for claim submissions
pub struct SubmissionBuilder {
    sessions: u32,
    hours: u32,
    hourly_rate: u32,
    module_name: String,
    faculty: String,
    supporting_document: Option<String>,
}

impl Default for SubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionBuilder {
    /// Creates a builder for a valid Science submission
    pub fn new() -> Self {
        Self {
            sessions: 2,
            hours: 10,
            hourly_rate: 100,
            module_name: "Programming 101".to_string(),
            faculty: "Science".to_string(),
            supporting_document: None,
        }
    }

    /// Sets the session count
    pub fn with_sessions(mut self, sessions: u32) -> Self {
        self.sessions = sessions;
        self
    }

    /// Sets the claimed hours
    pub fn with_hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    /// Sets the hourly rate
    pub fn with_rate(mut self, hourly_rate: u32) -> Self {
        self.hourly_rate = hourly_rate;
        self
    }

    /// Sets the module name
    pub fn with_module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = module_name.into();
        self
    }

    /// Sets the faculty
    pub fn with_faculty(mut self, faculty: impl Into<String>) -> Self {
        self.faculty = faculty.into();
        self
    }

    /// Sets the supporting document reference
    pub fn with_supporting_document(mut self, reference: impl Into<String>) -> Self {
        self.supporting_document = Some(reference.into());
        self
    }

    /// Builds the submission
    pub fn build(self) -> ClaimSubmission {
        ClaimSubmission {
            sessions: self.sessions,
            hours: self.hours,
            hourly_rate: self.hourly_rate,
            module_name: self.module_name,
            faculty: self.faculty,
            supporting_document: self.supporting_document,
        }
    }
}
