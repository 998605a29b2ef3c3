//! Claim submission input
//!
//! Field-level input constraints live here, on the submission DTO, and
//! are checked before a claim record is built. The validation policy in
//! [`crate::validation`] applies the narrower business rules afterwards.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Input for creating a new claim
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClaimSubmission {
    /// Number of sessions claimed
    #[validate(range(min = 1, max = 100, message = "Sessions must be between 1 and 100"))]
    pub sessions: u32,

    /// Number of hours claimed
    #[validate(range(min = 1, max = 1000, message = "Hours must be between 1 and 1000"))]
    pub hours: u32,

    /// Hourly rate in rand
    #[validate(range(min = 1, max = 1000, message = "Rate must be between 1 and 1000"))]
    pub hourly_rate: u32,

    /// Module the work was taught for
    #[validate(length(min = 1, max = 100, message = "Module name must be 1-100 characters"))]
    pub module_name: String,

    /// Faculty the module belongs to
    #[validate(length(min = 1, max = 100, message = "Faculty name must be 1-100 characters"))]
    pub faculty: String,

    /// Reference to an externally stored supporting document
    pub supporting_document: Option<String>,
}

/// Flattens derive-produced validation errors into display messages
///
/// Fields are sorted so the message order is deterministic.
pub fn input_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ClaimSubmission {
        ClaimSubmission {
            sessions: 2,
            hours: 10,
            hourly_rate: 100,
            module_name: "Programming 101".to_string(),
            faculty: "Science".to_string(),
            supporting_document: None,
        }
    }

    #[test]
    fn test_valid_submission() {
        assert!(submission().validate().is_ok());
    }

    #[test]
    fn test_zero_hours_rejected() {
        let mut s = submission();
        s.hours = 0;
        let errors = s.validate().unwrap_err();
        let messages = input_messages(&errors);
        assert_eq!(messages, vec!["Hours must be between 1 and 1000"]);
    }

    #[test]
    fn test_rate_upper_bound() {
        let mut s = submission();
        s.hourly_rate = 1001;
        assert!(s.validate().is_err());

        s.hourly_rate = 1000;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_empty_names_rejected() {
        let mut s = submission();
        s.module_name = String::new();
        s.faculty = String::new();
        let messages = input_messages(&s.validate().unwrap_err());
        assert_eq!(messages.len(), 2);
        // deterministic field order: faculty before module_name
        assert!(messages[0].contains("Faculty"));
        assert!(messages[1].contains("Module"));
    }

    #[test]
    fn test_overlong_faculty_rejected() {
        let mut s = submission();
        s.faculty = "x".repeat(101);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_session_input_range_wider_than_policy() {
        // 100 sessions passes input validation; the policy layer caps at 20
        let mut s = submission();
        s.sessions = 100;
        assert!(s.validate().is_ok());
    }
}
