//! Claim validation policy
//!
//! Pure business rules evaluated against a claim. Rules run in a fixed
//! order and every applicable message is collected; nothing
//! short-circuits. Callers decide whether an invalid result blocks an
//! operation or is merely displayed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::claim::Claim;

/// Hours above this count per claim draw a warning
pub const SESSION_HOURS_WARNING: u32 = 8;

/// Hard cap on claimable hours per month
pub const MAX_MONTHLY_HOURS: u32 = 160;

/// Legal session count range
pub const MIN_SESSIONS: u32 = 1;
pub const MAX_SESSIONS: u32 = 20;

/// Returns the configured hourly rate band for a faculty
///
/// Faculties outside this table are unconstrained by the rate rule.
pub fn faculty_rate_band(faculty: &str) -> Option<(Decimal, Decimal)> {
    let band = match faculty {
        "Science" => (dec!(100), dec!(500)),
        "Engineering" => (dec!(120), dec!(600)),
        "Business" => (dec!(150), dec!(700)),
        "Arts" => (dec!(80), dec!(400)),
        "Health Sciences" => (dec!(130), dec!(650)),
        _ => return None,
    };
    Some(band)
}

/// Result of evaluating the validation policy
///
/// Messages keep their evaluation order. Warnings are collected alongside
/// errors but only errors invalidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// True iff no invalidating message was appended
    pub is_valid: bool,
    /// All collected messages, in rule order
    pub messages: Vec<String>,
}

impl ValidationResult {
    /// Creates a passing result with no messages
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            messages: Vec::new(),
        }
    }

    /// Appends an invalidating message
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
        self.is_valid = false;
    }

    /// Appends a warning; does not invalidate
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for compensation claims
pub struct ClaimValidator;

impl ClaimValidator {
    /// Evaluates all policy rules against a claim
    pub fn validate(claim: &Claim) -> ValidationResult {
        let mut result = ValidationResult::ok();

        // Policy 1: hours per session
        if claim.hours > SESSION_HOURS_WARNING {
            result.add_warning("Warning: Hours exceed typical 8-hour session limit");
        }

        // Policy 2: rate band per faculty
        if let Some((min, max)) = faculty_rate_band(&claim.faculty) {
            let rate = Decimal::from(claim.hourly_rate);
            if rate < min {
                result.add_error(format!("Rate below faculty minimum (R{min})"));
            }
            if rate > max {
                result.add_error(format!("Rate above faculty maximum (R{max})"));
            }
        }

        // Policy 3: monthly hour cap
        if claim.hours > MAX_MONTHLY_HOURS {
            result.add_error("Hours exceed monthly maximum of 160");
        }

        // Policy 4: session count
        if claim.sessions < MIN_SESSIONS || claim.sessions > MAX_SESSIONS {
            result.add_error("Invalid number of sessions (1-20 allowed)");
        }

        result
    }
}
