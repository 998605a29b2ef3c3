//! Payment and dashboard projections
//!
//! Typed, read-only projections over the claim store for HR payment runs
//! and reviewer dashboards. Report formatting (CSV, HTML) belongs to the
//! presentation layer; this module only produces the rows.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, LecturerId, PortError};

use crate::claim::{Claim, ClaimStatus};
use crate::ports::{ClaimQuery, ClaimStore};

/// Time window for the payment report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportPeriod {
    /// Every approved claim
    All,
    /// Claims submitted in the month containing `as_of`
    CurrentMonth,
    /// Claims submitted in the seven days before `as_of`
    LastSevenDays,
}

impl ReportPeriod {
    fn contains(&self, submitted_at: DateTime<Utc>, as_of: DateTime<Utc>) -> bool {
        match self {
            ReportPeriod::All => true,
            ReportPeriod::CurrentMonth => {
                submitted_at.year() == as_of.year() && submitted_at.month() == as_of.month()
            }
            ReportPeriod::LastSevenDays => submitted_at >= as_of - Duration::days(7),
        }
    }
}

/// One payable line in the HR payment report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReportRow {
    pub claim_id: ClaimId,
    pub lecturer_id: LecturerId,
    pub module_name: String,
    pub faculty: String,
    pub hours: u32,
    pub hourly_rate: u32,
    pub total_amount: Decimal,
    pub submitted_at: DateTime<Utc>,
}

impl PaymentReportRow {
    fn from_claim(claim: &Claim) -> Self {
        Self {
            claim_id: claim.id,
            lecturer_id: claim.lecturer_id,
            module_name: claim.module_name.clone(),
            faculty: claim.faculty.clone(),
            hours: claim.hours,
            hourly_rate: claim.hourly_rate,
            total_amount: claim.total_amount(),
            submitted_at: claim.submitted_at,
        }
    }
}

/// Aggregate figures over approved claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovedSummary {
    pub count: usize,
    pub total_amount: Decimal,
    pub average_amount: Decimal,
}

/// Approved amounts grouped by calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub total_amount: Decimal,
    pub count: usize,
}

/// Status counts for reviewer dashboards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub verified: usize,
    pub queried: usize,
    pub approved: usize,
    pub rejected: usize,
    /// Sum over approved claims only
    pub approved_amount: Decimal,
}

/// Read-only reporting over the claim store
pub struct ReportingService {
    store: Arc<dyn ClaimStore>,
}

impl ReportingService {
    /// Creates a reporting service over the given store
    pub fn new(store: Arc<dyn ClaimStore>) -> Self {
        Self { store }
    }

    /// Payment rows for approved claims within the period
    pub async fn payment_report(
        &self,
        period: ReportPeriod,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<PaymentReportRow>, PortError> {
        let approved = self
            .store
            .find(ClaimQuery::with_status(ClaimStatus::Approved))
            .await?;
        Ok(approved
            .iter()
            .filter(|c| period.contains(c.submitted_at, as_of))
            .map(PaymentReportRow::from_claim)
            .collect())
    }

    /// Count, total and average over all approved claims
    pub async fn approved_summary(&self) -> Result<ApprovedSummary, PortError> {
        let approved = self
            .store
            .find(ClaimQuery::with_status(ClaimStatus::Approved))
            .await?;
        let count = approved.len();
        let total_amount: Decimal = approved.iter().map(|c| c.total_amount()).sum();
        let average_amount = if count == 0 {
            Decimal::ZERO
        } else {
            total_amount / Decimal::from(count as u64)
        };
        Ok(ApprovedSummary {
            count,
            total_amount,
            average_amount,
        })
    }

    /// Approved amounts grouped by submission month, ascending
    pub async fn monthly_breakdown(&self) -> Result<Vec<MonthlyTotal>, PortError> {
        let approved = self
            .store
            .find(ClaimQuery::with_status(ClaimStatus::Approved))
            .await?;

        let mut months: BTreeMap<(i32, u32), (Decimal, usize)> = BTreeMap::new();
        for claim in &approved {
            let key = (claim.submitted_at.year(), claim.submitted_at.month());
            let slot = months.entry(key).or_insert((Decimal::ZERO, 0));
            slot.0 += claim.total_amount();
            slot.1 += 1;
        }

        Ok(months
            .into_iter()
            .map(|((year, month), (total_amount, count))| MonthlyTotal {
                year,
                month,
                total_amount,
                count,
            })
            .collect())
    }

    /// Status counts and the approved total across all claims
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, PortError> {
        let claims = self.store.find(ClaimQuery::all()).await?;

        let mut stats = DashboardStats {
            total: claims.len(),
            pending: 0,
            verified: 0,
            queried: 0,
            approved: 0,
            rejected: 0,
            approved_amount: Decimal::ZERO,
        };
        for claim in &claims {
            match claim.status {
                ClaimStatus::Pending => stats.pending += 1,
                ClaimStatus::Verified => stats.verified += 1,
                ClaimStatus::Query => stats.queried += 1,
                ClaimStatus::Approved => {
                    stats.approved += 1;
                    stats.approved_amount += claim.total_amount();
                }
                ClaimStatus::Rejected => stats.rejected += 1,
            }
        }
        Ok(stats)
    }
}
