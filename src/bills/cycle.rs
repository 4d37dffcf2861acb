use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{BillsError, Result};

/// Closed set of recurrence patterns a bill can carry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BillingCycle {
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "bi-weekly")]
    BiWeekly,
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "quarterly")]
    Quarterly,
    #[serde(rename = "semi-annually")]
    SemiAnnually,
    #[serde(rename = "annually")]
    Annually,
    #[serde(rename = "one-time")]
    OneTime,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 7] = [
        BillingCycle::Weekly,
        BillingCycle::BiWeekly,
        BillingCycle::Monthly,
        BillingCycle::Quarterly,
        BillingCycle::SemiAnnually,
        BillingCycle::Annually,
        BillingCycle::OneTime,
    ];

    pub fn is_recurring(self) -> bool {
        !matches!(self, BillingCycle::OneTime)
    }

    /// Advances a due date by one billing cycle.
    ///
    /// Month-based cycles preserve the day-of-month and clamp it to the last
    /// valid day of the target month (Jan 31 + 1 month is Feb 28, or Feb 29 in
    /// a leap year). A clamped date re-anchors: the original day-of-month is
    /// not recovered on later advances.
    ///
    /// One-time bills are never advanced; reaching that branch is a caller
    /// sequencing defect surfaced as `CycleNotAdvanceable`, never a condition
    /// to recover from.
    pub fn next_due_date(self, current: NaiveDate) -> Result<NaiveDate> {
        match self {
            BillingCycle::Weekly => Ok(current + Duration::days(7)),
            BillingCycle::BiWeekly => Ok(current + Duration::days(14)),
            BillingCycle::Monthly => Ok(shift_months(current, 1)),
            BillingCycle::Quarterly => Ok(shift_months(current, 3)),
            BillingCycle::SemiAnnually => Ok(shift_months(current, 6)),
            BillingCycle::Annually => Ok(shift_months(current, 12)),
            BillingCycle::OneTime => Err(BillsError::CycleNotAdvanceable),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BillingCycle::Weekly => "Weekly",
            BillingCycle::BiWeekly => "Bi-Weekly",
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Quarterly => "Quarterly",
            BillingCycle::SemiAnnually => "Semi-Annually",
            BillingCycle::Annually => "Annually",
            BillingCycle::OneTime => "One-Time",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BillingCycle::Weekly => "Every 7 days",
            BillingCycle::BiWeekly => "Every 14 days",
            BillingCycle::Monthly => "Every month",
            BillingCycle::Quarterly => "Every 3 months",
            BillingCycle::SemiAnnually => "Every 6 months",
            BillingCycle::Annually => "Every 12 months",
            BillingCycle::OneTime => "One-time payment (no recurrence)",
        }
    }

    /// Serialized name, matching the on-disk representation.
    pub fn as_str(self) -> &'static str {
        match self {
            BillingCycle::Weekly => "weekly",
            BillingCycle::BiWeekly => "bi-weekly",
            BillingCycle::Monthly => "monthly",
            BillingCycle::Quarterly => "quarterly",
            BillingCycle::SemiAnnually => "semi-annually",
            BillingCycle::Annually => "annually",
            BillingCycle::OneTime => "one-time",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingCycle {
    type Err = BillsError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "weekly" => Ok(BillingCycle::Weekly),
            "bi-weekly" | "biweekly" => Ok(BillingCycle::BiWeekly),
            "monthly" => Ok(BillingCycle::Monthly),
            "quarterly" => Ok(BillingCycle::Quarterly),
            "semi-annually" | "semiannual" => Ok(BillingCycle::SemiAnnually),
            "annually" | "annual" => Ok(BillingCycle::Annually),
            "one-time" | "onetime" => Ok(BillingCycle::OneTime),
            other => Err(BillsError::Validation(format!(
                "`{}` is not a known billing cycle",
                other
            ))),
        }
    }
}

fn shift_months(date: NaiveDate, months: u32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months as i32;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    // The components are in range by construction, so the fallback is unreachable.
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
