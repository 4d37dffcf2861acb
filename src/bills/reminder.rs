use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days before the due date in which a bill counts as due soon, independent of
/// its configured reminder window.
pub const DUE_SOON_WINDOW_DAYS: i64 = 3;

/// Urgency of a bill relative to a reference date.
///
/// The variants form a total, non-overlapping partition: every (due date,
/// reminder window, reference date) triple maps to exactly one status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    DueToday,
    DueSoon,
    Upcoming,
    NotDue,
}

impl DueStatus {
    /// Classifies a due date against `today`. The reference date is an
    /// explicit parameter so the classification never touches a system clock.
    pub fn classify(due_date: NaiveDate, reminder_days: u32, today: NaiveDate) -> DueStatus {
        if due_date < today {
            return DueStatus::Overdue;
        }
        if due_date == today {
            return DueStatus::DueToday;
        }
        let days_until = (due_date - today).num_days();
        if days_until <= DUE_SOON_WINDOW_DAYS {
            DueStatus::DueSoon
        } else if days_until <= reminder_days as i64 {
            DueStatus::Upcoming
        } else {
            DueStatus::NotDue
        }
    }

    /// Whether the status warrants surfacing the bill to the user.
    pub fn needs_attention(self) -> bool {
        !matches!(self, DueStatus::NotDue)
    }

    pub fn label(self) -> &'static str {
        match self {
            DueStatus::Overdue => "Overdue",
            DueStatus::DueToday => "Due Today",
            DueStatus::DueSoon => "Due Soon",
            DueStatus::Upcoming => "Upcoming",
            DueStatus::NotDue => "Not Due",
        }
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
