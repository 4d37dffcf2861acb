use std::collections::HashMap;

use chrono::NaiveDate;

use super::bill::BillRecord;
use super::cycle::BillingCycle;
use super::reminder::DueStatus;

/// How a due-bill scan decides which bills deserve attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Honor each bill's own reminder window.
    PerBill,
    /// Override every reminder window with one lookahead, for this scan only.
    FixedWindow(u32),
}

/// One scan hit: a copy of the bill plus its urgency relative to `today`.
#[derive(Debug, Clone)]
pub struct DueBill {
    pub bill: BillRecord,
    pub status: DueStatus,
    pub days_until: i64,
}

/// Classifies and filters a bill collection by urgency.
///
/// Paid bills are skipped. Overdue bills are always included regardless of
/// mode. The result is a value; the input slice is never mutated, and in
/// fixed-window mode the override does not touch any bill's `reminder_days`.
pub fn scan(bills: &[BillRecord], mode: ScanMode, today: NaiveDate) -> Vec<DueBill> {
    let mut due = Vec::new();
    for bill in bills.iter().filter(|bill| bill.is_payable()) {
        let days_until = bill.days_until_due(today);
        let status = match mode {
            ScanMode::PerBill => bill.status(today),
            ScanMode::FixedWindow(window) => DueStatus::classify(bill.due_date, window, today),
        };
        let included = match mode {
            ScanMode::PerBill => status.needs_attention(),
            ScanMode::FixedWindow(window) => days_until <= window as i64,
        };
        if included {
            due.push(DueBill {
                bill: bill.clone(),
                status,
                days_until,
            });
        }
    }
    due.sort_by(|a, b| {
        a.bill
            .due_date
            .cmp(&b.bill.due_date)
            .then_with(|| a.bill.name.to_lowercase().cmp(&b.bill.name.to_lowercase()))
    });
    due
}

/// Presentation orderings for a full bill listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    DueDateAscending,
    DueDateDescending,
    NameAscending,
    NameDescending,
    UnpaidFirst,
    PaidFirst,
}

/// Returns a re-ordered copy of the bills; the input order is untouched.
pub fn sort_bills(bills: &[BillRecord], key: SortKey) -> Vec<BillRecord> {
    let mut sorted = bills.to_vec();
    match key {
        SortKey::DueDateAscending => sorted.sort_by_key(|bill| bill.due_date),
        SortKey::DueDateDescending => {
            sorted.sort_by_key(|bill| std::cmp::Reverse(bill.due_date))
        }
        SortKey::NameAscending => sorted.sort_by_key(|bill| bill.name.to_lowercase()),
        SortKey::NameDescending => {
            sorted.sort_by_key(|bill| std::cmp::Reverse(bill.name.to_lowercase()))
        }
        SortKey::UnpaidFirst => sorted.sort_by_key(|bill| (bill.paid, bill.due_date)),
        SortKey::PaidFirst => sorted.sort_by_key(|bill| (!bill.paid, bill.due_date)),
    }
    sorted
}

/// Counts bills per billing cycle, in the canonical cycle order.
pub fn cycle_summary(bills: &[BillRecord]) -> Vec<(BillingCycle, usize)> {
    let mut counts: HashMap<BillingCycle, usize> = HashMap::new();
    for bill in bills {
        *counts.entry(bill.billing_cycle).or_default() += 1;
    }
    BillingCycle::ALL
        .into_iter()
        .filter_map(|cycle| counts.get(&cycle).map(|count| (cycle, *count)))
        .collect()
}
