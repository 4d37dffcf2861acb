use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use super::bill::BillRecord;
use super::cycle::BillingCycle;

const MAX_PROJECTED_OCCURRENCES: usize = 1024;

/// One projected due date for a bill inside a lookahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub bill_id: Uuid,
    pub name: String,
    pub billing_cycle: BillingCycle,
    pub date: NaiveDate,
}

/// Projects every unpaid bill's due dates inside `[today, today + window_days]`
/// by repeated cycle advancement.
///
/// A bill already overdue is rolled forward until its first occurrence on or
/// after `today`; one-time bills contribute at most their single due date.
/// The input is never mutated.
pub fn upcoming_occurrences(
    bills: &[BillRecord],
    window_days: u32,
    today: NaiveDate,
) -> Vec<Occurrence> {
    let window_end = today + Duration::days(window_days as i64);
    let mut occurrences = Vec::new();

    for bill in bills.iter().filter(|bill| bill.is_payable()) {
        let mut date = bill.due_date;
        let mut guard = 0usize;
        while date <= window_end && guard < MAX_PROJECTED_OCCURRENCES {
            if date >= today {
                occurrences.push(Occurrence {
                    bill_id: bill.id,
                    name: bill.name.clone(),
                    billing_cycle: bill.billing_cycle,
                    date,
                });
            }
            if !bill.billing_cycle.is_recurring() {
                break;
            }
            date = match bill.billing_cycle.next_due_date(date) {
                Ok(next) => next,
                Err(_) => break,
            };
            guard += 1;
        }
    }

    occurrences.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    occurrences
}
