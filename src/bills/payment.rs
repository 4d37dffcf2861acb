use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::errors::{BillsError, Result};

use super::bill::BillRecord;
use super::cycle::BillingCycle;
use super::register::BillRegister;

/// Outcome of one payment transition, returned for caller feedback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentReceipt {
    pub bill_id: Uuid,
    pub name: String,
    pub billing_cycle: BillingCycle,
    pub previous_due: NaiveDate,
    /// The advanced due date, or `None` when the payment was terminal.
    pub next_due: Option<NaiveDate>,
    pub terminal: bool,
}

/// Immediate payment transitions on a register.
///
/// Recurring bills advance in place: the due date moves one cycle forward and
/// `paid` stays `false`, so callers never observe a recurring bill in a paid
/// state. One-time and retired bills become terminal and reject further
/// payment.
pub struct PaymentLifecycle;

impl PaymentLifecycle {
    /// Pays a single bill immediately.
    pub fn pay(register: &mut BillRegister, bill_id: Uuid) -> Result<PaymentReceipt> {
        let bill = register
            .bill_mut(bill_id)
            .ok_or(BillsError::BillNotFound(bill_id))?;
        let receipt = pay_in_place(bill)?;
        register.touch();
        Ok(receipt)
    }

    /// Marks a bill permanently paid, stopping any recurrence. The bill is
    /// kept in the register as history and rejects further payment.
    pub fn retire(register: &mut BillRegister, bill_id: Uuid) -> Result<PaymentReceipt> {
        let bill = register
            .bill_mut(bill_id)
            .ok_or(BillsError::BillNotFound(bill_id))?;
        if !bill.is_payable() {
            return Err(BillsError::TerminalPayment(bill.name.clone()));
        }
        bill.paid = true;
        let receipt = PaymentReceipt {
            bill_id: bill.id,
            name: bill.name.clone(),
            billing_cycle: bill.billing_cycle,
            previous_due: bill.due_date,
            next_due: None,
            terminal: true,
        };
        register.touch();
        Ok(receipt)
    }
}

fn pay_in_place(bill: &mut BillRecord) -> Result<PaymentReceipt> {
    if !bill.is_payable() {
        return Err(BillsError::TerminalPayment(bill.name.clone()));
    }
    let previous_due = bill.due_date;
    let next_due = if bill.billing_cycle.is_recurring() {
        let next = bill.billing_cycle.next_due_date(previous_due)?;
        bill.due_date = next;
        bill.paid = false;
        Some(next)
    } else {
        bill.paid = true;
        None
    };
    Ok(PaymentReceipt {
        bill_id: bill.id,
        name: bill.name.clone(),
        billing_cycle: bill.billing_cycle,
        previous_due,
        next_due,
        terminal: next_due.is_none(),
    })
}

/// Accumulates payment intents against a register snapshot until an explicit
/// commit, so interactive callers can mark many bills and apply them together.
///
/// Staged intents never touch the register; discarding the batch at any point
/// leaves the collection untouched. `apply` is all-or-nothing: one failing
/// transition rejects the whole batch.
#[derive(Debug, Clone, Default)]
pub struct PaymentBatch {
    intents: Vec<Uuid>,
}

impl PaymentBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an intent to pay the bill, validating against the current
    /// snapshot that the bill exists and is still payable.
    pub fn stage(&mut self, register: &BillRegister, bill_id: Uuid) -> Result<()> {
        let bill = register
            .bill(bill_id)
            .ok_or(BillsError::BillNotFound(bill_id))?;
        if !bill.is_payable() {
            return Err(BillsError::TerminalPayment(bill.name.clone()));
        }
        if self.intents.contains(&bill_id) {
            return Err(BillsError::Validation(format!(
                "bill `{}` is already staged",
                bill.name
            )));
        }
        self.intents.push(bill_id);
        Ok(())
    }

    /// Drops a staged intent; returns whether it was present.
    pub fn unstage(&mut self, bill_id: Uuid) -> bool {
        let before = self.intents.len();
        self.intents.retain(|id| *id != bill_id);
        self.intents.len() != before
    }

    pub fn clear(&mut self) {
        self.intents.clear();
    }

    pub fn intents(&self) -> &[Uuid] {
        &self.intents
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Dry-runs the batch against a clone of the register's bills.
    pub fn preview(&self, register: &BillRegister) -> Result<Vec<PaymentReceipt>> {
        let mut bills = register.bills.clone();
        apply_intents(&mut bills, &self.intents)
    }

    /// Commits every staged intent in one step.
    ///
    /// All transitions run against a cloned bill list; the first failure
    /// rejects the whole batch, keeping the register untouched and the
    /// intents available for inspection. On success the advanced list is
    /// swapped in as a single replacement and the batch empties.
    pub fn apply(&mut self, register: &mut BillRegister) -> Result<Vec<PaymentReceipt>> {
        let mut bills = register.bills.clone();
        match apply_intents(&mut bills, &self.intents) {
            Ok(receipts) => {
                register.replace_bills(bills);
                self.intents.clear();
                Ok(receipts)
            }
            Err(err) => {
                warn!("payment batch rejected: {}", err);
                Err(err)
            }
        }
    }
}

fn apply_intents(bills: &mut [BillRecord], intents: &[Uuid]) -> Result<Vec<PaymentReceipt>> {
    let mut receipts = Vec::with_capacity(intents.len());
    for &bill_id in intents {
        let bill = match bills.iter_mut().find(|bill| bill.id == bill_id) {
            Some(bill) => bill,
            None => {
                return Err(BillsError::BatchRejected {
                    bill: bill_id.to_string(),
                    source: Box::new(BillsError::BillNotFound(bill_id)),
                })
            }
        };
        let name = bill.name.clone();
        match pay_in_place(bill) {
            Ok(receipt) => receipts.push(receipt),
            Err(err) => {
                return Err(BillsError::BatchRejected {
                    bill: name,
                    source: Box::new(err),
                })
            }
        }
    }
    Ok(receipts)
}
