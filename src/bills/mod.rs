//! Bill domain models, due-date arithmetic, and lifecycle helpers.

pub mod bill;
pub mod cycle;
pub mod forecast;
pub mod payment;
pub mod register;
pub mod reminder;
pub mod scanner;
pub mod validation;

pub use bill::{AccountDetails, BillRecord, ContactDetails, DEFAULT_REMINDER_DAYS};
pub use cycle::BillingCycle;
pub use forecast::{upcoming_occurrences, Occurrence};
pub use payment::{PaymentBatch, PaymentLifecycle, PaymentReceipt};
pub use register::BillRegister;
pub use reminder::{DueStatus, DUE_SOON_WINDOW_DAYS};
pub use scanner::{cycle_summary, scan, sort_bills, DueBill, ScanMode, SortKey};
