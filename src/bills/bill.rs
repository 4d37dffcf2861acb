use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cycle::BillingCycle;
use super::reminder::DueStatus;

pub const DEFAULT_REMINDER_DAYS: u32 = 7;

fn default_reminder_days() -> u32 {
    DEFAULT_REMINDER_DAYS
}

/// Account and credential metadata carried opaquely on a bill. The engine
/// never interprets these fields; they travel unchanged through every
/// transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
}

/// Support and contact metadata, equally opaque to the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_service_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_chat_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_app: Option<String>,
}

/// A single tracked obligation: what is owed, when, and how often.
///
/// Records loaded from older snapshots gain defaults for any missing fields
/// at the serde boundary, so the engine always sees a fully-populated record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillRecord {
    pub id: Uuid,
    pub name: String,
    pub due_date: NaiveDate,
    pub billing_cycle: BillingCycle,
    #[serde(default = "default_reminder_days")]
    pub reminder_days: u32,
    #[serde(default)]
    pub paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_page: Option<String>,
    #[serde(default)]
    pub account: AccountDetails,
    #[serde(default)]
    pub contact: ContactDetails,
}

impl BillRecord {
    pub fn new(
        name: impl Into<String>,
        due_date: NaiveDate,
        billing_cycle: BillingCycle,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            due_date,
            billing_cycle,
            reminder_days: DEFAULT_REMINDER_DAYS,
            paid: false,
            category: None,
            payment_method: None,
            web_page: None,
            account: AccountDetails::default(),
            contact: ContactDetails::default(),
        }
    }

    pub fn with_reminder_days(mut self, reminder_days: u32) -> Self {
        self.reminder_days = reminder_days;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// A paid bill is terminal: one-time bills stay paid forever, and a
    /// recurring bill only carries `paid == true` once it has been retired.
    pub fn is_payable(&self) -> bool {
        !self.paid
    }

    /// Signed day distance from `today` to the due date; negative when overdue.
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }

    pub fn status(&self, today: NaiveDate) -> DueStatus {
        DueStatus::classify(self.due_date, self.reminder_days, today)
    }
}
