use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BillsError, Result};

use super::bill::BillRecord;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// The bill collection as a value: callers pass registers in and get registers
/// back, nothing holds a shared mutable list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillRegister {
    #[serde(default)]
    pub bills: Vec<BillRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "BillRegister::schema_version_default")]
    pub schema_version: u8,
}

impl BillRegister {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            bills: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Adds a bill, enforcing case-insensitive name uniqueness.
    pub fn add_bill(&mut self, bill: BillRecord) -> Result<Uuid> {
        if self.bill_by_name(&bill.name).is_some() {
            return Err(BillsError::DuplicateName(bill.name));
        }
        let id = bill.id;
        self.bills.push(bill);
        self.touch();
        Ok(id)
    }

    pub fn bill(&self, id: Uuid) -> Option<&BillRecord> {
        self.bills.iter().find(|bill| bill.id == id)
    }

    pub fn bill_mut(&mut self, id: Uuid) -> Option<&mut BillRecord> {
        self.bills.iter_mut().find(|bill| bill.id == id)
    }

    pub fn bill_by_name(&self, name: &str) -> Option<&BillRecord> {
        let needle = name.trim().to_lowercase();
        self.bills
            .iter()
            .find(|bill| bill.name.to_lowercase() == needle)
    }

    pub fn remove_bill(&mut self, id: Uuid) -> Result<BillRecord> {
        let index = self
            .bills
            .iter()
            .position(|bill| bill.id == id)
            .ok_or(BillsError::BillNotFound(id))?;
        let removed = self.bills.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Swaps in a whole new bill list in one step; the batch commit relies on
    /// this so a failed apply never leaves a partially-advanced collection.
    pub fn replace_bills(&mut self, bills: Vec<BillRecord>) {
        self.bills = bills;
        self.touch();
    }

    pub fn bill_count(&self) -> usize {
        self.bills.len()
    }

    pub fn unpaid_bills(&self) -> impl Iterator<Item = &BillRecord> {
        self.bills.iter().filter(|bill| bill.is_payable())
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for BillRegister {
    fn default() -> Self {
        Self::new()
    }
}
