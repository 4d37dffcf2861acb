//! Input validation performed before a record reaches the engine. The engine
//! trusts these checks and never re-validates.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::errors::{BillsError, Result};

use super::register::BillRegister;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MIN_REMINDER_DAYS: u32 = 1;
pub const MAX_REMINDER_DAYS: u32 = 365;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static UNSAFE_NAME_CHARS: Lazy<HashSet<char>> =
    Lazy::new(|| ['<', '>', '"', '\'', '&', ';', '|', '`', '$'].into_iter().collect());

/// Checks a candidate bill name: non-empty, length-capped, free of unsafe
/// characters, and unique (case-insensitively) within the register.
pub fn validate_name(name: &str, register: &BillRegister) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BillsError::Validation("bill name must not be empty".into()));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(BillsError::Validation(format!(
            "bill name exceeds {} characters",
            MAX_NAME_LENGTH
        )));
    }
    if let Some(ch) = trimmed
        .chars()
        .find(|ch| UNSAFE_NAME_CHARS.contains(ch) || ch.is_control())
    {
        return Err(BillsError::Validation(format!(
            "bill name contains unsafe character `{}`",
            ch.escape_default()
        )));
    }
    if register.bill_by_name(trimmed).is_some() {
        return Err(BillsError::DuplicateName(trimmed.to_string()));
    }
    Ok(())
}

pub fn validate_reminder_days(days: u32) -> Result<u32> {
    if !(MIN_REMINDER_DAYS..=MAX_REMINDER_DAYS).contains(&days) {
        return Err(BillsError::Validation(format!(
            "reminder days must be between {} and {}",
            MIN_REMINDER_DAYS, MAX_REMINDER_DAYS
        )));
    }
    Ok(days)
}

/// Parses a `YYYY-MM-DD` string into a real calendar date.
pub fn parse_due_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        BillsError::Validation(format!(
            "`{}` is not a valid date (expected YYYY-MM-DD)",
            input.trim()
        ))
    })
}
