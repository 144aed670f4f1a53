use crate::error::{InventoryError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage and input format for every date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used when showing dates to people.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    pub manufacture_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub added_date: NaiveDate,
}

impl Product {
    pub fn new(id: u64, draft: ProductDraft, added_date: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name,
            quantity: draft.quantity,
            unit: draft.unit,
            manufacture_date: draft.manufacture_date,
            expiry_date: draft.expiry_date,
            added_date,
        }
    }

    /// Signed number of whole days from `today` until expiry.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        days_between(today, self.expiry_date)
    }
}

/// User-supplied fields of a product that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: u32,
    pub unit: String,
    pub manufacture_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| InventoryError::InvalidDate(raw.to_string()))
}
