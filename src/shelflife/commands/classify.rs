use crate::commands::CmdResult;
use crate::error::Result;
use crate::urgency::classify_raw;
use chrono::NaiveDate;

/// Classifies an arbitrary date string without touching the store.
pub fn run(raw_expiry: &str, today: NaiveDate) -> Result<CmdResult> {
    Ok(CmdResult::default().with_classification(classify_raw(raw_expiry, today)))
}
