//! # Urgency Classification
//!
//! Maps an expiry date and a reference date to a [`Tier`] plus a status line
//! such as "Expires in 5 days".
//!
//! The reference date is always an argument. Nothing in here reads the clock,
//! so the same inputs always classify the same way.
//!
//! | days remaining | tier      | text                      |
//! |----------------|-----------|---------------------------|
//! | < 0            | `expired` | `Expired {n} days ago`    |
//! | 0              | `urgent`  | `Expires today!`          |
//! | 1..=3          | `urgent`  | `Expires in {n} days`     |
//! | 4..=30         | `soon`    | `Expires in {n} days`     |
//! | > 30           | `normal`  | `Expires in {n} days`     |
//!
//! The 3-day urgent cutoff is fixed. It is unrelated to the configurable
//! `alert_days` threshold used by [`crate::alerts`].

use crate::model::{days_between, parse_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const URGENT_WITHIN_DAYS: i64 = 3;
pub const SOON_WITHIN_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Expired,
    Urgent,
    Soon,
    Normal,
    Error,
}

impl Tier {
    /// Position in a listing; lower sorts first.
    pub fn precedence(self) -> u8 {
        match self {
            Tier::Expired => 0,
            Tier::Urgent => 1,
            Tier::Soon => 2,
            Tier::Normal => 3,
            Tier::Error => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Expired => "expired",
            Tier::Urgent => "urgent",
            Tier::Soon => "soon",
            Tier::Normal => "normal",
            Tier::Error => "error",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Urgency {
    pub tier: Tier,
    pub status_text: String,
    /// `None` only for [`Tier::Error`].
    pub days_remaining: Option<i64>,
}

pub fn classify(expiry_date: NaiveDate, today: NaiveDate) -> Urgency {
    let days = days_between(today, expiry_date);

    let (tier, status_text) = if days < 0 {
        (Tier::Expired, format!("Expired {} days ago", -days))
    } else if days == 0 {
        (Tier::Urgent, "Expires today!".to_string())
    } else if days <= URGENT_WITHIN_DAYS {
        (Tier::Urgent, format!("Expires in {} days", days))
    } else if days <= SOON_WITHIN_DAYS {
        (Tier::Soon, format!("Expires in {} days", days))
    } else {
        (Tier::Normal, format!("Expires in {} days", days))
    };

    Urgency {
        tier,
        status_text,
        days_remaining: Some(days),
    }
}

/// Classifies a date that has not been parsed yet. Unparsable input lands in
/// [`Tier::Error`] instead of failing.
pub fn classify_raw(raw_expiry: &str, today: NaiveDate) -> Urgency {
    match parse_date(raw_expiry) {
        Ok(expiry) => classify(expiry, today),
        Err(_) => Urgency {
            tier: Tier::Error,
            status_text: format!("Invalid expiry date: {}", raw_expiry.trim()),
            days_remaining: None,
        },
    }
}

/// Listing order: tier precedence first, then earliest expiry.
pub fn listing_order(a: (Tier, NaiveDate), b: (Tier, NaiveDate)) -> Ordering {
    a.0.precedence()
        .cmp(&b.0.precedence())
        .then_with(|| a.1.cmp(&b.1))
}
