//! # Expiry Alert Scanner
//!
//! One pass over the products: every product whose `days_remaining` equals
//! `alert_days` exactly gets one message through the supplied
//! [`MessageSender`]. The ids whose delivery succeeded are returned.
//!
//! - A product is only eligible on the single day it has `alert_days` left.
//!   A day without a scan is a day whose alerts are never sent.
//! - Ids are deduplicated within one scan only. Scanning twice on the same day
//!   sends twice.
//! - Deduplication happens at selection, before any delivery: only the first
//!   record with a given id is attempted. If that delivery fails, later
//!   records with the same id are not tried as a fallback.
//! - A failed delivery is logged and the id is left out of the result.

use crate::model::Product;
use crate::sms::{alert_body, MessageSender};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Products eligible for an alert on `today`, first occurrence of each id only.
pub fn select(products: &[Product], alert_days: i64, today: NaiveDate) -> Vec<&Product> {
    let mut seen = BTreeSet::new();
    products
        .iter()
        .filter(|p| p.days_remaining(today) == alert_days)
        .filter(|p| seen.insert(p.id))
        .collect()
}

pub fn scan<M: MessageSender + ?Sized>(
    products: &[Product],
    alert_days: i64,
    today: NaiveDate,
    destination: &str,
    sender: &mut M,
) -> BTreeSet<u64> {
    let mut alerted = BTreeSet::new();

    for product in select(products, alert_days, today) {
        let body = alert_body(product, today);
        match sender.send(destination, &body) {
            Ok(()) => {
                info!(id = product.id, name = %product.name, "expiry alert sent");
                alerted.insert(product.id);
            }
            Err(e) => {
                warn!(id = product.id, name = %product.name, error = %e, "expiry alert not delivered");
            }
        }
    }

    alerted
}
