//! # Message Delivery
//!
//! Alerts leave the process through a [`MessageSender`]. The scanner and the
//! `add` command only ever see this trait, so they can be tested without a
//! network.
//!
//! - [`twilio::TwilioSender`]: production sender, posts to the Twilio REST API
//! - [`recording::RecordingSender`]: keeps messages in memory, can be told to
//!   fail for specific destinations or bodies
//!
//! Senders are built once by the caller and passed down explicitly.

use crate::error::Result;
use crate::model::Product;
use chrono::NaiveDate;

pub mod recording;
pub mod twilio;

pub trait MessageSender {
    /// Deliver `body` to `to`. An `Err` means the message was not accepted.
    fn send(&mut self, to: &str, body: &str) -> Result<()>;
}

/// Text of the alert for `product` as seen on `today`.
pub fn alert_body(product: &Product, today: NaiveDate) -> String {
    let days = product.days_remaining(today);
    let subject = format!(
        "ALERT: Product '{}' ({} {})",
        product.name, product.quantity, product.unit
    );
    match days {
        0 => format!("{} expires today!", subject),
        d if d < 0 => format!("{} expired {} days ago!", subject, -d),
        d => format!("{} is expiring in {} days!", subject, d),
    }
}
