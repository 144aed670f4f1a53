use crate::alerts;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::Settings;
use crate::error::Result;
use crate::sms::MessageSender;
use crate::store::ProductStore;
use chrono::NaiveDate;

/// Runs one alert scan with the configured threshold and destination.
pub fn run<S: ProductStore, M: MessageSender + ?Sized>(
    store: &S,
    today: NaiveDate,
    settings: &Settings,
    sender: Option<&mut M>,
) -> Result<CmdResult> {
    let products = store.list_products()?;
    let eligible = alerts::select(&products, settings.alert_days, today).len();
    let mut result = CmdResult {
        total_products: products.len(),
        ..CmdResult::default()
    };

    if eligible == 0 {
        result.add_message(CmdMessage::info(format!(
            "No products expire in exactly {} days",
            settings.alert_days
        )));
        return Ok(result);
    }

    let Some(destination) = settings.alert_destination() else {
        result.add_message(CmdMessage::warning(format!(
            "{} product(s) due for an alert, but SMS alerts are off or no phone number is set",
            eligible
        )));
        return Ok(result);
    };
    let Some(sender) = sender else {
        result.add_message(CmdMessage::warning(format!(
            "{} product(s) due for an alert, but no SMS gateway is configured",
            eligible
        )));
        return Ok(result);
    };

    result.alerted = alerts::scan(&products, settings.alert_days, today, destination, sender);

    let sent = result.alerted.len();
    if sent > 0 {
        result.add_message(CmdMessage::success(format!(
            "Sent {} alert(s) to {}",
            sent, destination
        )));
    }
    if sent < eligible {
        result.add_message(CmdMessage::warning(format!(
            "{} alert(s) could not be delivered",
            eligible - sent
        )));
    }
    Ok(result)
}
