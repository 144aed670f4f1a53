use crate::commands::{CmdMessage, CmdResult};
use crate::config::Settings;
use crate::error::{InventoryError, Result};
use crate::model::{Product, ProductDraft};
use crate::sms::{alert_body, MessageSender};
use crate::store::ProductStore;
use chrono::NaiveDate;
use tracing::warn;

/// Stores a new product. If it is already within `alert_days` of expiry, one
/// alert goes out right away; a failed alert does not undo the insert.
pub fn run<S: ProductStore, M: MessageSender + ?Sized>(
    store: &mut S,
    draft: ProductDraft,
    today: NaiveDate,
    settings: &Settings,
    sender: Option<&mut M>,
) -> Result<CmdResult> {
    let name = draft.name.trim().to_string();
    if name.is_empty() {
        return Err(InventoryError::Api("Product name cannot be empty".into()));
    }
    let unit = draft.unit.trim().to_string();
    let draft = ProductDraft { name, unit, ..draft };

    let product = Product::new(store.next_id()?, draft, today);
    store.save_product(&product)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added ({}): {}",
        product.id, product.name
    )));

    if product.days_remaining(today) <= settings.alert_days {
        notify_now(&product, today, settings, sender, &mut result);
    }

    result.affected_products.push(product);
    Ok(result)
}

fn notify_now<M: MessageSender + ?Sized>(
    product: &Product,
    today: NaiveDate,
    settings: &Settings,
    sender: Option<&mut M>,
    result: &mut CmdResult,
) {
    let Some(destination) = settings.alert_destination() else {
        return;
    };
    let Some(sender) = sender else {
        result.add_message(CmdMessage::warning(
            "Product expires soon but no SMS gateway is configured",
        ));
        return;
    };

    match sender.send(destination, &alert_body(product, today)) {
        Ok(()) => {
            result.alerted.insert(product.id);
            result.add_message(CmdMessage::info(format!("Alert sent to {}", destination)));
        }
        Err(e) => {
            warn!(id = product.id, error = %e, "immediate alert not delivered");
            result.add_message(CmdMessage::warning(format!("Alert not sent: {}", e)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sms::recording::RecordingSender;
    use crate::store::memory::fixtures::{reference_day, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use chrono::Duration;

    fn draft(name: &str, days: i64) -> ProductDraft {
        let today = reference_day();
        ProductDraft {
            name: name.into(),
            quantity: 2,
            unit: "kg".into(),
            manufacture_date: today - Duration::days(10),
            expiry_date: today + Duration::days(days),
        }
    }

    fn alerting_settings() -> Settings {
        let mut settings = Settings::default();
        settings.set("phone-number", "+15550123").unwrap();
        settings
    }

    #[test]
    fn assigns_max_plus_one() {
        let mut store = StoreFixture::new()
            .with_product(4, "A", 50)
            .with_product(9, "B", 50)
            .store;
        let mut sender = RecordingSender::new();

        let result = run(
            &mut store,
            draft("Flour", 90),
            reference_day(),
            &Settings::default(),
            Some(&mut sender),
        )
        .unwrap();

        assert_eq!(result.affected_products[0].id, 10);
        assert_eq!(result.affected_products[0].added_date, reference_day());
        assert_eq!(store.get_product(10).unwrap().name, "Flour");
    }

    #[test]
    fn first_product_gets_id_one() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            draft("Flour", 90),
            reference_day(),
            &Settings::default(),
            None::<&mut RecordingSender>,
        )
        .unwrap();
        assert_eq!(result.affected_products[0].id, 1);
    }

    #[test]
    fn rejects_blank_name() {
        let mut store = InMemoryStore::new();
        let err = run(
            &mut store,
            draft("   ", 5),
            reference_day(),
            &Settings::default(),
            None::<&mut RecordingSender>,
        )
        .unwrap_err();
        assert!(matches!(err, InventoryError::Api(_)));
        assert!(store.list_products().unwrap().is_empty());
    }

    #[test]
    fn alerts_immediately_inside_threshold() {
        let mut store = InMemoryStore::new();
        let mut sender = RecordingSender::new();

        let result = run(
            &mut store,
            draft("Milk", 1),
            reference_day(),
            &alerting_settings(),
            Some(&mut sender),
        )
        .unwrap();

        assert!(result.alerted.contains(&1));
        assert_eq!(sender.sent.len(), 1);
        assert!(sender.sent[0].body.contains("expiring in 1 days"));
    }

    #[test]
    fn expired_on_arrival_still_alerts() {
        let mut store = InMemoryStore::new();
        let mut sender = RecordingSender::new();

        run(
            &mut store,
            draft("Old Milk", -2),
            reference_day(),
            &alerting_settings(),
            Some(&mut sender),
        )
        .unwrap();

        assert!(sender.bodies()[0].contains("expired 2 days ago"));
    }

    #[test]
    fn no_alert_outside_threshold() {
        let mut store = InMemoryStore::new();
        let mut sender = RecordingSender::new();

        let result = run(
            &mut store,
            draft("Rice", 4),
            reference_day(),
            &alerting_settings(),
            Some(&mut sender),
        )
        .unwrap();

        assert!(result.alerted.is_empty());
        assert!(sender.sent.is_empty());
    }

    #[test]
    fn failed_alert_keeps_product() {
        let mut store = InMemoryStore::new();
        let mut sender = RecordingSender::failing();

        let result = run(
            &mut store,
            draft("Milk", 0),
            reference_day(),
            &alerting_settings(),
            Some(&mut sender),
        )
        .unwrap();

        assert!(result.alerted.is_empty());
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
        assert_eq!(store.list_products().unwrap().len(), 1);
    }

    #[test]
    fn disabled_alerts_send_nothing() {
        let mut store = InMemoryStore::new();
        let mut sender = RecordingSender::new();
        let mut settings = alerting_settings();
        settings.set("sms-alerts", "false").unwrap();

        run(
            &mut store,
            draft("Milk", 0),
            reference_day(),
            &settings,
            Some(&mut sender),
        )
        .unwrap();

        assert!(sender.sent.is_empty());
    }
}
