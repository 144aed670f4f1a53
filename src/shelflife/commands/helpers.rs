use crate::error::Result;
use crate::model::Product;
use crate::store::ProductStore;
use crate::urgency::{classify, listing_order, Urgency};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// A product together with its urgency as of the listing date.
#[derive(Debug, Clone)]
pub struct ListedProduct {
    pub product: Product,
    pub urgency: Urgency,
}

/// Classifies every product against `today` and sorts by urgency, then expiry.
pub fn classified_products<S: ProductStore>(
    store: &S,
    today: NaiveDate,
) -> Result<Vec<ListedProduct>> {
    let products = store.list_products()?;
    Ok(classify_all(products, today))
}

pub fn classify_all(products: Vec<Product>, today: NaiveDate) -> Vec<ListedProduct> {
    let mut listed: Vec<ListedProduct> = products
        .into_iter()
        .map(|product| {
            let urgency = classify(product.expiry_date, today);
            ListedProduct { product, urgency }
        })
        .collect();

    listed.sort_by(|a, b| {
        listing_order(
            (a.urgency.tier, a.product.expiry_date),
            (b.urgency.tier, b.product.expiry_date),
        )
        .then_with(|| a.product.id.cmp(&b.product.id))
    });
    listed
}

/// Fetches every id up front so a bad id fails before anything is changed.
/// Repeated ids are returned once.
pub fn products_by_ids<S: ProductStore>(store: &S, ids: &[u64]) -> Result<Vec<Product>> {
    let mut seen = BTreeSet::new();
    ids.iter()
        .filter(|id| seen.insert(**id))
        .map(|id| store.get_product(*id))
        .collect()
}
