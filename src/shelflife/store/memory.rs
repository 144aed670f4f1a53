use super::ProductStore;
use crate::error::{InventoryError, Result};
use crate::model::Product;
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    products: BTreeMap<u64, Product>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for InMemoryStore {
    fn save_product(&mut self, product: &Product) -> Result<()> {
        self.products.insert(product.id, product.clone());
        Ok(())
    }

    fn get_product(&self, id: u64) -> Result<Product> {
        self.products
            .get(&id)
            .cloned()
            .ok_or(InventoryError::ProductNotFound(id))
    }

    fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.values().cloned().collect())
    }

    fn delete_product(&mut self, id: u64) -> Result<()> {
        if self.products.remove(&id).is_none() {
            return Err(InventoryError::ProductNotFound(id));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ProductDraft;
    use chrono::{Duration, NaiveDate};

    /// Fixed reference date shared by fixture-based tests.
    pub fn reference_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub today: NaiveDate,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                today: reference_day(),
            }
        }

        /// Adds a product expiring `days` after the fixture's `today`.
        pub fn with_product(mut self, id: u64, name: &str, days: i64) -> Self {
            let draft = ProductDraft {
                name: name.to_string(),
                quantity: 1,
                unit: "pcs".to_string(),
                manufacture_date: self.today - Duration::days(60),
                expiry_date: self.today + Duration::days(days),
            };
            let product = Product::new(id, draft, self.today - Duration::days(1));
            self.store.save_product(&product).unwrap();
            self
        }
    }
}
