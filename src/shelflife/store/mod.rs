//! # Storage Layer
//!
//! The [`ProductStore`] trait is the record store: it hands out and accepts
//! products keyed by their integer id. Business logic never touches files
//! directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single `products.json` holding a
//!   JSON array of products with `YYYY-MM-DD` dates
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── products.json   # every product (JSON array)
//! ├── settings.json   # alert and listing settings
//! └── config.json     # SMS gateway credentials
//! ```
//!
//! The file is read and rewritten whole on every change. There is no locking:
//! two processes writing at once can lose an update.

use crate::error::Result;
use crate::model::Product;

pub mod fs;
pub mod memory;

pub trait ProductStore {
    /// Insert or replace the product with `product.id`
    fn save_product(&mut self, product: &Product) -> Result<()>;

    fn get_product(&self, id: u64) -> Result<Product>;

    /// All products, in no particular order
    fn list_products(&self) -> Result<Vec<Product>>;

    /// Remove a product permanently
    fn delete_product(&mut self, id: u64) -> Result<()>;

    /// Id for the next product: one past the highest id in the store.
    fn next_id(&self) -> Result<u64> {
        let products = self.list_products()?;
        Ok(products.iter().map(|p| p.id).max().unwrap_or(0) + 1)
    }
}
