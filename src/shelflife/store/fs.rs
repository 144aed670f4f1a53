use super::ProductStore;
use crate::error::{InventoryError, Result};
use crate::model::Product;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const PRODUCTS_FILENAME: &str = "products.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn products_path(&self) -> PathBuf {
        self.root.join(PRODUCTS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Vec<Product>> {
        let path = self.products_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            InventoryError::Store(format!("{} is corrupt: {}", path.display(), e))
        })
    }

    fn write(&self, products: &[Product]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(products)?;
        fs::write(self.products_path(), content)?;
        debug!(count = products.len(), path = %self.products_path().display(), "saved products");
        Ok(())
    }
}

impl ProductStore for FileStore {
    fn save_product(&mut self, product: &Product) -> Result<()> {
        let mut products = self.load()?;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        self.write(&products)
    }

    fn get_product(&self, id: u64) -> Result<Product> {
        self.load()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(InventoryError::ProductNotFound(id))
    }

    fn list_products(&self) -> Result<Vec<Product>> {
        self.load()
    }

    fn delete_product(&mut self, id: u64) -> Result<()> {
        let mut products = self.load()?;
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(InventoryError::ProductNotFound(id));
        }
        self.write(&products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{parse_date, ProductDraft};

    fn product(id: u64, name: &str) -> Product {
        let draft = ProductDraft {
            name: name.to_string(),
            quantity: 1,
            unit: "pcs".into(),
            manufacture_date: parse_date("2024-01-01").unwrap(),
            expiry_date: parse_date("2024-02-01").unwrap(),
        };
        Product::new(id, draft, parse_date("2024-01-05").unwrap())
    }

    #[test]
    fn empty_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert!(store.list_products().unwrap().is_empty());
        assert_eq!(store.next_id().unwrap(), 1);
    }

    #[test]
    fn save_creates_dir_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("data");
        let mut store = FileStore::new(root.clone());
        store.save_product(&product(1, "Bread")).unwrap();

        let reopened = FileStore::new(root);
        let loaded = reopened.get_product(1).unwrap();
        assert_eq!(loaded.name, "Bread");
    }

    #[test]
    fn save_replaces_existing_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save_product(&product(1, "Bread")).unwrap();
        store.save_product(&product(1, "Rye Bread")).unwrap();

        let all = store.list_products().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Rye Bread");
    }

    #[test]
    fn delete_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save_product(&product(1, "Bread")).unwrap();

        assert!(matches!(
            store.delete_product(9),
            Err(InventoryError::ProductNotFound(9))
        ));
        store.delete_product(1).unwrap();
        assert!(store.list_products().unwrap().is_empty());
    }

    #[test]
    fn reads_files_written_by_hand() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(PRODUCTS_FILENAME),
            r#"[{"id": 4, "name": "Eggs", "quantity": 12, "unit": "pcs",
                 "manufacture_date": "2024-03-01", "expiry_date": "2024-03-20",
                 "added_date": "2024-03-02"}]"#,
        )
        .unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.get_product(4).unwrap().quantity, 12);
        assert_eq!(store.next_id().unwrap(), 5);
    }

    #[test]
    fn corrupt_file_is_store_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PRODUCTS_FILENAME), "[{").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.list_products(),
            Err(InventoryError::Store(_))
        ));
    }
}
