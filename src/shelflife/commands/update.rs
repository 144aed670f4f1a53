use crate::commands::{CmdMessage, CmdResult, ProductUpdate};
use crate::error::{InventoryError, Result};
use crate::store::ProductStore;

pub fn run<S: ProductStore>(store: &mut S, id: u64, update: &ProductUpdate) -> Result<CmdResult> {
    if update.is_empty() {
        return Err(InventoryError::Api(
            "Nothing to update: give a new name, quantity, unit or date".into(),
        ));
    }

    let mut product = store.get_product(id)?;

    if let Some(name) = &update.name {
        let name = name.trim();
        if name.is_empty() {
            return Err(InventoryError::Api("Product name cannot be empty".into()));
        }
        product.name = name.to_string();
    }
    if let Some(quantity) = update.quantity {
        product.quantity = quantity;
    }
    if let Some(unit) = &update.unit {
        product.unit = unit.trim().to_string();
    }
    if let Some(date) = update.manufacture_date {
        product.manufacture_date = date;
    }
    if let Some(date) = update.expiry_date {
        product.expiry_date = date;
    }

    store.save_product(&product)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product updated ({}): {} {} {}",
        product.id, product.name, product.quantity, product.unit
    )));
    result.affected_products.push(product);
    Ok(result)
}
