use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ProductStore;

use super::helpers::products_by_ids;

pub fn run<S: ProductStore>(store: &mut S, ids: &[u64]) -> Result<CmdResult> {
    let products = products_by_ids(store, ids)?;
    let mut result = CmdResult::default();

    for product in products {
        store.delete_product(product.id)?;
        result.add_message(CmdMessage::success(format!(
            "Product deleted ({}): {}",
            product.id, product.name
        )));
        result.affected_products.push(product);
    }

    Ok(result)
}
