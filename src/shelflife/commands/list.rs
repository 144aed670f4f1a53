use crate::commands::{CmdResult, PageInfo};
use crate::error::{InventoryError, Result};
use crate::store::ProductStore;
use chrono::NaiveDate;

use super::helpers::classified_products;

#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Case-insensitive substring of the product name
    pub search: Option<String>,
    /// 1-based page; `None` returns every match
    pub page: Option<usize>,
    pub per_page: usize,
}

pub fn run<S: ProductStore>(store: &S, today: NaiveDate, query: &ListQuery) -> Result<CmdResult> {
    let all = classified_products(store, today)?;
    let total_products = all.len();

    let term = query
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());
    let matching: Vec<_> = match &term {
        Some(term) => all
            .into_iter()
            .filter(|lp| lp.product.name.to_lowercase().contains(term.as_str()))
            .collect(),
        None => all,
    };

    let mut result = CmdResult {
        total_products,
        ..CmdResult::default()
    };

    let listed = match query.page {
        None => matching,
        Some(page) => {
            if page == 0 {
                return Err(InventoryError::Api("Pages start at 1".into()));
            }
            let per_page = query.per_page.max(1);
            let count = matching.len();
            let pages = count.div_ceil(per_page).max(1);
            result.page = Some(PageInfo {
                page,
                pages,
                matching: count,
            });
            matching
                .into_iter()
                .skip((page - 1).saturating_mul(per_page))
                .take(per_page)
                .collect()
        }
    };

    Ok(result.with_listed_products(listed))
}
