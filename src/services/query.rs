//! Filtering, search, pagination and aggregation over a snapshot of the catalog.

use std::collections::BTreeMap;

use crate::{
    error::{AppError, AppResult},
    models::Product,
    response::{ProductPage, ProductStats},
};

pub const MISSING_QUERY_MESSAGE: &str = "Search query 'q' is required.";

/// Keeps products whose category equals `category`, ignoring case.
/// `None` or an empty string keeps everything.
pub fn filter_by_category(products: Vec<Product>, category: Option<&str>) -> Vec<Product> {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => {
            let wanted = category.to_lowercase();
            products
                .into_iter()
                .filter(|p| p.category.to_lowercase() == wanted)
                .collect()
        }
        None => products,
    }
}

pub fn search(products: &[Product], q: Option<&str>) -> AppResult<Vec<Product>> {
    let q = q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::validation(MISSING_QUERY_MESSAGE, Vec::new()))?;
    let needle = q.to_lowercase();

    Ok(products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect())
}

/// Slices `[(page-1)*limit, page*limit)` out of `products`.
///
/// `page` is echoed back unclamped; a window outside the list is empty.
pub fn paginate(products: Vec<Product>, page: i64, limit: i64) -> ProductPage {
    let total_items = products.len();
    let total_pages = if limit > 0 {
        (total_items as u64).div_ceil(limit as u64) as i64
    } else {
        0
    };

    let window = if page < 1 || limit < 1 {
        Vec::new()
    } else {
        let start = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        products.into_iter().skip(start).take(take).collect()
    };

    ProductPage {
        total_items,
        total_pages,
        current_page: page,
        products: window,
    }
}

pub fn stats(products: &[Product]) -> ProductStats {
    let mut count_by_category = BTreeMap::new();
    for product in products {
        *count_by_category
            .entry(product.category.clone())
            .or_insert(0) += 1;
    }

    ProductStats {
        total_products: products.len(),
        in_stock_count: products.iter().filter(|p| p.in_stock).count(),
        count_by_category,
    }
}
