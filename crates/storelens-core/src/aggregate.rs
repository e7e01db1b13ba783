//! Headline metrics over the catalog.

use serde::Serialize;

use crate::model::Product;

/// Number of products in the (filtered) view.
pub fn product_count(products: &[Product]) -> usize {
    products.len()
}

/// Number of categories the storefront reports. This counts the fetched
/// category list, independent of any active filter.
pub fn category_count(categories: &[String]) -> usize {
    categories.len()
}

/// Mean price of the view, or `None` when the view is empty.
pub fn average_price(products: &[Product]) -> Option<f64> {
    if products.is_empty() {
        return None;
    }
    let total: f64 = products.iter().map(|p| p.price).sum();
    Some(total / products.len() as f64)
}

/// The three headline metrics shown above the product grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub product_count: usize,
    pub category_count: usize,
    /// Absent when no product survives the filters.
    pub average_price: Option<f64>,
}

/// Bundle the metrics for a (possibly filtered) view of the snapshot.
pub fn summarize(products: &[Product], categories: &[String]) -> CatalogSummary {
    CatalogSummary {
        product_count: product_count(products),
        category_count: category_count(categories),
        average_price: average_price(products),
    }
}
