//! One-shot catalog queries: filter, then sort.

use crate::filter::FilterCriteria;
use crate::model::Product;
use crate::sort::{SortMode, sort_products};

/// A filter plus an optional sort, applied together over a fetched
/// snapshot. This is the unit both UIs execute whenever a control
/// changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub filter: FilterCriteria,
    pub sort: Option<SortMode>,
}

impl CatalogQuery {
    /// Filter the snapshot, then order the survivors.
    pub fn execute(&self, products: &[Product]) -> Vec<Product> {
        sort_products(&self.filter.apply(products), self.sort)
    }
}
