//! Product filters.
//!
//! Every filter borrows the input slice and returns a fresh `Vec`;
//! survivors keep their input order. [`FilterCriteria`] composes the
//! stages in a fixed order: category, then search, then rating, then
//! price.

use crate::model::Product;

/// Upper bound of the price range control.
pub const PRICE_CEILING: f64 = 1000.0;

/// Category filter state: everything, or a single named category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelection {
    #[default]
    All,
    Only(String),
}

impl CategorySelection {
    /// Label shown in the category selector.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Only(name) => name,
        }
    }
}

/// Keep products whose category equals `category` exactly. The match is
/// case-sensitive; category names come verbatim from the storefront.
pub fn by_category(products: &[Product], category: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

/// Keep products whose title contains `query`, ignoring case. The empty
/// query keeps everything.
pub fn by_search(products: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products.to_vec();
    }
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Keep products rated at or above `min` (inclusive).
pub fn by_min_rating(products: &[Product], min: f64) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.rating.rate >= min)
        .cloned()
        .collect()
}

/// Keep products priced within `[low, high]`, both bounds inclusive.
pub fn by_price_range(products: &[Product], low: f64, high: f64) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.price >= low && p.price <= high)
        .cloned()
        .collect()
}

/// The full filter panel state.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub category: CategorySelection,
    pub search: String,
    pub min_rating: f64,
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: CategorySelection::All,
            search: String::new(),
            min_rating: 0.0,
            min_price: 0.0,
            max_price: PRICE_CEILING,
        }
    }
}

impl FilterCriteria {
    /// Run the stages in order: category, search, rating, price.
    ///
    /// `All` skips the category stage and an empty search skips the
    /// search stage; the rating and price stages always run.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut view = match &self.category {
            CategorySelection::All => products.to_vec(),
            CategorySelection::Only(name) => by_category(products, name),
        };
        if !self.search.is_empty() {
            view = by_search(&view, &self.search);
        }
        view = by_min_rating(&view, self.min_rating);
        by_price_range(&view, self.min_price, self.max_price)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Rating;

    fn product(id: u64, title: &str, category: &str, price: f64, rate: f64) -> Product {
        Product {
            id,
            title: title.to_owned(),
            price,
            description: format!("{title}, described at length"),
            category: category.to_owned(),
            image: format!("https://img.example/{id}.jpg"),
            rating: Rating { rate, count: 10 },
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Fjallraven Backpack", "men's clothing", 109.95, 3.9),
            product(2, "Mens Casual T-Shirt", "men's clothing", 22.3, 4.1),
            product(3, "Gold Chain Bracelet", "jewelery", 168.0, 4.6),
            product(4, "Samsung 49in Monitor", "electronics", 599.0, 2.2),
            product(5, "White Gold Ring", "jewelery", 9.99, 1.9),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn category_keeps_exact_matches_only() {
        assert_eq!(ids(&by_category(&catalog(), "jewelery")), vec![3, 5]);
    }

    #[test]
    fn category_is_case_sensitive() {
        assert!(by_category(&catalog(), "Jewelery").is_empty());
    }

    #[test]
    fn search_ignores_case() {
        assert_eq!(ids(&by_search(&catalog(), "gold")), vec![3, 5]);
        assert_eq!(ids(&by_search(&catalog(), "GOLD")), vec![3, 5]);
    }

    #[test]
    fn empty_search_keeps_everything() {
        assert_eq!(by_search(&catalog(), "").len(), 5);
    }

    #[test]
    fn search_matches_titles_not_descriptions() {
        // Every fixture description contains "described"; none of the
        // titles do.
        assert!(by_search(&catalog(), "described").is_empty());
    }

    #[test]
    fn min_rating_is_inclusive() {
        assert_eq!(ids(&by_min_rating(&catalog(), 4.1)), vec![2, 3]);
    }

    #[test]
    fn price_range_includes_both_bounds() {
        assert_eq!(ids(&by_price_range(&catalog(), 9.99, 109.95)), vec![1, 2, 5]);
    }

    #[test]
    fn filters_preserve_fetch_order() {
        assert_eq!(ids(&by_min_rating(&catalog(), 0.0)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn criteria_compose_every_stage() {
        let criteria = FilterCriteria {
            category: CategorySelection::Only("jewelery".into()),
            search: "gold".into(),
            min_rating: 4.0,
            min_price: 100.0,
            max_price: 200.0,
        };
        assert_eq!(ids(&criteria.apply(&catalog())), vec![3]);
    }

    #[test]
    fn composed_criteria_equal_staged_filters() {
        let criteria = FilterCriteria {
            category: CategorySelection::Only("men's clothing".into()),
            search: "shirt".into(),
            ..FilterCriteria::default()
        };
        let staged = by_search(&by_category(&catalog(), "men's clothing"), "shirt");
        assert_eq!(criteria.apply(&catalog()), staged);
    }

    #[test]
    fn default_criteria_keep_the_full_snapshot() {
        assert_eq!(FilterCriteria::default().apply(&catalog()).len(), 5);
    }

    #[test]
    fn apply_leaves_the_snapshot_untouched() {
        let snapshot = catalog();
        let before = snapshot.clone();
        let _ = FilterCriteria::default().apply(&snapshot);
        assert_eq!(snapshot, before);
    }
}
