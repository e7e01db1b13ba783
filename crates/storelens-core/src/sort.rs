//! Sort orders for the filtered view.

use std::fmt;

use crate::model::Product;

/// A recognized sort order. The `Display` impl renders the exact label
/// the selector shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    PriceLowHigh,
    PriceHighLow,
    RatingHighLow,
}

impl SortMode {
    /// Every mode, in selector order.
    pub const ALL: [Self; 3] = [Self::PriceLowHigh, Self::PriceHighLow, Self::RatingHighLow];

    /// Map a selector label back to its mode. Unknown labels map to
    /// `None`, which callers treat as "leave the fetch order alone".
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Price: Low to High" => Some(Self::PriceLowHigh),
            "Price: High to Low" => Some(Self::PriceHighLow),
            "Rating: High to Low" => Some(Self::RatingHighLow),
            _ => None,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PriceLowHigh => "Price: Low to High",
            Self::PriceHighLow => "Price: High to Low",
            Self::RatingHighLow => "Rating: High to Low",
        };
        f.write_str(label)
    }
}

/// Sort a copy of `products` by `mode`. `None` is the identity branch:
/// the fetch order comes back untouched.
///
/// The sort is stable, so products equal under the active key keep
/// their relative order. Float keys compare with `total_cmp`, which
/// never panics.
pub fn sort_products(products: &[Product], mode: Option<SortMode>) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match mode {
        Some(SortMode::PriceLowHigh) => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        Some(SortMode::PriceHighLow) => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        Some(SortMode::RatingHighLow) => {
            sorted.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate));
        }
        // No recognized mode: keep the fetch order.
        None => {}
    }
    sorted
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Rating;

    fn product(id: u64, price: f64, rate: f64) -> Product {
        Product {
            id,
            title: format!("Product {id}"),
            price,
            description: String::new(),
            category: "electronics".to_owned(),
            image: String::new(),
            rating: Rating { rate, count: 5 },
        }
    }

    /// Ids 1 and 3 tie on price; ids 2 and 4 tie on rating.
    fn catalog() -> Vec<Product> {
        vec![
            product(1, 50.0, 3.0),
            product(2, 10.0, 4.5),
            product(3, 50.0, 2.0),
            product(4, 25.0, 4.5),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn price_low_to_high_orders_ascending() {
        let sorted = sort_products(&catalog(), Some(SortMode::PriceLowHigh));
        assert_eq!(ids(&sorted), vec![2, 4, 1, 3]);
    }

    #[test]
    fn price_high_to_low_orders_descending() {
        let sorted = sort_products(&catalog(), Some(SortMode::PriceHighLow));
        assert_eq!(ids(&sorted), vec![1, 3, 4, 2]);
    }

    #[test]
    fn rating_high_to_low_orders_by_rate() {
        let sorted = sort_products(&catalog(), Some(SortMode::RatingHighLow));
        assert_eq!(ids(&sorted), vec![2, 4, 1, 3]);
    }

    #[test]
    fn equal_keys_keep_fetch_order() {
        // 1 ties 3 on price and 2 ties 4 on rating; the earlier-fetched
        // product must stay first under both keys.
        let by_price = sort_products(&catalog(), Some(SortMode::PriceHighLow));
        let by_rating = sort_products(&catalog(), Some(SortMode::RatingHighLow));
        assert_eq!(ids(&by_price)[..2], [1, 3]);
        assert_eq!(ids(&by_rating)[..2], [2, 4]);
    }

    #[test]
    fn absent_mode_is_the_identity() {
        assert_eq!(ids(&sort_products(&catalog(), None)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn sorting_never_mutates_the_input() {
        let snapshot = catalog();
        let before = snapshot.clone();
        let _ = sort_products(&snapshot, Some(SortMode::PriceLowHigh));
        assert_eq!(snapshot, before);
    }

    #[test]
    fn labels_round_trip_through_from_label() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::from_label(&mode.to_string()), Some(mode));
        }
    }

    #[test]
    fn unknown_labels_map_to_no_mode() {
        assert_eq!(SortMode::from_label("Newest First"), None);
        assert_eq!(SortMode::from_label(""), None);
    }
}
