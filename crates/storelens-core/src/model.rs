// ── Catalog domain types ──

use serde::{Deserialize, Serialize};

/// Aggregate customer rating as reported by the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Mean review score on the 0–5 scale.
    pub rate: f64,
    /// Number of reviews behind the score.
    pub count: u64,
}

/// A single catalog product.
///
/// Field names mirror the upstream JSON payload, so this type
/// deserializes straight off the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    /// Category name exactly as the storefront spells it.
    pub category: String,
    /// URL of the product photo.
    pub image: String,
    pub rating: Rating,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn product_deserializes_from_storefront_json() {
        let raw = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Fjallraven - Foldsack No. 1 Backpack");
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn category_list_deserializes_as_plain_strings() {
        let raw = r#"["electronics", "jewelery", "men's clothing", "women's clothing"]"#;
        let categories: Vec<String> = serde_json::from_str(raw).unwrap();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[1], "jewelery");
    }
}
