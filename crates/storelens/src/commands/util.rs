//! Shared helpers for command handlers.

use storelens_core::{CategorySelection, FilterCriteria, SortMode};

use crate::cli::{FilterArgs, SortOrder};
use crate::error::CliError;

/// Reject filter values the storefront controls never produce.
pub fn validate_filters(args: &FilterArgs) -> Result<(), CliError> {
    if !(0.0..=5.0).contains(&args.min_rating) {
        return Err(CliError::Validation {
            field: "min-rating".into(),
            reason: format!("{} is outside 0.0-5.0", args.min_rating),
        });
    }
    if args.min_price > args.max_price {
        return Err(CliError::Validation {
            field: "min-price".into(),
            reason: format!(
                "lower bound {} exceeds upper bound {}",
                args.min_price, args.max_price
            ),
        });
    }
    Ok(())
}

/// Map the filter flags onto catalog criteria.
pub fn criteria(args: &FilterArgs) -> FilterCriteria {
    FilterCriteria {
        category: args
            .category
            .clone()
            .map_or(CategorySelection::All, CategorySelection::Only),
        search: args.search.clone().unwrap_or_default(),
        min_rating: args.min_rating,
        min_price: args.min_price,
        max_price: args.max_price,
    }
}

/// Map the argv sort flag onto a catalog sort mode.
pub fn sort_mode(order: SortOrder) -> SortMode {
    match order {
        SortOrder::PriceAsc => SortMode::PriceLowHigh,
        SortOrder::PriceDesc => SortMode::PriceHighLow,
        SortOrder::RatingDesc => SortMode::RatingHighLow,
    }
}

/// Money formatting used by tables and detail views.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
