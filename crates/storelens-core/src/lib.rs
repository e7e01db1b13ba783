//! Catalog domain logic for the storelens workspace.
//!
//! Everything in this crate is pure: it owns the product model and the
//! filter / sort / aggregate operations the UIs run over a fetched
//! snapshot. No I/O happens here; `storelens-api` fetches, the CLI and
//! TUI present.
//!
//! - **[`model`]** — [`Product`] and [`Rating`], shaped exactly like the
//!   upstream JSON so the API crate deserializes straight into them.
//!
//! - **[`filter`]** — pure per-field filters plus [`FilterCriteria`],
//!   which composes them in a fixed order (category, search, rating,
//!   price). Filters never mutate or reorder their input.
//!
//! - **[`sort`]** — [`SortMode`] with its selector labels and a stable
//!   [`sort_products`] that treats an absent mode as the identity.
//!
//! - **[`aggregate`]** — the headline metrics ([`CatalogSummary`]).
//!
//! - **[`query`]** — [`CatalogQuery`], the filter-then-sort bundle both
//!   UIs execute.

pub mod aggregate;
pub mod filter;
pub mod model;
pub mod query;
pub mod sort;

// ── Primary re-exports ──────────────────────────────────────────────
pub use aggregate::{CatalogSummary, average_price, category_count, product_count, summarize};
pub use filter::{
    CategorySelection, FilterCriteria, PRICE_CEILING, by_category, by_min_rating, by_price_range,
    by_search,
};
pub use model::{Product, Rating};
pub use query::CatalogQuery;
pub use sort::{SortMode, sort_products};
