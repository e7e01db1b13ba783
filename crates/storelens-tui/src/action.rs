//! All possible UI actions. Actions are the sole mechanism for state mutation.

use storelens_core::Product;

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Catalog Data ───────────────────────────────────────────────
    CatalogLoaded {
        products: Vec<Product>,
        categories: Vec<String>,
    },
    FetchFailed(String),

    // ── Search ─────────────────────────────────────────────────────
    OpenSearch,
    CloseSearch,
    SearchInput(String),
    SearchSubmit,

    // ── Product Detail ─────────────────────────────────────────────
    OpenDetail(u64),
    CloseDetail,

    // ── Help ───────────────────────────────────────────────────────
    ToggleHelp,
}
