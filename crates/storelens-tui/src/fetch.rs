//! Catalog fetch — connects the storefront client to TUI actions.
//!
//! Runs as a one-shot background task at startup: fetches the product
//! list and category list, then reports the outcome as a single
//! [`Action`] through the TUI's action channel.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use storelens_api::{CatalogClient, Error};
use storelens_core::Product;

use crate::action::Action;

/// Fetch the full catalog: product list first, then category names.
async fn fetch_catalog(client: &CatalogClient) -> Result<(Vec<Product>, Vec<String>), Error> {
    let products = client.list_products().await?;
    let categories = client.list_categories().await?;
    Ok((products, categories))
}

/// Load the catalog once and dispatch [`Action::CatalogLoaded`] or
/// [`Action::FetchFailed`]. Returns quietly if cancelled mid-flight
/// (e.g. the user quits during startup).
pub async fn load_catalog(
    client: CatalogClient,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let outcome = tokio::select! {
        () = cancel.cancelled() => {
            debug!("catalog fetch cancelled");
            return;
        }
        outcome = fetch_catalog(&client) => outcome,
    };

    match outcome {
        Ok((products, categories)) => {
            debug!(
                products = products.len(),
                categories = categories.len(),
                "catalog loaded"
            );
            let _ = action_tx.send(Action::CatalogLoaded {
                products,
                categories,
            });
        }
        Err(e) => {
            warn!(error = %e, "failed to load catalog");
            let _ = action_tx.send(Action::FetchFailed(e.to_string()));
        }
    }
}
