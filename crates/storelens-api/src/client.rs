// Hand-crafted async HTTP client for the storefront catalog API.
//
// Endpoints: /products and /products/categories, both plain GETs.

use serde::de::DeserializeOwned;
use storelens_core::Product;
use tracing::debug;
use url::Url;

use crate::Error;

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the storefront catalog.
///
/// Thin by design: one GET per call, JSON straight into the domain
/// types. No retries, no caching, no auth headers. Failures come back
/// as [`Error`] and the caller decides how to report them.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for `base_url` (e.g. `https://fakestoreapi.com`).
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client` (caller manages its settings).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Parse the base URL and guarantee a trailing slash so relative
    /// joins land under it.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"products"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/`, so joining `products/…` works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = body_preview(&body);
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(Error::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    // ── Catalog endpoints ─────────────────────────────────────────────

    /// Fetch the full product list. `GET /products`.
    pub async fn list_products(&self) -> Result<Vec<Product>, Error> {
        self.get("products").await
    }

    /// Fetch the category names. `GET /products/categories`.
    pub async fn list_categories(&self) -> Result<Vec<String>, Error> {
        self.get("products/categories").await
    }
}

/// First 200 bytes of `body`, backed off to a char boundary so the
/// slice cannot panic on multibyte payloads.
fn body_preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_backs_off_to_a_char_boundary() {
        let body = format!("{}⭐⭐⭐", "x".repeat(199));
        let preview = body_preview(&body);
        assert!(preview.len() <= 200);
        assert!(body.starts_with(preview));
    }

    #[test]
    fn preview_keeps_short_bodies_whole() {
        assert_eq!(body_preview("not json"), "not json");
    }
}
