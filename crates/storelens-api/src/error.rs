use thiserror::Error;

/// Top-level error type for the `storelens-api` crate.
///
/// One taxonomy covers every way a fetch can fail: the connection, the
/// status line, and the payload. The CLI and TUI map these into
/// user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Upstream status ─────────────────────────────────────────────
    /// Non-2xx response, with whatever body the storefront sent.
    #[error("Storefront returned HTTP {status}")]
    Status { status: u16, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` when the failure happened before any response
    /// arrived (DNS failure, refused or timed-out connection).
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect() || e.is_timeout())
    }
}
