//! CLI error types with miette diagnostics.
//!
//! Maps `storelens-api` failures into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use storelens_api::Error as ApiError;

/// Process exit codes for error reporting.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the storefront at {url}")]
    #[diagnostic(
        code(storelens::connection_failed),
        help(
            "Check your network connection and the base URL.\n\
             URL: {url}\n\
             Override with --base-url (-u) or STORELENS_BASE_URL."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Upstream ─────────────────────────────────────────────────────

    #[error("Storefront returned HTTP {status}")]
    #[diagnostic(
        code(storelens::upstream_status),
        help(
            "The storefront answered, but not with catalog data.\n\
             Response: {body}"
        )
    )]
    UpstreamStatus { status: u16, body: String },

    #[error("Storefront payload could not be decoded: {message}")]
    #[diagnostic(
        code(storelens::bad_payload),
        help("The endpoint may have changed shape. Run with -vv to log request URLs.")
    )]
    BadPayload { message: String },

    #[error("Request failed: {message}")]
    #[diagnostic(code(storelens::request_failed))]
    Fetch { message: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("Product {id} not found")]
    #[diagnostic(
        code(storelens::not_found),
        help("Run: storelens products list to see available ids")
    )]
    ProductNotFound { id: u64 },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(storelens::validation))]
    Validation { field: String, reason: String },

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::ProductNotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ApiError → CliError mapping ──────────────────────────────────────

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        let connection = err.is_connection();
        match err {
            ApiError::Transport(e) => {
                let url = e.url().map_or_else(|| "(unknown)".to_owned(), ToString::to_string);
                if connection {
                    Self::ConnectionFailed {
                        url,
                        source: Box::new(e),
                    }
                } else {
                    Self::Fetch {
                        message: e.to_string(),
                    }
                }
            }

            ApiError::InvalidUrl(e) => Self::Validation {
                field: "base-url".into(),
                reason: e.to_string(),
            },

            ApiError::Status { status, body } => Self::UpstreamStatus {
                status,
                body: trim_body(&body),
            },

            ApiError::Deserialization { message, .. } => Self::BadPayload { message },
        }
    }
}

/// Collapse an upstream response body into a one-line preview fit for
/// help text.
fn trim_body(body: &str) -> String {
    let one_line = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if one_line.is_empty() {
        return "<empty body>".to_owned();
    }
    let mut preview: String = one_line.chars().take(120).collect();
    if one_line.chars().count() > 120 {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_map_by_variant() {
        let not_found = CliError::ProductNotFound { id: 7 };
        assert_eq!(not_found.exit_code(), exit_code::NOT_FOUND);

        let usage = CliError::Validation {
            field: "min-rating".into(),
            reason: "out of range".into(),
        };
        assert_eq!(usage.exit_code(), exit_code::USAGE);

        let upstream = CliError::UpstreamStatus {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(upstream.exit_code(), exit_code::GENERAL);
    }

    #[test]
    fn status_errors_carry_a_trimmed_body() {
        let api = ApiError::Status {
            status: 503,
            body: format!("  line one\n  {}  ", "x".repeat(300)),
        };
        match CliError::from(api) {
            CliError::UpstreamStatus { status, body } => {
                assert_eq!(status, 503);
                assert!(body.starts_with("line one"));
                assert!(body.ends_with("..."));
                assert!(!body.contains('\n'));
            }
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
    }

    #[test]
    fn empty_bodies_get_a_placeholder() {
        assert_eq!(trim_body("   \n  "), "<empty body>");
    }
}
