// ── Core error types ──
//
// User-facing errors from shoplist-core. Consumers never see reqwest
// errors or serde messages directly; `From<shoplist_api::Error>`
// translates transport-layer failures. The stores keep the `Display`
// form of these as their `error` string.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach shopping-list service at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Not found: {identifier}")]
    NotFound { identifier: String },

    #[error("Invalid response from service: {message}")]
    InvalidResponse { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Whether the underlying failure is worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::ConnectionFailed { .. } | Self::Timeout => true,
            Self::Api { status, .. } => status.is_some_and(|s| s >= 500 || s == 429),
            _ => false,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<shoplist_api::Error> for CoreError {
    fn from(err: shoplist_api::Error) -> Self {
        match err {
            shoplist_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else if e.is_decode() {
                    CoreError::InvalidResponse {
                        message: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            shoplist_api::Error::Status { status: 404, body } => CoreError::NotFound {
                // json-server answers a missing record with `{}`.
                identifier: if body.trim().is_empty() || body.trim() == "{}" {
                    "resource".into()
                } else {
                    body
                },
            },
            shoplist_api::Error::Status { status, body } => CoreError::Api {
                message: format!("HTTP {status}: {body}"),
                status: Some(status),
            },
            shoplist_api::Error::Deserialization { message, body: _ } => {
                CoreError::InvalidResponse { message }
            }
            shoplist_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            shoplist_api::Error::ClientBuild(message) => CoreError::Config { message },
        }
    }
}
