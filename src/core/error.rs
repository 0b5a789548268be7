use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum YfError {
    /// A network-level failure while talking to Yahoo.
    #[error("{context}: {source}")]
    Transport {
        /// What the client was doing when the transport failed.
        context: &'static str,
        /// The underlying HTTP client error.
        #[source]
        source: reqwest::Error,
    },

    /// The crumb endpoint answered with a non-200 status during the handshake.
    #[error("crumb request failed with status {status}")]
    Crumb {
        /// The HTTP status code observed on the crumb request.
        status: u16,
    },

    /// The handshake completed but produced unusable credentials.
    #[error("authentication error: {0}")]
    Auth(String),

    /// A 401/403 triggered a fresh handshake, and that handshake failed.
    #[error("re-authentication failed: {0}")]
    Reauth(#[source] Box<YfError>),

    /// The final response (after any auth retry) was not `200 OK`.
    #[error("API request failed with status {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error (crumb stripped).
        url: String,
        /// The response body, kept for diagnostics.
        body: String,
    },

    /// The response body did not match the expected JSON shape.
    #[error("parsing JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// Yahoo answered `200 OK` but the envelope carried an error object.
    #[error("yahoo error: {description}")]
    Provider {
        /// Provider error code, e.g. `Not Found`.
        code: String,
        /// Human-readable description supplied by the provider.
        description: String,
    },

    /// The request succeeded but returned no rows for the symbol.
    #[error("no {what} found for symbol {symbol:?}")]
    NoData {
        /// Which dataset was empty, e.g. `chart data`.
        what: &'static str,
        /// The symbol that was queried.
        symbol: String,
    },

    /// A caller-supplied argument was missing or out of range.
    #[error("{0}")]
    Validation(String),

    /// A provided URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl YfError {
    pub(crate) fn transport(context: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| Self::Transport { context, source }
    }

    /// Returns the HTTP status code carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Crumb { status } | Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
