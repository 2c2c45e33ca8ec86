use thiserror::Error;

/// Top-level error type for the `deltacloud-api` crate.
///
/// Covers every failure mode across the client: configuration, transport,
/// server-side rejections, and XML unmarshalling. All public operations
/// return this type (capability lookup excepted, which resolves failures to
/// [`Driver::Unknown`](crate::model::Driver::Unknown)).
#[derive(Debug, Error)]
pub enum Error {
    // ── Configuration ───────────────────────────────────────────────
    /// URL parsing error (base URL or action href).
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Input that parsed but cannot be turned into a usable request
    /// (non-http scheme, opaque base URL, bad action method, ...).
    #[error("Invalid request configuration for \"{url}\": {reason}")]
    Configuration { url: String, reason: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Credentials rejected by the server (HTTP 401/403).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Non-success HTTP status outside the auth range.
    #[error("Server returned HTTP {status} for {url}: {message}")]
    Status {
        status: u16,
        url: String,
        message: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// The response body is not well-formed XML.
    #[error("Malformed XML response: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Well-formed XML that does not match the expected resource shape.
    #[error("Unmarshalling error: {message}")]
    Unmarshal { message: String },

    // ── Operation context ───────────────────────────────────────────
    /// A failure annotated with the high-level operation it interrupted.
    #[error("could not {operation} on cloud at \"{base_url}\"")]
    Operation {
        operation: &'static str,
        base_url: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Shorthand for an [`Error::Unmarshal`] with a formatted message.
    pub(crate) fn unmarshal(message: impl Into<String>) -> Self {
        Self::Unmarshal {
            message: message.into(),
        }
    }

    /// Returns `true` if this is a "not found" error, looking through any
    /// operation-context wrapper.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Status { status: 404, .. } => true,
            Self::Operation { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// Returns `true` if this is a transient error worth retrying,
    /// looking through any operation-context wrapper.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status, .. } => matches!(status, 502 | 503 | 504),
            Self::Operation { source, .. } => source.is_transient(),
            _ => false,
        }
    }

    /// Returns `true` if the server rejected the configured credentials,
    /// looking through any operation-context wrapper.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::Authentication { .. } => true,
            Self::Operation { source, .. } => source.is_auth_failure(),
            _ => false,
        }
    }
}
