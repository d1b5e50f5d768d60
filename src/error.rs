use thiserror::Error;

#[derive(Debug, Error)]
pub enum LumiereError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Missing or unusable API credential. Raised before any network call.
    #[error("Credential required: {0}")]
    CredentialError(String),

    #[error("Request error: {0}")]
    RequestError(String),

    /// The service answered but the response was unusable (for example no
    /// image part in any candidate).
    #[error("Response error: {0}")]
    ResponseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Non-success HTTP status from the Gemini API. The upstream message
    /// text is preserved verbatim so callers can classify it.
    #[error("Gemini API error (status {status}): {message}")]
    ApiError { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, LumiereError>;

/// Caller-facing classification of a batch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// The credential lacks access to the requested engine; the caller
    /// should prompt for re-authentication.
    AccessDenied,
    /// Everything else; surfaced verbatim for display.
    Other,
}

/// Substring patterns that indicate an authorization/access failure.
///
/// The Gemini API does not expose structured error codes through this
/// surface, so classification falls back to matching the upstream message
/// text. This is brittle against upstream wording changes; the table is
/// kept in one place so it can be audited and tested.
const ACCESS_DENIED_PATTERNS: &[&str] = &[
    "403",
    "PERMISSION_DENIED",
    "permission",
    "404",
    "Requested entity was not found",
];

/// Classifies an error's message text against the access-denied table.
pub fn classify_failure(error: &LumiereError) -> FailureClass {
    let message = error.to_string();
    if ACCESS_DENIED_PATTERNS
        .iter()
        .any(|pattern| message.contains(pattern))
    {
        FailureClass::AccessDenied
    } else {
        FailureClass::Other
    }
}
