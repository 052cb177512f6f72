use thiserror::Error;

/// Authentication failure taxonomy.
///
/// Every variant except `StoreUnavailable` and `Internal` is a rejection of
/// the caller's credentials; the HTTP layer collapses those into one
/// uninformative 401.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature is invalid")]
    BadSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Unknown subject")]
    UnknownSubject,

    #[error("Invalid credentials")]
    BadCredential,

    #[error("Credential store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal authentication error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::Malformed => "malformed",
            AuthError::BadSignature => "bad_signature",
            AuthError::Expired => "expired",
            AuthError::UnknownSubject => "unknown_subject",
            AuthError::BadCredential => "bad_credential",
            AuthError::StoreUnavailable(_) => "store_unavailable",
            AuthError::Internal(_) => "internal",
        }
    }
}

impl From<auth::JwtError> for AuthError {
    fn from(err: auth::JwtError) -> Self {
        match err {
            auth::JwtError::Malformed(_) | auth::JwtError::MissingSubject => AuthError::Malformed,
            auth::JwtError::BadSignature => AuthError::BadSignature,
            auth::JwtError::Expired => AuthError::Expired,
            auth::JwtError::EncodingFailed(msg) => AuthError::Internal(msg),
        }
    }
}
