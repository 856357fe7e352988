//! Reasons a launch request fails signature verification.

/// Why a launch request could not be verified or signed.
///
/// [`crate::validate`] collapses all of these into `false`; use
/// [`crate::verify`] when the reason matters (audit logs, debugging).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("request body carries no oauth_signature")]
    MissingSignature,

    #[error("request has no HTTP method")]
    MissingMethod,

    #[error("launch URL cannot be determined from the request")]
    MissingUrl,

    #[error("signing key rejected by HMAC-SHA1")]
    InvalidKey,

    #[error("oauth_consumer_key does not match the configured consumer")]
    ConsumerKeyMismatch,

    #[error("oauth_signature does not match the request")]
    SignatureMismatch,
}

pub type Result<T> = std::result::Result<T, Error>;
