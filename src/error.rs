//! # Errors
//!
//! Typed errors for `did:key` operations. All variants are client-input
//! errors: deterministic, non-retriable, and correctable only by supplying
//! different input.

use thiserror::Error;

/// Errors returned by `did:key` operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The identifier fails DID syntax or one of its parts fails the
    /// method's grammar. The payload names the offending part or carries
    /// the rejected identifier.
    #[error("invalid DID: {0}")]
    InvalidDid(String),

    /// A constructed fragment identifier fails DID URL grammar.
    #[error("invalid DID URL: {0}")]
    InvalidDidUrl(String),

    /// The decoded key bytes do not match the expected length for their
    /// declared key type, or the type is unrecognized.
    #[error("invalid public key length: {0}")]
    InvalidPublicKeyLength(String),

    /// The requested verification method format is disallowed.
    #[error("invalid public key type: {0}")]
    InvalidPublicKeyType(String),

    /// The requested verification method format is not supported.
    #[error("unsupported public key type: {0}")]
    UnsupportedPublicKeyType(String),

    /// Catch-all for branch combinations that should be unreachable and
    /// for failures in the underlying codecs and curve arithmetic.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Error code for DID resolution metadata, per the DID Specification
    /// Registries.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidDid(_) => "invalidDid",
            Self::InvalidDidUrl(_) => "invalidDidUrl",
            Self::InvalidPublicKeyLength(_) => "invalidPublicKeyLength",
            Self::InvalidPublicKeyType(_) => "invalidPublicKeyType",
            Self::UnsupportedPublicKeyType(_) => "unsupportedPublicKeyType",
            Self::Other(_) => "internalError",
        }
    }

    /// Human-readable error detail.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidDid(msg)
            | Self::InvalidDidUrl(msg)
            | Self::InvalidPublicKeyLength(msg)
            | Self::InvalidPublicKeyType(msg)
            | Self::UnsupportedPublicKeyType(msg) => msg.clone(),
            Self::Other(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_code() {
        let err = Error::InvalidDid("method".into());
        assert_eq!(err.code(), "invalidDid");
        assert_eq!(err.message(), "method");
        assert_eq!(err.to_string(), "invalid DID: method");
    }
}
