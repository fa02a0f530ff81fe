//! # Identifier Grammar
//!
//! Destructuring and validation of `did:key` identifiers and DID URLs
//! against the method's fixed grammar.
//!
//! A DID URL is of the form
//!
//! `did:<method>:<method-specific-id>[/<path>][?<query>][#<fragment>]`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

// Generic DID URL grammar, used only to report overall validity.
static DID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^did:[a-z0-9]+:[a-zA-Z0-9.%-]+(:[a-zA-Z0-9.%-]+)*(;[a-zA-Z0-9_.:%-]+=[a-zA-Z0-9_.:%-]*)*(/[^#?]*)?(\?[^#]*)?(#.*)?$",
    )
    .expect("should compile")
});

// A DID URL naming a document-internal resource: a non-empty fragment is
// required.
static DID_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^did:[a-z0-9]+:[a-zA-Z0-9.%-]+#[a-zA-Z0-9_.-]+$").expect("should compile")
});

/// Parse an identifier into its `(scheme, method, version, multibase value)`
/// parts.
///
/// A three-part identifier `did:key:<multibase>` omits the version, which
/// defaults to `"1"`.
///
/// # Errors
///
/// Returns `Error::InvalidDid` if the identifier does not split into three
/// or four parts.
pub fn parse_identifier(identifier: &str) -> crate::Result<(&str, &str, &str, &str)> {
    let parts = identifier.split(':').collect::<Vec<_>>();
    match parts.as_slice() {
        &[scheme, method, multibase_value] => Ok((scheme, method, "1", multibase_value)),
        &[scheme, method, version, multibase_value] => {
            Ok((scheme, method, version, multibase_value))
        }
        _ => Err(Error::InvalidDid(identifier.to_string())),
    }
}

/// Validate the parts of a `did:key` identifier against the method's
/// grammar.
///
/// # Errors
///
/// Returns `Error::InvalidDid` naming the first offending part: the scheme
/// must be `did`, the method `key`, the version a positive integer, and the
/// multibase value must carry the base58-btc prefix `z`.
pub fn validate_identifier(
    scheme: &str, method: &str, version: &str, multibase_value: &str,
) -> crate::Result<()> {
    if scheme != "did" {
        return Err(Error::InvalidDid("scheme".into()));
    }
    if method != "key" {
        return Err(Error::InvalidDid("method".into()));
    }
    if !version.parse::<u64>().is_ok_and(|v| v > 0) {
        return Err(Error::InvalidDid("version".into()));
    }
    if !multibase_value.starts_with('z') {
        return Err(Error::InvalidDid("multibase value".into()));
    }
    Ok(())
}

/// Report whether a string is a valid DID, per the generic DID grammar.
#[must_use]
pub fn is_valid_did(did: &str) -> bool {
    DID_REGEX.is_match(did)
}

/// Report whether a string is a valid DID URL with a non-empty fragment.
#[must_use]
pub fn is_valid_did_url(url: &str) -> bool {
    DID_URL_REGEX.is_match(url)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_canonicalizes_version() {
        let parts = parse_identifier("did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK")
            .expect("should parse");
        assert_eq!(
            parts,
            ("did", "key", "1", "z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK")
        );
    }

    #[test]
    fn parse_versioned() {
        let parts = parse_identifier("did:key:2:z123").expect("should parse");
        assert_eq!(parts, ("did", "key", "2", "z123"));
    }

    #[test]
    fn parse_invalid() {
        parse_identifier("did:key").expect_err("should fail on two parts");
        parse_identifier("did:key:1:z123:extra").expect_err("should fail on five parts");
    }

    #[test]
    fn validate_valid_parts() {
        validate_identifier("did", "key", "1", "z123").expect("should validate");
    }

    #[test]
    fn validate_scheme() {
        let err = validate_identifier("invalid", "key", "1", "z123").expect_err("should fail");
        assert!(matches!(err, Error::InvalidDid(part) if part == "scheme"));
    }

    #[test]
    fn validate_method() {
        let err = validate_identifier("did", "invalid", "1", "z123").expect_err("should fail");
        assert!(matches!(err, Error::InvalidDid(part) if part == "method"));
    }

    #[test]
    fn validate_version() {
        let err = validate_identifier("did", "key", "0", "z123").expect_err("should fail");
        assert!(matches!(err, Error::InvalidDid(part) if part == "version"));
        let err = validate_identifier("did", "key", "invalid", "z123").expect_err("should fail");
        assert!(matches!(err, Error::InvalidDid(part) if part == "version"));
    }

    #[test]
    fn validate_multibase() {
        let err = validate_identifier("did", "key", "1", "invalid").expect_err("should fail");
        assert!(matches!(err, Error::InvalidDid(part) if part == "multibase value"));
    }

    #[test]
    fn valid_dids() {
        assert!(is_valid_did("did:key:z6MkpTHR8VNsBxYAAWHut2Geadd9jSwuBV8xRoAnwWsdvktH"));
        assert!(is_valid_did("did:example:123"));
        assert!(!is_valid_did("invalid:did"));
        assert!(!is_valid_did("did:key"));
    }

    #[test]
    fn valid_did_urls() {
        assert!(is_valid_did_url("did:key:123#key-1"));
        assert!(is_valid_did_url("did:example:123#key-1"));
        assert!(!is_valid_did_url("invalid-url"));
        assert!(!is_valid_did_url("did:key:123"));
        assert!(!is_valid_did_url("did:key:123#"));
    }
}
