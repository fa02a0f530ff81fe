//! # DID Key Resolver
//!
//! The `did:key` method requires no network lookup: resolution expands the
//! public key embedded in the DID into a DID document via the document
//! creation algorithm.
//!
//! See:
//!
//! - <https://w3c-ccg.github.io/did-method-key>
//! - <https://w3c.github.io/did-resolution>

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::create::create_did_document;
use crate::document::{CreateOptions, Document};
use crate::error::Error;

static DID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^did:key:z[a-km-zA-HJ-NP-Z1-9]+$").expect("should compile")
});

/// Resolve a `did:key` DID into a DID document.
///
/// Per the method specification, resolution delegates to the document
/// creation algorithm, using default options when none are supplied.
///
/// # Errors
///
/// Returns `Error::InvalidDid` if the DID does not match the method's
/// pattern, or any error the creation algorithm raises for the embedded
/// key.
pub fn resolve(did: &str, options: Option<CreateOptions>) -> crate::Result<Resolved> {
    if !DID_REGEX.is_match(did) {
        return Err(Error::InvalidDid("DID is not a valid did:key".into()));
    }

    let document = create_did_document(did, options.unwrap_or_default())?;

    Ok(Resolved {
        context: "https://w3id.org/did-resolution/v1".into(),
        metadata: Metadata {
            content_type: ContentType::DidLdJson,
            additional: Some(json!({
                "pattern": "^did:key:z[a-km-zA-HJ-NP-Z1-9]+$",
                "did": {
                    "didString": did,
                    "methodSpecificId": &did[8..],
                    "method": "key"
                }
            })),
            ..Metadata::default()
        },
        document: Some(document),
    })
}

/// Returned by `resolve`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved {
    /// The DID resolution context.
    #[serde(rename = "@context")]
    pub context: String,

    /// Resolution metadata.
    pub metadata: Metadata,

    /// The resolved DID document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
}

/// DID resolution metadata.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// The Media Type of the returned resource.
    pub content_type: ContentType,

    /// The error code from the resolution process, if applicable. Values
    /// SHOULD be registered in the DID Specification Registries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// A human-readable explanation of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Additional information about the resolution process.
    #[serde(flatten)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<Value>,
}

/// The Media Type of the returned resource.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub enum ContentType {
    /// JSON-LD representation of a DID document.
    #[default]
    #[serde(rename = "application/did+ld+json")]
    DidLdJson,
}
