//! # DID Document Creation
//!
//! Expands a `did:key` identifier into a complete DID document: the
//! identifier is validated against the method's grammar, the embedded
//! public key decoded and length-checked, and the signature verification
//! method built in the requested format. Optionally, an X25519 key
//! agreement method is derived from the Ed25519 key.
//!
//! See <https://w3c-ccg.github.io/did-method-key/#document-creation-algorithm>

use anyhow::anyhow;
use ed25519_dalek::PUBLIC_KEY_LENGTH;
use tracing::debug;

use crate::convert::ed25519_to_x25519;
use crate::document::{CreateOptions, Document, KeyFormat, MethodType, VerificationMethod};
use crate::error::Error;
use crate::jwk::create_jwk;
use crate::key::{self, Codec};
use crate::url::{is_valid_did, is_valid_did_url, parse_identifier, validate_identifier};

/// Create a DID document from a `did:key` identifier.
///
/// The document is assembled in full or not at all: every validation step
/// is a hard gate and no partial document is ever returned.
///
/// # Errors
///
/// Returns `Error::InvalidDid` if the identifier fails DID syntax or the
/// method's grammar, `Error::UnsupportedPublicKeyType` if the requested
/// format is not supported, `Error::InvalidPublicKeyLength` if the decoded
/// key does not match the expected length for its type, and
/// `Error::InvalidDidUrl` if a constructed verification method id fails
/// DID URL grammar.
pub fn create_did_document(identifier: &str, options: CreateOptions) -> crate::Result<Document> {
    debug!("creating DID document for {identifier}");

    if !is_valid_did(identifier) {
        return Err(Error::InvalidDid(identifier.to_string()));
    }
    let (scheme, method, version, multibase_value) = parse_identifier(identifier)?;
    validate_identifier(scheme, method, version, multibase_value)?;

    if !options.public_key_format.is_supported() {
        return Err(Error::UnsupportedPublicKeyType(options.public_key_format.to_string()));
    }
    // experimental formats are gated a second time on the flag
    if !options.enable_experimental_public_key_types
        && !options.public_key_format.is_supported()
    {
        return Err(Error::InvalidPublicKeyType(options.public_key_format.to_string()));
    }

    let signature_method =
        signature_method(identifier, multibase_value, options.public_key_format)?;
    let method_id = signature_method.id.clone();

    let key_agreement = if options.enable_encryption_key_derivation {
        vec![encryption_method(identifier, multibase_value, options.public_key_format)?]
    } else {
        vec![]
    };

    let document = Document {
        context: options.default_context,
        id: identifier.to_string(),
        verification_method: vec![signature_method],
        authentication: vec![method_id.clone()],
        assertion_method: vec![method_id.clone()],
        capability_delegation: vec![method_id.clone()],
        capability_invocation: vec![method_id],
        key_agreement,
    };

    debug!("DID document created for {}", document.id);
    Ok(document)
}

// Build the signature verification method from the identifier's embedded
// public key.
fn signature_method(
    identifier: &str, multibase_value: &str, public_key_format: MethodType,
) -> crate::Result<VerificationMethod> {
    let (codec, raw_key_bytes) = key::decode(multibase_value)?;
    let Some(codec) = codec else {
        return Err(Error::InvalidPublicKeyLength(multibase_value.to_string()));
    };
    if !codec.is_valid_public_key_length(&raw_key_bytes) {
        return Err(Error::InvalidPublicKeyLength(multibase_value.to_string()));
    }

    let id = format!("{identifier}#{multibase_value}");
    if !is_valid_did_url(&id) {
        return Err(Error::InvalidDidUrl(id));
    }

    let key = match public_key_format {
        MethodType::Multikey => KeyFormat::Multikey {
            public_key_multibase: multibase_value.to_string(),
        },
        MethodType::Ed25519VerificationKey2020 => KeyFormat::Ed25519VerificationKey2020 {
            public_key_multibase: multibase_value.to_string(),
        },
        MethodType::JsonWebKey2020 => KeyFormat::JsonWebKey2020 {
            public_key_jwk: create_jwk(codec, &raw_key_bytes)?,
        },
        MethodType::X25519KeyAgreementKey2020 | MethodType::EcdsaSecp256k1VerificationKey2019 => {
            return Err(Error::Other(anyhow!(
                "verification method not handled: {public_key_format}"
            )));
        }
    };

    Ok(VerificationMethod {
        id,
        controller: identifier.to_string(),
        key,
    })
}

// Build the key agreement verification method by deriving an X25519 key
// from the identifier's Ed25519 key.
//
// <https://w3c-ccg.github.io/did-method-key/#encryption-method-creation-algorithm>
fn encryption_method(
    identifier: &str, multibase_value: &str, public_key_format: MethodType,
) -> crate::Result<VerificationMethod> {
    let (codec, raw_key_bytes) = key::decode(multibase_value)?;
    let Some(codec) = codec else {
        return Err(Error::InvalidPublicKeyLength(multibase_value.to_string()));
    };
    // only Ed25519-length keys are eligible for derivation
    if codec == Codec::X25519 || raw_key_bytes.len() != PUBLIC_KEY_LENGTH {
        return Err(Error::InvalidPublicKeyLength(multibase_value.to_string()));
    }

    let encryption_key_bytes = ed25519_to_x25519(&raw_key_bytes)?;
    let encryption_key_multibase = key::encode(Codec::X25519, &encryption_key_bytes);

    let id = format!("{identifier}#{encryption_key_multibase}");
    if !is_valid_did_url(&id) {
        return Err(Error::InvalidDidUrl(id));
    }

    // The multibase formats expose the source Ed25519 key; the JWK format
    // carries the derived X25519 bytes under the source key's type.
    let key = match public_key_format {
        MethodType::Multikey => KeyFormat::Multikey {
            public_key_multibase: multibase_value.to_string(),
        },
        MethodType::Ed25519VerificationKey2020 => KeyFormat::Ed25519VerificationKey2020 {
            public_key_multibase: multibase_value.to_string(),
        },
        MethodType::JsonWebKey2020 => KeyFormat::JsonWebKey2020 {
            public_key_jwk: create_jwk(codec, &encryption_key_bytes)?,
        },
        MethodType::X25519KeyAgreementKey2020 | MethodType::EcdsaSecp256k1VerificationKey2019 => {
            return Err(Error::Other(anyhow!(
                "verification method not handled: {public_key_format}"
            )));
        }
    };

    Ok(VerificationMethod {
        id,
        controller: identifier.to_string(),
        key,
    })
}
