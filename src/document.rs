//! # DID Document
//!
//! A DID Document is a JSON-LD document that contains information related to
//! a DID.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::jwk::PublicKeyJwk;

/// Context URIs applied to every DID document, in order.
pub const DEFAULT_CONTEXT: [&str; 3] = [
    "https://www.w3.org/ns/did/v1",
    "https://w3id.org/security/suites/ed25519-2020/v1",
    "https://w3id.org/security/suites/x25519-2020/v1",
];

/// DID Document
///
/// Constructed once per creation request and immutable thereafter. Every
/// field is serialized, including empty verification relationships.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// The context of the DID document.
    #[serde(rename = "@context")]
    pub context: Vec<String>,

    /// The DID for a particular DID subject.
    pub id: String,

    /// The set of verification methods for the DID subject. Holds the
    /// signature verification method derived from the DID's embedded key.
    pub verification_method: Vec<VerificationMethod>,

    /// The `authentication` verification relationship: how the DID subject
    /// is expected to be authenticated.
    ///
    /// <https://www.w3.org/TR/did-core/#authentication>
    pub authentication: Vec<String>,

    /// The `assertionMethod` verification relationship: how the DID subject
    /// is expected to express claims.
    ///
    /// <https://www.w3.org/TR/did-core/#assertion>
    pub assertion_method: Vec<String>,

    /// The `capabilityDelegation` verification relationship: how the DID
    /// subject delegates a cryptographic capability to another party.
    ///
    /// <https://www.w3.org/TR/did-core/#capability-delegation>
    pub capability_delegation: Vec<String>,

    /// The `capabilityInvocation` verification relationship: how the DID
    /// subject invokes a cryptographic capability.
    ///
    /// <https://www.w3.org/TR/did-core/#capability-invocation>
    pub capability_invocation: Vec<String>,

    /// The `keyAgreement` verification relationship: how an entity can
    /// generate encryption material for the DID subject. Populated with a
    /// derived X25519 verification method when encryption key derivation is
    /// enabled.
    ///
    /// <https://www.w3.org/TR/did-core/#key-agreement>
    pub key_agreement: Vec<VerificationMethod>,
}

/// A cryptographic public key entry in a DID document, usable to
/// authenticate or authorize interactions with the DID subject.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    /// A DID URL that identifies the verification method.
    pub id: String,

    /// The DID of the controller of the verification method.
    pub controller: String,

    /// The format of the public key material.
    #[serde(flatten)]
    pub key: KeyFormat,
}

/// The format of the public key material. The serialized `type` carries the
/// variant name; each variant populates exactly the key field its type
/// calls for.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type")]
#[serde(rename_all_fields = "camelCase")]
pub enum KeyFormat {
    /// The key is encoded as a Multibase string.
    Multikey {
        /// The public key encoded as a Multibase.
        public_key_multibase: String,
    },

    /// The key is an Ed25519 verification key, encoded as a Multibase
    /// string.
    Ed25519VerificationKey2020 {
        /// The public key encoded as a Multibase.
        public_key_multibase: String,
    },

    /// The key is encoded as a JWK.
    JsonWebKey2020 {
        /// The public key encoded as a JWK.
        public_key_jwk: PublicKeyJwk,
    },
}

impl KeyFormat {
    /// The multibase-encoded public key, where the format carries one.
    #[must_use]
    pub fn multibase(&self) -> Option<&str> {
        match self {
            Self::Multikey { public_key_multibase }
            | Self::Ed25519VerificationKey2020 { public_key_multibase } => {
                Some(public_key_multibase)
            }
            Self::JsonWebKey2020 { .. } => None,
        }
    }

    /// The public key JWK, where the format carries one.
    #[must_use]
    pub const fn jwk(&self) -> Option<&PublicKeyJwk> {
        match self {
            Self::JsonWebKey2020 { public_key_jwk } => Some(public_key_jwk),
            _ => None,
        }
    }
}

/// Verification method types supported by this library. SHOULD be
/// registered in the
/// [DID Specification Registries](https://www.w3.org/TR/did-spec-registries).
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
pub enum MethodType {
    /// JSON Web Key (JWK), version 2020.
    #[default]
    JsonWebKey2020,

    /// Generic Multi-key format.
    Multikey,

    /// `ED25519` Verification key, version 2020.
    Ed25519VerificationKey2020,

    /// `X25519` Key Agreement Key, version 2020.
    X25519KeyAgreementKey2020,

    /// Secp256k1 Verification Key, version 2019.
    EcdsaSecp256k1VerificationKey2019,
}

impl MethodType {
    /// Membership in the set of formats a document can be built with.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(
            self,
            Self::Multikey | Self::JsonWebKey2020 | Self::Ed25519VerificationKey2020
        )
    }
}

impl Display for MethodType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::JsonWebKey2020 => write!(f, "JsonWebKey2020"),
            Self::Multikey => write!(f, "Multikey"),
            Self::Ed25519VerificationKey2020 => write!(f, "Ed25519VerificationKey2020"),
            Self::X25519KeyAgreementKey2020 => write!(f, "X25519KeyAgreementKey2020"),
            Self::EcdsaSecp256k1VerificationKey2019 => {
                write!(f, "EcdsaSecp256k1VerificationKey2019")
            }
        }
    }
}

/// Options that can be provided when creating a DID document.
///
/// Callers may supply a partial options object; unset fields take their
/// default values.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOptions {
    /// Verification method format for the document's signature method.
    pub public_key_format: MethodType,

    /// Enable experimental public key types. SHOULD be set to "false".
    pub enable_experimental_public_key_types: bool,

    /// Context URIs for the DID document.
    pub default_context: Vec<String>,

    /// Will add a `keyAgreement` entry to the DID document.
    pub enable_encryption_key_derivation: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            public_key_format: MethodType::JsonWebKey2020,
            enable_experimental_public_key_types: false,
            default_context: DEFAULT_CONTEXT.map(String::from).to_vec(),
            enable_encryption_key_derivation: false,
        }
    }
}
