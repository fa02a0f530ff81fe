//! # DID Key
//!
//! The `did:key` method is a DID method for static cryptographic keys. At
//! its core, it is based on expanding a cryptographic public key into a DID
//! Document.
//!
//! Document creation is deterministic: the same identifier and options
//! always produce the same document, with no lookup or stored state.
//!
//! See:
//!
//! - <https://w3c-ccg.github.io/did-method-key>
//! - <https://w3c.github.io/did-resolution>

mod convert;
mod create;
mod document;
mod error;
pub mod jwk;
pub mod key;
mod keyring;
mod resolve;
pub mod url;

pub use self::convert::ed25519_to_x25519;
pub use self::create::create_did_document;
pub use self::document::*;
pub use self::error::Error;
pub use self::key::Codec;
pub use self::keyring::{create_did_key, KeyPair};
pub use self::resolve::{resolve, ContentType, Metadata, Resolved};

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;
