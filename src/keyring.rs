//! # Keyring
//!
//! Ephemeral key pair generation for `did:key` creation. Generated secrets
//! are returned to the caller; persisting them is outside the scope of this
//! crate.

use anyhow::anyhow;
use ed25519_dalek::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use rand::rngs::OsRng;
use tracing::debug;

use crate::create::create_did_document;
use crate::document::{CreateOptions, Document};
use crate::error::Error;
use crate::key::{self, Codec};

/// An asymmetric key pair.
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// Raw public key bytes. Compressed form for elliptic curve keys.
    pub public_key: Vec<u8>,

    /// Raw secret key bytes.
    pub secret_key: Vec<u8>,
}

impl KeyPair {
    /// Generate a new key pair for the given key type.
    ///
    /// # Errors
    ///
    /// Returns an error if key generation is not supported for the key
    /// type.
    pub fn generate(codec: Codec) -> crate::Result<Self> {
        match codec {
            Codec::Ed25519 => {
                let signing_key = SigningKey::generate(&mut OsRng);
                Ok(Self {
                    public_key: signing_key.verifying_key().to_bytes().to_vec(),
                    secret_key: signing_key.to_bytes().to_vec(),
                })
            }
            Codec::Secp256k1 => {
                let secret_key = SecretKey::random(&mut OsRng);
                let public_key = secret_key.public_key().to_encoded_point(true);
                Ok(Self {
                    public_key: public_key.as_bytes().to_vec(),
                    secret_key: secret_key.to_bytes().to_vec(),
                })
            }
            _ => Err(Error::Other(anyhow!("key type not supported: {codec}"))),
        }
    }
}

/// Generate a fresh key pair and expand it into a `did:key` document.
///
/// The key pair is returned alongside the document so the caller can take
/// ownership of the secret.
///
/// # Errors
///
/// Returns an error if key generation is not supported for the key type or
/// if document creation fails for the generated key.
pub fn create_did_key(
    codec: Codec, options: CreateOptions,
) -> crate::Result<(Document, KeyPair)> {
    debug!("creating did:key for a fresh {codec} key");

    let keys = KeyPair::generate(codec)?;
    let multikey = key::encode(codec, &keys.public_key);
    let document = create_did_document(&format!("did:key:{multikey}"), options)?;

    Ok((document, keys))
}
