//! # JSON Web Key
//!
//! Conversion of raw public key bytes into JWK form.

use anyhow::anyhow;
use base64ct::{Base64UrlUnpadded, Encoding};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::key::Codec;

/// JWK key types.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum KeyType {
    /// Octet key pair (Edwards-curve keys).
    #[default]
    #[serde(rename = "OKP")]
    Okp,

    /// Elliptic curve key pair.
    #[serde(rename = "EC")]
    Ec,
}

/// JWK cryptographic curves.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum Curve {
    /// Ed25519 curve.
    #[default]
    Ed25519,

    /// secp256k1 (Koblitz) curve.
    #[serde(rename = "secp256k1")]
    Secp256K1,
}

/// Algorithms intended for use with the key.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum Algorithm {
    /// EdDSA using Ed25519.
    #[serde(rename = "EdDSA")]
    EdDsa,

    /// ECDSA using secp256k1 and SHA-256.
    #[serde(rename = "ES256K")]
    Es256K,
}

/// A public key in JWK format.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PublicKeyJwk {
    /// Key type.
    pub kty: KeyType,

    /// Cryptographic curve.
    pub crv: Curve,

    /// Algorithm intended for use with the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alg: Option<Algorithm>,

    /// The x-coordinate of an elliptic curve point, or the public key bytes
    /// for an octet key pair. Base64url-encoded, unpadded.
    pub x: String,

    /// The y-coordinate of an elliptic curve point. Base64url-encoded,
    /// unpadded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
}

/// Convert raw public key bytes into a JWK.
///
/// Compressed secp256k1 keys are decompressed to recover both affine
/// coordinates.
///
/// # Errors
///
/// Returns an error if the key type has no JWK representation or if the
/// bytes are not a valid compressed secp256k1 point.
pub fn create_jwk(codec: Codec, key_bytes: &[u8]) -> crate::Result<PublicKeyJwk> {
    match codec {
        Codec::Secp256k1 => {
            let public_key = k256::PublicKey::from_sec1_bytes(key_bytes)
                .map_err(|e| Error::Other(anyhow!("issue decompressing secp256k1 point: {e}")))?;
            let point = public_key.to_encoded_point(false);
            let (Some(x), Some(y)) = (point.x(), point.y()) else {
                return Err(Error::Other(anyhow!("secp256k1 point has no affine coordinates")));
            };
            Ok(PublicKeyJwk {
                kty: KeyType::Ec,
                crv: Curve::Secp256K1,
                alg: Some(Algorithm::Es256K),
                x: Base64UrlUnpadded::encode_string(x.as_slice()),
                y: Some(Base64UrlUnpadded::encode_string(y.as_slice())),
            })
        }
        Codec::Ed25519 => Ok(PublicKeyJwk {
            kty: KeyType::Okp,
            crv: Curve::Ed25519,
            alg: Some(Algorithm::EdDsa),
            x: Base64UrlUnpadded::encode_string(key_bytes),
            y: None,
        }),
        _ => Err(Error::Other(anyhow!("unsupported multicodec value: {codec}"))),
    }
}
