//! # Key Codec
//!
//! Multicodec-aware encoding and decoding of public keys for the `did:key`
//! method. Raw key bytes are prefixed with the registered multicodec tag for
//! their key type and multibase-encoded using base58-btc.
//!
//! See <https://w3c-ccg.github.io/did-method-key/#signature-method-creation-algorithm>

use std::fmt::{self, Display, Formatter};

use anyhow::anyhow;
use multibase::Base;

use crate::error::Error;

/// Multicodec prefix for an Ed25519 public key (`ed25519-pub`).
pub const ED25519_CODEC: [u8; 2] = [0xed, 0x01];

/// Multicodec prefix for an X25519 public key (`x25519-pub`).
pub const X25519_CODEC: [u8; 2] = [0xec, 0x01];

/// Multicodec prefix for a compressed secp256k1 public key (`secp256k1-pub`).
pub const SECP256K1_CODEC: [u8; 2] = [0xe7, 0x01];

/// Multicodec prefix for a compressed P-256 public key (`p256-pub`).
pub const P256_CODEC: [u8; 2] = [0x80, 0x24];

/// Multicodec prefix for a BLS12-381 G1 public key (`bls12_381-g1-pub`).
pub const BLS12381_G1_CODEC: [u8; 2] = [0xea, 0x01];

/// Multicodec prefix for a BLS12-381 G2 public key (`bls12_381-g2-pub`).
pub const BLS12381_G2_CODEC: [u8; 2] = [0xeb, 0x01];

/// Key types registered for use with the `did:key` method.
///
/// Only Ed25519 and secp256k1 keys can be expressed as verification methods
/// by this crate; the remaining types decode but carry no expected length
/// and fail the public key length gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Codec {
    /// Ed25519 public key.
    Ed25519,

    /// Compressed secp256k1 public key.
    Secp256k1,

    /// X25519 public key.
    X25519,

    /// Compressed P-256 public key.
    P256,

    /// BLS12-381 G1 public key.
    Bls12381G1,

    /// BLS12-381 G2 public key.
    Bls12381G2,
}

impl Codec {
    const ALL: [Self; 6] = [
        Self::Ed25519,
        Self::Secp256k1,
        Self::X25519,
        Self::P256,
        Self::Bls12381G1,
        Self::Bls12381G2,
    ];

    /// The multicodec prefix identifying keys of this type.
    #[must_use]
    pub const fn prefix(self) -> [u8; 2] {
        match self {
            Self::Ed25519 => ED25519_CODEC,
            Self::Secp256k1 => SECP256K1_CODEC,
            Self::X25519 => X25519_CODEC,
            Self::P256 => P256_CODEC,
            Self::Bls12381G1 => BLS12381_G1_CODEC,
            Self::Bls12381G2 => BLS12381_G2_CODEC,
        }
    }

    /// The expected raw public key length in bytes, where one is defined.
    #[must_use]
    pub const fn expected_length(self) -> Option<usize> {
        match self {
            Self::Ed25519 => Some(32),
            Self::Secp256k1 => Some(33),
            _ => None,
        }
    }

    /// Check the raw public key byte length is exactly the expected length
    /// for this key type. Key types with no expected length never validate.
    #[must_use]
    pub fn is_valid_public_key_length(self, key_bytes: &[u8]) -> bool {
        self.expected_length().is_some_and(|expected| key_bytes.len() == expected)
    }

    fn from_prefix(multi_bytes: &[u8]) -> Option<Self> {
        Self::ALL.into_iter().find(|codec| multi_bytes.starts_with(&codec.prefix()))
    }
}

impl Display for Codec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519 => write!(f, "Ed25519"),
            Self::Secp256k1 => write!(f, "Secp256k1"),
            Self::X25519 => write!(f, "X25519"),
            Self::P256 => write!(f, "P-256"),
            Self::Bls12381G1 => write!(f, "Bls12381G1"),
            Self::Bls12381G2 => write!(f, "Bls12381G2"),
        }
    }
}

/// Decode a multibase value into its key type and raw public key bytes.
///
/// An unrecognized multicodec prefix yields `None` for the key type, with
/// the decoded bytes passed through untouched. Callers decide whether the
/// absence of a known type is fatal.
///
/// # Errors
///
/// Returns an error if the value is not valid multibase or uses a base
/// other than base58-btc.
pub fn decode(multibase_value: &str) -> crate::Result<(Option<Codec>, Vec<u8>)> {
    let (base, multi_bytes) = multibase::decode(multibase_value)
        .map_err(|e| Error::Other(anyhow!("issue decoding multibase value: {e}")))?;
    if base != Base::Base58Btc {
        return Err(Error::Other(anyhow!("multibase base is not Base58Btc")));
    }

    match Codec::from_prefix(&multi_bytes) {
        Some(codec) => Ok((Some(codec), multi_bytes[codec.prefix().len()..].to_vec())),
        None => Ok((None, multi_bytes)),
    }
}

/// Encode raw public key bytes as a base58-btc multibase value, prefixed
/// with the multicodec tag for the key type.
#[must_use]
pub fn encode(codec: Codec, key_bytes: &[u8]) -> String {
    let mut multi_bytes = codec.prefix().to_vec();
    multi_bytes.extend_from_slice(key_bytes);
    multibase::encode(Base::Base58Btc, multi_bytes)
}

#[cfg(test)]
mod test {
    use super::*;

    const MULTIKEY: &str = "z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK";

    #[test]
    fn decode_ed25519() {
        let (codec, key_bytes) = decode(MULTIKEY).expect("should decode");
        assert_eq!(codec, Some(Codec::Ed25519));
        assert_eq!(key_bytes.len(), 32);
    }

    #[test]
    fn round_trip() {
        let (codec, key_bytes) = decode(MULTIKEY).expect("should decode");
        assert_eq!(encode(codec.unwrap(), &key_bytes), MULTIKEY);
    }

    #[test]
    fn round_trip_all_codecs() {
        let key_bytes = vec![7u8; 32];
        for codec in Codec::ALL {
            let decoded = decode(&encode(codec, &key_bytes)).expect("should decode");
            assert_eq!(decoded, (Some(codec), key_bytes.clone()));
        }
    }

    #[test]
    fn unknown_codec() {
        // not a registered public key prefix
        let mut multi_bytes = vec![0x55, 0x01];
        multi_bytes.extend_from_slice(&[7u8; 32]);
        let value = multibase::encode(Base::Base58Btc, &multi_bytes);

        let (codec, key_bytes) = decode(&value).expect("should decode");
        assert_eq!(codec, None);
        assert_eq!(key_bytes, multi_bytes);
    }

    #[test]
    fn wrong_base() {
        let value = multibase::encode(Base::Base64Url, [0xed, 0x01]);
        decode(&value).expect_err("should fail on non-base58btc base");
    }

    #[test]
    fn length_gate() {
        assert!(Codec::Ed25519.is_valid_public_key_length(&[0u8; 32]));
        assert!(!Codec::Ed25519.is_valid_public_key_length(&[0u8; 31]));
        assert!(Codec::Secp256k1.is_valid_public_key_length(&[0u8; 33]));
        assert!(!Codec::Secp256k1.is_valid_public_key_length(&[0u8; 32]));
        assert!(!Codec::X25519.is_valid_public_key_length(&[0u8; 32]));
    }
}
