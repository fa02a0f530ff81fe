//! # Curve Conversion
//!
//! Conversion of an Ed25519 public key (Edwards form) to its X25519
//! counterpart (Montgomery form) for key agreement use. The curves are
//! related by a birational map: `u = (1 + y) / (1 - y)` over the shared
//! prime field.

use anyhow::anyhow;
use curve25519_dalek::edwards::CompressedEdwardsY;
use curve25519_dalek::traits::IsIdentity;

use crate::error::Error;

/// Convert an Ed25519 public key to its X25519 form.
///
/// Returns the Montgomery u-coordinate as a 32-byte little-endian value.
///
/// # Errors
///
/// Returns an error if the bytes are not a 32-byte compressed Edwards
/// point, do not decompress to a point on the curve, or encode the
/// identity. At y = 1 the map's denominator `(1 - y)` is not invertible,
/// so the identity has no Montgomery image.
pub fn ed25519_to_x25519(key_bytes: &[u8]) -> crate::Result<[u8; 32]> {
    let edwards_y = CompressedEdwardsY::from_slice(key_bytes)
        .map_err(|e| Error::Other(anyhow!("public key is not Edwards Y: {e}")))?;
    let Some(edwards_pt) = edwards_y.decompress() else {
        return Err(Error::Other(anyhow!("Edwards Y cannot be decompressed to point")));
    };
    if edwards_pt.is_identity() {
        return Err(Error::Other(anyhow!("Edwards point has no Montgomery form")));
    }
    Ok(edwards_pt.to_montgomery().to_bytes())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::key;

    const MULTIKEY: &str = "z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK";

    #[test]
    fn convert() {
        let (_, key_bytes) = key::decode(MULTIKEY).expect("should decode");
        let x25519_bytes = ed25519_to_x25519(&key_bytes).expect("should convert");
        assert_ne!(x25519_bytes.to_vec(), key_bytes);
    }

    #[test]
    fn deterministic() {
        let (_, key_bytes) = key::decode(MULTIKEY).expect("should decode");
        assert_eq!(
            ed25519_to_x25519(&key_bytes).expect("should convert"),
            ed25519_to_x25519(&key_bytes).expect("should convert")
        );
    }

    #[test]
    fn identity_rejected() {
        // compressed encoding of the identity: y = 1
        let mut identity = [0u8; 32];
        identity[0] = 0x01;
        ed25519_to_x25519(&identity).expect_err("should fail on identity point");
    }

    #[test]
    fn wrong_length() {
        ed25519_to_x25519(&[0u8; 31]).expect_err("should fail on short key");
    }
}
