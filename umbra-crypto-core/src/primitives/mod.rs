//! Scalar and point primitives over the ed25519 prime-order group.
//!
//! Arithmetic itself (`+`, `-`, `*`, negation, equality) comes straight from
//! `curve25519-dalek` and is constant-time for secret operands. This module adds
//! strict decoding, validation and random/key generation.
//!
//! ## Validity
//!
//! - A scalar is valid iff its 32 bytes are the canonical (reduced mod l) form.
//! - A point is valid iff it decompresses, re-compresses to the same bytes, and
//!   has no small-order component. The identity point is valid.

pub mod generators;

use curve25519_dalek::{
    edwards::{CompressedEdwardsY, EdwardsPoint},
    traits::Identity,
    Scalar,
};
use rand_core::{OsRng, RngCore};

use crate::hash::hash_to_point;
use crate::types::errors::{CryptoError, CryptoResult};
use crate::types::keys::PublicKey;

pub use generators::{G, H, H_BYTES};

/// The identity scalar.
pub const ZERO: Scalar = Scalar::ZERO;

/// The identity point `Z`.
#[must_use]
pub fn identity() -> EdwardsPoint {
    EdwardsPoint::identity()
}

/// Copy a slice into a fixed 32-byte array, reporting `field` on length mismatch.
pub(crate) fn to_array32(bytes: &[u8], field: &str) -> CryptoResult<[u8; 32]> {
    bytes.try_into().map_err(|_| CryptoError::InvalidLength {
        field: field.into(),
        expected: 32,
        actual: bytes.len(),
    })
}

/// Decode a canonical scalar.
///
/// # Errors
/// - `InvalidLength` if `bytes` is not 32 bytes
/// - `InvalidScalar` if the value is not reduced mod l
pub fn decode_scalar(bytes: &[u8]) -> CryptoResult<Scalar> {
    let arr = to_array32(bytes, "scalar")?;
    Option::<Scalar>::from(Scalar::from_canonical_bytes(arr))
        .ok_or_else(|| CryptoError::InvalidScalar("not canonically reduced".into()))
}

/// Decode a compressed, torsion-free point.
///
/// # Errors
/// - `InvalidLength` if `bytes` is not 32 bytes
/// - `InvalidPoint` if the bytes are off-curve, non-canonical, or torsioned
pub fn decode_point(bytes: &[u8]) -> CryptoResult<EdwardsPoint> {
    let compressed = CompressedEdwardsY(to_array32(bytes, "point")?);
    let point = compressed
        .decompress()
        .ok_or_else(|| CryptoError::InvalidPoint("point decompression failed".into()))?;

    if point.compress() != compressed {
        return Err(CryptoError::InvalidPoint("non-canonical encoding".into()));
    }
    if !point.is_torsion_free() {
        return Err(CryptoError::InvalidPoint("point has a torsion component".into()));
    }

    Ok(point)
}

/// Whether `bytes` is a canonical scalar.
#[must_use]
pub fn check_scalar(bytes: &[u8]) -> bool {
    decode_scalar(bytes).is_ok()
}

/// Whether `bytes` is a valid, torsion-free point.
#[must_use]
pub fn check_point(bytes: &[u8]) -> bool {
    decode_point(bytes).is_ok()
}

/// Parse a scalar from a 64-character hex string.
///
/// # Errors
/// Hex, length and canonicity failures from [`decode_scalar`].
pub fn scalar_from_hex(input: &str) -> CryptoResult<Scalar> {
    decode_scalar(&hex::decode(input)?)
}

/// Lowercase hex form of a scalar.
#[must_use]
pub fn scalar_to_hex(scalar: &Scalar) -> String {
    hex::encode(scalar.as_bytes())
}

/// Uniformly random scalar from the OS RNG.
#[must_use]
pub fn random_scalar() -> Scalar {
    Scalar::random(&mut OsRng)
}

/// `count` random scalars.
#[must_use]
pub fn random_scalars(count: usize) -> Vec<Scalar> {
    (0..count).map(|_| random_scalar()).collect()
}

/// A random point with unknown discrete log, typed for use as a ring decoy.
#[must_use]
pub fn random_point() -> PublicKey {
    let mut seed = [0u8; 32];
    OsRng.fill_bytes(&mut seed);
    PublicKey::from_point_unchecked(hash_to_point(&seed))
}

/// `count` random points.
#[must_use]
pub fn random_points(count: usize) -> Vec<PublicKey> {
    (0..count).map(|_| random_point()).collect()
}

/// Public key `P = x*G` for a secret key `x`.
#[must_use]
pub fn secret_key_to_public_key(secret_key: &Scalar) -> PublicKey {
    PublicKey::from_point_unchecked(EdwardsPoint::mul_base(secret_key))
}

/// Fresh random key pair `(P, x)`.
#[must_use]
pub fn generate_keys() -> (PublicKey, Scalar) {
    let secret_key = random_scalar();
    (secret_key_to_public_key(&secret_key), secret_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_scalar_canonical() {
        assert!(check_scalar(
            &hex::decode("bf356a444a9db6e5c396a36eb7207e2647c5f89db88b1e2218844bb54661910d")
                .unwrap()
        ));
    }

    #[test]
    fn test_check_scalar_rejects_unreduced() {
        // High byte 0x58 puts the value above the group order.
        assert!(!check_scalar(
            &hex::decode("9f18b169834781952bdb781384147db67b1674a32103950c23491ad2ca850258")
                .unwrap()
        ));
    }

    #[test]
    fn test_check_scalar_wrong_length() {
        assert!(matches!(
            decode_scalar(&[0u8; 31]),
            Err(CryptoError::InvalidLength { actual: 31, .. })
        ));
    }

    #[test]
    fn test_generated_public_key_is_valid_point() {
        let (public_key, secret_key) = generate_keys();
        assert!(check_point(&public_key.to_bytes()));
        assert!(check_scalar(secret_key.as_bytes()));
        assert_eq!(secret_key_to_public_key(&secret_key), public_key);
    }

    #[test]
    fn test_identity_is_valid_point() {
        assert!(check_point(&identity().compress().to_bytes()));
    }

    #[test]
    fn test_torsion_point_rejected() {
        // (0, -1) has order 2.
        let mut bytes = [0u8; 32];
        bytes[0] = 0xec;
        bytes[1..31].fill(0xff);
        bytes[31] = 0x7f;
        assert!(matches!(
            decode_point(&bytes),
            Err(CryptoError::InvalidPoint(_))
        ));
    }

    #[test]
    fn test_random_points_are_distinct_and_valid() {
        let points = random_points(4);
        assert_eq!(points.len(), 4);
        for point in &points {
            assert!(check_point(&point.to_bytes()));
        }
        assert_ne!(points[0], points[1]);
    }

    #[test]
    fn test_scalar_hex_round_trip() {
        let scalar = random_scalar();
        assert_eq!(scalar_from_hex(&scalar_to_hex(&scalar)).unwrap(), scalar);
    }
}
