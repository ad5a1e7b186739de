//! Hash-to-scalar, hash-to-point and structural hashing.
//!
//! - `Hs` is Keccak-256 with the digest interpreted as a scalar mod l.
//! - `Hp` is Monero's `ge_fromfe_frombytes_vartime` map followed by `*8`.
//! - Structural hashes of serialized records use SHA3-256.
//!
//! CLSAG transcripts hash under 32-byte padded separators; mask derivations
//! prefix their raw domain string.

use curve25519_dalek::{edwards::EdwardsPoint, Scalar};
use sha3::{Digest, Keccak256, Sha3_256};

/// Domain separator for commitment blinding factor derivation.
pub const COMMITMENT_MASK_DOMAIN: &[u8] = b"commitment_mask";

/// Domain separator for amount mask derivation.
pub const AMOUNT_MASK_DOMAIN: &[u8] = b"amount_mask";

/// Pad a domain separator to 32 bytes.
///
/// Separators occupy a full 32-byte key slot in every transcript.
#[inline]
#[must_use]
pub fn pad_domain_separator(domain: &[u8]) -> [u8; 32] {
    let mut padded = [0u8; 32];
    let len = domain.len().min(32);
    padded[..len].copy_from_slice(&domain[..len]);
    padded
}

/// Hash arbitrary bytes to a scalar (`Hs`).
#[inline]
#[must_use]
pub fn hash_to_scalar(data: &[u8]) -> Scalar {
    Scalar::from_bytes_mod_order(Keccak256::digest(data).into())
}

/// Hash a sequence of byte strings under a padded domain separator.
#[must_use]
pub fn hash_to_scalar_with_domain(domain: &[u8], parts: &[&[u8]]) -> Scalar {
    let mut hasher = Keccak256::new();
    hasher.update(pad_domain_separator(domain));
    for part in parts {
        hasher.update(part);
    }
    Scalar::from_bytes_mod_order(hasher.finalize().into())
}

/// Reduce a finished Keccak transcript to a scalar.
#[inline]
pub(crate) fn finalize_to_scalar(hasher: Keccak256) -> Scalar {
    Scalar::from_bytes_mod_order(hasher.finalize().into())
}

/// Hash 32 bytes to a prime-order point (`Hp`).
///
/// `monero_generators::hash_to_point` already multiplies by the cofactor.
#[must_use]
pub fn hash_to_point(bytes: &[u8; 32]) -> EdwardsPoint {
    monero_generators::hash_to_point(*bytes)
}

/// SHA3-256 digest.
#[must_use]
pub fn sha3(data: &[u8]) -> [u8; 32] {
    Sha3_256::digest(data).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;

    #[test]
    fn test_pad_domain_separator() {
        let padded = pad_domain_separator(b"CLSAG_round");
        assert_eq!(&padded[..11], b"CLSAG_round");
        assert_eq!(&padded[11..], &[0u8; 21]);
    }

    #[test]
    fn test_hash_to_scalar_deterministic() {
        let scalar = hash_to_scalar(b"test data");
        assert_eq!(scalar, hash_to_scalar(b"test data"));
        assert_ne!(scalar, hash_to_scalar(b"different"));
    }

    #[test]
    fn test_domains_separate_equal_inputs() {
        let data: &[u8] = b"same input";
        assert_ne!(
            hash_to_scalar_with_domain(COMMITMENT_MASK_DOMAIN, &[data]),
            hash_to_scalar_with_domain(AMOUNT_MASK_DOMAIN, &[data])
        );
    }

    #[test]
    fn test_hash_to_point_is_torsion_free() {
        let bytes = ED25519_BASEPOINT_POINT.compress().to_bytes();
        let point = hash_to_point(&bytes);
        assert!(point.is_torsion_free());
        assert_eq!(point, hash_to_point(&bytes));
    }

    #[test]
    fn test_sha3_empty() {
        assert_eq!(
            hex::encode(sha3(b"")),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }
}
