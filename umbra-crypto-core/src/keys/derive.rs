//! Stealth address derivation
//!
//! A sender with transaction secret `r` and a recipient with view secret `a`
//! share the derivation point `D = 8*r*A = 8*a*R`. From it, each output at
//! index `i` gets a derivation scalar and a one-time public key:
//!
//! ```text
//! ds = Hs(D || varint(i))
//! P' = ds*G + B           (B = recipient public spend key)
//! x' = ds + b             (b = recipient secret spend key)
//! ```

use curve25519_dalek::{edwards::EdwardsPoint, Scalar};
use sha3::{Digest, Keccak256};

use crate::codec::encode_varint;
use crate::hash::finalize_to_scalar;
use crate::types::keys::{KeyDerivation, PublicKey};

/// Shared derivation `D = 8 * secret_key * public_key`.
#[must_use]
pub fn generate_key_derivation(public_key: &PublicKey, secret_key: &Scalar) -> KeyDerivation {
    KeyDerivation::from_point_unchecked((secret_key * public_key.point()).mul_by_cofactor())
}

/// Derivation scalar `Hs(D || varint(output_index))` for one output.
#[must_use]
pub fn derivation_to_scalar(derivation: &KeyDerivation, output_index: u64) -> Scalar {
    let mut hasher = Keccak256::new();
    hasher.update(derivation.as_bytes());
    hasher.update(encode_varint(output_index));
    finalize_to_scalar(hasher)
}

/// One-time public key `ds*G + public_key`.
#[must_use]
pub fn derive_public_key(derivation_scalar: &Scalar, public_key: &PublicKey) -> PublicKey {
    PublicKey::from_point_unchecked(EdwardsPoint::mul_base(derivation_scalar) + public_key.point())
}

/// One-time secret key `ds + secret_key`.
#[must_use]
pub fn derive_secret_key(derivation_scalar: &Scalar, secret_key: &Scalar) -> Scalar {
    derivation_scalar + secret_key
}

/// Recover the recipient public spend key from a one-time key:
/// `public_ephemeral - Hs(D || varint(output_index))*G`.
#[must_use]
pub fn underive_public_key(
    derivation: &KeyDerivation,
    output_index: u64,
    public_ephemeral: &PublicKey,
) -> PublicKey {
    let derivation_scalar = derivation_to_scalar(derivation, output_index);
    PublicKey::from_point_unchecked(
        public_ephemeral.point() - EdwardsPoint::mul_base(&derivation_scalar),
    )
}
