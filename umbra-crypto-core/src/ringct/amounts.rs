//! Deterministic masks derived from a shared derivation scalar
//!
//! Sender and recipient both hold the derivation scalar of an output
//! (see [`crate::keys::derivation_to_scalar`]), so both can recompute the
//! output's blinding factor and the mask that hides its amount.
//!
//! ```text
//! blinding_factor = Hs("commitment_mask" || derivation_scalar)
//! amount_mask     = Hs("amount_mask" || derivation_scalar)
//! masked_amount   = amount XOR amount_mask[0..8]
//! ```

use curve25519_dalek::Scalar;
use sha3::{Digest, Keccak256};

use crate::hash::{finalize_to_scalar, AMOUNT_MASK_DOMAIN, COMMITMENT_MASK_DOMAIN};

fn mask_from_derivation(domain: &[u8], derivation_scalar: &Scalar) -> Scalar {
    let mut hasher = Keccak256::new();
    hasher.update(domain);
    hasher.update(derivation_scalar.as_bytes());
    finalize_to_scalar(hasher)
}

/// Blinding factor of an output commitment.
#[must_use]
pub fn generate_commitment_blinding_factor(derivation_scalar: &Scalar) -> Scalar {
    mask_from_derivation(COMMITMENT_MASK_DOMAIN, derivation_scalar)
}

/// Mask used to hide an output amount.
#[must_use]
pub fn generate_amount_mask(derivation_scalar: &Scalar) -> Scalar {
    mask_from_derivation(AMOUNT_MASK_DOMAIN, derivation_scalar)
}

/// XOR `amount` with the first 8 little-endian bytes of `amount_mask`.
///
/// The operation is its own inverse: masking a masked amount recovers it.
#[must_use]
pub fn toggle_masked_amount(amount_mask: &Scalar, amount: u64) -> u64 {
    let mut mask = [0u8; 8];
    mask.copy_from_slice(&amount_mask.as_bytes()[..8]);
    amount ^ u64::from_le_bytes(mask)
}
