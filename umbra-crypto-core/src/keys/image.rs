//! Key image generation for linkable ring signatures.
//!
//! Key images prevent double-spending. Each output can only be spent once,
//! and the key image links spends without revealing which ring member signed.
//!
//! ## Full Key Image
//!
//! For a single-signer spend with secret key `x` and public key `P`:
//! ```text
//! KI = x * Hp(P)
//! ```
//!
//! ## Partial Key Images (multisig)
//!
//! When the spend key is split additively across participants, each one
//! publishes its share applied to the same base point:
//! ```text
//! pKI_i = x_i * Hp(P)
//! KI    = x_0 * Hp(P) + pKI_1 + ... + pKI_{n-1}
//! ```
//! A participant that also holds the output's derivation scalar folds it into
//! its own `x_0`, so every other participant contributes only its share.

use curve25519_dalek::{edwards::EdwardsPoint, Scalar};
use tracing::debug;

use crate::hash::hash_to_point;
use crate::types::errors::{CryptoError, CryptoResult};
use crate::types::keys::{KeyImage, PublicKey};

/// Compute a key image, adding any partial key images from co-signers.
///
/// # Formula
/// ```text
/// KI = x * Hp(P) + Σ partial_key_images
/// ```
///
/// # Errors
/// `InvalidKeyImage` if the result is the identity point, which no spendable
/// output can have.
pub fn generate_key_image(
    public_ephemeral: &PublicKey,
    secret_ephemeral: &Scalar,
    partial_key_images: &[KeyImage],
) -> CryptoResult<KeyImage> {
    let own = secret_ephemeral * hash_to_point(public_ephemeral.as_bytes());
    let key_image: EdwardsPoint = partial_key_images
        .iter()
        .map(KeyImage::point)
        .fold(own, |acc, partial| acc + partial);

    let key_image = KeyImage::from_point_unchecked(key_image);
    if key_image.is_identity() {
        debug!("key image aggregated to the identity point");
        return Err(CryptoError::InvalidKeyImage(
            "key image is the identity point".into(),
        ));
    }
    Ok(key_image)
}

/// Compute one participant's contribution `x_i * Hp(P)` to a shared key image.
#[must_use]
pub fn generate_partial_key_image(public_ephemeral: &PublicKey, secret_share: &Scalar) -> KeyImage {
    KeyImage::from_point_unchecked(secret_share * hash_to_point(public_ephemeral.as_bytes()))
}
