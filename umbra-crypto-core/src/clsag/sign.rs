//! CLSAG signature generation, split into prepare and complete steps.
//!
//! Splitting lets several holders of an additively shared spend key produce
//! one signature without revealing their shares:
//!
//! ```text
//! prepare:   α random, L_l = α*G, R_l = α*Hp(P_l), h[l+1] = H(L_l, R_l)
//!            walk the other ring members with random s_i, storing h[i+1]
//!            s_l = α - h[l]*μ_C*z                     (placeholder)
//! partials:  k_j -> μ_P*k_j                           (one per co-signer)
//! complete:  s_l = placeholder - h[l]*(μ_P*x + Σ partials)
//! ```
//!
//! A single signer simply runs both steps with no partials
//! ([`generate_ring_signature`]).

use curve25519_dalek::{edwards::EdwardsPoint, Scalar};
use tracing::debug;
use zeroize::Zeroizing;

use super::hash::{CommitmentInputs, RingContext};
use super::types::{ClsagSignature, CommitmentBinding, PreparedRingSignature, SigningCommitments};
use crate::hash::hash_to_point;
use crate::keys::generate_key_image;
use crate::primitives::{random_scalar, secret_key_to_public_key};
use crate::types::errors::{CryptoError, CryptoResult};
use crate::types::keys::{KeyImage, PublicKey};

/// Prepare a ring signature, leaving the real slot to be completed.
///
/// Every slot other than `real_output_index` receives its final random
/// response. The real slot holds `α - h[l]*μ_C*z` (or `α` without
/// commitments), which [`complete_ring_signature`] turns into the response.
///
/// # Security
/// The nonce `α` is drawn fresh on every call and never leaves this function.
/// Completing two prepared signatures that share a key image with the same
/// signing key is safe; reusing a prepared signature for two different
/// completions is not, and cannot be detected here.
///
/// # Errors
/// - `EmptyRing` if `public_keys` is empty
/// - `SignerIndexOutOfBounds` if `real_output_index` is outside the ring
/// - `RingSizeMismatch` if the commitment ring differs in length from the key ring
/// - `InvalidKeyImage` if `key_image` is the identity point
/// - `CommitmentMismatch` if the input and pseudo commitments at the real
///   index do not open to the same amount
pub fn prepare_ring_signature(
    message_digest: &[u8; 32],
    key_image: &KeyImage,
    public_keys: &[PublicKey],
    real_output_index: usize,
    commitments: Option<&SigningCommitments<'_>>,
) -> CryptoResult<PreparedRingSignature> {
    let ring_size = public_keys.len();

    if ring_size == 0 {
        debug!("refusing to prepare a signature over an empty ring");
        return Err(CryptoError::EmptyRing);
    }

    if real_output_index >= ring_size {
        debug!(real_output_index, ring_size, "real output index out of bounds");
        return Err(CryptoError::SignerIndexOutOfBounds {
            index: real_output_index,
            ring_size,
        });
    }

    if key_image.is_identity() {
        debug!("refusing to sign with an identity key image");
        return Err(CryptoError::InvalidKeyImage(
            "key image is the identity point".into(),
        ));
    }

    // z = input blinding - pseudo blinding; D = z*Hp(P_l)
    let mut commitment_delta = Zeroizing::new(Scalar::ZERO);
    let mut binding = CommitmentBinding::Absent;

    if let Some(openings) = commitments {
        if openings.public_commitments.len() != ring_size {
            debug!(
                ring_size,
                commitments = openings.public_commitments.len(),
                "commitment ring does not match key ring"
            );
            return Err(CryptoError::RingSizeMismatch {
                field: "public_commitments".into(),
                expected: ring_size,
                actual: openings.public_commitments.len(),
            });
        }

        *commitment_delta = *openings.input_blinding_factor - *openings.pseudo_blinding_factor;

        let difference = openings.public_commitments[real_output_index].point()
            - openings.pseudo_commitment.point();
        if difference != EdwardsPoint::mul_base(&commitment_delta) {
            debug!("input and pseudo commitments do not balance");
            return Err(CryptoError::CommitmentMismatch(
                "input commitment minus pseudo commitment is not z*G".into(),
            ));
        }

        let hp = hash_to_point(public_keys[real_output_index].as_bytes());
        binding = CommitmentBinding::Present {
            commitment_image: KeyImage::from_point_unchecked(*commitment_delta * hp),
            pseudo_commitment: openings.pseudo_commitment,
        };
    }

    let context = match (&binding, commitments) {
        (
            CommitmentBinding::Present {
                commitment_image,
                pseudo_commitment,
            },
            Some(openings),
        ) => RingContext::new(
            message_digest,
            key_image,
            public_keys,
            Some(CommitmentInputs {
                ring: openings.public_commitments,
                commitment_image,
                pseudo_commitment,
            }),
        ),
        _ => RingContext::new(message_digest, key_image, public_keys, None),
    };

    let alpha = Zeroizing::new(random_scalar());
    let mut h = vec![Scalar::ZERO; ring_size];
    let mut scalars = vec![Scalar::ZERO; ring_size];

    let l_point = EdwardsPoint::mul_base(&alpha);
    let r_point = *alpha * context.hp(real_output_index);
    h[(real_output_index + 1) % ring_size] = context.challenge(&l_point, &r_point);

    for offset in 1..ring_size {
        let index = (real_output_index + offset) % ring_size;
        let next = (index + 1) % ring_size;
        scalars[index] = random_scalar();
        h[next] = context.round(index, &scalars[index], &h[index]);
    }

    scalars[real_output_index] =
        *alpha - h[real_output_index] * context.mu_c() * *commitment_delta;

    Ok(PreparedRingSignature {
        signature: ClsagSignature {
            scalars,
            challenge: h[0],
            commitment: binding,
            offsets: Vec::new(),
        },
        h,
        mu_p: *context.mu_p(),
    })
}

/// A co-signer's contribution `μ_P * spend_secret_key`.
#[must_use]
pub fn generate_partial_signing_scalar(mu_p: &Scalar, spend_secret_key: &Scalar) -> Scalar {
    mu_p * spend_secret_key
}

/// Finish a prepared signature.
///
/// ```text
/// s_l = placeholder - h[l] * (μ_P * signing_scalar + Σ partial_signing_scalars)
/// ```
///
/// `signing_scalar` is the completing party's own key material; co-signers
/// contribute through [`generate_partial_signing_scalar`]. A completing party
/// with no key of its own passes zero.
///
/// # Errors
/// - `SignerIndexOutOfBounds` if `real_output_index` is outside the ring
/// - `RingSizeMismatch` if `h` and the signature's scalars differ in length
pub fn complete_ring_signature(
    signing_scalar: &Scalar,
    real_output_index: usize,
    signature: &ClsagSignature,
    h: &[Scalar],
    mu_p: &Scalar,
    partial_signing_scalars: &[Scalar],
) -> CryptoResult<ClsagSignature> {
    let ring_size = signature.scalars.len();

    if real_output_index >= ring_size {
        debug!(real_output_index, ring_size, "real output index out of bounds");
        return Err(CryptoError::SignerIndexOutOfBounds {
            index: real_output_index,
            ring_size,
        });
    }

    if h.len() != ring_size {
        debug!(ring_size, challenges = h.len(), "challenge count mismatch");
        return Err(CryptoError::RingSizeMismatch {
            field: "h".into(),
            expected: ring_size,
            actual: h.len(),
        });
    }

    let combined = Zeroizing::new(
        mu_p * signing_scalar + partial_signing_scalars.iter().sum::<Scalar>(),
    );

    let mut completed = signature.clone();
    completed.scalars[real_output_index] -= h[real_output_index] * *combined;
    completed.challenge = h[0];
    Ok(completed)
}

/// Sign in one step with a full secret key.
///
/// The real index is located by matching `secret_ephemeral * G` against the
/// ring.
///
/// # Errors
/// - `SignerNotInRing` if no ring member matches the secret key
/// - anything [`prepare_ring_signature`] rejects
pub fn generate_ring_signature(
    message_digest: &[u8; 32],
    secret_ephemeral: &Scalar,
    public_keys: &[PublicKey],
    commitments: Option<&SigningCommitments<'_>>,
) -> CryptoResult<ClsagSignature> {
    if public_keys.is_empty() {
        debug!("refusing to sign over an empty ring");
        return Err(CryptoError::EmptyRing);
    }

    let public_ephemeral = secret_key_to_public_key(secret_ephemeral);
    let Some(real_output_index) = public_keys.iter().position(|key| *key == public_ephemeral)
    else {
        debug!(ring_size = public_keys.len(), "signing key is not a ring member");
        return Err(CryptoError::SignerNotInRing);
    };

    let key_image = generate_key_image(&public_ephemeral, secret_ephemeral, &[])?;

    let prepared = prepare_ring_signature(
        message_digest,
        &key_image,
        public_keys,
        real_output_index,
        commitments,
    )?;

    complete_ring_signature(
        secret_ephemeral,
        real_output_index,
        &prepared.signature,
        &prepared.h,
        &prepared.mu_p,
        &[],
    )
}
