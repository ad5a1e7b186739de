//! CLSAG transcripts for mixing coefficients and round challenges.
//!
//! ```text
//! μ_P    = Hs(CLSAG_agg_0 || P_0..P_{n-1} || [C_0..C_{n-1}] || I || [D || C'])
//! μ_C    = Hs(CLSAG_agg_1 || P_0..P_{n-1} || [C_0..C_{n-1}] || I || [D || C'])
//! c[i+1] = Hs(CLSAG_round || P_0..P_{n-1} || [C_0..C_{n-1} || C'] || m || I || [D] || L[i] || R[i])
//! ```
//!
//! Bracketed parts are only present when the signature is bound to a commitment.

use curve25519_dalek::{edwards::EdwardsPoint, traits::VartimeMultiscalarMul, Scalar};
use sha3::{Digest, Keccak256};

use super::constants::{CLSAG_AGG_0, CLSAG_AGG_1, CLSAG_ROUND};
use crate::hash::{finalize_to_scalar, hash_to_point, pad_domain_separator};
use crate::primitives::G;
use crate::types::keys::{KeyImage, PedersenCommitment, PublicKey};

/// Commitment half of a ring: the input commitments, the commitment key
/// image `D` and the pseudo output `C'`.
#[derive(Clone, Copy)]
pub(crate) struct CommitmentInputs<'a> {
    pub(crate) ring: &'a [PedersenCommitment],
    pub(crate) commitment_image: &'a KeyImage,
    pub(crate) pseudo_commitment: &'a PedersenCommitment,
}

struct CommitmentRing {
    /// `C_i - C'` for each ring member.
    adjusted: Vec<EdwardsPoint>,
    commitment_image: EdwardsPoint,
    mu_c: Scalar,
}

/// Everything about a ring that stays fixed while walking its challenges.
///
/// Callers must have checked that any commitment ring matches `public_keys`
/// in length.
pub(crate) struct RingContext {
    ring: Vec<EdwardsPoint>,
    hp: Vec<EdwardsPoint>,
    key_image: EdwardsPoint,
    mu_p: Scalar,
    commitment: Option<CommitmentRing>,
    round_prefix: Keccak256,
}

impl RingContext {
    pub(crate) fn new(
        message_digest: &[u8; 32],
        key_image: &KeyImage,
        public_keys: &[PublicKey],
        commitments: Option<CommitmentInputs<'_>>,
    ) -> Self {
        let aggregate = |domain: &[u8]| {
            let mut hasher = Keccak256::new();
            hasher.update(pad_domain_separator(domain));
            for key in public_keys {
                hasher.update(key.as_bytes());
            }
            if let Some(inputs) = &commitments {
                for commitment in inputs.ring {
                    hasher.update(commitment.as_bytes());
                }
            }
            hasher.update(key_image.as_bytes());
            if let Some(inputs) = &commitments {
                hasher.update(inputs.commitment_image.as_bytes());
                hasher.update(inputs.pseudo_commitment.as_bytes());
            }
            finalize_to_scalar(hasher)
        };

        let mu_p = aggregate(CLSAG_AGG_0);

        let mut round_prefix = Keccak256::new();
        round_prefix.update(pad_domain_separator(CLSAG_ROUND));
        for key in public_keys {
            round_prefix.update(key.as_bytes());
        }
        if let Some(inputs) = &commitments {
            for commitment in inputs.ring {
                round_prefix.update(commitment.as_bytes());
            }
            round_prefix.update(inputs.pseudo_commitment.as_bytes());
        }
        round_prefix.update(message_digest);
        round_prefix.update(key_image.as_bytes());
        if let Some(inputs) = &commitments {
            round_prefix.update(inputs.commitment_image.as_bytes());
        }

        let commitment = commitments.map(|inputs| {
            let pseudo = inputs.pseudo_commitment.point();
            CommitmentRing {
                adjusted: inputs.ring.iter().map(|c| c.point() - pseudo).collect(),
                commitment_image: *inputs.commitment_image.point(),
                mu_c: aggregate(CLSAG_AGG_1),
            }
        });

        Self {
            ring: public_keys.iter().map(|key| *key.point()).collect(),
            hp: public_keys
                .iter()
                .map(|key| hash_to_point(key.as_bytes()))
                .collect(),
            key_image: *key_image.point(),
            mu_p,
            commitment,
            round_prefix,
        }
    }

    pub(crate) const fn mu_p(&self) -> &Scalar {
        &self.mu_p
    }

    /// `μ_C`, or zero when the ring carries no commitments.
    pub(crate) fn mu_c(&self) -> Scalar {
        self.commitment
            .as_ref()
            .map_or(Scalar::ZERO, |commitment| commitment.mu_c)
    }

    /// `Hp(P_index)`.
    pub(crate) fn hp(&self, index: usize) -> &EdwardsPoint {
        &self.hp[index]
    }

    /// Challenge following a round with points `L` and `R`.
    pub(crate) fn challenge(&self, l_point: &EdwardsPoint, r_point: &EdwardsPoint) -> Scalar {
        let mut hasher = self.round_prefix.clone();
        hasher.update(l_point.compress().as_bytes());
        hasher.update(r_point.compress().as_bytes());
        finalize_to_scalar(hasher)
    }

    /// Run round `index` with response `s` and incoming challenge `c`,
    /// returning the next challenge.
    ///
    /// ```text
    /// L = s*G + c*μ_P*P_i + c*μ_C*(C_i - C')
    /// R = s*Hp(P_i) + c*μ_P*I + c*μ_C*D
    /// ```
    ///
    /// Responses and challenges are public, so variable-time arithmetic is fine.
    pub(crate) fn round(&self, index: usize, s: &Scalar, c: &Scalar) -> Scalar {
        let c_p = c * self.mu_p;
        let (l_point, r_point) = match &self.commitment {
            Some(commitment) => {
                let c_c = c * commitment.mu_c;
                (
                    EdwardsPoint::vartime_multiscalar_mul(
                        [*s, c_p, c_c],
                        [G, self.ring[index], commitment.adjusted[index]],
                    ),
                    EdwardsPoint::vartime_multiscalar_mul(
                        [*s, c_p, c_c],
                        [self.hp[index], self.key_image, commitment.commitment_image],
                    ),
                )
            }
            None => (
                EdwardsPoint::vartime_double_scalar_mul_basepoint(&c_p, &self.ring[index], s),
                EdwardsPoint::vartime_multiscalar_mul(
                    [*s, c_p],
                    [self.hp[index], self.key_image],
                ),
            ),
        };
        self.challenge(&l_point, &r_point)
    }
}
