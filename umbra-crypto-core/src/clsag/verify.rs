//! CLSAG signature verification.
//!
//! Starting from `c = challenge` at ring position 0, every position computes
//! ```text
//! L[i] = s[i]*G + c*(μ_P*P[i] + μ_C*(C[i] - C'))
//! R[i] = s[i]*Hp(P[i]) + c*(μ_P*I + μ_C*D)
//! c    = H(CLSAG_round || ... || L[i] || R[i])
//! ```
//! and the signature is valid iff the final `c` equals `challenge`.

use subtle::ConstantTimeEq;

use super::hash::{CommitmentInputs, RingContext};
use super::types::{ClsagSignature, CommitmentBinding};
use crate::types::keys::{KeyImage, PedersenCommitment, PublicKey};

/// Verify a ring signature over `message_digest`.
///
/// `commitments` must hold one commitment per ring member when the signature
/// is bound to a commitment, and must be empty when it is not. Any malformed
/// or inconsistent input yields `false`.
#[must_use]
pub fn check_ring_signature(
    message_digest: &[u8; 32],
    key_image: &KeyImage,
    public_keys: &[PublicKey],
    signature: &ClsagSignature,
    commitments: &[PedersenCommitment],
) -> bool {
    let ring_size = public_keys.len();
    if ring_size == 0 || signature.scalars.len() != ring_size || key_image.is_identity() {
        return false;
    }

    let inputs = match &signature.commitment {
        CommitmentBinding::Absent => {
            if !commitments.is_empty() {
                return false;
            }
            None
        }
        CommitmentBinding::Present {
            commitment_image,
            pseudo_commitment,
        } => {
            if commitments.len() != ring_size {
                return false;
            }
            Some(CommitmentInputs {
                ring: commitments,
                commitment_image,
                pseudo_commitment,
            })
        }
    };

    let context = RingContext::new(message_digest, key_image, public_keys, inputs);

    let closing = signature
        .scalars
        .iter()
        .enumerate()
        .fold(signature.challenge, |c, (index, s)| context.round(index, s, &c));

    closing.ct_eq(&signature.challenge).into()
}
