//! Multisig key aggregation and partial signing.
//!
//! Participants never share secret keys. Each pair derives a common secret
//! from one party's secret key and the other's public key, the shared spend key
//! is the sum of the resulting secrets, and a signature is produced by
//! [`crate::clsag::prepare_ring_signature`] followed by one
//! [`generate_partial_signing_scalar`] per co-signer and a single
//! [`crate::clsag::complete_ring_signature`].
//!
//! ## Key setup (N-of-N)
//!
//! ```text
//! k_i = Hs(b_i * B_j)                          (j = the other participant)
//! shared secret  = Σ k_i                          (never assembled in practice)
//! shared public  = Σ k_i * G
//! ```
//!
//! In an (N-1)-of-N wallet every pair `(i, j)` derives `m_ij = m_ji`, so each
//! distinct pairwise secret is counted once in the shared key.
//!
//! This module keeps no state between calls.

use curve25519_dalek::{edwards::EdwardsPoint, Scalar};
use zeroize::Zeroizing;

use crate::hash::hash_to_scalar;
use crate::types::keys::PublicKey;

pub use crate::clsag::generate_partial_signing_scalar;

/// Pairwise secret shared with the owner of `their_public_key`.
///
/// ```text
/// Hs(our_secret_key * their_public_key)
/// ```
#[must_use]
pub fn generate_multisig_secret_key(their_public_key: &PublicKey, our_secret_key: &Scalar) -> Scalar {
    let shared_point = Zeroizing::new((our_secret_key * their_public_key.point()).compress());
    hash_to_scalar(shared_point.as_bytes())
}

/// [`generate_multisig_secret_key`] against each of `their_public_keys`, in order.
#[must_use]
pub fn generate_multisig_secret_keys(
    their_public_keys: &[PublicKey],
    our_secret_key: &Scalar,
) -> Vec<Scalar> {
    their_public_keys
        .iter()
        .map(|public_key| generate_multisig_secret_key(public_key, our_secret_key))
        .collect()
}

/// Sum of secret keys.
#[must_use]
pub fn generate_shared_secret_key(secret_keys: &[Scalar]) -> Scalar {
    secret_keys.iter().sum()
}

/// Sum of public keys.
#[must_use]
pub fn generate_shared_public_key(public_keys: &[PublicKey]) -> PublicKey {
    let sum: EdwardsPoint = public_keys.iter().map(PublicKey::point).sum();
    PublicKey::from_point_unchecked(sum)
}

/// Key-exchange rounds needed to set up a `threshold`-of-`participants` wallet.
///
/// Returns `0` for a threshold of zero or one larger than the participant count.
#[must_use]
pub const fn rounds_required(participants: usize, threshold: usize) -> usize {
    if threshold == 0 || threshold > participants {
        return 0;
    }
    participants - threshold + 1
}

/// Sum co-signers' partial signing scalars into one value for completion.
#[must_use]
pub fn aggregate_partial_signing_scalars(partial_signing_scalars: &[Scalar]) -> Scalar {
    partial_signing_scalars.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{generate_keys, secret_key_to_public_key};

    #[test]
    fn test_pairwise_secret_is_symmetric() {
        let (public_a, secret_a) = generate_keys();
        let (public_b, secret_b) = generate_keys();
        assert_eq!(
            generate_multisig_secret_key(&public_b, &secret_a),
            generate_multisig_secret_key(&public_a, &secret_b)
        );
    }

    #[test]
    fn test_pairwise_secret_hashes_shared_point() {
        let (public_b, _) = generate_keys();
        let (_, secret_a) = generate_keys();
        let shared = (secret_a * public_b.point()).compress();
        assert_eq!(
            generate_multisig_secret_key(&public_b, &secret_a),
            hash_to_scalar(shared.as_bytes())
        );
    }

    #[test]
    fn test_shared_keys_agree() {
        let (public_a, secret_a) = generate_keys();
        let (public_b, secret_b) = generate_keys();
        assert_eq!(
            secret_key_to_public_key(&generate_shared_secret_key(&[secret_a, secret_b])),
            generate_shared_public_key(&[public_a, public_b])
        );
    }

    #[test]
    fn test_rounds_required() {
        assert_eq!(rounds_required(3, 3), 1);
        assert_eq!(rounds_required(3, 2), 2);
        assert_eq!(rounds_required(5, 1), 5);
        assert_eq!(rounds_required(3, 0), 0);
        assert_eq!(rounds_required(2, 3), 0);
    }

    #[test]
    fn test_multisig_secret_keys_order() {
        let (_, ours) = generate_keys();
        let theirs = [generate_keys().0, generate_keys().0];
        let keys = generate_multisig_secret_keys(&theirs, &ours);
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[1], generate_multisig_secret_key(&theirs[1], &ours));
    }

    #[test]
    fn test_aggregate_partials() {
        let (_, a) = generate_keys();
        let (_, b) = generate_keys();
        assert_eq!(aggregate_partial_signing_scalars(&[a, b]), a + b);
        assert_eq!(aggregate_partial_signing_scalars(&[]), Scalar::ZERO);
    }
}
