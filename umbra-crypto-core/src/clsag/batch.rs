//! Verification of many independent ring signatures.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use super::types::ClsagSignature;
use super::verify::check_ring_signature;
use crate::types::keys::{KeyImage, PedersenCommitment, PublicKey};

/// One signature together with everything needed to check it.
#[derive(Debug, Clone, Copy)]
pub struct RingSignatureCheck<'a> {
    /// Digest the signature commits to.
    pub message_digest: &'a [u8; 32],
    /// Key image of the spent output.
    pub key_image: &'a KeyImage,
    /// Ring members.
    pub public_keys: &'a [PublicKey],
    /// The signature.
    pub signature: &'a ClsagSignature,
    /// Ring commitments, empty for a signature without commitment binding.
    pub commitments: &'a [PedersenCommitment],
}

impl RingSignatureCheck<'_> {
    /// Run [`check_ring_signature`] on this entry.
    #[must_use]
    pub fn check(&self) -> bool {
        check_ring_signature(
            self.message_digest,
            self.key_image,
            self.public_keys,
            self.signature,
            self.commitments,
        )
    }
}

/// Whether every signature in `batch` verifies. An empty batch is valid.
///
/// With the `parallel` feature, entries are checked on the rayon pool.
#[must_use]
pub fn check_ring_signatures(batch: &[RingSignatureCheck<'_>]) -> bool {
    trace!(signatures = batch.len(), "checking ring signature batch");

    #[cfg(feature = "parallel")]
    let valid = batch.par_iter().all(RingSignatureCheck::check);

    #[cfg(not(feature = "parallel"))]
    let valid = batch.iter().all(RingSignatureCheck::check);

    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clsag::generate_ring_signature;
    use crate::keys::generate_key_image;
    use crate::primitives::{generate_keys, random_points};

    #[test]
    fn test_batch_all_or_nothing() {
        let digest = [4u8; 32];
        let mut entries = Vec::new();
        for real in 0..3 {
            let (public_key, secret_key) = generate_keys();
            let mut ring = random_points(3);
            ring[real] = public_key;
            let key_image = generate_key_image(&public_key, &secret_key, &[]).unwrap();
            let signature = generate_ring_signature(&digest, &secret_key, &ring, None).unwrap();
            entries.push((key_image, ring, signature));
        }

        let batch: Vec<RingSignatureCheck<'_>> = entries
            .iter()
            .map(|(key_image, ring, signature)| RingSignatureCheck {
                message_digest: &digest,
                key_image,
                public_keys: ring,
                signature,
                commitments: &[],
            })
            .collect();
        assert!(check_ring_signatures(&batch));
        assert!(check_ring_signatures(&[]));

        let mut broken = batch.clone();
        broken[1].key_image = &entries[0].0;
        assert!(!check_ring_signatures(&broken));
    }
}
