//! Pedersen commitments and commitment balancing.

use curve25519_dalek::{edwards::EdwardsPoint, traits::IsIdentity, Scalar};
use zeroize::Zeroizing;

use crate::primitives::{random_scalar, H};
use crate::types::errors::{CryptoError, CryptoResult};
use crate::types::keys::PedersenCommitment;

/// Commit to `amount` under `blinding_factor`: `amount*H + blinding_factor*G`.
#[must_use]
pub fn generate_pedersen_commitment(blinding_factor: &Scalar, amount: u64) -> PedersenCommitment {
    let point = Scalar::from(amount) * *H + EdwardsPoint::mul_base(blinding_factor);
    PedersenCommitment::from_point_unchecked(point)
}

/// Commitment to the fee with zero blinding: `fee*H`.
#[must_use]
pub fn generate_transaction_fee_commitment(fee: u64) -> PedersenCommitment {
    PedersenCommitment::from_point_unchecked(Scalar::from(fee) * *H)
}

/// Build one pseudo output commitment per input amount.
///
/// Every blinding factor but the last is random. The last is solved so the
/// pseudo blinding factors sum to the output blinding factors, which makes the
/// pseudo commitments balance against the outputs once the fee is included.
///
/// Returns the commitments and their blinding factors, in input order.
///
/// # Errors
/// `EmptyAmounts` if `amounts` is empty.
pub fn generate_pseudo_commitments(
    amounts: &[u64],
    output_blinding_factors: &[Scalar],
) -> CryptoResult<(Vec<PedersenCommitment>, Vec<Scalar>)> {
    let Some((_, leading)) = amounts.split_last() else {
        return Err(CryptoError::EmptyAmounts);
    };

    let mut blinding_factors: Vec<Scalar> = leading.iter().map(|_| random_scalar()).collect();

    let output_sum = Zeroizing::new(output_blinding_factors.iter().sum::<Scalar>());
    let pseudo_sum = Zeroizing::new(blinding_factors.iter().sum::<Scalar>());
    blinding_factors.push(*output_sum - *pseudo_sum);

    let commitments = amounts
        .iter()
        .zip(&blinding_factors)
        .map(|(amount, blinding_factor)| generate_pedersen_commitment(blinding_factor, *amount))
        .collect();

    Ok((commitments, blinding_factors))
}

/// Whether `Σ pseudo - Σ outputs - fee*H` is the identity.
#[must_use]
pub fn check_commitments_parity(
    pseudo_commitments: &[PedersenCommitment],
    output_commitments: &[PedersenCommitment],
    fee: u64,
) -> bool {
    let pseudo_sum: EdwardsPoint = pseudo_commitments.iter().map(|c| c.point()).sum();
    let output_sum: EdwardsPoint = output_commitments.iter().map(|c| c.point()).sum();
    let fee_commitment = generate_transaction_fee_commitment(fee);

    (pseudo_sum - output_sum - fee_commitment.point()).is_identity()
}
