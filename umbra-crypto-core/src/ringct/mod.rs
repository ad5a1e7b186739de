//! `RingCT` amount hiding
//!
//! Amounts are hidden behind Pedersen commitments `C = blinding*G + amount*H`.
//! A transaction balances when the pseudo commitments of its inputs sum to the
//! output commitments plus the fee commitment.
//!
//! - [`commitments`] - commitment construction, pseudo outputs, parity check
//! - [`amounts`] - deterministic blinding/amount masks and amount encryption

pub mod amounts;
pub mod commitments;

pub use amounts::{generate_amount_mask, generate_commitment_blinding_factor, toggle_masked_amount};
pub use commitments::{
    check_commitments_parity, generate_pedersen_commitment, generate_pseudo_commitments,
    generate_transaction_fee_commitment,
};
