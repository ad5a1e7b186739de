//! CLSAG (Concise Linkable Spontaneous Anonymous Group) ring signatures.
//!
//! A signature proves that one member of a ring of public keys signed, without
//! revealing which, and carries a key image that links any two signatures made
//! with the same key. Optionally the signature is also bound to a Pedersen
//! commitment, proving the spent input and its pseudo output hide the same
//! amount.
//!
//! ## Components
//!
//! - [`types`]: Signature, prepared signature and signing commitment types
//! - [`constants`]: Domain separators
//! - `hash`: Mixing coefficients and round challenges
//! - [`sign`]: Prepare / complete signing, usable by multisig wallets
//! - [`verify`]: Signature verification
//! - [`batch`]: Verification of independent signatures in one call
//!
//! ## Verification Equation
//!
//! For each ring member i:
//! ```text
//! L[i] = s[i]*G + c * (μ_P * P[i] + μ_C * (C[i] - C'))
//! R[i] = s[i]*Hp(P[i]) + c * (μ_P * I + μ_C * D)
//! c[i+1] = H(CLSAG_round || ring || [commitments || C'] || m || I || [D] || L[i] || R[i])
//! ```
//!
//! Valid if the challenge after the last member equals the stored challenge.
//!
//! ## Security Notes
//!
//! - `Hp` is `ge_fromfe_frombytes_vartime` with the cofactor cleared
//! - Domain separators are 32-byte padded
//! - All scalars are canonical (reduced mod l)

pub mod batch;
pub mod constants;
pub(crate) mod hash;
pub mod sign;
pub mod types;
pub mod verify;

// Re-export main types
pub use types::{ClsagSignature, CommitmentBinding, PreparedRingSignature, SigningCommitments};

// Re-export verification functions
pub use batch::{check_ring_signatures, RingSignatureCheck};
pub use verify::check_ring_signature;

// Re-export signing functions
pub use sign::{
    complete_ring_signature, generate_partial_signing_scalar, generate_ring_signature,
    prepare_ring_signature,
};
