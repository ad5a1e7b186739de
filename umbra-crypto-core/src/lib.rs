//! # umbra-crypto-core
//!
//! Core cryptographic library for confidential ring-signature transactions.
//!
//! This crate provides:
//!
//! - **CLSAG Signing**: Linkable ring signatures, optionally bound to a Pedersen
//!   commitment, with a prepare / complete split for multisig wallets
//! - **`RingCT` Commitments**: Pedersen commitments, pseudo outputs and balance checks
//! - **Key Images**: Full and partial key images for spend linking
//! - **Stealth Derivation**: Shared derivations and one-time keys
//! - **Multisig**: Pairwise secret derivation and shared key aggregation
//! - **Codec**: Canonical binary, hex and JSON wire forms
//!
//! ## Architecture
//!
//! 1. **Constant-Time Operations**: Secret-dependent arithmetic and comparisons
//!    never branch on secrets
//! 2. **Zeroize on Drop**: Nonces, blinding deltas and combined keys are wiped
//! 3. **Type-Safe**: Validated point newtypes prevent mixing keys, images and commitments
//! 4. **Stateless**: Every operation is a pure function of its inputs and the OS RNG
//!
//! ## Modules
//!
//! - [`types`]: Error types and validated point types
//! - [`primitives`]: Scalar/point decoding, generators, key generation
//! - [`hash`]: Hash-to-scalar, hash-to-point, SHA3
//! - [`ringct`]: Pedersen commitments and amount masking
//! - [`keys`]: Key images and stealth derivation
//! - [`clsag`]: CLSAG signing and verification
//! - [`multisig`]: Multisig key aggregation and partial signing
//! - [`codec`]: Canonical varint/key encoder and strict decoder
//!
//! ## Example
//!
//! ```rust
//! use umbra_crypto_core::prelude::*;
//!
//! let (public_key, secret_key) = generate_keys();
//! let mut ring = random_points(3);
//! ring[1] = public_key;
//!
//! let digest = [0u8; 32];
//! let key_image = generate_key_image(&public_key, &secret_key, &[])?;
//! let signature = generate_ring_signature(&digest, &secret_key, &ring, None)?;
//!
//! assert!(check_ring_signature(&digest, &key_image, &ring, &signature, &[]));
//! # Ok::<(), CryptoError>(())
//! ```
//!
//! ## Security Considerations
//!
//! - Never log or serialize secret keys
//! - Never complete the same prepared signature twice with different key material
//! - Ring composition (duplicate members, decoy selection) is the caller's concern

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod clsag;
pub mod codec;
pub mod hash;
pub mod keys;
pub mod multisig;
pub mod primitives;
pub mod ringct;
pub mod types;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::clsag::{
        check_ring_signature, check_ring_signatures, complete_ring_signature,
        generate_partial_signing_scalar, generate_ring_signature, prepare_ring_signature,
        ClsagSignature, CommitmentBinding, PreparedRingSignature, RingSignatureCheck,
        SigningCommitments,
    };
    pub use crate::keys::{generate_key_image, generate_partial_key_image};
    pub use crate::primitives::{
        generate_keys, random_point, random_points, random_scalar, random_scalars,
        secret_key_to_public_key,
    };
    pub use crate::ringct::{
        check_commitments_parity, generate_pedersen_commitment, generate_pseudo_commitments,
    };
    pub use crate::types::errors::*;
    pub use crate::types::*;
    pub use curve25519_dalek::Scalar;
}

/// Re-export commonly used types at crate root
pub use types::errors::{CryptoError, CryptoResult};
pub use types::keys::{KeyDerivation, KeyImage, PedersenCommitment, PublicKey};

// Re-export CLSAG types and functions
pub use clsag::{
    check_ring_signature, check_ring_signatures, complete_ring_signature,
    generate_partial_signing_scalar, generate_ring_signature, prepare_ring_signature,
    ClsagSignature, CommitmentBinding, PreparedRingSignature, RingSignatureCheck,
    SigningCommitments,
};

// Re-export commitment functions
pub use ringct::{
    check_commitments_parity, generate_amount_mask, generate_commitment_blinding_factor,
    generate_pedersen_commitment, generate_pseudo_commitments, generate_transaction_fee_commitment,
    toggle_masked_amount,
};

// Re-export key functions
pub use keys::{
    derivation_to_scalar, derive_public_key, derive_secret_key, generate_key_derivation,
    generate_key_image, generate_partial_key_image, underive_public_key,
};

// Re-export multisig functions
pub use multisig::{
    aggregate_partial_signing_scalars, generate_multisig_secret_key,
    generate_multisig_secret_keys, generate_shared_public_key, generate_shared_secret_key,
    rounds_required,
};

/// Re-export of the scalar type used throughout the API.
pub use curve25519_dalek::Scalar;
