//! Core type definitions for umbra-crypto-core
//!
//! This module contains:
//! - Error types for cryptographic operations
//! - Validated point types (public keys, key images, commitments, derivations)

pub mod errors;
pub mod keys;

// Re-export error types
pub use errors::{CryptoError, CryptoResult};

// Re-export point types
pub use keys::{KeyDerivation, KeyImage, PedersenCommitment, PublicKey};
