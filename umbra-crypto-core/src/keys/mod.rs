//! Key operations module
//!
//! This module provides:
//! - Key image generation, including partial key images for multisig
//! - Stealth address derivation between sender and recipient

pub mod derive;
pub mod image;

// Re-export derivation functions
pub use derive::{
    derivation_to_scalar, derive_public_key, derive_secret_key, generate_key_derivation,
    underive_public_key,
};

// Re-export key image functions
pub use image::{generate_key_image, generate_partial_key_image};
