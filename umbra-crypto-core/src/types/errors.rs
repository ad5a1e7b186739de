//! Error types for cryptographic operations
//!
//! This module defines all error types used throughout umbra-crypto-core.
//! Errors are categorized by the operation that caused them. Signature
//! verification never produces an error: it answers `false`.

use thiserror::Error;

/// Result type alias for cryptographic operations
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Comprehensive error type for all cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    // =========================================================================
    // Decode Errors
    // =========================================================================
    /// Hex decode failed
    #[error("Hex decode failed: {0}")]
    HexDecodeFailed(String),

    /// Invalid input length
    #[error("Invalid {field} length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Name of the field
        field: String,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Bytes do not encode a canonical scalar
    #[error("Invalid scalar: {0}")]
    InvalidScalar(String),

    /// Bytes do not encode a torsion-free curve point
    #[error("Invalid point: {0}")]
    InvalidPoint(String),

    /// Structured decode failed (truncated, trailing or malformed data)
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    JsonError(String),

    // =========================================================================
    // CLSAG Precondition Errors
    // =========================================================================
    /// The ring has no members
    #[error("Ring must contain at least one public key")]
    EmptyRing,

    /// Signer index out of ring bounds
    #[error("Signer index {index} out of bounds for ring size {ring_size}")]
    SignerIndexOutOfBounds {
        /// The signer index
        index: usize,
        /// Ring size
        ring_size: usize,
    },

    /// A per-member vector does not match the ring size
    #[error("{field} has {actual} entries, ring size is {expected}")]
    RingSizeMismatch {
        /// Name of the mismatched input
        field: String,
        /// Ring size
        expected: usize,
        /// Entries supplied
        actual: usize,
    },

    /// The signing key's public key is not a member of the ring
    #[error("Secret key does not correspond to any ring member")]
    SignerNotInRing,

    /// Key image is the identity point
    #[error("Invalid key image: {0}")]
    InvalidKeyImage(String),

    /// Input and pseudo commitment openings do not commit to the same amount
    #[error("Commitment mismatch: {0}")]
    CommitmentMismatch(String),

    // =========================================================================
    // RingCT Errors
    // =========================================================================
    /// No amounts were supplied for pseudo commitment generation
    #[error("At least one amount is required")]
    EmptyAmounts,
}

impl From<hex::FromHexError> for CryptoError {
    fn from(e: hex::FromHexError) -> Self {
        CryptoError::HexDecodeFailed(e.to_string())
    }
}

impl From<serde_json::Error> for CryptoError {
    fn from(e: serde_json::Error) -> Self {
        CryptoError::JsonError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CryptoError::SignerIndexOutOfBounds {
            index: 5,
            ring_size: 3,
        };
        assert!(err.to_string().contains("5"));
        assert!(err.to_string().contains("3"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CryptoError::EmptyRing, CryptoError::EmptyRing);
        assert_ne!(CryptoError::EmptyRing, CryptoError::SignerNotInRing);
    }

    #[test]
    fn test_length_error() {
        let err = CryptoError::InvalidLength {
            field: "scalar".into(),
            expected: 32,
            actual: 31,
        };
        let msg = err.to_string();
        assert!(msg.contains("scalar"));
        assert!(msg.contains("31"));
    }

    #[test]
    fn test_hex_error_conversion() {
        let err: CryptoError = hex::decode("zz").unwrap_err().into();
        assert!(matches!(err, CryptoError::HexDecodeFailed(_)));
    }
}
