//! CLSAG domain separators.
//!
//! Each separator is padded to a 32-byte key slot before hashing
//! (see [`crate::hash::pad_domain_separator`]).

/// Round hash domain separator, used for the challenge at each ring position.
pub const CLSAG_ROUND: &[u8] = b"CLSAG_round";

/// Aggregation domain separator for `μ_P`.
pub const CLSAG_AGG_0: &[u8] = b"CLSAG_agg_0";

/// Aggregation domain separator for `μ_C`.
pub const CLSAG_AGG_1: &[u8] = b"CLSAG_agg_1";
