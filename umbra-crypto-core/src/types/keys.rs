//! Strongly typed curve points.
//!
//! Every wrapper holds a point that has already passed validation (on-curve,
//! canonical, torsion-free), together with its compressed encoding so hashing a
//! ring never has to re-compress. The hex string is the human-facing and JSON form.

use core::fmt;
use core::str::FromStr;

use curve25519_dalek::{
    edwards::{CompressedEdwardsY, EdwardsPoint},
    traits::{Identity, IsIdentity},
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::primitives::decode_point;
use crate::types::errors::{CryptoError, CryptoResult};

macro_rules! point_type {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            point: EdwardsPoint,
            compressed: CompressedEdwardsY,
        }

        impl $name {
            /// Decode from 32 compressed bytes.
            ///
            /// # Errors
            /// `InvalidLength` or `InvalidPoint` if the bytes are not a valid point.
            pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
                decode_point(bytes).map(Self::from_point_unchecked)
            }

            /// Decode from a 64-character hex string.
            ///
            /// # Errors
            /// Hex or point decoding failures.
            pub fn from_hex(input: &str) -> CryptoResult<Self> {
                Self::from_bytes(&hex::decode(input)?)
            }

            /// Wrap a point the crate computed itself from prime-order inputs.
            pub(crate) fn from_point_unchecked(point: EdwardsPoint) -> Self {
                Self {
                    point,
                    compressed: point.compress(),
                }
            }

            /// The identity point.
            #[must_use]
            pub fn identity() -> Self {
                Self::from_point_unchecked(EdwardsPoint::identity())
            }

            /// Whether this is the identity point.
            #[must_use]
            pub fn is_identity(&self) -> bool {
                self.point.is_identity()
            }

            /// The decompressed point.
            #[must_use]
            pub const fn point(&self) -> &EdwardsPoint {
                &self.point
            }

            /// The compressed encoding.
            #[must_use]
            pub fn as_bytes(&self) -> &[u8; 32] {
                self.compressed.as_bytes()
            }

            /// The compressed encoding, by value.
            #[must_use]
            pub fn to_bytes(&self) -> [u8; 32] {
                self.compressed.to_bytes()
            }

            /// Lowercase hex of the compressed encoding.
            #[must_use]
            pub fn to_hex(&self) -> String {
                hex::encode(self.as_bytes())
            }
        }

        impl TryFrom<EdwardsPoint> for $name {
            type Error = CryptoError;

            fn try_from(point: EdwardsPoint) -> CryptoResult<Self> {
                if !point.is_torsion_free() {
                    return Err(CryptoError::InvalidPoint(
                        concat!($label, " has a torsion component").into(),
                    ));
                }
                Ok(Self::from_point_unchecked(point))
            }
        }

        impl From<$name> for EdwardsPoint {
            fn from(value: $name) -> Self {
                value.point
            }
        }

        impl core::hash::Hash for $name {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                self.as_bytes().hash(state);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.to_hex())
            }
        }

        impl FromStr for $name {
            type Err = CryptoError;

            fn from_str(s: &str) -> CryptoResult<Self> {
                Self::from_hex(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(de::Error::custom)
            }
        }
    };
}

point_type!(
    /// A public key `P = x*G`, or any valid point standing in as a ring member.
    PublicKey,
    "public key"
);

point_type!(
    /// A key image `I = x*Hp(P)`.
    ///
    /// Deterministic in the secret key: the same output always yields the same
    /// image, whichever ring it is spent in.
    KeyImage,
    "key image"
);

point_type!(
    /// A Pedersen commitment `C = blinding*G + amount*H`.
    PedersenCommitment,
    "commitment"
);

point_type!(
    /// A key derivation `D = 8*s*P` shared between sender and recipient.
    KeyDerivation,
    "key derivation"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::generate_keys;

    #[test]
    fn test_hex_round_trip() {
        let (public_key, _) = generate_keys();
        let parsed: PublicKey = public_key.to_hex().parse().unwrap();
        assert_eq!(parsed, public_key);
    }

    #[test]
    fn test_from_bytes_rejects_bad_length() {
        assert!(matches!(
            KeyImage::from_bytes(&[1u8; 16]),
            Err(CryptoError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_identity() {
        let identity = PedersenCommitment::identity();
        assert!(identity.is_identity());
        assert_eq!(
            PedersenCommitment::from_bytes(identity.as_bytes()).unwrap(),
            identity
        );
    }

    #[test]
    fn test_serde_as_hex_string() {
        let (public_key, _) = generate_keys();
        let json = serde_json::to_string(&public_key).unwrap();
        assert_eq!(json, format!("\"{}\"", public_key.to_hex()));
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, public_key);
    }

    #[test]
    fn test_serde_rejects_invalid_point() {
        let result: Result<KeyImage, _> = serde_json::from_str(&format!("\"{}\"", "ff".repeat(32)));
        assert!(result.is_err());
    }
}
