//! CLSAG types for signatures and the multisig signing round.
//!
//! ## Wire format
//!
//! ```text
//! varint(n) || s_0 .. s_{n-1} || challenge || flag
//!     [ || commitment_image || pseudo_commitment ]   (flag = 1)
//!     || varint(m) || varint(offset_0) .. varint(offset_{m-1})
//! ```
//!
//! The JSON form carries the same data as lowercase hex strings.

use core::fmt;

use curve25519_dalek::Scalar;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::codec::{Reader, Writer};
use crate::hash::sha3;
use crate::primitives::{scalar_from_hex, scalar_to_hex};
use crate::types::errors::{CryptoError, CryptoResult};
use crate::types::keys::{KeyImage, PedersenCommitment};

/// Whether a signature is bound to a Pedersen commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitmentBinding {
    /// Plain ring signature over public keys only.
    Absent,
    /// Signature also proves the input and pseudo commitments hide the same amount.
    Present {
        /// `D = z * Hp(P_l)` where `z` is the input minus pseudo blinding factor.
        commitment_image: KeyImage,
        /// The pseudo output commitment `C'`.
        pseudo_commitment: PedersenCommitment,
    },
}

impl CommitmentBinding {
    /// Whether commitments are bound.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }
}

/// A CLSAG ring signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClsagSignatureJson", into = "ClsagSignatureJson")]
pub struct ClsagSignature {
    /// One response per ring member.
    pub scalars: Vec<Scalar>,

    /// Challenge at ring position 0.
    pub challenge: Scalar,

    /// Commitment binding, if any.
    pub commitment: CommitmentBinding,

    /// Global output indices of the ring members. Not covered by the signature.
    pub offsets: Vec<u64>,
}

impl ClsagSignature {
    /// Ring size this signature was produced for.
    #[must_use]
    pub fn ring_size(&self) -> usize {
        self.scalars.len()
    }

    /// Length of the canonical binary encoding in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.to_bytes().len()
    }

    /// Canonical binary encoding.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(32 * (self.scalars.len() + 3) + 8);
        writer.varint(self.scalars.len() as u64);
        for scalar in &self.scalars {
            writer.scalar(scalar);
        }
        writer.scalar(&self.challenge);

        match &self.commitment {
            CommitmentBinding::Absent => {
                writer.boolean(false);
            }
            CommitmentBinding::Present {
                commitment_image,
                pseudo_commitment,
            } => {
                writer
                    .boolean(true)
                    .key(commitment_image.as_bytes())
                    .key(pseudo_commitment.as_bytes());
            }
        }

        writer.varint(self.offsets.len() as u64);
        for offset in &self.offsets {
            writer.varint(*offset);
        }
        writer.into_bytes()
    }

    /// Decode the canonical binary encoding.
    ///
    /// # Errors
    /// `DeserializationError`, `InvalidScalar` or `InvalidPoint` on truncated,
    /// trailing, or malformed input.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let mut reader = Reader::new(bytes);

        let count = reader.count(32, "scalar")?;
        let scalars = (0..count)
            .map(|_| reader.scalar())
            .collect::<CryptoResult<Vec<_>>>()?;
        let challenge = reader.scalar()?;

        let commitment = if reader.boolean()? {
            CommitmentBinding::Present {
                commitment_image: KeyImage::from_point_unchecked(reader.point()?),
                pseudo_commitment: PedersenCommitment::from_point_unchecked(reader.point()?),
            }
        } else {
            CommitmentBinding::Absent
        };

        let count = reader.count(1, "offset")?;
        let offsets = (0..count)
            .map(|_| reader.varint())
            .collect::<CryptoResult<Vec<_>>>()?;

        reader.finish()?;

        Ok(Self {
            scalars,
            challenge,
            commitment,
            offsets,
        })
    }

    /// Lowercase hex of [`Self::to_bytes`].
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decode from hex.
    ///
    /// # Errors
    /// Hex failures, then anything [`Self::from_bytes`] rejects.
    pub fn from_hex(input: &str) -> CryptoResult<Self> {
        Self::from_bytes(&hex::decode(input)?)
    }

    /// SHA3-256 of the binary encoding.
    #[must_use]
    pub fn hash(&self) -> [u8; 32] {
        sha3(&self.to_bytes())
    }

    /// JSON encoding.
    ///
    /// # Errors
    /// `JsonError` if serialization fails.
    pub fn to_json(&self) -> CryptoResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    ///
    /// # Errors
    /// `JsonError` on malformed JSON or invalid field values.
    pub fn from_json(input: &str) -> CryptoResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

impl fmt::Display for ClsagSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CLSAG [{} bytes]:", self.size())?;
        writeln!(f, "\tscalars:")?;
        for scalar in &self.scalars {
            writeln!(f, "\t\t{}", scalar_to_hex(scalar))?;
        }
        writeln!(f, "\tchallenge: {}", scalar_to_hex(&self.challenge))?;
        if let CommitmentBinding::Present {
            commitment_image,
            pseudo_commitment,
        } = &self.commitment
        {
            writeln!(f, "\tcommitment_image: {commitment_image}")?;
            writeln!(f, "\tpseudo_commitment: {pseudo_commitment}")?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClsagSignatureJson {
    scalars: Vec<String>,
    challenge: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    commitment_image: Option<KeyImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pseudo_commitment: Option<PedersenCommitment>,
    offsets: Vec<u64>,
}

impl From<ClsagSignature> for ClsagSignatureJson {
    fn from(signature: ClsagSignature) -> Self {
        let (commitment_image, pseudo_commitment) = match signature.commitment {
            CommitmentBinding::Absent => (None, None),
            CommitmentBinding::Present {
                commitment_image,
                pseudo_commitment,
            } => (Some(commitment_image), Some(pseudo_commitment)),
        };
        Self {
            scalars: signature.scalars.iter().map(scalar_to_hex).collect(),
            challenge: scalar_to_hex(&signature.challenge),
            commitment_image,
            pseudo_commitment,
            offsets: signature.offsets,
        }
    }
}

impl TryFrom<ClsagSignatureJson> for ClsagSignature {
    type Error = CryptoError;

    fn try_from(json: ClsagSignatureJson) -> CryptoResult<Self> {
        let commitment = match (json.commitment_image, json.pseudo_commitment) {
            (None, None) => CommitmentBinding::Absent,
            (Some(commitment_image), Some(pseudo_commitment)) => CommitmentBinding::Present {
                commitment_image,
                pseudo_commitment,
            },
            _ => {
                return Err(CryptoError::DeserializationError(
                    "commitment_image and pseudo_commitment must appear together".into(),
                ))
            }
        };

        Ok(Self {
            scalars: json
                .scalars
                .iter()
                .map(|s| scalar_from_hex(s))
                .collect::<CryptoResult<Vec<_>>>()?,
            challenge: scalar_from_hex(&json.challenge)?,
            commitment,
            offsets: json.offsets,
        })
    }
}

/// Output of the prepare step: a signature whose real slot still holds the
/// masked nonce, plus what the completing party needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRingSignature {
    /// Signature with a placeholder at the real index.
    pub signature: ClsagSignature,

    /// Challenge entering each ring position.
    pub h: Vec<Scalar>,

    /// Key mixing coefficient `μ_P`, shared with every signer.
    pub mu_p: Scalar,
}

/// Openings needed to bind a signature to a Pedersen commitment.
///
/// Grouped so a signer supplies all four values or none. The blinding
/// factors are wiped when the openings are dropped; the borrowed commitment
/// ring is released as soon as the openings go out of use.
#[derive(Clone)]
pub struct SigningCommitments<'a> {
    /// Blinding factor of the real input's commitment.
    pub input_blinding_factor: Zeroizing<Scalar>,

    /// Commitment of every ring member, in ring order.
    pub public_commitments: &'a [PedersenCommitment],

    /// Blinding factor of the pseudo output.
    pub pseudo_blinding_factor: Zeroizing<Scalar>,

    /// The pseudo output commitment.
    pub pseudo_commitment: PedersenCommitment,
}

impl<'a> SigningCommitments<'a> {
    /// Group the openings for one input.
    #[must_use]
    pub fn new(
        input_blinding_factor: Scalar,
        public_commitments: &'a [PedersenCommitment],
        pseudo_blinding_factor: Scalar,
        pseudo_commitment: PedersenCommitment,
    ) -> Self {
        Self {
            input_blinding_factor: Zeroizing::new(input_blinding_factor),
            public_commitments,
            pseudo_blinding_factor: Zeroizing::new(pseudo_blinding_factor),
            pseudo_commitment,
        }
    }
}
