//! Strict cursor over an encoded byte slice.

use curve25519_dalek::{edwards::EdwardsPoint, Scalar};

use crate::primitives::{decode_point, decode_scalar};
use crate::types::errors::{CryptoError, CryptoResult};

/// Data bits carried by one varint byte.
const DATA_BITS: u32 = 7;
const DATA_MASK: u8 = 0x7f;
const CONTINUATION: u8 = 0x80;

fn truncated(what: &str) -> CryptoError {
    CryptoError::DeserializationError(format!("truncated input while reading {what}"))
}

/// Reads canonical encodings produced by [`super::Writer`].
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Start reading at the beginning of `buf`.
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether every byte has been consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, len: usize, what: &str) -> CryptoResult<&'a [u8]> {
        if self.remaining() < len {
            return Err(truncated(what));
        }
        let buf: &'a [u8] = self.buf;
        let out = &buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    fn byte(&mut self, what: &str) -> CryptoResult<u8> {
        Ok(self.take(1, what)?[0])
    }

    /// Read a minimally encoded LEB128 varint.
    ///
    /// # Errors
    /// `DeserializationError` on truncation, overflow past 64 bits, or a
    /// redundant trailing zero byte.
    pub fn varint(&mut self) -> CryptoResult<u64> {
        let mut result: u64 = 0;
        let mut shift: u32 = 0;
        loop {
            let byte = self.byte("varint")?;
            let data = u64::from(byte & DATA_MASK);

            // The tenth byte may only carry the single remaining bit.
            if shift == 63 && data > 1 {
                return Err(CryptoError::DeserializationError(
                    "varint overflows u64".into(),
                ));
            }
            result |= data << shift;

            if byte & CONTINUATION == 0 {
                if byte == 0 && shift > 0 {
                    return Err(CryptoError::DeserializationError(
                        "non-canonical varint".into(),
                    ));
                }
                return Ok(result);
            }

            shift += DATA_BITS;
            if shift > 63 {
                return Err(CryptoError::DeserializationError(
                    "varint overflows u64".into(),
                ));
            }
        }
    }

    /// Read a varint used as an element count.
    ///
    /// The count is bounded by how many `element_size`-byte elements could
    /// still fit in the input, so a hostile length never drives allocation.
    ///
    /// # Errors
    /// Varint failures, or a count larger than the remaining input allows.
    pub fn count(&mut self, element_size: usize, what: &str) -> CryptoResult<usize> {
        let count = self.varint()?;
        let max = self.remaining() / element_size.max(1);
        usize::try_from(count)
            .ok()
            .filter(|count| *count <= max)
            .ok_or_else(|| {
                CryptoError::DeserializationError(format!(
                    "{what} count {count} exceeds remaining input"
                ))
            })
    }

    /// Read 32 raw bytes.
    ///
    /// # Errors
    /// `DeserializationError` on truncation.
    pub fn bytes32(&mut self) -> CryptoResult<[u8; 32]> {
        let mut out = [0u8; 32];
        out.copy_from_slice(self.take(32, "key")?);
        Ok(out)
    }

    /// Read a canonical scalar.
    ///
    /// # Errors
    /// Truncation, or `InvalidScalar` for an unreduced value.
    pub fn scalar(&mut self) -> CryptoResult<Scalar> {
        decode_scalar(&self.bytes32()?)
    }

    /// Read a torsion-free point.
    ///
    /// # Errors
    /// Truncation, or `InvalidPoint` for an invalid encoding.
    pub fn point(&mut self) -> CryptoResult<EdwardsPoint> {
        decode_point(&self.bytes32()?)
    }

    /// Read a boolean byte.
    ///
    /// # Errors
    /// Truncation, or `DeserializationError` for a byte other than `0`/`1`.
    pub fn boolean(&mut self) -> CryptoResult<bool> {
        match self.byte("boolean")? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(CryptoError::DeserializationError(format!(
                "invalid boolean byte {other:#04x}"
            ))),
        }
    }

    /// Require that the input has been fully consumed.
    ///
    /// # Errors
    /// `DeserializationError` if bytes remain.
    pub fn finish(self) -> CryptoResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CryptoError::DeserializationError(format!(
                "{} trailing bytes",
                self.remaining()
            )))
        }
    }
}
