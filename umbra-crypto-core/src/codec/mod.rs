//! Canonical binary codec.
//!
//! Every structure is written as a concatenation of:
//! - LEB128 varints (7 data bits per byte, high bit = continuation),
//! - 32-byte keys (compressed points or canonical scalars),
//! - single-byte booleans (`0` or `1`).
//!
//! Decoding is strict. A varint must be minimally encoded and fit in a `u64`,
//! keys must decode to canonical scalars or valid points, booleans must be
//! `0` or `1`, and callers reject trailing bytes through [`Reader::finish`].

mod reader;

pub use reader::Reader;

use curve25519_dalek::Scalar;

/// Maximum encoded length of a `u64` varint.
pub const MAX_VARINT_LEN: usize = 10;

/// Encode a `u64` as a LEB128 varint.
///
/// ```rust
/// use umbra_crypto_core::codec::encode_varint;
///
/// assert_eq!(encode_varint(0), vec![0]);
/// assert_eq!(encode_varint(127), vec![127]);
/// assert_eq!(encode_varint(128), vec![0x80, 0x01]);
/// ```
#[must_use]
pub fn encode_varint(mut n: u64) -> Vec<u8> {
    let mut result = Vec::with_capacity(MAX_VARINT_LEN);
    loop {
        let byte = (n & 0x7f) as u8;
        n >>= 7;
        if n == 0 {
            result.push(byte);
            break;
        }
        result.push(byte | 0x80);
    }
    result
}

/// Append-only byte sink for canonical encodings.
#[derive(Debug, Default, Clone)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// An empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty writer with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append a varint.
    pub fn varint(&mut self, value: u64) -> &mut Self {
        self.buf.extend_from_slice(&encode_varint(value));
        self
    }

    /// Append a 32-byte key.
    pub fn key(&mut self, bytes: &[u8; 32]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Append a scalar in canonical form.
    pub fn scalar(&mut self, scalar: &Scalar) -> &mut Self {
        self.key(scalar.as_bytes())
    }

    /// Append a boolean as one byte.
    pub fn boolean(&mut self, value: bool) -> &mut Self {
        self.buf.push(u8::from(value));
        self
    }

    /// Bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the writer, returning the encoding.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
