//! Group generators shared by every protocol in the crate.

use std::sync::LazyLock;

use curve25519_dalek::{
    constants::ED25519_BASEPOINT_POINT,
    edwards::{CompressedEdwardsY, EdwardsPoint},
};

/// Pedersen generator for amounts, as used by `RingCT`.
///
/// H = 8 * `hash_to_point(G)` where G is the ed25519 basepoint.
pub const H_BYTES: [u8; 32] = [
    0x8b, 0x65, 0x59, 0x70, 0x15, 0x37, 0x99, 0xaf, 0x2a, 0xea, 0xdc, 0x9f, 0xf1, 0xad, 0xd0, 0xea,
    0x6c, 0x72, 0x51, 0xd5, 0x41, 0x54, 0xcf, 0xa9, 0x2c, 0x17, 0x3a, 0x0d, 0xd3, 0x9c, 0x1f, 0x94,
];

/// The ed25519 basepoint. Blinding factors scale this generator.
pub const G: EdwardsPoint = ED25519_BASEPOINT_POINT;

/// The amount generator, decompressed once per process.
pub static H: LazyLock<EdwardsPoint> = LazyLock::new(|| {
    CompressedEdwardsY(H_BYTES)
        .decompress()
        .expect("H_BYTES is a valid curve point")
});
