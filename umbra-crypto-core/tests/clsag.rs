//! Integration tests: CLSAG signing and verification.
//!
//! Covers single-signer completeness across ring sizes and positions,
//! commitment-bound signatures, linkability and soundness under tampering.
//!
//! Run: `cargo test --test clsag`

use proptest::prelude::*;

use umbra_crypto_core::prelude::*;
use umbra_crypto_core::ringct::generate_pedersen_commitment;

// =====================================================================
// Helpers
// =====================================================================

/// Ring of `size` random members with a real key at `real`.
fn ring_with_signer(size: usize, real: usize) -> (Vec<PublicKey>, Scalar) {
    let (public_key, secret_key) = generate_keys();
    let mut ring = random_points(size);
    ring[real] = public_key;
    (ring, secret_key)
}

struct CommitmentFixture {
    ring: Vec<PedersenCommitment>,
    input_blinding: Scalar,
    pseudo_blinding: Scalar,
    pseudo_commitment: PedersenCommitment,
}

impl CommitmentFixture {
    /// Commitment ring whose member at `real` hides `amount`, plus a pseudo
    /// output for the same amount under a fresh blinding factor.
    fn new(size: usize, real: usize, amount: u64) -> Self {
        let input_blinding = random_scalar();
        let pseudo_blinding = random_scalar();
        let ring = (0..size)
            .map(|i| {
                if i == real {
                    generate_pedersen_commitment(&input_blinding, amount)
                } else {
                    generate_pedersen_commitment(&random_scalar(), 1_000 + i as u64)
                }
            })
            .collect();
        Self {
            ring,
            input_blinding,
            pseudo_blinding,
            pseudo_commitment: generate_pedersen_commitment(&pseudo_blinding, amount),
        }
    }

    fn openings(&self) -> SigningCommitments<'_> {
        SigningCommitments::new(
            self.input_blinding,
            &self.ring,
            self.pseudo_blinding,
            self.pseudo_commitment,
        )
    }
}

fn sign_and_check(size: usize, real: usize, with_commitments: bool) -> bool {
    let (ring, secret_key) = ring_with_signer(size, real);
    let key_image = generate_key_image(&ring[real], &secret_key, &[]).unwrap();
    let digest = [0x5a; 32];

    if with_commitments {
        let fixture = CommitmentFixture::new(size, real, 4_200);
        let signature =
            generate_ring_signature(&digest, &secret_key, &ring, Some(&fixture.openings()))
                .unwrap();
        assert!(signature.commitment.is_present());
        check_ring_signature(&digest, &key_image, &ring, &signature, &fixture.ring)
    } else {
        let signature = generate_ring_signature(&digest, &secret_key, &ring, None).unwrap();
        check_ring_signature(&digest, &key_image, &ring, &signature, &[])
    }
}

// =====================================================================
// Completeness
// =====================================================================

#[test]
fn test_every_position_of_small_rings() {
    for size in 1..=5 {
        for real in 0..size {
            assert!(sign_and_check(size, real, false), "plain {real}/{size}");
            assert!(sign_and_check(size, real, true), "bound {real}/{size}");
        }
    }
}

#[test]
fn test_ring_of_sixteen() {
    assert!(sign_and_check(16, 11, true));
}

#[test]
fn test_ring_of_three_zero_digest() {
    let (ring, secret_key) = ring_with_signer(3, 1);
    let key_image = generate_key_image(&ring[1], &secret_key, &[]).unwrap();
    let digest = [0u8; 32];

    let prepared = prepare_ring_signature(&digest, &key_image, &ring, 1, None).unwrap();
    assert_eq!(prepared.signature.scalars.len(), 3);
    assert_ne!(prepared.signature.challenge, Scalar::ZERO);

    let signature = complete_ring_signature(
        &secret_key,
        1,
        &prepared.signature,
        &prepared.h,
        &prepared.mu_p,
        &[],
    )
    .unwrap();
    assert!(check_ring_signature(&digest, &key_image, &ring, &signature, &[]));

    let mut swapped = ring.clone();
    swapped[0] = random_point();
    assert!(!check_ring_signature(&digest, &key_image, &swapped, &signature, &[]));
}

// =====================================================================
// Commitment binding
// =====================================================================

#[test]
fn test_commitment_bound_signature_needs_matching_ring() {
    let (ring, secret_key) = ring_with_signer(4, 2);
    let key_image = generate_key_image(&ring[2], &secret_key, &[]).unwrap();
    let fixture = CommitmentFixture::new(4, 2, 77);
    let digest = [1u8; 32];

    let signature =
        generate_ring_signature(&digest, &secret_key, &ring, Some(&fixture.openings())).unwrap();

    assert!(check_ring_signature(&digest, &key_image, &ring, &signature, &fixture.ring));
    assert!(!check_ring_signature(&digest, &key_image, &ring, &signature, &[]));
    assert!(!check_ring_signature(
        &digest,
        &key_image,
        &ring,
        &signature,
        &fixture.ring[..3]
    ));

    let mut other = fixture.ring.clone();
    other[0] = generate_pedersen_commitment(&random_scalar(), 1);
    assert!(!check_ring_signature(&digest, &key_image, &ring, &signature, &other));
}

#[test]
fn test_pseudo_commitment_for_other_amount_rejected() {
    let (ring, secret_key) = ring_with_signer(3, 0);
    let fixture = CommitmentFixture::new(3, 0, 500);
    let pseudo_blinding = random_scalar();
    let openings = SigningCommitments::new(
        fixture.input_blinding,
        &fixture.ring,
        pseudo_blinding,
        generate_pedersen_commitment(&pseudo_blinding, 501),
    );

    assert!(matches!(
        generate_ring_signature(&[0u8; 32], &secret_key, &ring, Some(&openings)),
        Err(CryptoError::CommitmentMismatch(_))
    ));
}

#[test]
fn test_tampered_commitment_binding_rejected() {
    let (ring, secret_key) = ring_with_signer(3, 1);
    let key_image = generate_key_image(&ring[1], &secret_key, &[]).unwrap();
    let fixture = CommitmentFixture::new(3, 1, 640);
    let digest = [9u8; 32];

    let signature =
        generate_ring_signature(&digest, &secret_key, &ring, Some(&fixture.openings())).unwrap();
    assert!(check_ring_signature(&digest, &key_image, &ring, &signature, &fixture.ring));

    let CommitmentBinding::Present {
        commitment_image,
        pseudo_commitment,
    } = signature.commitment
    else {
        panic!("signature should carry a commitment binding");
    };

    let mut other_amount = signature.clone();
    other_amount.commitment = CommitmentBinding::Present {
        commitment_image,
        pseudo_commitment: generate_pedersen_commitment(&fixture.pseudo_blinding, 641),
    };
    assert!(!check_ring_signature(&digest, &key_image, &ring, &other_amount, &fixture.ring));

    let mut identity_image = signature.clone();
    identity_image.commitment = CommitmentBinding::Present {
        commitment_image: KeyImage::identity(),
        pseudo_commitment,
    };
    assert!(!check_ring_signature(&digest, &key_image, &ring, &identity_image, &fixture.ring));

    let mut unbound = signature;
    unbound.commitment = CommitmentBinding::Absent;
    assert!(!check_ring_signature(&digest, &key_image, &ring, &unbound, &[]));
}

// =====================================================================
// Linkability
// =====================================================================

#[test]
fn test_same_key_same_image_across_rings() {
    let (public_key, secret_key) = generate_keys();
    let mut ring_a = random_points(4);
    ring_a[0] = public_key;
    let mut ring_b = random_points(6);
    ring_b[5] = public_key;

    let image = generate_key_image(&public_key, &secret_key, &[]).unwrap();
    let signature_a = generate_ring_signature(&[1u8; 32], &secret_key, &ring_a, None).unwrap();
    let signature_b = generate_ring_signature(&[2u8; 32], &secret_key, &ring_b, None).unwrap();

    assert!(check_ring_signature(&[1u8; 32], &image, &ring_a, &signature_a, &[]));
    assert!(check_ring_signature(&[2u8; 32], &image, &ring_b, &signature_b, &[]));

    let (other_public, other_secret) = generate_keys();
    assert_ne!(
        generate_key_image(&other_public, &other_secret, &[]).unwrap(),
        image
    );
}

#[test]
fn test_wrong_key_image_rejected() {
    let (ring, secret_key) = ring_with_signer(3, 2);
    let signature = generate_ring_signature(&[0u8; 32], &secret_key, &ring, None).unwrap();
    let (other_public, other_secret) = generate_keys();
    let other_image = generate_key_image(&other_public, &other_secret, &[]).unwrap();
    assert!(!check_ring_signature(&[0u8; 32], &other_image, &ring, &signature, &[]));
}

// =====================================================================
// Soundness
// =====================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_flipped_byte_rejected(
        position in 0usize..4,
        byte in 0usize..32,
        mask in 1u8..=255,
    ) {
        let (ring, secret_key) = ring_with_signer(3, 1);
        let key_image = generate_key_image(&ring[1], &secret_key, &[]).unwrap();
        let digest = [7u8; 32];
        let signature = generate_ring_signature(&digest, &secret_key, &ring, None).unwrap();

        let target = if position < 3 {
            signature.scalars[position]
        } else {
            signature.challenge
        };
        let mut bytes = target.to_bytes();
        bytes[byte] ^= mask;

        // Flips that leave the scalar range make the encoding invalid outright.
        if let Some(tampered_scalar) = Option::<Scalar>::from(Scalar::from_canonical_bytes(bytes)) {
            let mut tampered = signature.clone();
            if position < 3 {
                tampered.scalars[position] = tampered_scalar;
            } else {
                tampered.challenge = tampered_scalar;
            }
            prop_assert!(!check_ring_signature(&digest, &key_image, &ring, &tampered, &[]));
        }
    }
}
