//! Integration tests for the hybrid KEM construction

use braid::prelude::*;
use rand::rngs::OsRng;

#[test]
fn test_full_hybrid_kem_workflow() {
    let mut rng = OsRng;

    // Recipient derives a keypair and publishes the encapsulation key as bytes
    let (public_key, secret_key) = DhKemP384MlKem768::generate_keypair(&mut rng).unwrap();
    let published = public_key.to_bytes();

    // === Sender side ===

    // Parse the published key and encapsulate a shared secret to it
    let recipient_key =
        <DhKemP384MlKem768 as Kem>::EncapsulationKey::from_bytes(&published).unwrap();
    let (ciphertext, shared_secret_sender) =
        DhKemP384MlKem768::encapsulate(&mut rng, &recipient_key).unwrap();
    let wire_ciphertext = ciphertext.to_bytes();

    // === Recipient side ===

    // Decapsulate the same shared secret from the wire encoding
    let received =
        <DhKemP384MlKem768 as Kem>::Ciphertext::from_bytes(&wire_ciphertext).unwrap();
    let shared_secret_recipient = DhKemP384MlKem768::decapsulate(&secret_key, &received).unwrap();

    assert_eq!(
        *shared_secret_sender.to_bytes_zeroizing(),
        *shared_secret_recipient.to_bytes_zeroizing()
    );
}

#[test]
fn test_composite_ciphertext_is_concatenation_of_constituents() {
    use braid::params::{DHKEM_P384_CIPHERTEXT_SIZE, DHKEM_P384_ESEED_SIZE};

    let ikm = [0x42u8; braid::params::DHKEM_P384_ML_KEM_768_IKM_SIZE];
    let eseed = [0x17u8; braid::params::DHKEM_P384_ML_KEM_768_ESEED_SIZE];

    let (hybrid_ek, _) = DhKemP384MlKem768::derive_keypair(&ikm).unwrap();
    let (hybrid_ct, _) = DhKemP384MlKem768::encapsulate_derand(&hybrid_ek, &eseed).unwrap();

    let hybrid_ek_bytes = hybrid_ek.to_bytes();
    let hybrid_ct_bytes = hybrid_ct.to_bytes();

    // The classical half of the composite ciphertext must be exactly what
    // the classical adapter produces from its half of the key and seed.
    let classical_ek = <DhKemP384 as Kem>::EncapsulationKey::from_bytes(
        &hybrid_ek_bytes[..braid::params::DHKEM_P384_ENCAPSULATION_KEY_SIZE],
    )
    .unwrap();
    let (classical_ct, _) =
        DhKemP384::encapsulate_derand(&classical_ek, &eseed[..DHKEM_P384_ESEED_SIZE]).unwrap();
    assert_eq!(
        classical_ct.to_bytes(),
        hybrid_ct_bytes[..DHKEM_P384_CIPHERTEXT_SIZE]
    );

    // Same for the post-quantum half.
    let post_quantum_ek = <MlKem768 as Kem>::EncapsulationKey::from_bytes(
        &hybrid_ek_bytes[braid::params::DHKEM_P384_ENCAPSULATION_KEY_SIZE..],
    )
    .unwrap();
    let (post_quantum_ct, _) =
        MlKem768::encapsulate_derand(&post_quantum_ek, &eseed[DHKEM_P384_ESEED_SIZE..]).unwrap();
    assert_eq!(
        post_quantum_ct.to_bytes(),
        hybrid_ct_bytes[DHKEM_P384_CIPHERTEXT_SIZE..]
    );
}

#[test]
fn test_decapsulation_key_is_self_contained() {
    // Marshal the decapsulation key, restore it, and check it still
    // reconstructs the original encapsulation key and decapsulates.
    let ikm = [0x07u8; braid::params::DHKEM_P384_ML_KEM_768_IKM_SIZE];
    let (ek, dk) = DhKemP384MlKem768::derive_keypair(&ikm).unwrap();

    let dk_restored =
        <DhKemP384MlKem768 as Kem>::DecapsulationKey::from_bytes(&dk.to_bytes_zeroizing())
            .unwrap();
    let ek_recomputed = DhKemP384MlKem768::encapsulation_key(&dk_restored).unwrap();
    assert_eq!(ek.to_bytes(), ek_recomputed.to_bytes());

    let eseed = [0x23u8; braid::params::DHKEM_P384_ML_KEM_768_ESEED_SIZE];
    let (ct, ss) = DhKemP384MlKem768::encapsulate_derand(&ek, &eseed).unwrap();
    let ss_restored = DhKemP384MlKem768::decapsulate(&dk_restored, &ct).unwrap();
    assert_eq!(*ss.to_bytes_zeroizing(), *ss_restored.to_bytes_zeroizing());
}
