use super::MlKem768;
use braid_api::{DerandomizedKem, Kem, Serialize, SerializeSecret};
use braid_params::{ML_KEM_768_CIPHERTEXT_SIZE, ML_KEM_768_ENCAPSULATION_KEY_SIZE};
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn derive_keypair_is_deterministic() {
    let ikm = [7u8; 64];
    let (ek1, dk1) = MlKem768::derive_keypair(&ikm).unwrap();
    let (ek2, dk2) = MlKem768::derive_keypair(&ikm).unwrap();
    assert_eq!(ek1.to_bytes(), ek2.to_bytes());
    assert_eq!(*dk1.to_bytes_zeroizing(), *dk2.to_bytes_zeroizing());
}

#[test]
fn derive_keypair_rejects_wrong_ikm_length() {
    assert!(MlKem768::derive_keypair(&[0u8; 63]).is_err());
    assert!(MlKem768::derive_keypair(&[0u8; 65]).is_err());
    assert!(MlKem768::derive_keypair(&[0u8; 32]).is_err());
}

#[test]
fn encapsulate_derand_is_deterministic() {
    let (ek, _) = MlKem768::derive_keypair(&[9u8; 64]).unwrap();
    let eseed = [3u8; 32];
    let (ct1, ss1) = MlKem768::encapsulate_derand(&ek, &eseed).unwrap();
    let (ct2, ss2) = MlKem768::encapsulate_derand(&ek, &eseed).unwrap();
    assert_eq!(ct1.to_bytes(), ct2.to_bytes());
    assert_eq!(*ss1.to_bytes_zeroizing(), *ss2.to_bytes_zeroizing());
    assert_eq!(ct1.to_bytes().len(), ML_KEM_768_CIPHERTEXT_SIZE);
}

#[test]
fn encapsulate_derand_rejects_wrong_eseed_length() {
    let (ek, _) = MlKem768::derive_keypair(&[9u8; 64]).unwrap();
    assert!(MlKem768::encapsulate_derand(&ek, &[0u8; 31]).is_err());
    assert!(MlKem768::encapsulate_derand(&ek, &[0u8; 33]).is_err());
}

#[test]
fn roundtrip_with_seeded_rng() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xb41d);
    let (ek, dk) = MlKem768::generate_keypair(&mut rng).unwrap();
    assert_eq!(ek.to_bytes().len(), ML_KEM_768_ENCAPSULATION_KEY_SIZE);

    let (ct, ss_sender) = MlKem768::encapsulate(&mut rng, &ek).unwrap();
    let ss_recipient = MlKem768::decapsulate(&dk, &ct).unwrap();
    assert_eq!(
        *ss_sender.to_bytes_zeroizing(),
        *ss_recipient.to_bytes_zeroizing()
    );
}

#[test]
fn encapsulation_key_matches_derived() {
    let (ek, dk) = MlKem768::generate_keypair(&mut OsRng).unwrap();
    let recomputed = MlKem768::encapsulation_key(&dk).unwrap();
    assert_eq!(ek.to_bytes(), recomputed.to_bytes());
}

#[test]
fn tampered_ciphertext_yields_different_secret() {
    // Implicit rejection: decapsulation of a corrupted ciphertext succeeds
    // but returns an unrelated secret.
    let (ek, dk) = MlKem768::derive_keypair(&[5u8; 64]).unwrap();
    let (ct, ss) = MlKem768::encapsulate_derand(&ek, &[6u8; 32]).unwrap();

    let mut tampered = ct.to_bytes();
    tampered[0] ^= 0x01;
    let ct_tampered =
        <MlKem768 as Kem>::Ciphertext::from_bytes(&tampered).unwrap();
    let ss_tampered = MlKem768::decapsulate(&dk, &ct_tampered).unwrap();
    assert_ne!(
        *ss.to_bytes_zeroizing(),
        *ss_tampered.to_bytes_zeroizing()
    );
}
