// File: crates/hybrid/src/kem/traits.rs

//! Defines traits for extending KEM functionality within the hybrid crate.

use braid_api::DerandomizedKem;
use braid_kem::{dhkem, mlkem};
use braid_params::{
    DHKEM_P384_CIPHERTEXT_SIZE, DHKEM_P384_DECAPSULATION_KEY_SIZE,
    DHKEM_P384_ENCAPSULATION_KEY_SIZE, DHKEM_P384_KEM_ID, DHKEM_P384_SHARED_SECRET_SIZE,
    ML_KEM_768_CIPHERTEXT_SIZE, ML_KEM_768_DECAPSULATION_KEY_SIZE,
    ML_KEM_768_ENCAPSULATION_KEY_SIZE, ML_KEM_768_KEM_ID, ML_KEM_768_SHARED_SECRET_SIZE,
};

/// Extends `braid_api::DerandomizedKem` with compile-time length constants
/// and the constituent's registry identifier. This is what lets the generic
/// engine serialize composite values and split seed material without ever
/// naming a concrete primitive.
pub trait KemDimensions: DerandomizedKem {
    /// The byte length of the encapsulation key encoding.
    const ENCAPSULATION_KEY_LEN: usize;
    /// The byte length of the decapsulation key encoding.
    const DECAPSULATION_KEY_LEN: usize;
    /// The byte length of the ciphertext.
    const CIPHERTEXT_LEN: usize;
    /// The byte length of the shared secret.
    const SHARED_SECRET_LEN: usize;
    /// The KEM identifier assigned by the HPKE registry.
    ///
    /// Bound into every combined-secret computation, big-endian. Pairings
    /// must use the registry's assigned values to interoperate with
    /// conforming peers.
    const KEM_ID: u16;
}

impl KemDimensions for dhkem::DhKemP384 {
    const ENCAPSULATION_KEY_LEN: usize = DHKEM_P384_ENCAPSULATION_KEY_SIZE;
    const DECAPSULATION_KEY_LEN: usize = DHKEM_P384_DECAPSULATION_KEY_SIZE;
    const CIPHERTEXT_LEN: usize = DHKEM_P384_CIPHERTEXT_SIZE;
    const SHARED_SECRET_LEN: usize = DHKEM_P384_SHARED_SECRET_SIZE;
    const KEM_ID: u16 = DHKEM_P384_KEM_ID;
}

impl KemDimensions for mlkem::MlKem768 {
    const ENCAPSULATION_KEY_LEN: usize = ML_KEM_768_ENCAPSULATION_KEY_SIZE;
    const DECAPSULATION_KEY_LEN: usize = ML_KEM_768_DECAPSULATION_KEY_SIZE;
    const CIPHERTEXT_LEN: usize = ML_KEM_768_CIPHERTEXT_SIZE;
    const SHARED_SECRET_LEN: usize = ML_KEM_768_SHARED_SECRET_SIZE;
    const KEM_ID: u16 = ML_KEM_768_KEM_ID;
}
