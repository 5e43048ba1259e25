// File: crates/kem/src/mlkem/mod.rs

//! ML-KEM lattice KEMs (FIPS 203).
//!
//! Pure pass-throughs to the `ml-kem` provider crate; the adapter owns the
//! seed contracts (`d || z` keypair derivation, 32-byte encapsulation seed)
//! and the fixed-length byte encodings.

mod mlkem768;

pub use self::mlkem768::{
    MlKem768, MlKem768Ciphertext, MlKem768DecapsulationKey, MlKem768EncapsulationKey,
    MlKem768SharedSecret,
};
