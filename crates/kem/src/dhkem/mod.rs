// File: crates/kem/src/dhkem/mod.rs

//! Diffie-Hellman KEMs over NIST curves (RFC 9180).
//!
//! Curve arithmetic is delegated to the RustCrypto curve crates; this module
//! owns the DHKEM construction around it: seed-derived keypairs, the
//! labeled HKDF schedule, and derandomized encapsulation.

mod p384;

pub use self::p384::{
    DhKemP384, DhKemP384Ciphertext, DhKemP384DecapsulationKey, DhKemP384EncapsulationKey,
    DhKemP384SharedSecret,
};
