// File: crates/hybrid/src/kem/mod.rs

//! Hybrid Key Encapsulation Mechanisms (KEMs).
//!
//! This module composes two derandomized KEMs into one: caller key material
//! is stretched and split so each constituent gets an independent seed, both
//! constituents encapsulate side by side, and the final shared secret is a
//! single hash binding both secrets, both ciphertexts, both public keys and
//! the two suite identifiers.

// Internal modules
mod engine;
mod traits;

// Concrete hybrid KEM implementations
mod dhkem_p384_mlkem768;


// Re-export the primary hybrid KEM struct and the building blocks needed to
// assemble further pairings.
pub use dhkem_p384_mlkem768::DhKemP384MlKem768;
pub use engine::{
    HybridCiphertext, HybridDecapsulationKey, HybridEncapsulationKey, HybridKemEngine,
    HybridSharedSecret, HYBRID_SHARED_SECRET_SIZE,
};
pub use traits::KemDimensions;
