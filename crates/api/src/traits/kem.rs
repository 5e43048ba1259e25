// File: crates/api/src/traits/kem.rs

//! Trait definitions for Key Encapsulation Mechanisms (KEM)
//!
//! This module provides a type-safe capability surface for key encapsulation
//! mechanisms. Every KEM in this workspace is seed-derivable: a keypair is a
//! pure function of caller-supplied input key material, which is what makes
//! the mechanisms composable and test-vector friendly.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

/// Trait for a Key Encapsulation Mechanism with domain-specific types.
///
/// # Security Design
///
/// This trait enforces strong type safety and clear contracts for
/// serialization, preventing common key/ciphertext confusion bugs.
pub trait Kem {
    /// Encapsulation (public) key type.
    ///
    /// Implements `Serialize` to guarantee safe `from_bytes` and `to_bytes`
    /// methods with a fixed-length encoding.
    type EncapsulationKey: Clone + Serialize;

    /// Decapsulation (private) key type.
    ///
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Implements `SerializeSecret` to guarantee safe `from_bytes` and
    ///   `to_bytes_zeroizing` methods.
    type DecapsulationKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type.
    ///
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Should be converted to application keys immediately after generation.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + Serialize;

    /// Exact byte length of the input key material accepted by
    /// [`derive_keypair`](Self::derive_keypair).
    const IKM_LEN: usize;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Derive a keypair from input key material.
    ///
    /// Deterministic: the same `ikm` always yields the same keypair,
    /// byte for byte. Fails with [`Error::InvalidLength`](crate::Error) if
    /// `ikm` is not exactly [`IKM_LEN`](Self::IKM_LEN) bytes; no partial
    /// output is produced.
    fn derive_keypair(
        ikm: &[u8],
    ) -> Result<(Self::EncapsulationKey, Self::DecapsulationKey)>;

    /// Recompute the encapsulation key from a decapsulation key.
    ///
    /// Pure and deterministic; must reproduce, byte for byte, the
    /// encapsulation key originally derived alongside `dk`.
    fn encapsulation_key(dk: &Self::DecapsulationKey) -> Result<Self::EncapsulationKey>;

    /// Encapsulate a shared secret to the recipient's encapsulation key.
    ///
    /// Draws fresh randomness from the provided CSPRNG; everything else is a
    /// pure function of its inputs.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        ek: &Self::EncapsulationKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the decapsulation key.
    fn decapsulate(
        dk: &Self::DecapsulationKey,
        ct: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;

    /// Generate a keypair from caller-supplied randomness.
    ///
    /// Convenience wrapper: draws [`IKM_LEN`](Self::IKM_LEN) bytes from the
    /// CSPRNG and delegates to [`derive_keypair`](Self::derive_keypair).
    fn generate_keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> Result<(Self::EncapsulationKey, Self::DecapsulationKey)> {
        let mut ikm = Zeroizing::new(vec![0u8; Self::IKM_LEN]);
        rng.fill_bytes(&mut ikm);
        Self::derive_keypair(&ikm)
    }
}

/// A KEM that additionally supports derandomized encapsulation.
///
/// Required for composability: a combiner built on top of two such KEMs can
/// control the total randomness consumption of one hybrid encapsulation, and
/// deterministic test vectors become possible.
pub trait DerandomizedKem: Kem {
    /// Exact byte length of the encapsulation seed accepted by
    /// [`encapsulate_derand`](Self::encapsulate_derand).
    const ESEED_LEN: usize;

    /// Encapsulate with explicit randomness instead of drawing internally.
    ///
    /// Fails with [`Error::InvalidLength`](crate::Error) if `eseed` is not
    /// exactly [`ESEED_LEN`](Self::ESEED_LEN) bytes. Otherwise deterministic:
    /// identical `(ek, eseed)` always yields an identical
    /// `(ciphertext, shared secret)` pair.
    fn encapsulate_derand(
        ek: &Self::EncapsulationKey,
        eseed: &[u8],
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;
}
