// File: crates/hybrid/src/kem/engine.rs

//! A generic engine for creating hybrid KEMs.
//!
//! The engine composes any two [`KemDimensions`] instances. Its only inputs
//! beyond the constituents are the pairing's key-derivation label; every
//! other constant (lengths, registry identifiers) comes from the trait.

use super::traits::KemDimensions;
use braid_api::{
    error::Error as ApiError, error::Result as ApiResult, DerandomizedKem, Kem, SecretBytes,
    Serialize, SerializeSecret,
};
use core::marker::PhantomData;
use hkdf::Hkdf;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Byte length of every hybrid shared secret (SHA-512 digest).
pub const HYBRID_SHARED_SECRET_SIZE: usize = 64;

// --- Generic Hybrid Data Structures ---

/// Composite encapsulation key: classical half first, post-quantum second.
pub struct HybridEncapsulationKey<C: KemDimensions, P: KemDimensions> {
    pub classical_ek: C::EncapsulationKey,
    pub post_quantum_ek: P::EncapsulationKey,
}

/// Composite decapsulation key: classical half first, post-quantum second.
pub struct HybridDecapsulationKey<C: KemDimensions, P: KemDimensions> {
    pub classical_dk: C::DecapsulationKey,
    pub post_quantum_dk: P::DecapsulationKey,
}

/// Composite ciphertext: classical half first, post-quantum second.
pub struct HybridCiphertext<C: KemDimensions, P: KemDimensions> {
    pub classical_ct: C::Ciphertext,
    pub post_quantum_ct: P::Ciphertext,
}

/// Combined shared secret produced by the key-combination hash.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HybridSharedSecret(SecretBytes<HYBRID_SHARED_SECRET_SIZE>);

impl AsRef<[u8]> for HybridSharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl SerializeSecret for HybridSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(SecretBytes::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0.to_bytes_zeroizing()
    }
}

// --- Manual Trait Implementations for Hybrid Structs ---

// --- HybridEncapsulationKey ---
impl<C: KemDimensions, P: KemDimensions> Clone for HybridEncapsulationKey<C, P> {
    fn clone(&self) -> Self {
        Self {
            classical_ek: self.classical_ek.clone(),
            post_quantum_ek: self.post_quantum_ek.clone(),
        }
    }
}

impl<C: KemDimensions, P: KemDimensions> Serialize for HybridEncapsulationKey<C, P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let total_len = C::ENCAPSULATION_KEY_LEN + P::ENCAPSULATION_KEY_LEN;
        if bytes.len() != total_len {
            return Err(ApiError::InvalidLength {
                context: "HybridEncapsulationKey::from_bytes",
                expected: total_len,
                actual: bytes.len(),
            });
        }
        let (classical_bytes, post_quantum_bytes) = bytes.split_at(C::ENCAPSULATION_KEY_LEN);
        Ok(Self {
            classical_ek: C::EncapsulationKey::from_bytes(classical_bytes)?,
            post_quantum_ek: P::EncapsulationKey::from_bytes(post_quantum_bytes)?,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        [self.classical_ek.to_bytes(), self.post_quantum_ek.to_bytes()].concat()
    }
}

// --- HybridDecapsulationKey ---
impl<C: KemDimensions, P: KemDimensions> Clone for HybridDecapsulationKey<C, P> {
    fn clone(&self) -> Self {
        Self {
            classical_dk: self.classical_dk.clone(),
            post_quantum_dk: self.post_quantum_dk.clone(),
        }
    }
}

impl<C: KemDimensions, P: KemDimensions> Zeroize for HybridDecapsulationKey<C, P> {
    fn zeroize(&mut self) {
        self.classical_dk.zeroize();
        self.post_quantum_dk.zeroize();
    }
}
impl<C: KemDimensions, P: KemDimensions> Drop for HybridDecapsulationKey<C, P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}
impl<C: KemDimensions, P: KemDimensions> ZeroizeOnDrop for HybridDecapsulationKey<C, P> {}

impl<C: KemDimensions, P: KemDimensions> SerializeSecret for HybridDecapsulationKey<C, P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let total_len = C::DECAPSULATION_KEY_LEN + P::DECAPSULATION_KEY_LEN;
        if bytes.len() != total_len {
            return Err(ApiError::InvalidLength {
                context: "HybridDecapsulationKey::from_bytes",
                expected: total_len,
                actual: bytes.len(),
            });
        }
        let (classical_bytes, post_quantum_bytes) = bytes.split_at(C::DECAPSULATION_KEY_LEN);
        Ok(Self {
            classical_dk: C::DecapsulationKey::from_bytes(classical_bytes)?,
            post_quantum_dk: P::DecapsulationKey::from_bytes(post_quantum_bytes)?,
        })
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        let classical_bytes = self.classical_dk.to_bytes_zeroizing();
        let post_quantum_bytes = self.post_quantum_dk.to_bytes_zeroizing();
        let mut combined = Vec::with_capacity(classical_bytes.len() + post_quantum_bytes.len());
        combined.extend_from_slice(&classical_bytes);
        combined.extend_from_slice(&post_quantum_bytes);
        Zeroizing::new(combined)
    }
}

// --- HybridCiphertext ---
impl<C: KemDimensions, P: KemDimensions> Clone for HybridCiphertext<C, P> {
    fn clone(&self) -> Self {
        Self {
            classical_ct: self.classical_ct.clone(),
            post_quantum_ct: self.post_quantum_ct.clone(),
        }
    }
}

impl<C: KemDimensions, P: KemDimensions> Serialize for HybridCiphertext<C, P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let total_len = C::CIPHERTEXT_LEN + P::CIPHERTEXT_LEN;
        if bytes.len() != total_len {
            return Err(ApiError::InvalidLength {
                context: "HybridCiphertext::from_bytes",
                expected: total_len,
                actual: bytes.len(),
            });
        }
        let (classical_bytes, post_quantum_bytes) = bytes.split_at(C::CIPHERTEXT_LEN);
        Ok(Self {
            classical_ct: C::Ciphertext::from_bytes(classical_bytes)?,
            post_quantum_ct: P::Ciphertext::from_bytes(post_quantum_bytes)?,
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        [self.classical_ct.to_bytes(), self.post_quantum_ct.to_bytes()].concat()
    }
}

// --- The Generic Engine ---

pub struct HybridKemEngine<C: KemDimensions, P: KemDimensions> {
    _classical: PhantomData<C>,
    _post_quantum: PhantomData<P>,
}

impl<C, P> HybridKemEngine<C, P>
where
    C: KemDimensions,
    P: KemDimensions,
{
    /// Stretch `ikm` through HKDF-SHA512 under the pairing's label and
    /// split the output so each constituent derives from independent,
    /// domain-separated material. Deterministic: the same `ikm` always
    /// yields the same composite keypair.
    pub fn derive_keypair(
        ikm: &[u8],
        label: &'static [u8],
    ) -> ApiResult<(HybridEncapsulationKey<C, P>, HybridDecapsulationKey<C, P>)> {
        let okm_len = C::IKM_LEN + P::IKM_LEN;
        if ikm.len() != okm_len {
            return Err(ApiError::InvalidLength {
                context: "hybrid derive_keypair",
                expected: okm_len,
                actual: ikm.len(),
            });
        }

        let mut okm = Zeroizing::new(vec![0u8; okm_len]);
        Hkdf::<Sha512>::new(None, ikm)
            .expand(label, &mut okm)
            .map_err(|_| ApiError::Other {
                context: "hybrid derive_keypair",
                #[cfg(feature = "std")]
                message: "HKDF expand failed".to_string(),
            })?;
        let (classical_ikm, post_quantum_ikm) = okm.split_at(C::IKM_LEN);

        let (classical_ek, classical_dk) = C::derive_keypair(classical_ikm)?;
        let (post_quantum_ek, post_quantum_dk) = P::derive_keypair(post_quantum_ikm)?;

        Ok((
            HybridEncapsulationKey {
                classical_ek,
                post_quantum_ek,
            },
            HybridDecapsulationKey {
                classical_dk,
                post_quantum_dk,
            },
        ))
    }

    /// Recompute the composite encapsulation key from the composite
    /// decapsulation key alone.
    pub fn encapsulation_key(
        dk: &HybridDecapsulationKey<C, P>,
    ) -> ApiResult<HybridEncapsulationKey<C, P>> {
        Ok(HybridEncapsulationKey {
            classical_ek: C::encapsulation_key(&dk.classical_dk)?,
            post_quantum_ek: P::encapsulation_key(&dk.post_quantum_dk)?,
        })
    }

    /// Draw the pairing's total encapsulation randomness and delegate to
    /// the derandomized path.
    pub fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        ek: &HybridEncapsulationKey<C, P>,
    ) -> ApiResult<(HybridCiphertext<C, P>, HybridSharedSecret)> {
        let mut eseed = Zeroizing::new(vec![0u8; C::ESEED_LEN + P::ESEED_LEN]);
        rng.fill_bytes(&mut eseed);
        Self::encapsulate_derand(ek, &eseed)
    }

    /// Derandomized encapsulation: split the seed, run both constituents,
    /// concatenate the ciphertexts and combine the secrets.
    pub fn encapsulate_derand(
        ek: &HybridEncapsulationKey<C, P>,
        eseed: &[u8],
    ) -> ApiResult<(HybridCiphertext<C, P>, HybridSharedSecret)> {
        let eseed_len = C::ESEED_LEN + P::ESEED_LEN;
        if eseed.len() != eseed_len {
            return Err(ApiError::InvalidLength {
                context: "hybrid encapsulate_derand",
                expected: eseed_len,
                actual: eseed.len(),
            });
        }
        let (classical_seed, post_quantum_seed) = eseed.split_at(C::ESEED_LEN);

        // The two constituent calls are mutually independent; order is
        // irrelevant, both must complete before the combination hash.
        let (classical_ct, classical_ss) =
            C::encapsulate_derand(&ek.classical_ek, classical_seed)?;
        let (post_quantum_ct, post_quantum_ss) =
            P::encapsulate_derand(&ek.post_quantum_ek, post_quantum_seed)?;

        let ct = HybridCiphertext {
            classical_ct,
            post_quantum_ct,
        };
        let ss = Self::combine_shared_secret(&classical_ss, &post_quantum_ss, &ct, ek)?;
        Ok((ct, ss))
    }

    /// Decapsulate both halves and recompute the combination hash. The
    /// composite encapsulation key is reconstructed from the decapsulation
    /// key, never taken from the caller.
    pub fn decapsulate(
        dk: &HybridDecapsulationKey<C, P>,
        ct: &HybridCiphertext<C, P>,
    ) -> ApiResult<HybridSharedSecret> {
        let classical_ss = C::decapsulate(&dk.classical_dk, &ct.classical_ct)?;
        let post_quantum_ss = P::decapsulate(&dk.post_quantum_dk, &ct.post_quantum_ct)?;
        let ek = Self::encapsulation_key(dk)?;
        Self::combine_shared_secret(&classical_ss, &post_quantum_ss, ct, &ek)
    }

    /// The key-combination function: one SHA-512 over both shared secrets,
    /// both ciphertexts, both encapsulation key encodings and the two
    /// registry identifiers. Binding the ciphertexts and the recipient key
    /// rules out key/ciphertext substitution; the identifiers separate
    /// otherwise identical secret pairs across suite choices.
    fn combine_shared_secret(
        classical_ss: &C::SharedSecret,
        post_quantum_ss: &P::SharedSecret,
        ct: &HybridCiphertext<C, P>,
        ek: &HybridEncapsulationKey<C, P>,
    ) -> ApiResult<HybridSharedSecret> {
        let classical_ek_bytes = ek.classical_ek.to_bytes();
        if classical_ek_bytes.len() != C::ENCAPSULATION_KEY_LEN {
            return Err(ApiError::SerializationError {
                context: "hybrid key combiner",
                #[cfg(feature = "std")]
                message: "classical encapsulation key has unexpected encoded length".to_string(),
            });
        }
        let post_quantum_ek_bytes = ek.post_quantum_ek.to_bytes();
        if post_quantum_ek_bytes.len() != P::ENCAPSULATION_KEY_LEN {
            return Err(ApiError::SerializationError {
                context: "hybrid key combiner",
                #[cfg(feature = "std")]
                message: "post-quantum encapsulation key has unexpected encoded length"
                    .to_string(),
            });
        }

        let classical_ss_bytes = classical_ss.to_bytes_zeroizing();
        let post_quantum_ss_bytes = post_quantum_ss.to_bytes_zeroizing();

        let mut hash = Sha512::new();
        hash.update(classical_ss_bytes.as_slice());
        hash.update(post_quantum_ss_bytes.as_slice());
        hash.update(ct.classical_ct.to_bytes());
        hash.update(ct.post_quantum_ct.to_bytes());
        hash.update(&classical_ek_bytes);
        hash.update(&post_quantum_ek_bytes);
        hash.update(C::KEM_ID.to_be_bytes());
        hash.update(P::KEM_ID.to_be_bytes());

        let mut digest = [0u8; HYBRID_SHARED_SECRET_SIZE];
        digest.copy_from_slice(hash.finalize().as_slice());
        Ok(HybridSharedSecret(SecretBytes::new(digest)))
    }
}
