// File: crates/hybrid/src/kem/dhkem_p384_mlkem768.rs

//! Hybrid KEM combining DHKEM(P-384, HKDF-SHA384) and ML-KEM-768.

use super::engine::{
    HybridCiphertext, HybridDecapsulationKey, HybridEncapsulationKey, HybridKemEngine,
    HybridSharedSecret,
};
use braid_api::{error::Result as ApiResult, DerandomizedKem, Kem};
use braid_kem::{DhKemP384, MlKem768};
use rand::{CryptoRng, RngCore};

/// A concrete hybrid KEM struct for DHKEM-P384 + ML-KEM-768.
///
/// Stateless; construct as many instances as you like, or use the
/// associated functions directly.
pub struct DhKemP384MlKem768;

// Key-derivation label for this pairing. Changing it is a breaking change:
// the same ikm would derive different keypairs.
const DKP_LABEL: &[u8] = b"ecdh-p384-ml-kem-768-dkp";

impl Kem for DhKemP384MlKem768 {
    // Define associated types using the generic building blocks
    type EncapsulationKey = HybridEncapsulationKey<DhKemP384, MlKem768>;
    type DecapsulationKey = HybridDecapsulationKey<DhKemP384, MlKem768>;
    type SharedSecret = HybridSharedSecret;
    type Ciphertext = HybridCiphertext<DhKemP384, MlKem768>;

    const IKM_LEN: usize = <DhKemP384 as Kem>::IKM_LEN + <MlKem768 as Kem>::IKM_LEN;

    fn name() -> &'static str {
        "DHKEM-P384+ML-KEM-768"
    }

    // Delegate all logic to the generic engine
    fn derive_keypair(
        ikm: &[u8],
    ) -> ApiResult<(Self::EncapsulationKey, Self::DecapsulationKey)> {
        HybridKemEngine::<DhKemP384, MlKem768>::derive_keypair(ikm, DKP_LABEL)
    }

    fn encapsulation_key(dk: &Self::DecapsulationKey) -> ApiResult<Self::EncapsulationKey> {
        HybridKemEngine::<DhKemP384, MlKem768>::encapsulation_key(dk)
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        ek: &Self::EncapsulationKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        HybridKemEngine::<DhKemP384, MlKem768>::encapsulate(rng, ek)
    }

    /// Both constituents decapsulate, then the combination hash is
    /// recomputed against the encapsulation key reconstructed from `dk`.
    ///
    /// There is deliberately no pairing check between `dk` and whatever
    /// encapsulation key the sender used: a decapsulation key that was not
    /// derived alongside the sender's key silently yields an unrelated
    /// secret rather than an error.
    fn decapsulate(
        dk: &Self::DecapsulationKey,
        ct: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        HybridKemEngine::<DhKemP384, MlKem768>::decapsulate(dk, ct)
    }
}

impl DerandomizedKem for DhKemP384MlKem768 {
    const ESEED_LEN: usize =
        <DhKemP384 as DerandomizedKem>::ESEED_LEN + <MlKem768 as DerandomizedKem>::ESEED_LEN;

    fn encapsulate_derand(
        ek: &Self::EncapsulationKey,
        eseed: &[u8],
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        HybridKemEngine::<DhKemP384, MlKem768>::encapsulate_derand(ek, eseed)
    }
}
