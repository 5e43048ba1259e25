// File: crates/kem/src/mlkem/mlkem768/mod.rs

//! ML-KEM-768 (FIPS 203, NIST security category 3)
//!
//! Adapter over the `ml-kem` crate. Keypairs are derived from a 64-byte
//! `d || z` seed; derandomized encapsulation takes the 32-byte message seed
//! directly. The decapsulation key uses the expanded FIPS 203 encoding
//! (2400 bytes), which keeps deserialization total and self-contained.

use crate::error::{validate, Error as KemError};
use braid_api::{DerandomizedKem, Kem, Result as ApiResult, SecretBytes, Serialize, SerializeSecret};
use braid_params::{
    ML_KEM_768_CIPHERTEXT_SIZE, ML_KEM_768_DECAPSULATION_KEY_SIZE,
    ML_KEM_768_ENCAPSULATION_KEY_SIZE, ML_KEM_768_ESEED_SIZE, ML_KEM_768_SEED_SIZE,
    ML_KEM_768_SHARED_SECRET_SIZE,
};
use ml_kem::kem::{Decapsulate, DecapsulationKey, EncapsulationKey};
use ml_kem::{
    Ciphertext, Encoded, EncodedSizeUser, EncapsulateDeterministic, KemCore, MlKem768Params, B32,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// ML-KEM-768 KEM
pub struct MlKem768;

/// Encapsulation key for ML-KEM-768
#[derive(Clone, Zeroize)]
pub struct MlKem768EncapsulationKey([u8; ML_KEM_768_ENCAPSULATION_KEY_SIZE]);

/// Decapsulation key for ML-KEM-768 (expanded FIPS 203 encoding)
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MlKem768DecapsulationKey(SecretBytes<ML_KEM_768_DECAPSULATION_KEY_SIZE>);

/// Shared secret from ML-KEM-768
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MlKem768SharedSecret(SecretBytes<ML_KEM_768_SHARED_SECRET_SIZE>);

/// Ciphertext for ML-KEM-768
#[derive(Clone)]
pub struct MlKem768Ciphertext([u8; ML_KEM_768_CIPHERTEXT_SIZE]);

// AsRef implementations
impl AsRef<[u8]> for MlKem768EncapsulationKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl AsRef<[u8]> for MlKem768SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}
impl AsRef<[u8]> for MlKem768Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for MlKem768EncapsulationKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length(
            "ML-KEM-768 encapsulation key",
            bytes.len(),
            ML_KEM_768_ENCAPSULATION_KEY_SIZE,
        )?;
        let mut data = [0u8; ML_KEM_768_ENCAPSULATION_KEY_SIZE];
        data.copy_from_slice(bytes);
        Ok(Self(data))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl SerializeSecret for MlKem768DecapsulationKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length(
            "ML-KEM-768 decapsulation key",
            bytes.len(),
            ML_KEM_768_DECAPSULATION_KEY_SIZE,
        )?;
        Ok(Self(SecretBytes::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0.to_bytes_zeroizing()
    }
}

impl SerializeSecret for MlKem768SharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(SecretBytes::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0.to_bytes_zeroizing()
    }
}

impl Serialize for MlKem768Ciphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length(
            "ML-KEM-768 ciphertext",
            bytes.len(),
            ML_KEM_768_CIPHERTEXT_SIZE,
        )?;
        let mut data = [0u8; ML_KEM_768_CIPHERTEXT_SIZE];
        data.copy_from_slice(bytes);
        Ok(Self(data))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

fn provider_decapsulation_key(
    dk: &MlKem768DecapsulationKey,
) -> ApiResult<DecapsulationKey<MlKem768Params>> {
    let encoded = Encoded::<DecapsulationKey<MlKem768Params>>::try_from(dk.0.as_ref())
        .map_err(|_| KemError::InvalidKey {
            key_type: "ML-KEM-768",
            reason: "decapsulation key has wrong length",
        })?;
    Ok(DecapsulationKey::from_bytes(&encoded))
}

fn provider_encapsulation_key(
    ek: &MlKem768EncapsulationKey,
) -> ApiResult<EncapsulationKey<MlKem768Params>> {
    let encoded = Encoded::<EncapsulationKey<MlKem768Params>>::try_from(&ek.0[..]).map_err(
        |_| KemError::InvalidKey {
            key_type: "ML-KEM-768",
            reason: "encapsulation key has wrong length",
        },
    )?;
    Ok(EncapsulationKey::from_bytes(&encoded))
}

impl Kem for MlKem768 {
    type EncapsulationKey = MlKem768EncapsulationKey;
    type DecapsulationKey = MlKem768DecapsulationKey;
    type SharedSecret = MlKem768SharedSecret;
    type Ciphertext = MlKem768Ciphertext;

    const IKM_LEN: usize = ML_KEM_768_SEED_SIZE;

    fn name() -> &'static str {
        "ML-KEM-768"
    }

    fn derive_keypair(
        ikm: &[u8],
    ) -> ApiResult<(Self::EncapsulationKey, Self::DecapsulationKey)> {
        // ikm is d || z per FIPS 203
        validate::length("ML-KEM-768 derive_keypair", ikm.len(), ML_KEM_768_SEED_SIZE)?;
        let d = B32::try_from(&ikm[..32]).map_err(|_| KemError::KeyGeneration {
            algorithm: "ML-KEM-768",
            details: "seed split failed",
        })?;
        let z = B32::try_from(&ikm[32..]).map_err(|_| KemError::KeyGeneration {
            algorithm: "ML-KEM-768",
            details: "seed split failed",
        })?;
        let (provider_dk, provider_ek) = ml_kem::MlKem768::generate_deterministic(&d, &z);

        let mut ek = [0u8; ML_KEM_768_ENCAPSULATION_KEY_SIZE];
        ek.copy_from_slice(provider_ek.as_bytes().as_slice());
        let mut dk = [0u8; ML_KEM_768_DECAPSULATION_KEY_SIZE];
        dk.copy_from_slice(provider_dk.as_bytes().as_slice());
        let keypair = (
            MlKem768EncapsulationKey(ek),
            MlKem768DecapsulationKey(SecretBytes::new(dk)),
        );
        dk.zeroize();
        Ok(keypair)
    }

    fn encapsulation_key(dk: &Self::DecapsulationKey) -> ApiResult<Self::EncapsulationKey> {
        let provider_dk = provider_decapsulation_key(dk)?;
        let mut ek = [0u8; ML_KEM_768_ENCAPSULATION_KEY_SIZE];
        ek.copy_from_slice(provider_dk.encapsulation_key().as_bytes().as_slice());
        Ok(MlKem768EncapsulationKey(ek))
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        ek: &Self::EncapsulationKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let mut eseed = Zeroizing::new([0u8; ML_KEM_768_ESEED_SIZE]);
        rng.fill_bytes(&mut *eseed);
        Self::encapsulate_derand(ek, &*eseed)
    }

    fn decapsulate(
        dk: &Self::DecapsulationKey,
        ct: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let provider_dk = provider_decapsulation_key(dk)?;
        let provider_ct = Ciphertext::<ml_kem::MlKem768>::try_from(&ct.0[..]).map_err(|_| {
            KemError::InvalidCiphertext {
                algorithm: "ML-KEM-768",
                reason: "ciphertext has wrong length",
            }
        })?;
        let provider_ss = provider_dk.decapsulate(&provider_ct).map_err(|_| {
            KemError::Decapsulation {
                algorithm: "ML-KEM-768",
                details: "constituent decapsulation failed",
            }
        })?;
        let mut ss = [0u8; ML_KEM_768_SHARED_SECRET_SIZE];
        ss.copy_from_slice(provider_ss.as_slice());
        Ok(MlKem768SharedSecret(SecretBytes::new(ss)))
    }
}

impl DerandomizedKem for MlKem768 {
    const ESEED_LEN: usize = ML_KEM_768_ESEED_SIZE;

    fn encapsulate_derand(
        ek: &Self::EncapsulationKey,
        eseed: &[u8],
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        validate::length(
            "ML-KEM-768 encapsulate_derand",
            eseed.len(),
            ML_KEM_768_ESEED_SIZE,
        )?;
        let provider_ek = provider_encapsulation_key(ek)?;
        let m = B32::try_from(eseed).map_err(|_| KemError::Encapsulation {
            algorithm: "ML-KEM-768",
            details: "eseed conversion failed",
        })?;
        let (provider_ct, provider_ss) =
            provider_ek
                .encapsulate_deterministic(&m)
                .map_err(|_| KemError::Encapsulation {
                    algorithm: "ML-KEM-768",
                    details: "constituent encapsulation rejected the key",
                })?;
        let mut ct = [0u8; ML_KEM_768_CIPHERTEXT_SIZE];
        ct.copy_from_slice(provider_ct.as_slice());
        let mut ss = [0u8; ML_KEM_768_SHARED_SECRET_SIZE];
        ss.copy_from_slice(provider_ss.as_slice());
        Ok((
            MlKem768Ciphertext(ct),
            MlKem768SharedSecret(SecretBytes::new(ss)),
        ))
    }
}

#[cfg(test)]
mod tests;
