// File: crates/kem/src/dhkem/p384/mod.rs

//! DHKEM(P-384, HKDF-SHA384)
//!
//! The DHKEM construction from RFC 9180 instantiated on the NIST P-384
//! curve. Scalar and point arithmetic come from the `p384` crate; this
//! adapter implements the labeled extract/expand schedule, the
//! rejection-sampled `DeriveKeyPair`, and derandomized encapsulation on top
//! of it.
//!
//! All inputs and outputs have lengths fixed by the suite: 48-byte seeds,
//! 97-byte uncompressed SEC1 public keys and ciphertexts, 48-byte scalars
//! and shared secrets.

use crate::error::{validate, Error as KemError};
use braid_api::{DerandomizedKem, Kem, Result as ApiResult, SecretBytes, Serialize, SerializeSecret};
use braid_params::{
    DHKEM_P384_CIPHERTEXT_SIZE, DHKEM_P384_DECAPSULATION_KEY_SIZE,
    DHKEM_P384_ENCAPSULATION_KEY_SIZE, DHKEM_P384_ESEED_SIZE, DHKEM_P384_KEM_ID,
    DHKEM_P384_SEED_SIZE, DHKEM_P384_SHARED_SECRET_SIZE,
};
use hkdf::Hkdf;
use p384::ecdh::diffie_hellman;
use p384::elliptic_curve::sec1::ToEncodedPoint;
use p384::{PublicKey, SecretKey};
use rand::{CryptoRng, RngCore};
use sha2::Sha384;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// DHKEM with the NIST P-384 curve and HKDF-SHA384
pub struct DhKemP384;

/// Encapsulation key for DHKEM P-384 (uncompressed SEC1 point)
#[derive(Clone, Zeroize)]
pub struct DhKemP384EncapsulationKey([u8; DHKEM_P384_ENCAPSULATION_KEY_SIZE]);

/// Decapsulation key for DHKEM P-384 (scalar value)
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DhKemP384DecapsulationKey(SecretBytes<DHKEM_P384_DECAPSULATION_KEY_SIZE>);

/// Shared secret from DHKEM P-384
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DhKemP384SharedSecret(SecretBytes<DHKEM_P384_SHARED_SECRET_SIZE>);

/// Ciphertext for DHKEM P-384 (uncompressed ephemeral public point)
#[derive(Clone)]
pub struct DhKemP384Ciphertext([u8; DHKEM_P384_CIPHERTEXT_SIZE]);

// AsRef implementations
impl AsRef<[u8]> for DhKemP384EncapsulationKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl AsRef<[u8]> for DhKemP384SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}
impl AsRef<[u8]> for DhKemP384Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for DhKemP384EncapsulationKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length(
            "DHKEM-P384 encapsulation key",
            bytes.len(),
            DHKEM_P384_ENCAPSULATION_KEY_SIZE,
        )?;
        validate::key(
            PublicKey::from_sec1_bytes(bytes).is_ok(),
            "DHKEM-P384",
            "not a valid SEC1 point encoding",
        )?;
        let mut data = [0u8; DHKEM_P384_ENCAPSULATION_KEY_SIZE];
        data.copy_from_slice(bytes);
        Ok(Self(data))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl SerializeSecret for DhKemP384DecapsulationKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length(
            "DHKEM-P384 decapsulation key",
            bytes.len(),
            DHKEM_P384_DECAPSULATION_KEY_SIZE,
        )?;
        let inner = SecretBytes::from_slice(bytes)?;
        SecretKey::from_slice(inner.as_ref()).map_err(|_| KemError::InvalidKey {
            key_type: "DHKEM-P384",
            reason: "scalar is zero or out of range",
        })?;
        Ok(Self(inner))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0.to_bytes_zeroizing()
    }
}

impl SerializeSecret for DhKemP384SharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(SecretBytes::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0.to_bytes_zeroizing()
    }
}

impl Serialize for DhKemP384Ciphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::length(
            "DHKEM-P384 ciphertext",
            bytes.len(),
            DHKEM_P384_CIPHERTEXT_SIZE,
        )?;
        let mut data = [0u8; DHKEM_P384_CIPHERTEXT_SIZE];
        data.copy_from_slice(bytes);
        Ok(Self(data))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

// RFC 9180 labeling: suite_id = "KEM" || I2OSP(kem_id, 2)
const SUITE_ID: [u8; 5] = [
    b'K',
    b'E',
    b'M',
    (DHKEM_P384_KEM_ID >> 8) as u8,
    DHKEM_P384_KEM_ID as u8,
];
const VERSION_LABEL: &[u8] = b"HPKE-v1";

fn labeled_extract(label: &[u8], ikm: &[u8]) -> Hkdf<Sha384> {
    let mut labeled_ikm = Zeroizing::new(Vec::with_capacity(
        VERSION_LABEL.len() + SUITE_ID.len() + label.len() + ikm.len(),
    ));
    labeled_ikm.extend_from_slice(VERSION_LABEL);
    labeled_ikm.extend_from_slice(&SUITE_ID);
    labeled_ikm.extend_from_slice(label);
    labeled_ikm.extend_from_slice(ikm);
    let (_, hk) = Hkdf::<Sha384>::extract(None, &labeled_ikm);
    hk
}

fn labeled_expand(hk: &Hkdf<Sha384>, label: &[u8], info: &[u8], okm: &mut [u8]) -> ApiResult<()> {
    let length = (okm.len() as u16).to_be_bytes();
    hk.expand_multi_info(&[&length, VERSION_LABEL, &SUITE_ID, label, info], okm)
        .map_err(|_| {
            KemError::Serialization {
                context: "DHKEM-P384 labeled expand",
                details: "requested output length out of range",
            }
            .into()
        })
}

/// RFC 9180 DeriveKeyPair for NIST curves: rejection-sample scalar
/// candidates from the expanded key material until one is a valid nonzero
/// scalar below the group order.
fn derive_scalar(ikm: &[u8]) -> ApiResult<SecretKey> {
    let dkp_prk = labeled_extract(b"dkp_prk", ikm);
    let mut candidate = Zeroizing::new([0u8; DHKEM_P384_DECAPSULATION_KEY_SIZE]);
    for counter in 0..=255u8 {
        labeled_expand(&dkp_prk, b"candidate", &[counter], &mut *candidate)?;
        if let Ok(sk) = SecretKey::from_slice(&candidate[..]) {
            return Ok(sk);
        }
    }
    Err(KemError::KeyGeneration {
        algorithm: "DHKEM-P384",
        details: "no valid scalar candidate in 256 attempts",
    }
    .into())
}

fn encode_public_key(sk: &SecretKey) -> ApiResult<[u8; DHKEM_P384_ENCAPSULATION_KEY_SIZE]> {
    let point = sk.public_key().to_encoded_point(false);
    point.as_bytes().try_into().map_err(|_| {
        KemError::Serialization {
            context: "DHKEM-P384",
            details: "unexpected public key encoding length",
        }
        .into()
    })
}

fn scalar_from_key(dk: &DhKemP384DecapsulationKey) -> ApiResult<SecretKey> {
    SecretKey::from_slice(dk.0.as_ref()).map_err(|_| {
        KemError::InvalidKey {
            key_type: "DHKEM-P384",
            reason: "scalar is zero or out of range",
        }
        .into()
    })
}

/// RFC 9180 ExtractAndExpand: shared secret from the raw DH output and the
/// kem_context binding of both public encodings.
fn extract_and_expand(
    dh: &[u8],
    enc: &[u8],
    recipient_ek: &[u8],
) -> ApiResult<[u8; DHKEM_P384_SHARED_SECRET_SIZE]> {
    let eae_prk = labeled_extract(b"eae_prk", dh);
    let mut kem_context =
        [0u8; DHKEM_P384_CIPHERTEXT_SIZE + DHKEM_P384_ENCAPSULATION_KEY_SIZE];
    kem_context[..DHKEM_P384_CIPHERTEXT_SIZE].copy_from_slice(enc);
    kem_context[DHKEM_P384_CIPHERTEXT_SIZE..].copy_from_slice(recipient_ek);
    let mut ss = [0u8; DHKEM_P384_SHARED_SECRET_SIZE];
    labeled_expand(&eae_prk, b"shared_secret", &kem_context, &mut ss)?;
    Ok(ss)
}

impl Kem for DhKemP384 {
    type EncapsulationKey = DhKemP384EncapsulationKey;
    type DecapsulationKey = DhKemP384DecapsulationKey;
    type SharedSecret = DhKemP384SharedSecret;
    type Ciphertext = DhKemP384Ciphertext;

    const IKM_LEN: usize = DHKEM_P384_SEED_SIZE;

    fn name() -> &'static str {
        "DHKEM(P-384, HKDF-SHA384)"
    }

    fn derive_keypair(
        ikm: &[u8],
    ) -> ApiResult<(Self::EncapsulationKey, Self::DecapsulationKey)> {
        validate::length("DHKEM-P384 derive_keypair", ikm.len(), DHKEM_P384_SEED_SIZE)?;
        let sk = derive_scalar(ikm)?;
        let ek = DhKemP384EncapsulationKey(encode_public_key(&sk)?);
        let mut scalar_bytes = [0u8; DHKEM_P384_DECAPSULATION_KEY_SIZE];
        scalar_bytes.copy_from_slice(sk.to_bytes().as_slice());
        let dk = DhKemP384DecapsulationKey(SecretBytes::new(scalar_bytes));
        scalar_bytes.zeroize();
        Ok((ek, dk))
    }

    fn encapsulation_key(dk: &Self::DecapsulationKey) -> ApiResult<Self::EncapsulationKey> {
        let sk = scalar_from_key(dk)?;
        Ok(DhKemP384EncapsulationKey(encode_public_key(&sk)?))
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        ek: &Self::EncapsulationKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let mut eseed = Zeroizing::new([0u8; DHKEM_P384_ESEED_SIZE]);
        rng.fill_bytes(&mut *eseed);
        Self::encapsulate_derand(ek, &*eseed)
    }

    fn decapsulate(
        dk: &Self::DecapsulationKey,
        ct: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let sk = scalar_from_key(dk)?;
        let ephemeral_pk = PublicKey::from_sec1_bytes(&ct.0).map_err(|_| {
            KemError::InvalidCiphertext {
                algorithm: "DHKEM-P384",
                reason: "ciphertext is not a valid SEC1 point",
            }
        })?;
        let dh = diffie_hellman(sk.to_nonzero_scalar(), ephemeral_pk.as_affine());
        let own_ek = encode_public_key(&sk)?;
        let ss = extract_and_expand(dh.raw_secret_bytes().as_slice(), &ct.0, &own_ek)?;
        Ok(DhKemP384SharedSecret(SecretBytes::new(ss)))
    }
}

impl DerandomizedKem for DhKemP384 {
    const ESEED_LEN: usize = DHKEM_P384_ESEED_SIZE;

    fn encapsulate_derand(
        ek: &Self::EncapsulationKey,
        eseed: &[u8],
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        validate::length(
            "DHKEM-P384 encapsulate_derand",
            eseed.len(),
            DHKEM_P384_ESEED_SIZE,
        )?;
        let recipient_pk = PublicKey::from_sec1_bytes(&ek.0).map_err(|_| {
            KemError::InvalidKey {
                key_type: "DHKEM-P384",
                reason: "recipient key is not a valid SEC1 point",
            }
        })?;
        let ephemeral_sk = derive_scalar(eseed)?;
        let enc = encode_public_key(&ephemeral_sk)?;
        let dh = diffie_hellman(ephemeral_sk.to_nonzero_scalar(), recipient_pk.as_affine());
        let ss = extract_and_expand(dh.raw_secret_bytes().as_slice(), &enc, &ek.0)?;
        Ok((
            DhKemP384Ciphertext(enc),
            DhKemP384SharedSecret(SecretBytes::new(ss)),
        ))
    }
}

#[cfg(test)]
mod tests;
