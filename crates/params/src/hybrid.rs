//! Constants for the hybrid pairings
//!
//! All values are sums of the constituent suite constants; they are spelled
//! out here so callers sizing buffers do not have to repeat the arithmetic.

use crate::pqc::mlkem::*;
use crate::traditional::dhkem::*;

/// Size of the input key material for DHKEM-P384 + ML-KEM-768 in bytes
pub const DHKEM_P384_ML_KEM_768_IKM_SIZE: usize = DHKEM_P384_SEED_SIZE + ML_KEM_768_SEED_SIZE;

/// Size of the encapsulation seed for DHKEM-P384 + ML-KEM-768 in bytes
pub const DHKEM_P384_ML_KEM_768_ESEED_SIZE: usize = DHKEM_P384_ESEED_SIZE + ML_KEM_768_ESEED_SIZE;

/// Size of the composite encapsulation key for DHKEM-P384 + ML-KEM-768 in bytes
pub const DHKEM_P384_ML_KEM_768_ENCAPSULATION_KEY_SIZE: usize =
    DHKEM_P384_ENCAPSULATION_KEY_SIZE + ML_KEM_768_ENCAPSULATION_KEY_SIZE;

/// Size of the composite decapsulation key for DHKEM-P384 + ML-KEM-768 in bytes
pub const DHKEM_P384_ML_KEM_768_DECAPSULATION_KEY_SIZE: usize =
    DHKEM_P384_DECAPSULATION_KEY_SIZE + ML_KEM_768_DECAPSULATION_KEY_SIZE;

/// Size of the composite ciphertext for DHKEM-P384 + ML-KEM-768 in bytes
pub const DHKEM_P384_ML_KEM_768_CIPHERTEXT_SIZE: usize =
    DHKEM_P384_CIPHERTEXT_SIZE + ML_KEM_768_CIPHERTEXT_SIZE;

/// Size of the combined shared secret for DHKEM-P384 + ML-KEM-768 in bytes
/// (SHA-512 digest)
pub const DHKEM_P384_ML_KEM_768_SHARED_SECRET_SIZE: usize = 64;
