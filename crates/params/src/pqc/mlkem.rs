//! Constants for the ML-KEM-768 key encapsulation mechanism (FIPS 203)

/// Size of the key-derivation seed (`d || z`) for ML-KEM-768 in bytes
pub const ML_KEM_768_SEED_SIZE: usize = 64;

/// Size of the encapsulation seed (`m`) for ML-KEM-768 in bytes
pub const ML_KEM_768_ESEED_SIZE: usize = 32;

/// Size of the encapsulation key for ML-KEM-768 in bytes
pub const ML_KEM_768_ENCAPSULATION_KEY_SIZE: usize = 1184;

/// Size of the decapsulation key for ML-KEM-768 in bytes (expanded encoding)
pub const ML_KEM_768_DECAPSULATION_KEY_SIZE: usize = 2400;

/// Size of the ciphertext for ML-KEM-768 in bytes
pub const ML_KEM_768_CIPHERTEXT_SIZE: usize = 1088;

/// Size of the shared secret for ML-KEM-768 in bytes
pub const ML_KEM_768_SHARED_SECRET_SIZE: usize = 32;

/// HPKE KEM registry identifier for ML-KEM-768
pub const ML_KEM_768_KEM_ID: u16 = 0x0041;
