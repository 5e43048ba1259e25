//! Constants for DHKEM(P-384, HKDF-SHA384) as defined by RFC 9180

/// Size of the key-derivation seed (`ikm`) for DHKEM P-384 in bytes
pub const DHKEM_P384_SEED_SIZE: usize = 48;

/// Size of the encapsulation seed (`eseed`) for DHKEM P-384 in bytes
pub const DHKEM_P384_ESEED_SIZE: usize = 48;

/// Size of the encapsulation key for DHKEM P-384 in bytes (uncompressed SEC1 point)
pub const DHKEM_P384_ENCAPSULATION_KEY_SIZE: usize = 97;

/// Size of the decapsulation key for DHKEM P-384 in bytes (scalar)
pub const DHKEM_P384_DECAPSULATION_KEY_SIZE: usize = 48;

/// Size of the ciphertext for DHKEM P-384 in bytes (uncompressed ephemeral point)
pub const DHKEM_P384_CIPHERTEXT_SIZE: usize = 97;

/// Size of the shared secret for DHKEM P-384 in bytes
pub const DHKEM_P384_SHARED_SECRET_SIZE: usize = 48;

/// HPKE KEM registry identifier for DHKEM(P-384, HKDF-SHA384)
pub const DHKEM_P384_KEM_ID: u16 = 0x0011;
