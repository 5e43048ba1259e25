//! Error handling for KEM operations

use braid_api::error::Error as CoreError;
use core::fmt;

/// Error type for KEM operations
#[derive(Debug, Clone)]
pub enum Error {
    /// Key generation failure
    KeyGeneration {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Encapsulation failure
    Encapsulation {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Decapsulation failure
    Decapsulation {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Invalid key format
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Invalid ciphertext format
    InvalidCiphertext {
        algorithm: &'static str,
        reason: &'static str,
    },

    /// Serialization/deserialization errors
    Serialization {
        context: &'static str,
        details: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "Key generation error for {}: {}", algorithm, details)
            }
            Error::Encapsulation { algorithm, details } => {
                write!(f, "Encapsulation error for {}: {}", algorithm, details)
            }
            Error::Decapsulation { algorithm, details } => {
                write!(f, "Decapsulation error for {}: {}", algorithm, details)
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::InvalidCiphertext { algorithm, reason } => {
                write!(f, "Invalid {} ciphertext: {}", algorithm, reason)
            }
            Error::Serialization { context, details } => {
                write!(f, "Serialization error in {}: {}", context, details)
            }
        }
    }
}

// Standard error trait
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// From Error to CoreError: constituent failures are propagated to the api
// surface without being reinterpreted.
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::KeyGeneration { algorithm, details } => CoreError::Other {
                context: algorithm,
                #[cfg(feature = "std")]
                message: format!("key generation failed: {}", details),
            },
            Error::Encapsulation { algorithm, details } => CoreError::Other {
                context: algorithm,
                #[cfg(feature = "std")]
                message: format!("encapsulation failed: {}", details),
            },
            Error::Decapsulation { algorithm, details } => CoreError::DecapsulationFailed {
                context: algorithm,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::InvalidCiphertext { algorithm, reason } => CoreError::InvalidCiphertext {
                context: algorithm,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::Serialization { context, details } => CoreError::SerializationError {
                context,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
        }
    }
}

// Include validation submodule
pub mod validate;
