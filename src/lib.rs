//! # braid
//!
//! A hybrid key encapsulation library combining a classical elliptic-curve
//! KEM with a post-quantum lattice KEM. The combined shared secret stays
//! safe as long as at least one constituent remains unbroken.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! braid = "0.2"
//! ```
//!
//! ## Features
//!
//! - `kem`: The constituent KEM adapters (DHKEM P-384, ML-KEM-768)
//! - `hybrid` (default): The hybrid combiner built on top of them
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`braid-api`]: Capability traits, error types, secure containers
//! - [`braid-params`]: Suite byte lengths and registry identifiers
//! - [`braid-kem`]: Constituent KEM adapters over provider crates
//! - [`braid-hybrid`]: The hybrid combiner and concrete pairings

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use braid_api as api;
pub use braid_params as params;

// Feature-gated re-exports
#[cfg(feature = "kem")]
pub use braid_kem as kem;

#[cfg(feature = "hybrid")]
pub use braid_hybrid as hybrid;

/// Common imports for braid users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{DerandomizedKem, Kem, Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::api::SecretBytes;

    // Conditional re-exports based on features
    #[cfg(feature = "kem")]
    pub use crate::kem::{DhKemP384, MlKem768};

    #[cfg(feature = "hybrid")]
    pub use crate::hybrid::kem::DhKemP384MlKem768;
}
