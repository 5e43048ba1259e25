//! Constituent KEM adapters
//!
//! This crate presents a uniform capability surface over two heterogeneous
//! underlying primitives: an elliptic-curve DHKEM (RFC 9180) and a lattice
//! KEM (FIPS 203). The primitives themselves live in external provider
//! crates; the adapters here own the fixed-length byte contracts and the
//! error mapping, nothing more.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod dhkem;
pub mod error;
pub mod mlkem;

// Re-exports
pub use dhkem::DhKemP384;
pub use mlkem::MlKem768;
