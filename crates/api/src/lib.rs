//! Public API traits and types for the braid library
//!
//! This crate provides the public API surface for the braid ecosystem:
//! the KEM capability traits, serialization contracts, error types, and
//! the secure byte container used by every other crate in the workspace.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::SecretBytes;

// Re-export all traits from the traits module
pub use traits::{DerandomizedKem, Kem, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, serialize};
