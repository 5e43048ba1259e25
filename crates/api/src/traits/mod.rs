//! Trait definitions for the braid ecosystem

pub mod kem;
pub mod serialize;

pub use kem::{DerandomizedKem, Kem};
pub use serialize::{Serialize, SerializeSecret};
