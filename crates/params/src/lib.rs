//! Constant values for the braid hybrid KEM library
//!
//! Byte lengths and registry identifiers for the constituent KEM suites and
//! the hybrid pairings built from them. Every length here is pinned by the
//! constituent's parameter set; changing any of them is a breaking wire
//! format change.

#![no_std]

pub mod hybrid;
pub mod pqc;
pub mod traditional;

pub use hybrid::*;
pub use pqc::mlkem::*;
pub use traditional::dhkem::*;
