//! Hybrid KEM constructions
//!
//! This crate combines a classical KEM with a post-quantum KEM into a
//! single mechanism whose shared secret stays safe as long as at least one
//! constituent remains unbroken.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod kem;
