//! Validation utilities shared by all braid crates

use super::{Error, Result};

/// Validate that a byte slice has exactly the expected length.
///
/// This is the guard every seed- and message-accepting operation runs
/// before any cryptographic work happens.
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate an arbitrary parameter condition
pub fn parameter(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Other {
            context,
            #[cfg(feature = "std")]
            message: String::from("parameter validation failed"),
        });
    }
    Ok(())
}

#[cfg(feature = "std")]
use std::string::String;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_accepts_exact_match() {
        assert!(length("test", 48, 48).is_ok());
    }

    #[test]
    fn length_rejects_mismatch_with_sizes() {
        let err = length("test", 47, 48).unwrap_err();
        match err {
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                assert_eq!(context, "test");
                assert_eq!(expected, 48);
                assert_eq!(actual, 47);
            }
            _ => panic!("expected InvalidLength"),
        }
    }
}
