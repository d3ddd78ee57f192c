//! Error types for address derivation.

use std::fmt;

/// Process exit status for a key that could not be decoded or is invalid.
pub const EXIT_FAILURE: i32 = 1;
/// Process exit status for a command-line usage error.
pub const EXIT_USAGE: i32 = 2;

/// Why a byte string was rejected as a private key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidKeyReason {
    /// Decoded to the wrong number of bytes
    Length(usize),
    /// Zero, or not below the curve order
    OutOfRange,
}

impl fmt::Display for InvalidKeyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidKeyReason::Length(len) => {
                write!(f, "expected 32 bytes, got {}", len)
            }
            InvalidKeyReason::OutOfRange => {
                write!(f, "scalar must be nonzero and below the secp256k1 order")
            }
        }
    }
}

/// Errors raised while turning a hex string into an address.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not valid hexadecimal.
    #[error("Invalid hex: {0}")]
    Decode(#[from] hex::FromHexError),

    /// The decoded bytes are not a usable secp256k1 scalar.
    #[error("Invalid private key: {0}")]
    InvalidKey(InvalidKeyReason),
}

impl Error {
    /// Returns the process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Decode(_) | Error::InvalidKey(_) => EXIT_FAILURE,
        }
    }

    /// Returns true if the input was valid hex but not a valid key.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Error::InvalidKey(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
