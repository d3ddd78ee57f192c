//! secp256k1 private keys.

use std::fmt;
use std::str::FromStr;

use secp256k1::{Secp256k1, SecretKey};

use super::{Address, PublicKey};
use crate::error::{Error, InvalidKeyReason, Result};

/// Length of a private key scalar in bytes.
pub const PRIVATE_KEY_LEN: usize = 32;

/// A validated secp256k1 private key: a nonzero scalar below the curve order.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Creates a private key from a 32-byte big-endian scalar.
    ///
    /// Fails with [`Error::InvalidKey`] if the scalar is zero or not below
    /// the curve order.
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_LEN]) -> Result<Self> {
        SecretKey::from_slice(&bytes)
            .map(Self)
            .map_err(|_| Error::InvalidKey(InvalidKeyReason::OutOfRange))
    }

    /// Creates a private key from a byte slice that must be exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; PRIVATE_KEY_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKey(InvalidKeyReason::Length(bytes.len())))?;
        Self::from_bytes(bytes)
    }

    /// Parses a private key from a hex string (no `0x` prefix).
    ///
    /// Malformed hex is reported as [`Error::Decode`]; well-formed hex of the
    /// wrong size or value as [`Error::InvalidKey`].
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }

    /// Computes the public key `d·G`.
    pub fn public_key(&self) -> PublicKey {
        let secp = Secp256k1::signing_only();
        let public_key = secp256k1::PublicKey::from_secret_key(&secp, &self.0);
        PublicKey::from_secp256k1(&public_key)
    }

    /// Derives the address of this key.
    #[inline]
    pub fn address(&self) -> Address {
        self.public_key().address()
    }

    /// Returns the scalar bytes (big-endian).
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        self.0.secret_bytes()
    }
}

impl FromStr for PrivateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}
