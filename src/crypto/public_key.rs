//! Uncompressed secp256k1 public keys and address hashing.

use std::fmt;

use tiny_keccak::{Hasher, Keccak};

use super::Address;

/// Length of a public key in bytes (`x || y`, no format prefix).
pub const PUBLIC_KEY_LEN: usize = 64;

/// A secp256k1 point as the raw concatenation of its affine coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LEN]);

impl PublicKey {
    pub(crate) fn from_secp256k1(public_key: &secp256k1::PublicKey) -> Self {
        let serialized = public_key.serialize_uncompressed();

        // Drop the 0x04 tag
        let mut bytes = [0u8; PUBLIC_KEY_LEN];
        bytes.copy_from_slice(&serialized[1..]);
        Self(bytes)
    }

    /// Returns the raw 64 bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    /// Returns the big-endian x coordinate.
    pub fn x(&self) -> &[u8] {
        &self.0[..32]
    }

    /// Returns the big-endian y coordinate.
    pub fn y(&self) -> &[u8] {
        &self.0[32..]
    }

    /// Returns the key as a lowercase hex string (128 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Derives the address for this public key.
    ///
    /// Process:
    /// 1. Hash the 64 coordinate bytes with Keccak-256 (not SHA3-256)
    /// 2. Take the last 20 bytes of the digest
    pub fn address(&self) -> Address {
        let mut hasher = Keccak::v256();
        hasher.update(&self.0);

        let mut hash = [0u8; 32];
        hasher.finalize(&mut hash);

        let mut address_bytes = [0u8; 20];
        address_bytes.copy_from_slice(&hash[12..]);

        Address::from_bytes(address_bytes)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
