//! Derived address representation and rendering.

use std::fmt;
use std::str::FromStr;

use tiny_keccak::{Hasher, Keccak};

/// Length of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// How an address is rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressFormat {
    /// 40 lowercase hex characters, no prefix
    #[default]
    Lower,
    /// Lowercase hex with a `0x` prefix
    Prefixed,
    /// EIP-55 mixed-case checksum with a `0x` prefix
    Checksum,
}

impl FromStr for AddressFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lower" | "plain" | "hex" => Ok(AddressFormat::Lower),
            "prefixed" | "0x" => Ok(AddressFormat::Prefixed),
            "checksum" | "eip55" => Ok(AddressFormat::Checksum),
            _ => Err(format!("Unknown address format: {}", s)),
        }
    }
}

impl fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFormat::Lower => write!(f, "lower"),
            AddressFormat::Prefixed => write!(f, "prefixed"),
            AddressFormat::Checksum => write!(f, "checksum"),
        }
    }
}

/// The last 20 bytes of the Keccak-256 digest of a public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    #[inline]
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Returns the address as a lowercase hex string (without 0x prefix).
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the address with 0x prefix.
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", self.to_hex())
    }

    /// Returns the address with checksum encoding (EIP-55).
    ///
    /// A letter is uppercased when the matching nibble of
    /// `keccak256(lowercase_hex)` is 8 or more.
    pub fn to_checksum(&self) -> String {
        let lower = self.to_hex();
        let mut digest = [0u8; 32];
        let mut keccak = Keccak::v256();
        keccak.update(lower.as_bytes());
        keccak.finalize(&mut digest);

        let nibbles = digest.iter().flat_map(|byte| [byte >> 4, byte & 0x0f]);
        let body: String = lower
            .chars()
            .zip(nibbles)
            .map(|(c, nibble)| if nibble >= 8 { c.to_ascii_uppercase() } else { c })
            .collect();

        format!("0x{}", body)
    }

    /// Renders the address in the requested format.
    pub fn render(&self, format: AddressFormat) -> String {
        match format {
            AddressFormat::Lower => self.to_hex(),
            AddressFormat::Prefixed => self.to_hex_prefixed(),
            AddressFormat::Checksum => self.to_checksum(),
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Address").field(&self.to_checksum()).finish()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
