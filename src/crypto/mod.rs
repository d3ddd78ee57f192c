//! Cryptographic operations for address derivation.
//!
//! This module provides:
//! - Validated secp256k1 private keys
//! - Public key computation (scalar multiplication of the generator)
//! - Address derivation using Keccak-256

mod address;
mod private_key;
mod public_key;

pub use address::{Address, AddressFormat, ADDRESS_LEN};
pub use private_key::{PrivateKey, PRIVATE_KEY_LEN};
pub use public_key::{PublicKey, PUBLIC_KEY_LEN};

use crate::error::Result;

/// Derives the address of a private key.
pub fn derive_address(private_key: &PrivateKey) -> Address {
    let public_key = private_key.public_key();
    log::debug!("public key: {}", public_key);

    let address = public_key.address();
    log::debug!("address: {}", address);
    address
}

/// Parses a hex-encoded private key and derives its address.
pub fn derive_address_from_hex(private_key_hex: &str) -> Result<Address> {
    let private_key = PrivateKey::from_hex(private_key_hex)?;
    Ok(derive_address(&private_key))
}
