//! # address_from_key
//!
//! Derives an Ethereum-style address from a secp256k1 private key:
//! `keccak256(x || y)[12..]` where `(x, y) = d·G`.
//!
//! ## Architecture
//!
//! - `crypto`: Private key validation, public key and address derivation
//! - `error`: Error taxonomy and process exit codes
//! - `config`: Command-line configuration

pub mod config;
pub mod crypto;
pub mod error;

pub use config::Config;
pub use crypto::{
    derive_address, derive_address_from_hex, Address, AddressFormat, PrivateKey, PublicKey,
};
pub use error::{Error, InvalidKeyReason, Result};
