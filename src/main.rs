//! Address-from-key CLI
//!
//! Usage:
//!   address_from_key <PRIVATE_KEY>                 # 40 lowercase hex chars
//!   address_from_key -f checksum <PRIVATE_KEY>     # EIP-55, 0x-prefixed
//!   address_from_key -k <PRIVATE_KEY>              # public key, then address
//!
//! Exit status: 0 on success, 1 for a malformed or invalid key, 2 for usage
//! errors (reported by clap).

use std::process;

use clap::Parser;

use address_from_key::{derive_address, Config, PrivateKey};

fn main() {
    let config = Config::parse();
    config.init_logging();

    let private_key = match PrivateKey::from_hex(&config.private_key) {
        Ok(key) => key,
        Err(e) => {
            log::debug!("rejected input of {} characters", config.private_key.len());
            eprintln!("error: {}", e);
            process::exit(e.exit_code());
        }
    };

    if config.public_key {
        println!("{}", private_key.public_key());
    }

    let address = derive_address(&private_key);
    log::info!("derived address {} ({} format)", address, config.format);
    println!("{}", address.render(config.format));
}
