//! Command-line configuration.

use clap::Parser;
use log::LevelFilter;

use crate::crypto::AddressFormat;

/// Derive an address from a secp256k1 private key
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Private key as 64 hex characters (32 bytes, no 0x prefix)
    #[arg(value_name = "PRIVATE_KEY", allow_hyphen_values = true)]
    pub private_key: String,

    /// Output format: lower, prefixed, or checksum
    #[arg(short = 'f', long, default_value = "lower")]
    pub format: AddressFormat,

    /// Also print the uncompressed public key (x || y) before the address
    #[arg(short = 'k', long, default_value = "false")]
    pub public_key: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Returns the log level selected by `--verbose`.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Initializes the logger on stderr; `RUST_LOG` takes precedence.
    pub fn init_logging(&self) {
        let env = env_logger::Env::new().default_filter_or(self.log_level().to_string());
        let _ = env_logger::Builder::from_env(env)
            .target(env_logger::Target::Stderr)
            .try_init();
    }
}
