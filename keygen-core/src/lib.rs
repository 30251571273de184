// keygen-core/src/lib.rs

//! Non-custodial HD keypair generation for Solana and Ethereum.
//!
//! One 12-word BIP-39 phrase feeds both chains:
//! - Solana:   SLIP-0010 ed25519 at `m/44'/501'/i'/0'`
//! - Ethereum: BIP-32 secp256k1 at `m/44'/60'/i'/0'`
//!
//! A [`WalletSession`] holds the phrase, the chain selection and the
//! derived wallets; [`api`] wraps it for front ends. Nothing leaves the
//! process except what the caller copies or prints.

pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;
pub mod session;

pub use chains::{Chain, EthKeypairRecord, KeypairRecord, SolanaKeypairRecord};
pub use config::{KeygenConfig, OutputFormat};
pub use crypto::WalletMnemonic;
pub use error::{WalletError, WalletResult};
pub use session::{PendingDelete, WalletSession};
