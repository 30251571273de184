// keygen-core/src/chains/solana/mod.rs

//! Solana Chain Support
//!
//! - **Keypairs**: SLIP-0010 ed25519 keypairs at `m/44'/501'/index'/0'` via [`SolanaKeyBuilder`].
//! - **Addresses**: base58 public keys via [`SolanaAddress`].

pub mod address;
pub mod keypair;

pub use address::SolanaAddress;
pub use keypair::{SolanaKeyBuilder, SolanaKeypairRecord};
