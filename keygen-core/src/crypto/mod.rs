// keygen-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Mnemonic**: 12-word BIP-39 phrases and seed stretching via [`WalletMnemonic`].
//! - **Key Derivation**: Secp256k1 (Ethereum) and Ed25519 (Solana) via [`KeyDeriver`].
//! - **Derivation Paths**: `m/44'/coin'/account'/0'` builders via [`DerivationPaths`].

pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use key_deriver::{CurveType, DerivedKey, KeyDeriver};
pub use mnemonic::{seed_from_phrase, WalletMnemonic, SEED_LEN, WORD_COUNT};
pub use paths::DerivationPaths;
