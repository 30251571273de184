// keygen-core/src/chains/evm/mod.rs

//! Ethereum Chain Support
//!
//! - **Address Derivation**: EIP-55 checksummed address generation via [`EvmAddress`].
//! - **Keypairs**: BIP-32 secp256k1 keypairs at `m/44'/60'/index'/0'` via [`EthereumKeyBuilder`].

pub mod address;
pub mod keypair;

// Re-exports for cleaner API access
pub use address::EvmAddress;
pub use keypair::{EthKeypairRecord, EthereumKeyBuilder};
