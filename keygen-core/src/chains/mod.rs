// keygen-core/src/chains/mod.rs
//
// Chain selection and the per-chain key builders.
//
// Each chain turns (mnemonic, account index) into a keypair record:
//   Solana   → SLIP-0010 ed25519, base58 public key, hex 64-byte secret
//   Ethereum → BIP-32 secp256k1, EIP-55 address, 0x-hex 32-byte secret

pub mod evm;
pub mod solana;

pub use evm::{EthKeypairRecord, EthereumKeyBuilder, EvmAddress};
pub use solana::{SolanaAddress, SolanaKeyBuilder, SolanaKeypairRecord};

use crate::crypto::{mnemonic, SEED_LEN};
use crate::error::{CryptoError, WalletResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroizing;

// =============================================================================
// CHAIN IDENTIFICATION
// =============================================================================

/// Supported blockchains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Solana,
    Ethereum,
}

impl Chain {
    pub const ALL: [Chain; 2] = [Chain::Solana, Chain::Ethereum];

    /// The builder that produces this chain's keypairs.
    pub fn builder(self) -> &'static dyn ChainKeyBuilder {
        match self {
            Chain::Solana => &SolanaKeyBuilder,
            Chain::Ethereum => &EthereumKeyBuilder,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Chain::Solana => "solana",
            Chain::Ethereum => "ethereum",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solana" | "sol" => Ok(Chain::Solana),
            "ethereum" | "eth" => Ok(Chain::Ethereum),
            other => Err(format!("unknown chain '{}', expected solana or ethereum", other)),
        }
    }
}

// =============================================================================
// KEYPAIR RECORDS
// =============================================================================

/// A derived wallet of either chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "chain", rename_all = "lowercase")]
pub enum KeypairRecord {
    Solana(SolanaKeypairRecord),
    Ethereum(EthKeypairRecord),
}

impl KeypairRecord {
    pub fn chain(&self) -> Chain {
        match self {
            KeypairRecord::Solana(_) => Chain::Solana,
            KeypairRecord::Ethereum(_) => Chain::Ethereum,
        }
    }

    /// Base58 public key for Solana, checksummed address for Ethereum.
    pub fn public_id(&self) -> &str {
        match self {
            KeypairRecord::Solana(r) => &r.public_key,
            KeypairRecord::Ethereum(r) => &r.address,
        }
    }

    pub fn private_key(&self) -> &str {
        match self {
            KeypairRecord::Solana(r) => &r.private_key,
            KeypairRecord::Ethereum(r) => &r.private_key,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            KeypairRecord::Solana(r) => &r.path,
            KeypairRecord::Ethereum(r) => &r.path,
        }
    }
}

// =============================================================================
// BUILDER CAPABILITY
// =============================================================================

/// Turns a validated mnemonic and an account index into a keypair record.
///
/// Failures are always `CryptoError::DerivationFailed`: the caller has
/// validated the phrase already, so anything going wrong here is internal
/// and retrying the same index will not help.
pub trait ChainKeyBuilder: Send + Sync {
    fn chain(&self) -> Chain;

    /// Derivation path for `index`.
    fn path(&self, index: u32) -> String;

    fn build(&self, mnemonic: &str, index: u32) -> WalletResult<KeypairRecord>;
}

/// Seed for a builder. Parse failures are reported as derivation failures.
pub(crate) fn derivation_seed(phrase: &str) -> WalletResult<Zeroizing<[u8; SEED_LEN]>> {
    mnemonic::seed_from_phrase(phrase)
        .map_err(|e| CryptoError::DerivationFailed(format!("seed conversion failed: {}", e)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_parse_and_display() {
        assert_eq!("solana".parse::<Chain>().unwrap(), Chain::Solana);
        assert_eq!("ETH".parse::<Chain>().unwrap(), Chain::Ethereum);
        assert!("bitcoin".parse::<Chain>().is_err());
        assert_eq!(Chain::Ethereum.to_string(), "ethereum");
    }

    #[test]
    fn test_chain_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Chain::Solana).unwrap(), "\"solana\"");
        let c: Chain = serde_json::from_str("\"ethereum\"").unwrap();
        assert_eq!(c, Chain::Ethereum);
    }

    #[test]
    fn test_builder_dispatch() {
        for chain in Chain::ALL {
            assert_eq!(chain.builder().chain(), chain);
        }
        assert_eq!(Chain::Solana.builder().path(3), "m/44'/501'/3'/0'");
        assert_eq!(Chain::Ethereum.builder().path(3), "m/44'/60'/3'/0'");
    }

    #[test]
    fn test_derivation_seed_maps_to_crypto_error() {
        let err = derivation_seed("definitely not a phrase").unwrap_err();
        assert!(!err.is_validation());
    }
}
