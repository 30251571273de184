// keygen-core/src/chains/evm/keypair.rs
//
// Ethereum Keypair Builder
//
// Flow: mnemonic → seed (64B) → BIP-32 m/44'/60'/i'/0' → private key (32B)
//       → uncompressed public key → Keccak-256 → EIP-55 address

use super::address::EvmAddress;
use crate::chains::{derivation_seed, Chain, ChainKeyBuilder, KeypairRecord};
use crate::crypto::paths::DerivationPaths;
use crate::crypto::{CurveType, KeyDeriver};
use crate::error::{CryptoError, WalletResult};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A derived Ethereum wallet
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct EthKeypairRecord {
    /// EIP-55 checksummed, `0x` prefixed
    pub address: String,
    /// `0x` + 64 lowercase hex chars
    pub private_key: String,
    pub path: String,
}

impl std::fmt::Debug for EthKeypairRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthKeypairRecord")
            .field("address", &self.address)
            .field("private_key", &"[REDACTED]")
            .field("path", &self.path)
            .finish()
    }
}

/// Builds Ethereum keypairs
pub struct EthereumKeyBuilder;

impl EthereumKeyBuilder {
    /// Derive the Ethereum keypair at account `index`.
    pub fn build_record(mnemonic: &str, index: u32) -> WalletResult<EthKeypairRecord> {
        let path = DerivationPaths::ethereum(index);
        let seed = derivation_seed(mnemonic)?;
        let derived = KeyDeriver::derive(&*seed, &path, CurveType::Secp256k1)?;

        // A BIP-32 leaf is always a valid scalar; anything else is internal.
        let address = EvmAddress::derive(&*derived.private_key).map_err(|e| {
            CryptoError::DerivationFailed(format!("address derivation failed: {}", e))
        })?;

        Ok(EthKeypairRecord {
            address,
            private_key: format!("0x{}", hex::encode(&*derived.private_key)),
            path,
        })
    }
}

impl ChainKeyBuilder for EthereumKeyBuilder {
    fn chain(&self) -> Chain {
        Chain::Ethereum
    }

    fn path(&self, index: u32) -> String {
        DerivationPaths::ethereum(index)
    }

    fn build(&self, mnemonic: &str, index: u32) -> WalletResult<KeypairRecord> {
        Self::build_record(mnemonic, index).map(KeypairRecord::Ethereum)
    }
}
