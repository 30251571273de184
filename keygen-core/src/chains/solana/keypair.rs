// keygen-core/src/chains/solana/keypair.rs
//
// Solana Keypair Builder
//
// Flow: mnemonic → seed (64B) → SLIP-0010 m/44'/501'/i'/0' (32B)
//       → ed25519 expand → public key (base58) + secret key (hex, 64B)

use super::address::SolanaAddress;
use crate::chains::{derivation_seed, Chain, ChainKeyBuilder, KeypairRecord};
use crate::crypto::paths::DerivationPaths;
use crate::crypto::{CurveType, KeyDeriver};
use crate::error::WalletResult;
use ed25519_dalek::SigningKey;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A derived Solana wallet
///
/// `private_key` is the 64-byte secret key in lowercase hex: the 32-byte
/// ed25519 seed followed by the 32-byte public key, the layout Solana
/// keypair files and `Keypair::from_bytes` use.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct SolanaKeypairRecord {
    pub public_key: String,
    pub private_key: String,
    pub path: String,
}

impl std::fmt::Debug for SolanaKeypairRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaKeypairRecord")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .field("path", &self.path)
            .finish()
    }
}

/// Builds Solana keypairs
pub struct SolanaKeyBuilder;

impl SolanaKeyBuilder {
    /// Derive the Solana keypair at account `index`.
    pub fn build_record(mnemonic: &str, index: u32) -> WalletResult<SolanaKeypairRecord> {
        let path = DerivationPaths::solana(index);
        let seed = derivation_seed(mnemonic)?;
        let derived = KeyDeriver::derive(&*seed, &path, CurveType::Ed25519)?;

        // The derived 32 bytes are an ed25519 seed; dalek hashes and clamps it.
        let signing_key = SigningKey::from_bytes(&derived.private_key);
        let secret = Zeroizing::new(signing_key.to_keypair_bytes());

        Ok(SolanaKeypairRecord {
            public_key: SolanaAddress::from_signing_key(&signing_key),
            private_key: hex::encode(&*secret),
            path,
        })
    }
}

impl ChainKeyBuilder for SolanaKeyBuilder {
    fn chain(&self) -> Chain {
        Chain::Solana
    }

    fn path(&self, index: u32) -> String {
        DerivationPaths::solana(index)
    }

    fn build(&self, mnemonic: &str, index: u32) -> WalletResult<KeypairRecord> {
        Self::build_record(mnemonic, index).map(KeypairRecord::Solana)
    }
}
