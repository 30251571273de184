// keygen-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - two curves, one path-string contract
//
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │     ┌──────────────┴──────────────┐             │
// │     ▼                             ▼             │
// │  secp256k1 (BIP-32)        ed25519 (SLIP-0010)  │
// │  └─ Ethereum               └─ Solana            │
// └─────────────────────────────────────────────────┘
//
// The two algorithms share nothing but the path syntax, so each lives in
// its own module and this one only dispatches.

pub mod ed25519;
pub mod secp256k1;

pub use ed25519::Ed25519Deriver;
pub use secp256k1::Secp256k1Deriver;

use crate::crypto::mnemonic::SEED_LEN;
use crate::error::{CryptoError, WalletResult};
use zeroize::Zeroizing;

// =============================================================================
// COMMON TYPES
// =============================================================================
/// Curve type for key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveType {
    /// secp256k1 - Ethereum
    Secp256k1,
    /// Ed25519 - Solana
    Ed25519,
}

/// Child key material plus the path that produced it
pub struct DerivedKey {
    /// 32 bytes: an ed25519 seed or a secp256k1 scalar, wiped on drop
    pub private_key: Zeroizing<[u8; 32]>,
    pub curve: CurveType,
    pub path: String,
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("curve", &self.curve)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================
/// Entry point: pick the algorithm by curve, hand it the seed and path.
pub struct KeyDeriver;

impl KeyDeriver {
    /// # Arguments
    /// * `seed` - BIP-39 seed (64 bytes)
    /// * `path` - Derivation path (e.g., "m/44'/501'/0'/0'")
    /// * `curve` - Curve type
    pub fn derive(seed: &[u8], path: &str, curve: CurveType) -> WalletResult<DerivedKey> {
        Self::validate_seed(seed)?;

        tracing::debug!(?curve, path, "deriving child key");

        let private_key = match curve {
            CurveType::Secp256k1 => Secp256k1Deriver::derive(seed, path)?,
            CurveType::Ed25519 => Ed25519Deriver::derive(seed, path)?,
        };

        Ok(DerivedKey {
            private_key,
            curve,
            path: path.to_string(),
        })
    }

    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() != SEED_LEN {
            return Err(CryptoError::DerivationFailed(format!(
                "Invalid seed length: expected {} bytes, got {}",
                SEED_LEN,
                seed.len()
            ))
            .into());
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
