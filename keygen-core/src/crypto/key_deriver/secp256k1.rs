// keygen-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation - BIP-32
//
// Used for: Ethereum
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use crate::error::{CryptoError, WalletResult};
use bip32::{DerivationPath, XPrv};
use std::str::FromStr;
use zeroize::Zeroizing;

/// secp256k1 Key Deriver - BIP-32
///
/// Unlike the ed25519 deriver this one accepts both hardened (`'`) and
/// normal levels, so it also reproduces the common `m/44'/60'/0'/0/0`
/// layout of other wallets.
///
/// # Security
/// - The leaf private key is returned as `Zeroizing<[u8; 32]>`
/// - Intermediate `XPrv` nodes wipe their signing key on drop
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Derive the 32-byte private key at `path`.
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed (16..=64 bytes accepted by BIP-32)
    /// * `path` - e.g. `"m/44'/60'/0'/0'"`
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        let root_xprv = XPrv::new(seed).map_err(|e| {
            CryptoError::DerivationFailed(format!("Failed to create master key: {}", e))
        })?;

        let derivation_path = DerivationPath::from_str(path).map_err(|e| {
            CryptoError::DerivationFailed(format!("Invalid path '{}': {}", path, e))
        })?;

        let mut child = root_xprv;
        for child_num in derivation_path.iter() {
            child = child.derive_child(child_num).map_err(|e| {
                CryptoError::DerivationFailed(format!("Child derivation failed: {}", e))
            })?;
        }

        let key_bytes: [u8; 32] = child.private_key().to_bytes().into();
        Ok(Zeroizing::new(key_bytes))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::DerivationPaths;

    // BIP-39 seed of "abandon ... about", empty passphrase
    const TEST_SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    #[test]
    fn test_derive_ethereum_key() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let key = Secp256k1Deriver::derive(&seed, DerivationPaths::ETHEREUM_0).unwrap();
        assert_eq!(
            hex::encode(&*key),
            "43ff9ebfdccfa25e3921d9500db2f946d46a525fa08004af7f98976d9706cd5c"
        );
    }

    #[test]
    fn test_derive_non_hardened_leaf() {
        // MetaMask default account of the same phrase
        let seed = hex::decode(TEST_SEED).unwrap();
        let key = Secp256k1Deriver::derive(&seed, "m/44'/60'/0'/0/0").unwrap();
        assert_eq!(
            hex::encode(&*key),
            "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );
    }

    #[test]
    fn test_bip32_vector_1() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let master = Secp256k1Deriver::derive(&seed, "m").unwrap();
        assert_eq!(
            hex::encode(&*master),
            "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35"
        );
        let m0h = Secp256k1Deriver::derive(&seed, "m/0'").unwrap();
        assert_eq!(
            hex::encode(&*m0h),
            "edb2e14f9ee77d26dd93b4ecede8d16ed408ce149b6cd80b0715a2d911a0afea"
        );
        let m0h1 = Secp256k1Deriver::derive(&seed, "m/0'/1").unwrap();
        assert_eq!(
            hex::encode(&*m0h1),
            "3c6cb8d0f6a264c91ea8b5030fadaa8e538b020f0a387421a12de9319dc93368"
        );
    }

    #[test]
    fn test_consistency() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let k1 = Secp256k1Deriver::derive(&seed, DerivationPaths::ETHEREUM_0).unwrap();
        let k2 = Secp256k1Deriver::derive(&seed, DerivationPaths::ETHEREUM_0).unwrap();
        assert_eq!(&*k1, &*k2);
    }

    #[test]
    fn test_different_accounts() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let keys: Vec<_> = (0..5)
            .map(|i| Secp256k1Deriver::derive(&seed, &DerivationPaths::ethereum(i)).unwrap())
            .collect();
        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                assert_ne!(&*keys[i], &*keys[j], "Key {} and {} should differ", i, j);
            }
        }
    }

    #[test]
    fn test_invalid_path() {
        let seed = hex::decode(TEST_SEED).unwrap();
        assert!(Secp256k1Deriver::derive(&seed, "invalid").is_err());
        assert!(Secp256k1Deriver::derive(&seed, "m/44'/x'").is_err());
    }

    #[test]
    fn test_hardened_leaf_differs_from_normal_leaf() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let hardened = Secp256k1Deriver::derive(&seed, "m/44'/60'/0'/0'").unwrap();
        let normal = Secp256k1Deriver::derive(&seed, "m/44'/60'/0'/0").unwrap();
        assert_ne!(&*hardened, &*normal);
    }
}
