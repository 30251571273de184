// keygen-core/src/chains/evm/address.rs
//
// EVM Address Module
// EIP-55 (Checksum), Keccak-256, secp256k1

use crate::error::{CryptoError, WalletResult};
use alloy::primitives::Address;
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use tiny_keccak::{Hasher, Keccak};
use zeroize::Zeroize;

/// EVM Address Generator
///
/// # Flow:  Private Key (32B) → Public Key (64B) → Keccak256 → Address (20B)
///
/// This module never stores the private key.
pub struct EvmAddress;

impl EvmAddress {
    /// Derive the 20 address bytes of a private key.
    ///
    /// # Algorithm (Ethereum Yellow Paper)
    /// 1. `priv_key` (32B) → secp256k1 → `pub_key` (uncompressed, 65B)
    /// 2. Drop the 0x04 prefix → `pub_key_raw` (64B)
    /// 3. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 4. `hash[12..32]` → `address` (20B)
    pub fn derive_bytes(priv_key: &[u8]) -> WalletResult<[u8; 20]> {
        // Parse & validate private key (rejects zero and >= n)
        let secret_key = SecretKey::from_slice(priv_key).map_err(|e| {
            CryptoError::InvalidKeyFormat(format!("Invalid secp256k1 private key: {}", e))
        })?;

        let encoded = secret_key.public_key().to_encoded_point(false);
        let pub_key_raw = &encoded.as_bytes()[1..];

        let mut hasher = Keccak::v256();
        let mut hash = [0u8; 32];
        hasher.update(pub_key_raw);
        hasher.finalize(&mut hash);

        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);

        // SecretKey wipes itself on drop
        hash.zeroize();

        Ok(address)
    }

    /// Derive the EIP-55 checksummed address string.
    ///
    /// # Returns
    /// `"0x9858EfFD232B4033E47d90003D41EC34EcaEda94"` (mixed-case checksum)
    #[inline]
    pub fn derive(priv_key: &[u8]) -> WalletResult<String> {
        let bytes = Self::derive_bytes(priv_key)?;
        Ok(Address::from_slice(&bytes).to_checksum(None))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PRIVATE_KEY: &str =
        "501c797c4b1fdfa88fb7efdf7c9871b8e0f46dbc44259e3e270e0d4c938165f5";
    const TEST_ADDRESS: &str = "0xb611C31e4284BF7A7daD3296e62880F14b3b15DD";

    // Anvil/Hardhat account #0
    const ANVIL_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ANVIL_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_derive() {
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        assert_eq!(EvmAddress::derive(&priv_key).unwrap(), TEST_ADDRESS);
    }

    #[test]
    fn test_derive_anvil() {
        let priv_key = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        assert_eq!(EvmAddress::derive(&priv_key).unwrap(), ANVIL_ADDRESS);
    }

    #[test]
    fn test_derive_bytes_matches_string() {
        let priv_key = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        let bytes = EvmAddress::derive_bytes(&priv_key).unwrap();
        assert_eq!(
            format!("0x{}", hex::encode(bytes)),
            ANVIL_ADDRESS.to_lowercase()
        );
    }

    #[test]
    fn test_checksum_is_mixed_case() {
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        let address = EvmAddress::derive(&priv_key).unwrap();
        assert_eq!(address.len(), 42);
        assert!(address.starts_with("0x"));
        assert_ne!(address, address.to_lowercase());
        assert_eq!(address.to_lowercase(), "0xb611c31e4284bf7a7dad3296e62880f14b3b15dd");
    }

    #[test]
    fn test_invalid_private_key() {
        assert!(EvmAddress::derive(&[0u8; 31]).is_err());
        assert!(EvmAddress::derive(&[0u8; 33]).is_err());
        assert!(EvmAddress::derive(&[]).is_err());
        assert!(EvmAddress::derive(&[0u8; 32]).is_err()); // zero scalar
    }
}
