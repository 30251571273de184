// keygen-core/src/chains/solana/address.rs
//
// Solana addresses are the raw 32-byte ed25519 public key in base58.

use ed25519_dalek::{SigningKey, VerifyingKey};

pub struct SolanaAddress;

impl SolanaAddress {
    /// Base58 address of a signing key
    #[inline]
    pub fn from_signing_key(key: &SigningKey) -> String {
        Self::encode(&key.verifying_key())
    }

    #[inline]
    pub fn encode(public_key: &VerifyingKey) -> String {
        bs58::encode(public_key.to_bytes()).into_string()
    }
}
