// keygen-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation - SLIP-0010
//
// Used for: Solana
// Algorithm: HMAC-SHA512, hardened children only
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// SLIP-0010 for ed25519 has no public (non-hardened) derivation.
// Every level in the path MUST carry the hardened marker.
// e.g. m/44'/501'/0'/0' (OK)    m/44'/501'/0'/0 (INVALID)

use crate::error::{CryptoError, WalletResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

const HARDENED_OFFSET: u32 = 0x8000_0000;

/// One node of the SLIP-0010 tree: 32-byte key + 32-byte chain code.
///
/// Both halves are wiped when the node goes out of scope.
#[derive(Zeroize, ZeroizeOnDrop)]
struct Node {
    key: [u8; 32],
    chain_code: [u8; 32],
}

impl Node {
    /// Split an HMAC-SHA512 output into IL (key) and IR (chain code).
    fn from_hmac(mac: HmacSha512) -> Self {
        let mut out = mac.finalize().into_bytes();

        let mut node = Node {
            key: [0u8; 32],
            chain_code: [0u8; 32],
        };
        node.key.copy_from_slice(&out[..32]);
        node.chain_code.copy_from_slice(&out[32..]);

        out[..].zeroize();
        node
    }
}

/// Ed25519 Key Deriver - SLIP-0010
///
/// # Differences from secp256k1 (BIP-32)
/// - Master HMAC key: "ed25519 seed" instead of "Bitcoin seed"
/// - Hardened derivation only
/// - No range check on IL: any 32 bytes are a valid ed25519 seed
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    /// SLIP-0010 master key seed constant
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Derive the 32-byte ed25519 seed at `path`.
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed
    /// * `path` - all levels hardened, e.g. `"m/44'/501'/0'/0'"`
    ///
    /// The result is an ed25519 *seed*, not a clamped scalar: hand it to
    /// `SigningKey::from_bytes` to expand it.
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        let indices = Self::parse_path(path)?;

        // I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
        let mut node = Self::master(seed)?;

        // I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || ser32(i + 2^31))
        for index in indices {
            node = Self::child(&node, index)?;
        }

        Ok(Zeroizing::new(node.key))
    }

    fn master(seed: &[u8]) -> WalletResult<Node> {
        let mut mac = HmacSha512::new_from_slice(Self::MASTER_SECRET)
            .map_err(|e| CryptoError::DerivationFailed(format!("HMAC init failed: {}", e)))?;
        mac.update(seed);
        Ok(Node::from_hmac(mac))
    }

    fn child(parent: &Node, index: u32) -> WalletResult<Node> {
        let mut mac = HmacSha512::new_from_slice(&parent.chain_code)
            .map_err(|e| CryptoError::DerivationFailed(format!("HMAC init failed: {}", e)))?;

        mac.update(&[0x00]);
        mac.update(&parent.key);
        mac.update(&(index | HARDENED_OFFSET).to_be_bytes());
        Ok(Node::from_hmac(mac))
    }

    /// Parse a derivation path into unhardened index values.
    ///
    /// Input: "m/44'/501'/0'/0'"
    /// Output: [44, 501, 0, 0]
    ///
    /// Accepts `'` or `h` as the hardened marker.
    fn parse_path(path: &str) -> WalletResult<Vec<u32>> {
        let path = path.trim();

        let segments = path.strip_prefix("m/").ok_or_else(|| {
            CryptoError::DerivationFailed(format!("Path must start with 'm/': {}", path))
        })?;
        if segments.is_empty() {
            return Err(CryptoError::DerivationFailed("Empty derivation path".to_string()).into());
        }

        segments
            .split('/')
            .map(|segment| -> WalletResult<u32> {
                let num_str = segment
                    .strip_suffix('\'')
                    .or_else(|| segment.strip_suffix('h'))
                    .ok_or_else(|| {
                        CryptoError::DerivationFailed(format!(
                            "Ed25519 SLIP-0010 requires ALL levels to be hardened (add '). Invalid segment: '{}'",
                            segment
                        ))
                    })?;

                let index: u32 = num_str.parse().map_err(|e| {
                    CryptoError::DerivationFailed(format!("Invalid index '{}': {}", num_str, e))
                })?;
                if index >= HARDENED_OFFSET {
                    return Err(CryptoError::DerivationFailed(format!(
                        "Index out of range: {}",
                        index
                    ))
                    .into());
                }
                Ok(index)
            })
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
