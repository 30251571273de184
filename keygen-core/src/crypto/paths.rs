// keygen-core/src/crypto/paths.rs
//
// Derivation Paths Module - BIP-44 purpose, SLIP-44 coin types
//
// Both chains use the same four-level, all-hardened template:
//     m/44'/<coin_type>'/<account>'/0'
// where <account> is the session's shared derivation index.

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    // ---- secp256k1 ----
    pub const ETHEREUM: u32 = 60;

    // ---- ed25519 ----
    pub const SOLANA: u32 = 501;
}

/// BIP-44 purpose level
pub const PURPOSE: u32 = 44;

// =============================================================================
// DERIVATION PATHS
// =============================================================================
/// Path builders for the two supported chains
///
/// # Conventions
/// - Solana (SLIP-0010, ed25519): `m/44'/501'/account'/0'`
/// - Ethereum (BIP-32, secp256k1): `m/44'/60'/account'/0'`
///
/// The Ethereum template hardens the last level as well. That is not the
/// MetaMask default (`m/44'/60'/0'/0/0`), so addresses produced here will not
/// match a browser wallet restored from the same phrase.
pub struct DerivationPaths;

impl DerivationPaths {
    pub const SOLANA_0: &'static str = "m/44'/501'/0'/0'";
    pub const ETHEREUM_0: &'static str = "m/44'/60'/0'/0'";

    /// Solana path for an account index
    #[inline]
    pub fn solana(account: u32) -> String {
        Self::hardened_path(coin_type::SOLANA, account)
    }

    /// Ethereum path for an account index
    #[inline]
    pub fn ethereum(account: u32) -> String {
        Self::hardened_path(coin_type::ETHEREUM, account)
    }

    /// `m/44'/coin_type'/account'/0'`
    pub fn hardened_path(coin_type: u32, account: u32) -> String {
        format!("m/{}'/{}'/{}'/0'", PURPOSE, coin_type, account)
    }
}

// =============================================================================
// TESTS
// =============================================================================
