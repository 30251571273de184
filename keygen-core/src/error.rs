// keygen-core/src/error.rs

use crate::chains::Chain;
use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("No mnemonic has been generated or imported yet.")]
    MnemonicUnset,

    #[error("No chain selected. Select solana or ethereum first.")]
    ChainNotSelected,

    #[error("Selected chain is {selected}, cannot add a wallet for {requested}.")]
    ChainMismatch { selected: Chain, requested: Chain },

    #[error("No {chain} wallet at position {position}.")]
    WalletNotFound { chain: Chain, position: usize },

    #[error("Clipboard Error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl WalletError {
    /// True when the failure comes from user input (fix the phrase, pick a
    /// chain, pick another row) rather than from the crypto libraries.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            WalletError::Mnemonic(_)
                | WalletError::MnemonicUnset
                | WalletError::ChainNotSelected
                | WalletError::ChainMismatch { .. }
                | WalletError::WalletNotFound { .. }
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),
}

/// Raised by the clipboard collaborator. The core never retries a copy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}
