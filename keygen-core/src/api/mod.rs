// keygen-core/src/api/mod.rs
//
// Call surface for a front end (CLI, GUI, FFI bridge).
//
// Each function maps to one user action. All state lives in the
// `WalletSession` the caller owns and passes in.

pub mod clipboard;

pub use clipboard::Clipboard;

use crate::chains::{Chain, EthKeypairRecord, KeypairRecord, SolanaKeypairRecord};
use crate::config::KeygenConfig;
use crate::crypto::WalletMnemonic;
use crate::error::{CryptoError, WalletError, WalletResult};
use crate::session::WalletSession;
use tracing_subscriber::EnvFilter;

// --- Initialization ---

/// Install the stderr log subscriber. Safe to call more than once.
pub fn init_core(config: &KeygenConfig) -> WalletResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| WalletError::Config(format!("invalid log filter: {}", e)))?;

    // A subscriber installed earlier (tests, embedding app) wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}

// --- Mnemonic ---

/// Fresh 12-word phrase. Does not touch any session.
pub fn generate_mnemonic() -> WalletResult<Vec<String>> {
    let mnemonic = WalletMnemonic::generate()?;
    Ok(mnemonic.words().into_iter().map(String::from).collect())
}

/// Validate a joined phrase.
pub fn validate_mnemonic(phrase: &str) -> bool {
    WalletMnemonic::validate(phrase)
}

/// Validate a word sequence.
pub fn validate_mnemonic_words<S: AsRef<str>>(words: &[S]) -> bool {
    WalletMnemonic::validate_words(words)
}

/// Import free text into `session`; state is unchanged on error.
pub fn import_mnemonic(session: &mut WalletSession, raw: &str) -> WalletResult<Vec<String>> {
    session.import_mnemonic(raw)
}

// --- Wallets ---

pub fn add_solana_wallet(session: &mut WalletSession) -> WalletResult<SolanaKeypairRecord> {
    match session.add_wallet(Chain::Solana)? {
        KeypairRecord::Solana(record) => Ok(record),
        KeypairRecord::Ethereum(_) => Err(unexpected_variant(Chain::Solana)),
    }
}

pub fn add_eth_wallet(session: &mut WalletSession) -> WalletResult<EthKeypairRecord> {
    match session.add_wallet(Chain::Ethereum)? {
        KeypairRecord::Ethereum(record) => Ok(record),
        KeypairRecord::Solana(_) => Err(unexpected_variant(Chain::Ethereum)),
    }
}

/// Delete one wallet and return that chain's updated list.
pub fn delete_wallet(
    session: &mut WalletSession,
    chain: Chain,
    position: usize,
) -> WalletResult<Vec<KeypairRecord>> {
    session.delete_wallet(chain, position)?;
    Ok(session.wallets(chain))
}

fn unexpected_variant(chain: Chain) -> WalletError {
    CryptoError::DerivationFailed(format!("{} builder returned a foreign record", chain)).into()
}

// --- Clipboard ---

pub fn copy_text<C: Clipboard>(clipboard: &mut C, text: &str) -> WalletResult<()> {
    clipboard.copy(text).map_err(|e| {
        tracing::warn!(error = %e, "copy to clipboard failed");
        WalletError::from(e)
    })
}

/// Copy the active phrase. Fails with `MnemonicUnset` before any generate/import.
pub fn copy_mnemonic<C: Clipboard>(session: &WalletSession, clipboard: &mut C) -> WalletResult<()> {
    let phrase = session.mnemonic_phrase().ok_or(WalletError::MnemonicUnset)?;
    copy_text(clipboard, &phrase)
}
