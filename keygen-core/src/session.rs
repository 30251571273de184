// keygen-core/src/session.rs
//
// Wallet Session - the state a single user works against
//
// Owns the active mnemonic, the chain selection, one wallet list per chain
// and the derivation index shared by both chains. One instance per user;
// nothing here is global and nothing is shared across sessions.

use crate::chains::{Chain, EthKeypairRecord, KeypairRecord, SolanaKeypairRecord};
use crate::crypto::WalletMnemonic;
use crate::error::{WalletError, WalletResult};
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

/// A deletion waiting for confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelete {
    pub chain: Chain,
    pub position: usize,
}

/// Session state
///
/// # Index rule
/// `current_index` counts every wallet successfully added since the last
/// mnemonic reset, across *both* chains. Adding a Solana wallet and then an
/// Ethereum wallet yields account indices 0 and 1; the same account index is
/// never used for two chains within one session. Deleting a wallet does not
/// give its index back.
///
/// Switching chains does not clear the lists or the index.
///
/// # Secrets
/// The mnemonic words are wiped on drop or replacement, records wipe their
/// private key on drop. Copies handed out to callers are theirs to manage.
#[derive(Default)]
pub struct WalletSession {
    /// `None` until a phrase is generated or imported
    words: Option<Zeroizing<Vec<String>>>,
    chain: Option<Chain>,
    solana_wallets: Vec<SolanaKeypairRecord>,
    eth_wallets: Vec<EthKeypairRecord>,
    current_index: u32,
    is_valid_mnemonic: bool,
    pending_delete: Option<PendingDelete>,
}

impl std::fmt::Debug for WalletSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletSession")
            .field("has_mnemonic", &self.has_mnemonic())
            .field("chain", &self.chain)
            .field("solana_wallets", &self.solana_wallets.len())
            .field("eth_wallets", &self.eth_wallets.len())
            .field("current_index", &self.current_index)
            .finish_non_exhaustive()
    }
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // MNEMONIC
    // =========================================================================

    /// Replace the mnemonic and start over: both lists cleared, index 0.
    ///
    /// The words are not validated here; [`WalletSession::add_wallet`]
    /// re-validates before every derivation. A grid of blank entries is the
    /// unset placeholder and leaves the session without a mnemonic.
    pub fn set_mnemonic<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        self.is_valid_mnemonic = WalletMnemonic::validate_words(&words);
        self.words = if words.iter().all(|w| w.trim().is_empty()) {
            None
        } else {
            Some(Zeroizing::new(words))
        };
        self.solana_wallets.clear();
        self.eth_wallets.clear();
        self.current_index = 0;
        self.pending_delete = None;
        info!("mnemonic replaced, session reset");
    }

    /// Generate a fresh phrase and make it the active mnemonic.
    pub fn generate_mnemonic(&mut self) -> WalletResult<Vec<String>> {
        let mnemonic = WalletMnemonic::generate()?;
        let words: Vec<String> = mnemonic.words().into_iter().map(String::from).collect();
        self.set_mnemonic(words.iter().cloned());
        Ok(words)
    }

    /// Import free text as the active mnemonic.
    ///
    /// Requires exactly 12 whitespace-separated words with a valid checksum.
    /// On failure the session is left untouched.
    pub fn import_mnemonic(&mut self, raw: &str) -> WalletResult<Vec<String>> {
        let mnemonic = WalletMnemonic::from_phrase(raw).map_err(|e| {
            warn!(error = %e, "mnemonic import rejected");
            e
        })?;
        let words: Vec<String> = mnemonic.words().into_iter().map(String::from).collect();
        self.set_mnemonic(words.iter().cloned());
        Ok(words)
    }

    pub fn has_mnemonic(&self) -> bool {
        self.words.is_some()
    }

    /// The active words, empty while unset.
    pub fn mnemonic_words(&self) -> &[String] {
        self.words.as_ref().map(|w| w.as_slice()).unwrap_or(&[])
    }

    /// Space-joined phrase, `None` while unset.
    pub fn mnemonic_phrase(&self) -> Option<Zeroizing<String>> {
        self.words.as_ref().map(|w| Zeroizing::new(w.join(" ")))
    }

    /// Re-check the current words and remember the outcome.
    pub fn validate_current(&mut self) -> bool {
        self.is_valid_mnemonic = self
            .words
            .as_ref()
            .map(|w| WalletMnemonic::validate_words(w.as_slice()))
            .unwrap_or(false);
        self.is_valid_mnemonic
    }

    /// Outcome of the last validation.
    pub fn is_valid_mnemonic(&self) -> bool {
        self.is_valid_mnemonic
    }

    // =========================================================================
    // CHAIN SELECTION
    // =========================================================================

    /// Overwrite the chain selection. Lists and index are kept as they are.
    pub fn select_chain(&mut self, chain: Chain) {
        debug!(%chain, "chain selected");
        self.chain = Some(chain);
    }

    pub fn chain(&self) -> Option<Chain> {
        self.chain
    }

    // =========================================================================
    // WALLETS
    // =========================================================================

    /// Derive the next wallet for `chain` and append it to that chain's list.
    ///
    /// # Errors
    /// - `ChainNotSelected` / `ChainMismatch` when `chain` is not the selection
    /// - `MnemonicUnset` or a `Mnemonic` error when the words do not validate;
    ///   nothing is derived in that case
    /// - `Crypto(DerivationFailed)` from the builder; the index is not consumed
    pub fn add_wallet(&mut self, chain: Chain) -> WalletResult<KeypairRecord> {
        match self.chain {
            None => return Err(WalletError::ChainNotSelected),
            Some(selected) if selected != chain => {
                return Err(WalletError::ChainMismatch {
                    selected,
                    requested: chain,
                })
            }
            Some(_) => {}
        }

        let phrase = self.checked_phrase()?;
        let index = self.current_index;
        let builder = chain.builder();
        let path = builder.path(index);
        debug!(%chain, path = %path, "deriving wallet");

        let record = builder.build(&phrase, index).map_err(|e| {
            warn!(%chain, path = %path, error = %e, "wallet derivation failed");
            e
        })?;

        match &record {
            KeypairRecord::Solana(r) => self.solana_wallets.push(r.clone()),
            KeypairRecord::Ethereum(r) => self.eth_wallets.push(r.clone()),
        }
        self.current_index += 1;

        debug!(%chain, "wallet added");
        Ok(record)
    }

    /// Remove the wallet at `position` of `chain`'s list.
    ///
    /// Remaining records keep their paths; the shared index is unchanged.
    pub fn delete_wallet(&mut self, chain: Chain, position: usize) -> WalletResult<KeypairRecord> {
        let removed = match chain {
            Chain::Solana if position < self.solana_wallets.len() => {
                KeypairRecord::Solana(self.solana_wallets.remove(position))
            }
            Chain::Ethereum if position < self.eth_wallets.len() => {
                KeypairRecord::Ethereum(self.eth_wallets.remove(position))
            }
            _ => return Err(WalletError::WalletNotFound { chain, position }),
        };

        if self.pending_delete.is_some_and(|p| p.chain == chain) {
            self.pending_delete = None;
        }

        debug!(%chain, position, path = removed.path(), "wallet deleted");
        Ok(removed)
    }

    /// Stage a deletion; applied by [`WalletSession::confirm_delete`].
    pub fn request_delete(&mut self, chain: Chain, position: usize) -> WalletResult<()> {
        if position >= self.wallet_count(chain) {
            return Err(WalletError::WalletNotFound { chain, position });
        }
        self.pending_delete = Some(PendingDelete { chain, position });
        Ok(())
    }

    /// Apply the staged deletion. `Ok(None)` when nothing was staged.
    pub fn confirm_delete(&mut self) -> WalletResult<Option<KeypairRecord>> {
        match self.pending_delete.take() {
            Some(PendingDelete { chain, position }) => {
                self.delete_wallet(chain, position).map(Some)
            }
            None => Ok(None),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<PendingDelete> {
        self.pending_delete
    }

    pub fn solana_wallets(&self) -> &[SolanaKeypairRecord] {
        &self.solana_wallets
    }

    pub fn eth_wallets(&self) -> &[EthKeypairRecord] {
        &self.eth_wallets
    }

    /// Records of one chain in list order.
    pub fn wallets(&self, chain: Chain) -> Vec<KeypairRecord> {
        match chain {
            Chain::Solana => self
                .solana_wallets
                .iter()
                .cloned()
                .map(KeypairRecord::Solana)
                .collect(),
            Chain::Ethereum => self
                .eth_wallets
                .iter()
                .cloned()
                .map(KeypairRecord::Ethereum)
                .collect(),
        }
    }

    pub fn wallet_count(&self, chain: Chain) -> usize {
        match chain {
            Chain::Solana => self.solana_wallets.len(),
            Chain::Ethereum => self.eth_wallets.len(),
        }
    }

    /// Account index the next wallet of either chain will use.
    pub fn current_index(&self) -> u32 {
        self.current_index
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    /// Validate the current words and return them joined.
    fn checked_phrase(&mut self) -> WalletResult<Zeroizing<String>> {
        let words = self.words.as_ref().ok_or(WalletError::MnemonicUnset)?;
        let result = WalletMnemonic::from_words(words.as_slice());
        self.is_valid_mnemonic = result.is_ok();
        let mnemonic = result.map_err(|e| {
            warn!(error = %e, "current mnemonic failed validation");
            e
        })?;
        Ok(Zeroizing::new(mnemonic.phrase().to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
