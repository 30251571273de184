// keygen-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 phrase generation, validation and seed stretching
// Standard: BIP-39 (Mnemonic), PBKDF2-HMAC-SHA512 (Seed Derivation)

use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::Mnemonic;
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Number of words in every phrase this wallet generates or accepts.
pub const WORD_COUNT: usize = 12;

/// Entropy behind a 12-word phrase (128 bits).
const ENTROPY_BYTES: usize = 16;

/// Length of a BIP-39 seed.
pub const SEED_LEN: usize = 64;

/// Wallet Mnemonic - 12-word BIP-39 phrase
///
/// # Security Architecture
/// - **ZeroizeOnDrop**: the phrase is overwritten with zeros when dropped
/// - **CSPRNG**: entropy comes from `OsRng`
/// - **No Debug Leak**: custom Debug impl never prints the words
///
/// A `WalletMnemonic` always holds a phrase that passed word-count and
/// checksum validation at construction time. Callers that keep raw words
/// around (e.g. an editable grid) re-validate with [`WalletMnemonic::validate`]
/// before deriving.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
}

// Custom Debug - never show the phrase
impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &WORD_COUNT)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for WalletMnemonic {
    fn eq(&self, other: &Self) -> bool {
        self.phrase == other.phrase
    }
}

impl Eq for WalletMnemonic {}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Generate a fresh 12-word mnemonic (128-bit entropy).
    pub fn generate() -> WalletResult<Self> {
        // Stack-allocated entropy buffer
        let mut entropy = [0u8; ENTROPY_BYTES];
        OsRng.fill_bytes(&mut entropy);

        let mnemonic = Mnemonic::from_entropy(&entropy);

        // Zeroize entropy right after use
        entropy.zeroize();

        let mnemonic = mnemonic.map_err(map_bip39_error)?;
        Ok(Self {
            phrase: mnemonic.to_string(),
        })
    }

    /// Restore a mnemonic from free text.
    ///
    /// # Validation
    /// - Splits on any whitespace, requires exactly 12 tokens
    /// - Every word must be in the BIP-39 English wordlist
    /// - Checksum must pass
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let normalized = phrase.split_whitespace().collect::<Vec<_>>();
        Self::from_words(&normalized)
    }

    /// Restore a mnemonic from an already split word sequence.
    ///
    /// Every entry must hold exactly one word. Blank entries count as
    /// missing words; an entry with inner whitespace is an unknown word.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> WalletResult<Self> {
        if words.len() != WORD_COUNT {
            return Err(MnemonicError::InvalidWordCount(words.len()).into());
        }
        Self::check_entries(words)?;

        let normalized_phrase = words
            .iter()
            .map(|w| w.as_ref().trim())
            .collect::<Vec<_>>()
            .join(" ");

        Mnemonic::parse(normalized_phrase.as_str()).map_err(|e| match e {
            bip39::Error::UnknownWord(idx) => {
                let word = words
                    .get(idx)
                    .map(|w| w.as_ref().trim().to_string())
                    .unwrap_or_default();
                WalletError::Mnemonic(MnemonicError::UnknownWord(word))
            }
            other => map_bip39_error(other),
        })?;

        Ok(Self {
            phrase: normalized_phrase,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The space-joined phrase.
    ///
    /// # Warning
    /// Be careful when displaying or logging this value!
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The 12 words in order.
    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// 64-byte seed (PBKDF2-HMAC-SHA512, 2048 rounds, empty passphrase).
    ///
    /// Recomputed on every call, never cached.
    pub fn to_seed(&self) -> WalletResult<Zeroizing<[u8; SEED_LEN]>> {
        seed_from_phrase(&self.phrase)
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Full check of a joined phrase: word count, wordlist, checksum.
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        let words = phrase.split_whitespace().collect::<Vec<_>>();
        Self::validate_words(&words)
    }

    /// Same as [`WalletMnemonic::validate`] for a split word sequence.
    pub fn validate_words<S: AsRef<str>>(words: &[S]) -> bool {
        Self::from_words(words).is_ok()
    }

    fn check_entries<S: AsRef<str>>(words: &[S]) -> WalletResult<()> {
        let filled = words.iter().filter(|w| !w.as_ref().trim().is_empty()).count();
        if filled != words.len() {
            return Err(MnemonicError::InvalidWordCount(filled).into());
        }
        if let Some(entry) = words
            .iter()
            .map(|w| w.as_ref().trim())
            .find(|w| w.contains(char::is_whitespace))
        {
            return Err(MnemonicError::UnknownWord(entry.to_string()).into());
        }
        Ok(())
    }
}

/// Convert a space-joined phrase into its 64-byte seed.
///
/// Fails only when the phrase does not parse; callers are expected to have
/// validated it first and must not derive on failure.
pub fn seed_from_phrase(phrase: &str) -> WalletResult<Zeroizing<[u8; SEED_LEN]>> {
    let mnemonic = Mnemonic::parse(phrase).map_err(map_bip39_error)?;
    Ok(Zeroizing::new(mnemonic.to_seed("")))
}

fn map_bip39_error(e: bip39::Error) -> WalletError {
    let err = match e {
        bip39::Error::BadWordCount(count) => MnemonicError::InvalidWordCount(count),
        bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
        bip39::Error::UnknownWord(idx) => MnemonicError::UnknownWord(format!("#{}", idx)),
        other => MnemonicError::Bip39Error(other.to_string()),
    };
    WalletError::Mnemonic(err)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
