// keygen-core/tests/session_flow.rs
//
// End-to-end session behavior through the public API.

use std::collections::HashSet;

use keygen_core::api;
use keygen_core::chains::{EthereumKeyBuilder, SolanaKeyBuilder};
use keygen_core::error::MnemonicError;
use keygen_core::{Chain, KeypairRecord, WalletError, WalletSession};
use proptest::prelude::*;

const TEST_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn imported() -> WalletSession {
    let mut session = WalletSession::new();
    api::import_mnemonic(&mut session, TEST_MNEMONIC).unwrap();
    session
}

fn add(session: &mut WalletSession, chain: Chain) -> KeypairRecord {
    session.select_chain(chain);
    session.add_wallet(chain).unwrap()
}

#[test]
fn known_vectors_follow_the_shared_index() {
    let mut session = imported();

    let sol0 = add(&mut session, Chain::Solana);
    let eth1 = add(&mut session, Chain::Ethereum);
    let sol2 = add(&mut session, Chain::Solana);

    assert_eq!(sol0.public_id(), "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
    assert_eq!(sol0.path(), "m/44'/501'/0'/0'");
    assert_eq!(eth1.public_id(), "0x3590821f4FD8B921B74d923475B7DA6c9b2aE83b");
    assert_eq!(eth1.path(), "m/44'/60'/1'/0'");
    assert_eq!(sol2.public_id(), "7WktogJEd2wQ9eH2oWusmcoFTgeYi6rS632UviTBJ2jm");
    assert_eq!(sol2.path(), "m/44'/501'/2'/0'");
    assert_eq!(session.current_index(), 3);
}

#[test]
fn delete_keeps_paths_and_index() {
    let mut session = imported();
    for _ in 0..3 {
        add(&mut session, Chain::Ethereum);
    }

    let remaining = api::delete_wallet(&mut session, Chain::Ethereum, 1).unwrap();
    let paths: Vec<&str> = remaining.iter().map(KeypairRecord::path).collect();
    assert_eq!(paths, ["m/44'/60'/0'/0'", "m/44'/60'/2'/0'"]);

    let next = add(&mut session, Chain::Ethereum);
    assert_eq!(next.path(), "m/44'/60'/3'/0'");
}

#[test]
fn reimport_restarts_at_index_zero() {
    let mut session = imported();
    add(&mut session, Chain::Solana);
    add(&mut session, Chain::Solana);

    api::import_mnemonic(&mut session, TEST_MNEMONIC).unwrap();
    assert_eq!(session.current_index(), 0);
    assert!(session.solana_wallets().is_empty());

    // Chain selection survives the reset
    assert_eq!(session.chain(), Some(Chain::Solana));
    let again = session.add_wallet(Chain::Solana).unwrap();
    assert_eq!(again.public_id(), "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
}

#[test]
fn builders_agree_with_session() {
    let mut session = imported();
    let eth0 = add(&mut session, Chain::Ethereum);
    let direct = EthereumKeyBuilder::build_record(TEST_MNEMONIC, 0).unwrap();
    assert_eq!(eth0, KeypairRecord::Ethereum(direct));

    let sol1 = add(&mut session, Chain::Solana);
    let direct = SolanaKeyBuilder::build_record(TEST_MNEMONIC, 1).unwrap();
    assert_eq!(sol1, KeypairRecord::Solana(direct));
}

#[test]
fn no_collisions_across_first_hundred_indices() {
    let mut solana = HashSet::new();
    let mut ethereum = HashSet::new();
    for index in 0..100 {
        let sol = SolanaKeyBuilder::build_record(TEST_MNEMONIC, index).unwrap();
        let eth = EthereumKeyBuilder::build_record(TEST_MNEMONIC, index).unwrap();
        assert!(solana.insert(sol.public_key.clone()), "solana collision at {}", index);
        assert!(ethereum.insert(eth.address.clone()), "ethereum collision at {}", index);
    }
}

#[test]
fn thirteen_words_are_rejected_without_touching_the_session() {
    let mut session = imported();
    add(&mut session, Chain::Ethereum);

    let thirteen = format!("{} abandon", TEST_MNEMONIC);
    assert_eq!(
        api::import_mnemonic(&mut session, &thirteen).unwrap_err(),
        WalletError::Mnemonic(MnemonicError::InvalidWordCount(13))
    );
    let phrase = session.mnemonic_phrase();
    assert_eq!(phrase.as_deref().map(String::as_str), Some(TEST_MNEMONIC));
    assert_eq!(session.wallet_count(Chain::Ethereum), 1);
}

#[test]
fn add_without_mnemonic_or_chain_fails() {
    let mut session = WalletSession::new();
    assert_eq!(
        session.add_wallet(Chain::Solana).unwrap_err(),
        WalletError::ChainNotSelected
    );
    session.select_chain(Chain::Solana);
    assert_eq!(
        session.add_wallet(Chain::Solana).unwrap_err(),
        WalletError::MnemonicUnset
    );
    assert_eq!(session.current_index(), 0);
}

#[test]
fn records_serialize_with_chain_tag() {
    let mut session = imported();
    let record = add(&mut session, Chain::Ethereum);
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["chain"], "ethereum");
    assert_eq!(json["address"], "0x1cC31E180CCA3a8698fD6f13765209EC7CB9E755");
    assert_eq!(json["path"], "m/44'/60'/0'/0'");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn wrong_word_count_never_changes_state(count in 0usize..30) {
        prop_assume!(count != 12);

        let mut session = imported();
        add(&mut session, Chain::Solana);

        let raw = vec!["abandon"; count].join(" ");
        let err = api::import_mnemonic(&mut session, &raw).unwrap_err();
        prop_assert_eq!(err, WalletError::Mnemonic(MnemonicError::InvalidWordCount(count)));

        prop_assert_eq!(session.current_index(), 1);
        prop_assert_eq!(session.wallet_count(Chain::Solana), 1);
        let phrase = session.mnemonic_phrase();
        prop_assert_eq!(phrase.as_deref().map(String::as_str), Some(TEST_MNEMONIC));
    }

    #[test]
    fn index_counts_every_add(plan in proptest::collection::vec(any::<bool>(), 1..8)) {
        let mut session = imported();
        for (i, is_solana) in plan.iter().enumerate() {
            let chain = if *is_solana { Chain::Solana } else { Chain::Ethereum };
            let record = add(&mut session, chain);
            let coin = if *is_solana { 501 } else { 60 };
            prop_assert_eq!(record.path(), format!("m/44'/{}'/{}'/0'", coin, i));
        }
        prop_assert_eq!(session.current_index() as usize, plan.len());
    }
}
