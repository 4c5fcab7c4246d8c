//! End-to-end literal test vectors spanning the mnemonic codec, master-node
//! derivation and split/join, cross-checked against BIP-0039/BIP-0032.

use hex_literal::hex;
use mnemoforge::hdkey::Node;
use mnemoforge::seed::Seed;
use mnemoforge::split;
use mnemoforge::transform::Transform;
use mnemoforge::version::{AddressType, KeyType, NetworkId};

fn words(phrase: &str) -> Vec<String> {
    phrase.split_whitespace().map(String::from).collect()
}

#[test]
fn bip39_vector_all_zero_entropy() {
    let seed = Seed::from_entropy_bytes(hex!("00000000000000000000000000000000").to_vec()).unwrap();
    assert_eq!(
        seed.to_phrase(),
        "abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon about"
    );

    let root = seed.with_passphrase("TREZOR").root_seed();
    assert_eq!(
        root.as_bytes(),
        &hex!(
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e5349553"
            "1f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        )
    );
}

#[test]
fn bip39_vector_repeated_0x7f() {
    let seed = Seed::from_entropy_bytes(hex!("7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f").to_vec()).unwrap();
    assert_eq!(
        seed.to_phrase(),
        "legal winner thank year wave sausage worth useful legal winner thank yellow"
    );
}

#[test]
fn bip39_vector_repeated_0x80() {
    let seed = Seed::from_entropy_bytes(hex!("80808080808080808080808080808080").to_vec()).unwrap();
    assert!(seed
        .to_phrase()
        .starts_with("letter advice cage absurd amount doctor acoustic avoid letter advice cage above"));
}

#[test]
fn bip32_vector_1_mainnet_p2sh_master_node() {
    let node = Node::from_seed(hex!("000102030405060708090a0b0c0d0e0f")).unwrap();

    assert_eq!(
        node.extended_key(NetworkId::Mainnet, AddressType::P2sh, KeyType::Private).unwrap(),
        "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi"
    );
    assert_eq!(
        node.extended_key(NetworkId::Mainnet, AddressType::P2sh, KeyType::Public).unwrap(),
        "xpub661MyMwAqRbcFtXgS5sYJABqqG9YVUD4oYYJaDGTtA4XFuCAbGedVCuU4SeHZb8gBPBv5skdCpFgGZ5GpiUNuZ64utWBEcoyMtz5Q5jqFvw"
    );
}

#[test]
fn split_then_join_under_negative_reproduces_the_original_mnemonic() {
    let original_seed = Seed::from_entropy_bytes(vec![0x24u8; 32]).unwrap();
    let original: Vec<String> = original_seed.mnemonic().into_iter().map(String::from).collect();

    let (left, right) = split::split(&original, Transform::Negative).unwrap();
    let left: Vec<String> = left.into_iter().map(String::from).collect();
    let right: Vec<String> = right.into_iter().map(String::from).collect();

    let rejoined = split::join(&left, &right, Transform::Negative).unwrap();
    assert_eq!(rejoined, original.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn checksum_mismatch_is_rejected_unless_corrected() {
    let busted = words(
        "abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon zoo",
    );

    assert!(Seed::from_mnemonic(&busted, false).is_err());

    let corrected = Seed::from_mnemonic(&busted, true).unwrap();
    assert_eq!(
        corrected.to_phrase(),
        "abandon abandon abandon abandon abandon abandon \
         abandon abandon abandon abandon abandon about"
    );
}
