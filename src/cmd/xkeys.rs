//! `xkeys`: BIP-0032 seed → xprv/xpub for a given network and address type.

use anyhow::{bail, Result};
use clap::Parser;
use mnemoforge::hdkey::Node;
use mnemoforge::seed::Seed;
use mnemoforge::version::{AddressType, KeyType, NetworkId};

#[derive(Debug, Parser)]
pub struct Options {
    /// The BIP-0039 mnemonic phrase to derive the BIP-0032 seed from.
    #[clap(short, long, conflicts_with = "seed_hex")]
    mnemonic: Option<String>,

    /// A raw hex-encoded BIP-0032 seed (16-64 bytes), bypassing BIP-0039.
    #[clap(long, conflicts_with = "mnemonic")]
    seed_hex: Option<String>,

    /// Passphrase used alongside --mnemonic.
    #[clap(long, default_value_t)]
    passphrase: String,

    /// Which network the extended key's version bytes are for.
    #[clap(long, default_value = "mainnet")]
    network: NetworkId,

    /// Which address/script type the extended key's path is associated with.
    #[clap(long, default_value = "p2wpkh")]
    address_type: AddressType,
}

pub fn run(options: Options) -> Result<()> {
    let seed_bytes = match (&options.mnemonic, &options.seed_hex) {
        (Some(mnemonic), None) => {
            let words = super::split_words(mnemonic);
            let seed = Seed::from_mnemonic(&words, false)?.with_passphrase(options.passphrase);
            seed.root_seed().as_bytes().to_vec()
        }
        (None, Some(seed_hex)) => hex::decode(seed_hex)?,
        _ => bail!("exactly one of --mnemonic or --seed-hex is required"),
    };

    let node = Node::from_seed(seed_bytes)?;
    println!(
        "xprv: {}",
        node.extended_key(options.network, options.address_type, KeyType::Private)?
    );
    println!(
        "xpub: {}",
        node.extended_key(options.network, options.address_type, KeyType::Public)?
    );

    Ok(())
}
