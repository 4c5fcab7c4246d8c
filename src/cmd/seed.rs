//! `seed`: mnemonic (+ optional passphrase) → BIP-0039 root seed hex.

use anyhow::Result;
use clap::Parser;
use mnemoforge::seed::Seed;

#[derive(Debug, Parser)]
pub struct Options {
    /// The BIP-0039 mnemonic phrase.
    #[clap(short, long)]
    mnemonic: String,

    /// Passphrase to salt the root seed derivation with (default = empty).
    #[clap(long, default_value_t)]
    passphrase: String,

    /// Accept a checksum mismatch, silently correcting it via the mnemonic's
    /// last word, instead of failing.
    #[clap(long)]
    correct_last_word: bool,
}

pub fn run(options: Options) -> Result<()> {
    let words = super::split_words(&options.mnemonic);
    let seed =
        Seed::from_mnemonic(&words, options.correct_last_word)?.with_passphrase(options.passphrase);

    println!("{}", hex::encode(seed.root_seed().as_bytes()));
    Ok(())
}
