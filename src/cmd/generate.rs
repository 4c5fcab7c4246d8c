//! `generate`: emit a new 24-word mnemonic from hardened CSPRNG entropy.

use anyhow::Result;
use clap::Parser;
use mnemoforge::rand;
use mnemoforge::seed::Seed;

#[derive(Debug, Parser)]
pub struct Options {
    /// Passphrase to salt the root seed derivation with (default = empty).
    #[clap(long, default_value_t)]
    passphrase: String,
}

pub fn run(options: Options) -> Result<()> {
    let entropy = rand::hardened();
    let seed = Seed::from_entropy_bytes(entropy.to_vec())?.with_passphrase(options.passphrase);

    println!("generating a new 24 word mnemonic:");
    println!("{}", seed.to_phrase());
    println!("root seed: {}", hex::encode(seed.root_seed().as_bytes()));

    Ok(())
}
