//! `join`: two 12-word mnemonics → a single 24-word mnemonic.

use anyhow::Result;
use clap::Parser;
use mnemoforge::split;
use mnemoforge::transform::Transform;

#[derive(Debug, Parser)]
pub struct Options {
    /// The first 12-word mnemonic half.
    #[clap(long)]
    first: String,

    /// The second 12-word mnemonic half.
    #[clap(long)]
    second: String,

    /// Encryption algorithm that was applied when splitting: 0=NONE,
    /// 1=NEGATIVE, 2=REVERSAL (PASSWORD is not supported here;
    /// default = 0).
    #[clap(short = 'e', long, default_value = "0")]
    encryption: Transform,
}

pub fn run(options: Options) -> Result<()> {
    let first = super::split_words(&options.first);
    let second = super::split_words(&options.second);
    let mnemonic = split::join(&first, &second, options.encryption)?;

    println!("{}", mnemonic.join(" "));

    Ok(())
}
