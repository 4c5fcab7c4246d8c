//! `split`: a 24-word mnemonic → two 12-word mnemonics with
//! plausible-deniability obfuscation.

use anyhow::Result;
use clap::Parser;
use mnemoforge::split;
use mnemoforge::transform::Transform;

#[derive(Debug, Parser)]
pub struct Options {
    /// The 24-word mnemonic phrase to split.
    #[clap(short, long)]
    mnemonic: String,

    /// Encryption algorithm applied to the entropy before splitting:
    /// 0=NONE, 1=NEGATIVE, 2=REVERSAL (PASSWORD is not supported here;
    /// default = 0).
    #[clap(short = 'e', long, default_value = "0")]
    encryption: Transform,
}

pub fn run(options: Options) -> Result<()> {
    let words = super::split_words(&options.mnemonic);
    let (left, right) = split::split(&words, options.encryption)?;

    println!("first half:  {}", left.join(" "));
    println!("second half: {}", right.join(" "));

    Ok(())
}
