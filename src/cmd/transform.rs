//! `transform`: apply an entropy transform to raw hex input.

use anyhow::Result;
use clap::Parser;
use mnemoforge::transform::Transform;

#[derive(Debug, Parser)]
pub struct Options {
    /// Hex-encoded message to transform.
    #[clap(short, long)]
    input: String,

    /// Encryption algorithm: 0=NONE, 1=NEGATIVE, 2=REVERSAL, 3=PASSWORD
    /// (default = 0).
    #[clap(short = 'e', long, default_value = "0")]
    encryption: Transform,

    /// Password, required when --encryption is 3 (PASSWORD).
    #[clap(long)]
    password: Option<String>,

    /// Decrypt instead of encrypt.
    #[clap(long)]
    decrypt: bool,
}

pub fn run(options: Options) -> Result<()> {
    let message = hex::decode(&options.input)?;
    let output = if options.decrypt {
        options.encryption.decrypt(&message, options.password.as_deref())?
    } else {
        options.encryption.encrypt(&message, options.password.as_deref())?
    };

    println!("{}", hex::encode(output));
    Ok(())
}
