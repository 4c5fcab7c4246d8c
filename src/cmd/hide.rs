//! `hide`: hide a mnemonic inside an image with LSB steganography.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use mnemoforge::rand;
use mnemoforge::seed::Seed;
use mnemoforge::stego::{self, Direction};
use mnemoforge::transform::Transform;

#[derive(Debug, Parser)]
pub struct Options {
    /// Generate a new 24-word mnemonic instead of reading one from --mnemonic
    /// (default = false).
    #[clap(short, long)]
    generate: bool,

    /// The mnemonic to hide, required unless --generate is given.
    #[clap(short, long, conflicts_with = "generate")]
    mnemonic: Option<String>,

    /// Encryption algorithm: 0=NONE, 1=NEGATIVE, 2=REVERSAL, 3=PASSWORD
    /// (default = 0).
    #[clap(short = 'e', long, default_value = "0")]
    encryption: Transform,

    /// Traversal order: 0=HORIZONTAL, 1=VERTICAL, 2=REVERSE_HORIZONTAL,
    /// 3=REVERSE_VERTICAL (default = 0).
    #[clap(short = 'd', long, default_value = "0")]
    direction: Direction,

    /// Password, required when --encryption is 3 (PASSWORD).
    #[clap(long)]
    password: Option<String>,

    /// Input image file (any format the `image` crate can decode).
    #[clap(short, long = "input-file")]
    input_file: PathBuf,

    /// Output PNG path.
    #[clap(short, long = "output-file")]
    output_file: PathBuf,
}

pub fn run(options: Options) -> Result<()> {
    let mnemonic = match (options.generate, options.mnemonic) {
        (true, _) => {
            let entropy = rand::hardened();
            let phrase = Seed::from_entropy_bytes(entropy.to_vec())?.to_phrase();
            println!("generating a new 24 word mnemonic:");
            println!("{phrase}");
            phrase
        }
        (false, Some(mnemonic)) => mnemonic,
        (false, None) => anyhow::bail!("either --generate or --mnemonic is required"),
    };

    let image = image::open(&options.input_file)?.to_rgb8();
    let hidden = stego::encode(
        mnemonic.as_bytes(),
        &image,
        options.encryption,
        options.direction,
        options.password.as_deref(),
    )?;
    hidden.save(&options.output_file)?;

    println!("wrote {}", options.output_file.display());
    Ok(())
}
