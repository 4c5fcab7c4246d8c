//! `show`: recover a mnemonic hidden inside an image with LSB steganography.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use mnemoforge::stego::{self, Direction};
use mnemoforge::transform::Transform;

#[derive(Debug, Parser)]
pub struct Options {
    /// Encryption algorithm the message was hidden with: 0=NONE,
    /// 1=NEGATIVE, 2=REVERSAL, 3=PASSWORD (default = 0).
    #[clap(short = 'e', long, default_value = "0")]
    encryption: Transform,

    /// Traversal order the message was hidden with: 0=HORIZONTAL,
    /// 1=VERTICAL, 2=REVERSE_HORIZONTAL, 3=REVERSE_VERTICAL (default = 0).
    #[clap(short = 'd', long, default_value = "0")]
    direction: Direction,

    /// Password, required when --encryption is 3 (PASSWORD).
    #[clap(long)]
    password: Option<String>,

    /// Input image file carrying the hidden message.
    #[clap(short, long = "input-file")]
    input_file: PathBuf,
}

pub fn run(options: Options) -> Result<()> {
    let image = image::open(&options.input_file)?.to_rgb8();
    let message = stego::decode(&image, options.encryption, options.direction, options.password.as_deref())?;

    if message.is_empty() {
        println!("no hidden message found");
    } else {
        println!("{}", String::from_utf8_lossy(&message));
    }

    Ok(())
}
