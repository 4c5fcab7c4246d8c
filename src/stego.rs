//! LSB steganographic embedding of a transformed byte message into an RGB
//! image, composing with the [`crate::transform`] algebra.
//!
//! Three pixels carry one message byte: the low bit of each of the 9 color
//! channels holds the byte's 8 bits (most-significant first), and the low bit
//! of the third pixel's blue channel is a continuation flag (1 while more
//! bytes follow, 0 on the last byte). [`decode`] walks pixels in the same
//! order until it reads a continuation bit of 0.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use image::RgbImage;

use crate::error::{Error, InvalidValue};
use crate::transform::Transform;

/// Traversal order over an image's pixels, mapping a pixel ordinal to `(x,
/// y)` coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    ReverseHorizontal,
    ReverseVertical,
}

/// The direction used when none is given explicitly.
pub const DEFAULT_DIRECTION: Direction = Direction::Horizontal;

/// Parses the CLI's `-d N` numeric selector (`N` in `0..=3`).
impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "0" => Ok(Direction::Horizontal),
            "1" => Ok(Direction::Vertical),
            "2" => Ok(Direction::ReverseHorizontal),
            "3" => Ok(Direction::ReverseVertical),
            _ => Err(InvalidValue::new("direction selector", format!("'{s}' is not one of 0-3")).into()),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let n = match self {
            Direction::Horizontal => 0,
            Direction::Vertical => 1,
            Direction::ReverseHorizontal => 2,
            Direction::ReverseVertical => 3,
        };
        write!(f, "{n}")
    }
}

impl Direction {
    fn pixel_index(self, ordinal: usize, width: usize, height: usize) -> usize {
        let size = width * height;
        match self {
            Direction::Horizontal => ordinal % size,
            Direction::Vertical => (ordinal * width + ordinal / height) % size,
            Direction::ReverseHorizontal => (size - ordinal - 1) % size,
            Direction::ReverseVertical => {
                let reverse = size - ordinal - 1;
                (reverse * width + reverse / height) % size
            }
        }
    }

    fn coordinates(self, ordinal: usize, width: usize, height: usize) -> (u32, u32) {
        let index = self.pixel_index(ordinal, width, height);
        ((index % width) as u32, (index / width) as u32)
    }
}

/// Encrypts `message` under `transform` and embeds it into `image`'s pixels
/// in the order given by `direction`.
///
/// # Errors
///
/// Returns whatever [`Transform::encrypt`] returns, and
/// [`Error::CapacityExceeded`] if the (already-transformed) message needs
/// more than three pixels per byte.
pub fn encode(
    message: &[u8],
    image: &RgbImage,
    transform: Transform,
    direction: Direction,
    password: Option<&str>,
) -> Result<RgbImage, Error> {
    let ciphertext = transform.encrypt(message, password)?;

    let (width, height) = image.dimensions();
    let (width, height) = (width as usize, height as usize);
    let capacity = width * height;
    let needed = ciphertext.len() * 3;
    if capacity < needed {
        return Err(Error::CapacityExceeded { capacity, needed });
    }

    log::debug!("hiding {} bytes in {direction:?} order", ciphertext.len());

    let mut out = image.clone();
    for (i, &byte) in ciphertext.iter().enumerate() {
        for j in 0..3 {
            let ordinal = 3 * i + j;
            let (x, y) = direction.coordinates(ordinal, width, height);
            let pixel = out.get_pixel_mut(x, y);
            for k in 0..3 {
                let bit_index = j * 3 + k;
                let bit = if bit_index < 8 {
                    (byte >> (7 - bit_index)) & 1
                } else if i < ciphertext.len() - 1 {
                    1
                } else {
                    0
                };
                pixel.0[k] = (pixel.0[k] & 0xfe) | bit;
            }
        }
    }

    Ok(out)
}

/// Extracts a hidden message from `image` in `direction` order and decrypts
/// it under `transform`.
///
/// Returns an empty vector if no continuation terminator is found before the
/// image's pixels are exhausted (no hidden message, or a mismatched
/// direction).
///
/// # Errors
///
/// Returns whatever [`Transform::decrypt`] returns.
pub fn decode(
    image: &RgbImage,
    transform: Transform,
    direction: Direction,
    password: Option<&str>,
) -> Result<Vec<u8>, Error> {
    let (width, height) = image.dimensions();
    let (width, height) = (width as usize, height as usize);
    let size = width * height;

    let mut bits = Vec::new();
    let mut ordinal = 0usize;
    let mut terminated = false;

    while !terminated && ordinal < size.saturating_sub(1) {
        let (x, y) = direction.coordinates(ordinal, width, height);
        let pixel = image.get_pixel(x, y);
        for (channel, &value) in pixel.0.iter().enumerate() {
            let bit_index = (ordinal % 3) * 3 + channel;
            let lsb = value & 1;
            if bit_index < 8 {
                bits.push(lsb);
            } else if lsb == 0 {
                terminated = true;
            }
        }
        ordinal += 1;
    }

    if !terminated {
        log::warn!("cannot find a hidden message");
        return Ok(Vec::new());
    }

    log::debug!("found a hidden {}-bit message", bits.len());
    let ciphertext = bits_to_bytes(&bits);
    transform.decrypt(&ciphertext, password)
}

/// Packs a big-endian, most-significant-bit-first bit sequence into bytes.
fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; bits.len().div_ceil(8)];
    for (i, &bit) in bits.iter().enumerate() {
        out[i / 8] |= bit << (7 - (i % 8));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, image::Rgb([0, 0, 0]))
    }

    #[test]
    fn round_trips_a_short_message_under_none() {
        let image = blank_image(16, 16);
        let encoded = encode(b"hi", &image, Transform::None, Direction::Horizontal, None).unwrap();
        let decoded = decode(&encoded, Transform::None, Direction::Horizontal, None).unwrap();
        assert_eq!(decoded, b"hi");
    }

    #[test]
    fn round_trips_under_every_direction() {
        let message = b"mnemonic";
        for &direction in &[
            Direction::Horizontal,
            Direction::Vertical,
            Direction::ReverseHorizontal,
            Direction::ReverseVertical,
        ] {
            let image = blank_image(20, 20);
            let encoded = encode(message, &image, Transform::None, direction, None).unwrap();
            let decoded = decode(&encoded, Transform::None, direction, None).unwrap();
            assert_eq!(decoded, message, "direction {direction:?}");
        }
    }

    #[test]
    fn round_trips_under_password() {
        let image = blank_image(32, 32);
        let encoded = encode(
            b"twelve secret words",
            &image,
            Transform::Password,
            Direction::Horizontal,
            Some("hunter2"),
        )
        .unwrap();
        let decoded = decode(&encoded, Transform::Password, Direction::Horizontal, Some("hunter2")).unwrap();
        assert_eq!(decoded, b"twelve secret words");
    }

    #[test]
    fn rejects_message_too_large_for_image() {
        let image = blank_image(2, 2); // 4 pixels, capacity 1 byte
        let message = b"too long for this image";
        assert!(matches!(
            encode(message, &image, Transform::None, Direction::Horizontal, None),
            Err(Error::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn decode_without_hidden_message_is_empty() {
        let image = blank_image(16, 16);
        let decoded = decode(&image, Transform::None, Direction::Horizontal, None).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn from_str_parses_the_numeric_cli_selector() {
        assert_eq!("0".parse::<Direction>().unwrap(), Direction::Horizontal);
        assert_eq!("1".parse::<Direction>().unwrap(), Direction::Vertical);
        assert_eq!("2".parse::<Direction>().unwrap(), Direction::ReverseHorizontal);
        assert_eq!("3".parse::<Direction>().unwrap(), Direction::ReverseVertical);
        assert!("4".parse::<Direction>().is_err());
    }
}
