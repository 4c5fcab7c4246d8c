//! Splitting a 24-word mnemonic into two 12-word halves, and joining them
//! back.
//!
//! Both directions apply the entropy [`Transform`] via its `encrypt` side,
//! not `decrypt`: `NONE`, `NEGATIVE` and `REVERSAL` are all involutions, so
//! the distinction is immaterial for them, and `PASSWORD` is rejected here
//! outright. Split and join are themselves inverses of each other only
//! because the transform that sits between them is.

use crate::error::{Error, InvalidSize};
use crate::seed::Seed;
use crate::transform::Transform;

/// Word count of each 24-word mnemonic's halves.
const WORD_COUNT_BASE: usize = 12;
/// Word count of the mnemonic produced by [`join`] / consumed by [`split`].
const WORD_COUNT_JOIN: usize = 2 * WORD_COUNT_BASE;

/// Splits a 24-word mnemonic into two 12-word mnemonics.
///
/// The 32-byte entropy is transformed (via [`Transform::encrypt`]) before
/// being split top/bottom into two 16-byte halves, each re-encoded as its
/// own 12-word mnemonic.
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] if `mnemonic` is not 24 words, and
/// [`Error::InvalidArgument`] if `transform` is [`Transform::Password`].
pub fn split(words: &[String], transform: Transform) -> Result<(Vec<&'static str>, Vec<&'static str>), Error> {
    if words.len() != WORD_COUNT_JOIN {
        return Err(InvalidSize::new("mnemonic word count", [WORD_COUNT_JOIN], words.len()).into());
    }
    reject_password(transform)?;

    let seed = Seed::from_mnemonic(words, false)?;
    let entropy = transform.encrypt(seed.entropy(), None)?;
    log::debug!("original entropy: {}", hex::encode(&entropy));

    let half = entropy.len() / 2;
    let left = Seed::from_entropy_bytes(entropy[..half].to_vec())?;
    let right = Seed::from_entropy_bytes(entropy[half..].to_vec())?;

    Ok((left.mnemonic(), right.mnemonic()))
}

/// Joins two 12-word mnemonics into a single 24-word mnemonic.
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] if either mnemonic is not 12 words, and
/// [`Error::InvalidArgument`] if `transform` is [`Transform::Password`].
pub fn join(
    first: &[String],
    second: &[String],
    transform: Transform,
) -> Result<Vec<&'static str>, Error> {
    reject_password(transform)?;

    let mut joint = Vec::new();
    for (count, words) in [first, second].into_iter().enumerate() {
        if words.len() != WORD_COUNT_BASE {
            return Err(InvalidSize::new("mnemonic word count", [WORD_COUNT_BASE], words.len()).into());
        }
        let entropy = Seed::from_mnemonic(words, false)?.entropy().to_vec();
        log::debug!("original entropy {count}: {}", hex::encode(&entropy));
        joint.extend_from_slice(&entropy);
    }

    let joint = transform.encrypt(&joint, None)?;
    log::debug!("joint entropy: {}", hex::encode(&joint));

    Ok(Seed::from_entropy_bytes(joint)?.mnemonic())
}

fn reject_password(transform: Transform) -> Result<(), Error> {
    if transform == Transform::Password {
        return Err(Error::InvalidArgument(
            "split/join cannot use the PASSWORD transform",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(phrase: &str) -> Vec<String> {
        phrase.split_whitespace().map(String::from).collect()
    }

    fn mnemonic_24() -> Vec<String> {
        let seed = Seed::from_entropy_bytes(vec![0x42u8; 32]).unwrap();
        seed.mnemonic().into_iter().map(String::from).collect()
    }

    #[test]
    fn split_then_join_round_trips_under_none() {
        let original = mnemonic_24();
        let (left, right) = split(&original, Transform::None).unwrap();

        let left: Vec<String> = left.into_iter().map(String::from).collect();
        let right: Vec<String> = right.into_iter().map(String::from).collect();

        let rejoined = join(&left, &right, Transform::None).unwrap();
        assert_eq!(rejoined, original.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn split_then_join_round_trips_under_negative() {
        let original = mnemonic_24();
        let (left, right) = split(&original, Transform::Negative).unwrap();

        let left: Vec<String> = left.into_iter().map(String::from).collect();
        let right: Vec<String> = right.into_iter().map(String::from).collect();

        let rejoined = join(&left, &right, Transform::Negative).unwrap();
        assert_eq!(rejoined, original.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn split_rejects_wrong_word_count() {
        assert!(split(&words("abandon abandon abandon"), Transform::None).is_err());
    }

    #[test]
    fn split_rejects_password_transform() {
        let original = mnemonic_24();
        assert!(split(&original, Transform::Password).is_err());
    }

    #[test]
    fn join_rejects_password_transform() {
        let a = words("abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about");
        let b = a.clone();
        assert!(join(&a, &b, Transform::Password).is_err());
    }
}
