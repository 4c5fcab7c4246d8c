//! The BIP-0039 English word list.
//!
//! The list itself (2048 lowercase, lexicographically sorted words) is a
//! fixed public table with no logic of its own, so it is sourced from the
//! `bip39` crate's data rather than re-transcribed by hand. Every other
//! operation in this crate — the entropy/mnemonic bit packing, the checksum,
//! the root seed derivation — is implemented from scratch in [`crate::seed`].

use crate::error::{Error, InvalidValue};

/// The number of words in the BIP-0039 English word list.
pub const WORD_COUNT: usize = 2048;

/// Returns the full, lexicographically sorted word list.
fn words() -> &'static [&'static str; WORD_COUNT] {
    bip39::Language::English.word_list()
}

/// Searches the word list for the specified word, returning its index.
///
/// Words are matched case-sensitively against the list's lowercase form,
/// normalization (lowercasing, whitespace trimming) is the caller's
/// responsibility.
pub fn search(word: impl AsRef<str>) -> Option<usize> {
    words().binary_search(&word.as_ref()).ok()
}

/// Returns the word for the specified index.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if `index` is not less than
/// [`WORD_COUNT`].
pub fn word(index: usize) -> Result<&'static str, Error> {
    words().get(index).copied().ok_or_else(|| {
        InvalidValue::new("word index", format!("{index} is not less than {WORD_COUNT}")).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_is_2048() {
        assert_eq!(words().len(), WORD_COUNT);
    }

    #[test]
    fn list_is_sorted_and_lowercase() {
        assert!(words().windows(2).all(|pair| pair[0] < pair[1]));
        assert!(words().iter().all(|w| w.chars().all(char::is_lowercase)));
    }

    #[test]
    fn first_and_last_words_match_bip39() {
        assert_eq!(word(0).unwrap(), "abandon");
        assert_eq!(word(WORD_COUNT - 1).unwrap(), "zoo");
    }

    #[test]
    fn search_is_the_inverse_of_word() {
        assert_eq!(search("abandon"), Some(0));
        assert_eq!(search("zoo"), Some(WORD_COUNT - 1));
        assert_eq!(search("notaword"), None);
    }

    #[test]
    fn out_of_range_index_is_invalid_value() {
        assert!(word(WORD_COUNT).is_err());
    }
}
