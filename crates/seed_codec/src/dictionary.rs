//! The fixed 2048 word mnemonic dictionary.

/// Number of words in the dictionary, one per 11-bit symbol.
pub const DICTIONARY_SIZE: usize = 2048;

/// Bits encoded by a single dictionary word.
pub const BITS_PER_WORD: usize = 11;

/// The sorted, deduplicated word list backing the mnemonic codec.
///
/// This is the BIP-39 English list. It is static data shared by every
/// reader, no initialization or locking needed.
pub fn words() -> &'static [&'static str; DICTIONARY_SIZE] {
    bip39::Language::English.word_list()
}

/// Get the word encoding the given 11-bit symbol.
///
/// Only the low 11 bits of `index` are used.
pub fn word(index: u16) -> &'static str {
    words()[(index as usize) & (DICTIONARY_SIZE - 1)]
}

/// Find the symbol of `word` by binary search over the sorted list.
///
/// Matching is exact: no case folding, no prefix or nearest match.
pub fn index_of(word: &str) -> Option<u16> {
    words()
        .binary_search(&word)
        .ok()
        .map(|index| index as u16)
}
