//! Letter arithmetic over the 26-letter ASCII alphabet.
//!
//! Provides the normalization and modular shifting shared by the Caesar
//! and Vigenère engines. Non-ASCII input is treated as non-alphabetic.

/// Number of letters in the full Latin alphabet.
pub const LETTERS: u8 = 26;

/// Returns the zero-based alphabet position of an ASCII letter, in either case.
///
/// # Returns
/// `Some(0..=25)` for `A..=Z`/`a..=z`, `None` for anything else.
pub fn letter_index(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Returns the uppercase letter at alphabet position `index % 26`.
pub fn letter_at(index: u8) -> char {
    (b'A' + index % LETTERS) as char
}

/// Shifts an ASCII letter by `shift` positions with modulo-26 wraparound.
///
/// Negative shifts move towards `A`. The result is always uppercase.
///
/// # Returns
/// The shifted letter, or `None` if `c` is not an ASCII letter.
pub fn shift_letter(c: char, shift: i32) -> Option<char> {
    let index = letter_index(c)? as i32;
    Some(letter_at((index + shift).rem_euclid(LETTERS as i32) as u8))
}

/// Keeps only the ASCII letters of `text`, uppercased.
pub fn uppercase_letters(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
