//! Caesar shift cipher.

use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::utils::letters::{shift_letter, LETTERS};

/// Classic Caesar shift.
const DEFAULT_SHIFT: u8 = 3;

/// Caesar cipher: every letter moves a fixed number of positions along the
/// alphabet. Characters that are not ASCII letters are dropped in both
/// directions.
///
/// # Examples
///
/// ```
/// use classicrypt::Caesar;
///
/// let caesar = Caesar::new();
/// assert_eq!(caesar.encrypt("Hello, xyz"), "KHOORABC");
/// assert_eq!(caesar.decrypt("KHOORABC"), "HELLOXYZ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: u8,
}

impl Default for Caesar {
    fn default() -> Self {
        Self::new()
    }
}

impl Caesar {
    /// Creates the classic Caesar cipher with a shift of 3.
    pub fn new() -> Self {
        Self::with_shift(DEFAULT_SHIFT)
    }

    /// Creates a Caesar cipher with a custom shift, reduced modulo 26.
    pub fn with_shift(shift: u8) -> Self {
        Caesar {
            shift: shift % LETTERS,
        }
    }

    /// Returns the shift applied on encryption.
    pub fn shift(&self) -> u8 {
        self.shift
    }

    /// Shifts every letter forward.
    pub fn encrypt(&self, plaintext: &str) -> String {
        Self::shift_all(plaintext, self.shift as i32)
    }

    /// Shifts every letter backward.
    pub fn decrypt(&self, ciphertext: &str) -> String {
        Self::shift_all(ciphertext, -(self.shift as i32))
    }

    fn shift_all(text: &str, shift: i32) -> String {
        text.chars().filter_map(|c| shift_letter(c, shift)).collect()
    }
}

impl Cipher for Caesar {
    fn name(&self) -> &'static str {
        "caesar"
    }

    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        Ok(Caesar::encrypt(self, plaintext))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        Ok(Caesar::decrypt(self, ciphertext))
    }
}
