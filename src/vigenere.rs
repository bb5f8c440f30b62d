//! Vigenère polyalphabetic cipher.
//!
//! The key stream is a pure function of the original key, the position and,
//! in autokey mode, the plaintext prefix. Nothing is stored between calls,
//! so one instance can serve any number of independent messages and
//! threads.

use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::utils::letters::{letter_at, letter_index, uppercase_letters, LETTERS};

/// How the key stream extends past the end of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// The key repeats: `KEYKEYKEY...`.
    Repeat,
    /// The key is followed by the plaintext itself: `KEY` + `HELLO...`.
    Autokey,
}

/// Returns the key stream letter index (0..26) at `index`.
///
/// `key` and `plaintext` are letter indices. In [`KeyMode::Autokey`] only
/// `plaintext[..index - key.len()]` is read, so a decoder can call this with
/// the prefix it has already recovered.
///
/// # Panics
/// Panics if `key` is empty, or in autokey mode if the plaintext prefix is
/// shorter than `index - key.len() + 1`.
pub fn key_stream_at(mode: KeyMode, key: &[u8], plaintext: &[u8], index: usize) -> u8 {
    match mode {
        KeyMode::Repeat => key[index % key.len()],
        KeyMode::Autokey if index < key.len() => key[index],
        KeyMode::Autokey => plaintext[index - key.len()],
    }
}

/// Vigenère cipher with a repeating key or an autokey.
///
/// Input is uppercased and everything that is not an ASCII letter is dropped.
///
/// # Examples
///
/// ```
/// use classicrypt::Vigenere;
///
/// let repeat = Vigenere::new("KEY", false).unwrap();
/// assert_eq!(repeat.encrypt("hello"), "RIJVS");
/// assert_eq!(repeat.decrypt("RIJVS"), "HELLO");
///
/// let autokey = Vigenere::new("KEY", true).unwrap();
/// let ct = autokey.encrypt("hello");
/// assert_eq!(autokey.decrypt(&ct), "HELLO");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    key: Vec<u8>,
    mode: KeyMode,
}

impl Vigenere {
    /// Creates a Vigenère cipher.
    ///
    /// # Parameters
    /// - `key`: The key; non-letters are ignored.
    /// - `autokey`: `true` for autokey mode, `false` for a repeating key.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyKey`] if `key` contains no letters.
    pub fn new(key: &str, autokey: bool) -> Result<Self, CipherError> {
        let mode = if autokey {
            KeyMode::Autokey
        } else {
            KeyMode::Repeat
        };
        Self::with_mode(key, mode)
    }

    /// Creates a Vigenère cipher with an explicit [`KeyMode`].
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyKey`] if `key` contains no letters.
    pub fn with_mode(key: &str, mode: KeyMode) -> Result<Self, CipherError> {
        let key: Vec<u8> = key.chars().filter_map(letter_index).collect();
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        Ok(Vigenere { key, mode })
    }

    /// Returns the key stream mode.
    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    /// Returns the first `len` letters of the key stream used to encrypt
    /// `plaintext` (letters of `plaintext` beyond `len` are not read).
    pub fn key_stream(&self, plaintext: &str, len: usize) -> String {
        let plain: Vec<u8> = plaintext.chars().filter_map(letter_index).collect();
        (0..len)
            .map(|i| letter_at(key_stream_at(self.mode, &self.key, &plain, i)))
            .collect()
    }

    /// Adds the key stream to the plaintext, letter by letter, modulo 26.
    pub fn encrypt(&self, plaintext: &str) -> String {
        let plain: Vec<u8> = plaintext.chars().filter_map(letter_index).collect();
        plain
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let k = key_stream_at(self.mode, &self.key, &plain, i);
                letter_at((p + k) % LETTERS)
            })
            .collect()
    }

    /// Subtracts the key stream from the ciphertext, letter by letter, modulo 26.
    ///
    /// In autokey mode each recovered letter feeds the key stream for the
    /// letters that follow.
    pub fn decrypt(&self, ciphertext: &str) -> String {
        let cipher = uppercase_letters(ciphertext);
        let mut plain: Vec<u8> = Vec::with_capacity(cipher.len());
        for (i, c) in cipher.bytes().enumerate() {
            let k = key_stream_at(self.mode, &self.key, &plain, i);
            plain.push((c - b'A' + LETTERS - k) % LETTERS);
        }
        plain.into_iter().map(letter_at).collect()
    }
}

impl Cipher for Vigenere {
    fn name(&self) -> &'static str {
        "vigenere"
    }

    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        Ok(Vigenere::encrypt(self, plaintext))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        Ok(Vigenere::decrypt(self, ciphertext))
    }
}
