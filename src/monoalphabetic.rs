//! Monoalphabetic substitution cipher.
//!
//! Every plaintext letter is replaced by the table entry at its alphabet
//! position. Decryption is the reverse lookup and is the only operation in
//! the suite that can fail on well-typed input: a ciphertext symbol with no
//! table entry is reported as [`CipherError::SymbolNotInTable`].

use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::utils::letters::{letter_at, letter_index, LETTERS};

/// Monoalphabetic substitution over a caller-supplied 26-entry table.
///
/// # Examples
///
/// ```
/// use classicrypt::Monoalphabetic;
///
/// let mono = Monoalphabetic::new("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
/// let ct = mono.encrypt("hello");
/// assert_eq!(ct, "ITSSG");
/// assert_eq!(mono.decrypt(&ct).unwrap(), "HELLO");
/// assert!(mono.decrypt("IT!").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monoalphabetic {
    table: [char; LETTERS as usize],
}

impl Monoalphabetic {
    /// Builds the cipher from a table given as one symbol per alphabet position.
    ///
    /// Entries are uppercased. Whitespace in `table` is ignored so tables can
    /// be written in groups (`"BACDE FGHIJ ..."`).
    ///
    /// # Errors
    /// - [`CipherError::InvalidTableLength`] if the table does not hold exactly 26 symbols.
    /// - [`CipherError::DuplicateTableEntry`] if a symbol appears twice.
    pub fn new(table: &str) -> Result<Self, CipherError> {
        let entries: Vec<char> = table
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Self::from_entries(&entries)
    }

    /// Builds the cipher from a slice of table entries.
    ///
    /// # Errors
    /// Same as [`new`](Self::new), plus
    /// [`CipherError::WhitespaceTableEntry`] if an entry is whitespace: decrypt
    /// skips whitespace, so such an entry could never be looked up.
    pub fn from_entries(entries: &[char]) -> Result<Self, CipherError> {
        let table: [char; LETTERS as usize] = entries
            .iter()
            .map(|c| c.to_ascii_uppercase())
            .collect::<Vec<char>>()
            .try_into()
            .map_err(|_| CipherError::InvalidTableLength {
                expected: LETTERS as usize,
                actual: entries.len(),
            })?;

        for (i, symbol) in table.iter().enumerate() {
            if symbol.is_whitespace() {
                return Err(CipherError::WhitespaceTableEntry { position: i });
            }
            if table[..i].contains(symbol) {
                return Err(CipherError::DuplicateTableEntry { symbol: *symbol });
            }
        }
        Ok(Monoalphabetic { table })
    }

    /// Identity table (`A→A`, `B→B`, ...).
    pub fn identity() -> Self {
        let mut table = ['A'; LETTERS as usize];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = letter_at(i as u8);
        }
        Monoalphabetic { table }
    }

    /// Returns the substitution table.
    pub fn table(&self) -> &[char] {
        &self.table
    }

    /// Substitutes every letter of `plaintext`; non-letters are dropped.
    pub fn encrypt(&self, plaintext: &str) -> String {
        plaintext
            .chars()
            .filter_map(letter_index)
            .map(|i| self.table[i as usize])
            .collect()
    }

    /// Reverse-looks-up every symbol of `ciphertext`; whitespace is skipped.
    ///
    /// # Errors
    /// Returns [`CipherError::SymbolNotInTable`] for the first symbol that has
    /// no table entry. No partial output is returned.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        ciphertext
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                let symbol = c.to_ascii_uppercase();
                self.table
                    .iter()
                    .position(|&entry| entry == symbol)
                    .map(|i| letter_at(i as u8))
                    .ok_or(CipherError::SymbolNotInTable { symbol })
            })
            .collect()
    }
}

impl Cipher for Monoalphabetic {
    fn name(&self) -> &'static str {
        "monoalphabetic"
    }

    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        Ok(Monoalphabetic::encrypt(self, plaintext))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        Monoalphabetic::decrypt(self, ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Swaps A and B, everything else fixed.
    const SWAP_AB: &str = "BACDEFGHIJKLMNOPQRSTUVWXYZ";

    #[test]
    fn test_encrypt_by_position() {
        let mono = Monoalphabetic::new(SWAP_AB).unwrap();
        assert_eq!(mono.encrypt("abcab"), "BACBA");
    }

    #[test]
    fn test_encrypt_drops_non_letters() {
        let mono = Monoalphabetic::new(SWAP_AB).unwrap();
        assert_eq!(mono.encrypt("a, b!"), "BA");
    }

    #[test]
    fn test_decrypt_reverse_lookup() {
        let mono = Monoalphabetic::new(SWAP_AB).unwrap();
        assert_eq!(mono.decrypt("bac").unwrap(), "ABC");
    }

    #[test]
    fn test_decrypt_absent_symbol_fails() {
        let mono = Monoalphabetic::new(SWAP_AB).unwrap();
        match mono.decrypt("AB3C") {
            Err(CipherError::SymbolNotInTable { symbol }) => assert_eq!(symbol, '3'),
            other => panic!("expected lookup failure, got {:?}", other),
        }
    }

    #[test]
    fn test_table_with_symbols() {
        let mono = Monoalphabetic::new("0123456789!@#$%^&*()-=+[]<").unwrap();
        let ct = mono.encrypt("JAZZ");
        assert_eq!(ct, "90<<");
        assert_eq!(mono.decrypt(&ct).unwrap(), "JAZZ");
    }

    #[test]
    fn test_table_too_short() {
        let err = Monoalphabetic::new("ABCDEFGHIKLMNOPQRSTUVWXYZ").unwrap_err();
        assert!(matches!(
            err,
            CipherError::InvalidTableLength {
                expected: 26,
                actual: 25
            }
        ));
    }

    #[test]
    fn test_table_duplicate() {
        let err = Monoalphabetic::new("AACDEFGHIJKLMNOPQRSTUVWXYZ").unwrap_err();
        assert!(matches!(err, CipherError::DuplicateTableEntry { symbol: 'A' }));
    }

    #[test]
    fn test_whitespace_entry_rejected() {
        let mut entries: Vec<char> = ('A'..='Z').collect();
        entries[0] = ' ';
        let err = Monoalphabetic::from_entries(&entries).unwrap_err();
        assert!(matches!(err, CipherError::WhitespaceTableEntry { position: 0 }));

        entries[0] = 'A';
        entries[25] = '\t';
        let err = Monoalphabetic::from_entries(&entries).unwrap_err();
        assert!(matches!(err, CipherError::WhitespaceTableEntry { position: 25 }));
    }

    #[test]
    fn test_table_whitespace_and_case() {
        let mono = Monoalphabetic::new("bacde fghij klmno pqrst uvwxy z").unwrap();
        assert_eq!(mono, Monoalphabetic::new(SWAP_AB).unwrap());
    }

    #[test]
    fn test_identity() {
        let mono = Monoalphabetic::identity();
        assert_eq!(mono.table().len(), 26);
        assert_eq!(mono.encrypt("Hello"), "HELLO");
    }
}
