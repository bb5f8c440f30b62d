//! Playfair digram substitution cipher.
//!
//! ```text
//! key ──► Grid::build ──► Grid (immutable, 5×5)
//!
//! text ──► normalize ──► digrams() ──► locate ──► row / column / box ──► text
//! ```
//!
//! Normalization keeps only ASCII letters, so every digram symbol has a
//! cell. The grid is the only state and is fixed at construction. Encryption
//! pads doubled letters and a trailing single with `X`; decryption does not
//! remove that padding, so `decrypt(encrypt(m))` equals the padded
//! plaintext.

mod digram;
mod grid;
mod substitution;

use tracing::{debug, trace};

use crate::cipher::Cipher;
use crate::error::CipherError;

pub use digram::{digrams, Digram, Digrams, FILLER};
pub use grid::{normalize_symbol, Grid, ALPHABET, GRID_SIZE, PLACEHOLDER};
pub use substitution::{box_rule, decrypt_digram, encrypt_digram};

/// Playfair cipher engine.
///
/// # Examples
///
/// ```
/// use classicrypt::Playfair;
///
/// let playfair = Playfair::new("MONARCHY");
/// let ct = playfair.encrypt("instruments");
/// assert_eq!(ct, "GATLMZCLRQXA");
/// assert_eq!(playfair.decrypt(&ct), "INSTRUMENTSX");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfair {
    grid: Grid,
}

impl Playfair {
    /// Creates the engine, building the grid for `key`. Any key is accepted.
    pub fn new(key: &str) -> Self {
        Playfair {
            grid: Grid::build(key),
        }
    }

    /// Returns the substitution grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Encrypts `plaintext`.
    ///
    /// The text is uppercased, everything that is not an ASCII letter removed
    /// and `J` folded onto `I` before segmentation. The result always has
    /// even length.
    pub fn encrypt(&self, plaintext: &str) -> String {
        self.transform(&Self::normalize(plaintext), encrypt_digram)
    }

    /// Decrypts `ciphertext`. Filler symbols inserted by encryption remain.
    pub fn decrypt(&self, ciphertext: &str) -> String {
        self.transform(&Self::normalize(ciphertext), decrypt_digram)
    }

    fn normalize(text: &str) -> String {
        let normalized: String = text
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(normalize_symbol)
            .collect();
        let dropped = text.chars().count() - normalized.len();
        if dropped > 0 {
            debug!(dropped, "dropped symbols with no grid cell");
        }
        normalized
    }

    fn transform(&self, text: &str, rule: fn(&Grid, Digram) -> Option<Digram>) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 2 + 1);
        for digram in digrams(text) {
            // Normalized text holds grid symbols only, so the rule always applies.
            let Some(substituted) = rule(&self.grid, digram) else {
                continue;
            };
            trace!(%digram, %substituted, "substituted digram");
            out.push(substituted.0);
            out.push(substituted.1);
        }
        out
    }
}

impl Cipher for Playfair {
    fn name(&self) -> &'static str {
        "playfair"
    }

    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        Ok(Playfair::encrypt(self, plaintext))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        Ok(Playfair::decrypt(self, ciphertext))
    }
}
