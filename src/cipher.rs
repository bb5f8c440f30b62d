//! Cipher trait shared by every engine in the suite.
//!
//! Each engine implements [`Cipher`]; [`AnyCipher`] is the closed set of
//! engines for callers that pick the variant at runtime (configuration,
//! command line).

use crate::caesar::Caesar;
use crate::error::CipherError;
use crate::monoalphabetic::Monoalphabetic;
use crate::playfair::Playfair;
use crate::vigenere::Vigenere;

/// Encrypt/decrypt contract implemented by every cipher engine.
///
/// Both operations accept text in either case and return uppercase text.
/// Implementations are pure: the same input always yields the same output
/// and no call changes the engine.
pub trait Cipher {
    /// Short lowercase name of the engine (`"playfair"`, `"vigenere"`, ...).
    fn name(&self) -> &'static str;

    /// Encrypts `plaintext`.
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError>;

    /// Decrypts `ciphertext`.
    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError>;
}

/// One of the cipher engines, selected at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyCipher {
    Caesar(Caesar),
    Monoalphabetic(Monoalphabetic),
    Playfair(Playfair),
    Vigenere(Vigenere),
}

impl AnyCipher {
    fn inner(&self) -> &dyn Cipher {
        match self {
            AnyCipher::Caesar(c) => c,
            AnyCipher::Monoalphabetic(c) => c,
            AnyCipher::Playfair(c) => c,
            AnyCipher::Vigenere(c) => c,
        }
    }
}

impl Cipher for AnyCipher {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        self.inner().encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        self.inner().decrypt(ciphertext)
    }
}

impl From<Caesar> for AnyCipher {
    fn from(c: Caesar) -> Self {
        AnyCipher::Caesar(c)
    }
}

impl From<Monoalphabetic> for AnyCipher {
    fn from(c: Monoalphabetic) -> Self {
        AnyCipher::Monoalphabetic(c)
    }
}

impl From<Playfair> for AnyCipher {
    fn from(c: Playfair) -> Self {
        AnyCipher::Playfair(c)
    }
}

impl From<Vigenere> for AnyCipher {
    fn from(c: Vigenere) -> Self {
        AnyCipher::Vigenere(c)
    }
}
