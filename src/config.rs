//! TOML configuration describing which cipher to build.
//!
//! ```toml
//! [cipher]
//! kind = "vigenere"
//! key = "LEMON"
//! autokey = true
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::caesar::Caesar;
use crate::cipher::{AnyCipher, Cipher};
use crate::error::CipherError;
use crate::monoalphabetic::Monoalphabetic;
use crate::playfair::Playfair;
use crate::vigenere::Vigenere;

/// Top-level configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub cipher: CipherSpec,
}

impl Config {
    /// Parses a configuration document.
    ///
    /// # Errors
    /// Returns [`CipherError::Config`] if the document is not valid TOML or
    /// does not describe a cipher.
    pub fn from_toml_str(text: &str) -> Result<Self, CipherError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    /// Returns [`CipherError::Io`] if the file cannot be read, or
    /// [`CipherError::Config`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CipherError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading cipher configuration");
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Description of one cipher engine and its construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CipherSpec {
    Caesar {
        #[serde(default)]
        shift: Option<u8>,
    },
    Monoalphabetic {
        table: String,
    },
    Playfair {
        key: String,
    },
    Vigenere {
        key: String,
        #[serde(default)]
        autokey: bool,
    },
}

impl CipherSpec {
    /// Constructs the described engine.
    ///
    /// # Errors
    /// Propagates construction errors of the monoalphabetic and Vigenère
    /// engines.
    pub fn build(&self) -> Result<AnyCipher, CipherError> {
        let cipher: AnyCipher = match self {
            CipherSpec::Caesar { shift } => shift.map_or_else(Caesar::new, Caesar::with_shift).into(),
            CipherSpec::Monoalphabetic { table } => Monoalphabetic::new(table)?.into(),
            CipherSpec::Playfair { key } => Playfair::new(key).into(),
            CipherSpec::Vigenere { key, autokey } => Vigenere::new(key, *autokey)?.into(),
        };
        debug!(kind = cipher.name(), "built cipher from configuration");
        Ok(cipher)
    }
}
