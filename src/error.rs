//! Error types for the classicrypt library.
//!
//! Only the monoalphabetic cipher, the Vigenère constructor and the
//! configuration layer can fail. Caesar and Playfair are total over their
//! input and never produce an error.

use thiserror::Error;

/// Errors produced by the classicrypt library.
#[derive(Debug, Error)]
pub enum CipherError {
    /// A ciphertext symbol has no entry in the monoalphabetic substitution table.
    #[error("Symbol '{symbol}' is not present in the substitution table")]
    SymbolNotInTable { symbol: char },

    /// The monoalphabetic substitution table does not cover the alphabet.
    #[error("Substitution table must have {expected} entries, got {actual}")]
    InvalidTableLength { expected: usize, actual: usize },

    /// The same symbol appears twice in the substitution table.
    #[error("Substitution table contains '{symbol}' more than once")]
    DuplicateTableEntry { symbol: char },

    /// A substitution table entry is whitespace, which decryption cannot look up.
    #[error("Substitution table entry {position} is whitespace")]
    WhitespaceTableEntry { position: usize },

    /// The key contains no usable letters.
    #[error("Key must contain at least one letter")]
    EmptyKey,

    /// A cipher described by configuration lacks a required parameter.
    #[error("Cipher '{kind}' requires the '{parameter}' parameter")]
    MissingParameter {
        kind: &'static str,
        parameter: &'static str,
    },

    /// The configuration document could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
