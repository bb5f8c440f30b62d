//! Classical text ciphers behind one encrypt/decrypt contract.
//!
//! Four engines are provided: Caesar shift, monoalphabetic substitution,
//! Playfair digram substitution and Vigenère (repeating key or autokey).
//! They are pedagogical ciphers and offer no real confidentiality.
//!
//! # Architecture
//!
//! ```text
//! Cipher (trait: encrypt / decrypt)
//!     ├── Caesar          (fixed shift, mod 26)
//!     ├── Monoalphabetic  (26-entry substitution table)
//!     ├── Playfair        (Grid ─ digrams ─ row/column/box rules)
//!     └── Vigenere        (pure key stream: repeat or autokey)
//! AnyCipher (closed enum over the four) ◄── config::CipherSpec (TOML)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with Playfair:
//!
//! ```
//! use classicrypt::Playfair;
//!
//! let playfair = Playfair::new("MONARCHY");
//! let ct = playfair.encrypt("instruments");
//! assert_eq!(ct, "GATLMZCLRQXA");
//! assert_eq!(playfair.decrypt(&ct), "INSTRUMENTSX");
//! ```
//!
//! Select an engine at runtime:
//!
//! ```
//! use classicrypt::{AnyCipher, Cipher, Vigenere};
//!
//! let cipher: AnyCipher = Vigenere::new("KEY", false).unwrap().into();
//! assert_eq!(cipher.encrypt("hello").unwrap(), "RIJVS");
//! ```

#![deny(clippy::all)]

pub mod caesar;
pub mod cipher;
pub mod config;
pub mod error;
pub mod monoalphabetic;
pub mod playfair;
pub mod utils;
pub mod vigenere;

pub use caesar::Caesar;
pub use cipher::{AnyCipher, Cipher};
pub use config::{CipherSpec, Config};
pub use error::CipherError;
pub use monoalphabetic::Monoalphabetic;
pub use playfair::Playfair;
pub use vigenere::{KeyMode, Vigenere};
