//! Known-answer regression tests for the public API.
//!
//! All expected values are frozen vectors: textbook examples where one
//! exists, otherwise hand-checked outputs. Any change in output indicates a
//! regression.
//!
//! Coverage:
//! - `playfair::{Grid, digrams, encrypt_digram, decrypt_digram}`
//! - `Playfair`
//! - `Caesar`, `Monoalphabetic`, `Vigenere`
//! - `AnyCipher`, `Config`
//! - `CipherError`

use classicrypt::playfair::{decrypt_digram, digrams, encrypt_digram, Digram, Grid};
use classicrypt::{
    AnyCipher, Caesar, Cipher, CipherError, Config, Monoalphabetic, Playfair, Vigenere,
};

/// Message used by the demo driver.
const DEMO_MESSAGE: &str = "SA AVALOM PLAVOM U DALJINI KAO BREG";

// ═══════════════════════════════════════════════════════════════════════
// Playfair — grid construction
// ═══════════════════════════════════════════════════════════════════════

/// Textbook grid for key `MONARCHY`.
#[test]
fn grid_monarchy_rows() {
    let grid = Grid::build("MONARCHY");
    assert_eq!(
        grid.to_string(),
        "M O N A R\nC H Y B D\nE F G I K\nL P Q S T\nU V W X Z"
    );
}

/// Key with spaces: the space takes no cell.
#[test]
fn grid_playfair_example() {
    let grid = Grid::build("playfair example");
    assert_eq!(
        grid.to_string(),
        "P L A Y F\nI R E X M\nB C D G H\nK N O Q S\nT U V W Z"
    );
}

/// Repeated key letters collapse onto their first occurrence.
#[test]
fn grid_demo_key_repeats() {
    let grid = Grid::build("SUNCCCCE");
    assert_eq!(
        grid.to_string(),
        "S U N C E\nA B D F G\nH I K L M\nO P Q R T\nV W X Y Z"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Playfair — segmentation and substitution
// ═══════════════════════════════════════════════════════════════════════

/// `BALLOON` splits into `BA LX LO ON`.
#[test]
fn segment_balloon() {
    let pairs: Vec<String> = digrams("BALLOON").map(|d| d.to_string()).collect();
    assert_eq!(pairs, ["BA", "LX", "LO", "ON"]);
}

/// `TREE` inserts a filler between the doubled `E`s.
#[test]
fn segment_tree_stump() {
    let pairs: Vec<String> = digrams("TREESTUMP").map(|d| d.to_string()).collect();
    assert_eq!(pairs, ["TR", "EX", "ES", "TU", "MP"]);
}

/// One digram per rule against the `MONARCHY` grid.
#[test]
fn substitution_rules_monarchy() {
    let grid = Grid::build("MONARCHY");
    // row
    assert_eq!(encrypt_digram(&grid, Digram('S', 'T')), Some(Digram('T', 'L')));
    // column
    assert_eq!(encrypt_digram(&grid, Digram('M', 'E')), Some(Digram('C', 'L')));
    // box
    assert_eq!(encrypt_digram(&grid, Digram('N', 'T')), Some(Digram('R', 'Q')));
    assert_eq!(decrypt_digram(&grid, Digram('R', 'Q')), Some(Digram('N', 'T')));
}

// ═══════════════════════════════════════════════════════════════════════
// Playfair — end to end
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn playfair_monarchy_instruments() {
    let pf = Playfair::new("MONARCHY");
    assert_eq!(pf.encrypt("INSTRUMENTS"), "GATLMZCLRQXA");
    assert_eq!(pf.decrypt("GATLMZCLRQXA"), "INSTRUMENTSX");
}

#[test]
fn playfair_hide_the_gold() {
    let pf = Playfair::new("playfair example");
    let ct = pf.encrypt("Hide the gold in the tree stump");
    assert_eq!(ct, "BMODZBXDNABEKUDMUIXMMOUVIF");
    assert_eq!(pf.decrypt(&ct), "HIDETHEGOLDINTHETREXESTUMP");
}

#[test]
fn playfair_demo_message() {
    let pf = Playfair::new("SUNCCCCE");
    let ct = pf.encrypt(DEMO_MESSAGE);
    assert_eq!(ct, "AHHSFHTHRIHSTHNBFHKWKUKLHVFPGM");
    assert_eq!(pf.decrypt(&ct), "SAAVALOMPLAVOMUDALIXINIKAOBREG");
}

// ═══════════════════════════════════════════════════════════════════════
// Other engines
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn caesar_demo_message() {
    let caesar = Caesar::new();
    let ct = caesar.encrypt(DEMO_MESSAGE);
    assert_eq!(ct, "VDDYDORPSODYRPXGDOMLQLNDREUHJ");
    assert_eq!(caesar.decrypt(&ct), "SAAVALOMPLAVOMUDALJINIKAOBREG");
}

#[test]
fn monoalphabetic_demo_table() {
    let mono = Monoalphabetic::new("BACDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
    let ct = mono.encrypt(DEMO_MESSAGE);
    assert_eq!(ct, "SBBVBLOMPLBVOMUDBLJINIKBOAREG");
    assert_eq!(mono.decrypt(&ct).unwrap(), "SAAVALOMPLAVOMUDALJINIKAOBREG");
}

#[test]
fn monoalphabetic_lookup_failure() {
    let mono = Monoalphabetic::new("BACDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
    let err = mono.decrypt("ABC.").unwrap_err();
    assert!(matches!(err, CipherError::SymbolNotInTable { symbol: '.' }));
    assert_eq!(
        err.to_string(),
        "Symbol '.' is not present in the substitution table"
    );
}

#[test]
fn vigenere_key_hello() {
    let v = Vigenere::new("KEY", false).unwrap();
    assert_eq!(v.key_stream("HELLO", 5), "KEYKE");
    assert_eq!(v.encrypt("HELLO"), "RIJVS");
}

#[test]
fn vigenere_autokey_demo_message() {
    let v = Vigenere::new("Kljuc", true).unwrap();
    let ct = v.encrypt(DEMO_MESSAGE);
    assert_eq!(ct.len(), 29);
    assert_eq!(v.decrypt(&ct), "SAAVALOMPLAVOMUDALJINIKAOBREG");
}

// ═══════════════════════════════════════════════════════════════════════
// Dispatch and configuration
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn any_cipher_from_config() {
    let config = Config::from_toml_str(
        r#"
        [cipher]
        kind = "monoalphabetic"
        table = "BACDE FGHIJ KLMNO PQRST UVWXY Z"
        "#,
    )
    .unwrap();
    let cipher = config.cipher.build().unwrap();
    assert!(matches!(cipher, AnyCipher::Monoalphabetic(_)));
    assert_eq!(cipher.name(), "monoalphabetic");
    assert_eq!(cipher.encrypt("abc").unwrap(), "BAC");
    assert!(matches!(
        cipher.decrypt("1"),
        Err(CipherError::SymbolNotInTable { symbol: '1' })
    ));
}

#[test]
fn config_rejects_unknown_field() {
    let err = Config::from_toml_str("[cipher]\nkind = \"caesar\"\n[extra]\n").unwrap_err();
    assert!(matches!(err, CipherError::Config(_)));
}
