//! Digram type and the segmenter that splits text into digrams.

use std::fmt;
use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

/// Symbol inserted to break a doubled letter or complete a trailing single.
pub const FILLER: char = 'X';

/// Ordered pair of symbols substituted as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digram(pub char, pub char);

impl fmt::Display for Digram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// Lazy iterator over the digrams of a normalized text.
///
/// Scans left to right:
/// - a symbol followed by a different one forms a digram with it;
/// - a symbol followed by itself is paired with [`FILLER`] and the repeat
///   starts the next digram;
/// - a trailing single symbol is paired with [`FILLER`].
///
/// The iterator is `Clone`, so a segmentation can be replayed.
///
/// # Examples
///
/// ```
/// use classicrypt::playfair::{digrams, Digram};
///
/// let pairs: Vec<Digram> = digrams("BALLOON").collect();
/// assert_eq!(
///     pairs,
///     [Digram('B', 'A'), Digram('L', 'X'), Digram('L', 'O'), Digram('O', 'N')]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Digrams<'a> {
    symbols: Peekable<Chars<'a>>,
}

/// Segments `text` into digrams. See [`Digrams`].
pub fn digrams(text: &str) -> Digrams<'_> {
    Digrams {
        symbols: text.chars().peekable(),
    }
}

impl Iterator for Digrams<'_> {
    type Item = Digram;

    fn next(&mut self) -> Option<Digram> {
        let first = self.symbols.next()?.to_ascii_uppercase();
        let second = match self.symbols.peek() {
            Some(&next) if next.to_ascii_uppercase() != first => {
                self.symbols.next();
                next.to_ascii_uppercase()
            }
            _ => FILLER,
        };
        Some(Digram(first, second))
    }
}

impl FusedIterator for Digrams<'_> {}
