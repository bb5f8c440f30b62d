//! Key-derived 5×5 Playfair grid and coordinate lookup.

use std::fmt;

use tracing::debug;

/// Side length of the grid.
pub const GRID_SIZE: usize = 5;

/// The 25 grid symbols in fill order. `J` has no cell of its own.
pub const ALPHABET: [char; GRID_SIZE * GRID_SIZE] = [
    'A', 'B', 'C', 'D', 'E', //
    'F', 'G', 'H', 'I', 'K', //
    'L', 'M', 'N', 'O', 'P', //
    'Q', 'R', 'S', 'T', 'U', //
    'V', 'W', 'X', 'Y', 'Z', //
];

/// The single cell shared by `I` and `J`.
pub const PLACEHOLDER: char = 'I';

/// Uppercases `c` and folds `I`/`J` onto [`PLACEHOLDER`].
pub fn normalize_symbol(c: char) -> char {
    match c.to_ascii_uppercase() {
        'I' | 'J' => PLACEHOLDER,
        other => other,
    }
}

fn alphabet_position(symbol: char) -> Option<usize> {
    ALPHABET.iter().position(|&a| a == symbol)
}

/// 5×5 substitution grid, filled row-major with the deduplicated key
/// followed by the unused alphabet symbols.
///
/// Every [`ALPHABET`] symbol appears exactly once whatever the key.
///
/// # Examples
///
/// ```
/// use classicrypt::playfair::Grid;
///
/// let grid = Grid::build("MONARCHY");
/// assert_eq!(grid.rows()[0], ['M', 'O', 'N', 'A', 'R']);
/// assert_eq!(grid.locate('J'), grid.locate('I'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Builds the grid for `key`.
    ///
    /// The key is uppercased and `J` folded onto `I`. The first occurrence of
    /// each symbol claims the next free cell; repeats are ignored. Key
    /// characters outside [`ALPHABET`] (digits, punctuation, spaces) are
    /// skipped: the 25 cells are exactly the alphabet.
    pub fn build(key: &str) -> Self {
        let mut cells = [[PLACEHOLDER; GRID_SIZE]; GRID_SIZE];
        let mut placed = [false; GRID_SIZE * GRID_SIZE];
        let mut next = 0;

        for symbol in key.chars().map(normalize_symbol) {
            match alphabet_position(symbol) {
                Some(pos) if !placed[pos] => {
                    placed[pos] = true;
                    cells[next / GRID_SIZE][next % GRID_SIZE] = symbol;
                    next += 1;
                }
                Some(_) => {}
                None => debug!(symbol = %symbol, "skipping key symbol with no grid cell"),
            }
        }
        let from_key = next;

        for (pos, &symbol) in ALPHABET.iter().enumerate() {
            if !placed[pos] {
                cells[next / GRID_SIZE][next % GRID_SIZE] = symbol;
                next += 1;
            }
        }

        debug!(from_key, "built playfair grid");
        Grid { cells }
    }

    /// Returns the `(row, column)` of `symbol`, folding `I`/`J` first.
    ///
    /// # Returns
    /// `None` if the symbol has no cell (digits, punctuation, non-ASCII).
    pub fn locate(&self, symbol: char) -> Option<(usize, usize)> {
        let symbol = normalize_symbol(symbol);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == symbol {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Returns the symbol at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not below [`GRID_SIZE`].
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    /// Returns the grid rows.
    pub fn rows(&self) -> &[[char; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
