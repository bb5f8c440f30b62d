//! Row, column and box substitution rules applied to one digram.

use super::digram::Digram;
use super::grid::{Grid, GRID_SIZE};

/// Moves `index` by `step` cells with modulo-5 wraparound.
fn wrap(index: usize, step: isize) -> usize {
    (index as isize + step).rem_euclid(GRID_SIZE as isize) as usize
}

/// Box rule: each symbol keeps its row and takes the other symbol's column.
///
/// Applying it twice returns the original pair, so it serves both directions.
pub fn box_rule(grid: &Grid, (r1, c1): (usize, usize), (r2, c2): (usize, usize)) -> Digram {
    Digram(grid.at(r1, c2), grid.at(r2, c1))
}

fn substitute(grid: &Grid, digram: Digram, step: isize) -> Option<Digram> {
    let (r1, c1) = grid.locate(digram.0)?;
    let (r2, c2) = grid.locate(digram.1)?;

    let out = if r1 == r2 {
        Digram(grid.at(r1, wrap(c1, step)), grid.at(r2, wrap(c2, step)))
    } else if c1 == c2 {
        Digram(grid.at(wrap(r1, step), c1), grid.at(wrap(r2, step), c2))
    } else {
        box_rule(grid, (r1, c1), (r2, c2))
    };
    Some(out)
}

/// Encrypts one digram: same row moves right, same column moves down,
/// otherwise the box rule.
///
/// # Returns
/// `None` if either symbol has no cell in `grid`.
pub fn encrypt_digram(grid: &Grid, digram: Digram) -> Option<Digram> {
    substitute(grid, digram, 1)
}

/// Decrypts one digram: same row moves left, same column moves up,
/// otherwise the box rule.
///
/// # Returns
/// `None` if either symbol has no cell in `grid`.
pub fn decrypt_digram(grid: &Grid, digram: Digram) -> Option<Digram> {
    substitute(grid, digram, -1)
}
