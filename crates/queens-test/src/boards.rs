//! N-Queens board fixtures.
//!
//! # Example
//!
//! ```
//! use queens_test::boards::{all_on_first_row, EIGHT_QUEENS_SOLUTION, board_with_rows};
//!
//! assert!(board_with_rows(&EIGHT_QUEENS_SOLUTION).is_solved());
//! assert_eq!(all_on_first_row(8).conflicts(), 28);
//! ```

use queens_core::Board;

use crate::rng::seeded_rng;

/// A valid 4-queens placement.
pub const FOUR_QUEENS_SOLUTION: [usize; 4] = [1, 3, 0, 2];

/// A valid 8-queens placement.
pub const EIGHT_QUEENS_SOLUTION: [usize; 8] = [0, 4, 7, 5, 2, 6, 1, 3];

/// Queens on the main diagonal: every pair attacks.
pub const FOUR_QUEENS_DIAGONAL: [usize; 4] = [0, 1, 2, 3];

/// Creates a board sized to `rows` holding exactly those rows.
///
/// # Panics
///
/// Panics if any row is not below `rows.len()`.
pub fn board_with_rows(rows: &[usize]) -> Board {
    let mut board = Board::new(rows.len());
    board
        .populate(rows)
        .expect("fixture rows must fit the board");
    board
}

/// Creates a board of size `n` with every queen on row 0.
pub fn all_on_first_row(n: usize) -> Board {
    Board::new(n)
}

/// Creates a randomized board of size `n` from a seeded source.
pub fn random_board(n: usize, seed: u64) -> Board {
    let mut board = Board::new(n);
    board.randomize(&mut seeded_rng(seed));
    board
}

/// Counts every zero-conflict placement of `n` queens by backtracking.
///
/// Only meant for small `n`.
pub fn count_solutions(n: usize) -> usize {
    fn place(rows: &mut Vec<usize>, n: usize) -> usize {
        let column = rows.len();
        if column == n {
            return 1;
        }
        let mut total = 0;
        for row in 0..n {
            let safe = rows
                .iter()
                .enumerate()
                .all(|(c, &r)| !queens_core::attacks(c, r, column, row));
            if safe {
                rows.push(row);
                total += place(rows, n);
                rows.pop();
            }
        }
        total
    }
    place(&mut Vec::with_capacity(n), n)
}
