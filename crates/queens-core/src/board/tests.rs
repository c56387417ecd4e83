//! Tests for the board.

use super::*;
use crate::error::QueensError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_new_board_is_all_zero() {
    let board = Board::new(21);
    assert_eq!(board.size(), 21);
    assert!(board.rows().iter().all(|&r| r == 0));
    assert!(!board.is_solved());
}

#[test]
fn test_populate_known_solution() {
    let mut board = Board::new(4);
    board.populate(&[1, 3, 0, 2]).unwrap();
    assert!(board.is_solved());
    assert_eq!(board.conflicts(), 0);
}

#[test]
fn test_populate_diagonal_has_all_pairs_conflicting() {
    let mut board = Board::new(4);
    board.populate(&[0, 1, 2, 3]).unwrap();
    assert_eq!(board.conflicts(), 6);
    assert!(!board.is_solved());
}

#[test]
fn test_populate_pads_short_input() {
    let mut board = Board::new(6);
    board.populate(&[5, 4]).unwrap();
    assert_eq!(board.rows(), &[5, 4, 0, 0, 0, 0]);
}

#[test]
fn test_populate_out_of_range_fails() {
    let mut board = Board::new(8);
    let err = board.populate(&[25]).unwrap_err();
    assert!(matches!(err, QueensError::InvalidConfiguration { row: 25, .. }));
}

#[test]
fn test_populate_failure_leaves_board_unchanged() {
    let mut board = Board::new(4);
    board.populate(&[1, 3, 0, 2]).unwrap();
    assert!(board.populate(&[0, 1, 2, 4]).is_err());
    assert_eq!(board.rows(), &[1, 3, 0, 2]);
}

#[test]
fn test_randomize_stays_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut board = Board::new(21);
    for _ in 0..50 {
        board.randomize(&mut rng);
        assert_eq!(board.size(), 21);
        assert!(board.rows().iter().all(|&r| r < 21));
    }
}

#[test]
fn test_randomize_is_reproducible_with_seed() {
    let mut a = Board::new(12);
    let mut b = Board::new(12);
    a.randomize(&mut ChaCha8Rng::seed_from_u64(42));
    b.randomize(&mut ChaCha8Rng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn test_randomize_empty_board() {
    let mut board = Board::new(0);
    board.randomize(&mut ChaCha8Rng::seed_from_u64(1));
    assert!(board.rows().is_empty());
    assert!(board.is_solved());
}

#[test]
fn test_render() {
    let mut board = Board::new(4);
    board.populate(&[1, 3, 0, 2]).unwrap();
    assert_eq!(board.render(), "--Q-\nQ---\n---Q\n-Q--\n");
    assert_eq!(board.to_string(), board.render());
}

#[test]
fn test_from_configuration() {
    let mut working = Board::new(4).configuration().clone();
    working.set_row(0, 2);
    let board = Board::from(working);
    assert_eq!(board.size(), 4);
    assert_eq!(board.rows(), &[2, 0, 0, 0]);
}

#[test]
fn test_small_boards_have_no_solution() {
    // Exhaustively enumerate N = 2 and N = 3.
    for n in [2usize, 3] {
        let total = n.pow(n as u32);
        let solved = (0..total).any(|mut code| {
            let rows: Vec<usize> = (0..n)
                .map(|_| {
                    let r = code % n;
                    code /= n;
                    r
                })
                .collect();
            Configuration::from_rows(n, &rows).unwrap().is_solved()
        });
        assert!(!solved, "N = {n} should have no solution");
    }
}
