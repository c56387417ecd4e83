//! Conflict counting primitives.
//!
//! A conflict is an unordered pair of distinct columns whose queens share a
//! row or a diagonal. Same-column conflicts cannot occur because every column
//! holds exactly one queen.

/// Returns true if the queens at `(col_a, row_a)` and `(col_b, row_b)` attack
/// each other along a row or a diagonal.
///
/// The caller is responsible for passing two distinct columns.
///
/// # Examples
///
/// ```
/// use queens_core::conflict::attacks;
///
/// assert!(attacks(0, 3, 5, 3)); // same row
/// assert!(attacks(1, 2, 2, 1)); // same diagonal
/// assert!(!attacks(0, 0, 1, 2));
/// ```
#[inline]
pub fn attacks(col_a: usize, row_a: usize, col_b: usize, row_b: usize) -> bool {
    row_a == row_b || col_a.abs_diff(col_b) == row_a.abs_diff(row_b)
}

/// Counts the conflicting column pairs in `rows`.
///
/// Every pair `i < j` is compared exactly once, so this is an O(N²) scan.
///
/// # Examples
///
/// ```
/// use queens_core::conflict::count_conflicts;
///
/// assert_eq!(count_conflicts(&[0, 2, 1, 3]), 2);
/// assert_eq!(count_conflicts(&[1, 3, 0, 2]), 0);
/// assert_eq!(count_conflicts(&[0, 1, 2, 3]), 6);
/// ```
pub fn count_conflicts(rows: &[usize]) -> usize {
    let mut conflicts = 0;
    for i in 0..rows.len() {
        for j in (i + 1)..rows.len() {
            if attacks(i, rows[i], j, rows[j]) {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// Counts the columns attacking the queen in `column`.
///
/// # Panics
///
/// Panics if `column` is out of bounds.
pub fn column_conflicts(rows: &[usize], column: usize) -> usize {
    let row = rows[column];
    rows.iter()
        .enumerate()
        .filter(|&(other, &other_row)| other != column && attacks(other, other_row, column, row))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conflict() {
        assert_eq!(count_conflicts(&[2, 0, 2]), 1);
    }

    #[test]
    fn test_diagonal_conflict_both_directions() {
        // (0,0)-(1,1) and (2,3)-(3,2)
        assert_eq!(count_conflicts(&[0, 1, 3, 2]), 2);
    }

    #[test]
    fn test_pair_order_does_not_matter() {
        for (a, b) in [((0, 0), (3, 3)), ((1, 4), (4, 1)), ((2, 2), (5, 2))] {
            assert_eq!(attacks(a.0, a.1, b.0, b.1), attacks(b.0, b.1, a.0, a.1));
        }
    }

    #[test]
    fn test_all_queens_on_one_row() {
        let rows = vec![0; 8];
        assert_eq!(count_conflicts(&rows), 8 * 7 / 2);
    }

    #[test]
    fn test_empty_and_single_column() {
        assert_eq!(count_conflicts(&[]), 0);
        assert_eq!(count_conflicts(&[0]), 0);
    }

    #[test]
    fn test_four_queens_partial() {
        // (1,2)-(2,1) plus the long diagonal (0,0)-(3,3)
        assert_eq!(count_conflicts(&[0, 2, 1, 3]), 2);
    }

    #[test]
    fn test_column_conflicts() {
        let rows = [0, 2, 1, 3];
        assert_eq!(column_conflicts(&rows, 0), 1); // (0,0)-(3,3)
        assert_eq!(column_conflicts(&rows, 1), 1);
        assert_eq!(column_conflicts(&rows, 2), 1);
        assert_eq!(column_conflicts(&rows, 3), 1);
    }

    #[test]
    fn test_column_conflicts_sum_is_twice_pair_count() {
        let rows = [3, 1, 4, 1, 5, 0, 2, 6];
        let per_column: usize = (0..rows.len()).map(|c| column_conflicts(&rows, c)).sum();
        assert_eq!(per_column, 2 * count_conflicts(&rows));
    }
}
