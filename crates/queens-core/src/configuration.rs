//! Value-semantics queen placement.

use std::fmt;

use crate::conflict::{column_conflicts, count_conflicts};
use crate::error::{QueensError, Result};

/// One queen per column; `rows()[column]` is the row that queen occupies.
///
/// The length is fixed at construction and every row is below it. Rows may
/// repeat, which is exactly what a row conflict is.
///
/// # Examples
///
/// ```
/// use queens_core::Configuration;
///
/// let config = Configuration::from_rows(4, &[1, 3, 0, 2]).unwrap();
/// assert!(config.is_solved());
/// assert_eq!(config.row(1), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Configuration {
    rows: Vec<usize>,
}

impl Configuration {
    /// Creates a configuration with every queen on row 0.
    pub fn new(size: usize) -> Self {
        Self {
            rows: vec![0; size],
        }
    }

    /// Builds a configuration of `size` columns from `rows`.
    ///
    /// Missing trailing columns are filled with row 0, extra values are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`QueensError::InvalidConfiguration`] for the first row that is
    /// not below `size`.
    ///
    /// ```
    /// use queens_core::{Configuration, QueensError};
    ///
    /// let padded = Configuration::from_rows(4, &[3]).unwrap();
    /// assert_eq!(padded.rows(), &[3, 0, 0, 0]);
    ///
    /// let err = Configuration::from_rows(8, &[25]).unwrap_err();
    /// assert!(matches!(err, QueensError::InvalidConfiguration { column: 0, row: 25, size: 8 }));
    /// ```
    pub fn from_rows(size: usize, rows: &[usize]) -> Result<Self> {
        let mut config = Self::new(size);
        for (column, &row) in rows.iter().take(size).enumerate() {
            if row >= size {
                return Err(QueensError::InvalidConfiguration { column, row, size });
            }
            config.rows[column] = row;
        }
        Ok(config)
    }

    /// Number of columns (and rows).
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Row of the queen in `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of bounds.
    #[inline]
    pub fn row(&self, column: usize) -> usize {
        self.rows[column]
    }

    /// Moves the queen in `column` to `row`.
    ///
    /// # Panics
    ///
    /// Panics if `column` or `row` is not below [`size`](Self::size).
    #[inline]
    pub fn set_row(&mut self, column: usize, row: usize) {
        assert!(
            row < self.size(),
            "row {row} out of range for a board of size {}",
            self.size()
        );
        self.rows[column] = row;
    }

    /// Total number of conflicting column pairs.
    pub fn conflicts(&self) -> usize {
        count_conflicts(&self.rows)
    }

    /// Number of queens attacking the queen in `column`.
    pub fn column_conflicts(&self, column: usize) -> usize {
        column_conflicts(&self.rows, column)
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.conflicts() == 0
    }

    /// Renders the N×N grid, `Q` for a queen and `-` for an empty square.
    ///
    /// ```
    /// use queens_core::Configuration;
    ///
    /// let config = Configuration::from_rows(4, &[0, 2, 1, 3]).unwrap();
    /// assert_eq!(config.render(), "Q---\n--Q-\n-Q--\n---Q\n");
    /// ```
    pub fn render(&self) -> String {
        let n = self.size();
        let mut out = String::with_capacity(n * (n + 1));
        for row in 0..n {
            for &queen_row in &self.rows {
                out.push(if queen_row == row { 'Q' } else { '-' });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl TryFrom<Vec<usize>> for Configuration {
    type Error = QueensError;

    /// A configuration sized to `rows`, rejecting any row not below its length.
    fn try_from(rows: Vec<usize>) -> Result<Self> {
        Self::from_rows(rows.len(), &rows)
    }
}

impl From<Configuration> for Vec<usize> {
    fn from(configuration: Configuration) -> Self {
        configuration.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_zero() {
        let config = Configuration::new(5);
        assert_eq!(config.rows(), &[0, 0, 0, 0, 0]);
        assert_eq!(config.conflicts(), 10);
    }

    #[test]
    fn test_from_rows_truncates_extra_values() {
        let config = Configuration::from_rows(2, &[1, 0, 7]).unwrap();
        assert_eq!(config.rows(), &[1, 0]);
    }

    #[test]
    fn test_from_rows_reports_first_bad_column() {
        let err = Configuration::from_rows(4, &[0, 4, 9]).unwrap_err();
        assert_eq!(
            err,
            QueensError::InvalidConfiguration {
                column: 1,
                row: 4,
                size: 4
            }
        );
    }

    #[test]
    fn test_set_row() {
        let mut config = Configuration::new(4);
        config.set_row(2, 3);
        assert_eq!(config.row(2), 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_row_out_of_range() {
        let mut config = Configuration::new(4);
        config.set_row(0, 4);
    }

    #[test]
    fn test_try_from_vec_validates_rows() {
        let config = Configuration::try_from(vec![1, 3, 0, 2]).unwrap();
        assert!(config.is_solved());
        assert_eq!(Vec::from(config), vec![1, 3, 0, 2]);

        let err = Configuration::try_from(vec![0, 3, 1]).unwrap_err();
        assert_eq!(
            err,
            QueensError::InvalidConfiguration {
                column: 1,
                row: 3,
                size: 3
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_out_of_range_rows() {
        #[derive(Debug, serde::Deserialize)]
        struct Saved {
            configuration: Configuration,
        }

        let saved: Saved = toml::from_str("configuration = [1, 3, 0, 2]").unwrap();
        assert_eq!(saved.configuration.rows(), &[1, 3, 0, 2]);

        let err = toml::from_str::<Saved>("configuration = [0, 9, 1]").unwrap_err();
        assert!(err.to_string().contains("expected a row below 3"), "{err}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_as_row_list() {
        #[derive(serde::Serialize)]
        struct Saved {
            configuration: Configuration,
        }

        let saved = Saved {
            configuration: Configuration::from_rows(4, &[1, 3, 0, 2]).unwrap(),
        };
        assert_eq!(
            toml::to_string(&saved).unwrap().trim(),
            "configuration = [1, 3, 0, 2]"
        );
    }

    #[test]
    fn test_display_matches_render() {
        let config = Configuration::from_rows(3, &[2, 0, 1]).unwrap();
        assert_eq!(config.to_string(), "-Q-\n--Q\nQ--\n");
    }
}
