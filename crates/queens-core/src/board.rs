//! The N-Queens board.
//!
//! A [`Board`] exclusively owns one [`Configuration`]. Searches copy it into a
//! private working configuration and turn the result back into a board with
//! [`Board::from`], so no outside code ever aliases the stored rows.

use std::fmt;

use rand::Rng;

use crate::configuration::Configuration;
use crate::error::Result;

/// An N×N board holding one queen per column.
///
/// # Examples
///
/// ```
/// use queens_core::Board;
///
/// let mut board = Board::new(4);
/// assert_eq!(board.rows(), &[0, 0, 0, 0]);
///
/// board.populate(&[1, 3, 0, 2]).unwrap();
/// assert!(board.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    configuration: Configuration,
}

impl Board {
    /// Creates a board of `size` columns with every queen on the top row.
    pub fn new(size: usize) -> Self {
        Self {
            configuration: Configuration::new(size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.configuration.size()
    }

    /// Replaces the configuration with `rows`, zero-padding short input.
    ///
    /// The board is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`QueensError::InvalidConfiguration`] if any row is not below
    /// the board size.
    pub fn populate(&mut self, rows: &[usize]) -> Result<()> {
        self.configuration = Configuration::from_rows(self.size(), rows)?;
        Ok(())
    }

    /// Places every queen on an independent, uniformly random row.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.size();
        for column in 0..n {
            self.configuration.set_row(column, rng.random_range(0..n));
        }
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.configuration.is_solved()
    }

    /// Number of conflicting column pairs on the board.
    #[inline]
    pub fn conflicts(&self) -> usize {
        self.configuration.conflicts()
    }

    #[inline]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    #[inline]
    pub fn rows(&self) -> &[usize] {
        self.configuration.rows()
    }

    pub fn render(&self) -> String {
        self.configuration.render()
    }
}

impl From<Configuration> for Board {
    /// A board whose size is the configuration's length.
    fn from(configuration: Configuration) -> Self {
        Self { configuration }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.configuration, f)
    }
}

#[cfg(test)]
mod tests;
