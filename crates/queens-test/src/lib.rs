//! Shared test fixtures for the queens crates.
//!
//! This crate provides boards and random sources for testing. It depends only
//! on `queens-core`, so every other crate can pull it in as a dev-dependency.
//!
//! - [`boards`] - known solutions and board builders
//! - [`rng`] - seeded, portable random sources
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! queens-test = { workspace = true }
//! ```
//!
//! ```
//! use queens_test::boards::{board_with_rows, FOUR_QUEENS_SOLUTION};
//!
//! let board = board_with_rows(&FOUR_QUEENS_SOLUTION);
//! assert!(board.is_solved());
//! ```

pub mod boards;
pub mod rng;

pub use boards::{board_with_rows, count_solutions, random_board};
pub use rng::seeded_rng;
