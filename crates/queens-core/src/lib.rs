//! Queens Core - board state and constraint evaluation
//!
//! This crate provides the fixed representation every search works on:
//! - [`Configuration`]: one row per column, a plain value type
//! - [`Board`]: owns a configuration and exposes the populate/randomize contract
//! - [`conflict`]: pairwise and per-column conflict counting
//! - [`QueensError`]: the errors raised by board operations

pub mod board;
pub mod configuration;
pub mod conflict;
pub mod error;

pub use board::Board;
pub use configuration::Configuration;
pub use conflict::{attacks, column_conflicts, count_conflicts};
pub use error::{QueensError, Result};
