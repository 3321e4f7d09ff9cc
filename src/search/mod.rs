//! Search module for the Ultimate Tic-Tac-Toe engine
//!
//! Contains:
//! - Fixed-depth minimax over cloned board states
//! - Uniform random tie-breaking with a seedable RNG

pub mod minimax;

pub use minimax::{SearchResult, Searcher};
