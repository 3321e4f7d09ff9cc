//! Evaluation module for the Ultimate Tic-Tac-Toe engine
//!
//! Contains:
//! - Scoring weights and the cell-weight table
//! - The heuristic evaluation function used at search leaves

pub mod heuristic;
pub mod weights;

pub use heuristic::evaluate;
pub use weights::Weights;
