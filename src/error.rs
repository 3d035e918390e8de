//! Error types for the LR(1) parser generator.

use thiserror::Error;

/// Errors that can occur during grammar ingestion, automaton
/// construction, and recognition.
#[derive(Error, Debug)]
pub enum LrError {
    #[error("Invalid grammar format: {0}")]
    InvalidFormat(String),

    #[error("Invalid production format: {0}")]
    InvalidProduction(String),

    #[error("Empty grammar input")]
    EmptyInput,

    #[error("Not enough production lines: expected {expected}, got {actual}")]
    NotEnoughProductions { expected: usize, actual: usize },

    #[error("symbol '{symbol}' is reserved and must not appear in the grammar")]
    ReservedSymbolUsed { symbol: String },

    #[error("not an LR(1) grammar: state {state} has a conflict between {first} and {second}")]
    NotLr1 {
        state: usize,
        first: String,
        second: String,
    },

    #[error("symbol not in grammar: '{symbol}'")]
    SymbolNotInGrammar { symbol: String },
}

/// Type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, LrError>;
