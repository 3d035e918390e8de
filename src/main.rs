//! LR(1) Parser Generator and Recognizer
//!
//! A Rust implementation of canonical LR(1) parsing for context-free
//! grammars.
//!
//! This implementation provides:
//! - Nullability and FIRST-set computation
//! - Canonical LR(1) item-set construction (CLOSURE/GOTO)
//! - ACTION/GOTO table construction with conflict detection
//! - A shift/reduce/accept/error recognizer
//! - A demo driver printing tables/states and running worked examples
//!
//! # References
//! Aho, Alfred V. et al. "Compilers: Principles, Techniques, and Tools"
//! (2nd Edition). Addison-Wesley, 2006.

mod cli;
mod diagnostics;
mod error;
mod grammar;
mod items;
mod nullability_first;
mod symbol;
mod table;

use std::process;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
