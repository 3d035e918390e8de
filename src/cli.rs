//! Demo driver: builds the automaton for a handful of hard-coded
//! example grammars, prints the table/states dumps, and runs each
//! grammar's known `(word, expected)` pairs, reporting pass/fail.
//!
//! This is the "out of scope" demo driver spec.md §1 calls for — it
//! exercises the core (grammar, nullability/FIRST, item-set
//! construction, table/recognizer) but is not itself part of it.
//! Grounded in shape on the teacher crate's `cli::run`, which is also a
//! thin, synchronous, stdout-only wrapper around the library.

use crate::diagnostics::{print_states, print_table};
use crate::error::Result;
use crate::grammar::Grammar;
use crate::table::LrAutomaton;

struct Example {
    name: &'static str,
    lines: &'static [&'static str],
    checks: &'static [(&'static str, bool)],
}

const EXAMPLES: &[Example] = &[
    Example {
        name: "balanced parens (not LR(1))",
        lines: &["1", "S -> SS | (S) | x"],
        checks: &[],
    },
    Example {
        name: "prefix grammar",
        lines: &["2", "S -> aB", "B -> b | bc"],
        checks: &[
            ("a", false),
            ("ab", true),
            ("abc", true),
            ("bc", false),
            ("b", false),
        ],
    },
    Example {
        name: "c-then-d grammar",
        lines: &["2", "S -> CC", "C -> cC | d"],
        checks: &[
            ("dcd", true),
            ("dd", true),
            ("cdcdd", false),
            ("ccc", false),
            ("ccccdcdd", false),
            ("cccdccccd", true),
            ("cddd", false),
        ],
    },
    Example {
        name: "mixed nullability grammar",
        lines: &["2", "S -> ac | bDc | Da", "D -> a"],
        checks: &[
            ("ac", true),
            ("aa", true),
            ("bac", true),
            ("aac", false),
            ("bb", false),
            ("baac", false),
            ("aaa", false),
        ],
    },
    Example {
        name: "nullable start grammar",
        lines: &["1", "S -> e | x"],
        checks: &[("", true), ("x", true), ("xx", false)],
    },
];

/// Runs every hard-coded example: parses its grammar, attempts
/// construction, and (on success) checks its `(word, expected)` pairs.
pub fn run() -> Result<()> {
    for example in EXAMPLES {
        println!("=== {} ===", example.name);

        let lines: Vec<String> = example.lines.iter().map(|s| s.to_string()).collect();
        let grammar = Grammar::parse(&lines)?;

        match LrAutomaton::build(grammar) {
            Err(e) => {
                println!("construction failed: {e}");
            }
            Ok(automaton) => {
                println!("{} states", automaton.states().len());
                print!("{}", print_table(&automaton));
                print!("{}", print_states(&automaton));

                for &(word, expected) in example.checks {
                    let accepted = automaton.accepts(word)?;
                    let status = if accepted == expected { "ok" } else { "FAIL" };
                    println!(
                        "  [{status}] accepts({word:?}) = {accepted}, expected {expected}"
                    );
                }
            }
        }

        println!();
    }

    // spec.md §8 scenario 5: recognizing a symbol outside the grammar is
    // a hard error, distinct from rejection.
    let grammar = Grammar::parse(
        &["2", "S -> aB", "B -> b | bc"]
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>(),
    )?;
    let automaton = LrAutomaton::build(grammar)?;
    match automaton.accepts("az") {
        Err(e) => println!("accepts(\"az\") correctly failed: {e}"),
        Ok(_) => println!("accepts(\"az\") unexpectedly succeeded"),
    }

    Ok(())
}
