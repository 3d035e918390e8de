//! Integration tests matching the six concrete end-to-end scenarios of
//! the LR(1) construction's specification.

use lr1_parser::error::LrError;
use lr1_parser::grammar::Grammar;
use lr1_parser::table::LrAutomaton;

fn build(lines: &[&str]) -> lr1_parser::Result<LrAutomaton> {
    let lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
    let grammar = Grammar::parse(&lines)?;
    LrAutomaton::build(grammar)
}

/// Scenario 1: balanced parens, `S -> SS | (S) | x`, is ambiguous and
/// must fail construction.
#[test]
fn scenario1_balanced_parens_is_not_lr1() {
    let result = build(&["1", "S -> SS | (S) | x"]);
    assert!(
        matches!(result, Err(LrError::NotLr1 { .. })),
        "S -> SS | (S) | x should not be LR(1)"
    );
}

/// Scenario 2: prefix grammar `S -> aB`, `B -> b | bc`.
#[test]
fn scenario2_prefix_grammar() {
    let automaton = build(&["2", "S -> aB", "B -> b | bc"]).unwrap();

    assert!(!automaton.accepts("a").unwrap());
    assert!(automaton.accepts("ab").unwrap());
    assert!(automaton.accepts("abc").unwrap());
    assert!(!automaton.accepts("bc").unwrap());
    assert!(!automaton.accepts("b").unwrap());
}

/// Scenario 3: `S -> CC`, `C -> cC | d`.
#[test]
fn scenario3_c_then_d() {
    let automaton = build(&["2", "S -> CC", "C -> cC | d"]).unwrap();

    assert!(automaton.accepts("dcd").unwrap());
    assert!(automaton.accepts("dd").unwrap());
    assert!(!automaton.accepts("cdcdd").unwrap());
    assert!(!automaton.accepts("ccc").unwrap());
    assert!(!automaton.accepts("ccccdcdd").unwrap());
    assert!(automaton.accepts("cccdccccd").unwrap());
    assert!(!automaton.accepts("cddd").unwrap());
}

/// Scenario 4: mixed nullability, `S -> ac | bDc | Da`, `D -> a`.
#[test]
fn scenario4_mixed_nullability() {
    let automaton = build(&["2", "S -> ac | bDc | Da", "D -> a"]).unwrap();

    assert!(automaton.accepts("ac").unwrap());
    assert!(automaton.accepts("aa").unwrap());
    assert!(automaton.accepts("bac").unwrap());
    assert!(!automaton.accepts("aac").unwrap());
    assert!(!automaton.accepts("bb").unwrap());
    assert!(!automaton.accepts("baac").unwrap());
    assert!(!automaton.accepts("aaa").unwrap());
}

/// Scenario 5: recognizing a symbol outside the grammar is a hard
/// error, distinct from rejection.
#[test]
fn scenario5_illegal_symbol_is_an_error() {
    let automaton = build(&["2", "S -> aB", "B -> b | bc"]).unwrap();

    let result = automaton.accepts("az");
    assert!(matches!(result, Err(LrError::SymbolNotInGrammar { .. })));
}

/// Scenario 6: nullable start, `S -> ε | x`. The chosen resolution
/// (recorded in DESIGN.md) is that the two alternatives have disjoint
/// lookaheads and the grammar is LR(1).
#[test]
fn scenario6_nullable_start() {
    let automaton = build(&["1", "S -> e | x"]).unwrap();

    assert!(automaton.accepts("").unwrap());
    assert!(automaton.accepts("x").unwrap());
    assert!(!automaton.accepts("xx").unwrap());
}

/// Recognizing the empty string accepts iff the start symbol is
/// nullable (spec.md §8 invariant).
#[test]
fn empty_string_acceptance_matches_start_nullability() {
    let nullable_start = build(&["1", "S -> e | x"]).unwrap();
    assert!(nullable_start.accepts("").unwrap());

    let non_nullable_start = build(&["2", "S -> aB", "B -> b | bc"]).unwrap();
    assert!(!non_nullable_start.accepts("").unwrap());
}

/// Building the same grammar twice yields automata with the same
/// number of states and an equivalent ACTION/GOTO table.
#[test]
fn construction_is_deterministic() {
    let lines = ["2", "S -> CC", "C -> cC | d"];
    let first = build(&lines).unwrap();
    let second = build(&lines).unwrap();

    assert_eq!(first.states().len(), second.states().len());
    assert_eq!(first.action_table().len(), second.action_table().len());
}
