//! Human-readable dumps of a built automaton: the ACTION/GOTO table and
//! the canonical collection of states, per spec.md §6.
//!
//! Grounded on the teacher crate's existing `Display` impls for
//! `Grammar`/`Production` (same plain-text, one-row/one-line-per-entry
//! style), generalized to a table and an item-set dump since a built
//! automaton needs two independent views rather than one.

use crate::items::Item;
use crate::symbol::{symbols_to_string, Symbol};
use crate::table::{Action, LrAutomaton};
use std::fmt::Write as _;

/// One row per state, one column per symbol in `(T ∪ N ∪ {$})` in
/// grammar-declared order; cells are `s(k)` for Shift, `r(k)` for
/// Reduce, `acc` for Accept, blank for Error.
pub fn print_table(automaton: &LrAutomaton) -> String {
    let columns: Vec<Symbol> = automaton
        .grammar()
        .all_symbols()
        .iter()
        .copied()
        .chain(std::iter::once(Symbol::EndMarker))
        .collect();

    let mut out = String::new();
    let _ = write!(out, "state");
    for symbol in &columns {
        let _ = write!(out, "\t{symbol}");
    }
    let _ = writeln!(out);

    for (state_id, _) in automaton.states().iter().enumerate() {
        let _ = write!(out, "{state_id}");
        for symbol in &columns {
            let cell = automaton
                .action_table()
                .get(&(state_id, *symbol))
                .map(Action::to_string)
                .unwrap_or_default();
            let _ = write!(out, "\t{cell}");
        }
        let _ = writeln!(out);
    }

    out
}

/// For each state i: its sorted items `A -> α.β, a`, followed by its
/// outgoing edges `(target, symbol)`.
pub fn print_states(automaton: &LrAutomaton) -> String {
    let mut out = String::new();

    for (state_id, state) in automaton.states().iter().enumerate() {
        let _ = writeln!(out, "State {state_id}:");
        for item in state {
            let _ = writeln!(out, "  {}", format_item(automaton, item));
        }

        let mut edges: Vec<(&Symbol, &usize)> = automaton
            .transitions()
            .iter()
            .filter(|((src, _), _)| *src == state_id)
            .map(|((_, symbol), target)| (symbol, target))
            .collect();
        edges.sort_by_key(|(symbol, _)| **symbol);

        for (symbol, target) in edges {
            let _ = writeln!(out, "  -> ({target}, {symbol})");
        }
    }

    out
}

fn format_item(automaton: &LrAutomaton, item: &Item) -> String {
    let production = automaton.rules().get(item.rule);
    let rhs = production.rhs_symbols();

    let mut rhs_with_dot = String::new();
    if rhs.is_empty() {
        rhs_with_dot.push('.');
    } else {
        for (i, symbol) in rhs.iter().enumerate() {
            if i == item.dot {
                rhs_with_dot.push('.');
            }
            rhs_with_dot.push_str(&symbols_to_string(std::slice::from_ref(symbol)));
        }
        if item.dot == rhs.len() {
            rhs_with_dot.push('.');
        }
    }

    format!(
        "{} -> {}, {}",
        production.lhs, rhs_with_dot, item.lookahead
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;
    use crate::table::LrAutomaton;

    #[test]
    fn table_dump_has_one_row_per_state() {
        let lines = vec!["2".to_string(), "S -> aB".to_string(), "B -> b | bc".to_string()];
        let grammar = Grammar::parse(&lines).unwrap();
        let automaton = LrAutomaton::build(grammar).unwrap();

        let dump = print_table(&automaton);
        assert_eq!(dump.lines().count(), automaton.states().len() + 1);
    }

    #[test]
    fn states_dump_mentions_every_state() {
        let lines = vec!["2".to_string(), "S -> aB".to_string(), "B -> b | bc".to_string()];
        let grammar = Grammar::parse(&lines).unwrap();
        let automaton = LrAutomaton::build(grammar).unwrap();

        let dump = print_states(&automaton);
        for state_id in 0..automaton.states().len() {
            assert!(dump.contains(&format!("State {state_id}:")));
        }
    }
}
