//! ACTION/GOTO table construction and the shift/reduce/accept/error
//! recognizer driver.
//!
//! Grounded on the teacher crate's `SLR1Parser::build_tables` and
//! `SLR1Parser::parse` (same `HashMap<(usize, Symbol), Action>` table
//! shape, same stack-of-states-plus-stack-of-symbols parse loop),
//! generalized from FOLLOW-set-keyed SLR(1) reduces to per-item
//! lookahead-keyed LR(1) reduces.

use crate::error::{LrError, Result};
use crate::grammar::Grammar;
use crate::items::{build_canonical_collection, Item, ItemSet, RuleTable};
use crate::nullability_first::{compute_first_nt, compute_nullable};
use crate::symbol::{string_to_symbols, Symbol};
use std::collections::HashMap;
use std::fmt;

/// One ACTION cell. Absence of an entry in the table is `Error`; a
/// single table stores both the ACTION columns (terminals + `$`) and the
/// GOTO columns (nonterminals, always `Shift`) since the two are never
/// addressed with the same class of symbol by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shift(usize),
    Reduce(usize),
    Accept,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Shift(s) => write!(f, "s({s})"),
            Action::Reduce(r) => write!(f, "r({r})"),
            Action::Accept => write!(f, "acc"),
        }
    }
}

/// The constructed LR(1) automaton: canonical collection, ACTION/GOTO
/// table, and the grammar it was built from. Immutable once built — safe
/// to share across concurrent `accepts` calls, each of which keeps its
/// own local parse stack.
pub struct LrAutomaton {
    grammar: Grammar,
    rules: RuleTable,
    states: Vec<ItemSet>,
    transitions: HashMap<(usize, Symbol), usize>,
    action_table: HashMap<(usize, Symbol), Action>,
}

impl LrAutomaton {
    /// Builds the canonical LR(1) automaton for `grammar`. Fails with
    /// [`LrError::NotLr1`] if populating the table would require writing
    /// a conflicting entry.
    pub fn build(grammar: Grammar) -> Result<Self> {
        let nullable = compute_nullable(&grammar);
        let first_nt = compute_first_nt(&grammar, &nullable);
        let rules = RuleTable::new(&grammar);
        let collection = build_canonical_collection(&grammar, &rules, &nullable, &first_nt);

        let action_table = populate_table(&rules, &collection.states, &collection.transitions)?;

        Ok(Self {
            grammar,
            rules,
            states: collection.states,
            transitions: collection.transitions,
            action_table,
        })
    }

    /// Decides whether `word` (a string over the grammar's terminals) is
    /// accepted. Fails with [`LrError::SymbolNotInGrammar`] if `word`
    /// contains a symbol not classified as a terminal; never fails for
    /// an input merely not accepted by the grammar (that returns
    /// `Ok(false)`).
    pub fn accepts(&self, word: &str) -> Result<bool> {
        let symbols = string_to_symbols(word);
        for symbol in &symbols {
            if !self.grammar.is_terminal(*symbol) {
                return Err(LrError::SymbolNotInGrammar {
                    symbol: symbol.to_string(),
                });
            }
        }

        let mut input = symbols;
        input.push(Symbol::EndMarker);

        let mut states: Vec<usize> = vec![0];
        let mut symbols_stack: Vec<Symbol> = Vec::new();
        let mut cursor = 0;

        loop {
            let state = *states.last().expect("parse stack is never empty");
            let current = input[cursor];

            match self.action_table.get(&(state, current)) {
                None => return Ok(false),
                Some(Action::Accept) => return Ok(true),
                Some(Action::Shift(next)) => {
                    states.push(*next);
                    symbols_stack.push(current);
                    cursor += 1;
                }
                Some(Action::Reduce(rule_index)) => {
                    let rule = &self.grammar.all_productions()[*rule_index];
                    let pop_count = rule.rhs_symbols().len();
                    for _ in 0..pop_count {
                        states.pop();
                        symbols_stack.pop();
                    }

                    let state_after_pop = *states.last().expect("parse stack is never empty");
                    match self.action_table.get(&(state_after_pop, rule.lhs)) {
                        Some(Action::Shift(goto_state)) => {
                            states.push(*goto_state);
                            symbols_stack.push(rule.lhs);
                        }
                        _ => return Ok(false),
                    }
                }
            }
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn states(&self) -> &[ItemSet] {
        &self.states
    }

    pub fn transitions(&self) -> &HashMap<(usize, Symbol), usize> {
        &self.transitions
    }

    pub fn action_table(&self) -> &HashMap<(usize, Symbol), Action> {
        &self.action_table
    }
}

/// Populates the ACTION/GOTO table from the canonical collection,
/// following spec.md §4.4's population rules:
/// - `[A → α·, a]`, `A ≠ S'` → `ACTION[i, a] = Reduce(rule index)`.
/// - `[S' → S·, $]` → `ACTION[i, $] = Accept`.
/// - `[A → α·xβ, a]`, `x` terminal → `ACTION[i, x] = Shift(goto)`.
/// - nonterminal transitions `(i, B)` → `ACTION[i, B] = Shift(goto)`.
fn populate_table(
    rules: &RuleTable,
    states: &[ItemSet],
    transitions: &HashMap<(usize, Symbol), usize>,
) -> Result<HashMap<(usize, Symbol), Action>> {
    let mut action_table: HashMap<(usize, Symbol), Action> = HashMap::new();

    for (state_id, state) in states.iter().enumerate() {
        for item in state {
            populate_item(rules, transitions, state_id, item, &mut action_table)?;
        }

        for (&(src, symbol), &target) in transitions {
            if src == state_id && symbol.is_nonterminal() {
                set_cell(&mut action_table, state_id, symbol, Action::Shift(target))?;
            }
        }
    }

    Ok(action_table)
}

fn populate_item(
    rules: &RuleTable,
    transitions: &HashMap<(usize, Symbol), usize>,
    state_id: usize,
    item: &Item,
    action_table: &mut HashMap<(usize, Symbol), Action>,
) -> Result<()> {
    let rhs = rules.rhs(item.rule);

    if item.dot < rhs.len() {
        let x = rhs[item.dot];
        if x.is_terminal() {
            if let Some(&next) = transitions.get(&(state_id, x)) {
                set_cell(action_table, state_id, x, Action::Shift(next))?;
            }
        }
        return Ok(());
    }

    if rules.get(item.rule).lhs == rules.augmented_start() {
        set_cell(action_table, state_id, Symbol::EndMarker, Action::Accept)?;
    } else {
        set_cell(
            action_table,
            state_id,
            item.lookahead,
            Action::Reduce(item.rule),
        )?;
    }

    Ok(())
}

/// Writes `action` into `(state, symbol)`, failing with
/// [`LrError::NotLr1`] if a different action is already there. Writing
/// the same action twice is idempotent and permitted.
fn set_cell(
    table: &mut HashMap<(usize, Symbol), Action>,
    state: usize,
    symbol: Symbol,
    action: Action,
) -> Result<()> {
    match table.get(&(state, symbol)) {
        Some(existing) if *existing != action => Err(LrError::NotLr1 {
            state,
            first: existing.to_string(),
            second: action.to_string(),
        }),
        Some(_) => Ok(()),
        None => {
            table.insert((state, symbol), action);
            Ok(())
        }
    }
}
