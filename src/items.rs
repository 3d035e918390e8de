//! LR(1) item sets: CLOSURE, GOTO, and the canonical collection.
//!
//! Grounded on the teacher crate's `slr1.rs` `Item`/`closure`/`goto`/
//! `build_lr0_automaton` shape (same worklist-driven discovery via
//! `VecDeque`, same "reuse existing state by equality" rule), generalized
//! from LR(0) items to LR(1) items that carry a lookahead terminal.

use crate::grammar::{Grammar, Production};
use crate::nullability_first::{first_seq, FirstSets, Nullable};
use crate::symbol::Symbol;
use std::collections::{HashMap, HashSet, VecDeque};

/// An LR(1) item: a production (by index), a dot position within its
/// rhs, and a single-terminal lookahead.
///
/// `Ord` is lexicographic over `(rule, dot, lookahead)` — the order
/// `#[derive(Ord)]` gives for free from field declaration order — and is
/// what canonicalizes a state's item sequence for set-identity
/// comparison across states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    pub rule: usize,
    pub dot: usize,
    pub lookahead: Symbol,
}

impl Item {
    pub fn new(rule: usize, dot: usize, lookahead: Symbol) -> Self {
        Self {
            rule,
            dot,
            lookahead,
        }
    }
}

/// A sorted, deduplicated sequence of items — a state of the canonical
/// collection. Two states are the same iff their `ItemSet`s are equal.
pub type ItemSet = Vec<Item>;

/// The productions CLOSURE/GOTO can dot into: the grammar's own rules,
/// indexed 0..R-1 exactly as [`Grammar::index_of`], plus the augmented
/// start rule `S' → S` appended at index R. The grammar itself is never
/// mutated to hold this extra rule — it is a constructor-only fiction.
pub struct RuleTable {
    rules: Vec<Production>,
    augmented_start: Symbol,
}

impl RuleTable {
    pub fn new(grammar: &Grammar) -> Self {
        let augmented_start = Symbol::AUGMENTED_START;
        let mut rules = grammar.all_productions().to_vec();
        rules.push(Production::new(
            augmented_start,
            vec![grammar.start_symbol()],
        ));
        Self {
            rules,
            augmented_start,
        }
    }

    pub fn get(&self, rule: usize) -> &Production {
        &self.rules[rule]
    }

    pub fn rhs(&self, rule: usize) -> &[Symbol] {
        self.rules[rule].rhs_symbols()
    }

    pub fn augmented_rule_index(&self) -> usize {
        self.rules.len() - 1
    }

    pub fn augmented_start(&self) -> Symbol {
        self.augmented_start
    }

    fn symbol_after_dot(&self, item: &Item) -> Option<Symbol> {
        self.rhs(item.rule).get(item.dot).copied()
    }
}

/// CLOSURE(I): saturates `seed` with predicted items.
///
/// For every item `[A → α·Bβ, a]` in the current set where B is a
/// nonterminal, for every production `B → γ`, for every terminal b in
/// `first_seq(β·a)`, adds `[B → ·γ, b]`. Memoizes already-expanded
/// `(nonterminal, lookahead)` pairs — an optimization, not part of the
/// contract — so an alternative of B is never re-scanned for a lookahead
/// it has already produced items for.
pub fn closure(
    grammar: &Grammar,
    rules: &RuleTable,
    nullable: &Nullable,
    first_nt: &FirstSets,
    seed: Vec<Item>,
) -> ItemSet {
    let mut items: HashSet<Item> = seed.iter().copied().collect();
    let mut worklist: VecDeque<Item> = seed.into_iter().collect();
    let mut expanded: HashSet<(Symbol, Symbol)> = HashSet::new();

    while let Some(item) = worklist.pop_front() {
        let Some(b) = rules.symbol_after_dot(&item) else {
            continue;
        };
        if !b.is_nonterminal() {
            continue;
        }

        let beta = &rules.rhs(item.rule)[item.dot + 1..];
        let mut lookahead_seq = beta.to_vec();
        lookahead_seq.push(item.lookahead);
        let lookaheads = first_seq(first_nt, nullable, &lookahead_seq);

        for lookahead in lookaheads {
            if !expanded.insert((b, lookahead)) {
                continue;
            }
            for production in grammar.rules_for(b) {
                let rule_index = grammar
                    .index_of(production)
                    .expect("production came from this grammar");
                let new_item = Item::new(rule_index, 0, lookahead);
                if items.insert(new_item) {
                    worklist.push_back(new_item);
                }
            }
        }
    }

    let mut result: ItemSet = items.into_iter().collect();
    result.sort();
    result
}

/// GOTO(I, X): items of `state` with the dot moved past `X`, closed.
/// Empty if no item in `state` has the dot immediately before `X`.
pub fn goto(
    grammar: &Grammar,
    rules: &RuleTable,
    nullable: &Nullable,
    first_nt: &FirstSets,
    state: &[Item],
    symbol: Symbol,
) -> ItemSet {
    let moved: Vec<Item> = state
        .iter()
        .filter(|item| rules.symbol_after_dot(item) == Some(symbol))
        .map(|item| Item::new(item.rule, item.dot + 1, item.lookahead))
        .collect();

    if moved.is_empty() {
        return Vec::new();
    }

    closure(grammar, rules, nullable, first_nt, moved)
}

/// The canonical collection of LR(1) item sets plus the transitions
/// discovered alongside it.
pub struct Collection {
    pub states: Vec<ItemSet>,
    pub transitions: HashMap<(usize, Symbol), usize>,
}

/// Breadth-first enumeration of the canonical collection: state 0 is
/// `CLOSURE({[S' → ·S, $]})`; for each discovered state, for each symbol
/// in the grammar's declared order, GOTO is computed and either reuses
/// an existing state (by sorted item-sequence equality) or is appended
/// as a new one.
pub fn build_canonical_collection(
    grammar: &Grammar,
    rules: &RuleTable,
    nullable: &Nullable,
    first_nt: &FirstSets,
) -> Collection {
    let start_item = Item::new(rules.augmented_rule_index(), 0, Symbol::EndMarker);
    let start_state = closure(grammar, rules, nullable, first_nt, vec![start_item]);

    let mut states = vec![start_state];
    let mut transitions: HashMap<(usize, Symbol), usize> = HashMap::new();
    let mut worklist: VecDeque<usize> = VecDeque::from([0]);

    while let Some(state_id) = worklist.pop_front() {
        let state = states[state_id].clone();

        for &symbol in grammar.all_symbols() {
            let next = goto(grammar, rules, nullable, first_nt, &state, symbol);
            if next.is_empty() {
                continue;
            }

            let target = if let Some(existing_id) = states.iter().position(|s| s == &next) {
                existing_id
            } else {
                let new_id = states.len();
                states.push(next);
                worklist.push_back(new_id);
                new_id
            };

            transitions.insert((state_id, symbol), target);
        }
    }

    Collection {
        states,
        transitions,
    }
}
