//! Nullability and FIRST-set computation for context-free grammars.
//!
//! Implements the two constructions LR(1) item closure depends on:
//! nullability (ε-derivability) of each nonterminal, and FIRST, computed
//! here not by naive per-rule fixed-point iteration but by building a
//! "may-begin-with" graph and taking its transitive closure — see
//! [`compute_first_nt`] for the two passes.

use crate::grammar::Grammar;
use crate::symbol::Symbol;
use std::collections::{HashMap, HashSet};

/// Nullability of every nonterminal: does it derive the empty string?
pub type Nullable = HashMap<Symbol, bool>;

/// FIRST(A) for every nonterminal A: the terminals that can begin a
/// string A derives, plus `$` if A is nullable.
pub type FirstSets = HashMap<Symbol, HashSet<Symbol>>;

/// Computes nullability as the least fixed point of:
/// - `nullable(A) := true` if `A → ε` is a production.
/// - `nullable(A) := true` if some `A → X₁…Xₙ` has every `Xᵢ` a nullable
///   nonterminal.
pub fn compute_nullable(grammar: &Grammar) -> Nullable {
    let mut nullable: Nullable = grammar.nonterminals().iter().map(|nt| (*nt, false)).collect();

    let mut changed = true;
    while changed {
        changed = false;

        for production in grammar.all_productions() {
            if nullable[&production.lhs] {
                continue;
            }
            let rhs = production.rhs_symbols();
            let derives_empty = rhs.is_empty()
                || rhs
                    .iter()
                    .all(|sym| sym.is_nonterminal() && nullable[sym]);

            if derives_empty {
                nullable.insert(production.lhs, true);
                changed = true;
            }
        }
    }

    nullable
}

/// Computes FIRST(A) for every nonterminal A via the two-pass
/// direct-terminal + may-begin-with-graph construction:
///
/// 1. For each production `A → X₁…Xₙ`, scan left to right: if `Xᵢ` is
///    terminal, record it as a direct terminal of `A` and stop; else
///    record an edge `A → Xᵢ` in the may-begin-with graph, and stop
///    scanning once `Xᵢ` is not nullable.
/// 2. For each nonterminal `A`, traverse the may-begin-with graph from
///    `A`, accumulating the direct terminals of every reachable node
///    into `FIRST(A)`. Add `$` if `A` is nullable.
pub fn compute_first_nt(grammar: &Grammar, nullable: &Nullable) -> FirstSets {
    let mut direct_terminals: HashMap<Symbol, HashSet<Symbol>> = HashMap::new();
    let mut may_begin_with: HashMap<Symbol, HashSet<Symbol>> = HashMap::new();

    for nt in grammar.nonterminals() {
        direct_terminals.entry(*nt).or_default();
        may_begin_with.entry(*nt).or_default();
    }

    for production in grammar.all_productions() {
        for symbol in production.rhs_symbols() {
            if symbol.is_terminal() {
                direct_terminals
                    .entry(production.lhs)
                    .or_default()
                    .insert(*symbol);
                break;
            }
            // symbol is a nonterminal (rhs only ever contains T ∪ N).
            may_begin_with
                .entry(production.lhs)
                .or_default()
                .insert(*symbol);
            if !nullable[symbol] {
                break;
            }
        }
    }

    let mut first_nt: FirstSets = HashMap::new();
    for nt in grammar.nonterminals() {
        let mut reached: HashSet<Symbol> = HashSet::new();
        let mut stack = vec![*nt];
        let mut first = HashSet::new();

        while let Some(current) = stack.pop() {
            if !reached.insert(current) {
                continue;
            }
            if let Some(terms) = direct_terminals.get(&current) {
                first.extend(terms.iter().copied());
            }
            if let Some(edges) = may_begin_with.get(&current) {
                stack.extend(edges.iter().copied());
            }
        }

        if nullable[nt] {
            first.insert(Symbol::EndMarker);
        }

        first_nt.insert(*nt, first);
    }

    first_nt
}

/// FIRST of a symbol sequence, scanned left to right:
/// - terminal `x` → add `x` and stop.
/// - `$` → add `$` and stop.
/// - nonterminal `A` → add `FIRST(A) \ {$}`; continue iff `A` is
///   nullable, else stop.
/// - sequence exhausted while still scanning → add `$`.
pub fn first_seq(first_nt: &FirstSets, nullable: &Nullable, symbols: &[Symbol]) -> HashSet<Symbol> {
    let mut result = HashSet::new();

    for symbol in symbols {
        match symbol {
            Symbol::Terminal(_) => {
                result.insert(*symbol);
                return result;
            }
            Symbol::EndMarker => {
                result.insert(*symbol);
                return result;
            }
            Symbol::Nonterminal(_) => {
                if let Some(first) = first_nt.get(symbol) {
                    result.extend(first.iter().copied().filter(|s| !s.is_end_marker()));
                }
                if !nullable.get(symbol).copied().unwrap_or(false) {
                    return result;
                }
            }
            Symbol::Epsilon => {
                // Epsilon never appears mid-sequence in a well-formed rhs;
                // skip it rather than treat it as a stop condition.
            }
        }
    }

    result.insert(Symbol::EndMarker);
    result
}
