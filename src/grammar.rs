//! Grammar module for context-free grammars.
//!
//! This module provides data structures and parsing logic for working with
//! context-free grammars, including productions and grammar representation.

use crate::error::{LrError, Result};
use crate::symbol::{string_to_symbols, symbols_to_string, Symbol};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A production rule in a context-free grammar.
///
/// Represents a rule of the form: LHS → RHS
/// where LHS is a single nonterminal and RHS is a (possibly empty)
/// sequence of symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    /// Left-hand side (always a nonterminal)
    pub lhs: Symbol,
    /// Right-hand side (sequence of symbols, empty for an ε-production)
    pub rhs: Vec<Symbol>,
}

impl Production {
    /// Creates a new production.
    pub fn new(lhs: Symbol, rhs: Vec<Symbol>) -> Self {
        Self { lhs, rhs }
    }

    /// The rhs with a leading/standalone [`Symbol::Epsilon`] collapsed to
    /// an empty slice, so callers never need to special-case the two
    /// textual spellings of an ε-production.
    pub fn rhs_symbols(&self) -> &[Symbol] {
        if self.rhs == [Symbol::Epsilon] {
            &[]
        } else {
            &self.rhs
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rhs_str = if self.rhs_symbols().is_empty() {
            "ε".to_string()
        } else {
            symbols_to_string(self.rhs_symbols())
        };
        write!(f, "{} -> {}", self.lhs, rhs_str)
    }
}

/// A context-free grammar.
///
/// Contains all productions, symbols, and provides methods for grammar
/// analysis. Immutable once built.
#[derive(Debug, Clone)]
pub struct Grammar {
    /// All productions in the grammar, indexed 0..R-1 in insertion order.
    productions: Vec<Production>,
    /// All nonterminal symbols
    nonterminals: HashSet<Symbol>,
    /// All terminal symbols
    terminals: HashSet<Symbol>,
    /// The start symbol
    start_symbol: Symbol,
    /// Map from nonterminals to their productions, order-preserving.
    production_map: HashMap<Symbol, Vec<Production>>,
    /// Terminals then nonterminals, in declaration order — the order the
    /// item-set constructor iterates successor edges in.
    symbol_order: Vec<Symbol>,
}

impl Grammar {
    /// Builds a grammar directly from its components (the programmatic
    /// construction API), without going through textual ingestion.
    pub fn from_productions(
        terminals: Vec<Symbol>,
        nonterminals: Vec<Symbol>,
        start_symbol: Symbol,
        productions: Vec<Production>,
    ) -> Result<Self> {
        if productions.is_empty() {
            return Err(LrError::EmptyInput);
        }

        for symbol in terminals.iter().chain(nonterminals.iter()) {
            if symbol.is_reserved() {
                return Err(LrError::ReservedSymbolUsed {
                    symbol: symbol.to_string(),
                });
            }
        }

        let terminals_set: HashSet<Symbol> = terminals.iter().copied().collect();
        let nonterminals_set: HashSet<Symbol> = nonterminals.iter().copied().collect();

        for production in &productions {
            if !nonterminals_set.contains(&production.lhs) {
                return Err(LrError::InvalidProduction(format!(
                    "lhs '{}' is not a declared nonterminal",
                    production.lhs
                )));
            }
            for symbol in production.rhs_symbols() {
                if !terminals_set.contains(symbol) && !nonterminals_set.contains(symbol) {
                    return Err(LrError::InvalidProduction(format!(
                        "symbol '{}' in rhs of '{}' is neither terminal nor nonterminal",
                        symbol, production
                    )));
                }
            }
        }

        if !nonterminals_set.contains(&start_symbol) {
            return Err(LrError::InvalidProduction(format!(
                "start symbol '{}' is not a declared nonterminal",
                start_symbol
            )));
        }

        let mut production_map: HashMap<Symbol, Vec<Production>> = HashMap::new();
        for production in &productions {
            production_map
                .entry(production.lhs)
                .or_default()
                .push(production.clone());
        }

        let mut symbol_order = terminals;
        symbol_order.extend(nonterminals);

        Ok(Self {
            productions,
            nonterminals: nonterminals_set,
            terminals: terminals_set,
            start_symbol,
            production_map,
            symbol_order,
        })
    }

    /// Parses a grammar from input lines.
    ///
    /// # Format
    /// - First line: number of nonterminals (n)
    /// - Next n lines: productions in format "A -> alpha beta gamma" or
    ///   "A -> alpha | beta | gamma", where alpha, beta, gamma are
    ///   alternative right-hand sides; "e" denotes an ε-production.
    /// - The start symbol is the lhs of the grammar's first line.
    pub fn parse(lines: &[String]) -> Result<Self> {
        if lines.is_empty() {
            return Err(LrError::EmptyInput);
        }

        let n = lines[0]
            .trim()
            .parse::<usize>()
            .map_err(|e| LrError::InvalidFormat(format!("Invalid number: {}", e)))?;

        if lines.len() < n + 1 {
            return Err(LrError::NotEnoughProductions {
                expected: n,
                actual: lines.len() - 1,
            });
        }

        let mut all_productions = Vec::new();
        let mut start_symbol = None;

        for line in &lines[1..=n] {
            let productions = Self::parse_production_line(line)?;
            if start_symbol.is_none() {
                start_symbol = productions.first().map(|p| p.lhs);
            }
            all_productions.extend(productions);
        }

        let start_symbol = start_symbol.ok_or(LrError::EmptyInput)?;
        Self::from_parsed_productions(all_productions, start_symbol)
    }

    /// Parses a single production line.
    ///
    /// Format: "A -> alpha beta gamma" or "A -> alpha | beta | gamma".
    /// Returns one production per alternative.
    fn parse_production_line(line: &str) -> Result<Vec<Production>> {
        let parts: Vec<&str> = line.split("->").collect();
        if parts.len() != 2 {
            return Err(LrError::InvalidProduction(line.to_string()));
        }

        let lhs_str = parts[0].trim();
        if lhs_str.is_empty() {
            return Err(LrError::InvalidProduction(
                "Empty left-hand side".to_string(),
            ));
        }

        let lhs = Symbol::from_char(lhs_str.chars().next().unwrap());
        if lhs.is_reserved() {
            return Err(LrError::ReservedSymbolUsed {
                symbol: lhs.to_string(),
            });
        }

        let rhs_str = parts[1].trim();
        let alternatives: Vec<&str> = if rhs_str.contains('|') {
            rhs_str.split('|').map(str::trim).collect()
        } else {
            rhs_str.split_whitespace().collect()
        };

        if alternatives.is_empty() {
            return Err(LrError::InvalidProduction(format!(
                "no right-hand side given for '{}'",
                line.trim()
            )));
        }

        let mut productions = Vec::new();
        for alt in alternatives {
            let rhs = string_to_symbols(alt);
            for symbol in &rhs {
                if symbol.is_reserved() {
                    return Err(LrError::ReservedSymbolUsed {
                        symbol: symbol.to_string(),
                    });
                }
            }
            productions.push(Production::new(lhs, rhs));
        }

        Ok(productions)
    }

    /// Infers terminals/nonterminals from a flat production list parsed
    /// from text and delegates to [`Grammar::from_productions`].
    fn from_parsed_productions(productions: Vec<Production>, start_symbol: Symbol) -> Result<Self> {
        let lhs_nonterminals: HashSet<Symbol> = productions.iter().map(|p| p.lhs).collect();

        let mut rhs_symbols = HashSet::new();
        for prod in &productions {
            for sym in prod.rhs_symbols() {
                rhs_symbols.insert(*sym);
            }
        }

        let rhs_nonterminals: HashSet<Symbol> = rhs_symbols
            .iter()
            .filter(|s| s.is_nonterminal())
            .copied()
            .collect();

        let nonterminals: HashSet<Symbol> =
            lhs_nonterminals.union(&rhs_nonterminals).copied().collect();

        let terminals: HashSet<Symbol> = rhs_symbols
            .iter()
            .filter(|s| s.is_terminal())
            .copied()
            .collect();

        let mut nonterminals_ordered: Vec<Symbol> = nonterminals.iter().copied().collect();
        nonterminals_ordered.sort();
        let mut terminals_ordered: Vec<Symbol> = terminals.iter().copied().collect();
        terminals_ordered.sort();

        Self::from_productions(terminals_ordered, nonterminals_ordered, start_symbol, productions)
    }

    /// Returns all productions for a given nonterminal, in declaration
    /// order.
    pub fn rules_for(&self, nt: Symbol) -> &[Production] {
        self.production_map
            .get(&nt)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Returns all productions in the grammar.
    pub fn all_productions(&self) -> &[Production] {
        &self.productions
    }

    /// Returns the 0-based index of `rule` among [`Grammar::all_productions`],
    /// or `None` if it is not part of this grammar. This is the index
    /// `Reduce` actions carry.
    pub fn index_of(&self, rule: &Production) -> Option<usize> {
        self.productions.iter().position(|p| p == rule)
    }

    /// Returns all nonterminals in the grammar.
    pub fn nonterminals(&self) -> &HashSet<Symbol> {
        &self.nonterminals
    }

    /// Returns all terminals in the grammar.
    pub fn terminals(&self) -> &HashSet<Symbol> {
        &self.terminals
    }

    /// True if `x` is classified as a terminal by this grammar (total on
    /// the two non-atom symbols `Epsilon`/`EndMarker`, which answer
    /// `false`).
    pub fn is_terminal(&self, x: Symbol) -> bool {
        self.terminals.contains(&x)
    }

    /// Returns the start symbol.
    pub fn start_symbol(&self) -> Symbol {
        self.start_symbol
    }

    /// Terminals then nonterminals, in the declaration order the
    /// canonical-collection construction iterates successor edges in.
    pub fn all_symbols(&self) -> &[Symbol] {
        &self.symbol_order
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prod in &self.productions {
            writeln!(f, "{}", prod)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_grammar() {
        let lines = vec!["2".to_string(), "S -> AB".to_string(), "A -> a".to_string()];

        let grammar = Grammar::parse(&lines).unwrap();
        assert_eq!(grammar.all_productions().len(), 2);
        assert!(grammar.nonterminals().contains(&Symbol::Nonterminal('S')));
        assert!(grammar.terminals().contains(&Symbol::Terminal('a')));
    }

    #[test]
    fn test_parse_alternatives_pipe_syntax() {
        let lines = vec!["1".to_string(), "S -> a | b | c".to_string()];

        let grammar = Grammar::parse(&lines).unwrap();
        assert_eq!(grammar.all_productions().len(), 3);
    }

    #[test]
    fn test_parse_alternatives_space_syntax() {
        let lines = vec!["1".to_string(), "S -> a b c".to_string()];

        let grammar = Grammar::parse(&lines).unwrap();
        assert_eq!(grammar.all_productions().len(), 3);
    }

    #[test]
    fn test_reserved_symbol_rejected() {
        let lines = vec!["1".to_string(), "S -> $".to_string()];
        assert!(Grammar::parse(&lines).is_err());
    }

    #[test]
    fn test_zero_declared_nonterminals_is_an_error_not_a_panic() {
        let lines = vec!["0".to_string()];
        assert!(matches!(Grammar::parse(&lines), Err(LrError::EmptyInput)));
    }

    #[test]
    fn test_blank_rhs_is_an_error_not_a_panic() {
        let lines = vec!["1".to_string(), "S -> ".to_string()];
        assert!(matches!(
            Grammar::parse(&lines),
            Err(LrError::InvalidProduction(_))
        ));
    }

    #[test]
    fn test_index_of_rule() {
        let lines = vec!["1".to_string(), "S -> a | b".to_string()];
        let grammar = Grammar::parse(&lines).unwrap();
        let second = grammar.all_productions()[1].clone();
        assert_eq!(grammar.index_of(&second), Some(1));
    }
}
