//! Parser turning expression text into a flat, parenthesis-nested tree.
//!
//! Each parenthesized level keeps its terms and the operators between them
//! in source order; precedence is resolved afterwards by
//! [`group`][crate::group::group].
//!
//! The parser is driven by the grammar transition table of
//! [`Grammar::expected`]: every token's category must be allowed after the
//! previous token's category, starting from [`Grammar::GroupOpen`].

use std::collections::BTreeSet;

use log::debug;

use crate::ast::Variable;
use crate::error::{LogicError, Result};
use crate::lexer::{Lexer, TokenKind};
use crate::types::{Grammar, Operator, VarLimit};

/// A term of a flat level.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Term {
    Level(Level),
    Variable(Variable),
}

/// One parenthesized level, before precedence grouping.
///
/// # Invariants
///
/// - `terms` is never empty once parsed
/// - `operators.len() == terms.len() - 1`; `operators[i]` joins `terms[i]`
///   and `terms[i + 1]`
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Level {
    pub negate: bool,
    pub terms: Vec<Term>,
    pub operators: Vec<Operator>,
}

impl Level {
    pub fn new(negate: bool) -> Self {
        Self {
            negate,
            ..Default::default()
        }
    }

    /// Distinct operators on this level, in order of first appearance.
    pub fn declared(&self) -> Vec<Operator> {
        let mut declared = Vec::new();
        for &op in &self.operators {
            if !declared.contains(&op) {
                declared.push(op);
            }
        }
        declared
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Parsed {
    pub root: Level,
    /// Distinct referenced variables, ascending.
    pub vars: Vec<u32>,
}

/// Parses `text`, accepting variables in `1..=limit`.
pub fn parse(text: &str, limit: VarLimit) -> Result<Parsed> {
    debug!("parse(text = {:?}, limit = {})", text, limit);

    if text.trim().is_empty() {
        return Err(LogicError::Blank);
    }

    let mut level = Level::new(false);
    let mut stack: Vec<Level> = Vec::new();
    let mut vars = BTreeSet::new();
    let mut last = Grammar::GroupOpen;
    let mut last_position = 0;

    for token in Lexer::new(text) {
        let token = token?;
        let grammar = token.grammar();

        if !last.allows(grammar) {
            return Err(LogicError::UnexpectedGrammar {
                grammar,
                text: token.text,
                position: token.position,
                expected: last.expected(),
            });
        }

        match token.kind {
            TokenKind::GroupOpen { negate } => {
                stack.push(std::mem::replace(&mut level, Level::new(negate)));
            }
            TokenKind::GroupClose => {
                let Some(parent) = stack.pop() else {
                    return Err(LogicError::UnmatchedClose {
                        position: token.position,
                    });
                };
                let child = std::mem::replace(&mut level, parent);
                level.terms.push(Term::Level(child));
            }
            TokenKind::Operator(op) => {
                level.operators.push(op);
            }
            TokenKind::Variable(value) => {
                if !limit.contains(value) {
                    return Err(LogicError::VariableOutOfRange {
                        position: token.position,
                        value,
                        limit,
                    });
                }
                // `contains` bounds the value to `1..=u32::MAX`.
                let index = value as u32;
                vars.insert(index);
                level.terms.push(Term::Variable(Variable::new(index, token.position)));
            }
        }

        last = grammar;
        last_position = token.position;
    }

    // An empty innermost level means the text ended right after an opening
    // paren; that is reported as an unclosed group below.
    if !last.allows(Grammar::GroupClose) && !(level.terms.is_empty() && level.operators.is_empty()) {
        return Err(LogicError::UnexpectedEnd {
            grammar: last,
            position: last_position,
        });
    }

    if !stack.is_empty() {
        return Err(LogicError::UnclosedGroups { count: stack.len() });
    }

    let vars: Vec<u32> = vars.into_iter().collect();
    debug!("parse: vars = {:?}", vars);
    Ok(Parsed { root: level, vars })
}
