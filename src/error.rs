//! Errors raised while building or querying an expression.

use std::fmt;

use crate::types::{Grammar, VarLimit};

/// Broad class of a [`LogicError`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed expression text.
    Syntax,
    /// Variable index outside `1..=limit`.
    Range,
    /// Request too large to serve (truth table over too many variables).
    Capacity,
}

/// Error type for expression parsing and enumeration.
///
/// Positions are 1-based character offsets into the expression text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LogicError {
    /// The expression is empty or whitespace only.
    Blank,
    /// A run of characters that is not a token.
    UnexpectedCharacters { position: usize, text: String },
    /// A token whose category may not follow the previous one.
    UnexpectedGrammar {
        grammar: Grammar,
        text: String,
        position: usize,
        expected: &'static [Grammar],
    },
    /// The expression ends on a token that cannot end it.
    UnexpectedEnd { grammar: Grammar, position: usize },
    /// A `)` without a matching open group.
    UnmatchedClose { position: usize },
    /// Open groups left at the end of the expression.
    UnclosedGroups { count: usize },
    /// A variable index outside the accepted range.
    VariableOutOfRange { position: usize, value: u64, limit: VarLimit },
    /// Truth table requested over more variables than allowed.
    TooManyVariables { count: usize, max: usize },
    /// Truth table requested with assignments longer than allowed.
    AssignmentTooWide { width: u32, max: u32 },
}

impl LogicError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LogicError::VariableOutOfRange { .. } => ErrorKind::Range,
            LogicError::TooManyVariables { .. } | LogicError::AssignmentTooWide { .. } => ErrorKind::Capacity,
            _ => ErrorKind::Syntax,
        }
    }

    /// Returns the 1-based position the error points at, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            LogicError::UnexpectedCharacters { position, .. }
            | LogicError::UnexpectedGrammar { position, .. }
            | LogicError::UnexpectedEnd { position, .. }
            | LogicError::UnmatchedClose { position }
            | LogicError::VariableOutOfRange { position, .. } => Some(*position),
            LogicError::Blank
            | LogicError::UnclosedGroups { .. }
            | LogicError::TooManyVariables { .. }
            | LogicError::AssignmentTooWide { .. } => None,
        }
    }
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicError::Blank => write!(f, "Expression cannot be blank."),
            LogicError::UnexpectedCharacters { position, text } => {
                let plural = if text.chars().count() == 1 { "" } else { "s" };
                write!(f, "Unexpected character{} at position {}: {}", plural, position, text)
            }
            LogicError::UnexpectedGrammar {
                grammar,
                text,
                position,
                expected,
            } => {
                let expected: Vec<&str> = expected.iter().map(|g| g.name()).collect();
                write!(
                    f,
                    "Unexpected {} (\"{}\") at position {}. Expected one of the following grammars: {}",
                    grammar,
                    text,
                    position,
                    expected.join(", ")
                )
            }
            LogicError::UnexpectedEnd { grammar, position } => {
                write!(f, "Unexpected {} ending expression at position {}.", grammar, position)
            }
            LogicError::UnmatchedClose { position } => {
                write!(
                    f,
                    "Unexpected {} at position {} without a corresponding {}.",
                    Grammar::GroupClose,
                    position,
                    Grammar::GroupOpen
                )
            }
            LogicError::UnclosedGroups { count } => {
                let plural = if *count == 1 { "" } else { "s" };
                write!(
                    f,
                    "Unexpectedly ended expression without closing {} parenthetical group{}.",
                    count, plural
                )
            }
            LogicError::VariableOutOfRange { position, value, limit } => match limit {
                VarLimit::Bounded(limit) => write!(
                    f,
                    "{} at position {} is {} but should be a positive number less than or equal to {}.",
                    Grammar::Variable,
                    position,
                    value,
                    limit
                ),
                VarLimit::Unbounded => write!(
                    f,
                    "{} at position {} is {} but should be a positive number.",
                    Grammar::Variable,
                    position,
                    value
                ),
            },
            LogicError::TooManyVariables { count, max } => write!(
                f,
                "Cannot enumerate permutations of {} variables (at most {} allowed).",
                count, max
            ),
            LogicError::AssignmentTooWide { width, max } => write!(
                f,
                "Cannot enumerate permutations up to variable {} (assignments of at most {} values allowed).",
                width, max
            ),
        }
    }
}

impl std::error::Error for LogicError {}

pub type Result<T> = std::result::Result<T, LogicError>;
