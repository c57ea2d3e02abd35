//! Small value types shared by the whole pipeline.
//!
//! This module provides the operators a group can carry, the grammar
//! categories the parser tracks between tokens, and the variable limit an
//! expression is checked against.
use std::fmt;

/// A binary operator joining the members of a group.
///
/// Precedence, from tightest to loosest: `AND`, `XOR`, `OR`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Operator {
    And,
    Xor,
    Or,
}

impl Operator {
    /// Operators in the order the grouper folds them.
    pub const PRECEDENCE: [Operator; 3] = [Operator::And, Operator::Xor, Operator::Or];

    /// Parses an operator keyword. Keywords are case-sensitive.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "AND" => Some(Operator::And),
            "XOR" => Some(Operator::Xor),
            "OR" => Some(Operator::Or),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Xor => "XOR",
            Operator::Or => "OR",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Grammar category of a token.
///
/// The parser starts in [`Grammar::GroupOpen`], as if an implicit `(`
/// preceded the expression.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Grammar {
    GroupOpen,
    GroupClose,
    Operator,
    Variable,
}

impl Grammar {
    /// Categories allowed immediately after `self`.
    pub fn expected(self) -> &'static [Grammar] {
        match self {
            Grammar::GroupOpen => &[Grammar::GroupOpen, Grammar::Variable],
            Grammar::Variable => &[Grammar::Operator, Grammar::GroupClose],
            Grammar::Operator => &[Grammar::GroupOpen, Grammar::Variable],
            Grammar::GroupClose => &[Grammar::GroupClose, Grammar::Operator],
        }
    }

    pub fn allows(self, next: Grammar) -> bool {
        self.expected().contains(&next)
    }

    pub fn name(self) -> &'static str {
        match self {
            Grammar::GroupOpen => "GROUP_OPEN",
            Grammar::GroupClose => "GROUP_CLOSE",
            Grammar::Operator => "OPERATOR",
            Grammar::Variable => "VARIABLE",
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The largest variable index an expression may reference.
///
/// # Invariants
///
/// - `Bounded(n)` accepts exactly the indices `1..=n`
/// - `Unbounded` accepts every positive index representable as `u32`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum VarLimit {
    Bounded(u32),
    #[default]
    Unbounded,
}

impl VarLimit {
    /// Returns true if `index` is a valid variable index under this limit.
    pub fn contains(self, index: u64) -> bool {
        match self {
            VarLimit::Bounded(limit) => index >= 1 && index <= limit as u64,
            VarLimit::Unbounded => index >= 1 && index <= u32::MAX as u64,
        }
    }

    /// Lowers the limit by `count`, saturating at zero.
    pub fn shrink(self, count: usize) -> Self {
        match self {
            VarLimit::Bounded(limit) => {
                let count = u32::try_from(count).unwrap_or(u32::MAX);
                VarLimit::Bounded(limit.saturating_sub(count))
            }
            VarLimit::Unbounded => VarLimit::Unbounded,
        }
    }
}

impl From<u32> for VarLimit {
    fn from(limit: u32) -> Self {
        VarLimit::Bounded(limit)
    }
}

impl fmt::Display for VarLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarLimit::Bounded(limit) => write!(f, "{}", limit),
            VarLimit::Unbounded => write!(f, "unbounded"),
        }
    }
}
