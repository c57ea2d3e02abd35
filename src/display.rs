//! Rendering expression trees back to text.
//!
//! Nested groups render as `(...)` or `NOT(...)`; the root renders bare
//! unless negated. Members are joined by their group's operator keyword with
//! single spaces, so the output re-parses to an equivalent expression.

use std::fmt::{self, Display, Formatter};

use crate::ast::{Group, Node, Variable};
use crate::types::Operator;

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}

impl Group {
    fn write_members(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Operator-less groups hold a single member; XOR matches how they evaluate.
        let separator = self.operator.unwrap_or(Operator::Xor);
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", separator)?;
            }
            match member {
                Node::Group(group) => group.fmt_nested(f)?,
                Node::Variable(var) => write!(f, "{}", var)?,
            }
        }
        Ok(())
    }

    fn fmt_nested(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(if self.negate { "NOT(" } else { "(" })?;
        self.write_members(f)?;
        f.write_str(")")
    }
}

/// Formats the group as a root: bare members, wrapped in `NOT(...)` if negated.
impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.negate {
            self.fmt_nested(f)
        } else {
            self.write_members(f)
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Group(group) => group.fmt_nested(f),
            Node::Variable(var) => write!(f, "{}", var),
        }
    }
}
