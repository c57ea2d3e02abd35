//! Expression tree.
//!
//! The tree is owned top-down: a [`Group`] owns its members, and the
//! [`Logic`][crate::logic::Logic] owns the root group.

use crate::types::Operator;

/// A reference to the `index`-th externally supplied boolean (1-based).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Variable {
    pub index: u32,
    /// 1-based character position in the source text.
    pub position: usize,
}

impl Variable {
    pub fn new(index: u32, position: usize) -> Self {
        assert_ne!(index, 0, "Variable indices must be >= 1");
        Self { index, position }
    }
}

/// Members joined under a single operator, optionally negated.
///
/// `operator` is `None` only for groups with a single member.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Group {
    pub negate: bool,
    pub operator: Option<Operator>,
    pub members: Vec<Node>,
}

impl Group {
    pub fn new(negate: bool, operator: Option<Operator>, members: Vec<Node>) -> Self {
        Self {
            negate,
            operator,
            members,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Calls `f` on every variable reachable from this group, left to right.
    pub fn for_each_var<F>(&self, f: &mut F)
    where
        F: FnMut(&Variable),
    {
        for member in &self.members {
            match member {
                Node::Group(group) => group.for_each_var(f),
                Node::Variable(var) => f(var),
            }
        }
    }

    /// Distinct variable indices reachable from this group, ascending.
    pub fn vars(&self) -> Vec<u32> {
        let mut vars = Vec::new();
        self.for_each_var(&mut |var| vars.push(var.index));
        vars.sort_unstable();
        vars.dedup();
        vars
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node {
    Group(Group),
    Variable(Variable),
}

impl Node {
    pub fn var(index: u32, position: usize) -> Self {
        Node::Variable(Variable::new(index, position))
    }

    pub fn group(negate: bool, operator: Option<Operator>, members: Vec<Node>) -> Self {
        Node::Group(Group::new(negate, operator, members))
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

impl From<Variable> for Node {
    fn from(var: Variable) -> Self {
        Node::Variable(var)
    }
}
