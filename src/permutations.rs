//! Brute-force truth tables.
//!
//! Enumerates all `2^k` assignments of the `k` tracked variables of an
//! expression and evaluates each one. Bit `j` of the row counter supplies the
//! value of the `j`-th tracked variable; untracked positions are `false`.
//!
//! Note: the cost is exponential in `k` and each row is as long as the largest
//! tracked index, so callers must bound both; see
//! [`LogicConfig`][crate::config::LogicConfig].

use log::debug;

use crate::ast::Group;
use crate::eval::Eval;

/// Largest `k` the row counter can represent.
pub const MAX_VARS: usize = 63;

/// Assignments split by the value the expression takes on them.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct TruthTable {
    pub successes: Vec<Vec<bool>>,
    pub failures: Vec<Vec<bool>>,
}

impl TruthTable {
    pub fn len(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(Vec<bool>, bool)> for TruthTable {
    fn from_iter<I: IntoIterator<Item = (Vec<bool>, bool)>>(iter: I) -> Self {
        let mut table = TruthTable::default();
        for (assignment, value) in iter {
            if value {
                table.successes.push(assignment);
            } else {
                table.failures.push(assignment);
            }
        }
        table
    }
}

/// Iterator over `(assignment, value)` rows of a truth table.
///
/// Each assignment is as long as the largest tracked variable index.
pub struct Permutations<'a> {
    root: &'a Group,
    vars: &'a [u32],
    width: usize,
    next: u64,
    count: u64,
}

impl<'a> Permutations<'a> {
    /// Creates the iterator over `vars` (ascending, distinct, at most [`MAX_VARS`]).
    pub fn new(root: &'a Group, vars: &'a [u32]) -> Self {
        assert!(vars.len() <= MAX_VARS, "Too many variables to enumerate: {}", vars.len());
        debug!("permutations(vars = {:?})", vars);
        Self {
            root,
            vars,
            width: vars.last().map_or(0, |&v| v as usize),
            next: 0,
            count: 1 << vars.len(),
        }
    }

    fn assignment(&self, row: u64) -> Vec<bool> {
        let mut values = vec![false; self.width];
        for (j, &var) in self.vars.iter().enumerate() {
            values[var as usize - 1] = (row >> j) & 1 == 1;
        }
        values
    }
}

impl Iterator for Permutations<'_> {
    type Item = (Vec<bool>, bool);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let values = self.assignment(self.next);
        self.next += 1;
        let value = self.root.eval(&values);
        Some((values, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
