//! Propositional expressions over numbered variables.
//!
//! A [`Logic`] owns a parsed, grouped and simplified expression tree. It is
//! built from text such as `(1 AND 2) OR NOT(3)`, where each number refers to
//! a caller-supplied boolean (1-based), and can then be evaluated, rendered
//! back to canonical text, enumerated as a truth table, or edited by removing
//! variables.
//!
//! # Examples
//!
//! ```
//! use logic_rs::logic::Logic;
//!
//! let mut logic = Logic::new("(1 OR 2) AND 3", 3).unwrap();
//! assert!(logic.eval(&[false, true, true]));
//! assert!(!logic.eval(&[true, true, false]));
//!
//! // Removing variable 2 renumbers 3 to 2.
//! let removal = logic.remove(&[2], None);
//! assert_eq!(removal.vars, vec![1, 2]);
//! assert_eq!(logic.to_string(), "1 AND 2");
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::ast::Group;
use crate::config::LogicConfig;
use crate::error::{LogicError, Result};
use crate::eval::Eval;
use crate::group::group;
use crate::parser::parse;
use crate::permutations::{Permutations, TruthTable, MAX_VARS};
use crate::remove::{normalize, remove, Removal};
use crate::simplify::simplify;
use crate::types::VarLimit;

/// A parsed propositional expression.
///
/// # Invariants
///
/// - `vars` is ascending, distinct, and equals the set of variable indices
///   reachable from `root`
/// - `root` is simplified
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Logic {
    expr: String,
    config: LogicConfig,
    root: Group,
    vars: Vec<u32>,
}

impl Logic {
    /// Parses `text`, accepting variables in `1..=limit`.
    pub fn new(text: &str, limit: u32) -> Result<Self> {
        Self::with_config(text, LogicConfig::with_limit(limit))
    }

    /// Parses `text` without an upper bound on variable indices.
    pub fn unbounded(text: &str) -> Result<Self> {
        Self::with_config(text, LogicConfig::default())
    }

    pub fn with_config(text: &str, config: LogicConfig) -> Result<Self> {
        let (root, vars) = Self::build(text, config.var_limit)?;
        Ok(Self {
            expr: text.to_string(),
            config,
            root,
            vars,
        })
    }

    /// Runs the parse, group, simplify pipeline.
    fn build(text: &str, limit: VarLimit) -> Result<(Group, Vec<u32>)> {
        let parsed = parse(text, limit)?;
        let root = simplify(group(parsed.root));
        debug!("build: {:?} => {}", text, root);
        Ok((root, parsed.vars))
    }

    /// Evaluates the expression; missing assignment entries count as `false`.
    pub fn eval(&self, assignment: &[bool]) -> bool {
        self.root.eval(assignment)
    }

    /// Removes `vars` from the expression and renumbers the survivors.
    ///
    /// Requests that are zero, duplicated or above the variable limit (the
    /// `new_limit` if given, the current limit otherwise) are ignored. The
    /// variable limit becomes `new_limit` if given, or shrinks by the number
    /// of removed variables otherwise.
    ///
    /// Removing every variable leaves an empty expression, which renders as
    /// `""` and evaluates to `false`.
    pub fn remove(&mut self, vars: &[u32], new_limit: Option<u32>) -> Removal {
        let limit = new_limit.map_or(self.config.var_limit, VarLimit::Bounded);
        let removed = normalize(vars, limit);
        let removal = remove(&mut self.root, &removed);

        self.config.var_limit = match new_limit {
            Some(_) => limit,
            None => self.config.var_limit.shrink(removed.len()),
        };

        let root = std::mem::take(&mut self.root);
        self.root = if root.is_empty() { Group::default() } else { simplify(root) };
        self.expr = self.root.to_string();
        self.vars = removal.vars.clone();
        debug_assert_eq!(self.vars, self.root.vars());

        removal
    }

    /// Replaces the expression with a freshly parsed `text`.
    ///
    /// The variable limit becomes `new_limit` if given and stays unchanged
    /// otherwise. On error, `self` is left untouched.
    pub fn update(&mut self, text: &str, new_limit: Option<u32>) -> Result<()> {
        let limit = new_limit.map_or(self.config.var_limit, VarLimit::Bounded);
        let (root, vars) = Self::build(text, limit)?;
        self.expr = text.to_string();
        self.config.var_limit = limit;
        self.root = root;
        self.vars = vars;
        Ok(())
    }

    /// Distinct variable indices referenced by the expression, ascending.
    pub fn vars(&self) -> &[u32] {
        &self.vars
    }

    pub fn vars_count(&self) -> usize {
        self.vars.len()
    }

    pub fn var_limit(&self) -> VarLimit {
        self.config.var_limit
    }

    pub fn config(&self) -> &LogicConfig {
        &self.config
    }

    /// Last known expression text: the input text after construction or
    /// [`update`][Logic::update], the canonical text after
    /// [`remove`][Logic::remove].
    pub fn expression(&self) -> &str {
        &self.expr
    }

    /// Returns true if every variable has been removed.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub(crate) fn root(&self) -> &Group {
        &self.root
    }

    /// Iterates over every `(assignment, value)` row of the truth table.
    ///
    /// Fails if the expression tracks more variables than
    /// [`LogicConfig::max_permutation_vars`] allows, or references a variable
    /// above [`LogicConfig::max_assignment_width`].
    pub fn permutations(&self) -> Result<Permutations<'_>> {
        let max = self.config.max_permutation_vars.min(MAX_VARS);
        if self.vars.len() > max {
            return Err(LogicError::TooManyVariables {
                count: self.vars.len(),
                max,
            });
        }
        if let Some(&width) = self.vars.last() {
            if width > self.config.max_assignment_width {
                return Err(LogicError::AssignmentTooWide {
                    width,
                    max: self.config.max_assignment_width,
                });
            }
        }
        Ok(Permutations::new(&self.root, &self.vars))
    }

    /// Splits all assignments of the tracked variables by the expression's value.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_rs::logic::Logic;
    ///
    /// let logic = Logic::new("1 OR 2", 2).unwrap();
    /// let table = logic.truth_table().unwrap();
    /// assert_eq!(table.failures, vec![vec![false, false]]);
    /// assert_eq!(table.successes.len(), 3);
    /// ```
    pub fn truth_table(&self) -> Result<TruthTable> {
        Ok(self.permutations()?.collect())
    }
}

impl Display for Logic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root)
    }
}

impl FromStr for Logic {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self> {
        Self::unbounded(s)
    }
}
