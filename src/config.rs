//! Configuration of a [`Logic`][crate::logic::Logic] expression.

use crate::types::VarLimit;

/// Configuration options for building and querying an expression.
///
/// Use `LogicConfig::default()` for an unbounded variable limit and the
/// default truth-table cap.
///
/// # Examples
///
/// ```
/// use logic_rs::config::LogicConfig;
/// use logic_rs::logic::Logic;
/// use logic_rs::types::VarLimit;
///
/// let config = LogicConfig {
///     var_limit: VarLimit::Bounded(4),
///     ..LogicConfig::default()
/// };
/// let logic = Logic::with_config("1 AND (2 OR 4)", config).unwrap();
/// assert_eq!(logic.vars(), &[1, 2, 4]);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LogicConfig {
    /// Largest variable index the expression may reference (default: unbounded)
    pub var_limit: VarLimit,
    /// Largest number of tracked variables a truth table is built for (default: 16)
    pub max_permutation_vars: usize,
    /// Largest variable index a truth table is built for (default: 1024)
    ///
    /// Truth-table rows are as long as the largest tracked index, so this
    /// bounds the size of each row independently of the number of variables.
    pub max_assignment_width: u32,
}

impl LogicConfig {
    pub const DEFAULT_MAX_PERMUTATION_VARS: usize = 16;
    pub const DEFAULT_MAX_ASSIGNMENT_WIDTH: u32 = 1024;

    /// Default configuration with variables bounded to `1..=limit`.
    pub fn with_limit(limit: u32) -> Self {
        Self {
            var_limit: VarLimit::Bounded(limit),
            ..Self::default()
        }
    }
}

impl Default for LogicConfig {
    fn default() -> Self {
        Self {
            var_limit: VarLimit::Unbounded,
            max_permutation_vars: Self::DEFAULT_MAX_PERMUTATION_VARS,
            max_assignment_width: Self::DEFAULT_MAX_ASSIGNMENT_WIDTH,
        }
    }
}
