//! # logic-rs: numbered propositional expressions in Rust
//!
//! **`logic-rs`** parses boolean expressions over positional, numbered variables,
//! such as `(1 AND 2) OR NOT(3)`, and lets you evaluate, render, edit and enumerate them.
//! Each number `n` refers to the `n`-th boolean of a caller-supplied assignment, e.g. the
//! result of the `n`-th comparison rule of a filter.
//!
//! ## Syntax
//!
//! - **Variables** are positive integers without leading zeros: `1`, `2`, `17`.
//! - **Operators** are `AND`, `XOR` and `OR`, binding in that order (`AND` tightest).
//!   Chains of the same operator are n-ary: `1 AND 2 AND 3` is a single group.
//! - **Groups** are `( ... )`; negated groups are `NOT( ... )`, with no space before `(`.
//!
//! Every error carries the 1-based character position it refers to, see [`error::LogicError`].
//!
//! ## Basic Usage
//!
//! ```rust
//! use logic_rs::logic::Logic;
//!
//! // 1. Parse with a variable limit: only 1, 2 and 3 may be referenced.
//! let mut logic = Logic::new("1 OR 2 AND NOT(3)", 3).unwrap();
//!
//! // 2. Precedence is made explicit in the canonical text.
//! assert_eq!(logic.to_string(), "1 OR (2 AND NOT(3))");
//!
//! // 3. Evaluate; missing values count as false.
//! assert!(logic.eval(&[false, true]));
//! assert!(!logic.eval(&[false, true, true]));
//!
//! // 4. Enumerate the truth table over the tracked variables.
//! let table = logic.truth_table().unwrap();
//! assert_eq!(table.successes.len(), 5);
//! assert_eq!(table.failures.len(), 3);
//!
//! // 5. Remove variable 1; the others shift down to stay contiguous.
//! logic.remove(&[1], None);
//! assert_eq!(logic.to_string(), "1 AND NOT(2)");
//! assert_eq!(logic.vars(), &[1, 2]);
//! ```
//!
//! ## Core Components
//!
//! - **[`logic`]**: The [`Logic`][crate::logic::Logic] expression and its operations.
//! - **[`lexer`]**, **[`parser`]**, **[`group`]**, **[`simplify`]**: The construction pipeline.
//! - **[`eval`]**, **[`display`]**, **[`remove`]**, **[`permutations`]**: Operations on built trees.
//! - **[`dot`]**: Graphviz rendering of expression trees, for debugging.

pub mod ast;
pub mod config;
pub mod display;
pub mod dot;
pub mod error;
pub mod eval;
pub mod group;
pub mod lexer;
pub mod logic;
pub mod parser;
pub mod permutations;
pub mod remove;
pub mod simplify;
pub mod types;
