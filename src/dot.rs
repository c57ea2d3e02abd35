//! Expression tree to DOT (Graphviz) conversion.
//!
//! The generated DOT output follows these conventions:
//! - **Groups** are rendered as boxes labeled with their operator (`AND`,
//!   `OR`, `XOR`, or `·` when the group has a single member)
//! - **Negated groups** are drawn with the negated style and a `NOT` prefix
//! - **Variables** are rendered as circles labeled with their index
//! - **Edges** go from a group to each of its members, left to right
//!
//! # Examples
//!
//! ```
//! use logic_rs::logic::Logic;
//!
//! let logic = Logic::new("(1 OR 2) AND NOT(3)", 3).unwrap();
//! let dot = logic.to_dot().unwrap();
//! assert!(dot.starts_with("digraph {"));
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! ```

use std::fmt::Write as _;

use crate::ast::{Group, Node};
use crate::logic::Logic;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for group nodes (default: "box")
    pub group_shape: &'static str,
    /// Shape for variable nodes (default: "circle")
    pub variable_shape: &'static str,
    /// Style for negated groups (default: "dashed")
    pub negated_style: &'static str,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            group_shape: "box",
            variable_shape: "circle",
            negated_style: "dashed",
        }
    }
}

impl Logic {
    /// Converts the expression tree to DOT (Graphviz) format.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the expression tree to DOT format with custom configuration.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "node [shape={}];", config.group_shape)?;
        let mut next_id = 0;
        write_group(&mut dot, self.root(), &mut next_id, config)?;
        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

/// Writes `group` and its members; returns the DOT id of `group`.
fn write_group(dot: &mut String, group: &Group, next_id: &mut usize, config: &DotConfig) -> Result<usize, std::fmt::Error> {
    let id = *next_id;
    *next_id += 1;

    let op = group.operator.map_or("·", |op| op.keyword());
    if group.negate {
        writeln!(dot, "n{} [label=\"NOT {}\", style={}];", id, op, config.negated_style)?;
    } else {
        writeln!(dot, "n{} [label=\"{}\"];", id, op)?;
    }

    for member in &group.members {
        let child = match member {
            Node::Group(child) => write_group(dot, child, next_id, config)?,
            Node::Variable(var) => {
                let child = *next_id;
                *next_id += 1;
                writeln!(dot, "n{} [label=\"{}\", shape={}];", child, var.index, config.variable_shape)?;
                child
            }
        };
        writeln!(dot, "n{} -> n{};", id, child)?;
    }

    Ok(id)
}
