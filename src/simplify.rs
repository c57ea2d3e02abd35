//! Tree simplification.
//!
//! Rules, applied innermost first:
//!
//! - a non-negated group holding a single variable is replaced by the variable,
//! - a group whose only member is another group is merged with it; the merged
//!   group is negated iff exactly one of the two was.
//!
//! The root always stays a [`Group`], even if it holds a single variable.
//! Simplification is idempotent.

use log::debug;

use crate::ast::{Group, Node};

pub fn simplify(group: Group) -> Group {
    let Group {
        negate,
        operator,
        members,
    } = group;

    let members = members
        .into_iter()
        .map(|member| match member {
            Node::Group(child) => {
                let mut child = simplify(child);
                if !child.negate && child.members.len() == 1 && matches!(child.members[0], Node::Variable(_)) {
                    child.members.swap_remove(0)
                } else {
                    Node::Group(child)
                }
            }
            var @ Node::Variable(_) => var,
        })
        .collect();

    let mut group = Group::new(negate, operator, members);
    loop {
        let mut child = match group.members.as_mut_slice() {
            [Node::Group(child)] => std::mem::take(child),
            _ => break,
        };
        debug!("simplify: merging group (negate = {}) into parent (negate = {})", child.negate, group.negate);
        child.negate ^= group.negate;
        group = child;
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::group::group;
    use crate::parser::parse;
    use crate::types::{Operator, VarLimit};

    fn simplified(text: &str) -> Group {
        simplify(group(parse(text, VarLimit::Unbounded).unwrap().root))
    }

    #[test]
    fn test_parenthesized_variable_collapses() {
        let g = simplified("(1) AND ((2))");
        assert_eq!(g, Group::new(false, Some(Operator::And), vec![Node::var(1, 2), Node::var(2, 11)]));
    }

    #[test]
    fn test_negated_variable_kept() {
        let g = simplified("NOT(1) OR 2");
        assert_eq!(
            g,
            Group::new(
                false,
                Some(Operator::Or),
                vec![Node::group(true, None, vec![Node::var(1, 5)]), Node::var(2, 11)]
            )
        );
    }

    #[test]
    fn test_root_merges_single_group() {
        let g = simplified("NOT(1 OR 2)");
        assert_eq!(g, Group::new(true, Some(Operator::Or), vec![Node::var(1, 5), Node::var(2, 10)]));
    }

    #[test]
    fn test_double_negation_cancels() {
        let g = simplified("NOT(NOT(1 AND 2))");
        assert_eq!(g, Group::new(false, Some(Operator::And), vec![Node::var(1, 9), Node::var(2, 15)]));

        let g = simplified("NOT(NOT(3))");
        assert_eq!(g, Group::new(false, None, vec![Node::var(3, 9)]));
    }

    #[test]
    fn test_root_single_variable_stays_group() {
        let g = simplified("((4))");
        assert_eq!(g, Group::new(false, None, vec![Node::var(4, 3)]));
    }

    #[test]
    fn test_idempotent() {
        for text in ["NOT(NOT((1 OR 2)) AND (3))", "((1 XOR NOT(NOT(2))))", "1 OR 2 AND NOT(3 XOR 4)"] {
            let once = simplified(text);
            let twice = simplify(once.clone());
            assert_eq!(once, twice, "{}", text);
        }
    }
}
