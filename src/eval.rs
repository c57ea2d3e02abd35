//! Evaluation of expression trees against boolean assignments.
//!
//! Variable `n` reads `assignment[n - 1]`; indices past the end of the
//! assignment read as `false`, so evaluation never fails.

use crate::ast::{Group, Node, Variable};
use crate::types::Operator;

pub trait Eval {
    fn eval(&self, assignment: &[bool]) -> bool;
}

impl Eval for Variable {
    fn eval(&self, assignment: &[bool]) -> bool {
        (self.index as usize)
            .checked_sub(1)
            .and_then(|i| assignment.get(i).copied())
            .unwrap_or(false)
    }
}

impl Eval for Node {
    fn eval(&self, assignment: &[bool]) -> bool {
        match self {
            Node::Group(group) => group.eval(assignment),
            Node::Variable(var) => var.eval(assignment),
        }
    }
}

impl Eval for Group {
    /// `AND` and `OR` short-circuit left to right. `XOR`, also used for groups
    /// without an operator, is the parity of the true members. Empty groups
    /// yield the operator's identity (`AND` true, otherwise false).
    fn eval(&self, assignment: &[bool]) -> bool {
        let mut members = self.members.iter();
        let result = match self.operator {
            Some(Operator::And) => members.all(|m| m.eval(assignment)),
            Some(Operator::Or) => members.any(|m| m.eval(assignment)),
            Some(Operator::Xor) | None => members.fold(false, |acc, m| acc != m.eval(assignment)),
        };
        self.negate != result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn vars(op: Option<Operator>, negate: bool, n: u32) -> Group {
        Group::new(negate, op, (1..=n).map(|i| Node::var(i, 0)).collect())
    }

    /// All assignments of length `n`, bit `j` of the counter feeding variable `j + 1`.
    fn assignments(n: usize) -> impl Iterator<Item = Vec<bool>> {
        (0..1usize << n).map(move |i| (0..n).map(|j| (i >> j) & 1 == 1).collect())
    }

    #[test]
    fn test_eval_var() {
        let x = Variable::new(2, 0);
        assert!(x.eval(&[false, true]));
        assert!(!x.eval(&[true, false]));
    }

    #[test]
    fn test_eval_missing_var_is_false() {
        let x = Variable::new(5, 0);
        assert!(!x.eval(&[true, true]));
        assert!(!x.eval(&[]));
    }

    #[test]
    fn test_eval_zero_index_is_false() {
        let x = Variable { index: 0, position: 0 };
        assert!(!x.eval(&[true, true]));
        assert!(!Node::Variable(x).eval(&[true]));
    }

    #[test]
    fn test_eval_and() {
        let g = vars(Some(Operator::And), false, 3);
        for a in assignments(3) {
            assert_eq!(g.eval(&a), a.iter().all(|&b| b), "{:?}", a);
        }
    }

    #[test]
    fn test_eval_or() {
        let g = vars(Some(Operator::Or), false, 3);
        for a in assignments(3) {
            assert_eq!(g.eval(&a), a.iter().any(|&b| b), "{:?}", a);
        }
    }

    #[test]
    fn test_eval_xor() {
        let g = vars(Some(Operator::Xor), false, 3);
        for a in assignments(3) {
            let odd = a.iter().filter(|&&b| b).count() % 2 == 1;
            assert_eq!(g.eval(&a), odd, "{:?}", a);
        }
    }

    #[test]
    fn test_eval_negate_inverts() {
        for op in [Some(Operator::And), Some(Operator::Or), Some(Operator::Xor), None] {
            let n = if op.is_some() { 3 } else { 1 };
            let plain = vars(op, false, n);
            let negated = vars(op, true, n);
            for a in assignments(n as usize) {
                assert_eq!(plain.eval(&a), !negated.eval(&a), "{:?} {:?}", op, a);
            }
        }
    }

    #[test]
    fn test_eval_single_member_without_operator() {
        let g = vars(None, false, 1);
        assert!(g.eval(&[true]));
        assert!(!g.eval(&[false]));
    }

    #[test]
    fn test_eval_empty_group() {
        assert!(Group::new(false, Some(Operator::And), vec![]).eval(&[]));
        assert!(!Group::new(false, Some(Operator::Or), vec![]).eval(&[]));
        assert!(!Group::new(false, Some(Operator::Xor), vec![]).eval(&[]));
        assert!(!Group::default().eval(&[true]));
    }

    #[test]
    fn test_eval_nested() {
        // (1 OR 2) AND NOT(3)
        let g = Group::new(
            false,
            Some(Operator::And),
            vec![
                Node::group(false, Some(Operator::Or), vec![Node::var(1, 0), Node::var(2, 0)]),
                Node::group(true, None, vec![Node::var(3, 0)]),
            ],
        );
        assert!(g.eval(&[true, false, false]));
        assert!(g.eval(&[false, true]));
        assert!(!g.eval(&[true, true, true]));
        assert!(!g.eval(&[false, false, false]));
    }
}
