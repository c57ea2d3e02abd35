//! Precedence grouping.
//!
//! Turns each flat [`Level`] into a [`Group`] governed by a single operator.
//! Mixed levels are folded tier by tier (`AND`, then `XOR`, then `OR`): every
//! maximal run of terms joined by the current tier's operator becomes one
//! n-ary sub-group, until a single operator is left on the level.
//!
//! For example, `1 OR 2 AND 3 AND 4 XOR 5` becomes
//! `1 OR ((2 AND 3 AND 4) XOR 5)`.

use log::debug;

use crate::ast::{Group, Node};
use crate::parser::{Level, Term};
use crate::types::Operator;

/// Groups `level` and all of its nested levels.
pub fn group(level: Level) -> Group {
    let mut declared = level.declared();
    let Level {
        negate,
        terms,
        mut operators,
    } = level;

    // Nested levels are grouped on their own before this level is folded.
    let mut members: Vec<Node> = terms
        .into_iter()
        .map(|term| match term {
            Term::Level(level) => Node::from(group(level)),
            Term::Variable(var) => Node::from(var),
        })
        .collect();

    for tier in Operator::PRECEDENCE {
        if declared.len() <= 1 {
            break;
        }
        if !declared.contains(&tier) {
            continue;
        }
        debug!("group: folding {} among {:?}", tier, declared);
        (members, operators) = fold(members, operators, tier);
        declared.retain(|&op| op != tier);
    }

    Group::new(negate, declared.first().copied(), members)
}

/// Replaces every run of members joined by `tier` with a single sub-group.
fn fold(members: Vec<Node>, operators: Vec<Operator>, tier: Operator) -> (Vec<Node>, Vec<Operator>) {
    let mut folded_members: Vec<Node> = Vec::with_capacity(members.len());
    let mut folded_operators: Vec<Operator> = Vec::with_capacity(operators.len());
    let mut run: Vec<Node> = Vec::new();

    let mut members = members.into_iter();
    if let Some(first) = members.next() {
        run.push(first);
    }

    for (op, member) in operators.into_iter().zip(members) {
        if op == tier {
            run.push(member);
        } else {
            folded_members.push(close_run(std::mem::take(&mut run), tier));
            folded_operators.push(op);
            run.push(member);
        }
    }
    folded_members.push(close_run(run, tier));

    (folded_members, folded_operators)
}

fn close_run(mut run: Vec<Node>, tier: Operator) -> Node {
    if run.len() == 1 {
        run.swap_remove(0)
    } else {
        Node::group(false, Some(tier), run)
    }
}
