//! End-to-end tests for expressions.
//!
//! Tests cover parsing, evaluation, canonical rendering, removal and truth tables.

use std::collections::{BTreeMap, HashSet};

use logic_rs::error::{ErrorKind, LogicError};
use logic_rs::logic::Logic;
use logic_rs::types::{Grammar, VarLimit};

/// All assignments of length `n`, in counter order.
fn assignments(n: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..1u32 << n).map(move |row| (0..n).map(|j| (row >> j) & 1 == 1).collect())
}

// ─── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn and_of_two() {
    let logic = Logic::new("1 AND 2", 2).unwrap();
    assert!(logic.eval(&[true, true]));
    assert!(!logic.eval(&[true, false]));
}

#[test]
fn xor_chain_is_parity() {
    let logic = Logic::new("1 XOR 2 XOR 3", 3).unwrap();
    assert!(logic.eval(&[true, true, true]));
    assert!(!logic.eval(&[true, true, false]));
}

#[test]
fn negated_or() {
    let logic = Logic::new("NOT(1 OR 2)", 2).unwrap();
    assert!(logic.eval(&[false, false]));
    assert!(!logic.eval(&[true, false]));
}

#[test]
fn remove_middle_variable() {
    let mut logic = Logic::new("1 AND 2 AND 3", 3).unwrap();
    logic.remove(&[2], None);
    assert_eq!(logic.to_string(), "1 AND 2");
    assert_eq!(logic.vars(), &[1, 2]);
}

#[test]
fn truth_table_of_or_and() {
    let logic = Logic::new("(1 OR 2) AND 3", 3).unwrap();
    let table = logic.truth_table().unwrap();
    assert_eq!(table.successes.len(), 4);
    assert_eq!(table.failures.len(), 4);
}

#[test]
fn leading_operator_is_syntax_error() {
    let err = Logic::new("AND 1", 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.position(), Some(1));
    assert_eq!(
        err,
        LogicError::UnexpectedGrammar {
            grammar: Grammar::Operator,
            text: "AND".to_string(),
            position: 1,
            expected: &[Grammar::GroupOpen, Grammar::Variable],
        }
    );
}

// ─── Syntax Errors ─────────────────────────────────────────────────────────────

#[test]
fn blank_expression() {
    assert_eq!(Logic::new("", 1).unwrap_err(), LogicError::Blank);
    assert_eq!(Logic::new(" \t ", 1).unwrap_err(), LogicError::Blank);
}

#[test]
fn error_positions() {
    let cases = [
        ("1 & 2", 3),
        ("1 AND", 3),
        ("1)", 2),
        ("()", 2),
        ("1 2", 3),
        ("1 AND AND 2", 7),
        ("01 OR 1", 1),
        ("NOT (1)", 1),
        ("1 and 2", 3),
    ];
    for (text, position) in cases {
        let err = Logic::unbounded(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax, "{:?}", text);
        assert_eq!(err.position(), Some(position), "{:?}: {}", text, err);
    }
}

#[test]
fn unclosed_groups() {
    assert_eq!(
        Logic::unbounded("((1 AND 2)").unwrap_err(),
        LogicError::UnclosedGroups { count: 1 }
    );
    assert_eq!(
        Logic::unbounded("NOT((1").unwrap_err(),
        LogicError::UnclosedGroups { count: 2 }
    );
}

#[test]
fn variable_out_of_range() {
    let err = Logic::new("1 OR 4", 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(
        err,
        LogicError::VariableOutOfRange {
            position: 6,
            value: 4,
            limit: VarLimit::Bounded(3),
        }
    );
}

#[test]
fn error_messages() {
    let err = Logic::new("1 OR", 1).unwrap_err();
    assert_eq!(err.to_string(), "Unexpected OPERATOR ending expression at position 3.");

    let err = Logic::new("1 # 2", 2).unwrap_err();
    assert_eq!(err.to_string(), "Unexpected character at position 3: #");
}

// ─── Precedence ────────────────────────────────────────────────────────────────

#[test]
fn precedence_matches_reference() {
    type Reference = fn(&[bool]) -> bool;
    let cases: [(&str, Reference); 6] = [
        ("1 OR 2 AND 3", |v| v[0] || (v[1] && v[2])),
        ("1 AND 2 OR 3", |v| (v[0] && v[1]) || v[2]),
        ("1 XOR 2 AND 3", |v| v[0] ^ (v[1] && v[2])),
        ("1 OR 2 XOR 3", |v| v[0] || (v[1] ^ v[2])),
        ("1 OR 2 XOR 3 AND 4", |v| v[0] || (v[1] ^ (v[2] && v[3]))),
        ("NOT(1 AND 2) OR 3 AND NOT(4)", |v| !(v[0] && v[1]) || (v[2] && !v[3])),
    ];
    for (text, reference) in cases {
        let logic = Logic::new(text, 4).unwrap();
        for values in assignments(4) {
            assert_eq!(logic.eval(&values), reference(&values), "{} on {:?}", text, values);
        }
    }
}

#[test]
fn canonical_text() {
    let cases = [
        ("1 OR 2 AND 3", "1 OR (2 AND 3)"),
        ("1   AND 2 AND   3", "1 AND 2 AND 3"),
        ("((1))", "1"),
        ("NOT(NOT(1 OR 2))", "1 OR 2"),
        ("NOT((1 AND 2))", "NOT(1 AND 2)"),
        ("1 AND 2 OR 3 XOR 4 AND 5", "(1 AND 2) OR (3 XOR (4 AND 5))"),
    ];
    for (text, expected) in cases {
        assert_eq!(Logic::unbounded(text).unwrap().to_string(), expected);
    }
}

// ─── Round Trip ────────────────────────────────────────────────────────────────

const EXPRESSIONS: &[&str] = &[
    "1 AND 2",
    "1 OR 2 AND 3",
    "1 AND 2 OR 3 XOR 4 AND 5",
    "NOT(1 OR 2) XOR 3",
    "((1))",
    "NOT(1)",
    "NOT(NOT(1))",
    "NOT((1 AND 2))",
    "1 XOR NOT(2 AND 3 OR 4) XOR 5",
    "(1 OR 2) AND (3 OR 4) AND NOT(5 XOR 6)",
    "1 AND 1 OR 1",
    "6",
    "(1 AND (2 OR (3 XOR (4 AND NOT(5)))))",
    "1 OR 2 OR 3 AND 4 AND 5 XOR 6",
    "NOT(NOT(1 XOR 2) AND NOT(3))",
];

#[test]
fn semantic_round_trip() {
    for &text in EXPRESSIONS {
        let logic = Logic::new(text, 6).unwrap();
        let rendered = logic.to_string();
        let reparsed = Logic::new(&rendered, 6).unwrap();
        assert_eq!(reparsed.vars(), logic.vars(), "{} => {}", text, rendered);
        for values in assignments(6) {
            assert_eq!(
                reparsed.eval(&values),
                logic.eval(&values),
                "{} => {} on {:?}",
                text,
                rendered,
                values
            );
        }
    }
}

#[test]
fn canonical_text_is_stable() {
    for &text in EXPRESSIONS {
        let rendered = Logic::new(text, 6).unwrap().to_string();
        let again = Logic::new(&rendered, 6).unwrap().to_string();
        assert_eq!(again, rendered, "{}", text);
    }
}

// ─── Evaluation ────────────────────────────────────────────────────────────────

#[test]
fn eval_is_total() {
    let logic = Logic::unbounded("10 OR NOT(3)").unwrap();
    assert!(logic.eval(&[]));
    assert!(logic.eval(&[true, true]));
    assert!(!logic.eval(&[false, false, true]));

    let mut values = vec![false; 10];
    values[2] = true;
    values[9] = true;
    assert!(logic.eval(&values));
}

#[test]
fn group_semantics() {
    let and = Logic::unbounded("1 AND 2 AND 3").unwrap();
    let or = Logic::unbounded("1 OR 2 OR 3").unwrap();
    let xor = Logic::unbounded("1 XOR 2 XOR 3").unwrap();
    let nand = Logic::unbounded("NOT(1 AND 2 AND 3)").unwrap();
    for values in assignments(3) {
        let count = values.iter().filter(|&&v| v).count();
        assert_eq!(and.eval(&values), count == 3);
        assert_eq!(or.eval(&values), count > 0);
        assert_eq!(xor.eval(&values), count % 2 == 1);
        assert_eq!(nand.eval(&values), !and.eval(&values));
    }
}

// ─── Removal ───────────────────────────────────────────────────────────────────

#[test]
fn remove_renumbers_survivors() {
    let mut logic = Logic::new("1 OR 3 AND 5", 5).unwrap();
    let removal = logic.remove(&[2, 3], None);

    assert_eq!(removal.removed, vec![2, 3]);
    assert_eq!(removal.vars, vec![1, 3]);
    assert_eq!(removal.renumbered, BTreeMap::from([(1, 1), (5, 3)]));
    assert_eq!(logic.to_string(), "1 OR 3");
    assert_eq!(logic.var_limit(), VarLimit::Bounded(3));
}

#[test]
fn remove_preserves_remaining_semantics() {
    let original = Logic::new("(1 OR 2) AND NOT(3 XOR 4)", 4).unwrap();
    let mut logic = original.clone();
    logic.remove(&[2], None);
    assert_eq!(logic.to_string(), "1 AND NOT(2 XOR 3)");

    // Old variables 1, 3, 4 are now 1, 2, 3; old 2 is gone (false).
    for values in assignments(3) {
        let old = [values[0], false, values[1], values[2]];
        assert_eq!(logic.eval(&values), original.eval(&old), "{:?}", values);
    }
}

#[test]
fn remove_then_readd() {
    let mut logic = Logic::new("1 AND 2 AND 3", 3).unwrap();
    logic.remove(&[2], None);
    assert_eq!(logic.vars_count(), 2);
    assert_eq!(logic.var_limit(), VarLimit::Bounded(2));

    let text = format!("{} AND 3", logic);
    logic.update(&text, Some(3)).unwrap();
    assert_eq!(logic.vars(), &[1, 2, 3]);
    assert_eq!(logic.vars_count(), 3);
    assert_eq!(logic.to_string(), "1 AND 2 AND 3");
}

#[test]
fn remove_all_then_update() {
    let mut logic = Logic::new("NOT(1) XOR 2", 2).unwrap();
    logic.remove(&[1, 2], None);
    assert!(logic.is_empty());
    assert_eq!(logic.var_limit(), VarLimit::Bounded(0));
    assert!(!logic.eval(&[true, true]));

    logic.update("1", Some(1)).unwrap();
    assert!(!logic.is_empty());
    assert!(logic.eval(&[true]));
}

// ─── Truth Tables ──────────────────────────────────────────────────────────────

#[test]
fn truth_table_covers_every_assignment_once() {
    for &text in EXPRESSIONS {
        let logic = Logic::new(text, 6).unwrap();
        let k = logic.vars_count();
        let table = logic.truth_table().unwrap();
        assert_eq!(table.len(), 1 << k, "{}", text);

        let mut seen = HashSet::new();
        for (values, expected) in table
            .successes
            .iter()
            .map(|v| (v, true))
            .chain(table.failures.iter().map(|v| (v, false)))
        {
            assert_eq!(logic.eval(values), expected);
            // Untracked positions stay unset.
            for (i, &value) in values.iter().enumerate() {
                if !logic.vars().contains(&(i as u32 + 1)) {
                    assert!(!value);
                }
            }
            assert!(seen.insert(values.clone()), "{}: duplicate {:?}", text, values);
        }
    }
}

#[test]
fn permutations_over_sparse_variables() {
    let logic = Logic::new("2 AND NOT(5)", 5).unwrap();
    let rows: Vec<_> = logic.permutations().unwrap().collect();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|(values, _)| values.len() == 5));
    let satisfying: Vec<_> = rows.iter().filter(|(_, value)| *value).map(|(values, _)| values).collect();
    assert_eq!(satisfying, vec![&vec![false, true, false, false, false]]);
}

#[test]
fn truth_table_refuses_large_expressions() {
    let text = (1..=17).map(|i| i.to_string()).collect::<Vec<_>>().join(" OR ");
    let logic = Logic::unbounded(&text).unwrap();
    assert_eq!(
        logic.truth_table().unwrap_err(),
        LogicError::TooManyVariables { count: 17, max: 16 }
    );
    assert_eq!(logic.truth_table().unwrap_err().kind(), ErrorKind::Capacity);
}

#[test]
fn truth_table_refuses_sparse_wide_expressions() {
    let logic = Logic::unbounded("1 OR 2000000000 OR 2100000000").unwrap();
    assert_eq!(logic.vars_count(), 3);

    let err = logic.truth_table().unwrap_err();
    assert_eq!(
        err,
        LogicError::AssignmentTooWide {
            width: 2_100_000_000,
            max: 1024,
        }
    );
    assert_eq!(err.kind(), ErrorKind::Capacity);
    assert!(logic.permutations().is_err());

    // Evaluation stays available.
    assert!(logic.eval(&[true]));
}
