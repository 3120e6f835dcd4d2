use super::*;
use crate::value::{FALSE, TRUE, UNKNOWN};

fn render(op: Operator) -> String {
    TruthTable::new(op).unwrap().to_string()
}

#[test]
fn test_variadic_has_no_table() {
    assert!(TruthTable::new(Operator::All).is_none());
    assert!(TruthTable::new(Operator::Any).is_none());
}

#[test]
fn test_not_table() {
    insta::assert_snapshot!(render(Operator::Not), @r"
    +---+----+
    | A | ¬A |
    |---+----|
    | F |  T |
    | U |  U |
    | T |  F |
    +---+----+
    ");
}

#[test]
fn test_and_table() {
    insta::assert_snapshot!(render(Operator::And), @r"
    +--------+-----------+
    |        |     B     |
    | A ∧ B  |---+---+---|
    |        | F | U | T |
    |----+---+---+---+---|
    |    | F | F | F | F |
    | A  | U | F | U | U |
    |    | T | F | U | T |
    +----+---+---+---+---+
    ");
}

#[test]
fn test_or_table() {
    insta::assert_snapshot!(render(Operator::Or), @r"
    +--------+-----------+
    |        |     B     |
    | A ∨ B  |---+---+---|
    |        | F | U | T |
    |----+---+---+---+---|
    |    | F | F | U | T |
    | A  | U | U | U | T |
    |    | T | T | T | T |
    +----+---+---+---+---+
    ");
}

#[test]
fn test_implies_table() {
    insta::assert_snapshot!(render(Operator::Implies), @r"
    +--------+-----------+
    |        |     B     |
    | A → B  |---+---+---|
    |        | F | U | T |
    |----+---+---+---+---|
    |    | F | T | T | T |
    | A  | U | U | U | T |
    |    | T | F | U | T |
    +----+---+---+---+---+
    ");
}

#[test]
fn test_equivalent_table() {
    insta::assert_snapshot!(render(Operator::Equivalent), @r"
    +--------+-----------+
    |        |     B     |
    | A ↔ B  |---+---+---|
    |        | F | U | T |
    |----+---+---+---+---|
    |    | F | T | U | F |
    | A  | U | U | U | U |
    |    | T | F | U | T |
    +----+---+---+---+---+
    ");
}

#[test]
fn test_rows() {
    let table = TruthTable::new(Operator::Equal).unwrap();
    assert_eq!(table.operator(), Operator::Equal);
    let rows = table.rows();
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[0], (vec![FALSE, FALSE], TRUE));
    assert_eq!(rows[1], (vec![FALSE, UNKNOWN], FALSE));
    assert_eq!(rows[4], (vec![UNKNOWN, UNKNOWN], TRUE));
    assert_eq!(rows[8], (vec![TRUE, TRUE], TRUE));

    let rows = TruthTable::new(Operator::Not).unwrap().rows();
    assert_eq!(
        rows,
        vec![(vec![FALSE], TRUE), (vec![UNKNOWN], UNKNOWN), (vec![TRUE], FALSE)]
    );
}
