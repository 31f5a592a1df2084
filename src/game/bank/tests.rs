use std::path::Path;

use super::*;

fn load(csv: &str) -> Result<QuestionBank, DataSourceError> {
    QuestionBank::from_reader(csv.as_bytes())
}

#[test]
fn loads_questions_in_file_order() {
    let bank = load("statement,outcome,context\nSky is blue,true,obvious\nFish can fly,false,\n")
        .unwrap();
    assert_eq!(bank.len(), 2);
    let questions = bank.get_questions();
    assert_eq!(questions[0].statement, "Sky is blue");
    assert!(questions[0].outcome);
    assert_eq!(questions[0].context, "obvious");
    assert_eq!(questions[1].statement, "Fish can fly");
    assert!(!questions[1].outcome);
    assert_eq!(questions[1].context, "");
}

#[test]
fn matches_columns_regardless_of_case_and_whitespace() {
    let bank = load(" Statement ,OUTCOME, Context \nSky is blue,true,obvious\n").unwrap();
    let questions = bank.get_questions();
    assert_eq!(questions[0].statement, "Sky is blue");
    assert!(questions[0].outcome);
    assert_eq!(questions[0].context, "obvious");
}

#[test]
fn recognizes_truthy_and_falsy_tokens() {
    let csv = "statement,outcome\nA,True\nB, yes \nC,1\nD,False\nE,no\nF,0\n";
    let bank = load(csv).unwrap();
    let outcomes: Vec<bool> = bank.get_questions().iter().map(|q| q.outcome).collect();
    assert_eq!(outcomes, vec![true, true, true, false, false, false]);
}

#[test]
fn rejects_unrecognized_outcome_tokens() {
    let result = load("statement,outcome\nA,maybe\n");
    assert!(matches!(result, Err(DataSourceError::Malformed(_))));
}

#[test]
fn rejects_missing_statement_column() {
    let result = load("outcome,context\ntrue,\n");
    assert!(matches!(
        result,
        Err(DataSourceError::MissingColumn("statement"))
    ));
}

#[test]
fn rejects_missing_outcome_column() {
    let result = load("statement,context\nA,\n");
    assert!(matches!(
        result,
        Err(DataSourceError::MissingColumn("outcome"))
    ));
}

#[test]
fn rejects_empty_input() {
    let result = load("");
    assert!(matches!(result, Err(DataSourceError::MissingColumn(_))));
}

#[test]
fn accepts_headers_with_no_rows() {
    let bank = load("statement,outcome,context\n").unwrap();
    assert!(bank.is_empty());
}

#[test]
fn missing_context_column_defaults_to_empty() {
    let bank = load("statement,outcome\nSky is blue,true\n").unwrap();
    assert_eq!(bank.get_questions()[0].context, "");
}

#[test]
fn reports_missing_files() {
    let result = QuestionBank::open(Path::new("does-not-exist.csv"));
    assert!(matches!(result, Err(DataSourceError::Open { .. })));
}
