//! End-to-end sessions against the calculator binary.

mod common;

use common::TestSession;

#[test]
fn test_named_operation_and_exit() {
    let session = TestSession::new().unwrap();
    let out = session.run(&["add 5 10 15", "exit"]).unwrap();

    assert!(out.success);
    assert!(out.stdout.contains("===== Abacus Calculator ====="));
    assert!(out.stdout.contains("30.0"));
    assert!(out.stdout.contains("Thank you for using Abacus Calculator. Goodbye!"));
}

#[test]
fn test_expression_evaluates_left_to_right() {
    let session = TestSession::new().unwrap();
    let out = session.run(&["2+3*4-1", "(2+3)*4", "exit"]).unwrap();

    assert!(out.stdout.contains("19.0"));
    assert!(out.stdout.contains("20.0"));
}

#[test]
fn test_deep_nesting_reports_error_and_session_continues() {
    let session = TestSession::new().unwrap();
    let line = format!("{}1+1{}", "(".repeat(20_000), ")".repeat(20_000));
    let out = session.run(&[line.as_str(), "add 1 2", "exit"]).unwrap();

    assert!(out.success);
    assert!(out.stdout.contains(
        "Error evaluating expression: maximum nesting depth of 500 exceeded"
    ));
    assert!(out.stdout.contains("3.0"));
    assert!(out.stdout.contains("Thank you for using Abacus Calculator. Goodbye!"));
}

#[test]
fn test_unknown_command_hint() {
    let session = TestSession::new().unwrap();
    let out = session.run(&["frobnicate", "EXIT"]).unwrap();

    assert!(
        out.stdout
            .contains("Unknown command: 'frobnicate'. Type 'help' for available commands.")
    );
    assert!(out.success);
}

#[test]
fn test_history_is_saved_to_default_path() {
    let session = TestSession::new().unwrap();
    let out = session
        .run(&["multiply 6 7", "history 1", "history save", "exit"])
        .unwrap();

    assert!(out.stdout.contains("multiply 6 7 = 42.0"));
    let csv = std::fs::read_to_string(session.path().join("data/history.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("timestamp,operation,inputs,result"));
    assert!(lines.next().unwrap().ends_with(",multiply,6 7,42.0"));
}

#[test]
fn test_end_of_input_still_exits_cleanly() {
    let session = TestSession::new().unwrap();
    let out = session.run(&["divide 1 0"]).unwrap();

    assert!(out.stdout.contains("Error: Division by zero is not allowed"));
    assert!(out.stdout.contains("An unexpected error occurred: end of input"));
    assert!(out.success);
}

#[test]
fn test_log_file_written() {
    let session = TestSession::new().unwrap();
    session.run(&["exit"]).unwrap();

    let log = std::fs::read_to_string(session.path().join("logs/calculator.log")).unwrap();
    assert!(log.contains("Starting abacus"));
    assert!(log.contains("Application shutdown"));
}

#[test]
fn test_config_autosave_and_autoload() {
    let session = TestSession::new().unwrap();
    session
        .write_config(
            r#"
            [history]
            path = "saved/calc.csv"
            autoload = true
            autosave = true
            "#,
        )
        .unwrap();

    session.run(&["subtract 10 4", "exit"]).unwrap();
    assert!(session.path().join("saved/calc.csv").exists());

    let out = session.run(&["history", "exit"]).unwrap();
    assert!(out.stdout.contains("subtract 10 4 = 6.0"));
}
