use snapbox::cargo_bin;
use snapbox::cmd::Command;

fn tern() -> Command {
    Command::new(cargo_bin!("tern")).env_remove("TERN_LOG")
}

fn stderr_of(args: &[&str]) -> String {
    let assert = tern().args(args).assert().failure();
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

#[test]
fn eval_binary() {
    tern()
        .args(["eval", "and", "TRUE", "unknown"])
        .assert()
        .success()
        .stdout_eq("UNKNOWN\n");

    tern()
        .args(["eval", "implies", "true", "false"])
        .assert()
        .success()
        .stdout_eq("FALSE\n");
}

#[test]
fn eval_variadic() {
    tern()
        .args(["eval", "all"])
        .assert()
        .success()
        .stdout_eq("TRUE\n");

    tern()
        .args(["eval", "any", "-1", "0", "-1"])
        .assert()
        .success()
        .stdout_eq("UNKNOWN\n");
}

#[test]
fn eval_json() {
    tern()
        .args(["eval", "--json", "equivalent", "false", "false"])
        .assert()
        .success()
        .stdout_eq("\"TRUE\"\n");
}

#[test]
fn eval_invalid_literal() {
    let stderr = stderr_of(&["eval", "and", "TRUE", "ParseError"]);
    assert!(stderr.contains("ParseError"), "stderr: {stderr}");
}

#[test]
fn eval_wrong_arity() {
    let stderr = stderr_of(&["eval", "not", "TRUE", "FALSE"]);
    assert!(stderr.contains("not takes 1 operand, got 2"), "stderr: {stderr}");
}

#[test]
fn parse_literals() {
    tern()
        .args(["parse", "true", "-1", "Unknown"])
        .assert()
        .success()
        .stdout_eq("true => TRUE (1)\n-1 => FALSE (-1)\nUnknown => UNKNOWN (0)\n");
}

#[test]
fn parse_json() {
    tern()
        .args(["parse", "--json", "0"])
        .assert()
        .success()
        .stdout_eq(
            r#"[
  {
    "input": "0",
    "value": "UNKNOWN",
    "integer": 0
  }
]
"#,
        );
}

#[test]
fn parse_invalid_integer_literal() {
    let stderr = stderr_of(&["parse", "2"]);
    assert!(stderr.contains(r#"invalid literal: "2""#), "stderr: {stderr}");
}

#[test]
fn table_not() {
    tern()
        .args(["table", "not"])
        .assert()
        .success()
        .stdout_eq("+---+----+\n| A | ¬A |\n|---+----|\n| F |  T |\n| U |  U |\n| T |  F |\n+---+----+\n");
}

#[test]
fn table_variadic_fails() {
    let stderr = stderr_of(&["table", "any"]);
    assert!(stderr.contains("has no truth table"), "stderr: {stderr}");
}

#[test]
fn eval_operator_ignores_case() {
    tern()
        .args(["eval", "AND", "true", "true"])
        .assert()
        .success()
        .stdout_eq("TRUE\n");

    tern()
        .args(["table", "Implies"])
        .assert()
        .success();
}

#[test]
fn quiet_by_default() {
    tern()
        .args(["eval", "or", "0", "1"])
        .assert()
        .success()
        .stdout_eq("TRUE\n")
        .stderr_eq("");
}

#[test]
fn verbose_logs_to_stderr() {
    let assert = tern()
        .args(["-v", "eval", "or", "0", "1"])
        .assert()
        .success()
        .stdout_eq("TRUE\n");
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("parsed operand"), "stderr: {stderr}");
    assert!(stderr.contains("evaluated"), "stderr: {stderr}");
    assert!(stderr.contains("op=or"), "stderr: {stderr}");
    assert!(!stderr.contains('\x1b'), "stderr: {stderr}");
}

#[test]
fn log_filter_from_env() {
    let assert = Command::new(cargo_bin!("tern"))
        .env("TERN_LOG", "debug")
        .args(["eval", "or", "0", "1"])
        .assert()
        .success()
        .stdout_eq("TRUE\n");
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("evaluated"), "stderr: {stderr}");
    assert!(stderr.contains("op=or"), "stderr: {stderr}");
}
