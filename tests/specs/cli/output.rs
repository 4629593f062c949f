//! Dispatch result specs

use crate::prelude::*;

#[test]
fn no_args_dispatches_root() {
    cli()
        .passes()
        .stdout_eq("command: my-program\nno options set\n");
}

#[test]
fn human_output_is_a_table() {
    cli()
        .args(&["--timeout", "2.5", "--retries", "3", "-q"])
        .passes()
        .stdout_eq(
            "\
command: my-program

OPTION   VALUE
timeout  2.5
retries  3
quiet    set
",
        );
}

#[test]
fn json_output_has_command_and_values() {
    let run = cli()
        .args(&["-o", "json", "--nums", "[1,", "2,", "[3,", "4],", "5]"])
        .passes();
    assert_eq!(
        run.json(),
        serde_json::json!({
            "command": ["my-program"],
            "values": {"output": 1, "nums": [1, 2, [3, 4], 5]},
        })
    );
}

#[test]
fn subcommand_json_output() {
    let run = cli()
        .args(&["install", "-p", "[requests,", "flask]", "-U", "--output", "json"])
        .passes();
    assert_eq!(
        run.json(),
        serde_json::json!({
            "command": ["my-program", "install"],
            "values": {"packages": ["requests", "flask"], "upgrade": true, "output": 1},
        })
    );
}

#[test]
fn alias_path_uses_primary_name() {
    let run = cli().args(&["cache", "clear", "-o", "json"]).passes();
    assert_eq!(run.json()["command"], serde_json::json!(["my-program", "cache", "purge"]));
}

#[test]
fn repeated_option_keeps_last_value() {
    let run = cli()
        .args(&["--retries", "1", "-o", "json", "--retries", "4"])
        .passes();
    assert_eq!(run.json()["values"]["retries"], serde_json::json!(4));
}

#[test]
fn dashes_are_interchangeable() {
    let run = cli().args(&["-retries", "2", "---output", "json"]).passes();
    assert_eq!(run.json()["values"]["retries"], serde_json::json!(2));
}

#[test]
fn logging_goes_to_stderr() {
    cli()
        .env("ARGTREE_LOG", "debug")
        .args(&["-o", "json"])
        .passes()
        .stderr_has("command dispatched");
}
