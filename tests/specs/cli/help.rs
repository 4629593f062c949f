//! Help and version output specs

use crate::prelude::*;

#[test]
fn root_help_shows_sections() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("This is my program\n\nUsage:\n  my-program [command] [options]\n")
        .stdout_has("\nCommands:\n")
        .stdout_has("\nOptions:\n");
}

#[test]
fn root_help_lists_commands_in_registration_order() {
    let out = cli().args(&["-h"]).passes().stdout();
    let install = out.find("  install").unwrap();
    let download = out.find("  download").unwrap();
    let help = out.find("  help ").unwrap();
    assert!(install < download && download < help, "{out}");
}

#[test]
fn help_and_version_come_first() {
    let out = cli().args(&["--help"]).passes().stdout();
    let options = &out[out.find("Options:\n").unwrap()..];
    let mut lines = options.lines().skip(1);
    assert!(lines.next().unwrap().trim_start().starts_with("-h, --help"));
    assert!(lines.next().unwrap().trim_start().starts_with("-V, --version"));
}

#[test]
fn command_help_is_exact() {
    cli().args(&["install", "--help"]).passes().stdout_eq(
        "\
Install packages.

Usage:
  my-program install [options]

Options:
  -h, --help                Show help.
  -r, --requirement <file>  Install from the given requirements file.
  -p, --packages <names>    Package names, e.g. [requests, flask].
  -U, --upgrade             Upgrade all specified packages.
  -t, --target <dir>        Install into <dir>.
  --no-color                Suppress colored output.
  -o, --output <format>     Result format: human or json.
",
    );
}

#[test]
fn nested_command_help_shows_aliases() {
    cli()
        .args(&["cache", "-h"])
        .passes()
        .stdout_has("Usage:\n  my-program cache [command] [options]\n")
        .stdout_has("  purge, clear");
}

#[test]
fn scan_errors_win_over_help() {
    cli().args(&["-h", "--bogus"]).exits(2).stderr_has("unknown option: --bogus");
    cli().args(&["-h", "-v"]).passes().stdout_has("Usage:");
}

#[test]
fn version_prints_template() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_eq("my-program - version 0.0.1\n");
    cli().args(&["-V"]).passes().stdout_eq("my-program - version 0.0.1\n");
}

#[test]
fn forced_color_colors_headers() {
    cli()
        .env("NO_COLOR", "0")
        .env("COLOR", "1")
        .args(&["--help"])
        .passes()
        .stdout_has("\x1b[38;5;74mUsage:\x1b[0m");
}

#[test]
fn no_color_flag_suppresses_forced_color() {
    cli()
        .env("NO_COLOR", "0")
        .env("COLOR", "1")
        .args(&["--no-color", "--help"])
        .passes()
        .stdout_lacks("\x1b[");
}
