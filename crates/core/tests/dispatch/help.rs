// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help description ordering and reserved options.

use argtree_core::{Command, OptionDef, ParseOutcome, Style};

use super::{bump, counter, parser, tokens};

#[test]
fn commands_and_options_keep_registration_order() {
    let mut parser = parser();
    for name in ["install", "download", "uninstall", "freeze"] {
        parser.add_command(Command::new([name]).unwrap(), None).unwrap();
    }
    parser.root_mut().add_flag("isolated", &["isolated"], "").unwrap();
    parser.root_mut().add_flag("verbose", &["v", "verbose"], "").unwrap();

    let page = parser.help_page();
    let commands: Vec<&str> = page.commands.iter().map(|c| c.names[0].as_str()).collect();
    assert_eq!(commands, vec!["install", "download", "uninstall", "freeze"]);
    let options: Vec<&str> = page.options.iter().map(|o| o.key.as_str()).collect();
    assert_eq!(options, vec!["help", "isolated", "verbose"]);
}

#[test]
fn explicit_index_overrides_display_position() {
    let mut parser = parser();
    parser.add_command(Command::new(["install"]).unwrap(), None).unwrap();
    parser.add_command(Command::new(["list"]).unwrap(), None).unwrap();
    parser.add_command(Command::new(["help"]).unwrap(), Some(0)).unwrap();

    let page = parser.help_page();
    let commands: Vec<&str> = page.commands.iter().map(|c| c.names[0].as_str()).collect();
    assert_eq!(commands, vec!["help", "install", "list"]);
    // lookup is unaffected by display order
    assert!(parser.root().command("list").is_some());
}

#[test]
fn help_ends_parse_without_running_command() {
    let runs = counter();
    let mut parser = parser();
    parser.root_mut().set_callback(bump(&runs));
    parser
        .root_mut()
        .add_float_option("timeout", &["timeout"], "SEC", "Set the socket timeout.")
        .unwrap();

    let outcome = parser.parse(&tokens(&["--timeout", "3", "-h"])).unwrap();
    let ParseOutcome::Help(page) = outcome else {
        panic!("expected help, got {outcome:?}");
    };
    assert_eq!(runs.get(), 0);

    let style = Style::default();
    let labels: Vec<String> = page.options.iter().map(|o| o.label(&style)).collect();
    assert_eq!(labels, vec!["-h, --help", "--timeout <sec>"]);
}

#[test]
fn version_prints_substituted_template() {
    let runs = counter();
    let mut parser = parser();
    parser.root_mut().set_callback(bump(&runs));
    parser
        .add_version_option(Some("{name} v{version} ({name})"), None)
        .unwrap();

    let outcome = parser.parse(&tokens(&["--version"])).unwrap();
    assert_eq!(
        outcome,
        ParseOutcome::Version("my-program v0.0.1 (my-program)".to_string())
    );
    assert_eq!(runs.get(), 0);
}

#[test]
fn command_aliases_render_with_separator() {
    let mut parser = parser();
    parser
        .add_command(
            Command::new(["install", "i", "add"])
                .unwrap()
                .with_help("Install packages."),
            None,
        )
        .unwrap();

    let page = parser.help_page();
    assert_eq!(page.commands[0].label(parser.style()), "install, i, add");
    assert_eq!(page.commands[0].help, "Install packages.");
}

#[test]
fn multi_parameter_option_label() {
    let mut parser = parser();
    let bind = OptionDef::new(
        "bind",
        ["b", "bind"],
        argtree_core::ParameterSet::new(
            vec![
                Box::new(argtree_core::interpreter::Text) as Box<dyn argtree_core::Interpreter>,
                Box::new(argtree_core::interpreter::Int),
            ],
            vec!["host".to_string(), "port".to_string()],
        )
        .unwrap(),
    )
    .unwrap();
    parser.add_option(bind, None).unwrap();

    let page = parser.help_page();
    let bind = page.options.iter().find(|o| o.key == "bind").unwrap();
    assert_eq!(bind.label(parser.style()), "-b, --bind <host> <port>");
}
