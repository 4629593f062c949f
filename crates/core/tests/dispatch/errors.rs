// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse-time failures abort before any callback runs.

use argtree_core::{Command, Element, OptionDef, ParseError, ParseOutcome, ParserSettings};

use super::{bump, counter, parser, tokens};

#[test]
fn starved_int_option_is_incomplete() {
    let runs = counter();
    let mut parser = parser();
    parser.root_mut().set_callback(bump(&runs));
    parser
        .root_mut()
        .add_int_option("count", &["count"], "n", "")
        .unwrap();

    let err = parser.parse(&tokens(&["--count"])).unwrap_err();
    assert_eq!(
        err,
        ParseError::IncompleteArgument {
            option: "count".to_string(),
            parameter: "n".to_string(),
        }
    );
    assert_eq!(runs.get(), 0);
}

#[test]
fn unknown_shortcut_is_reported_verbatim() {
    let mut parser = parser();
    let err = parser.parse(&tokens(&["--isolated"])).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownOption {
            token: "--isolated".to_string(),
        }
    );
}

#[test]
fn invalid_selection_lists_choices() {
    let mut parser = parser();
    parser
        .root_mut()
        .add_selection_option(
            "exists-action",
            &["exists-action"],
            "action",
            &["switch", "ignore", "wipe", "backup", "abort"],
            "",
        )
        .unwrap();

    let err = parser
        .parse(&tokens(&["--exists-action", "delete"]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "option 'exists-action': 'delete' is not one of switch, ignore, wipe, backup, or abort"
    );
}

#[test]
fn bad_float_is_a_format_error() {
    let mut parser = parser();
    parser
        .root_mut()
        .add_float_option("timeout", &["timeout"], "sec", "")
        .unwrap();

    let err = parser.parse(&tokens(&["--timeout", "soon"])).unwrap_err();
    assert_eq!(
        err,
        ParseError::ParameterFormat {
            option: "timeout".to_string(),
            value: "soon".to_string(),
            expected: "float",
        }
    );
}

#[test]
fn unterminated_list_is_incomplete_list() {
    let runs = counter();
    let mut parser = parser();
    let mut install = Command::new(["install"]).unwrap().on_run(bump(&runs));
    install
        .add_list_option("nums", &["nums"], "list", Element::Int, "")
        .unwrap();
    parser.add_command(install, None).unwrap();

    let err = parser
        .parse(&tokens(&["install", "--nums", "[1,", "2,", "[3,4]"]))
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::IncompleteList {
            option: "nums".to_string(),
            open: '[',
            close: ']',
        }
    );
    assert_eq!(runs.get(), 0);
}

#[test]
fn mismatched_delimiters_rejected() {
    let mut parser = parser();
    parser
        .root_mut()
        .add_list_option("nums", &["nums"], "list", Element::Int, "")
        .unwrap();

    let err = parser
        .parse(&tokens(&["--nums", "[1,(2]", ")"]))
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::MismatchedDelimiter {
            option: "nums".to_string(),
            expected: ')',
            found: ']',
        }
    );
}

#[test]
fn error_in_late_option_discards_earlier_ones() {
    let runs = counter();
    let mut parser = parser();
    let flagged = counter();
    let seen = std::rc::Rc::clone(&flagged);
    parser
        .add_option(
            OptionDef::flag("verbose", &["v"])
                .unwrap()
                .on_invoke(move |_| {
                    seen.set(seen.get() + 1);
                    argtree_core::Flow::Continue
                }),
            None,
        )
        .unwrap();
    parser.root_mut().set_callback(bump(&runs));

    let err = parser.parse(&tokens(&["-v", "--nope"])).unwrap_err();
    assert!(matches!(err, ParseError::UnknownOption { .. }));
    assert_eq!(flagged.get(), 0);
    assert_eq!(runs.get(), 0);
}

#[test]
fn registration_collisions_fail_before_parsing() {
    let mut parser =
        argtree_core::ArgumentParser::new(ParserSettings::new("my-program")).unwrap();
    // -h is taken by the standard help option
    let err = parser
        .root_mut()
        .add_flag("host", &["h"], "")
        .unwrap_err();
    assert!(matches!(
        err,
        argtree_core::DefinitionError::DuplicateKey { .. }
    ));
}

#[test]
fn unknown_option_after_help_is_an_error() {
    let runs = counter();
    let mut parser = parser();
    parser.root_mut().set_callback(bump(&runs));

    let err = parser.parse(&tokens(&["--help", "--bogus"])).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownOption {
            token: "--bogus".to_string(),
        }
    );
    assert_eq!(runs.get(), 0);
}

#[test]
fn help_still_wins_over_valid_later_options() {
    let runs = counter();
    let mut parser = parser();
    parser.root_mut().set_callback(bump(&runs));
    parser
        .root_mut()
        .add_flag("quiet", &["q", "quiet"], "")
        .unwrap();

    let outcome = parser.parse(&tokens(&["--help", "-q"])).unwrap();
    assert!(matches!(outcome, ParseOutcome::Help(_)), "{outcome:?}");
    assert_eq!(runs.get(), 0);
}
