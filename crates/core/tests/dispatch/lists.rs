// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! List literals spanning several tokens.

use argtree_core::{
    interpreter, split_top_level, DelimiterPair, DelimiterSet, Element, ListConfig,
    MatchPolicy, OptionDef, ParameterSet, ParseError, Value, DEFAULT_MAX_DEPTH,
};

use super::{dispatched, parser, tokens};

fn int(v: i64) -> Value {
    Value::Int(v)
}

/// `[1,2,3]` at depth 1, `[1,<depth - 1>,5]` below that, `7` at depth 0.
fn literal(depth: usize, pair: DelimiterPair) -> (String, Value) {
    match depth {
        0 => ("7".to_string(), int(7)),
        1 => (
            format!("{}1,2,3{}", pair.open, pair.close),
            Value::List(vec![int(1), int(2), int(3)]),
        ),
        _ => {
            let (inner, value) = literal(depth - 1, pair);
            (
                format!("{}1,{},5{}", pair.open, inner, pair.close),
                Value::List(vec![int(1), value, int(5)]),
            )
        }
    }
}

/// Split after every comma, the way a shell splits `[1, 2, [3, 4]]`.
fn shell_split(literal: &str) -> Vec<String> {
    literal
        .split_inclusive(',')
        .map(str::to_string)
        .collect()
}

fn nums_parser() -> argtree_core::ArgumentParser {
    let mut parser = parser();
    parser
        .root_mut()
        .add_list_option("nums", &["nums"], "list", Element::Int, "Numbers.")
        .unwrap();
    parser
}

#[yare::parameterized(
    bracket_0 = { DelimiterPair::BRACKET, 0 },
    bracket_1 = { DelimiterPair::BRACKET, 1 },
    bracket_2 = { DelimiterPair::BRACKET, 2 },
    bracket_3 = { DelimiterPair::BRACKET, 3 },
    bracket_4 = { DelimiterPair::BRACKET, 4 },
    bracket_5 = { DelimiterPair::BRACKET, 5 },
    paren_0   = { DelimiterPair::PAREN, 0 },
    paren_1   = { DelimiterPair::PAREN, 1 },
    paren_2   = { DelimiterPair::PAREN, 2 },
    paren_3   = { DelimiterPair::PAREN, 3 },
    paren_4   = { DelimiterPair::PAREN, 4 },
    paren_5   = { DelimiterPair::PAREN, 5 },
    brace_0   = { DelimiterPair::BRACE, 0 },
    brace_1   = { DelimiterPair::BRACE, 1 },
    brace_2   = { DelimiterPair::BRACE, 2 },
    brace_3   = { DelimiterPair::BRACE, 3 },
    brace_4   = { DelimiterPair::BRACE, 4 },
    brace_5   = { DelimiterPair::BRACE, 5 },
)]
fn list_round_trip_at_depth(pair: DelimiterPair, depth: usize) {
    let (text, expected) = literal(depth, pair);
    let mut input = tokens(&["--nums"]);
    input.extend(shell_split(&text));

    let mut parser = nums_parser();
    let (_, values) = dispatched(parser.parse(&input).unwrap());
    let value = values.get("nums").unwrap();
    assert_eq!(value, &expected);
    assert_eq!(value.depth(), depth);
}

#[yare::parameterized(
    bracket = { "[1,", "2,", "[3,4],5]" },
    paren   = { "(1,", "2,", "(3,4),5)" },
    brace   = { "{1,", "2,", "{3,4},5}" },
)]
fn documented_example_for_each_pair(a: &str, b: &str, c: &str) {
    let mut parser = nums_parser();
    let (_, values) = dispatched(parser.parse(&tokens(&["--nums", a, b, c])).unwrap());
    assert_eq!(
        values.get("nums"),
        Some(&Value::List(vec![
            int(1),
            int(2),
            Value::List(vec![int(3), int(4)]),
            int(5),
        ]))
    );
}

#[test]
fn list_stops_before_next_option() {
    let mut parser = nums_parser();
    parser.root_mut().add_flag("quiet", &["q"], "").unwrap();

    let (_, values) = dispatched(
        parser
            .parse(&tokens(&["--nums", "[1,", "2]", "-q"]))
            .unwrap(),
    );
    assert_eq!(values.list("nums").map(<[_]>::len), Some(2));
    assert!(values.is_set("quiet"));
}

#[test]
fn mixed_pairs_nest() {
    let mut parser = nums_parser();
    let (_, values) = dispatched(
        parser
            .parse(&tokens(&["--nums", "[1,", "(2,", "{3}),", "[]]"]))
            .unwrap(),
    );
    assert_eq!(values.get("nums").unwrap().to_string(), "[1, [2, [3]], []]");
}

#[test]
fn scalar_without_delimiters_is_a_bare_value() {
    let mut parser = nums_parser();
    let (_, values) = dispatched(parser.parse(&tokens(&["--nums", "9"])).unwrap());
    assert_eq!(values.get("nums"), Some(&int(9)));
}

#[test]
fn nested_commas_are_not_split_points() {
    let segments = split_top_level("1,[2,3],4", &DelimiterSet::default());
    assert_eq!(segments, vec!["1", "[2,3]", "4"]);
}

#[test]
fn float_and_text_elements() {
    let mut parser = parser();
    parser
        .root_mut()
        .add_list_option("weights", &["weights"], "list", Element::Float, "")
        .unwrap();
    parser
        .root_mut()
        .add_list_option("hosts", &["hosts"], "list", Element::Text, "")
        .unwrap();

    let (_, values) = dispatched(
        parser
            .parse(&tokens(&[
                "--weights", "[0.5,", "1.5]", "--hosts", "[pypi.org,", "example.com]",
            ]))
            .unwrap(),
    );
    assert_eq!(
        values.get("weights"),
        Some(&Value::List(vec![Value::Float(0.5), Value::Float(1.5)]))
    );
    assert_eq!(
        values.get("hosts"),
        Some(&Value::List(vec![
            Value::from("pypi.org"),
            Value::from("example.com"),
        ]))
    );
}

#[test]
fn loose_policy_misses_foreign_closer() {
    let config = ListConfig {
        policy: MatchPolicy::Loose,
        ..ListConfig::default()
    };
    let list = interpreter::List::with_config(Element::Int, config);
    let option = OptionDef::new("nums", ["nums"], ParameterSet::single(list, "list")).unwrap();

    let mut parser = parser();
    parser.add_option(option, None).unwrap();

    // the outer brackets balance after `(2]`, leaving `(2` unterminated
    let err = parser
        .parse(&tokens(&["--nums", "[1,(2]", ")"]))
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::IncompleteList {
            option: "nums".to_string(),
            open: '(',
            close: ')',
        }
    );
}

#[test]
fn depth_limit_is_enforced() {
    let config = ListConfig {
        max_depth: 2,
        ..ListConfig::default()
    };
    let list = interpreter::List::with_config(Element::Int, config);
    let option = OptionDef::new("nums", ["nums"], ParameterSet::single(list, "list")).unwrap();

    let mut parser = parser();
    parser.add_option(option, None).unwrap();

    assert!(parser.parse(&tokens(&["--nums", "[1,[2]]"])).is_ok());
    let err = parser
        .parse(&tokens(&["--nums", "[1,[2,[3]]]"]))
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::ExcessiveNesting {
            option: "nums".to_string(),
            depth: 3,
            max: 2,
        }
    );
}

#[test]
fn deep_literal_in_one_token_is_rejected() {
    let mut parser = parser();
    parser
        .root_mut()
        .add_list_option("nums", &["nums"], "list", Element::Int, "")
        .unwrap();

    let deep = format!("{}{}", "[".repeat(10_000), "]".repeat(10_000));
    let err = parser.parse(&tokens(&["--nums", deep.as_str()])).unwrap_err();
    assert_eq!(
        err,
        ParseError::ExcessiveNesting {
            option: "nums".to_string(),
            depth: DEFAULT_MAX_DEPTH + 1,
            max: DEFAULT_MAX_DEPTH,
        }
    );
}
