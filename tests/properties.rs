//! Property-based tests for the lexer and parser

use astdump::formats::to_sexp_string;
use astdump::lexer::{collapse_whitespace, lex, tokenize, tokenize_with_spans, Token};
use astdump::parser::{Attributes, AttributeValue, Label, Node};
use astdump::parse;
use proptest::prelude::*;

fn symbol() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}"
}

/// Values the sexp writer can reproduce exactly: no paren tokens, no spaces
/// outside literals
fn value() -> impl Strategy<Value = Vec<Token>> {
    prop_oneof![
        symbol().prop_map(|s| vec![Token::Symbol(s)]),
        (0u16..1000).prop_map(|n| vec![Token::Number(f64::from(n))]),
        "[a-zA-Z0-9 ]{0,8}".prop_map(|s| vec![Token::Literal(s)]),
        (symbol(), symbol()).prop_map(|(a, b)| vec![
            Token::Symbol(a),
            Token::Dot,
            Token::Symbol(b)
        ]),
        (symbol(), 0u16..100, 0u16..100).prop_map(|(file, line, column)| vec![
            Token::Symbol(file),
            Token::Dot,
            Token::Symbol("swift".to_string()),
            Token::Colon,
            Token::Number(f64::from(line)),
            Token::Colon,
            Token::Number(f64::from(column)),
        ]),
        (0u16..20, 0u16..20, 0u16..20).prop_map(|(major, minor, patch)| vec![
            Token::Number(f64::from(major)),
            Token::Dot,
            Token::Number(f64::from(minor)),
            Token::Dot,
            Token::Number(f64::from(patch)),
        ]),
        Just(vec![]),
    ]
}

/// Bare flag: a symbol, or a quoted name that may hold parens
fn flag() -> impl Strategy<Value = (Label, AttributeValue)> {
    prop_oneof![
        symbol().prop_map(|s| (Label::new(s.as_str()), AttributeValue::flag(&s))),
        "[a-z][a-z:()]{0,8}"
            .prop_map(|s| (Label::new(s.as_str()), AttributeValue::flag(&s))),
    ]
}

fn attributes() -> impl Strategy<Value = Attributes> {
    (
        prop::collection::btree_map(symbol(), value(), 0..4),
        prop::collection::vec(flag(), 0..3),
    )
        .prop_map(|(assigned, flags)| {
            let mut attributes = Attributes::new();
            for (key, tokens) in assigned {
                attributes.insert(Label::new(key), AttributeValue::new(tokens));
            }
            for (key, value) in flags {
                attributes.insert(key, value);
            }
            attributes
        })
}

fn node() -> impl Strategy<Value = Node> {
    let leaf = (symbol(), attributes())
        .prop_map(|(head, attributes)| Node::new(Label::new(head), attributes, vec![]));
    leaf.prop_recursive(3, 24, 3, |inner| {
        (symbol(), attributes(), prop::collection::vec(inner, 0..3)).prop_map(
            |(head, attributes, children)| Node::new(Label::new(head), attributes, children),
        )
    })
}

/// Text built from the characters that matter to the grammar
fn dumpish() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("("),
            Just(")"),
            Just(" "),
            Just("a"),
            Just("x"),
            Just("="),
            Just("'q'"),
            Just("function_ref"),
            Just("."),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

fn paren_counts(tokens: &[Token]) -> (usize, usize) {
    let open = tokens.iter().filter(|t| **t == Token::OpenParen).count();
    let close = tokens.iter().filter(|t| **t == Token::CloseParen).count();
    (open, close)
}

proptest! {
    #[test]
    fn test_spans_cover_input_exactly(input in any::<String>()) {
        let spans = tokenize_with_spans(&input);
        let mut expected_start = 0;
        let mut rebuilt = String::new();
        for (_, span) in &spans {
            prop_assert_eq!(span.start, expected_start);
            prop_assert!(span.end > span.start);
            rebuilt.push_str(&input[span.clone()]);
            expected_start = span.end;
        }
        prop_assert_eq!(expected_start, input.len());
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_collapse_is_idempotent(input in "[a( )\t\n=.'@-]{0,40}") {
        let once = collapse_whitespace(tokenize(&input));
        let twice = collapse_whitespace(once.clone());
        prop_assert_eq!(&once, &twice);
        for pair in once.windows(2) {
            prop_assert!(!(pair[0].is_whitespace() && pair[1].is_whitespace()));
        }
    }

    #[test]
    fn test_sexp_round_trip(tree in node()) {
        let rendered = to_sexp_string(&tree);
        let reparsed = parse(&rendered);
        prop_assert_eq!(reparsed.as_ref().ok(), Some(&tree), "rendered: {}", rendered);
    }

    #[test]
    fn test_rendered_trees_have_balanced_parens(tree in node()) {
        let (open, close) = paren_counts(&lex(&to_sexp_string(&tree)));
        prop_assert_eq!(open, close);
        prop_assert_eq!(open, tree.descendants().count());
    }

    #[test]
    fn test_parsed_input_is_balanced(input in dumpish()) {
        if parse(&input).is_ok() {
            let (open, close) = paren_counts(&lex(&input));
            prop_assert_eq!(open, close, "input: {:?}", input);
        }
    }

    #[test]
    fn test_parse_never_panics(input in any::<String>()) {
        let _ = parse(&input);
    }
}
