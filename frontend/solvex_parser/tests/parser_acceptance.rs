//! Acceptance tests for the expression grammar, exercising the public
//! lex-then-parse pipeline the way a downstream solver would.

use solvex_ast::{FactorNode, Sign};
use solvex_lexer::{tokenize, Token};
use solvex_parser::parser::{parse_expr, parse_str, TokenSlice};

fn to_slice(src: &str) -> TokenSlice<'static> {
    let tokens: Vec<Token> = tokenize(src).expect("lex ok");
    TokenSlice::new(Box::leak(Box::new(tokens)))
}

#[test]
fn accepts_the_core_constructs() {
    for src in [
        "1",
        "x",
        "1+2",
        "1-2",
        "-1+2",
        "2x",
        "2*x",
        "[1/2]",
        "[1/2]x",
        "[[1/2]/3]",
        "[x^2]",
        "(1+2)",
        "x[y^2]",
        "[1/2]x+3*(y-1)",
    ] {
        assert!(parse_str(src).is_ok(), "{src:?} should parse");
    }
}

#[test]
fn rejects_the_core_negative_cases() {
    for src in [
        "",
        "1 2",
        "x[1/2]",
        "[[1/2]^2]",
        "1+",
        "*2",
        "[1/2",
        "(1+2",
        "[x^]",
        "1+2]",
    ] {
        assert!(parse_str(src).is_err(), "{src:?} should be rejected");
    }
}

#[test]
fn prefix_entry_point_stops_at_the_first_non_continuation() {
    let ts = to_slice("1+2]");
    let (rest, expr) = parse_expr(ts).expect("prefix should parse");
    assert_eq!(expr.terms.len(), 2);
    assert_eq!(rest.peek().unwrap().lexeme, "]");
}

#[test]
fn term_signs_arrive_in_source_order() {
    let expr = parse_str("1+2-3+x").expect("should parse");
    let signs: Vec<Sign> = expr.terms.iter().map(|t| t.sign).collect();
    assert_eq!(signs, vec![Sign::Plus, Sign::Plus, Sign::Minus, Sign::Plus]);
}

#[test]
fn deeply_nested_input_parses_without_recovery() {
    let src = "[[1/2]/[[3/4]/(5+[x^2])]]";
    let expr = parse_str(src).expect("nested fractions should parse");
    let first = &expr.terms[0].value.factors[0].factors[0];
    assert!(matches!(first, FactorNode::Fraction(_)));
    assert_eq!(expr.to_string(), src);
}
