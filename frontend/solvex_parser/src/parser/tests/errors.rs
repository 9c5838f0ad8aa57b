use pretty_assertions::assert_eq;

use solvex_lexer::TokenType;

use crate::parser::{parse, parse_str, Diagnostic, Severity};

#[test]
fn empty_input_fails_at_position_zero() {
    let err = parse(&[]).unwrap_err();
    assert_eq!(err.position, 0);
    assert_eq!(err.found, None);
    assert_eq!(
        err.expected,
        vec![
            TokenType::LParen,
            TokenType::Variable,
            TokenType::NatNum,
            TokenType::LBracket,
        ]
    );

    let err = parse_str("").unwrap_err();
    assert_eq!(err.position, 0);
    assert_eq!(err.span.start, 0);
}

#[test]
fn dangling_sign_reports_factor_starters() {
    let err = parse_str("1+").unwrap_err();
    assert_eq!(err.position, 2);
    assert_eq!(err.found, None);
    assert!(err.expected.contains(&TokenType::LBracket));
    assert!(err.expected.contains(&TokenType::NatNum));
}

#[test]
fn non_leading_fraction_reports_the_slash() {
    // x [ 1 / 2 ]: the bracket can only open a power here, so the slash is
    // where the mismatch surfaces.
    let err = parse_str("x[1/2]").unwrap_err();
    assert_eq!(err.position, 3);
    assert_eq!(err.found, Some(TokenType::Slash));
    assert_eq!(err.expected, vec![TokenType::Caret]);
}

#[test]
fn fraction_base_of_power_reports_the_caret() {
    // The fraction alternative gets furthest: [ [1/2] then '^' where '/'
    // was required.
    let err = parse_str("[[1/2]^2]").unwrap_err();
    assert_eq!(err.position, 6);
    assert_eq!(err.found, Some(TokenType::Caret));
    assert_eq!(err.expected, vec![TokenType::Slash]);
}

#[test]
fn unclosed_parenthesis() {
    let err = parse_str("(1+2").unwrap_err();
    assert_eq!(err.found, None);
    assert!(err.expected.contains(&TokenType::RParen));
}

#[test]
fn trailing_token_reports_expected_end() {
    let err = parse_str("1+2)").unwrap_err();
    assert_eq!(err.position, 3);
    assert_eq!(err.found, Some(TokenType::RParen));
    assert_eq!(err.expected, vec![]);
}

#[test]
fn whitespace_is_reported_at_its_offset() {
    let err = parse_str("1 2").unwrap_err();
    assert_eq!(err.position, 1);
    assert_eq!(err.span.start, 1);
    assert_eq!(err.found, None);
    assert_eq!(err.expected, vec![]);
}

#[test]
fn error_display_names_the_viable_set() {
    let err = parse_str("x[1/2]").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error at offset 3: expected '^', found '/'"
    );

    let err = parse_str("1+2)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error at offset 3: expected end of input, found ')'"
    );
}

#[test]
fn diagnostics_carry_help_for_misplaced_fractions() {
    let err = parse_str("x[1/2]").unwrap_err();
    let diag = Diagnostic::from_syntax_error(&err);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.span, err.span);
    assert!(diag.help.unwrap().contains("first factor"));
}

#[test]
fn diagnostics_for_trailing_input() {
    let err = parse_str("1+2)").unwrap_err();
    let diag = Diagnostic::from(&err);
    assert_eq!(diag.message, "unexpected ')' after a complete expression");
    assert!(diag.help.is_some());
}

#[test]
fn failure_yields_no_partial_tree() {
    // The API shape itself guarantees this; the assertion documents it.
    let result = parse_str("1+*2");
    assert!(result.is_err());
}
