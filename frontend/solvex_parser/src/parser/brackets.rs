//! The bracketed constructs: `fraction`, `power`, and round-bracket
//! grouping. Fractions and powers share the square-bracket family; grouping
//! uses parentheses and is a pure pass-through.

use solvex_ast::{BracketNode, FractionNode, PowerNode};
use solvex_lexer::TokenType;

use super::{expect_token, parse_atom, parse_expr, PResult, TokenSlice};

/// `[ expr / expr ]`. Numerator and denominator are full expressions, so
/// fractions nest arbitrarily (`[[1/2]/3]`).
pub fn parse_fraction(input: TokenSlice<'_>) -> PResult<'_, FractionNode> {
    let start = input;
    let (input, _) = expect_token(input, TokenType::LBracket)?;
    let (input, numerator) = parse_expr(input)?;
    let (input, _) = expect_token(input, TokenType::Slash)?;
    let (input, denominator) = parse_expr(input)?;
    let (input, _) = expect_token(input, TokenType::RBracket)?;
    Ok((
        input,
        FractionNode {
            numerator: Box::new(numerator),
            denominator: Box::new(denominator),
            span: start.span_to(input),
        },
    ))
}

/// `[ atom ^ expr ]`. The base is restricted to a single atom: `[x^2]` is
/// valid, `[x+1^2]` is not representable without an enclosing bracket atom.
/// The exponent is a full expression, permitting nested powers and
/// fractions as exponents.
pub fn parse_power(input: TokenSlice<'_>) -> PResult<'_, PowerNode> {
    let start = input;
    let (input, _) = expect_token(input, TokenType::LBracket)?;
    let (input, base) = parse_atom(input)?;
    let (input, _) = expect_token(input, TokenType::Caret)?;
    let (input, exponent) = parse_expr(input)?;
    let (input, _) = expect_token(input, TokenType::RBracket)?;
    Ok((
        input,
        PowerNode {
            base,
            exponent: Box::new(exponent),
            span: start.span_to(input),
        },
    ))
}

/// `( expr )` — ordinary grouping.
pub fn parse_bracket(input: TokenSlice<'_>) -> PResult<'_, BracketNode> {
    let start = input;
    let (input, _) = expect_token(input, TokenType::LParen)?;
    let (input, expr) = parse_expr(input)?;
    let (input, _) = expect_token(input, TokenType::RParen)?;
    Ok((
        input,
        BracketNode {
            expr: Box::new(expr),
            span: start.span_to(input),
        },
    ))
}
