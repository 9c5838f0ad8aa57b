//! The sum layer: `expr`, `sum`, `firstTerm`, `otherTerm`.

use nom::combinator::opt;

use solvex_ast::{ExprNode, Sign, SumNode, TermNode};
use solvex_lexer::TokenType;

use super::{parse_explicit_product, take_token_if, PResult, TokenSlice};

/// The grammar's entry point. An expression is exactly one sum; the rule is
/// kept distinct because fractions, powers, and brackets recurse into "a
/// full expression" rather than into `sum` directly.
pub fn parse_expr(input: TokenSlice<'_>) -> PResult<'_, ExprNode> {
    log::trace!("parse_expr at token {}", input.position());
    parse_sum(input)
}

/// A first term followed by further signed terms, for as long as the next
/// token is `+` or `-`. Never backtracks.
pub fn parse_sum(input: TokenSlice<'_>) -> PResult<'_, SumNode> {
    let start = input;
    let (mut input, first) = parse_first_term(input)?;
    let mut terms = vec![first];
    while matches!(
        input.peek_kind(),
        Some(TokenType::Plus | TokenType::Minus)
    ) {
        let (rest, term) = parse_other_term(input)?;
        terms.push(term);
        input = rest;
    }
    let span = start.span_to(input);
    Ok((input, SumNode { terms, span }))
}

/// An optional sign followed by an explicit product. An absent sign means
/// an implicit `+` — the only optional-with-default element in the grammar.
pub fn parse_first_term(input: TokenSlice<'_>) -> PResult<'_, TermNode> {
    let start = input;
    let (input, sign) = opt(sign_token)(input)?;
    let (input, value) = parse_explicit_product(input)?;
    Ok((
        input,
        TermNode {
            sign: sign.unwrap_or(Sign::Plus),
            value,
            span: start.span_to(input),
        },
    ))
}

/// A mandatory sign followed by an explicit product. A term after the first
/// can never be sign-less; juxtaposition continues a product, not a sum.
pub fn parse_other_term(input: TokenSlice<'_>) -> PResult<'_, TermNode> {
    let start = input;
    let (input, sign) = sign_token(input)?;
    let (input, value) = parse_explicit_product(input)?;
    Ok((
        input,
        TermNode {
            sign,
            value,
            span: start.span_to(input),
        },
    ))
}

fn sign_token(input: TokenSlice<'_>) -> PResult<'_, Sign> {
    let (rest, token) = take_token_if(
        |t| matches!(t, TokenType::Plus | TokenType::Minus),
        vec![TokenType::Plus, TokenType::Minus],
    )(input)?;
    let sign = match token.token_type {
        TokenType::Plus => Sign::Plus,
        _ => Sign::Minus,
    };
    Ok((rest, sign))
}
