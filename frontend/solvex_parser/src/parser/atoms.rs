//! The leaf rules: `atom`, `nonNumericAtom`, `naturalNumber`, `variable`.

use nom::combinator::map;

use solvex_ast::{AtomNode, NumberNode, Span, VariableNode};
use solvex_lexer::TokenType;

use super::{error::SyntaxError, expect_token, parse_bracket, PResult, TokenSlice};

/// A parenthesized expression or a variable (`nonNumericAtom`), or a
/// natural number, decided by the leading token's kind.
pub fn parse_atom(input: TokenSlice<'_>) -> PResult<'_, AtomNode> {
    match input.peek_kind() {
        Some(TokenType::LParen | TokenType::Variable) => parse_non_numeric_atom(input),
        Some(TokenType::NatNum) => map(parse_natural_number, AtomNode::Number)(input),
        _ => Err(nom::Err::Error(SyntaxError::unexpected(
            input,
            vec![TokenType::LParen, TokenType::Variable, TokenType::NatNum],
        ))),
    }
}

/// A parenthesized expression or a variable.
pub fn parse_non_numeric_atom(input: TokenSlice<'_>) -> PResult<'_, AtomNode> {
    match input.peek_kind() {
        Some(TokenType::LParen) => map(parse_bracket, AtomNode::Bracketed)(input),
        _ => map(parse_variable, AtomNode::Variable)(input),
    }
}

/// A single natural-number token. The literal text is kept verbatim; no
/// numeric validation happens here.
pub fn parse_natural_number(input: TokenSlice<'_>) -> PResult<'_, NumberNode> {
    let (rest, token) = expect_token(input, TokenType::NatNum)?;
    Ok((
        rest,
        NumberNode {
            text: token.lexeme.clone(),
            span: Span::from_token(token),
        },
    ))
}

/// A single variable token.
pub fn parse_variable(input: TokenSlice<'_>) -> PResult<'_, VariableNode> {
    let (rest, token) = expect_token(input, TokenType::Variable)?;
    Ok((
        rest,
        VariableNode {
            name: token.lexeme.clone(),
            span: Span::from_token(token),
        },
    ))
}
