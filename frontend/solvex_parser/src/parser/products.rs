//! The product layer: `explicitProduct`, `implicitProduct`, `firstFactor`,
//! `otherFactor`.

use nom::branch::alt;
use nom::combinator::map;

use solvex_ast::{ExplicitProductNode, FactorNode, ImplicitProductNode};
use solvex_lexer::TokenType;

use super::{
    expect_token, parse_atom, parse_fraction, parse_power, PResult, TokenSlice,
};

/// The token kinds that can begin a factor.
const FACTOR_START: [TokenType; 4] = [
    TokenType::LBracket,
    TokenType::LParen,
    TokenType::NatNum,
    TokenType::Variable,
];

/// One implicit product, then zero or more `* implicitProduct` pairs.
///
/// The `*` token is consumed and discarded: explicit and implicit
/// multiplication mean the same thing, but the tree keeps their shapes
/// distinguishable (`2*x` is a chain of two one-factor products, `2x` a
/// single two-factor product).
pub fn parse_explicit_product(input: TokenSlice<'_>) -> PResult<'_, ExplicitProductNode> {
    let start = input;
    let (mut input, first) = parse_implicit_product(input)?;
    let mut factors = vec![first];
    while input.peek_kind() == Some(TokenType::Star) {
        let (rest, _) = expect_token(input, TokenType::Star)?;
        let (rest, next) = parse_implicit_product(rest)?;
        factors.push(next);
        input = rest;
    }
    Ok((
        input,
        ExplicitProductNode {
            factors,
            span: start.span_to(input),
        },
    ))
}

/// A run of juxtaposed factors: a first factor, then further factors for as
/// long as the next token can begin one. This is how `2x`, `[2/3]x`, and
/// `x[y^2]` parse as single multiplicative terms without an operator.
pub fn parse_implicit_product(input: TokenSlice<'_>) -> PResult<'_, ImplicitProductNode> {
    let start = input;
    let (mut input, first) = parse_first_factor(input)?;
    let mut factors = vec![first];
    while matches!(input.peek_kind(), Some(kind) if FACTOR_START.contains(&kind)) {
        let (rest, next) = parse_other_factor(input)?;
        factors.push(next);
        input = rest;
    }
    Ok((
        input,
        ImplicitProductNode {
            factors,
            span: start.span_to(input),
        },
    ))
}

/// On `[`, a fraction or a power; otherwise an atom.
///
/// Both bracketed shapes start with the same token, so the rule tries the
/// fraction layout first and rewinds to try the power layout if it does not
/// match. The rewind is free: [`TokenSlice`] is `Copy` and both shapes are
/// short and bounded.
pub fn parse_first_factor(input: TokenSlice<'_>) -> PResult<'_, FactorNode> {
    match input.peek_kind() {
        Some(TokenType::LBracket) => {
            log::trace!("bracketed factor at token {}", input.position());
            alt((
                map(parse_fraction, FactorNode::Fraction),
                map(parse_power, FactorNode::Power),
            ))(input)
        }
        _ => atom_factor(input),
    }
}

/// Like [`parse_first_factor`], except that a bare fraction is not offered:
/// `[1/2]x` is valid but `x[1/2]` is not. The asymmetry is intentional
/// grammar design.
pub fn parse_other_factor(input: TokenSlice<'_>) -> PResult<'_, FactorNode> {
    match input.peek_kind() {
        Some(TokenType::LBracket) => map(parse_power, FactorNode::Power)(input),
        _ => atom_factor(input),
    }
}

fn atom_factor(input: TokenSlice<'_>) -> PResult<'_, FactorNode> {
    map(parse_atom, FactorNode::Atom)(input).map_err(|err| {
        err.map(|e| {
            // At the dispatch token itself, `[` was also a viable start.
            if e.position == input.position() {
                e.also_expecting(TokenType::LBracket)
            } else {
                e
            }
        })
    })
}
