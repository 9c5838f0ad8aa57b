//! Parser implementation over lexed token streams.
//!
//! Each grammar rule is a pure function `parse_<rule>(TokenSlice) ->
//! PResult<Node>` in the rule's dependency order: atoms at the leaves,
//! bracketed constructs above them, factor and product layers, then the
//! signed-term sum that forms the top-level expression.
//!
//! Parsing is single-pass and synchronous. A rule failure aborts the whole
//! parse; every rule propagates a child failure unchanged, so the caller
//! receives either a complete tree or exactly one [`SyntaxError`]. The only
//! optional element in the grammar is the leading sign of the first term.

use nom::IResult;

use solvex_ast::{ExprNode, Span};
use solvex_lexer::{Lexer, Token, TokenType};

pub mod atoms;
pub mod brackets;
pub mod diagnostics;
pub mod error;
pub mod products;
pub mod sums;

#[cfg(test)]
mod tests;

pub use atoms::{parse_atom, parse_natural_number, parse_non_numeric_atom, parse_variable};
pub use brackets::{parse_bracket, parse_fraction, parse_power};
pub use diagnostics::{Diagnostic, Severity};
pub use error::SyntaxError;
pub use products::{
    parse_explicit_product, parse_first_factor, parse_implicit_product, parse_other_factor,
};
pub use sums::{parse_expr, parse_first_term, parse_other_term, parse_sum};

/// The result type of every grammar rule.
pub type PResult<'a, O> = IResult<TokenSlice<'a>, O, SyntaxError>;

/// An immutable cursor into a lexed token stream.
///
/// `Copy` semantics make speculative parsing free: a rule that wants to try
/// an alternative just keeps its original slice and rewinds by reusing it.
/// Each parse owns its own cursor, so concurrent parses of independent
/// inputs need no locking.
#[derive(Debug, Clone, Copy)]
pub struct TokenSlice<'a> {
    /// The full token stream being parsed
    tokens: &'a [Token],
    /// Current position in the token stream
    position: usize,
}

impl<'a> TokenSlice<'a> {
    /// Create a new token slice over a lexed stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenSlice {
            tokens,
            position: 0,
        }
    }

    /// The current token, without advancing.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    /// The kind of the current token, without advancing.
    pub fn peek_kind(&self) -> Option<TokenType> {
        self.peek().map(|t| t.token_type)
    }

    /// The slice one token further along.
    pub fn advance(&self) -> Self {
        TokenSlice {
            tokens: self.tokens,
            position: (self.position + 1).min(self.tokens.len()),
        }
    }

    /// Index of the next unconsumed token.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True when every token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// The source span of the tokens consumed between `self` and `to`.
    ///
    /// Every grammar rule consumes at least one token before building a
    /// node, so the range is never empty.
    pub fn span_to(&self, to: TokenSlice<'a>) -> Span {
        let first = &self.tokens[self.position];
        let last = &self.tokens[to.position - 1];
        Span::from_token(first).to(Span::from_token(last))
    }

    /// A zero-width span at the end of the stream, for end-of-input errors.
    pub fn end_span(&self) -> Span {
        match self.tokens.last() {
            Some(token) => {
                let span = Span::from_token(token);
                Span {
                    start: span.end,
                    end: span.end,
                    line: span.line,
                    column: span.column + token.lexeme.len(),
                }
            }
            None => Span::default(),
        }
    }
}

/// Match a token satisfying `predicate`, reporting `expected` as the viable
/// set on mismatch.
pub fn take_token_if<'a, P>(
    predicate: P,
    expected: Vec<TokenType>,
) -> impl Fn(TokenSlice<'a>) -> PResult<'a, &'a Token>
where
    P: Fn(TokenType) -> bool,
{
    move |input: TokenSlice<'a>| match input.peek() {
        Some(token) if predicate(token.token_type) => Ok((input.advance(), token)),
        _ => Err(nom::Err::Error(SyntaxError::unexpected(
            input,
            expected.clone(),
        ))),
    }
}

/// Match exactly one token of the given kind.
pub fn expect_token(input: TokenSlice<'_>, kind: TokenType) -> PResult<'_, &Token> {
    take_token_if(move |t| t == kind, vec![kind])(input)
}

/// Parse a whole token stream as one expression.
///
/// This is the "parse whole input" entry point: trailing tokens after a
/// complete expression are rejected.
pub fn parse(tokens: &[Token]) -> Result<ExprNode, SyntaxError> {
    let input = TokenSlice::new(tokens);
    let (rest, expr) = parse_expr(input).map_err(into_syntax_error)?;
    if !rest.is_empty() {
        log::debug!(
            "trailing token {:?} after complete expression",
            rest.peek_kind()
        );
        return Err(SyntaxError::trailing(rest));
    }
    Ok(expr)
}

/// Lex and parse a source string as one whole expression.
///
/// A lexical failure (any character outside the token rules, including
/// whitespace) surfaces as a [`SyntaxError`] at the offending offset: from
/// the parser's point of view the stream simply has no valid next token
/// there.
pub fn parse_str(source: &str) -> Result<ExprNode, SyntaxError> {
    let mut tokens = Vec::new();
    for item in Lexer::new(source) {
        match item {
            Ok(token) => tokens.push(token),
            Err(err) => return Err(SyntaxError::from_lex(&err, tokens.len())),
        }
    }
    parse(&tokens)
}

fn into_syntax_error(err: nom::Err<SyntaxError>) -> SyntaxError {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
        // Incomplete never occurs: the token stream is finite and complete.
        nom::Err::Incomplete(_) => SyntaxError {
            position: 0,
            span: Span::default(),
            found: None,
            expected: Vec::new(),
        },
    }
}
