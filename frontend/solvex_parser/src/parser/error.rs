//! The parser's single error kind.

use std::fmt;

use solvex_ast::Span;
use solvex_lexer::{LexError, TokenType};

use super::TokenSlice;

/// Renders an expected-kind set for messages; an empty set means the parser
/// wanted the input to end.
pub(crate) struct DisplayExpected<'a>(pub &'a [TokenType]);

impl fmt::Display for DisplayExpected<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            [] => write!(f, "end of input"),
            [one] => write!(f, "{one}"),
            [init @ .., last] => {
                write!(f, "one of ")?;
                for kind in init {
                    write!(f, "{kind}, ")?;
                }
                write!(f, "{last}")
            }
        }
    }
}

pub(crate) struct DisplayFound<'a>(pub &'a Option<TokenType>);

impl fmt::Display for DisplayFound<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(kind) => write!(f, "{kind}"),
            None => write!(f, "end of input"),
        }
    }
}

/// A syntactic failure: the token at `position` did not match any alternative
/// the active grammar rule expected.
///
/// `expected` lists the token kinds that were viable at that point; an empty
/// list means the parser required the input to end there. `found` is `None`
/// when the failure is the absence of a valid next token (end of input, or a
/// character the lexer rejected).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "syntax error at offset {}: expected {}, found {}",
    .span.start,
    DisplayExpected(.expected),
    DisplayFound(.found)
)]
pub struct SyntaxError {
    /// Index of the offending token in the parsed stream.
    pub position: usize,
    /// Source range of the offending token, or the end of the input.
    pub span: Span,
    /// The kind actually seen, `None` at end of input.
    pub found: Option<TokenType>,
    /// The token kinds that would have been acceptable.
    pub expected: Vec<TokenType>,
}

impl SyntaxError {
    /// Failure at the next token of `input` (or at its end), with the given
    /// viable set.
    pub fn unexpected(input: TokenSlice<'_>, expected: Vec<TokenType>) -> Self {
        match input.peek() {
            Some(token) => SyntaxError {
                position: input.position(),
                span: Span::from_token(token),
                found: Some(token.token_type),
                expected,
            },
            None => SyntaxError {
                position: input.position(),
                span: input.end_span(),
                found: None,
                expected,
            },
        }
    }

    /// Failure because input remained after a complete expression.
    pub fn trailing(input: TokenSlice<'_>) -> Self {
        SyntaxError::unexpected(input, Vec::new())
    }

    /// A lexical failure surfaced through the parser's error type: the
    /// stream simply has no valid token at this point.
    pub fn from_lex(err: &LexError, position: usize) -> Self {
        SyntaxError {
            position,
            span: Span {
                start: err.location.offset,
                end: err.location.offset + err.fragment.len(),
                line: err.location.line,
                column: err.location.column,
            },
            found: None,
            expected: Vec::new(),
        }
    }

    /// Add `kind` to the viable set, keeping insertion order.
    pub fn also_expecting(mut self, kind: TokenType) -> Self {
        if !self.expected.contains(&kind) {
            self.expected.push(kind);
        }
        self
    }
}

impl<'a> nom::error::ParseError<TokenSlice<'a>> for SyntaxError {
    fn from_error_kind(input: TokenSlice<'a>, _kind: nom::error::ErrorKind) -> Self {
        SyntaxError::unexpected(input, Vec::new())
    }

    fn append(_input: TokenSlice<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }

    // Between two failed alternatives, keep the one that got further; on a
    // tie, merge the viable sets.
    fn or(mut self, other: Self) -> Self {
        use std::cmp::Ordering;
        match self.position.cmp(&other.position) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal => {
                for kind in other.expected {
                    if !self.expected.contains(&kind) {
                        self.expected.push(kind);
                    }
                }
                self
            }
        }
    }
}
