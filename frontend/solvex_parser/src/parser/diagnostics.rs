//! Presentation-friendly diagnostics derived from [`SyntaxError`].
//!
//! The parser core reports position and viable token kinds; this module
//! turns that into a message and an optional hint for whatever surface the
//! caller renders diagnostics on.

use solvex_ast::Span;
use solvex_lexer::TokenType;

use super::error::{DisplayExpected, DisplayFound, SyntaxError};

/// Severity levels for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

/// A user-facing diagnostic describing a problem in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Span,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn from_syntax_error(err: &SyntaxError) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: message_for(err),
            span: err.span,
            help: help_for(err),
        }
    }
}

impl From<&SyntaxError> for Diagnostic {
    fn from(err: &SyntaxError) -> Self {
        Diagnostic::from_syntax_error(err)
    }
}

fn message_for(err: &SyntaxError) -> String {
    match (&err.found, err.expected.is_empty()) {
        (None, true) => "expected an expression".to_string(),
        (Some(found), true) => format!("unexpected {found} after a complete expression"),
        (found, false) => format!(
            "expected {}, found {}",
            DisplayExpected(&err.expected),
            DisplayFound(found)
        ),
    }
}

fn help_for(err: &SyntaxError) -> Option<String> {
    if err.expected == [TokenType::Caret] && err.found == Some(TokenType::Slash) {
        // The classic case: a fraction where only a power is allowed.
        return Some(
            "a fraction like [1/2] can only be the first factor of a product; \
             multiply explicitly with '*' instead"
                .to_string(),
        );
    }
    if err.expected == [TokenType::Slash] && err.found == Some(TokenType::Caret) {
        return Some(
            "the base of a power must be a number, a variable, or a \
             parenthesized expression"
                .to_string(),
        );
    }
    if err.expected.contains(&TokenType::RBracket) {
        return Some("square brackets must close the [../..] or [..^..] construct".to_string());
    }
    if err.expected.contains(&TokenType::RParen) {
        return Some("unclosed parenthesis".to_string());
    }
    if err.expected.is_empty() && err.found.is_some() {
        return Some("join it to the expression with an operator, or remove it".to_string());
    }
    None
}
