//! Lexer for the expression language.
//!
//! Converts a source string into a stream of [`Token`]s for the parser. The
//! language is whitespace-free: any character outside the token rules,
//! including a space, stops the lexer with a [`LexError`].

use std::fmt;
use std::ops::Range;

use logos::Logos;

use crate::logos_token::LogosToken;
use crate::token::{Location, Token, TokenType};

/// A lexical failure: a character at `location` that cannot start any token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub location: Location,
    /// The text of the rejected input fragment.
    pub fragment: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid character {:?} at offset {}",
            self.fragment, self.location.offset
        )
    }
}

impl std::error::Error for LexError {}

/// The main lexer struct that holds the state of the lexing process.
pub struct Lexer<'a> {
    /// The source text being lexed
    source: &'a str,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The current byte offset in the source
    offset: usize,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
    /// Set after a lexical failure so iteration stops
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            line: 1,
            column: 1,
            offset: 0,
            inner: LogosToken::lexer(source),
            failed: false,
        }
    }

    /// Advance the tracked position past the given span.
    fn advance_position(&mut self, span: &Range<usize>) {
        let text = &self.source[self.offset..span.end];
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = span.end;
    }

    fn convert_token(&mut self, raw: LogosToken, lexeme: &str, span: &Range<usize>) -> Token {
        // Capture the position before advancing past the token.
        let location = Location {
            line: self.line,
            column: self.column,
            offset: span.start,
        };
        self.advance_position(span);

        let token_type = match raw {
            LogosToken::Plus => TokenType::Plus,
            LogosToken::Minus => TokenType::Minus,
            LogosToken::Star => TokenType::Star,
            LogosToken::LBracket => TokenType::LBracket,
            LogosToken::Slash => TokenType::Slash,
            LogosToken::RBracket => TokenType::RBracket,
            LogosToken::Caret => TokenType::Caret,
            LogosToken::LParen => TokenType::LParen,
            LogosToken::RParen => TokenType::RParen,
            LogosToken::NatNum => TokenType::NatNum,
            LogosToken::Variable => TokenType::Variable,
        };

        Token::new(token_type, lexeme, location)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let raw = self.inner.next()?;
        let span = self.inner.span();
        let lexeme = self.inner.slice();
        match raw {
            Ok(token) => {
                let token = self.convert_token(token, lexeme, &span);
                #[cfg(feature = "logging")]
                log::trace!("lexed {:?} {:?}", token.token_type, token.lexeme);
                Some(Ok(token))
            }
            Err(()) => {
                self.failed = true;
                #[cfg(feature = "logging")]
                log::debug!("lexical failure at offset {}: {:?}", span.start, lexeme);
                Some(Err(LexError {
                    location: Location {
                        line: self.line,
                        column: self.column,
                        offset: span.start,
                    },
                    fragment: lexeme.to_string(),
                }))
            }
        }
    }
}

/// Lex an entire source string, failing on the first invalid character.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}
