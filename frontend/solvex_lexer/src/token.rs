use std::fmt;

/// Represents a token's location in the source text.
///
/// Line and column numbers are 1-based, the byte offset is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number in the source
    pub line: usize,
    /// The 1-based column number in the source
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

/// The kind of a token in the expression language.
///
/// Payload-free so that sets of expected kinds are cheap to build and
/// compare; the literal text of a `NatNum` or `Variable` token lives in
/// [`Token::lexeme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Plus,
    Minus,
    Star,
    LBracket,
    Slash,
    RBracket,
    Caret,
    LParen,
    RParen,
    NatNum,
    Variable,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenType::Plus => "'+'",
            TokenType::Minus => "'-'",
            TokenType::Star => "'*'",
            TokenType::LBracket => "'['",
            TokenType::Slash => "'/'",
            TokenType::RBracket => "']'",
            TokenType::Caret => "'^'",
            TokenType::LParen => "'('",
            TokenType::RParen => "')'",
            TokenType::NatNum => "a natural number",
            TokenType::Variable => "a variable",
        };
        write!(f, "{text}")
    }
}

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    /// The literal text of the token as it appeared in the source.
    pub lexeme: String,
    pub location: Location,
}

impl Token {
    pub fn new(token_type: TokenType, lexeme: impl Into<String>, location: Location) -> Self {
        Token {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// The byte range this token covers in the source.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.location.offset..self.location.offset + self.lexeme.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
