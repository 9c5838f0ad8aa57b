//! Tokenization for the solvex expression language.
//!
//! The token set is fixed and small: the sign tokens `+` and `-`, the
//! explicit multiply `*`, the square-bracket family `[`, `/`, `]`, `^` used
//! by fractions and powers, round parentheses, natural numbers, and
//! single-letter variables.

pub mod lexer;
pub mod logos_token;
pub mod token;

pub use lexer::{tokenize, LexError, Lexer};
pub use logos_token::LogosToken;
pub use token::{Location, Token, TokenType};
