use super::*;
use solvex_lexer::{tokenize, Token};

mod errors;

/// Lex a source string into a leaked token slice for test convenience.
fn to_slice(src: &str) -> TokenSlice<'static> {
    let tokens: Vec<Token> = tokenize(src).expect("lex ok");
    TokenSlice::new(Box::leak(Box::new(tokens)))
}
