use logos::Logos;

/// Raw token rules for the expression language.
///
/// There is deliberately no whitespace skip rule: solver input strings are
/// compact (`[1/2]x+3`), and any character outside these rules is a lexical
/// failure reported by [`crate::lexer::Lexer`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogosToken {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("[")]
    LBracket,
    #[token("/")]
    Slash,
    #[token("]")]
    RBracket,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // Natural number literals. Range checking is a downstream concern, the
    // lexer only captures the digit run.
    #[regex(r"[0-9]+")]
    NatNum,

    // Variables are single letters so that juxtaposition (`xy`) lexes as two
    // tokens and can form an implicit product.
    #[regex(r"[a-zA-Z]")]
    Variable,
}
