//! Recursive-descent parser for the solvex expression language.
//!
//! One parsing function per grammar rule, consuming tokens from an immutable
//! [`parser::TokenSlice`] and returning a typed parse node or a
//! [`parser::SyntaxError`] carrying the offending position and the set of
//! token kinds that were viable there.

pub mod parser;
