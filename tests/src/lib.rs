//! End-to-end tests for the lex -> parse -> print pipeline live in the
//! `tests/` directory of this crate.
