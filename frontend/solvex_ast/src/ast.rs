//! Parse tree definitions for the expression language.
//!
//! The tree is a tagged union with one variant per grammar rule. Nodes are
//! built bottom-up during a single parse pass, owned exclusively by their
//! parent, and never mutated after construction. Every node records the
//! source span of the tokens it was built from; spans are plain data and are
//! ignored by equality so that trees can be compared structurally.

use std::fmt;

use solvex_lexer::Token;

/// The source range a node was built from.
///
/// `start`/`end` are byte offsets; `line`/`column` are the 1-based position
/// of the first token.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    /// The span of a single token.
    pub fn from_token(token: &Token) -> Self {
        let range = token.range();
        Span {
            start: range.start,
            end: range.end,
            line: token.location.line,
            column: token.location.column,
        }
    }

    /// The span covering `self` through `other`.
    pub fn to(&self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
            line: self.line,
            column: self.column,
        }
    }
}

/// The sign of a term in a sum.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Plus => write!(f, "+"),
            Sign::Minus => write!(f, "-"),
        }
    }
}

/// The grammar's recursive entry point: an expression is a sum.
pub type ExprNode = SumNode;

/// A chain of signed terms. `terms` is never empty; the first term's sign is
/// `Plus` when no sign token was present in the source.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct SumNode {
    pub terms: Vec<TermNode>,
    pub span: Span,
}

/// A signed explicit product, the unit combined by addition.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TermNode {
    pub sign: Sign,
    pub value: ExplicitProductNode,
    pub span: Span,
}

/// Implicit products joined by the explicit `*` token. `factors` is never
/// empty; a single factor means no `*` appeared, so `2*x` and `2x` keep
/// distinguishable tree shapes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct ExplicitProductNode {
    pub factors: Vec<ImplicitProductNode>,
    pub span: Span,
}

/// Juxtaposed factors (`2x`, `[2/3]x`). `factors` is never empty.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct ImplicitProductNode {
    pub factors: Vec<FactorNode>,
    pub span: Span,
}

/// The unit combined by implicit multiplication. A `Fraction` is only valid
/// as the first factor of an implicit product; the parser enforces that.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub enum FactorNode {
    Fraction(FractionNode),
    Power(PowerNode),
    Atom(AtomNode),
}

/// `[ numerator / denominator ]`. Both sides are full expressions, so
/// fractions nest arbitrarily.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct FractionNode {
    pub numerator: Box<ExprNode>,
    pub denominator: Box<ExprNode>,
    pub span: Span,
}

/// `[ base ^ exponent ]`. The base is restricted to a single atom; the
/// exponent is a full expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct PowerNode {
    pub base: AtomNode,
    pub exponent: Box<ExprNode>,
    pub span: Span,
}

/// A leaf-level expression unit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub enum AtomNode {
    Number(NumberNode),
    Variable(VariableNode),
    Bracketed(BracketNode),
}

/// A natural number literal. The digit text is kept verbatim; numeric
/// parsing and range checking are downstream concerns.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct NumberNode {
    pub text: String,
    pub span: Span,
}

/// A single-letter variable.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct VariableNode {
    pub name: String,
    pub span: Span,
}

/// `( expr )` — ordinary grouping, distinct from the `[...]` family.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct BracketNode {
    pub expr: Box<ExprNode>,
    pub span: Span,
}

impl SumNode {
    pub fn span(&self) -> Span {
        self.span
    }
}

impl FactorNode {
    pub fn span(&self) -> Span {
        match self {
            FactorNode::Fraction(f) => f.span,
            FactorNode::Power(p) => p.span,
            FactorNode::Atom(a) => a.span(),
        }
    }
}

impl AtomNode {
    pub fn span(&self) -> Span {
        match self {
            AtomNode::Number(n) => n.span,
            AtomNode::Variable(v) => v.span,
            AtomNode::Bracketed(b) => b.span,
        }
    }
}

#[cfg(feature = "serde")]
impl SumNode {
    /// Serialize the tree to JSON, for downstream consumers that take the
    /// parse tree over a data boundary.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// Equality is structural: spans are bookkeeping for diagnostics and do not
// participate, so a re-parsed pretty-printed tree compares equal.

impl PartialEq for SumNode {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}
impl Eq for SumNode {}

impl PartialEq for TermNode {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.value == other.value
    }
}
impl Eq for TermNode {}

impl PartialEq for ExplicitProductNode {
    fn eq(&self, other: &Self) -> bool {
        self.factors == other.factors
    }
}
impl Eq for ExplicitProductNode {}

impl PartialEq for ImplicitProductNode {
    fn eq(&self, other: &Self) -> bool {
        self.factors == other.factors
    }
}
impl Eq for ImplicitProductNode {}

impl PartialEq for FactorNode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FactorNode::Fraction(a), FactorNode::Fraction(b)) => a == b,
            (FactorNode::Power(a), FactorNode::Power(b)) => a == b,
            (FactorNode::Atom(a), FactorNode::Atom(b)) => a == b,
            _ => false,
        }
    }
}
impl Eq for FactorNode {}

impl PartialEq for FractionNode {
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}
impl Eq for FractionNode {}

impl PartialEq for PowerNode {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.exponent == other.exponent
    }
}
impl Eq for PowerNode {}

impl PartialEq for AtomNode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AtomNode::Number(a), AtomNode::Number(b)) => a == b,
            (AtomNode::Variable(a), AtomNode::Variable(b)) => a == b,
            (AtomNode::Bracketed(a), AtomNode::Bracketed(b)) => a == b,
            _ => false,
        }
    }
}
impl Eq for AtomNode {}

impl PartialEq for NumberNode {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}
impl Eq for NumberNode {}

impl PartialEq for VariableNode {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for VariableNode {}

impl PartialEq for BracketNode {
    fn eq(&self, other: &Self) -> bool {
        self.expr == other.expr
    }
}
impl Eq for BracketNode {}

// The pretty-printer renders the canonical compact form of the language:
// terms joined by their signs, explicit products joined by `*`, implicit
// products concatenated, `[n/d]`, `[b^e]`, `(e)`. Re-lexing and re-parsing
// the output reproduces a structurally identical tree.

impl fmt::Display for SumNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 || term.sign == Sign::Minus {
                write!(f, "{}", term.sign)?;
            }
            write!(f, "{}", term.value)?;
        }
        Ok(())
    }
}

impl fmt::Display for ExplicitProductNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, factor) in self.factors.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            write!(f, "{factor}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ImplicitProductNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for factor in &self.factors {
            write!(f, "{factor}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FactorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorNode::Fraction(n) => write!(f, "{n}"),
            FactorNode::Power(n) => write!(f, "{n}"),
            FactorNode::Atom(n) => write!(f, "{n}"),
        }
    }
}

impl fmt::Display for FractionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}]", self.numerator, self.denominator)
    }
}

impl fmt::Display for PowerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}^{}]", self.base, self.exponent)
    }
}

impl fmt::Display for AtomNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomNode::Number(n) => write!(f, "{}", n.text),
            AtomNode::Variable(v) => write!(f, "{}", v.name),
            AtomNode::Bracketed(b) => write!(f, "({})", b.expr),
        }
    }
}
