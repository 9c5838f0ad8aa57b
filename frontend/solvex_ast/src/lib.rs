//! Parse tree and traversal utilities for the solvex expression language.

pub mod ast;
pub mod visit;

pub use ast::{
    AtomNode, BracketNode, ExplicitProductNode, ExprNode, FactorNode, FractionNode,
    ImplicitProductNode, NumberNode, PowerNode, Sign, Span, SumNode, TermNode, VariableNode,
};
pub use visit::{VisitError, VisitResult, Visitable, Visitor};
