//! Visitor pattern for traversing the parse tree.
//!
//! Downstream consumers (simplifiers, solvers, renderers) that want an
//! external traversal point implement [`Visitor`]; parse-tree nodes implement
//! [`Visitable`] to accept one. Default visitor methods just walk children,
//! so an implementation only overrides the node kinds it cares about.

use crate::ast::*;

/// The result type for visitor operations.
pub type VisitResult<T = ()> = Result<T, VisitError>;

/// An error that can occur during tree traversal.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// An error with a custom message.
    #[error("{0}")]
    Custom(String),

    /// An error anchored at a source span.
    #[error("{message} at {span:?}")]
    Located { message: String, span: Span },
}

impl VisitError {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        VisitError::Custom(msg.into())
    }

    pub fn located<T: Into<String>>(msg: T, span: Span) -> Self {
        VisitError::Located {
            message: msg.into(),
            span,
        }
    }
}

/// A trait for types that can be visited by a [`Visitor`].
pub trait Visitable {
    /// Accepts a visitor and calls the appropriate visit method.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output>;

    /// Visits the children of this node with the given visitor.
    fn visit_children<V: Visitor + ?Sized>(&self, _visitor: &mut V) -> VisitResult<V::Output> {
        Ok(Default::default())
    }
}

/// A visitor over the parse tree.
///
/// Every method defaults to walking the node's children and returning
/// `Output::default()`.
pub trait Visitor {
    /// The output type of the visitor.
    type Output: Default;

    fn visit_sum(&mut self, node: &SumNode) -> VisitResult<Self::Output> {
        node.visit_children(self)
    }

    fn visit_term(&mut self, node: &TermNode) -> VisitResult<Self::Output> {
        node.visit_children(self)
    }

    fn visit_explicit_product(&mut self, node: &ExplicitProductNode) -> VisitResult<Self::Output> {
        node.visit_children(self)
    }

    fn visit_implicit_product(&mut self, node: &ImplicitProductNode) -> VisitResult<Self::Output> {
        node.visit_children(self)
    }

    fn visit_fraction(&mut self, node: &FractionNode) -> VisitResult<Self::Output> {
        node.visit_children(self)
    }

    fn visit_power(&mut self, node: &PowerNode) -> VisitResult<Self::Output> {
        node.visit_children(self)
    }

    fn visit_number(&mut self, node: &NumberNode) -> VisitResult<Self::Output> {
        node.visit_children(self)
    }

    fn visit_variable(&mut self, node: &VariableNode) -> VisitResult<Self::Output> {
        node.visit_children(self)
    }

    fn visit_bracket(&mut self, node: &BracketNode) -> VisitResult<Self::Output> {
        node.visit_children(self)
    }
}

impl Visitable for SumNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_sum(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        for term in &self.terms {
            term.accept(visitor)?;
        }
        Ok(Default::default())
    }
}

impl Visitable for TermNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_term(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.value.accept(visitor)
    }
}

impl Visitable for ExplicitProductNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_explicit_product(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        for factor in &self.factors {
            factor.accept(visitor)?;
        }
        Ok(Default::default())
    }
}

impl Visitable for ImplicitProductNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_implicit_product(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        for factor in &self.factors {
            factor.accept(visitor)?;
        }
        Ok(Default::default())
    }
}

impl Visitable for FactorNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        match self {
            FactorNode::Fraction(node) => visitor.visit_fraction(node),
            FactorNode::Power(node) => visitor.visit_power(node),
            FactorNode::Atom(node) => node.accept(visitor),
        }
    }
}

impl Visitable for FractionNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_fraction(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.numerator.accept(visitor)?;
        self.denominator.accept(visitor)?;
        Ok(Default::default())
    }
}

impl Visitable for PowerNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_power(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.base.accept(visitor)?;
        self.exponent.accept(visitor)?;
        Ok(Default::default())
    }
}

impl Visitable for AtomNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        match self {
            AtomNode::Number(node) => visitor.visit_number(node),
            AtomNode::Variable(node) => visitor.visit_variable(node),
            AtomNode::Bracketed(node) => visitor.visit_bracket(node),
        }
    }
}

impl Visitable for NumberNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_number(self)
    }
}

impl Visitable for VariableNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_variable(self)
    }
}

impl Visitable for BracketNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_bracket(self)
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.expr.accept(visitor)
    }
}
