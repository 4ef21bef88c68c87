//! Regex abstract syntax tree.
//!
//! Unions and concatenations are n-ary: a chain `a+b+c` is one `Union` node
//! holding its operands in source order, so the tree is only as deep as the
//! group nesting.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// The empty language. Not reachable from the surface syntax.
    Empty,
    /// The empty string, written `λ`.
    Epsilon,
    Symbol(char),
    Star(Box<Expr>),
    /// At least two operands, left-associative.
    Union(Vec<Expr>),
    /// At least two operands, left-associative.
    Concat(Vec<Expr>),
}

impl Expr {
    pub fn star(inner: Expr) -> Self {
        Expr::Star(Box::new(inner))
    }

    /// `lhs + rhs`. A union on the left is extended in place.
    pub fn union(lhs: Expr, rhs: Expr) -> Self {
        match lhs {
            Expr::Union(mut operands) => {
                operands.push(rhs);
                Expr::Union(operands)
            }
            lhs => Expr::Union(vec![lhs, rhs]),
        }
    }

    /// `lhs . rhs`. A concatenation on the left is extended in place.
    pub fn concat(lhs: Expr, rhs: Expr) -> Self {
        match lhs {
            Expr::Concat(mut operands) => {
                operands.push(rhs);
                Expr::Concat(operands)
            }
            lhs => Expr::Concat(vec![lhs, rhs]),
        }
    }
}

/// Fully parenthesized form: every binary union and concatenation gets its
/// own parentheses, so the left-associative shape is visible.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Empty => write!(f, "∅"),
            Expr::Epsilon => write!(f, "λ"),
            Expr::Symbol(c) => write!(f, "{c}"),
            Expr::Star(inner) => write!(f, "{inner}*"),
            Expr::Union(operands) => fmt_chain(f, operands, '+'),
            Expr::Concat(operands) => fmt_chain(f, operands, '.'),
        }
    }
}

fn fmt_chain(f: &mut fmt::Formatter<'_>, operands: &[Expr], op: char) -> fmt::Result {
    let Some((first, rest)) = operands.split_first() else {
        return Ok(());
    };
    for _ in rest {
        write!(f, "(")?;
    }
    write!(f, "{first}")?;
    for operand in rest {
        write!(f, "{op}{operand})")?;
    }
    Ok(())
}
