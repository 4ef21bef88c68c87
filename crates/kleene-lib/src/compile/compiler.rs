use crate::automaton::Automaton;
use crate::regex::Expr;

use super::fragment::{BuildGraph, Fragment};

/// Compile an expression into an NFA with a single final state.
pub fn compile(expr: &Expr) -> Automaton {
    let mut graph = BuildGraph::new();
    let fragment = lower(&mut graph, expr);
    graph.finish(fragment)
}

/// Operands are lowered left to right, so names follow source order.
///
/// Recursion only follows stars and groups; operand chains are folded in a
/// loop.
fn lower(graph: &mut BuildGraph, expr: &Expr) -> Fragment {
    match expr {
        Expr::Empty => graph.empty(),
        Expr::Epsilon => graph.epsilon(),
        Expr::Symbol(c) => graph.symbol(*c),
        Expr::Star(inner) => {
            let inner = lower(graph, inner);
            graph.star(inner)
        }
        Expr::Union(operands) => fold(graph, operands, BuildGraph::empty, BuildGraph::union),
        Expr::Concat(operands) => fold(graph, operands, BuildGraph::epsilon, BuildGraph::concat),
    }
}

/// Left fold of `combine` over the operands; `unit` when there are none.
fn fold(
    graph: &mut BuildGraph,
    operands: &[Expr],
    unit: fn(&mut BuildGraph) -> Fragment,
    combine: fn(&mut BuildGraph, Fragment, Fragment) -> Fragment,
) -> Fragment {
    let Some((first, rest)) = operands.split_first() else {
        return unit(graph);
    };
    let mut acc = lower(graph, first);
    for operand in rest {
        let rhs = lower(graph, operand);
        acc = combine(graph, acc, rhs);
    }
    acc
}
