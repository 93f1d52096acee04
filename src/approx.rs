//! CX(ε): recursive (2+ε)-approximate global min-cut, built from α-tight
//! groups of a Q-ordering.

use crate::cut::one_vertex_cut;
use crate::error::Error;
use crate::ordering::{ordering, TightenRule};
use crate::{Hypergraph, Result, VertexId};

/// Computes a (2+ε)-approximate global (k=2) min-cut value of `h`.
///
/// Recursion depth is bounded by `num_vertices`; each round contracts at
/// least one α-tight group so the hypergraph strictly shrinks.
///
/// # Failure
/// `Error::InvalidArgument` if `epsilon <= 0.0`.
pub fn cx(h: &Hypergraph, epsilon: f64) -> Result<f64> {
    if epsilon <= 0.0 {
        return Err(Error::invalid_argument("epsilon must be positive"));
    }
    let mut g = h.clone().with_vertex_tracking(false);
    cx_recursive(&mut g, epsilon)
}

fn cx_recursive(h: &mut Hypergraph, epsilon: f64) -> Result<f64> {
    if h.num_vertices() == 1 {
        return Ok(f64::INFINITY);
    }

    let mut delta = f64::INFINITY;
    for v in h.vertices() {
        delta = delta.min(one_vertex_cut(h, v)?);
    }
    if delta == 0.0 {
        return Ok(0.0);
    }

    let alpha = delta / (2.0 + epsilon);
    let start = h.vertices().next().expect("checked above: at least one vertex");
    let (order, tightness) = ordering(h, start, TightenRule::Q)?;

    let mut groups: Vec<Vec<VertexId>> = Vec::new();
    let mut current = vec![order[0]];
    for i in 1..order.len() {
        if tightness[i] < alpha {
            groups.push(std::mem::take(&mut current));
        }
        current.push(order[i]);
    }
    groups.push(current);

    for group in &groups {
        if group.len() >= 2 {
            h.contract_vertices_in_place(group)?;
        }
    }

    Ok(delta.min(cx_recursive(h, epsilon)?))
}
