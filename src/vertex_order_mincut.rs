//! Deterministic minimum-2-cut via repeated vertex ordering and pendant-pair
//! contraction (KW, MW, and Q share this loop; only the tighten rule
//! changes).

use crate::cut::{one_vertex_cut, Cut};
use crate::error::Error;
use crate::ordering::{ordering, TightenRule};
use crate::{Hypergraph, Result, VertexId};

/// Computes a minimum 2-cut of `h` by repeatedly ordering the (shrinking)
/// hypergraph, taking the one-vertex cut of the ordering's last vertex, and
/// merging the last two vertices, until a single vertex remains.
///
/// The starting vertex of each ordering pass is chosen arbitrarily (any
/// live vertex); this affects tie-breaking only, never the returned value.
///
/// # Failure
/// `Error::InvalidArgument` if `h` has fewer than two vertices.
pub fn vertex_order_mincut(h: &Hypergraph, rule: TightenRule) -> Result<Cut> {
    if h.num_vertices() < 2 {
        return Err(Error::invalid_argument("vertex-ordering min-cut requires at least two vertices"));
    }

    let mut g = h.clone();
    let mut best_value = f64::INFINITY;
    let mut best_partition: Option<(Vec<VertexId>, Vec<VertexId>)> = None;

    while g.num_vertices() > 1 {
        g.remove_singleton_and_empty_hyperedges();
        if g.num_vertices() == 1 {
            break;
        }

        let start = g.vertices().next().expect("loop guard ensures at least one vertex");
        let (order, _tightness) = ordering(&g, start, rule)?;
        let last = *order.last().expect("ordering of a non-empty hypergraph is non-empty");
        let value = one_vertex_cut(&g, last)?;

        if value < best_value {
            let last_within = g.vertices_within(last)?.to_vec();
            let mut rest_within = Vec::new();
            for v in g.vertices() {
                if v != last {
                    rest_within.extend_from_slice(g.vertices_within(v)?);
                }
            }
            best_value = value;
            best_partition = Some((last_within, rest_within));
        }

        let second_last = order[order.len() - 2];
        g.contract_vertices_in_place(&[last, second_last])?;
    }

    let (last_within, rest_within) = best_partition.expect("loop runs at least once when num_vertices >= 2");
    Ok(Cut::new(best_value, vec![last_within, rest_within]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hypergraph;

    fn h2() -> Hypergraph {
        Hypergraph::new(
            &(1..=10).collect::<Vec<_>>(),
            &[
                vec![1, 2],
                vec![3, 4],
                vec![5, 6],
                vec![7, 8],
                vec![9, 10],
            ],
        )
        .unwrap()
    }

    #[test]
    fn h2_min_2_cut_is_zero() {
        let h = h2();
        for rule in [TightenRule::Kw, TightenRule::Mw, TightenRule::Q] {
            let cut = vertex_order_mincut(&h, rule).unwrap();
            assert_eq!(cut.value, 0.0);
            assert_eq!(cut.k(), 2);
        }
    }

    #[test]
    fn rejects_single_vertex_hypergraph() {
        let h = Hypergraph::new(&[0], &[]).unwrap();
        assert!(vertex_order_mincut(&h, TightenRule::Kw).is_err());
    }
}
