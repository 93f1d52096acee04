use ahash::AHashSet;
use hypergraph_mincut::ordering::{ordering, TightenRule};
use hypergraph_mincut::{Hypergraph, VertexId};
use proptest::prelude::*;

fn arb_hypergraph() -> impl Strategy<Value = Hypergraph> {
    (3usize..8).prop_flat_map(|n| {
        let vertices: Vec<VertexId> = (0..n as u64).collect();
        let edge_strategy = proptest::collection::vec(0..n as u64, 2..4).prop_map(|mut vs| {
            vs.sort_unstable();
            vs.dedup();
            vs
        });
        proptest::collection::vec(edge_strategy, 1..6).prop_map(move |edges| {
            let mut valid: Vec<Vec<VertexId>> = edges.into_iter().filter(|e| e.len() >= 2).collect();
            if valid.is_empty() {
                valid.push(vec![vertices[0], vertices[1]]);
            }
            Hypergraph::new(&vertices, &valid).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn contraction_preserves_incidence_symmetry(h in arb_hypergraph()) {
        for e in h.edges().collect::<Vec<_>>() {
            let contracted = h.contract(e).unwrap();
            prop_assert!(contracted.is_valid());
        }
    }

    #[test]
    fn contraction_vertex_and_edge_counts_follow_the_formula(h in arb_hypergraph()) {
        for e in h.edges().collect::<Vec<_>>() {
            let endpoints = h.edge_vertices(e).unwrap().len();
            let before_vertices = h.num_vertices();
            let before_edges = h.num_edges();
            let contracted = h.contract(e).unwrap();
            prop_assert_eq!(contracted.num_vertices(), before_vertices - endpoints + 1);
            prop_assert!(contracted.num_edges() <= before_edges.saturating_sub(1));
        }
    }

    #[test]
    fn removing_a_vertex_drops_it_from_every_remaining_edge(h in arb_hypergraph()) {
        for v in h.vertices().collect::<Vec<_>>() {
            let mut g = h.clone();
            g.remove_vertex(v).unwrap();
            for e in g.edges().collect::<Vec<_>>() {
                let vs = g.edge_vertices(e).unwrap();
                prop_assert!(vs.len() >= 2);
                prop_assert!(!vs.contains(&v));
            }
        }
    }

    #[test]
    fn remove_singleton_and_empty_hyperedges_is_idempotent(h in arb_hypergraph()) {
        let mut once = h.clone();
        once.remove_singleton_and_empty_hyperedges();
        let mut twice = once.clone();
        twice.remove_singleton_and_empty_hyperedges();
        prop_assert_eq!(once.num_edges(), twice.num_edges());
    }

    #[test]
    fn kw_tightness_equals_weight_connecting_to_the_ordered_prefix(h in arb_hypergraph()) {
        let start = h.vertices().next().unwrap();
        let (order, tightness) = ordering(&h, start, TightenRule::Kw).unwrap();

        let mut prefix: AHashSet<VertexId> = AHashSet::new();
        prefix.insert(order[0]);
        for i in 1..order.len() {
            let v = order[i];
            let mut expected = 0.0;
            for e in h.edges() {
                let vs = h.edge_vertices(e).unwrap();
                if vs.contains(&v) && vs.iter().any(|u| prefix.contains(u)) {
                    expected += h.edge_weight(e).unwrap();
                }
            }
            prop_assert!((tightness[i] - expected).abs() < 1e-9);
            prefix.insert(v);
        }
    }

    #[test]
    fn q_tightness_equals_weight_connecting_to_the_ordered_prefix(h in arb_hypergraph()) {
        let start = h.vertices().next().unwrap();
        let (order, tightness) = ordering(&h, start, TightenRule::Q).unwrap();

        let mut prefix: AHashSet<VertexId> = AHashSet::new();
        prefix.insert(order[0]);
        for i in 1..order.len() {
            let v = order[i];
            let mut expected = 0.0;
            for e in h.edges() {
                let vs = h.edge_vertices(e).unwrap();
                if vs.contains(&v) && vs.iter().any(|u| prefix.contains(u)) {
                    expected += h.edge_weight(e).unwrap();
                }
            }
            prop_assert!((tightness[i] - expected).abs() < 1e-9);
            prefix.insert(v);
        }
    }
}
