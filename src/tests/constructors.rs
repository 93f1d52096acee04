use hypergraph_mincut::Hypergraph;

#[test]
fn builds_unweighted_hypergraph_from_vertex_and_edge_lists() {
    let h = Hypergraph::new(
        &(0..10).collect::<Vec<_>>(),
        &[vec![0, 2, 5, 6], vec![3, 4, 5, 9], vec![0, 5]],
    )
    .unwrap();

    assert_eq!(h.num_vertices(), 10);
    assert_eq!(h.num_edges(), 3);
    assert!(!h.is_weighted());
}

#[test]
fn builds_weighted_hypergraph_from_endpoint_weight_pairs() {
    let h = Hypergraph::new_weighted(
        &[1, 2, 3, 4, 5, 6],
        &[(vec![1, 3, 5], 27.7), (vec![1, 2, 4], 18.1), (vec![3, 4, 6], 2.7)],
    )
    .unwrap();

    assert_eq!(h.num_edges(), 3);
    assert!(h.is_weighted());
    let total: f64 = h.edges().map(|e| h.edge_weight(e).unwrap()).sum();
    assert!((total - 48.5).abs() < 1e-9);
}

#[test]
fn rejects_empty_vertex_set() {
    assert!(Hypergraph::new(&[], &[]).is_err());
}

#[test]
fn rejects_edge_referencing_unknown_vertex() {
    assert!(Hypergraph::new(&[0, 1], &[vec![0, 2]]).is_err());
}

#[test]
fn deduplicates_repeated_endpoints_within_one_edge() {
    let h = Hypergraph::new(&[0, 1, 2], &[vec![0, 1, 0, 1, 2]]).unwrap();
    let e = h.edges().next().unwrap();
    let mut vs = h.edge_vertices(e).unwrap().to_vec();
    vs.sort_unstable();
    assert_eq!(vs, vec![0, 1, 2]);
}
