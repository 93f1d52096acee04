use hypergraph_mincut::certificate::KTrimmedCertificate;
use hypergraph_mincut::contraction::{run, Context, Cxy, Fpz};
use hypergraph_mincut::cut::validate_cut;
use hypergraph_mincut::ordering::TightenRule;
use hypergraph_mincut::vertex_order_mincut::vertex_order_mincut;
use hypergraph_mincut::{approx, Hypergraph};

fn h1() -> Hypergraph {
    Hypergraph::new(
        &(1..=10).collect::<Vec<_>>(),
        &[
            vec![1, 2, 9],
            vec![1, 3, 9],
            vec![1, 2, 5, 7, 8],
            vec![3, 5, 8],
            vec![2, 5, 6],
            vec![6, 7, 9],
            vec![2, 3, 10],
            vec![5, 10],
            vec![1, 4],
            vec![4, 8, 10],
            vec![1, 2, 3],
            vec![1, 2, 3, 4, 5, 6, 7],
            vec![1, 5],
        ],
    )
    .unwrap()
}

fn h2() -> Hypergraph {
    Hypergraph::new(
        &(1..=10).collect::<Vec<_>>(),
        &[vec![1, 2], vec![3, 4], vec![5, 6], vec![7, 8], vec![9, 10]],
    )
    .unwrap()
}

fn h3() -> Hypergraph {
    Hypergraph::new_weighted(
        &(0..=5).collect::<Vec<_>>(),
        &[
            (vec![0, 1, 2], 3.0),
            (vec![1, 2, 3], 4.0),
            (vec![3, 4, 5], 3.0),
            (vec![0, 3, 5], 7.0),
            (vec![0, 1, 2, 3, 4], 2.0),
        ],
    )
    .unwrap()
}

#[test]
fn h1_min_2_cut_is_3_under_every_ordering_rule() {
    for rule in [TightenRule::Kw, TightenRule::Mw, TightenRule::Q] {
        let cut = vertex_order_mincut(&h1(), rule).unwrap();
        assert_eq!(cut.value, 3.0);
        validate_cut(&h1(), &cut).unwrap();
    }
}

#[test]
fn h1_k_above_2_never_beats_the_known_optimum() {
    // Known optima: k=3 -> 4, k=4 -> 6, k=5 -> 7. A randomized algorithm can
    // only ever report a cut at least this good; it is never an improvement
    // on the true minimum.
    let known_optimum = [(3usize, 4.0), (4, 6.0), (5, 7.0)];
    for (k, optimum) in known_optimum {
        let ctx = Context::new(k).with_seed(29).with_discovery_value(optimum).with_max_runs(400);
        let (cut, _) = run(&Cxy, &h1(), &ctx).unwrap();
        assert!(cut.value >= optimum, "k={k}: found {} below known optimum {optimum}", cut.value);
        assert_eq!(cut.k(), k);
        validate_cut(&h1(), &cut).unwrap();
    }
}

#[test]
fn h2_min_cut_values_match_the_known_table() {
    let h = h2();
    for k in 2..=5 {
        let ctx = Context::new(k).with_seed(5).with_discovery_value(0.0).with_max_runs(100);
        let (cut, _) = run(&Fpz, &h, &ctx).unwrap();
        assert_eq!(cut.value, 0.0, "k={k}");
    }
}

#[test]
fn h3_weighted_min_2_cut_is_5() {
    let cut = vertex_order_mincut(&h3(), TightenRule::Q).unwrap();
    assert_eq!(cut.value, 5.0);
    validate_cut(&h3(), &cut).unwrap();
}

#[test]
fn contracting_the_only_edge_leaves_the_untouched_vertices_plus_one_fresh_id() {
    let mut h = Hypergraph::new(&[0, 1, 2, 3, 4], &[vec![0, 1, 2]]).unwrap();
    let edge = h.edges().next().unwrap();
    let fresh = h.contract_in_place(edge).unwrap();

    let mut vertices: Vec<_> = h.vertices().collect();
    vertices.sort_unstable();
    assert_eq!(vertices, vec![3, 4, fresh]);
    assert_eq!(h.num_edges(), 0);
}

#[test]
fn h1_trimmed_certificate_min_cut_grows_with_k() {
    let cert = KTrimmedCertificate::new(&h1()).unwrap();

    let c1 = cert.certificate(1).unwrap();
    assert_eq!(vertex_order_mincut(&c1, TightenRule::Q).unwrap().value, 1.0);

    let c2 = cert.certificate(2).unwrap();
    assert_eq!(vertex_order_mincut(&c2, TightenRule::Q).unwrap().value, 2.0);

    let c3 = cert.certificate(3).unwrap();
    assert_eq!(vertex_order_mincut(&c3, TightenRule::Q).unwrap().value, 3.0);
}

#[test]
fn h1_cx_approximation_stays_within_four_times_optimal() {
    let value = approx::cx(&h1(), 2.0).unwrap();
    assert!(value <= 12.0, "CX returned {value}, expected <= 12.0 (4x the optimal 2-cut of 3)");
}
