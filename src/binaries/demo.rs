//! Walks a couple of small hypergraphs through every algorithm in the
//! library and prints what each one finds.

use hypergraph_mincut::contraction::{run, Context, Cxy, Fpz, Kk};
use hypergraph_mincut::ordering::TightenRule;
use hypergraph_mincut::vertex_order_mincut::vertex_order_mincut;
use hypergraph_mincut::{approx, certificate_mincut, Hypergraph};

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

fn main() {
    env_logger::init();

    let h1 = h1();
    log::info!("H1: {h1}");
    for rule in [TightenRule::Kw, TightenRule::Mw, TightenRule::Q] {
        let cut = vertex_order_mincut(&h1, rule).unwrap();
        println!("H1 min 2-cut ({rule:?}): {}", cut.value);
    }

    let exact = certificate_mincut::certificate_mincut(&h1).unwrap();
    println!("H1 certificate-accelerated min 2-cut: {}", exact.value);

    let approx_value = approx::cx(&h1, 2.0).unwrap();
    println!("H1 CX(ε=2.0) approximate min 2-cut: {approx_value}");

    let h2 = h2();
    log::info!("H2: {h2}");
    for k in 2..=5 {
        let ctx = Context::new(k).with_seed(k as u64).with_discovery_value(0.0).with_max_runs(200);
        let (cut, stats) = run(&Cxy, &h2, &ctx).unwrap();
        println!("H2 CXY k={k}: value={} over {} runs", cut.value, stats.runs_performed);
    }

    let ctx = Context::new(2).with_seed(42).with_discovery_value(0.0).with_max_runs(200);
    let (fpz_cut, _) = run(&Fpz, &h2, &ctx).unwrap();
    println!("H2 FPZ k=2: value={}", fpz_cut.value);

    let ctx = Context::new(3).with_seed(7).with_max_runs(200);
    let (kk_cut, _) = run(&Kk, &h2, &ctx).unwrap();
    println!("H2 KK k=3: value={}", kk_cut.value);
}
