//! Randomized contraction-based minimum-k-cut algorithms (CXY, FPZ, KK) and
//! the runner that wraps each of them with a repeat-until-discovery policy.

pub mod cxy;
pub mod fpz;
pub mod kk;
pub mod runner;

pub use cxy::Cxy;
pub use fpz::Fpz;
pub use kk::Kk;
pub use runner::{run, run_with_cutoff, ContractionAlgorithm, Context, RunStats};

use ahash::AHashMap;

use crate::{Hypergraph, Result};

/// `C(n, r)`, computed as `exp(log C(n, r))` to stay numerically stable for
/// the large `n` these algorithms run on.
pub(crate) fn binomial(n: u64, r: u64) -> f64 {
    log_binomial(n, r).exp()
}

/// Sum of the weights of every edge currently in `h`.
pub(crate) fn total_weight(h: &Hypergraph) -> Result<f64> {
    let mut total = 0.0;
    for e in h.edges() {
        total += h.edge_weight(e)?;
    }
    Ok(total)
}

fn log_binomial(n: u64, r: u64) -> f64 {
    if r > n {
        return f64::NEG_INFINITY;
    }
    let mut acc = 0.0;
    for i in 1..=r {
        acc += ((n - r + i) as f64).ln() - (i as f64).ln();
    }
    acc
}

/// Memoizes `delta(n, r, k)` by its three integer inputs: CXY and FPZ both
/// recompute the same ratio for the same `(n, |e|, k)` triple across many
/// edges and many trials as the hypergraph shrinks.
#[derive(Default)]
pub(crate) struct DeltaCache {
    cache: AHashMap<(usize, usize, usize), f64>,
}

impl DeltaCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `delta(n, r, k) = C(n-r, k-2) / C(n, k-2)` when `n >= r+k-2` and
    /// `n >= k-2`, else 0.
    pub(crate) fn delta(&mut self, n: usize, r: usize, k: usize) -> f64 {
        if let Some(&v) = self.cache.get(&(n, r, k)) {
            return v;
        }
        let v = Self::compute(n, r, k);
        self.cache.insert((n, r, k), v);
        v
    }

    fn compute(n: usize, r: usize, k: usize) -> f64 {
        if k < 2 {
            return 0.0;
        }
        let k2 = k - 2;
        if n < r + k2 || n < k2 {
            return 0.0;
        }
        let num = log_binomial((n - r) as u64, k2 as u64);
        let den = log_binomial(n as u64, k2 as u64);
        (num - den).exp()
    }
}

/// `⌈log n⌉`, floored at 1 (used by several default run caps).
pub(crate) fn ceil_log(n: usize) -> u64 {
    if n <= 1 {
        1
    } else {
        (n as f64).ln().ceil().max(1.0) as u64
    }
}
