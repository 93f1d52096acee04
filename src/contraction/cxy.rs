//! CXY: samples an edge proportional to `w(e) · delta(n, |e|, k)` and
//! contracts it until every edge's sampling weight has dropped to zero.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;

use super::{binomial, ceil_log, total_weight, ContractionAlgorithm, DeltaCache};
use crate::cut::Cut;
use crate::error::Error;
use crate::{EdgeId, Hypergraph, Result, VertexId};

pub struct Cxy;

impl ContractionAlgorithm for Cxy {
    fn trial(&self, h: &Hypergraph, k: usize, rng: &mut StdRng) -> Result<(Cut, u64)> {
        if !(2..=h.num_vertices()).contains(&k) {
            return Err(Error::invalid_argument(format!(
                "k={k} out of range for a hypergraph with {} vertices",
                h.num_vertices()
            )));
        }

        let initial_weight = total_weight(h)?;
        let mut g = h.clone();
        let mut cache = DeltaCache::new();
        let mut contractions = 0u64;

        loop {
            let n = g.num_vertices();
            if n <= k {
                break;
            }

            let mut candidates: Vec<(EdgeId, f64)> = Vec::new();
            for e in g.edges() {
                let r = g.edge_vertices(e)?.len();
                // Contracting e must not drop the live vertex count below k.
                if n.saturating_sub(r.saturating_sub(1)) < k {
                    continue;
                }
                let d = cache.delta(n, r, k);
                if d > 0.0 {
                    let sampling_weight = g.edge_weight(e)? * d;
                    if sampling_weight > 0.0 {
                        candidates.push((e, sampling_weight));
                    }
                }
            }
            if candidates.is_empty() {
                break;
            }

            let dist = WeightedIndex::new(candidates.iter().map(|&(_, w)| w))
                .map_err(|err| Error::invalid_argument(err.to_string()))?;
            let chosen = candidates[dist.sample(rng)].0;
            g.contract_in_place(chosen)?;
            contractions += 1;
        }

        // A zero-weight k+ partition can leave more than k vertices; merge
        // arbitrary pairs down to exactly k without changing the cut value.
        while g.num_vertices() > k {
            let mut vs: Vec<VertexId> = g.vertices().collect();
            vs.sort_unstable();
            g.contract_vertices_in_place(&vs[..2])?;
            contractions += 1;
        }

        let terminal_weight = total_weight(&g)?;
        let value = initial_weight.min(terminal_weight);

        let mut partitions = Vec::with_capacity(k);
        for v in g.vertices() {
            partitions.push(g.vertices_within(v)?.to_vec());
        }

        Ok((Cut::new(value, partitions), contractions))
    }

    fn default_cap(h: &Hypergraph, k: usize) -> u64 {
        if k < 2 {
            return 1;
        }
        let n = h.num_vertices() as u64;
        let r = 2 * (k as u64 - 1);
        let cap = binomial(n, r) * ceil_log(h.num_vertices()) as f64;
        if cap.is_finite() && cap >= 1.0 {
            cap as u64
        } else {
            1
        }
    }
}
