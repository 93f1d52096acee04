//! FPZ / branching contraction: recursively strips k-spanning edges, then
//! samples one edge by weight and recurses on both branches with
//! probability `1 - delta`, mirroring Karger–Stein's recursion-doubling
//! trick for hypergraphs.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::Rng;

use super::{ceil_log, ContractionAlgorithm, DeltaCache};
use crate::cut::Cut;
use crate::error::Error;
use crate::{EdgeId, Hypergraph, Result, VertexId};

pub struct Fpz;

impl ContractionAlgorithm for Fpz {
    fn trial(&self, h: &Hypergraph, k: usize, rng: &mut StdRng) -> Result<(Cut, u64)> {
        if !(2..=h.num_vertices()).contains(&k) {
            return Err(Error::invalid_argument(format!(
                "k={k} out of range for a hypergraph with {} vertices",
                h.num_vertices()
            )));
        }
        let mut cache = DeltaCache::new();
        let mut contractions = 0u64;
        let cut = branching_contract(h.clone(), k, 0.0, rng, &mut cache, &mut contractions)?;
        Ok((cut, contractions))
    }

    fn default_cap(h: &Hypergraph, _k: usize) -> u64 {
        let c = ceil_log(h.num_vertices());
        (c * c).max(1)
    }
}

/// `g` is consumed: every recursive branch below either contracts it in
/// place or hands it off to exactly one deeper call.
fn branching_contract(
    mut g: Hypergraph,
    k: usize,
    mut accumulated: f64,
    rng: &mut StdRng,
    cache: &mut DeltaCache,
    contractions: &mut u64,
) -> Result<Cut> {
    let n = g.num_vertices();
    let spanning_threshold = n.saturating_sub(k) + 2;

    let spanning: Vec<EdgeId> = g
        .edges()
        .filter(|&e| g.edge_vertices(e).map(|vs| vs.len() >= spanning_threshold).unwrap_or(false))
        .collect();
    for e in spanning {
        accumulated += g.edge_weight(e)?;
        g.remove_hyperedge(e)?;
    }

    if g.num_edges() == 0 {
        while g.num_vertices() > k {
            let mut vs: Vec<VertexId> = g.vertices().collect();
            vs.sort_unstable();
            g.contract_vertices_in_place(&vs[..2])?;
            *contractions += 1;
        }
        let mut partitions = Vec::with_capacity(k);
        for v in g.vertices() {
            partitions.push(g.vertices_within(v)?.to_vec());
        }
        return Ok(Cut::new(accumulated, partitions));
    }

    // Contracting a remaining edge must not drop the live vertex count
    // below k; stripping the k-spanning edges above already guarantees
    // this for every edge still here, but the check is kept explicit so
    // the invariant doesn't depend on that reasoning holding elsewhere.
    let edges: Vec<EdgeId> = g
        .edges()
        .filter(|&e| {
            let endpoints = g.edge_vertices(e).map(|vs| vs.len()).unwrap_or(0);
            n.saturating_sub(endpoints.saturating_sub(1)) >= k
        })
        .collect();
    let weights: Vec<f64> = edges.iter().map(|&e| g.edge_weight(e)).collect::<Result<_>>()?;
    let dist = WeightedIndex::new(&weights).map_err(|err| Error::invalid_argument(err.to_string()))?;
    let chosen = edges[dist.sample(rng)];
    let r = g.edge_vertices(chosen)?.len();
    let redo_probability = 1.0 - cache.delta(n, r, k);

    let mut contracted = g.clone();
    contracted.contract_in_place(chosen)?;
    *contractions += 1;

    if rng.gen::<f64>() < redo_probability {
        let from_original = branching_contract(g, k, accumulated, rng, cache, contractions)?;
        let from_contracted = branching_contract(contracted, k, accumulated, rng, cache, contractions)?;
        Ok(if from_original.value <= from_contracted.value {
            from_original
        } else {
            from_contracted
        })
    } else {
        branching_contract(contracted, k, accumulated, rng, cache, contractions)
    }
}
