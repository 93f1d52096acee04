//! KK: pre-contracts down to `1.5·k·rank` vertices by weight-proportional
//! sampling, then repeatedly throws the survivors into k uniformly random
//! non-empty buckets and scores that partition.

use ahash::AHashMap;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{ceil_log, ContractionAlgorithm};
use crate::cut::{cut_value, Cut};
use crate::error::Error;
use crate::{EdgeId, Hypergraph, Result, VertexId};

const ALPHA: f64 = 1.5;

pub struct Kk;

impl ContractionAlgorithm for Kk {
    fn trial(&self, h: &Hypergraph, k: usize, rng: &mut StdRng) -> Result<(Cut, u64)> {
        if !(2..=h.num_vertices()).contains(&k) {
            return Err(Error::invalid_argument(format!(
                "k={k} out of range for a hypergraph with {} vertices",
                h.num_vertices()
            )));
        }

        let rank = h.rank().max(1);
        let threshold = ((ALPHA * k as f64 * rank as f64).ceil() as usize).max(k);

        let mut g = h.clone();
        let mut contractions = 0u64;

        loop {
            if g.num_vertices() <= threshold {
                break;
            }
            let edges: Vec<EdgeId> = g.edges().collect();
            if edges.is_empty() {
                break;
            }
            let weights: Vec<f64> = edges.iter().map(|&e| g.edge_weight(e)).collect::<Result<_>>()?;
            let dist = WeightedIndex::new(&weights).map_err(|err| Error::invalid_argument(err.to_string()))?;
            let candidate = edges[dist.sample(rng)];

            // Never contract past k vertices: a single hyperedge can
            // collapse many vertices at once and would otherwise leave too
            // few survivors to fill k non-empty buckets.
            let endpoints = g.edge_vertices(candidate)?.len();
            if g.num_vertices().saturating_sub(endpoints.saturating_sub(1)) < k {
                break;
            }

            g.contract_in_place(candidate)?;
            contractions += 1;
        }

        let mut survivors: Vec<VertexId> = g.vertices().collect();
        survivors.shuffle(rng);

        let buckets = loop {
            let mut buckets: Vec<Vec<VertexId>> = vec![Vec::new(); k];
            for &v in &survivors {
                buckets[rng.gen_range(0..k)].push(v);
            }
            if buckets.iter().all(|b| !b.is_empty()) {
                break buckets;
            }
        };

        let mut block_of: AHashMap<VertexId, usize> = AHashMap::new();
        for (block, vs) in buckets.iter().enumerate() {
            for &v in vs {
                block_of.insert(v, block);
            }
        }
        let value = cut_value(&g, &block_of)?;

        let mut partitions = Vec::with_capacity(k);
        for vs in &buckets {
            let mut within = Vec::new();
            for &v in vs {
                within.extend_from_slice(g.vertices_within(v)?);
            }
            partitions.push(within);
        }

        Ok((Cut::new(value, partitions), contractions))
    }

    fn default_cap(h: &Hypergraph, k: usize) -> u64 {
        let rank = h.rank().max(1) as i32;
        let n = h.num_vertices() as f64;
        let cap = 2f64.powi(rank) * n.powi(k as i32) * ceil_log(h.num_vertices()) as f64;
        if cap.is_finite() && cap >= 1.0 {
            cap as u64
        } else {
            1
        }
    }
}
