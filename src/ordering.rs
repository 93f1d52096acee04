//! The vertex-ordering engine: given a hypergraph and a start vertex,
//! produces a total ordering of the live vertices together with the
//! "tightness" value each vertex had at the moment it was popped.
//!
//! Three tighten rules are supported (KW, MW, Q); the loop driving them is
//! identical, so it lives once in [`ordering`] and the rules only differ in
//! what they do to the shared priority queue when a vertex joins the
//! ordering.

use ahash::AHashSet;

use crate::error::Error;
use crate::priority::{BucketQueue, HeapQueue, PriorityQueue};
use crate::{EdgeId, Hypergraph, Result, VertexId};

use ahash::AHashMap;

/// Which tighten rule drives the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TightenRule {
    /// Maximum adjacency.
    Kw,
    /// Tight.
    Mw,
    /// Queyranne: KW then MW at every step.
    Q,
}

/// Computes a KW/MW/Q ordering of `h` starting at `start`.
///
/// Returns the ordering `v_1 = start, v_2, …, v_n` paired with the
/// tightness value recorded when each `v_i` (i ≥ 2) was popped; index 0
/// holds `0.0` since the start vertex is never popped from the queue.
///
/// # Failure
/// `Error::InvalidArgument` if `start` is not a live vertex of `h`.
pub fn ordering(h: &Hypergraph, start: VertexId, rule: TightenRule) -> Result<(Vec<VertexId>, Vec<f64>)> {
    let vertices: Vec<VertexId> = h.vertices().collect();
    if !vertices.contains(&start) {
        return Err(Error::invalid_argument(format!("unknown start vertex {start}")));
    }
    let n = vertices.len();
    let rest: Vec<VertexId> = vertices.into_iter().filter(|&v| v != start).collect();

    let mut queue: Box<dyn PriorityQueue> = if h.is_weighted() {
        Box::new(HeapQueue::new(&rest, 0))
    } else {
        Box::new(BucketQueue::new(&rest, h.num_edges()))
    };

    let mut outside_count: AHashMap<EdgeId, usize> = AHashMap::new();
    if matches!(rule, TightenRule::Mw | TightenRule::Q) {
        for e in h.edges() {
            outside_count.insert(e, h.edge_vertices(e)?.len());
        }
    }

    let mut used_edges: AHashSet<EdgeId> = AHashSet::new();
    let mut ordered: AHashSet<VertexId> = AHashSet::new();

    let mut order = Vec::with_capacity(n);
    let mut tightness = Vec::with_capacity(n);
    order.push(start);
    tightness.push(0.0);
    ordered.insert(start);

    tighten(h, rule, start, queue.as_mut(), &mut used_edges, &mut outside_count, &ordered)?;

    while order.len() < n {
        let (v, key) = queue
            .pop_max()
            .ok_or_else(|| Error::invalid_argument("ordering queue emptied before all vertices were placed"))?;
        order.push(v);
        // Q runs both tighten_kw and tighten_mw on the same edge, so the
        // popped key is twice the true connectivity; halve it back down.
        let key = if rule == TightenRule::Q { key / 2.0 } else { key };
        tightness.push(key);
        ordered.insert(v);
        tighten(h, rule, v, queue.as_mut(), &mut used_edges, &mut outside_count, &ordered)?;
    }

    Ok((order, tightness))
}

fn tighten(
    h: &Hypergraph,
    rule: TightenRule,
    v: VertexId,
    queue: &mut dyn PriorityQueue,
    used_edges: &mut AHashSet<EdgeId>,
    outside_count: &mut AHashMap<EdgeId, usize>,
    ordered: &AHashSet<VertexId>,
) -> Result<()> {
    match rule {
        TightenRule::Kw => tighten_kw(h, v, queue, used_edges, ordered),
        TightenRule::Mw => tighten_mw(h, v, queue, outside_count, ordered),
        TightenRule::Q => {
            tighten_kw(h, v, queue, used_edges, ordered)?;
            tighten_mw(h, v, queue, outside_count, ordered)
        }
    }
}

/// Maximum-adjacency rule: for every unused edge incident on `v`, mark it
/// used and bump every not-yet-ordered endpoint by the edge's weight.
fn tighten_kw(
    h: &Hypergraph,
    v: VertexId,
    queue: &mut dyn PriorityQueue,
    used_edges: &mut AHashSet<EdgeId>,
    ordered: &AHashSet<VertexId>,
) -> Result<()> {
    for &e in h.edges_incident_on(v)? {
        if used_edges.insert(e) {
            let w = h.edge_weight(e)?;
            for &u in h.edge_vertices(e)? {
                if !ordered.contains(&u) {
                    queue.increment(u, w);
                }
            }
        }
    }
    Ok(())
}

/// Tight rule: for every edge incident on `v`, decrement its
/// outside-ordering counter; when exactly one endpoint remains outside,
/// bump that endpoint by the edge's weight.
fn tighten_mw(
    h: &Hypergraph,
    v: VertexId,
    queue: &mut dyn PriorityQueue,
    outside_count: &mut AHashMap<EdgeId, usize>,
    ordered: &AHashSet<VertexId>,
) -> Result<()> {
    for &e in h.edges_incident_on(v)? {
        let Some(count) = outside_count.get_mut(&e) else { continue };
        *count -= 1;
        if *count == 1 {
            let w = h.edge_weight(e)?;
            if let Some(&u) = h.edge_vertices(e)?.iter().find(|&&u| !ordered.contains(&u)) {
                queue.increment(u, w);
            }
        }
    }
    Ok(())
}
